//! # Concepts
//!
//! Compile-time predicates over what a type can do.
//!
//! In generic code the concepts are plain bounds: `Op: Moldly`,
//! `Op: Pagely`, `F: Nonoverloaded`. For concrete types the probe macros
//! answer with a `bool` instead of a compile error:
//!
//! ```
//! use tola_packs::prelude::*;
//! use tola_packs::{is_moldly, is_pageless, is_nonoverloaded_function_object};
//!
//! assert!(is_moldly!(Capsule));
//! assert!(is_pageless!(Capsule));
//! assert!(is_nonoverloaded_function_object!(fn(u8) -> u16));
//! ```
//!
//! ## Limitation
//!
//! Probes only work for **concrete types** known at the call site.

pub mod autoref;
pub mod function;

pub use autoref::Detect;
pub use function::Nonoverloaded;
