#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables collecting reflection helpers in no_std
// - detect: enables concept probe macros

//! # tola-packs
//!
//! Compile-time pack algorithms on stable Rust.
//!
//! A pack is an inductive type-level list. Slicing, rotating, injecting,
//! folding, searching and repacking are traits whose `Out` associated type
//! the compiler computes while type checking; nothing runs at runtime.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), Nibble (X0-XF), Stream, Peano (D0-D256) |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Packs                                                   |
//! |  - HCons/HNil, selection, segments, folds, search                 |
//! |  - Element identity, value carriers, vessels and flavors          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Façades and concepts                                    |
//! |  - typelivore, varybivore, mouldivore, pagelivore, omennivore     |
//! |  - Moldly / Pagely / Nonoverloaded probes                         |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ### Identity
//! Stable Rust cannot compare two generic types for equality, so searchable
//! leaf types carry a nibble stream (`Element`) and the crate's own
//! constructors are compared by structure (`Identity`). Two leaves are the
//! same when their streams agree up to `CompareDepth` nibbles.
//!
//! ### Values
//! A value pack is a pack of `Val` carriers that spell a literal's kind,
//! sign and digits out in nibbles, so values take part in the same
//! algorithms as types.
//!
//! ## Quick Start
//!
//! ```
//! use tola_packs::prelude::*;
//! use tola_packs::facade::typelivore::{Inject, Slice};
//!
//! #[derive(Element)]
//! struct Meter;
//!
//! type P = pack![u8, Meter, char];
//!
//! tola_packs::assert_same!(Slice<P, 1, 3>, pack![Meter, char]);
//! tola_packs::assert_same!(Inject<P, 1, pack![bool]>, pack![u8, bool, Meter, char]);
//! assert!(<<P as Has<Meter>>::Out as Bool>::VALUE);
//! assert_eq!(<<P as Find<char>>::Out as Peano>::VALUE, 2);
//! ```
//!
//! ## Limits
//!
//! Literal indices are generated for `0..=256`. With the default
//! `recursion_limit` of 128 only indices up to 126 resolve; crates using
//! larger indices, or packs of more than a few dozen elements, need
//! `#![recursion_limit = "1024"]`.

// Allow `::tola_packs` to work inside the crate itself
extern crate self as tola_packs;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the concept probes
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Packs, identities, values, vessels
// =============================================================================
pub mod pack;
pub mod element;
pub mod value;
pub mod vessel;
pub mod inspect;

// =============================================================================
// Layer 2: Façades and concepts
// =============================================================================
pub mod facade;

#[cfg(feature = "detect")]
pub mod detect;

// Syntax macros (pack!, idx!, assert_same!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Absent, Bool, Present};
pub use primitives::peano::{Nat, Peano, S, Z};
pub use pack::{HCons, HNil, List};
pub use element::Element;
pub use value::{Val, Value};
pub use vessel::{Func, Mold, Page};

// Re-export proc-macros
pub use macros::{Element, element_stream, make_routing_stream, val, vals};

// =============================================================================
// Declarative Macro Bridge for #[derive(Element)]
// =============================================================================
//
// Three-layer macro architecture to get module_path!() into proc-macros:
// 1. #[derive(Element)] (proc-macro) generates __impl_element! call
// 2. __impl_element! (this decl-macro) expands concat!(module_path!(), ...)
// 3. make_routing_stream! (proc-macro) hashes it through const fn
//
// module_path!() stops at the enclosing module, so the derive site
// (file, line, column) is hashed too: a fn-local `Meter` must not collide
// with a module-level one.

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(Element)] instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_element {
    ($ty:ty, $name:expr) => {
        impl $crate::element::Element for $ty {
            type Stream = $crate::make_routing_stream!(concat!(
                module_path!(), "::", $name, "@", file!(), ":", line!(), ":", column!()
            ));
        }
    };
}

/// Common items for working with packs.
pub mod prelude {
    pub use crate::primitives::bool::{Absent, Bool, Present};
    pub use crate::primitives::peano::{Idx, Nat, Peano, ToPeano, S, Z};
    pub use crate::pack::{
        // Core
        HCons, HNil, IntoTuple, List, Tuple,
        // Selection and segments
        Get, Range, Skip, Take, Enrich, Incise, Inject, Reverse, Rotate, Shear, Upend,
        // Repack and repetition
        Concat, Flatten, Reiterate,
        // Folds and transforms
        ClassicTrek, FoldLeft, FoldLeftFirst, FoldRight, FoldRightLast, MoldTrek, Trek,
        Among, Map, Modify, Zip, ZipWith,
        // Search
        AreDistinct, Count, Filter, Find, Has, Interview, KindredFind, RightInterview, Same,
    };
    pub use crate::element::{Element, Identity};
    pub use crate::value::{UnaryMinus, Val, Value, ValueList};
    pub use crate::vessel::{
        AsList, AsMold, Capsule, Convoy, Flavor, Func, Kindred, Mold, Moldly, Page, Pagely,
        Shuttle, Trolley, Vessel,
    };
    pub use crate::inspect::{Inspect, Recite};
    pub use crate::{assert_same, idx, pack};
    pub use macros::{Element, val, vals};
}
