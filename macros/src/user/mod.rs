//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Element)]` | on struct/enum | Give a type an identity stream |

pub mod element;

pub use element::expand_derive_element;
