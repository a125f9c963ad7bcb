//! # Layer 0: Primitives
//!
//! Basic building blocks for pack algorithms:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `stream.rs`: Infinite nibble streams used as identity keys.
//! - `peano.rs`: Peano naturals, the index and length currency.

pub mod bool;
pub mod nibble;
pub mod stream;
pub mod peano;
pub mod const_utils;

// Re-export key types at this level
pub use bool::{Bool, Present, Absent, BoolAnd, BoolOr, BoolNot, SelectBool};
pub use nibble::{Nibble, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF, NibbleEq};
pub use stream::{HashStream, Cons, ConstStream, Zeros, StreamEq, CompareDepth};
pub use peano::{Peano, Z, S, Idx, ToPeano, Nat, PeanoAdd, PeanoSub, PeanoEq, PeanoLt, Halve};
