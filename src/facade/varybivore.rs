//! Value packs.
//!
//! A value pack is a pack of `Val` carriers, so every type-pack spelling
//! applies unchanged; this module re-exports them and adds the value-only
//! pieces.
//!
//! ```
//! use tola_packs::prelude::*;
//! use tola_packs::facade::varybivore::CognateModify;
//!
//! type Negated = CognateModify<Shuttle, UnaryMinus, idx![1, 3, 5], vals![0, 1, 2, 3, 4, 5]>;
//! tola_packs::assert_same!(Negated, Shuttle<vals![0, -1, 2, -3, 4, -5]>);
//! assert_eq!(<Shuttle<vals![0, -1, 2]> as Recite>::values(), vec![0, -1, 2]);
//! ```

pub use super::typelivore::{
    Amid, AreDistinct, Find, Flip, Gauge, Has, Inject, KindredFind, Prefix, Reiterate, Rotate,
    Slice, Transform, Trim, Upend, Zip,
};
pub use crate::value::{UnaryMinus, Val, Value, ValueList};

/// Apply `F` at `Positions` of the value pack `L`, then hand the result to
/// the `Page` `Op`.
pub type CognateModify<Op, F, Positions, L> =
    <Op as crate::vessel::Page<<L as crate::pack::Modify<F, Positions>>::Out>>::Out;

/// `Val` repeated `N` times.
pub type Repeat<V, const N: usize> = super::typelivore::Repeat<V, N>;

/// Negate every value.
pub type Negate<L> = <L as crate::pack::Map<UnaryMinus>>::Out;

/// Sum of the carried values, evaluated at compile time.
pub const fn sum<L: crate::inspect::Recite>() -> i128 {
    L::SUM
}
