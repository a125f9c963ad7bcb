//! Peano naturals: the counting device behind every positional operation.
//!
//! `Skip<D3>` peels exactly three cons cells off a pack, the same way a
//! prefix of ignorable parameters consumes the first three arguments of a
//! deduced call. Literal indices enter through `Idx<N>`:
//!
//! ```
//! use tola_packs::primitives::peano::{Nat, Peano, D3};
//!
//! tola_packs::assert_same!(Nat<3>, D3);
//! assert_eq!(<Nat<3> as Peano>::VALUE, 3);
//! ```
//!
//! `Nat<N>` normalizes through `N` nested `S<..>`, so the default
//! `recursion_limit` of 128 stops at `Nat<126>`. Crates using indices of 127
//! or more need `#![recursion_limit = "1024"]`. Nothing above 256 exists:
//!
//! ```compile_fail
//! use tola_packs::primitives::peano::{Nat, Peano};
//!
//! assert_eq!(<Nat<257> as Peano>::VALUE, 257);
//! ```

use core::marker::PhantomData;

use super::bool::{Absent, Bool, Present};

/// Peano number trait
pub trait Peano: 'static {
    const VALUE: usize;
}

/// Zero (base case)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Z;
impl Peano for Z {
    const VALUE: usize = 0;
}

/// Successor (S<N> = N + 1)
pub struct S<N>(PhantomData<N>);
impl<N: Peano> Peano for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Literal index carrier; `ToPeano` turns it into `Z`/`S` form.
pub struct Idx<const N: usize>;

/// Map a literal index to its Peano form.
#[diagnostic::on_unimplemented(
    message = "index `{Self}` is above the supported ceiling",
    label = "literal indices are generated for 0..=256",
    note = "Indices of 127 or more also need `#![recursion_limit = \"1024\"]`; build larger indices from `S<..>` and `PeanoAdd` directly."
)]
pub trait ToPeano {
    type Out: Peano;
}

/// The Peano form of a literal.
pub type Nat<const N: usize> = <Idx<N> as ToPeano>::Out;

// D0 = Z, D1 = S<D0>, ..., D256, plus `ToPeano for Idx<n>`.
macros::peano!(256);

// =============================================================================
// Arithmetic
// =============================================================================

/// Addition.
pub trait PeanoAdd<Rhs> {
    type Out: Peano;
}

impl<N: Peano> PeanoAdd<N> for Z {
    type Out = N;
}

impl<M, N> PeanoAdd<N> for S<M>
where
    M: PeanoAdd<N>,
{
    type Out = S<<M as PeanoAdd<N>>::Out>;
}

/// Subtraction, defined only when `Self >= Rhs`.
#[diagnostic::on_unimplemented(
    message = "cannot subtract `{Rhs}` from `{Self}`",
    label = "the range end lies before its start",
    note = "Ranges are written `[Start, End)` and need `Start <= End`."
)]
pub trait PeanoSub<Rhs> {
    type Out: Peano;
}

impl<N: Peano> PeanoSub<Z> for N {
    type Out = N;
}

impl<M, N> PeanoSub<S<N>> for S<M>
where
    M: PeanoSub<N>,
{
    type Out = <M as PeanoSub<N>>::Out;
}

// =============================================================================
// Comparison
// =============================================================================

/// Equality.
pub trait PeanoEq<Rhs> {
    type Out: Bool;
}

impl PeanoEq<Z> for Z {
    type Out = Present;
}

impl<N> PeanoEq<S<N>> for Z {
    type Out = Absent;
}

impl<M> PeanoEq<Z> for S<M> {
    type Out = Absent;
}

impl<M, N> PeanoEq<S<N>> for S<M>
where
    M: PeanoEq<N>,
{
    type Out = <M as PeanoEq<N>>::Out;
}

/// Strictly less than.
pub trait PeanoLt<Rhs> {
    type Out: Bool;
}

impl PeanoLt<Z> for Z {
    type Out = Absent;
}

impl<N> PeanoLt<S<N>> for Z {
    type Out = Present;
}

impl<M> PeanoLt<Z> for S<M> {
    type Out = Absent;
}

impl<M, N> PeanoLt<S<N>> for S<M>
where
    M: PeanoLt<N>,
{
    type Out = <M as PeanoLt<N>>::Out;
}

// =============================================================================
// Halving (binary doubling support)
// =============================================================================

/// `Self = 2 * Half + Odd`.
pub trait Halve {
    type Half: Peano;
    type Odd: Bool;
}

impl Halve for Z {
    type Half = Z;
    type Odd = Absent;
}

impl Halve for S<Z> {
    type Half = Z;
    type Odd = Present;
}

impl<N: Halve> Halve for S<S<N>> {
    type Half = S<N::Half>;
    type Odd = N::Odd;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(<D0 as Peano>::VALUE, 0);
        assert_eq!(<D17 as Peano>::VALUE, 17);
        assert_eq!(<Nat<42> as Peano>::VALUE, 42);
    }

    #[test]
    fn test_arithmetic() {
        crate::assert_same!(<D3 as PeanoAdd<D4>>::Out, D7);
        crate::assert_same!(<D7 as PeanoSub<D3>>::Out, D4);
        crate::assert_same!(<D5 as PeanoSub<D5>>::Out, D0);
    }

    #[test]
    fn test_comparison() {
        assert!(<<D6 as PeanoEq<D6>>::Out as Bool>::VALUE);
        assert!(!<<D6 as PeanoEq<D2>>::Out as Bool>::VALUE);
        assert!(<<D2 as PeanoLt<D6>>::Out as Bool>::VALUE);
        assert!(!<<D6 as PeanoLt<D6>>::Out as Bool>::VALUE);
    }

    #[test]
    fn test_halve() {
        crate::assert_same!(<D9 as Halve>::Half, D4);
        assert!(<<D9 as Halve>::Odd as Bool>::VALUE);
        crate::assert_same!(<D8 as Halve>::Half, D4);
        assert!(!<<D8 as Halve>::Odd as Bool>::VALUE);
    }
}
