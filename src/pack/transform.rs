//! Element rewriting: map, positional modify, zip, and index picking.

use crate::primitives::bool::{Absent, Bool, Present};
use crate::primitives::peano::{PeanoEq, S, Z};
use crate::vessel::Func;

use super::select::Get;
use super::{HCons, HNil, List};

/// Apply `F` to every element.
pub trait Map<F> {
    type Out: List;
}

impl<F> Map<F> for HNil {
    type Out = HNil;
}

impl<F, H, T> Map<F> for HCons<H, T>
where
    F: Func<H>,
    T: Map<F>,
{
    type Out = HCons<<F as Func<H>>::Out, <T as Map<F>>::Out>;
}

// =============================================================================
// Positional modify
// =============================================================================

/// Does the index pack `Self` list `I`?
pub trait HasIndex<I> {
    type Out: Bool;
}

impl<I> HasIndex<I> for HNil {
    type Out = Absent;
}

impl<I, P, Rest> HasIndex<I> for HCons<P, Rest>
where
    P: PeanoEq<I>,
    Rest: HasIndex<I>,
{
    type Out = <<P as PeanoEq<I>>::Out as Bool>::Or<<Rest as HasIndex<I>>::Out>;
}

/// `F(X)` when `Self` is `Present`, `X` otherwise.
///
/// `F` is only required to accept the elements it is actually applied to.
pub trait ApplyIf<F, X> {
    type Out;
}

impl<F, X> ApplyIf<F, X> for Absent {
    type Out = X;
}

impl<F: Func<X>, X> ApplyIf<F, X> for Present {
    type Out = <F as Func<X>>::Out;
}

/// `Modify` with the running index `I` of the first element.
pub trait ModifyFrom<F, Positions, I> {
    type Out: List;
}

impl<F, Positions, I> ModifyFrom<F, Positions, I> for HNil {
    type Out = HNil;
}

impl<F, Positions, I, H, T> ModifyFrom<F, Positions, I> for HCons<H, T>
where
    Positions: HasIndex<I>,
    <Positions as HasIndex<I>>::Out: ApplyIf<F, H>,
    T: ModifyFrom<F, Positions, S<I>>,
{
    type Out = HCons<
        <<Positions as HasIndex<I>>::Out as ApplyIf<F, H>>::Out,
        <T as ModifyFrom<F, Positions, S<I>>>::Out,
    >;
}

/// Apply `F` only at the indices listed in `Positions`; everything else is
/// left untouched. Indices past the end are ignored.
pub trait Modify<F, Positions> {
    type Out: List;
}

impl<L, F, Positions> Modify<F, Positions> for L
where
    L: ModifyFrom<F, Positions, Z>,
{
    type Out = <L as ModifyFrom<F, Positions, Z>>::Out;
}

// =============================================================================
// Zip
// =============================================================================

/// Pair elements up as 2-tuples.
///
/// ```compile_fail
/// use tola_packs::prelude::*;
///
/// type T = <pack![u8, u16] as Zip<pack![char]>>::Out;
/// let _: Option<T> = None;
/// ```
#[diagnostic::on_unimplemented(
    message = "cannot zip `{Self}` with `{Rhs}`",
    label = "packs differ in length"
)]
pub trait Zip<Rhs> {
    type Out: List;
}

impl Zip<HNil> for HNil {
    type Out = HNil;
}

impl<A, TA, B, TB> Zip<HCons<B, TB>> for HCons<A, TA>
where
    TA: Zip<TB>,
{
    type Out = HCons<(A, B), <TA as Zip<TB>>::Out>;
}

/// Combine paired elements with `F: Func<(A, B)>`.
#[diagnostic::on_unimplemented(
    message = "cannot zip `{Self}` with `{Rhs}`",
    label = "packs differ in length"
)]
pub trait ZipWith<Rhs, F> {
    type Out: List;
}

impl<F> ZipWith<HNil, F> for HNil {
    type Out = HNil;
}

impl<A, TA, B, TB, F> ZipWith<HCons<B, TB>, F> for HCons<A, TA>
where
    F: Func<(A, B)>,
    TA: ZipWith<TB, F>,
{
    type Out = HCons<<F as Func<(A, B)>>::Out, <TA as ZipWith<TB, F>>::Out>;
}

// =============================================================================
// Among
// =============================================================================

/// Pick `L[p]` for each index `p` in `Self`.
pub trait PickFrom<L> {
    type Out: List;
}

impl<L> PickFrom<L> for HNil {
    type Out = HNil;
}

impl<L, P, Rest> PickFrom<L> for HCons<P, Rest>
where
    L: Get<P>,
    Rest: PickFrom<L>,
{
    type Out = HCons<<L as Get<P>>::Out, <Rest as PickFrom<L>>::Out>;
}

/// Elements at the listed indices, in the listed order.
pub trait Among<Positions> {
    type Out: List;
}

impl<L, Positions: PickFrom<L>> Among<Positions> for L {
    type Out = <Positions as PickFrom<L>>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idx;
    use crate::pack;

    struct Boxed;
    impl<X> Func<X> for Boxed {
        type Out = Option<X>;
    }

    /// Only accepts `u16`.
    struct Widen;
    impl Func<u16> for Widen {
        type Out = u32;
    }

    struct Pick;
    impl<A, B> Func<(A, B)> for Pick {
        type Out = B;
    }

    #[test]
    fn test_map() {
        crate::assert_same!(<pack![u8, char] as Map<Boxed>>::Out, pack![Option<u8>, Option<char>]);
    }

    #[test]
    fn test_modify_only_touches_listed_positions() {
        crate::assert_same!(
            <pack![u8, u16, i8, u16] as Modify<Widen, idx![1, 3]>>::Out,
            pack![u8, u32, i8, u32]
        );
        crate::assert_same!(<pack![u8, u16] as Modify<Boxed, HNil>>::Out, pack![u8, u16]);
    }

    #[test]
    fn test_zip() {
        crate::assert_same!(
            <pack![u8, u16] as Zip<pack![i8, i16]>>::Out,
            pack![(u8, i8), (u16, i16)]
        );
        crate::assert_same!(<pack![u8, u16] as ZipWith<pack![i8, i16], Pick>>::Out, pack![i8, i16]);
    }

    #[test]
    fn test_among() {
        crate::assert_same!(<pack![u8, u16, u32] as Among<idx![2, 0, 2]>>::Out, pack![u32, u8, u32]);
    }
}
