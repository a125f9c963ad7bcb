//! Segmenting: cut a pack and either return the pieces or forward them to a
//! continuation `Mold`.
//!
//! `Shear`, `Incise` and `Enrich` hand their result to an operation; the
//! list-returning building blocks (`Inject`, `Upend`, `Rotate`, `Reverse`)
//! are what the façades expose directly.

use crate::primitives::peano::PeanoSub;
use crate::vessel::Mold;

use super::repack::Concat;
use super::select::{Skip, Take};
use super::{HCons, HNil, List};

// =============================================================================
// Continuation forms
// =============================================================================

/// Drop the first `N` elements and forward the rest to `Op`.
pub trait Shear<N, Op> {
    type Out;
}

impl<L, N, Op> Shear<N, Op> for L
where
    L: Skip<N>,
    Op: Mold<<L as Skip<N>>::Out>,
{
    type Out = <Op as Mold<<L as Skip<N>>::Out>>::Out;
}

/// Forward the `Count` elements that follow index `Start` to `Op`.
pub trait Incise<Start, Count, Op> {
    type Out;
}

impl<L, Start, Count, Op> Incise<Start, Count, Op> for L
where
    L: Skip<Start>,
    <L as Skip<Start>>::Out: Take<Count>,
    Op: Mold<<<L as Skip<Start>>::Out as Take<Count>>::Out>,
{
    type Out = <Op as Mold<<<L as Skip<Start>>::Out as Take<Count>>::Out>>::Out;
}

/// Splice `Q` in at index `N` and forward the result to `Op`.
pub trait Enrich<N, Q, Op> {
    type Out;
}

impl<L, N, Q, Op> Enrich<N, Q, Op> for L
where
    L: Inject<N, Q>,
    Op: Mold<<L as Inject<N, Q>>::Out>,
{
    type Out = <Op as Mold<<L as Inject<N, Q>>::Out>>::Out;
}

// =============================================================================
// List-returning forms
// =============================================================================

/// `L[0..N) ++ Q ++ L[N..len)`.
pub trait Inject<N, Q> {
    type Out: List;
}

impl<L, N, Q> Inject<N, Q> for L
where
    L: Take<N> + Skip<N>,
    <L as Take<N>>::Out: Concat<Q>,
    <<L as Take<N>>::Out as Concat<Q>>::Out: Concat<<L as Skip<N>>::Out>,
{
    type Out = <<<L as Take<N>>::Out as Concat<Q>>::Out as Concat<<L as Skip<N>>::Out>>::Out;
}

/// Replace `[Start, End)` with `Q`.
pub trait Upend<Start, End, Q> {
    type Out: List;
}

impl<L, Start, End, Q> Upend<Start, End, Q> for L
where
    End: PeanoSub<Start>,
    L: Take<Start> + Skip<End>,
    <L as Take<Start>>::Out: Concat<Q>,
    <<L as Take<Start>>::Out as Concat<Q>>::Out: Concat<<L as Skip<End>>::Out>,
{
    type Out = <<<L as Take<Start>>::Out as Concat<Q>>::Out as Concat<<L as Skip<End>>::Out>>::Out;
}

/// `L[K..len) ++ L[0..K)`. `K == 0` and `K == len` are the identity.
pub trait Rotate<K> {
    type Out: List;
}

impl<L, K> Rotate<K> for L
where
    L: Skip<K> + Take<K>,
    <L as Skip<K>>::Out: Concat<<L as Take<K>>::Out>,
{
    type Out = <<L as Skip<K>>::Out as Concat<<L as Take<K>>::Out>>::Out;
}

/// Reverse `Self` onto the front of `Acc`.
pub trait ReverseOnto<Acc> {
    type Out: List;
}

impl<Acc: List> ReverseOnto<Acc> for HNil {
    type Out = Acc;
}

impl<H, T, Acc> ReverseOnto<Acc> for HCons<H, T>
where
    T: ReverseOnto<HCons<H, Acc>>,
{
    type Out = <T as ReverseOnto<HCons<H, Acc>>>::Out;
}

/// Elements in reverse order.
pub trait Reverse {
    type Out: List;
}

impl<L: ReverseOnto<HNil>> Reverse for L {
    type Out = <L as ReverseOnto<HNil>>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;
    use crate::primitives::peano::{D0, D1, D2, D3};
    use crate::vessel::Capsule;

    type P = pack![u8, u16, u32];

    #[test]
    fn test_continuations() {
        crate::assert_same!(<P as Shear<D1, Capsule>>::Out, Capsule<pack![u16, u32]>);
        crate::assert_same!(<P as Incise<D1, D1, Capsule>>::Out, Capsule<pack![u16]>);
        crate::assert_same!(
            <P as Enrich<D1, pack![char], Capsule>>::Out,
            Capsule<pack![u8, char, u16, u32]>
        );
    }

    #[test]
    fn test_degenerate_cuts() {
        // Nothing left after the cut.
        crate::assert_same!(<P as Shear<D3, Capsule>>::Out, Capsule);
        crate::assert_same!(<P as Shear<D0, Capsule>>::Out, Capsule<P>);
        // Empty slices, at the end and in the middle.
        crate::assert_same!(<P as Incise<D3, D0, Capsule>>::Out, Capsule);
        crate::assert_same!(<P as Incise<D1, D0, Capsule>>::Out, Capsule);
        crate::assert_same!(<P as Incise<D0, D3, Capsule>>::Out, Capsule<P>);
        // Splices at both ends.
        crate::assert_same!(
            <P as Enrich<D0, pack![char], Capsule>>::Out,
            Capsule<pack![char, u8, u16, u32]>
        );
        crate::assert_same!(
            <P as Enrich<D3, pack![char], Capsule>>::Out,
            Capsule<pack![u8, u16, u32, char]>
        );
        crate::assert_same!(<P as Enrich<D2, HNil, Capsule>>::Out, Capsule<P>);
    }

    #[test]
    fn test_inject_endpoints() {
        crate::assert_same!(<P as Inject<D0, pack![char]>>::Out, pack![char, u8, u16, u32]);
        crate::assert_same!(<P as Inject<D3, pack![char]>>::Out, pack![u8, u16, u32, char]);
    }

    #[test]
    fn test_upend() {
        crate::assert_same!(<P as Upend<D1, D2, pack![i8, i16]>>::Out, pack![u8, i8, i16, u32]);
        crate::assert_same!(<P as Upend<D1, D1, HNil>>::Out, P);
    }

    #[test]
    fn test_rotate_reverse() {
        crate::assert_same!(<P as Rotate<D0>>::Out, P);
        crate::assert_same!(<P as Rotate<D3>>::Out, P);
        crate::assert_same!(<P as Rotate<D1>>::Out, pack![u16, u32, u8]);
        crate::assert_same!(<P as Reverse>::Out, pack![u32, u16, u8]);
        crate::assert_same!(<HNil as Reverse>::Out, HNil);
    }
}
