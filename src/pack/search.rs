//! Queries over packs: identity, membership, search, filtering and
//! distinctness.
//!
//! Identity goes through `Identity` keys: `Element` streams for leaf types,
//! structure for Peano numbers, packs, tuples and vessels. Predicates are
//! `Func`s answering with a `Bool`.
//!
//! Search results are indices; "not found" is the pack length, so the result
//! can always feed straight into `Skip` or `Take`.

use crate::element::{Identity, KeyEq};
use crate::primitives::bool::{Absent, Bool, Present};
use crate::primitives::peano::{Peano, S, Z};
use crate::vessel::Func;

use super::{HCons, HNil, List};

// =============================================================================
// Identity
// =============================================================================

/// `Present` iff `Self` and `Other` have the same identity key.
pub trait Same<Other> {
    type Out: Bool;
}

impl<A, B> Same<B> for A
where
    A: Identity,
    B: Identity,
    A::Key: KeyEq<B::Key>,
{
    type Out = <A::Key as KeyEq<B::Key>>::Out;
}

// =============================================================================
// Membership
// =============================================================================

/// `Present` iff some element is the same as `X`.
pub trait Has<X> {
    type Out: Bool;
}

impl<X> Has<X> for HNil {
    type Out = Absent;
}

impl<X, H, T> Has<X> for HCons<H, T>
where
    H: Same<X>,
    T: Has<X>,
{
    type Out = <<H as Same<X>>::Out as Bool>::Or<<T as Has<X>>::Out>;
}

/// Number of elements that are the same as `X`.
pub trait Count<X> {
    type Out: Peano;
}

/// `S<N>` when `Self` is `Present`, `N` otherwise.
pub trait SuccIf<N> {
    type Out: Peano;
}

impl<N: Peano> SuccIf<N> for Absent {
    type Out = N;
}

impl<N: Peano> SuccIf<N> for Present {
    type Out = S<N>;
}

impl<X> Count<X> for HNil {
    type Out = Z;
}

impl<X, H, T> Count<X> for HCons<H, T>
where
    H: Same<X>,
    T: Count<X>,
    <H as Same<X>>::Out: SuccIf<<T as Count<X>>::Out>,
{
    type Out = <<H as Same<X>>::Out as SuccIf<<T as Count<X>>::Out>>::Out;
}

/// `Present` iff no two elements are the same.
pub trait AreDistinct {
    type Out: Bool;
}

impl AreDistinct for HNil {
    type Out = Present;
}

impl<H, T> AreDistinct for HCons<H, T>
where
    T: Has<H> + AreDistinct,
{
    type Out = <<<T as Has<H>>::Out as Bool>::Not as Bool>::And<<T as AreDistinct>::Out>;
}

// =============================================================================
// Search
// =============================================================================

/// Stop at `Z` on a hit, otherwise keep searching the tail.
///
/// The tail is only inspected after a miss.
pub trait FindDispatch<Tail, X> {
    type Out: Peano;
}

impl<Tail, X> FindDispatch<Tail, X> for Present {
    type Out = Z;
}

impl<Tail, X> FindDispatch<Tail, X> for Absent
where
    Tail: Find<X>,
{
    type Out = S<<Tail as Find<X>>::Out>;
}

/// Index of the first element that is the same as `X`; the length when
/// there is none.
pub trait Find<X> {
    type Out: Peano;
}

impl<X> Find<X> for HNil {
    type Out = Z;
}

impl<X, H, T> Find<X> for HCons<H, T>
where
    H: Same<X>,
    <H as Same<X>>::Out: FindDispatch<T, X>,
{
    type Out = <<H as Same<X>>::Out as FindDispatch<T, X>>::Out;
}

/// Prepend `Item` to `Rest` when `Self` is `Present`.
pub trait PrependIf<Item, Rest> {
    type Out: List;
}

impl<Item, Rest: List> PrependIf<Item, Rest> for Absent {
    type Out = Rest;
}

impl<Item, Rest: List> PrependIf<Item, Rest> for Present {
    type Out = HCons<Item, Rest>;
}

/// `KindredFind` with the running index `I`.
pub trait KindredFindFrom<X, I> {
    type Out: List;
}

impl<X, I> KindredFindFrom<X, I> for HNil {
    type Out = HNil;
}

impl<X, I, H, T> KindredFindFrom<X, I> for HCons<H, T>
where
    H: Same<X>,
    T: KindredFindFrom<X, S<I>>,
    <H as Same<X>>::Out: PrependIf<I, <T as KindredFindFrom<X, S<I>>>::Out>,
{
    type Out = <<H as Same<X>>::Out as PrependIf<I, <T as KindredFindFrom<X, S<I>>>::Out>>::Out;
}

/// Every index whose element is the same as `X`, ascending.
pub trait KindredFind<X> {
    type Out: List;
}

impl<L: KindredFindFrom<X, Z>, X> KindredFind<X> for L {
    type Out = <L as KindredFindFrom<X, Z>>::Out;
}

/// Predicate twin of `FindDispatch`.
pub trait InterviewDispatch<Tail, P> {
    type Out: Peano;
}

impl<Tail, P> InterviewDispatch<Tail, P> for Present {
    type Out = Z;
}

impl<Tail, P> InterviewDispatch<Tail, P> for Absent
where
    Tail: Interview<P>,
{
    type Out = S<<Tail as Interview<P>>::Out>;
}

/// Index of the first element satisfying `P`; the length when none does.
pub trait Interview<P> {
    type Out: Peano;
}

impl<P> Interview<P> for HNil {
    type Out = Z;
}

impl<P, H, T> Interview<P> for HCons<H, T>
where
    P: Func<H>,
    <P as Func<H>>::Out: InterviewDispatch<T, P>,
{
    type Out = <<P as Func<H>>::Out as InterviewDispatch<T, P>>::Out;
}

/// `RightInterview` state: running index `I`, best hit so far `Best`.
pub trait RightInterviewFrom<P, I, Best> {
    type Out: Peano;
}

impl<P, I, Best: Peano> RightInterviewFrom<P, I, Best> for HNil {
    type Out = Best;
}

impl<P, I, Best, H, T> RightInterviewFrom<P, I, Best> for HCons<H, T>
where
    P: Func<H>,
    <P as Func<H>>::Out: Bool,
    T: RightInterviewFrom<P, S<I>, <<P as Func<H>>::Out as Bool>::If<I, Best>>,
{
    type Out = <T as RightInterviewFrom<P, S<I>, <<P as Func<H>>::Out as Bool>::If<I, Best>>>::Out;
}

/// Index of the last element satisfying `P`; the length when none does.
pub trait RightInterview<P> {
    type Out: Peano;
}

impl<L, P> RightInterview<P> for L
where
    L: List + RightInterviewFrom<P, Z, <L as List>::Len>,
{
    type Out = <L as RightInterviewFrom<P, Z, <L as List>::Len>>::Out;
}

/// Elements satisfying `P`, in order.
pub trait Filter<P> {
    type Out: List;
}

impl<P> Filter<P> for HNil {
    type Out = HNil;
}

impl<P, H, T> Filter<P> for HCons<H, T>
where
    P: Func<H>,
    T: Filter<P>,
    <P as Func<H>>::Out: PrependIf<H, <T as Filter<P>>::Out>,
{
    type Out = <<P as Func<H>>::Out as PrependIf<H, <T as Filter<P>>::Out>>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;
    use crate::primitives::peano::{D0, D1, D2, D3, D4};

    /// `Present` for unsigned integers.
    struct IsUnsigned;
    macro_rules! unsigned {
        ($($t:ty => $b:ty),*) => { $(impl Func<$t> for IsUnsigned { type Out = $b; })* };
    }
    unsigned!(u8 => Present, u16 => Present, i8 => Absent, i16 => Absent, char => Absent);

    type P = pack![u8, i8, u16, i8];

    #[test]
    fn test_same() {
        assert!(<<u8 as Same<u8>>::Out as Bool>::VALUE);
        assert!(!<<u8 as Same<i8>>::Out as Bool>::VALUE);
    }

    #[test]
    fn test_has_count() {
        assert!(<<P as Has<u16>>::Out as Bool>::VALUE);
        assert!(!<<P as Has<char>>::Out as Bool>::VALUE);
        assert!(!<<HNil as Has<char>>::Out as Bool>::VALUE);
        crate::assert_same!(<P as Count<i8>>::Out, D2);
    }

    #[test]
    fn test_find() {
        crate::assert_same!(<P as Find<i8>>::Out, D1);
        crate::assert_same!(<P as Find<char>>::Out, D4);
        crate::assert_same!(<P as KindredFind<i8>>::Out, pack![D1, D3]);
        crate::assert_same!(<P as KindredFind<char>>::Out, HNil);
    }

    #[test]
    fn test_interview() {
        crate::assert_same!(<P as Interview<IsUnsigned>>::Out, D0);
        crate::assert_same!(<P as RightInterview<IsUnsigned>>::Out, D2);
        crate::assert_same!(<pack![i8, char] as RightInterview<IsUnsigned>>::Out, D2);
        crate::assert_same!(<P as Filter<IsUnsigned>>::Out, pack![u8, u16]);
    }

    #[test]
    fn test_are_distinct() {
        assert!(<<pack![u8, i8, u16] as AreDistinct>::Out as Bool>::VALUE);
        assert!(!<<P as AreDistinct>::Out as Bool>::VALUE);
        assert!(<<HNil as AreDistinct>::Out as Bool>::VALUE);
    }
}
