//! Repetition by binary doubling.
//!
//! `Reiterate<N>` halves `N`, repeats the pack `N / 2` times, pastes that
//! result to itself and appends one more copy when `N` is odd.

use crate::primitives::bool::{Absent, Present};
use crate::primitives::peano::{Halve, Peano, S, Z};

use super::repack::Concat;
use super::{HCons, HNil, List};

/// Append `Extra` to `Front` when `Self` is `Present`.
pub trait AppendIf<Front, Extra> {
    type Out: List;
}

impl<Front: List, Extra> AppendIf<Front, Extra> for Absent {
    type Out = Front;
}

impl<Front, Extra> AppendIf<Front, Extra> for Present
where
    Front: Concat<Extra>,
{
    type Out = <Front as Concat<Extra>>::Out;
}

/// `Self` repeated `N` times.
pub trait Reiterate<N> {
    type Out: List;
}

impl<L: List> Reiterate<Z> for L {
    type Out = HNil;
}

impl<L, M> Reiterate<S<M>> for L
where
    S<M>: Halve,
    L: Reiterate<<S<M> as Halve>::Half>,
    <L as Reiterate<<S<M> as Halve>::Half>>::Out: Concat<<L as Reiterate<<S<M> as Halve>::Half>>::Out>,
    <S<M> as Halve>::Odd: AppendIf<
        <<L as Reiterate<<S<M> as Halve>::Half>>::Out as Concat<
            <L as Reiterate<<S<M> as Halve>::Half>>::Out,
        >>::Out,
        L,
    >,
{
    type Out = <<S<M> as Halve>::Odd as AppendIf<
        <<L as Reiterate<<S<M> as Halve>::Half>>::Out as Concat<
            <L as Reiterate<<S<M> as Halve>::Half>>::Out,
        >>::Out,
        L,
    >>::Out;
}

/// `T` repeated `N` times.
pub type Repeat<T, N> = <HCons<T, HNil> as Reiterate<N>>::Out;

/// Count `Self` elements upward from `From`: `[From, From + 1, ..]`.
pub trait Ascend<From> {
    type Out: List;
}

impl<From> Ascend<From> for Z {
    type Out = HNil;
}

impl<C, From> Ascend<From> for S<C>
where
    C: Ascend<S<From>>,
{
    type Out = HCons<From, <C as Ascend<S<From>>>::Out>;
}

/// `[D0, D1, .., D(N-1)]`.
pub type Iota<N> = <N as Ascend<Z>>::Out;

/// Length of `Reiterate<N>` without building it.
pub const fn reiterated_len<L: List, N: Peano>() -> usize {
    L::LEN * N::VALUE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;
    use crate::primitives::peano::{D0, D1, D2, D3, D4, D5};

    #[test]
    fn test_reiterate() {
        crate::assert_same!(<pack![u8, u16] as Reiterate<D0>>::Out, HNil);
        crate::assert_same!(<pack![u8, u16] as Reiterate<D1>>::Out, pack![u8, u16]);
        crate::assert_same!(
            <pack![u8, u16] as Reiterate<D3>>::Out,
            pack![u8, u16, u8, u16, u8, u16]
        );
    }

    #[test]
    fn test_repeat_and_iota() {
        crate::assert_same!(Repeat<char, D4>, pack![char, char, char, char]);
        crate::assert_same!(Iota<D3>, pack![D0, D1, D2]);
        assert_eq!(<Repeat<char, D5> as List>::LEN, reiterated_len::<pack![char], D5>());
    }
}
