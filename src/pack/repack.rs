//! Concatenation.
//!
//! `Flatten` pastes adjacent pairs of packs and flattens the halved list
//! again, so a list of k packs resolves in about log2(k) rounds instead of
//! a k-deep chain of `Concat`.

use super::{HCons, HNil, List};

/// `Self ++ Rhs`.
#[diagnostic::on_unimplemented(
    message = "cannot concatenate `{Self}` with `{Rhs}`",
    label = "both sides must be packs"
)]
pub trait Concat<Rhs> {
    type Out: List;
}

impl<Rhs: List> Concat<Rhs> for HNil {
    type Out = Rhs;
}

impl<H, T, Rhs> Concat<Rhs> for HCons<H, T>
where
    T: Concat<Rhs>,
{
    type Out = HCons<H, <T as Concat<Rhs>>::Out>;
}

/// One doubling round: `[A, B, C, D, E]` becomes `[A ++ B, C ++ D, E]`.
pub trait PairUp {
    type Out;
}

impl PairUp for HNil {
    type Out = HNil;
}

impl<A> PairUp for HCons<A, HNil> {
    type Out = HCons<A, HNil>;
}

impl<A, B, Rest> PairUp for HCons<A, HCons<B, Rest>>
where
    A: Concat<B>,
    Rest: PairUp,
{
    type Out = HCons<<A as Concat<B>>::Out, <Rest as PairUp>::Out>;
}

/// Concatenate a pack of packs, left to right.
pub trait Flatten {
    type Out: List;
}

impl Flatten for HNil {
    type Out = HNil;
}

impl<A: List> Flatten for HCons<A, HNil> {
    type Out = A;
}

impl<A, B, Rest> Flatten for HCons<A, HCons<B, Rest>>
where
    Self: PairUp,
    <Self as PairUp>::Out: Flatten,
{
    type Out = <<Self as PairUp>::Out as Flatten>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;

    #[test]
    fn test_concat() {
        crate::assert_same!(<HNil as Concat<HNil>>::Out, HNil);
        crate::assert_same!(<pack![u8] as Concat<pack![u16, u32]>>::Out, pack![u8, u16, u32]);
    }

    #[test]
    fn test_flatten_odd_count() {
        type Packs = pack![pack![u8], HNil, pack![u16, u32], pack![i8], pack![i16]];
        crate::assert_same!(<Packs as Flatten>::Out, pack![u8, u16, u32, i8, i16]);
    }
}
