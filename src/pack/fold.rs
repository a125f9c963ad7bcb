//! Folds and chains.
//!
//! Binary operations are `Func`s over a pair. Argument order follows the
//! element order: left folds call `F` with `(Acc, Item)`, right folds with
//! `(Item, Acc)`.
//!
//! Chains are folds too: `Trek` is a left fold with `Pipe` (feed the
//! accumulator to the next function), `ClassicTrek` a right fold with `Apply`.
//!
//! ```compile_fail
//! use tola_packs::pack::{FoldLeftFirst, HNil};
//! use tola_packs::vessel::Func;
//!
//! struct Keep;
//! impl<A, B> Func<(A, B)> for Keep { type Out = A; }
//!
//! // No seed and no elements.
//! type T = <HNil as FoldLeftFirst<Keep>>::Out;
//! let _: Option<T> = None;
//! ```

use crate::vessel::{Func, Mold};

use super::{HCons, HNil};

// =============================================================================
// Seeded folds
// =============================================================================

/// `F(..F(F(Init, x0), x1).., xn)`.
pub trait FoldLeft<F, Init> {
    type Out;
}

impl<F, Init> FoldLeft<F, Init> for HNil {
    type Out = Init;
}

impl<F, Init, H, T> FoldLeft<F, Init> for HCons<H, T>
where
    F: Func<(Init, H)>,
    T: FoldLeft<F, <F as Func<(Init, H)>>::Out>,
{
    type Out = <T as FoldLeft<F, <F as Func<(Init, H)>>::Out>>::Out;
}

/// `F(x0, F(x1, ..F(xn, Init)..))`.
pub trait FoldRight<F, Init> {
    type Out;
}

impl<F, Init> FoldRight<F, Init> for HNil {
    type Out = Init;
}

impl<F, Init, H, T> FoldRight<F, Init> for HCons<H, T>
where
    T: FoldRight<F, Init>,
    F: Func<(H, <T as FoldRight<F, Init>>::Out)>,
{
    type Out = <F as Func<(H, <T as FoldRight<F, Init>>::Out)>>::Out;
}

// =============================================================================
// Seedless folds
// =============================================================================

/// Left fold seeded with the first element. A single element is returned
/// unchanged.
#[diagnostic::on_unimplemented(
    message = "cannot fold `{Self}` without a seed",
    label = "the pack is empty",
    note = "Use `FoldLeft<F, Init>` to supply a seed."
)]
pub trait FoldLeftFirst<F> {
    type Out;
}

impl<F, H, T> FoldLeftFirst<F> for HCons<H, T>
where
    T: FoldLeft<F, H>,
{
    type Out = <T as FoldLeft<F, H>>::Out;
}

/// Right fold seeded with the last element. A single element is returned
/// unchanged.
#[diagnostic::on_unimplemented(
    message = "cannot fold `{Self}` without a seed",
    label = "the pack is empty",
    note = "Use `FoldRight<F, Init>` to supply a seed."
)]
pub trait FoldRightLast<F> {
    type Out;
}

impl<F, H> FoldRightLast<F> for HCons<H, HNil> {
    type Out = H;
}

impl<F, H, H2, T> FoldRightLast<F> for HCons<H, HCons<H2, T>>
where
    HCons<H2, T>: FoldRightLast<F>,
    F: Func<(H, <HCons<H2, T> as FoldRightLast<F>>::Out)>,
{
    type Out = <F as Func<(H, <HCons<H2, T> as FoldRightLast<F>>::Out)>>::Out;
}

// =============================================================================
// Chains
// =============================================================================

/// `(X, F)` to `F(X)`.
pub struct Pipe;

impl<X, F: Func<X>> Func<(X, F)> for Pipe {
    type Out = <F as Func<X>>::Out;
}

/// `(F, X)` to `F(X)`.
pub struct Apply;

impl<F: Func<X>, X> Func<(F, X)> for Apply {
    type Out = <F as Func<X>>::Out;
}

/// `(Args, M)` to `M<Args>`.
pub struct Chain;

impl<Args, M: Mold<Args>> Func<(Args, M)> for Chain {
    type Out = <M as Mold<Args>>::Out;
}

/// Apply a pack of `Func`s to `X`, first to last.
pub trait Trek<X> {
    type Out;
}

impl<L: FoldLeft<Pipe, X>, X> Trek<X> for L {
    type Out = <L as FoldLeft<Pipe, X>>::Out;
}

/// Apply a pack of `Func`s to `X`, last to first (composition order).
pub trait ClassicTrek<X> {
    type Out;
}

impl<L: FoldRight<Apply, X>, X> ClassicTrek<X> for L {
    type Out = <L as FoldRight<Apply, X>>::Out;
}

/// Feed `Args` through a pack of `Mold`s, first to last.
pub trait MoldTrek<Args> {
    type Out;
}

impl<L: FoldLeft<Chain, Args>, Args> MoldTrek<Args> for L {
    type Out = <L as FoldLeft<Chain, Args>>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;

    /// `(A, B)` to `(A, B)`: records the combination order.
    struct Nest;
    impl<A, B> Func<(A, B)> for Nest {
        type Out = (A, B);
    }

    struct Boxed;
    impl<X> Func<X> for Boxed {
        type Out = Option<X>;
    }

    struct Listed;
    impl<X> Func<X> for Listed {
        type Out = [X; 1];
    }

    #[test]
    fn test_seeded_folds() {
        crate::assert_same!(<pack![u8, u16] as FoldLeft<Nest, ()>>::Out, (((), u8), u16));
        crate::assert_same!(<pack![u8, u16] as FoldRight<Nest, ()>>::Out, (u8, (u16, ())));
        crate::assert_same!(<HNil as FoldLeft<Nest, ()>>::Out, ());
    }

    #[test]
    fn test_single_element_is_untouched() {
        crate::assert_same!(<pack![u8] as FoldLeftFirst<Nest>>::Out, u8);
        crate::assert_same!(<pack![u8] as FoldRightLast<Nest>>::Out, u8);
        crate::assert_same!(<pack![u8, u16, u32] as FoldRightLast<Nest>>::Out, (u8, (u16, u32)));
        crate::assert_same!(<pack![u8, u16, u32] as FoldLeftFirst<Nest>>::Out, ((u8, u16), u32));
    }

    #[test]
    fn test_trek_order() {
        crate::assert_same!(<pack![Boxed, Listed] as Trek<u8>>::Out, [Option<u8>; 1]);
        crate::assert_same!(<pack![Boxed, Listed] as ClassicTrek<u8>>::Out, Option<[u8; 1]>);
        crate::assert_same!(<HNil as Trek<u8>>::Out, u8);
    }
}
