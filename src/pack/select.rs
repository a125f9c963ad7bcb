//! Positional selection.
//!
//! A Peano index peels cons cells one at a time: `Skip<D2>` on
//! `pack![A, B, C]` matches `HCons<A, HCons<B, Rest>>` and yields `Rest`.
//! Index `len` is valid for `Skip`, `Take` and `Range` (the empty tail, the
//! whole pack); anything past it has no impl.
//!
//! ```compile_fail
//! use tola_packs::pack;
//! use tola_packs::pack::Skip;
//! use tola_packs::primitives::peano::D4;
//!
//! // Three elements cannot lose four.
//! type T = <pack![u8, u16, u32] as Skip<D4>>::Out;
//! let _: Option<T> = None;
//! ```

use crate::primitives::peano::{PeanoSub, S, Z};

use super::{HCons, HNil, List};

/// Drop the first `N` elements.
#[diagnostic::on_unimplemented(
    message = "cannot skip `{N}` elements of `{Self}`",
    label = "index is past the end of the pack"
)]
pub trait Skip<N> {
    type Out: List;
}

impl<L: List> Skip<Z> for L {
    type Out = L;
}

impl<H, T, N> Skip<S<N>> for HCons<H, T>
where
    T: Skip<N>,
{
    type Out = <T as Skip<N>>::Out;
}

/// Keep the first `N` elements.
#[diagnostic::on_unimplemented(
    message = "cannot take `{N}` elements of `{Self}`",
    label = "index is past the end of the pack"
)]
pub trait Take<N> {
    type Out: List;
}

impl<L: List> Take<Z> for L {
    type Out = HNil;
}

impl<H, T, N> Take<S<N>> for HCons<H, T>
where
    T: Take<N>,
{
    type Out = HCons<H, <T as Take<N>>::Out>;
}

/// Element at index `N`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no element at index `{N}`",
    label = "index is past the end of the pack"
)]
pub trait Get<N> {
    type Out;
}

impl<H, T> Get<Z> for HCons<H, T> {
    type Out = H;
}

impl<H, T, N> Get<S<N>> for HCons<H, T>
where
    T: Get<N>,
{
    type Out = <T as Get<N>>::Out;
}

/// Elements in `[Start, End)`, original order.
pub trait Range<Start, End> {
    type Out: List;
}

impl<L, Start, End> Range<Start, End> for L
where
    End: PeanoSub<Start>,
    L: Skip<Start>,
    <L as Skip<Start>>::Out: Take<<End as PeanoSub<Start>>::Out>,
{
    type Out = <<L as Skip<Start>>::Out as Take<<End as PeanoSub<Start>>::Out>>::Out;
}
