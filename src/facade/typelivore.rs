//! Type packs.
//!
//! ```
//! use tola_packs::pack;
//! use tola_packs::facade::typelivore::{Rotate, Slice, Trim};
//!
//! type P = pack![u8, u16, u32, u64];
//! tola_packs::assert_same!(Slice<P, 1, 3>, pack![u16, u32]);
//! tola_packs::assert_same!(Rotate<P, 1>, pack![u16, u32, u64, u8]);
//! tola_packs::assert_same!(Trim<P, 3>, pack![u64]);
//! ```

use crate::primitives::peano::Nat;

/// `P[START..END)`.
pub type Slice<P, const START: usize, const END: usize> =
    <P as crate::pack::Range<Nat<START>, Nat<END>>>::Out;

/// `P[K..len) ++ P[0..K)`.
pub type Rotate<P, const K: usize> = <P as crate::pack::Rotate<Nat<K>>>::Out;

/// Drop the first `K` elements.
pub type Trim<P, const K: usize> = <P as crate::pack::Skip<Nat<K>>>::Out;

/// Keep the first `K` elements.
pub type Prefix<P, const K: usize> = <P as crate::pack::Take<Nat<K>>>::Out;

/// Splice `Q` in at index `K`.
pub type Inject<P, const K: usize, Q> = <P as crate::pack::Inject<Nat<K>, Q>>::Out;

/// Element at index `I`.
pub type Amid<P, const I: usize> = <P as crate::pack::Get<Nat<I>>>::Out;

/// Replace `P[START..END)` with `Q`.
pub type Upend<P, const START: usize, const END: usize, Q> =
    <P as crate::pack::Upend<Nat<START>, Nat<END>, Q>>::Out;

/// Elements in reverse order.
pub type Flip<P> = <P as crate::pack::Reverse>::Out;

/// Length as a Peano number.
pub type Gauge<P> = <P as crate::pack::List>::Len;

/// `Present` iff `X` is an element.
pub type Has<P, X> = <P as crate::pack::Has<X>>::Out;

/// First index of `X`, or the length.
pub type Find<P, X> = <P as crate::pack::Find<X>>::Out;

/// All indices of `X`.
pub type KindredFind<P, X> = <P as crate::pack::KindredFind<X>>::Out;

/// `Present` iff no element repeats.
pub type AreDistinct<P> = <P as crate::pack::AreDistinct>::Out;

/// Pair elements of equal-length packs.
pub type Zip<P, Q> = <P as crate::pack::Zip<Q>>::Out;

/// `T` repeated `N` times.
pub type Repeat<T, const N: usize> = crate::pack::Repeat<T, Nat<N>>;

/// `P` repeated `N` times.
pub type Reiterate<P, const N: usize> = <P as crate::pack::Reiterate<Nat<N>>>::Out;

/// Apply `F` to every element.
pub type Transform<P, F> = <P as crate::pack::Map<F>>::Out;

/// Apply `F` at the indices in `Positions` (an `idx![..]` pack).
pub type CognateModify<P, F, Positions> = <P as crate::pack::Modify<F, Positions>>::Out;

/// Elements at the indices in `Positions`.
pub type Among<P, Positions> = <P as crate::pack::Among<Positions>>::Out;

/// Concatenate a pack of packs.
pub type Paste<Packs> = <Packs as crate::pack::Flatten>::Out;

/// `F(..F(F(Init, p0), p1).., pn)`.
pub type FoldLeft<P, F, Init> = <P as crate::pack::FoldLeft<F, Init>>::Out;

/// `F(p0, F(p1, ..F(pn, Init)..))`.
pub type FoldRight<P, F, Init> = <P as crate::pack::FoldRight<F, Init>>::Out;

/// Left fold seeded with the first element.
pub type FoldLeftFirst<P, F> = <P as crate::pack::FoldLeftFirst<F>>::Out;

/// Right fold seeded with the last element.
pub type FoldRightLast<P, F> = <P as crate::pack::FoldRightLast<F>>::Out;
