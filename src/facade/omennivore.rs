//! Repacking vessels.
//!
//! All four forms collect the items of a pack of vessels, in order, into one
//! pack. They differ in where the result goes:
//!
//! | Form | Flavors | Result |
//! |------|---------|--------|
//! | `Repack<Vs, Op>` | any mix | `Op` applied to the items |
//! | `KindredRepack<Vs, Op>` | all equal | `Op` applied to the items |
//! | `EasyKindredRepack<Vs>` | all equal | a vessel of that flavor |
//! | `EasyKindredRepackInto<Vs, Transport>` | all equal | `Transport` applied to the items |
//!
//! ```
//! use tola_packs::prelude::*;
//! use tola_packs::facade::omennivore::EasyKindredRepack;
//!
//! type Vs = pack![Capsule<pack![u8, u16]>, Capsule, Capsule<pack![char]>];
//! tola_packs::assert_same!(EasyKindredRepack<Vs>, Capsule<pack![u8, u16, char]>);
//! ```

use crate::pack::{Flatten, HCons, HNil};
use crate::vessel::{Flavor, Kindred, Mold, Vessel};

/// The item packs of a pack of vessels.
pub trait ItemsOf {
    type Out;
}

impl ItemsOf for HNil {
    type Out = HNil;
}

impl<V: Vessel, T: ItemsOf> ItemsOf for HCons<V, T> {
    type Out = HCons<V::Items, T::Out>;
}

/// The flavor shared by every vessel in a non-empty pack.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no common flavor",
    label = "expected a non-empty pack of vessels of one flavor"
)]
pub trait CommonFlavor {
    type Out: Flavor;
}

impl<V: Vessel> CommonFlavor for HCons<V, HNil> {
    type Out = V::Flavor;
}

impl<V, W, Rest> CommonFlavor for HCons<V, HCons<W, Rest>>
where
    V: Vessel,
    HCons<W, Rest>: CommonFlavor,
    V::Flavor: Kindred<<HCons<W, Rest> as CommonFlavor>::Out>,
{
    type Out = V::Flavor;
}

/// Every item of `Vs`, in order.
pub type Items<Vs> = <<Vs as ItemsOf>::Out as Flatten>::Out;

/// Concatenate the items of `Vs` and hand them to `Op`.
pub type Repack<Vs, Op> = <Op as Mold<Items<Vs>>>::Out;

/// `Repack`, but only for vessels of one flavor.
pub type KindredRepack<Vs, Op> = <KindredGuard<Vs, Op> as Mold<Items<Vs>>>::Out;

/// A vessel of the common flavor holding every item of `Vs`.
pub type EasyKindredRepack<Vs> = <<Vs as CommonFlavor>::Out as Flavor>::Vessel<Items<Vs>>;

/// `Transport` applied to every item of vessels of one flavor.
pub type EasyKindredRepackInto<Vs, Transport> = KindredRepack<Vs, Transport>;

/// `Op`, applicable only when `Vs` shares a flavor.
pub struct KindredGuard<Vs, Op>(core::marker::PhantomData<(Vs, Op)>);

impl<Vs, Op> crate::vessel::Moldly for KindredGuard<Vs, Op> {}

impl<Vs, Op, Args> Mold<Args> for KindredGuard<Vs, Op>
where
    Vs: CommonFlavor,
    Op: Mold<Args>,
{
    type Out = <Op as Mold<Args>>::Out;
}
