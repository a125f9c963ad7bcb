//! # Operations, vessels and flavors
//!
//! An operation is a marker type implementing one of:
//!
//! | Trait | Consumes | Concept |
//! |-------|----------|---------|
//! | `Mold<Args>` | a type pack | `Moldly` |
//! | `Page<Args>` | a value pack | `Pagely` |
//! | `Func<Arg>` | a single element | - |
//!
//! A vessel holds a pack and is itself an operation that re-packs whatever
//! it is given, which makes it the natural continuation for `Shear` and
//! friends. Its flavor records what it holds:
//!
//! ```text
//! Capsule<L>  MoldFlavor  types
//! Shuttle<L>  PageFlavor  values
//! Convoy<L>   RoadFlavor  Molds
//! Trolley<L>  RailFlavor  Pages
//! ```
//!
//! Vessels are only ever repacked with vessels of the same flavor:
//!
//! ```compile_fail
//! use tola_packs::prelude::*;
//! use tola_packs::facade::omennivore::EasyKindredRepack;
//!
//! type T = EasyKindredRepack<pack![Capsule<pack![u8]>, Shuttle<vals![1]>]>;
//! let _: Option<T> = None;
//! ```

use core::marker::PhantomData;

use crate::pack::{HCons, HNil, List};
use crate::value::ValueList;

// =============================================================================
// Operation traits
// =============================================================================

/// Concept: the type is an operation over type packs.
pub trait Moldly {}

/// Concept: the type is an operation over value packs.
pub trait Pagely {}

/// Operation over a type pack.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be applied to the pack `{Args}`",
    label = "not a Mold for these arguments"
)]
pub trait Mold<Args>: Moldly {
    type Out;
}

/// Operation over a value pack.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be applied to the value pack `{Args}`",
    label = "not a Page for these arguments"
)]
pub trait Page<Args>: Pagely {
    type Out;
}

/// Operation over a single element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be applied to `{Arg}`",
    label = "not a Func for this argument"
)]
pub trait Func<Arg> {
    type Out;
}

/// The identity continuation: hands the pack back unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsList;

impl Moldly for AsList {}

impl<Args: List> Mold<Args> for AsList {
    type Out = Args;
}

/// A pack whose elements are all `Mold`s.
pub trait MoldList: List {}

impl MoldList for HNil {}

impl<H: Moldly, T: MoldList> MoldList for HCons<H, T> {}

/// A pack whose elements are all `Page`s.
pub trait PageList: List {}

impl PageList for HNil {}

impl<H: Pagely, T: PageList> PageList for HCons<H, T> {}

// =============================================================================
// Flavors
// =============================================================================

/// What a vessel holds; maps an item pack to the matching vessel.
pub trait Flavor: 'static {
    type Vessel<L>;
}

/// Types.
pub struct MoldFlavor;
/// Values.
pub struct PageFlavor;
/// Molds.
pub struct RoadFlavor;
/// Pages.
pub struct RailFlavor;

impl Flavor for MoldFlavor {
    type Vessel<L> = Capsule<L>;
}

impl Flavor for PageFlavor {
    type Vessel<L> = Shuttle<L>;
}

impl Flavor for RoadFlavor {
    type Vessel<L> = Convoy<L>;
}

impl Flavor for RailFlavor {
    type Vessel<L> = Trolley<L>;
}

/// Holds only between equal flavors.
#[diagnostic::on_unimplemented(
    message = "vessels of flavor `{Self}` and `{Other}` cannot be repacked together",
    label = "flavors differ"
)]
pub trait Kindred<Other> {}

impl<F: Flavor> Kindred<F> for F {}

// =============================================================================
// Vessels
// =============================================================================

/// A packed container.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a vessel",
    note = "Vessels are `Capsule`, `Shuttle`, `Convoy` and `Trolley`."
)]
pub trait Vessel {
    type Items: List;
    type Flavor: Flavor;
}

/// Type pack vessel.
pub struct Capsule<L = HNil>(PhantomData<L>);

/// Value pack vessel.
pub struct Shuttle<L = HNil>(PhantomData<L>);

/// Vessel of `Mold`s.
pub struct Convoy<L = HNil>(PhantomData<L>);

/// Vessel of `Page`s.
pub struct Trolley<L = HNil>(PhantomData<L>);

impl<L: List> Vessel for Capsule<L> {
    type Items = L;
    type Flavor = MoldFlavor;
}

impl<L: ValueList> Vessel for Shuttle<L> {
    type Items = L;
    type Flavor = PageFlavor;
}

impl<L: MoldList> Vessel for Convoy<L> {
    type Items = L;
    type Flavor = RoadFlavor;
}

impl<L: PageList> Vessel for Trolley<L> {
    type Items = L;
    type Flavor = RailFlavor;
}

impl<L> Moldly for Capsule<L> {}

impl<L, Args: List> Mold<Args> for Capsule<L> {
    type Out = Capsule<Args>;
}

impl<L> Pagely for Shuttle<L> {}

impl<L, Args: ValueList> Page<Args> for Shuttle<L> {
    type Out = Shuttle<Args>;
}

impl<L> Moldly for Convoy<L> {}

impl<L, Args: MoldList> Mold<Args> for Convoy<L> {
    type Out = Convoy<Args>;
}

impl<L> Moldly for Trolley<L> {}

impl<L, Args: PageList> Mold<Args> for Trolley<L> {
    type Out = Trolley<Args>;
}

/// Run a `Page` wherever a `Mold` continuation is expected.
pub struct AsMold<P>(PhantomData<P>);

impl<P> Moldly for AsMold<P> {}

impl<P, Args> Mold<Args> for AsMold<P>
where
    Args: ValueList,
    P: Page<Args>,
{
    type Out = <P as Page<Args>>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;
    use crate::pack::Shear;
    use crate::primitives::peano::D1;

    #[test]
    fn test_vessels_repack() {
        crate::assert_same!(<Capsule as Mold<pack![u8]>>::Out, Capsule<pack![u8]>);
        crate::assert_same!(<AsList as Mold<pack![u8]>>::Out, pack![u8]);
        crate::assert_same!(<Capsule<pack![u8]> as Vessel>::Flavor, MoldFlavor);
        crate::assert_same!(<Convoy<pack![Capsule, AsList]> as Vessel>::Items, pack![Capsule, AsList]);
    }

    #[test]
    fn test_page_as_continuation() {
        type Vs = crate::vals![1, 2, 3];
        crate::assert_same!(<Vs as Shear<D1, AsMold<Shuttle>>>::Out, Shuttle<crate::vals![2, 3]>);
    }

    #[test]
    fn test_flavor_vessel() {
        crate::assert_same!(<PageFlavor as Flavor>::Vessel<HNil>, Shuttle);
    }
}
