//! Vessels, repacking and operations as first-class values.

use tola_packs::assert_same;
use tola_packs::facade::mouldivore::{self, Bind, Chained, Injected, Reversed, Rotated, Sliced};
use tola_packs::facade::omennivore::{EasyKindredRepack, EasyKindredRepackInto, Repack};
use tola_packs::facade::pagelivore;
use tola_packs::prelude::*;

#[derive(Element)]
struct Meter;

type Whole = pack![u8, u16, u32, Meter, char];

#[test]
fn easy_kindred_repack_ignores_partitioning() {
    type A = pack![Capsule<Whole>];
    type B = pack![Capsule<pack![u8, u16]>, Capsule<pack![u32, Meter, char]>];
    type C = pack![Capsule, Capsule<pack![u8]>, Capsule<pack![u16, u32]>, Capsule, Capsule<pack![Meter, char]>];
    assert_same!(EasyKindredRepack<A>, Capsule<Whole>);
    assert_same!(EasyKindredRepack<B>, Capsule<Whole>);
    assert_same!(EasyKindredRepack<C>, Capsule<Whole>);
    assert_eq!(<<EasyKindredRepack<C> as Vessel>::Items as List>::LEN, 5);
}

#[test]
fn repack_into_transport() {
    type Vs = pack![Shuttle<vals![1]>, Shuttle<vals![2, 3]>];
    assert_same!(EasyKindredRepack<Vs>, Shuttle<vals![1, 2, 3]>);
    assert_same!(EasyKindredRepackInto<Vs, AsList>, vals![1, 2, 3]);
    // Mixed flavors are fine when the target is given explicitly.
    type Mixed = pack![Capsule<pack![Meter]>, Shuttle<vals![4]>];
    assert_same!(Repack<Mixed, Capsule>, Capsule<pack![Meter, val!(4)]>);
}

#[test]
fn molds_compose() {
    type Steps = pack![Rotated<1>, Sliced<0, 3>, Injected<1, pack![Meter]>];
    assert_same!(
        mouldivore::Trek<Steps, pack![u8, u16, u32, u64]>,
        pack![u16, Meter, u32, u64]
    );
    assert_same!(
        <Chained<pack![Reversed, Capsule]> as Mold<pack![u8, char]>>::Out,
        Capsule<pack![char, u8]>
    );
    assert_same!(
        mouldivore::ClassicTrek<pack![Capsule, Reversed], pack![u8, char]>,
        Capsule<pack![char, u8]>
    );
}

#[test]
fn adaptors_rearrange_arguments() {
    assert_same!(<mouldivore::Flip<Capsule> as Mold<pack![u8, char]>>::Out, Capsule<pack![char, u8]>);
    assert_same!(<Bind<Capsule, pack![Meter]> as Mold<pack![u8]>>::Out, Capsule<pack![Meter, u8]>);
}

#[test]
fn pages_run_as_mold_continuations() {
    type Vs = vals![10, 20, 30];
    assert_same!(<Vs as Shear<Nat<2>, AsMold<Shuttle>>>::Out, Shuttle<vals![30]>);
    assert_same!(
        pagelivore::Trek<pack![pagelivore::Flip<Shuttle>], Vs>,
        Shuttle<vals![30, 20, 10]>
    );
}

#[test]
fn vessels_inspect_their_items() {
    let names = <Capsule<pack![u8, char]> as Inspect>::names();
    assert_eq!(names, vec!["u8", "char"]);
    assert_eq!(<Shuttle<vals![-2, 2]> as Recite>::SUM, 0);
}
