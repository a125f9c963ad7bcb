//! Positional, segmenting and folding properties of type packs.

use tola_packs::assert_same;
use tola_packs::facade::typelivore::{Gauge, Inject, Rotate, Slice, Trim};
use tola_packs::prelude::*;

#[derive(Element)]
struct Meter;

#[derive(Element)]
struct Second;

type P = pack![u8, u16, u32, u64];

// Every Start <= End over a pack of four.
assert_same!(Slice<P, 0, 0>, HNil);
assert_same!(Slice<P, 0, 1>, pack![u8]);
assert_same!(Slice<P, 0, 2>, pack![u8, u16]);
assert_same!(Slice<P, 0, 3>, pack![u8, u16, u32]);
assert_same!(Slice<P, 0, 4>, P);
assert_same!(Slice<P, 1, 1>, HNil);
assert_same!(Slice<P, 1, 2>, pack![u16]);
assert_same!(Slice<P, 1, 3>, pack![u16, u32]);
assert_same!(Slice<P, 1, 4>, pack![u16, u32, u64]);
assert_same!(Slice<P, 2, 2>, HNil);
assert_same!(Slice<P, 2, 3>, pack![u32]);
assert_same!(Slice<P, 2, 4>, pack![u32, u64]);
assert_same!(Slice<P, 3, 3>, HNil);
assert_same!(Slice<P, 3, 4>, pack![u64]);
assert_same!(Slice<P, 4, 4>, HNil);

macro_rules! slice_len {
    ($(($s:literal, $e:literal)),*) => {
        $(assert_eq!(<Slice<P, $s, $e> as List>::LEN, $e - $s);)*
    };
}

#[test]
fn slice_has_end_minus_start_elements() {
    slice_len!(
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4),
        (1, 1), (1, 2), (1, 3), (1, 4),
        (2, 2), (2, 3), (2, 4),
        (3, 3), (3, 4),
        (4, 4)
    );
}

#[test]
fn trim_matches_slice_to_end() {
    assert_same!(Trim<P, 0>, Slice<P, 0, 4>);
    assert_same!(Trim<P, 1>, Slice<P, 1, 4>);
    assert_same!(Trim<P, 2>, Slice<P, 2, 4>);
    assert_same!(Trim<P, 3>, Slice<P, 3, 4>);
    assert_same!(Trim<P, 4>, Slice<P, 4, 4>);
}

#[test]
fn rotate_identity_and_round_trip() {
    assert_same!(Rotate<P, 0>, P);
    assert_same!(Rotate<P, 4>, P);
    assert_same!(Rotate<P, 2>, pack![u32, u64, u8, u16]);
    assert_same!(Rotate<Rotate<P, 1>, 3>, P);
    assert_same!(Rotate<Rotate<P, 3>, 1>, P);
}

#[test]
fn inject_at_both_endpoints() {
    type Q = pack![Meter, Second];
    assert_same!(Inject<P, 0, Q>, pack![Meter, Second, u8, u16, u32, u64]);
    assert_same!(Inject<P, 2, Q>, pack![u8, u16, Meter, Second, u32, u64]);
    assert_same!(Inject<P, 4, Q>, pack![u8, u16, u32, u64, Meter, Second]);
    assert_eq!(<Inject<P, 4, Q> as List>::LEN, 6);
}

#[test]
fn gauge_is_length() {
    assert_eq!(<Gauge<P> as Peano>::VALUE, 4);
    assert_eq!(<Gauge<HNil> as Peano>::VALUE, 0);
}

#[test]
fn flatten_concatenates_in_order() {
    assert_same!(<HNil as Flatten>::Out, HNil);
    assert_same!(<pack![pack![u8]] as Flatten>::Out, pack![u8]);
    assert_same!(<pack![pack![u8], HNil] as Flatten>::Out, pack![u8]);
    assert_same!(
        <pack![pack![u8], pack![u16, u32], HNil] as Flatten>::Out,
        pack![u8, u16, u32]
    );
    assert_same!(
        <pack![pack![u8], pack![u16], pack![u32], pack![u64]] as Flatten>::Out,
        P
    );
    assert_same!(
        <pack![pack![u8], HNil, pack![u16], pack![u32, u64], pack![char]] as Flatten>::Out,
        pack![u8, u16, u32, u64, char]
    );
}

macro_rules! reiterated_len {
    ($($n:literal),*) => {
        $(assert_eq!(<tola_packs::facade::typelivore::Reiterate<pack![u8, Meter], $n> as List>::LEN, 2 * $n);)*
    };
}

#[test]
fn reiterate_multiplies_length() {
    reiterated_len!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
    assert_same!(
        tola_packs::facade::typelivore::Reiterate<pack![u8, Meter], 3>,
        pack![u8, Meter, u8, Meter, u8, Meter]
    );
}

/// `(A, B)` to `(A, B)`, so the nesting shows the combination order.
struct Nest;

impl<A, B> Func<(A, B)> for Nest {
    type Out = (A, B);
}

struct Wrap;

impl<X> Func<X> for Wrap {
    type Out = Option<X>;
}

struct Slot;

impl<X> Func<X> for Slot {
    type Out = [X; 1];
}

#[test]
fn single_element_folds_are_untouched() {
    assert_same!(<pack![Meter] as FoldLeftFirst<Nest>>::Out, Meter);
    assert_same!(<pack![Meter] as FoldRightLast<Nest>>::Out, Meter);
    assert_same!(<pack![Meter, Second] as FoldLeft<Nest, u8>>::Out, ((u8, Meter), Second));
    assert_same!(<pack![Meter, Second] as FoldRight<Nest, u8>>::Out, (Meter, (Second, u8)));
}

#[test]
fn trek_and_classic_trek_order() {
    // Trek: Slot(Wrap(X)); ClassicTrek: Wrap(Slot(X)).
    assert_same!(<pack![Wrap, Slot] as Trek<u8>>::Out, [Option<u8>; 1]);
    assert_same!(<pack![Wrap, Slot] as ClassicTrek<u8>>::Out, Option<[u8; 1]>);
}

#[test]
fn tuples_convert_both_ways() {
    type L = <(Meter, u8) as Tuple>::AsList;
    assert_same!(L, pack![Meter, u8]);
    assert_same!(<L as IntoTuple>::AsTuple, (Meter, u8));
}

#[test]
fn inspect_lists_names() {
    let names = <pack![u8, Meter] as Inspect>::names();
    assert_eq!(names.len(), 2);
    assert_eq!(names[0], "u8");
    assert!(names[1].ends_with("Meter"));
}
