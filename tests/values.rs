//! Value packs: carriers, negation, membership and the value façade.

use tola_packs::assert_same;
use tola_packs::facade::varybivore::{self, CognateModify, Negate};
use tola_packs::prelude::*;

#[test]
fn literals_read_back() {
    assert_eq!(<val!(-128i8) as Value>::value(), i8::MIN);
    assert_eq!(<val!(65535u16) as Value>::value(), u16::MAX);
    assert_eq!(<val!(-1isize) as Value>::value(), -1isize);
    assert_eq!(<val!(0usize) as Value>::value(), 0usize);
    assert!(!<val!(false) as Value>::value());
    assert_eq!(<val!('λ') as Value>::value(), 'λ');
    assert_eq!(<vals![1, 2, 3] as Recite>::values(), vec![1, 2, 3]);
}

#[test]
fn unary_minus_of_zero_is_zero() {
    assert_same!(<UnaryMinus as Func<val!(0)>>::Out, val!(0));
    assert_same!(<UnaryMinus as Func<val!(-0)>>::Out, val!(0));
    assert_eq!(<<UnaryMinus as Func<val!(0i64)>>::Out as Value>::VALUE, 0);
}

#[test]
fn unary_minus_twice_is_identity() {
    type Once = <UnaryMinus as Func<val!(-300i16)>>::Out;
    type Twice = <UnaryMinus as Func<Once>>::Out;
    assert_same!(Once, val!(300i16));
    assert_same!(Twice, val!(-300i16));
    assert_same!(Negate<Negate<vals![5, -6, 0]>>, vals![5, -6, 0]);
}

#[test]
fn cognate_modify_negates_listed_positions() {
    type Out = CognateModify<Shuttle, UnaryMinus, idx![1, 3, 5], vals![0, 1, 2, 3, 4, 5]>;
    assert_same!(Out, Shuttle<vals![0, -1, 2, -3, 4, -5]>);
    assert_eq!(<Out as Recite>::values(), vec![0, -1, 2, -3, 4, -5]);
}

#[test]
fn membership_uses_kind_and_value() {
    type Vs = vals![1, 2u8, 'c', true];
    assert!(<varybivore::Has<Vs, val!(2u8)> as Bool>::VALUE);
    assert!(!<varybivore::Has<Vs, val!(2)> as Bool>::VALUE);
    assert!(<varybivore::Has<Vs, val!('c')> as Bool>::VALUE);
    assert!(!<varybivore::Has<Vs, val!(false)> as Bool>::VALUE);
    assert_eq!(<varybivore::Find<Vs, val!(true)> as Peano>::VALUE, 3);
    assert_eq!(<varybivore::Find<Vs, val!(9)> as Peano>::VALUE, 4);
}

#[test]
fn repeat_and_sum() {
    type Sevens = varybivore::Repeat<val!(7), 3>;
    assert_same!(Sevens, vals![7, 7, 7]);
    assert_eq!(varybivore::sum::<Sevens>(), 21);
}
