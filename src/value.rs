//! # Value carriers
//!
//! Rust has no variadic list of `const` parameters of mixed type, so a value
//! pack is a pack of carrier types. `Val<K, Sign, Mag>` spells a literal of
//! kind `K` out in nibbles:
//!
//! ```text
//! -19i32  ->  Val<i32, X1, Cons<X3, Cons<X1, Zeros>>>
//!                  |    |        \______________/
//!                kind  sign      0x13, little-endian
//! ```
//!
//! Zero has no digits and is never negative, so two carriers are the same
//! element exactly when kind and value agree.
//!
//! ```
//! use tola_packs::prelude::*;
//!
//! type Minus = <UnaryMinus as Func<val!(5)>>::Out;
//! tola_packs::assert_same!(Minus, val!(-5));
//! assert_eq!(<Minus as Value>::value(), -5i32);
//! ```
//!
//! Unsigned kinds cannot be negated:
//!
//! ```compile_fail
//! use tola_packs::prelude::*;
//!
//! type T = <UnaryMinus as Func<val!(5u8)>>::Out;
//! let _: Option<T> = None;
//! ```

use core::marker::PhantomData;

use crate::element::Element;
use crate::pack::{HCons, HNil, List};
use crate::primitives::bool::{Bool, BoolAnd};
use crate::primitives::nibble::{Nibble, NibbleEq, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC};
use crate::primitives::stream::{Cons, HashStream, Zeros};
use crate::vessel::Func;

// =============================================================================
// Kinds
// =============================================================================

/// A primitive type a value carrier can stand for.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be carried as a value",
    note = "Supported kinds: i8..i64, isize, u8..u64, usize, bool, char."
)]
pub trait Kind: Copy + 'static {
    /// First nibble of the identity stream.
    type Tag: Nibble;

    /// Convert from the carrier's wide representation.
    fn from_wide(v: i128) -> Self;
}

/// Kinds that admit negation.
pub trait SignedKind: Kind {}

macro_rules! impl_int_kind {
    ($($t:ident => $tag:ident $(, $signed:ident)?);* $(;)?) => {
        $(
            impl Kind for $t {
                type Tag = $tag;
                #[inline(always)]
                fn from_wide(v: i128) -> Self {
                    v as $t
                }
            }
            $(impl $signed for $t {})?
        )*
    };
}

impl_int_kind!(
    i8 => X1, SignedKind;
    i16 => X2, SignedKind;
    i32 => X3, SignedKind;
    i64 => X4, SignedKind;
    isize => X5, SignedKind;
    u8 => X6;
    u16 => X7;
    u32 => X8;
    u64 => X9;
    usize => XA;
);

/// Kind used by `vals!` for `isize`/`usize` literals outside the 32-bit
/// range. It only resolves on 64-bit targets, so such a literal fails to
/// compile instead of truncating.
pub struct Wide;

/// Pointer-sized kinds able to hold a 64-bit literal.
#[diagnostic::on_unimplemented(
    message = "pointer-sized literal does not fit this target",
    label = "`isize`/`usize` values outside the 32-bit range need a 64-bit target",
    note = "Use an `i64`/`u64` literal instead."
)]
pub trait PointerWide {
    type Isize: Kind;
    type Usize: Kind;
}

#[cfg(target_pointer_width = "64")]
impl PointerWide for Wide {
    type Isize = isize;
    type Usize = usize;
}

impl Kind for bool {
    type Tag = XB;
    #[inline(always)]
    fn from_wide(v: i128) -> Self {
        v != 0
    }
}

impl Kind for char {
    type Tag = XC;
    #[inline(always)]
    fn from_wide(v: i128) -> Self {
        char::from_u32(v as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

// =============================================================================
// Digits
// =============================================================================

/// Sign nibble: `X0` for non-negative, `X1` for negative.
pub trait Sign: Nibble {
    const NEGATIVE: bool;
}

impl Sign for X0 {
    const NEGATIVE: bool = false;
}

impl Sign for X1 {
    const NEGATIVE: bool = true;
}

/// Little-endian nibble digits over a zero stream.
pub trait Magnitude: HashStream {
    const VALUE: u128;
    type IsZero: Bool;
}

impl Magnitude for Zeros {
    const VALUE: u128 = 0;
    type IsZero = crate::primitives::bool::Present;
}

impl<D, T> Magnitude for Cons<D, T>
where
    D: NibbleEq<X0>,
    T: Magnitude,
{
    const VALUE: u128 = D::VALUE as u128 + 16 * T::VALUE;
    type IsZero = <<D as NibbleEq<X0>>::Out as BoolAnd<T::IsZero>>::Out;
}

// =============================================================================
// Carrier
// =============================================================================

/// A literal lifted into a type. Build with `val!` / `vals!`.
pub struct Val<K, Sign, Mag>(PhantomData<(K, Sign, Mag)>);

/// A value carrier.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a value",
    label = "expected a `Val<..>` carrier",
    note = "Build values with `val!(..)` or `vals![..]`."
)]
pub trait Value: 'static {
    type Kind: Kind;
    const VALUE: i128;

    #[inline(always)]
    fn value() -> Self::Kind {
        <Self::Kind as Kind>::from_wide(Self::VALUE)
    }
}

impl<K: Kind, Sg: Sign, M: Magnitude> Value for Val<K, Sg, M> {
    type Kind = K;
    const VALUE: i128 = if Sg::NEGATIVE { -(M::VALUE as i128) } else { M::VALUE as i128 };
}

impl<K: Kind, Sg: Sign, M: Magnitude> Element for Val<K, Sg, M> {
    type Stream = Cons<K::Tag, Cons<Sg, M>>;
}

/// A pack whose elements are all values.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a value pack",
    note = "Every element must be a `Val<..>` carrier; build them with `vals![..]`."
)]
pub trait ValueList: List {}

impl ValueList for HNil {}

impl<H: Value, T: ValueList> ValueList for HCons<H, T> {}

// =============================================================================
// Negation
// =============================================================================

/// Pick the sign of a negated non-negative value: zero stays `X0`.
pub trait NegatedSign {
    type Out: Sign;
}

impl NegatedSign for crate::primitives::bool::Present {
    type Out = X0;
}

impl NegatedSign for crate::primitives::bool::Absent {
    type Out = X1;
}

/// Negate a signed value. `-0` is `0`; `-MIN` wraps when read back.
pub struct UnaryMinus;

impl<K, M> Func<Val<K, X0, M>> for UnaryMinus
where
    K: SignedKind,
    M: Magnitude,
    M::IsZero: NegatedSign,
{
    type Out = Val<K, <M::IsZero as NegatedSign>::Out, M>;
}

impl<K: SignedKind, M: Magnitude> Func<Val<K, X1, M>> for UnaryMinus {
    type Out = Val<K, X0, M>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::Same;

    #[test]
    fn test_values() {
        assert_eq!(<crate::val!(0) as Value>::VALUE, 0);
        assert_eq!(<crate::val!(-19) as Value>::VALUE, -19);
        assert_eq!(<crate::val!(255u8) as Value>::value(), 255u8);
        assert_eq!(<crate::val!(-9223372036854775808i64) as Value>::value(), i64::MIN);
        assert_eq!(<crate::val!(18446744073709551615u64) as Value>::value(), u64::MAX);
        assert_eq!(<crate::val!(-2147483648isize) as Value>::value(), -2147483648isize);
        assert!(<crate::val!(true) as Value>::value());
        assert_eq!(<crate::val!('x') as Value>::value(), 'x');
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_wide_pointer_sized_literals() {
        crate::assert_same!(<crate::val!(5_000_000_000isize) as Value>::Kind, isize);
        crate::assert_same!(<crate::val!(5_000_000_000usize) as Value>::Kind, usize);
        assert_eq!(<crate::val!(5_000_000_000isize) as Value>::value(), 5_000_000_000isize);
        assert_eq!(<crate::val!(-5_000_000_000isize) as Value>::value(), -5_000_000_000isize);
        crate::assert_same!(
            crate::val!(5_000_000_000usize),
            Val<usize, X0, <crate::val!(5_000_000_000u64) as MagnitudeOf>::Mag>
        );
    }

    /// Digits of a carrier.
    trait MagnitudeOf {
        type Mag;
    }

    impl<K, Sg, M> MagnitudeOf for Val<K, Sg, M> {
        type Mag = M;
    }

    #[test]
    fn test_identity_is_kind_and_value() {
        assert!(<<crate::val!(3) as Same<crate::val!(3)>>::Out as Bool>::VALUE);
        assert!(!<<crate::val!(3) as Same<crate::val!(3u8)>>::Out as Bool>::VALUE);
        assert!(!<<crate::val!(3) as Same<crate::val!(-3)>>::Out as Bool>::VALUE);
        assert!(!<<crate::val!(0) as Same<crate::val!(16)>>::Out as Bool>::VALUE);
    }

    #[test]
    fn test_unary_minus() {
        crate::assert_same!(<UnaryMinus as Func<crate::val!(0)>>::Out, crate::val!(0));
        crate::assert_same!(<UnaryMinus as Func<crate::val!(-7i8)>>::Out, crate::val!(7i8));
        type Twice = <UnaryMinus as Func<<UnaryMinus as Func<crate::val!(42)>>::Out>>::Out;
        crate::assert_same!(Twice, crate::val!(42));
    }
}
