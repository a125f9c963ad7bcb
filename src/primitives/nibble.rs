//! Type-level nibble system (4-bit values X0-XF).
//!
//! Nibbles are the digits of every identity stream: hashed element names,
//! value magnitudes, kind tags and signs.

use super::bool::{Absent, Present, Bool};

// =============================================================================
// Nibble iteration macros
// =============================================================================

/// Generate impls for all distinct pairs (A, B) and (B, A) where A != B.
#[macro_export]
#[doc(hidden)]
macro_rules! for_distinct_nibble_pairs {
    ($mac:ident) => {
        $crate::for_distinct_nibble_pairs!(@recurse $mac, [X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF]);
    };
    (@recurse $mac:ident, [$head:ident, $($tail:ident),*]) => {
        $(
            $mac!($head, $tail);
            $mac!($tail, $head);
        )*
        $crate::for_distinct_nibble_pairs!(@recurse $mac, [$($tail),*]);
    };
    (@recurse $mac:ident, [$last:ident]) => {};
}

// =============================================================================
// Nibble trait and types
// =============================================================================

/// Type-level nibble (4-bit value, 0..15)
pub trait Nibble: 'static {
    const VALUE: u8;
}

macro_rules! define_nibbles {
    ($($n:ident = $v:literal),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $n;
            impl Nibble for $n {
                const VALUE: u8 = $v;
            }
        )*
    };
}

define_nibbles!(
    X0 = 0, X1 = 1, X2 = 2, X3 = 3, X4 = 4, X5 = 5, X6 = 6, X7 = 7,
    X8 = 8, X9 = 9, XA = 10, XB = 11, XC = 12, XD = 13, XE = 14, XF = 15,
);

// =============================================================================
// Nibble equality
// =============================================================================

/// Type-level nibble equality
pub trait NibbleEq<Other: Nibble>: Nibble {
    type Out: Bool;
}

// X == X
macro_rules! impl_eq_self {
    ($($n:ident),*) => { $(impl NibbleEq<$n> for $n { type Out = Present; })* };
}
impl_eq_self!(X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF);

// X != Y
macro_rules! impl_neq {
    ($a:ident, $b:ident) => {
        impl NibbleEq<$b> for $a {
            type Out = Absent;
        }
    };
}
for_distinct_nibble_pairs!(impl_neq);
