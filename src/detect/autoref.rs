//! Inherent-const probes for concept detection.
//!
//! For each concept `C`:
//! 1. A fallback trait carries `const IS_C: bool = false`
//! 2. The fallback is implemented for `Detect<X>` for all X
//! 3. An inherent const `IS_C = true` exists for `Detect<X>` where `X: C`
//!
//! When resolving `Detect::<Concrete>::IS_C`, the compiler picks the
//! inherent const if `Concrete: C` and the fallback otherwise.

use core::marker::PhantomData;

use crate::vessel::{Moldly, Pagely};

use super::function::Nonoverloaded;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T>(PhantomData<T>);

/// Generate fallback trait + inherent const for a concept.
macro_rules! impl_detect {
    ($Concept:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Concept Fallback>] { const [<IS_ $Concept:upper>]: bool = false; }
            impl<T> [<$Concept Fallback>] for Detect<T> {}
            impl<T: $Concept> Detect<T> { pub const [<IS_ $Concept:upper>]: bool = true; }
        }
    };
}

impl_detect!(Moldly);
impl_detect!(Pagely);
impl_detect!(Nonoverloaded);

/// Check if a concrete type implements a trait at compile time.
///
/// Uses the "Inherent Const Fallback" pattern: an inherent const shadows
/// a trait const when the bound is satisfied.
///
/// ```
/// use tola_packs::has_impl;
///
/// trait Measure {}
/// impl Measure for u8 {}
///
/// assert!(has_impl!(u8, Measure));
/// assert!(!has_impl!(char, Measure));
/// ```
#[macro_export]
macro_rules! has_impl {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T>(core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T> __Fallback for __Probe<T> {}

        impl<T: $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}

/// `true` iff the concrete type is an operation over type packs.
#[macro_export]
macro_rules! is_moldly {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::MoldlyFallback as _;
        $crate::detect::autoref::Detect::<$T>::IS_MOLDLY
    }};
}

/// Negation of `is_moldly!`.
#[macro_export]
macro_rules! is_moldless {
    ($T:ty) => {
        !$crate::is_moldly!($T)
    };
}

/// `true` iff the concrete type is an operation over value packs.
#[macro_export]
macro_rules! is_pagely {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::PagelyFallback as _;
        $crate::detect::autoref::Detect::<$T>::IS_PAGELY
    }};
}

/// Negation of `is_pagely!`.
#[macro_export]
macro_rules! is_pageless {
    ($T:ty) => {
        !$crate::is_pagely!($T)
    };
}

/// `true` iff the concrete type has exactly one call signature.
#[macro_export]
macro_rules! is_nonoverloaded_function_object {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::NonoverloadedFallback as _;
        $crate::detect::autoref::Detect::<$T>::IS_NONOVERLOADED
    }};
}

/// Negation of `is_nonoverloaded_function_object!`.
#[macro_export]
macro_rules! not_nonoverloaded_function_object {
    ($T:ty) => {
        !$crate::is_nonoverloaded_function_object!($T)
    };
}

#[cfg(test)]
mod tests {
    use crate::vessel::{AsList, AsMold, Capsule, Convoy, Shuttle};

    #[test]
    fn test_mold_page_concepts() {
        assert!(is_moldly!(Capsule));
        assert!(is_moldly!(AsList));
        assert!(is_moldly!(Convoy));
        assert!(is_moldly!(AsMold<Shuttle>));
        assert!(is_moldless!(Shuttle));
        assert!(is_moldless!(u8));

        assert!(is_pagely!(Shuttle));
        assert!(is_pageless!(Capsule));
        assert!(is_pageless!(u8));
    }

    #[test]
    fn test_function_objects() {
        assert!(is_nonoverloaded_function_object!(fn(u8) -> u16));
        assert!(is_nonoverloaded_function_object!(fn()));
        assert!(not_nonoverloaded_function_object!(u8));
        assert!(not_nonoverloaded_function_object!(crate::value::UnaryMinus));
    }

    #[test]
    fn test_has_impl() {
        assert!(has_impl!(u8, Clone));
        assert!(!has_impl!(crate::pack::HCons<u8, crate::pack::HNil>, Clone));
    }
}
