//! Declarative syntax: pack literals, index packs and static type assertions.

// =============================================================================
// pack! - Build a pack type
// =============================================================================

/// Build a pack type from element types.
///
/// ```
/// use tola_packs::pack;
/// use tola_packs::pack::{HCons, HNil};
///
/// tola_packs::assert_same!(pack![u8, char], HCons<u8, HCons<char, HNil>>);
/// tola_packs::assert_same!(pack![], HNil);
/// ```
#[macro_export]
macro_rules! pack {
    () => { $crate::pack::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::pack::HCons<$head, $crate::pack![$($tail),*]>
    };
}

// =============================================================================
// idx! - Build a pack of Peano indices
// =============================================================================

/// Build a pack of Peano indices from literals, for `Modify`, `Among` and
/// the `CognateModify` façades.
///
/// ```
/// use tola_packs::{idx, pack};
/// use tola_packs::primitives::peano::{D1, D3};
///
/// tola_packs::assert_same!(idx![1, 3], pack![D1, D3]);
/// ```
#[macro_export]
macro_rules! idx {
    ($($n:expr),* $(,)?) => {
        $crate::pack![$($crate::primitives::peano::Nat<{ $n }>),*]
    };
}

// =============================================================================
// assert_same! - Static type equality
// =============================================================================

/// Fail to compile unless both types normalize to the same type.
///
/// ```compile_fail
/// tola_packs::assert_same!(u8, u16);
/// ```
#[macro_export]
macro_rules! assert_same {
    ($a:ty, $b:ty $(,)?) => {
        const _: () = {
            #[allow(dead_code)]
            fn __same(x: ::core::marker::PhantomData<$a>) -> ::core::marker::PhantomData<$b> {
                x
            }
        };
    };
}
