//! # Layer 1: Packs
//!
//! A pack is an inductive type-level list: `HCons<A, HCons<B, HNil>>`,
//! written `pack![A, B]`. Every algorithm is a trait with an `Out`
//! associated type, implemented by induction on the list.
//!
//! ```text
//! select     Skip / Take / Get / Range            (positional selection)
//! segment    Shear / Incise / Enrich / Inject ... (cuts and splices)
//! repack     Concat / Flatten                     (concatenation)
//! reiterate  Reiterate / Repeat / Iota            (repetition)
//! fold       FoldLeft / FoldRight / Trek ...      (folds and chains)
//! transform  Map / Modify / Zip / Among           (element rewriting)
//! search     Has / Find / Interview / AreDistinct (queries)
//! ```
//!
//! Failures are missing impls: an out-of-range index or a length mismatch
//! is reported by the compiler at the use site.

use core::marker::PhantomData;

use crate::primitives::peano::{Peano, S, Z};

pub mod select;
pub mod segment;
pub mod repack;
pub mod reiterate;
pub mod fold;
pub mod transform;
pub mod search;

pub use select::{Get, Range, Skip, Take};
pub use segment::{Enrich, Incise, Inject, Reverse, ReverseOnto, Rotate, Shear, Upend};
pub use repack::{Concat, Flatten, PairUp};
pub use reiterate::{Ascend, AppendIf, Iota, Reiterate, Repeat};
pub use fold::{
    Apply, Chain, ClassicTrek, FoldLeft, FoldLeftFirst, FoldRight, FoldRightLast, MoldTrek, Pipe,
    Trek,
};
pub use transform::{Among, ApplyIf, HasIndex, Map, Modify, ModifyFrom, PickFrom, Zip, ZipWith};
pub use search::{
    AreDistinct, Count, Filter, Find, Has, Interview, KindredFind, RightInterview, Same,
};

// =============================================================================
// List
// =============================================================================

/// Empty pack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HNil;

/// Pack cell: `H` followed by the pack `T`.
pub struct HCons<H, T>(PhantomData<(H, T)>);

/// Type-level list.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a pack",
    label = "expected `HNil` or `HCons<_, _>`",
    note = "Build packs with `pack![..]`, `vals![..]` or `<(..) as Tuple>::AsList`."
)]
pub trait List {
    const LEN: usize;
    type Len: Peano;
}

impl List for HNil {
    const LEN: usize = 0;
    type Len = Z;
}

impl<H, T: List> List for HCons<H, T> {
    const LEN: usize = T::LEN + 1;
    type Len = S<T::Len>;
}

// =============================================================================
// Tuple conversion
// =============================================================================

/// Convert a flat tuple `(A, B, C)` into `pack![A, B, C]`.
pub trait Tuple {
    type AsList: List;
}

/// Convert a pack back into its flat tuple.
pub trait IntoTuple: List {
    type AsTuple;
}

macro_rules! impl_tuple_list {
    () => {
        impl Tuple for () {
            type AsList = HNil;
        }
        impl IntoTuple for HNil {
            type AsTuple = ();
        }
    };
    ($head:ident $(, $tail:ident)*) => {
        impl<$head $(, $tail)*> Tuple for ($head, $($tail,)*) {
            type AsList = HCons<$head, <($($tail,)*) as Tuple>::AsList>;
        }
        impl<$head $(, $tail)*> IntoTuple for crate::pack![$head $(, $tail)*] {
            type AsTuple = ($head, $($tail,)*);
        }
        impl_tuple_list!($($tail),*);
    };
}

impl_tuple_list!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);
