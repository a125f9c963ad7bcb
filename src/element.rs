//! # Element identity
//!
//! Stable Rust cannot ask "is `A` the same type as `B`?" from a generic
//! context, so every searchable type carries an identity stream instead:
//!
//! ```text
//! Type Name -> Hash (u64) -> Nibble Stream -> StreamEq up to CompareDepth
//! ```
//!
//! - `#[derive(Element)]` hashes `module_path!()::Name` and the derive site
//!   (file, line, column) with FNV-1a, so fn-local types stay distinct.
//! - Primitive and common std types are hashed by name with BLAKE3 when the
//!   crate is built.
//! - Value carriers spell their kind, sign and digits out directly (see
//!   `value`).
//!
//! Searches compare `Identity` keys. A leaf type's key is its `Element`
//! stream; the crate's own generic constructors (Peano numbers, packs,
//! tuples, vessels) are keyed by structure, so `idx![..]` packs, `Zip`
//! output and packs of vessels can be searched without a derive.
//!
//! ```
//! use tola_packs::prelude::*;
//!
//! #[derive(Element)]
//! struct Meter;
//!
//! assert!(<<pack![u8, Meter] as Has<Meter>>::Out as Bool>::VALUE);
//! ```

use core::marker::PhantomData;

use crate::pack::{HCons, HNil};
use crate::primitives::bool::{Absent, Bool, Present};
use crate::primitives::nibble::{Nibble, NibbleEq, X0, X1, X2, X3, X4, X5, X6, X7, X8};
use crate::primitives::peano::{S, Z};
use crate::primitives::stream::{CompareDepth, HashStream, StreamEq};
use crate::vessel::{Capsule, Convoy, Shuttle, Trolley};

/// A type with an identity stream.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no element identity",
    label = "cannot compare `{Self}` with other pack elements",
    note = "Add `#[derive(Element)]` to your type."
)]
pub trait Element: 'static {
    type Stream: HashStream;
}

macro_rules! impl_std_element {
    ($($t:ident),* $(,)?) => {
        $(
            impl Element for $t {
                type Stream = macros::element_stream!($t);
            }
        )*
    };
}

impl_std_element!(
    bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
);

impl Element for () {
    type Stream = macros::element_stream!("()");
}

impl Element for &'static str {
    type Stream = macros::element_stream!("&str");
}

impl Element for core::cmp::Ordering {
    type Stream = macros::element_stream!("core::cmp::Ordering");
}

impl Element for core::time::Duration {
    type Stream = macros::element_stream!("core::time::Duration");
}

#[cfg(feature = "alloc")]
impl Element for alloc::string::String {
    type Stream = macros::element_stream!("alloc::string::String");
}

// =============================================================================
// Structural identity
// =============================================================================

/// Key of a leaf type: its identity stream.
pub struct Leaf<Stream>(PhantomData<Stream>);

/// Key of a constructor: a tag nibble and the keys of its arguments.
pub struct Node<Tag, Children>(PhantomData<(Tag, Children)>);

/// A type that can be compared with other pack elements.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no identity",
    label = "cannot compare `{Self}` with other pack elements",
    note = "Add `#[derive(Element)]` to your type."
)]
pub trait Identity: 'static {
    type Key;
}

impl<T: Element> Identity for T {
    type Key = Leaf<T::Stream>;
}

// Constructor tags:
// X0 Z, X1 S, X2 HNil, X3 HCons, X4 tuple,
// X5 Capsule, X6 Shuttle, X7 Convoy, X8 Trolley.

impl Identity for Z {
    type Key = Node<X0, HNil>;
}

impl<N: Identity> Identity for S<N> {
    type Key = Node<X1, HCons<N::Key, HNil>>;
}

impl Identity for HNil {
    type Key = Node<X2, HNil>;
}

impl<H: Identity, T: Identity> Identity for HCons<H, T> {
    type Key = Node<X3, HCons<H::Key, HCons<T::Key, HNil>>>;
}

// `()` is a leaf (see above); tuples of arity 1..=16 are structural.
macro_rules! impl_tuple_identity {
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl<$head: Identity $(, $tail: Identity)*> Identity for ($head, $($tail,)*) {
            type Key = Node<X4, crate::pack![$head::Key $(, $tail::Key)*]>;
        }
        impl_tuple_identity!($($tail),*);
    };
}

impl_tuple_identity!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

macro_rules! impl_vessel_identity {
    ($($vessel:ident => $tag:ident),*) => {
        $(
            impl<L: Identity> Identity for $vessel<L> {
                type Key = Node<$tag, HCons<L::Key, HNil>>;
            }
        )*
    };
}

impl_vessel_identity!(Capsule => X5, Shuttle => X6, Convoy => X7, Trolley => X8);

/// `Present` iff two keys are equal.
pub trait KeyEq<Other> {
    type Out: Bool;
}

impl<A, B> KeyEq<Leaf<B>> for Leaf<A>
where
    A: HashStream + StreamEq<B, CompareDepth>,
    B: HashStream,
{
    type Out = <A as StreamEq<B, CompareDepth>>::Out;
}

impl<A, Tag, Children> KeyEq<Node<Tag, Children>> for Leaf<A> {
    type Out = Absent;
}

impl<Tag, Children, B> KeyEq<Leaf<B>> for Node<Tag, Children> {
    type Out = Absent;
}

impl<TagA, A, TagB, B> KeyEq<Node<TagB, B>> for Node<TagA, A>
where
    TagA: NibbleEq<TagB>,
    TagB: Nibble,
    A: KeyListEq<B>,
{
    type Out = <<TagA as NibbleEq<TagB>>::Out as Bool>::And<<A as KeyListEq<B>>::Out>;
}

/// `Present` iff two key lists have equal length and pairwise equal keys.
pub trait KeyListEq<Other> {
    type Out: Bool;
}

impl KeyListEq<HNil> for HNil {
    type Out = Present;
}

impl<H, T> KeyListEq<HCons<H, T>> for HNil {
    type Out = Absent;
}

impl<H, T> KeyListEq<HNil> for HCons<H, T> {
    type Out = Absent;
}

impl<HA, TA, HB, TB> KeyListEq<HCons<HB, TB>> for HCons<HA, TA>
where
    HA: KeyEq<HB>,
    TA: KeyListEq<TB>,
{
    type Out = <<HA as KeyEq<HB>>::Out as Bool>::And<<TA as KeyListEq<TB>>::Out>;
}
