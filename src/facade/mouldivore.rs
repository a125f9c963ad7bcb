//! Molds as first-class values.
//!
//! Each type here is an operation over type packs. They compose: pass them
//! as continuations, chain them with `Trek`, or wrap them with `Flip` and
//! `Bind`.
//!
//! ```
//! use tola_packs::prelude::*;
//! use tola_packs::facade::mouldivore::{Reversed, Sliced, Trek};
//!
//! type Steps = pack![Sliced<1, 4>, Reversed];
//! tola_packs::assert_same!(Trek<Steps, pack![u8, u16, u32, u64, i8]>, pack![u64, u32, u16]);
//! ```

use core::marker::PhantomData;

use crate::pack::{Concat, List, Reverse};
use crate::primitives::peano::{Idx, Nat, ToPeano};
use crate::vessel::{Mold, Moldly};

macro_rules! mold_marker {
    ($($(#[$doc:meta])* $name:ident<$(const $c:ident),*>;)*) => {
        $(
            $(#[$doc])*
            pub struct $name<$(const $c: usize),*>;
            impl<$(const $c: usize),*> Moldly for $name<$($c),*> {}
        )*
    };
}

mold_marker! {
    /// `Args[START..END)`.
    Sliced<const START, const END>;
    /// `Args[K..len) ++ Args[0..K)`.
    Rotated<const K>;
    /// Drop the first `K` arguments.
    Trimmed<const K>;
    /// Keep the first `K` arguments.
    Prefixed<const K>;
    /// Argument at index `I`.
    Amid<const I>;
    /// Arguments repeated `N` times.
    Reiterated<const N>;
}

impl<const START: usize, const END: usize, Args> Mold<Args> for Sliced<START, END>
where
    Idx<START>: ToPeano,
    Idx<END>: ToPeano,
    Args: crate::pack::Range<Nat<START>, Nat<END>>,
{
    type Out = <Args as crate::pack::Range<Nat<START>, Nat<END>>>::Out;
}

impl<const K: usize, Args> Mold<Args> for Rotated<K>
where
    Idx<K>: ToPeano,
    Args: crate::pack::Rotate<Nat<K>>,
{
    type Out = <Args as crate::pack::Rotate<Nat<K>>>::Out;
}

impl<const K: usize, Args> Mold<Args> for Trimmed<K>
where
    Idx<K>: ToPeano,
    Args: crate::pack::Skip<Nat<K>>,
{
    type Out = <Args as crate::pack::Skip<Nat<K>>>::Out;
}

impl<const K: usize, Args> Mold<Args> for Prefixed<K>
where
    Idx<K>: ToPeano,
    Args: crate::pack::Take<Nat<K>>,
{
    type Out = <Args as crate::pack::Take<Nat<K>>>::Out;
}

impl<const I: usize, Args> Mold<Args> for Amid<I>
where
    Idx<I>: ToPeano,
    Args: crate::pack::Get<Nat<I>>,
{
    type Out = <Args as crate::pack::Get<Nat<I>>>::Out;
}

impl<const N: usize, Args> Mold<Args> for Reiterated<N>
where
    Idx<N>: ToPeano,
    Args: crate::pack::Reiterate<Nat<N>>,
{
    type Out = <Args as crate::pack::Reiterate<Nat<N>>>::Out;
}

/// Splice `Q` in at index `K`.
pub struct Injected<const K: usize, Q>(PhantomData<Q>);

impl<const K: usize, Q> Moldly for Injected<K, Q> {}

impl<const K: usize, Q, Args> Mold<Args> for Injected<K, Q>
where
    Idx<K>: ToPeano,
    Args: crate::pack::Inject<Nat<K>, Q>,
{
    type Out = <Args as crate::pack::Inject<Nat<K>, Q>>::Out;
}

/// Arguments in reverse order.
pub struct Reversed;

impl Moldly for Reversed {}

impl<Args: Reverse> Mold<Args> for Reversed {
    type Out = <Args as Reverse>::Out;
}

/// Apply `F` to every argument.
pub struct Transformed<F>(PhantomData<F>);

impl<F> Moldly for Transformed<F> {}

impl<F, Args: crate::pack::Map<F>> Mold<Args> for Transformed<F> {
    type Out = <Args as crate::pack::Map<F>>::Out;
}

// =============================================================================
// Adaptors
// =============================================================================

/// Call `Op` with its arguments reversed.
pub struct Flip<Op>(PhantomData<Op>);

impl<Op> Moldly for Flip<Op> {}

impl<Op, Args> Mold<Args> for Flip<Op>
where
    Args: Reverse,
    Op: Mold<<Args as Reverse>::Out>,
{
    type Out = <Op as Mold<<Args as Reverse>::Out>>::Out;
}

/// Call `Op` with `Front` placed before the arguments.
pub struct Bind<Op, Front>(PhantomData<(Op, Front)>);

impl<Op, Front> Moldly for Bind<Op, Front> {}

impl<Op, Front, Args> Mold<Args> for Bind<Op, Front>
where
    Args: List,
    Front: Concat<Args>,
    Op: Mold<<Front as Concat<Args>>::Out>,
{
    type Out = <Op as Mold<<Front as Concat<Args>>::Out>>::Out;
}

/// A pack of Molds run first to last, usable as a single Mold.
pub struct Chained<Molds>(PhantomData<Molds>);

impl<Molds> Moldly for Chained<Molds> {}

impl<Molds, Args> Mold<Args> for Chained<Molds>
where
    Molds: crate::pack::MoldTrek<Args>,
{
    type Out = <Molds as crate::pack::MoldTrek<Args>>::Out;
}

/// Feed `Args` through `Molds`, first to last.
pub type Trek<Molds, Args> = <Molds as crate::pack::MoldTrek<Args>>::Out;

/// Feed `Args` through `Molds`, last to first.
pub type ClassicTrek<Molds, Args> =
    <<Molds as Reverse>::Out as crate::pack::MoldTrek<Args>>::Out;
