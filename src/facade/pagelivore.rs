//! Pages as first-class values: the value-pack counterparts of `mouldivore`.

use core::marker::PhantomData;

use crate::pack::{Concat, Reverse};
use crate::primitives::peano::{Idx, Nat, ToPeano};
use crate::value::ValueList;
use crate::vessel::{Page, Pagely};

pub use crate::vessel::AsMold;

/// Apply `F` at `Positions` (an `idx![..]` pack).
pub struct Modified<F, Positions>(PhantomData<(F, Positions)>);

impl<F, Positions> Pagely for Modified<F, Positions> {}

impl<F, Positions, Args> Page<Args> for Modified<F, Positions>
where
    Args: ValueList + crate::pack::Modify<F, Positions>,
{
    type Out = <Args as crate::pack::Modify<F, Positions>>::Out;
}

/// Apply `F` to every value.
pub struct Transformed<F>(PhantomData<F>);

impl<F> Pagely for Transformed<F> {}

impl<F, Args> Page<Args> for Transformed<F>
where
    Args: ValueList + crate::pack::Map<F>,
{
    type Out = <Args as crate::pack::Map<F>>::Out;
}

/// `Args[START..END)`.
pub struct Sliced<const START: usize, const END: usize>;

impl<const START: usize, const END: usize> Pagely for Sliced<START, END> {}

impl<const START: usize, const END: usize, Args> Page<Args> for Sliced<START, END>
where
    Idx<START>: ToPeano,
    Idx<END>: ToPeano,
    Args: ValueList + crate::pack::Range<Nat<START>, Nat<END>>,
{
    type Out = <Args as crate::pack::Range<Nat<START>, Nat<END>>>::Out;
}

/// Call `Op` with its values reversed.
pub struct Flip<Op>(PhantomData<Op>);

impl<Op> Pagely for Flip<Op> {}

impl<Op, Args> Page<Args> for Flip<Op>
where
    Args: ValueList + Reverse,
    Op: Page<<Args as Reverse>::Out>,
{
    type Out = <Op as Page<<Args as Reverse>::Out>>::Out;
}

/// Call `Op` with the values `Front` placed first.
pub struct Bind<Op, Front>(PhantomData<(Op, Front)>);

impl<Op, Front> Pagely for Bind<Op, Front> {}

impl<Op, Front, Args> Page<Args> for Bind<Op, Front>
where
    Args: ValueList,
    Front: ValueList + Concat<Args>,
    Op: Page<<Front as Concat<Args>>::Out>,
{
    type Out = <Op as Page<<Front as Concat<Args>>::Out>>::Out;
}

/// `(Args, P)` to `P<Args>`.
pub struct PageChain;

impl<Args, P: Page<Args>> crate::vessel::Func<(Args, P)> for PageChain {
    type Out = <P as Page<Args>>::Out;
}

/// Feed the values `Args` through a pack of Pages, first to last.
pub type Trek<Pages, Args> = <Pages as crate::pack::FoldLeft<PageChain, Args>>::Out;
