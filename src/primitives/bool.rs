//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//! Every predicate in the crate (`Has`, `AreDistinct`, `PeanoEq`, ...) answers
//! with one of these two types.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: picks `Then` for `Present`, `Else` for `Absent`.
    type If<Then, Else>;

    /// Same as `If`, but both branches are known to be `Bool`.
    type Elif<Then: Bool, Else: Bool>: Bool;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type Elif<Then: Bool, Else: Bool> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type Elif<Then: Bool, Else: Bool> = Else;
    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;
}

/// Trait form of `Bool::And`, handy in where clauses.
pub trait BoolAnd<Other: Bool>: Bool {
    type Out: Bool;
}
impl<A: Bool, B: Bool> BoolAnd<B> for A {
    type Out = A::And<B>;
}

/// Trait form of `Bool::Or`.
pub trait BoolOr<Other: Bool>: Bool {
    type Out: Bool;
}
impl<A: Bool, B: Bool> BoolOr<B> for A {
    type Out = A::Or<B>;
}

/// Trait form of `Bool::Not`.
pub trait BoolNot: Bool {
    type Out: Bool;
}
impl<A: Bool> BoolNot for A {
    type Out = A::Not;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// Lift a literal bool.
pub type Lift<const C: bool> = <() as SelectBool<C>>::Out;

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <Lift<C> as Bool>::If<T, E>;

/// Strict Conditional Type Alias (Result is Bool)
pub type Elif<const C: bool, T, E> = <Lift<C> as Bool>::Elif<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_tables() {
        assert!(<<Present as BoolAnd<Present>>::Out as Bool>::VALUE);
        assert!(!<<Present as BoolAnd<Absent>>::Out as Bool>::VALUE);
        assert!(<<Absent as BoolOr<Present>>::Out as Bool>::VALUE);
        assert!(!<<Absent as BoolOr<Absent>>::Out as Bool>::VALUE);
        assert!(<<Absent as BoolNot>::Out as Bool>::VALUE);
    }

    #[test]
    fn test_lifted_conditionals() {
        crate::assert_same!(If<true, u8, u16>, u8);
        crate::assert_same!(If<false, u8, u16>, u16);
        assert!(!<Elif<false, Present, Absent> as Bool>::VALUE);
    }
}
