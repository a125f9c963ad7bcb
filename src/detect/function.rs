//! Function objects with exactly one call signature.

use crate::pack::List;

/// A callable with a single, fully known signature.
///
/// Implemented for `fn` pointers of arity 0 to 8. Pointers that are generic
/// over a lifetime (`for<'a> fn(&'a u8)`) have one signature per lifetime
/// and are not covered.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not have exactly one call signature",
    note = "Only `fn` pointers with concrete argument types qualify."
)]
pub trait Nonoverloaded {
    /// Parameter types as a pack.
    type Args: List;
    type Output;
    const ARITY: usize;
}

macro_rules! impl_nonoverloaded {
    ($($arg:ident),*) => {
        impl<$($arg,)* R> Nonoverloaded for fn($($arg),*) -> R {
            type Args = crate::pack![$($arg),*];
            type Output = R;
            const ARITY: usize = <crate::pack![$($arg),*] as List>::LEN;
        }
    };
}

impl_nonoverloaded!();
impl_nonoverloaded!(A);
impl_nonoverloaded!(A, B);
impl_nonoverloaded!(A, B, C);
impl_nonoverloaded!(A, B, C, D);
impl_nonoverloaded!(A, B, C, D, E);
impl_nonoverloaded!(A, B, C, D, E, F);
impl_nonoverloaded!(A, B, C, D, E, F, G);
impl_nonoverloaded!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature() {
        type F = fn(u8, char) -> bool;
        assert_eq!(<F as Nonoverloaded>::ARITY, 2);
        crate::assert_same!(<F as Nonoverloaded>::Args, crate::pack![u8, char]);
        crate::assert_same!(<F as Nonoverloaded>::Output, bool);
        assert_eq!(<fn() as Nonoverloaded>::ARITY, 0);
    }
}
