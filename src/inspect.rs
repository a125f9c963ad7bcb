//! Runtime reflection for debugging.
//!
//! Everything in this crate happens at compile time; these traits walk a
//! pack at runtime so a result can be printed or asserted on.
//!
//! ```
//! use tola_packs::prelude::*;
//!
//! assert_eq!(<pack![u8, bool] as Inspect>::names(), vec!["u8", "bool"]);
//! assert_eq!(<vals![3, -1] as Recite>::values(), vec![3, -1]);
//! ```

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::pack::{HCons, HNil};
use crate::value::Value;
use crate::vessel::{Capsule, Convoy, Shuttle, Trolley};

/// Walk the element types of a pack.
pub trait Inspect {
    /// Calls `f` for each element with its type name.
    fn inspect<F: FnMut(&'static str)>(f: F);

    /// Element type names, in order.
    #[cfg(feature = "alloc")]
    fn names() -> Vec<&'static str> {
        let mut out = Vec::new();
        Self::inspect(|name| out.push(name));
        out
    }
}

impl Inspect for HNil {
    fn inspect<F: FnMut(&'static str)>(_f: F) {}
}

impl<H, T: Inspect> Inspect for HCons<H, T> {
    fn inspect<F: FnMut(&'static str)>(mut f: F) {
        f(core::any::type_name::<H>());
        T::inspect(f);
    }
}

/// Walk the carried values of a value pack.
pub trait Recite {
    /// Sum of the values.
    const SUM: i128;

    /// Calls `f` for each value.
    fn recite<F: FnMut(i128)>(f: F);

    /// Values, in order.
    #[cfg(feature = "alloc")]
    fn values() -> Vec<i128> {
        let mut out = Vec::new();
        Self::recite(|v| out.push(v));
        out
    }
}

impl Recite for HNil {
    const SUM: i128 = 0;
    fn recite<F: FnMut(i128)>(_f: F) {}
}

impl<H: Value, T: Recite> Recite for HCons<H, T> {
    const SUM: i128 = H::VALUE + T::SUM;

    fn recite<F: FnMut(i128)>(mut f: F) {
        f(H::VALUE);
        T::recite(f);
    }
}

// Vessels delegate to their items.
macro_rules! delegate_vessel {
    ($($vessel:ident),*) => {
        $(
            impl<L: Inspect> Inspect for $vessel<L> {
                fn inspect<F: FnMut(&'static str)>(f: F) {
                    L::inspect(f);
                }
            }
        )*
    };
}

delegate_vessel!(Capsule, Shuttle, Convoy, Trolley);

impl<L: Recite> Recite for Shuttle<L> {
    const SUM: i128 = L::SUM;

    fn recite<F: FnMut(i128)>(f: F) {
        L::recite(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_walks_in_order() {
        let mut seen = [""; 3];
        let mut i = 0;
        <crate::pack![u8, char, Capsule] as Inspect>::inspect(|name| {
            seen[i] = name;
            i += 1;
        });
        assert_eq!(seen[0], "u8");
        assert_eq!(seen[1], "char");
        assert!(seen[2].contains("Capsule"));
    }

    #[test]
    fn test_recite() {
        assert_eq!(<crate::vals![1, -2, 40u8] as Recite>::SUM, 39);
        let mut total = 0;
        <Shuttle<crate::vals![5, 6]> as Recite>::recite(|v| total += v);
        assert_eq!(total, 11);
    }
}
