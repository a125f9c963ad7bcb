//! Procedural macros for tola-packs
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Element)]` | struct/enum | Identity stream for pack searches |
//! | `vals![..]` | - | Build a value pack from literals |
//! | `val!(..)` | - | Build a single value carrier |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Element)]
//! struct Meter;
//!
//! type Units = pack![Meter, u8];
//! type Digits = vals![0, -1, 7u8, true, 'x'];
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: inner / user)
// =============================================================================

mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano number type aliases D0..Dn and their `Idx<n>` lifts.
///
/// # Usage
/// ```ignore
/// peano!(256);  // D0 = Z, D1 = S<D0>, ..., plus `impl ToPeano for Idx<n>`
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

/// Identity stream for a type named at macro time (BLAKE3 of the name).
///
/// Usage: `element_stream!(u8)` or `element_stream!("&str")`
#[proc_macro]
pub fn element_stream(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::stream::ElementStreamInput);
    inner::stream::expand_element_stream(input).into()
}

/// Internal: Compute identity hash stream from a full module path string.
/// Input must be a string literal or a `concat!` expression.
#[proc_macro]
pub fn make_routing_stream(input: TokenStream) -> TokenStream {
    inner::stream::expand_make_routing_stream(input.into()).into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive macro to implement the `Element` trait.
///
/// Hashes `module_path!()::Name` plus the derive site into a `HashStream16`.
///
/// # Usage
/// ```ignore
/// #[derive(Element)]
/// struct Meter;
///
/// assert!(<<pack![u8, Meter] as Has<Meter>>::Out as Bool>::VALUE);
/// ```
#[proc_macro_derive(Element)]
pub fn derive_element(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_element(input).into()
}

/// Build a value pack from literals.
///
/// Unsuffixed integers are `i32`; suffixes pick the kind (`7u8`, `-2i64`).
/// `true`/`false` and char literals are accepted too. `isize`/`usize`
/// literals outside the 32-bit range compile only for 64-bit targets.
///
/// # Usage
/// ```ignore
/// type P = vals![0, 1, -2, 3u8, true, 'x'];
/// ```
#[proc_macro]
pub fn vals(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::value::ValsInput);
    inner::value::expand_vals(input).into()
}

/// Build a single value carrier: `val!(-3)`.
#[proc_macro]
pub fn val(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as syn::Expr);
    inner::value::expand_val(&expr).into()
}
