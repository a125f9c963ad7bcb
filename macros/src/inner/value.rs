//! Value carrier generation for `vals!` / `val!`.
//!
//! `-3` becomes `Val<i32, X1, Cons<X3, Zeros>>`: kind, sign nibble, then the
//! magnitude as little-endian nibbles over a zero stream. Zero has no digits,
//! so every value has exactly one spelling.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, Lit, Token, UnOp};

pub struct ValsInput {
    pub items: Vec<Expr>,
}

impl Parse for ValsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let items = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
        Ok(ValsInput { items: items.into_iter().collect() })
    }
}

/// Integer kinds with their inclusive ranges.
const KINDS: &[(&str, i128, i128)] = &[
    ("i8", i8::MIN as i128, i8::MAX as i128),
    ("i16", i16::MIN as i128, i16::MAX as i128),
    ("i32", i32::MIN as i128, i32::MAX as i128),
    ("i64", i64::MIN as i128, i64::MAX as i128),
    ("isize", i64::MIN as i128, i64::MAX as i128),
    ("u8", 0, u8::MAX as i128),
    ("u16", 0, u16::MAX as i128),
    ("u32", 0, u32::MAX as i128),
    ("u64", 0, u64::MAX as i128),
    ("usize", 0, u64::MAX as i128),
];

pub fn expand_vals(input: ValsInput) -> TokenStream {
    let mut list = quote! { ::tola_packs::pack::HNil };
    for expr in input.items.iter().rev() {
        let item = match expand_one(expr) {
            Ok(item) => item,
            Err(err) => return err.to_compile_error(),
        };
        list = quote! { ::tola_packs::pack::HCons<#item, #list> };
    }
    list
}

pub fn expand_val(expr: &Expr) -> TokenStream {
    expand_one(expr).unwrap_or_else(|err| err.to_compile_error())
}

fn expand_one(expr: &Expr) -> syn::Result<TokenStream> {
    let (negative, lit) = match expr {
        Expr::Lit(lit) => (false, &lit.lit),
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => match &*unary.expr {
            Expr::Lit(lit) => (true, &lit.lit),
            other => return Err(unsupported(other)),
        },
        Expr::Group(group) => return expand_one(&group.expr),
        Expr::Paren(paren) => return expand_one(&paren.expr),
        other => return Err(unsupported(other)),
    };

    let (kind, magnitude) = match lit {
        Lit::Int(int) => {
            let suffix = if int.suffix().is_empty() { "i32" } else { int.suffix() };
            let (_, min, max) = KINDS
                .iter()
                .find(|(name, _, _)| *name == suffix)
                .ok_or_else(|| syn::Error::new(int.span(), format!("unsupported value kind `{}`", suffix)))?;
            let magnitude: u64 = int.base10_parse()?;
            let signed = if negative { -(magnitude as i128) } else { magnitude as i128 };
            if signed < *min || signed > *max {
                return Err(syn::Error::new(
                    expr.span(),
                    format!("{} is out of range for `{}`", signed, suffix),
                ));
            }
            (pointer_kind(suffix, signed).unwrap_or_else(|| plain_kind(suffix)), magnitude)
        }
        Lit::Bool(b) if !negative => (plain_kind("bool"), b.value as u64),
        Lit::Char(c) if !negative => (plain_kind("char"), c.value() as u64),
        other => return Err(unsupported(other)),
    };

    let sign = if negative && magnitude != 0 { format_ident!("X1") } else { format_ident!("X0") };
    let mag = magnitude_stream(magnitude);
    Ok(quote! {
        ::tola_packs::value::Val<#kind, ::tola_packs::primitives::nibble::#sign, #mag>
    })
}

fn plain_kind(name: &str) -> TokenStream {
    let ident = format_ident!("{}", name);
    quote!(#ident)
}

/// `isize`/`usize` values that need more than 32 bits go through
/// `PointerWide`, which only the 64-bit build of the library implements.
/// 16-bit targets are not supported.
fn pointer_kind(suffix: &str, signed: i128) -> Option<TokenStream> {
    let wide = match suffix {
        "isize" => signed < i32::MIN as i128 || signed > i32::MAX as i128,
        "usize" => signed > u32::MAX as i128,
        _ => false,
    };
    if !wide {
        return None;
    }
    let assoc = if suffix == "isize" { format_ident!("Isize") } else { format_ident!("Usize") };
    Some(quote! {
        <::tola_packs::value::Wide as ::tola_packs::value::PointerWide>::#assoc
    })
}

fn magnitude_stream(mut magnitude: u64) -> TokenStream {
    let mut digits = Vec::new();
    while magnitude != 0 {
        digits.push((magnitude & 0xF) as u8);
        magnitude >>= 4;
    }
    let mut stream = quote! { ::tola_packs::primitives::stream::Zeros };
    for digit in digits.into_iter().rev() {
        let nibble = format_ident!("X{:X}", digit);
        stream = quote! {
            ::tola_packs::primitives::stream::Cons<::tola_packs::primitives::nibble::#nibble, #stream>
        };
    }
    stream
}

fn unsupported<T: quote::ToTokens>(tokens: T) -> syn::Error {
    syn::Error::new_spanned(
        tokens,
        "expected an integer, bool or char literal (optionally negated)",
    )
}
