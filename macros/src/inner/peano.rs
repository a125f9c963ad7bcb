//! Peano number generation macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, LitInt};

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(PeanoInput { max })
    }
}

/// Expands to the `D0..=Dmax` aliases plus `ToPeano for Idx<n>`.
///
/// Must be invoked where `Z`, `S`, `Idx` and `ToPeano` are in scope.
pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let max = input.max;

    // D0 = Z
    let mut types = vec![quote! { pub type D0 = Z; }];

    // D1..Dmax = S<D(n-1)>
    for n in 1..=max {
        let curr = digit(n);
        let prev = digit(n - 1);
        types.push(quote! { pub type #curr = S<#prev>; });
    }

    let lifts = (0..=max).map(|n| {
        let alias = digit(n);
        let lit = proc_macro2::Literal::usize_unsuffixed(n);
        quote! {
            impl ToPeano for Idx<#lit> {
                type Out = #alias;
            }
        }
    });

    quote! {
        #(#types)*
        #(#lifts)*
    }
}

fn digit(n: usize) -> syn::Ident {
    syn::Ident::new(&format!("D{}", n), proc_macro2::Span::call_site())
}
