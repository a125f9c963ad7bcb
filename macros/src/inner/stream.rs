//! Identity stream generation.
//!
//! Two hash families feed `HashStream16`:
//! - BLAKE3 for names known when the macro runs (`element_stream!("u8")`);
//! - FNV-1a, evaluated by const fn, for `concat!(module_path!(), ..)` input
//!   that only resolves after the derive bridge expands.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};

pub struct ElementStreamInput {
    pub name: String,
}

impl Parse for ElementStreamInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = if input.peek(syn::LitStr) {
            input.parse::<syn::LitStr>()?.value()
        } else {
            // Paths and primitive types: `u8`, `core::cmp::Ordering`
            let ty: syn::Type = input.parse()?;
            quote!(#ty).to_string().replace(' ', "")
        };
        if !input.is_empty() {
            return Err(input.error("expected a single type or string literal"));
        }
        Ok(ElementStreamInput { name })
    }
}

pub fn expand_element_stream(input: ElementStreamInput) -> TokenStream {
    let digest = blake3::hash(input.name.as_bytes());
    let mut word = [0u8; 8];
    word.copy_from_slice(&digest.as_bytes()[..8]);
    hash_stream_16(u64::from_le_bytes(word))
}

pub fn expand_make_routing_stream(input: TokenStream) -> TokenStream {
    // 1. Direct string literal
    if let Ok(lit) = syn::parse2::<syn::LitStr>(input.clone()) {
        return hash_stream_16(fnv1a_64(&lit.value()));
    }

    // 2. concat!(module_path!(), ...): hash with the const fn twin
    let nibbles = (0u8..16).map(|i| {
        quote! { { ::tola_packs::primitives::const_utils::hash_nibble(#input, #i) } }
    });
    quote! {
        ::tola_packs::primitives::stream::HashStream16<#(#nibbles),*>
    }
}

fn hash_stream_16(hash: u64) -> TokenStream {
    let nibbles = (0..16).map(|i| ((hash >> (i * 4)) & 0xF) as u8);
    quote! {
        ::tola_packs::primitives::stream::HashStream16<#(#nibbles),*>
    }
}

/// Must agree with `const_utils::fnv1a_64_str`.
pub fn fnv1a_64(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for b in s.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
