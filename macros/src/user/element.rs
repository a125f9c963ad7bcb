use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

/// #[derive(Element)] generates a call to the declarative macro bridge.
/// This allows module_path!() to be expanded before the proc-macro processes it.
///
/// 1. #[derive(Element)] (proc-macro) -> generates __impl_element! call
/// 2. __impl_element! (decl-macro) -> passes concat!() to proc-macro
/// 3. make_routing_stream! (proc-macro) -> hashes the expanded path
pub fn expand_derive_element(input: DeriveInput) -> TokenStream2 {
    // One identity per name: `Wrapper<u8>` and `Wrapper<u16>` would collide.
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "#[derive(Element)] supports only non-generic types",
        )
        .to_compile_error();
    }

    let ident = &input.ident;
    let ident_str = ident.to_string();

    quote! {
        ::tola_packs::__impl_element!(#ident, #ident_str);
    }
}
