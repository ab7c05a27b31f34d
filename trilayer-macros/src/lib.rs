//! Derive macros used throughout the [trilayer](https://crates.io/crates/trilayer) crate.
//!
//! Currently this only contains `FromForAllUnnamedVariants`, which is what lets error enums in
//! trilayer be composed with the `?` operator without writing every `From` implementation by
//! hand.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

#[proc_macro_derive(FromForAllUnnamedVariants)]
/// Derives a `From<T>` implementation for every variant of the enum that wraps exactly one
/// unnamed field of type `T`.
///
/// Variants with named fields, unit variants and tuple variants with more than one field are
/// skipped, so they can carry plain data (such as a threshold or an index) without producing
/// conversions from primitive types.
pub fn from_for_all_unnamed_variants(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let variants = match &input.data {
        Data::Enum(enm) => &enm.variants,
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "The 'FromForAllUnnamedVariants' derive macro can only be used with enums!",
            )
            .to_compile_error()
            .into();
        }
    };

    let implementations = variants.iter().filter_map(|variant| {
        let fields = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed,
            _ => return None,
        };

        let variant_name = &variant.ident;
        let wrapped_type = &fields.first()?.ty;

        Some(quote! {
            impl #impl_generics ::core::convert::From<#wrapped_type>
                for #enum_name #type_generics #where_clause
            {
                fn from(value: #wrapped_type) -> Self {
                    #enum_name::#variant_name(value)
                }
            }
        })
    });

    quote! {
        #(#implementations)*
    }
    .into()
}
