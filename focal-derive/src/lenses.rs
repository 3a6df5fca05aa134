//! Implementation of the `#[derive(Lenses)]` macro.
//!
//! Works on `proc_macro2` tokens so the expansion can be unit tested.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident};

/// Expands `#[derive(Lenses)]` for the given item.
pub fn derive_lenses_impl(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;

    match &input.data {
        Data::Struct(data_struct) => {
            generate_struct_lenses(name, &input.generics, &data_struct.fields)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Lenses cannot be derived for unions.").to_compile_error()
        }
    }
}

/// Generates one lens constructor per named field.
fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream {
    let named_fields = match fields {
        Fields::Named(named_fields) => named_fields,
        Fields::Unnamed(_) => {
            return syn::Error::new_spanned(
                name,
                "Lenses can only be derived for structs with named fields, not tuple structs.",
            )
            .to_compile_error();
        }
        Fields::Unit => {
            return syn::Error::new_spanned(
                name,
                "Lenses cannot be derived for unit structs (structs with no fields).",
            )
            .to_compile_error();
        }
    };

    let lens_methods = named_fields.named.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let field_type = &field.ty;
        let method_name = format_ident!("{}_lens", field_name);
        let doc = format!(" Returns a lens focusing on the `{field_name}` field.");

        Some(quote! {
            #[doc = #doc]
            #[inline]
            #[must_use]
            pub fn #method_name() -> impl ::focal::optics::Lens<Self, #field_type> + Clone {
                ::focal::optics::FunctionLens::new(
                    |source: &Self| &source.#field_name,
                    |mut source: Self, value: #field_type| {
                        source.#field_name = value;
                        source
                    },
                )
            }
        })
    });

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#lens_methods)*
        }
    }
}
