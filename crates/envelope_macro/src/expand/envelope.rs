//! `impl Envelope` generation.
//!
//! # Generated Code Pattern
//!
//! ```rust,ignore
//! #[automatically_derived]
//! impl ::envelope::Envelope for Config {
//!     fn fields(&self) -> &'static [::envelope::FieldSchema] {
//!         const FIELDS: &[::envelope::FieldSchema] = &[ /* one row per field */ ];
//!         FIELDS
//!     }
//!
//!     fn assign(&mut self, index: usize, value: ::envelope::Value) -> bool {
//!         match index {
//!             /* leaf arms */
//!             _ => false,
//!         }
//!     }
//!
//!     fn nested_mut(&mut self, index: usize) -> Option<&mut dyn ::envelope::Envelope> {
//!         match index {
//!             /* nested arms */
//!             _ => None,
//!         }
//!     }
//! }
//! ```
//!
//! The table never mentions the struct's generic parameters, so it stays a
//! plain constant even for generic structs.

use proc_macro2::TokenStream as QuoteStream;
use quote::quote;
use syn::{Generics, Ident};

use crate::field::FieldGenerator;

/// Generates the `impl ::envelope::Envelope` block.
pub fn generate_envelope_impl(
    struct_name: &Ident,
    generics: &Generics,
    generators: &[Box<dyn FieldGenerator>],
) -> QuoteStream {
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let rows: Vec<QuoteStream> = generators.iter().map(|g| g.generate_schema()).collect();

    let assign_arms: Vec<QuoteStream> = generators
        .iter()
        .enumerate()
        .filter_map(|(index, g)| g.generate_assign_arm(index))
        .collect();

    let nested_arms: Vec<QuoteStream> = generators
        .iter()
        .enumerate()
        .filter_map(|(index, g)| g.generate_nested_arm(index))
        .collect();

    // An empty match would leave `value` unused in the expansion.
    let assign_body = if assign_arms.is_empty() {
        quote! {
            let _ = (index, value);
            false
        }
    } else {
        quote! {
            match index {
                #(#assign_arms)*
                _ => false,
            }
        }
    };

    let nested_body = if nested_arms.is_empty() {
        quote! {
            let _ = index;
            ::core::option::Option::None
        }
    } else {
        quote! {
            match index {
                #(#nested_arms)*
                _ => ::core::option::Option::None,
            }
        }
    };

    quote! {
        #[automatically_derived]
        impl #impl_generics ::envelope::Envelope for #struct_name #type_generics #where_clause {
            fn fields(&self) -> &'static [::envelope::FieldSchema] {
                const FIELDS: &[::envelope::FieldSchema] = &[
                    #(#rows),*
                ];
                FIELDS
            }

            fn assign(&mut self, index: usize, value: ::envelope::Value) -> bool {
                #assign_body
            }

            fn nested_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn ::envelope::Envelope> {
                #nested_body
            }
        }
    }
}
