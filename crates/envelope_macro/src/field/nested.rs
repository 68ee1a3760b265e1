//! Nested structure fields.
//!
//! The field's type must implement `Envelope` itself; the runtime recurses
//! into it through `nested_mut`:
//!
//! ```rust,ignore
//! // table row
//! ::envelope::FieldSchema::nested("database", true)
//!
//! // nested_mut arm
//! 1 => {
//!     let nested: &mut Database = &mut self.database;
//!     Some(nested as &mut dyn ::envelope::Envelope)
//! }
//! ```

use proc_macro2::TokenStream as QuoteStream;
use quote::quote;
use syn::{Ident, Type};

use super::FieldGenerator;

/// A field recursed into, embedded or not.
pub struct NestedField {
    /// The struct field name.
    pub name: Ident,

    /// The nested type.
    pub ty: Type,

    /// Declared with `#[envelope(embedded)]`.
    pub embedded: bool,

    /// Doc comment.
    pub doc: Option<String>,
}

impl FieldGenerator for NestedField {
    fn generate_schema(&self) -> QuoteStream {
        let name = self.name.to_string();
        let embedded = self.embedded;

        let schema = quote! { ::envelope::FieldSchema::nested(#name, #embedded) };

        match &self.doc {
            Some(doc) => quote! { #schema.with_doc(#doc) },
            None => schema,
        }
    }

    fn generate_assign_arm(&self, _index: usize) -> Option<QuoteStream> {
        None
    }

    fn generate_nested_arm(&self, index: usize) -> Option<QuoteStream> {
        let name = &self.name;
        let ty = &self.ty;

        Some(quote! {
            #index => {
                let nested: &mut #ty = &mut self.#name;
                ::core::option::Option::Some(nested as &mut dyn ::envelope::Envelope)
            }
        })
    }
}
