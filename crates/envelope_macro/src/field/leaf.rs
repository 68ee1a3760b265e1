//! Leaf fields: one variable, one primitive value.
//!
//! # Generated Code Pattern
//!
//! ```rust,ignore
//! // table row
//! ::envelope::FieldSchema::leaf(
//!     "port",
//!     Some("DATABASE_PORT,default:5432"),
//!     <i64 as ::envelope::Leaf>::KIND,
//! )
//!
//! // assign arm
//! 1 => <i64 as ::envelope::Leaf>::from_value(value)
//!     .map(|v| self.port = v)
//!     .is_some(),
//! ```
//!
//! Fields whose type the runtime cannot convert into get
//! `Kind::Unsupported("<type>")` and no assign arm; decoding them reports
//! a conversion error naming the type.

use proc_macro2::TokenStream as QuoteStream;
use quote::quote;
use syn::{Ident, Type};

use super::{FieldGenerator, type_name};

/// A primitive field, annotated or not.
pub struct LeafField {
    /// The struct field name.
    pub name: Ident,

    /// The declared type.
    pub ty: Type,

    /// Whether `ty` is one of the convertible leaf types.
    pub convertible: bool,

    /// The raw annotation string, `None` for unannotated fields.
    pub annotation: Option<String>,

    /// Doc comment, for `.env.example` output.
    pub doc: Option<String>,
}

impl LeafField {
    fn kind(&self) -> QuoteStream {
        let ty = &self.ty;

        if self.convertible {
            quote! { <#ty as ::envelope::Leaf>::KIND }
        } else {
            let name = type_name(ty);
            quote! { ::envelope::Kind::Unsupported(#name) }
        }
    }
}

impl FieldGenerator for LeafField {
    fn generate_schema(&self) -> QuoteStream {
        let name = self.name.to_string();
        let kind = self.kind();

        let annotation = match &self.annotation {
            Some(annotation) => quote! { ::core::option::Option::Some(#annotation) },
            None => quote! { ::core::option::Option::None },
        };

        let schema = quote! { ::envelope::FieldSchema::leaf(#name, #annotation, #kind) };

        match &self.doc {
            Some(doc) => quote! { #schema.with_doc(#doc) },
            None => schema,
        }
    }

    fn generate_assign_arm(&self, index: usize) -> Option<QuoteStream> {
        if !self.convertible || self.annotation.is_none() {
            return None;
        }

        let name = &self.name;
        let ty = &self.ty;

        Some(quote! {
            #index => <#ty as ::envelope::Leaf>::from_value(value)
                .map(|v| self.#name = v)
                .is_some(),
        })
    }

    fn generate_nested_arm(&self, _index: usize) -> Option<QuoteStream> {
        None
    }
}
