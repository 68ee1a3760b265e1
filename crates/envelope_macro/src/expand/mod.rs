//! Code generation orchestration for the `Envelope` derive.
//!
//! The [`Expander`]:
//!
//! 1. **Validates** that the input is a struct with named fields
//! 2. **Classifies** each field into a [`FieldGenerator`](crate::field::FieldGenerator)
//! 3. **Generates** the `impl ::envelope::Envelope` block

use proc_macro::TokenStream;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Data, DeriveInput, Error as SynError, Field, Fields, Result as SynResult};

use crate::field::FieldFactory;

mod envelope;

/// The main orchestrator for macro expansion.
pub struct Expander;

impl Expander {
    /// Main entry point for expanding the derive macro.
    pub fn expand(input: &DeriveInput) -> SynResult<TokenStream> {
        let fields = Self::extract_struct_fields(input)?;

        let mut generators = Vec::with_capacity(fields.len());
        for field in fields {
            if let Some(generator) = FieldFactory::parse_field(field)? {
                generators.push(generator);
            }
        }

        let envelope_impl =
            envelope::generate_envelope_impl(&input.ident, &input.generics, &generators);

        Ok(envelope_impl.into())
    }

    /// Extract named fields from the struct, rejecting invalid types.
    fn extract_struct_fields(input: &DeriveInput) -> SynResult<&Punctuated<Field, Comma>> {
        match &input.data {
            Data::Struct(data_struct) => match &data_struct.fields {
                Fields::Named(fields_named) => Ok(&fields_named.named),

                Fields::Unnamed(_) => Err(SynError::new_spanned(
                    input,
                    "Envelope does not support tuple structs",
                )),

                Fields::Unit => Err(SynError::new_spanned(
                    input,
                    "Envelope does not support unit structs",
                )),
            },

            Data::Enum(_) => Err(SynError::new_spanned(
                input,
                "Envelope can only be derived for structs, not enums",
            )),

            Data::Union(_) => Err(SynError::new_spanned(
                input,
                "Envelope can only be derived for structs, not unions",
            )),
        }
    }
}
