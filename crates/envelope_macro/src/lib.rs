//! # envelope_macro
//!
//! Procedural macro implementation for the `envelope` crate.
//!
//! Provides `#[derive(Envelope)]`, which turns a struct with named fields
//! into a static field table plus a typed setter. Users should depend on
//! `envelope`, which re-exports the derive next to the runtime types.
//!
//! # Module Structure
//!
//! - `parse` - `#[envelope(...)]` attribute parsing and doc comment extraction
//! - `field` - Field classification and per-field code generation
//! - `expand` - Input validation and `impl Envelope` assembly

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod expand;
mod field;
mod parse;

/// Derive macro implementing `envelope::Envelope`.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[envelope("KEY")]` | Bind the field to variable `KEY` |
/// | `#[envelope("KEY,required")]` | Fail when `KEY` is unset |
/// | `#[envelope("KEY,default:VALUE")]` | Use `VALUE` when `KEY` is unset |
/// | `#[envelope(embedded)]` | Nested struct, flattened under `Nesting::Flattened` |
/// | `#[envelope(skip)]` | Leave the field out of the table |
///
/// Unannotated fields whose type is another struct are recursed into; that
/// type must implement `Envelope` too. Unannotated primitive fields are
/// left alone.
///
/// # Example
///
/// ```ignore
/// use envelope::Envelope;
///
/// #[derive(Clone, Default, Envelope)]
/// struct Database {
///     /// Database host
///     #[envelope("DATABASE_ADDR,required")]
///     addr: String,
///
///     #[envelope("DATABASE_PORT,default:5432")]
///     port: i64,
/// }
///
/// #[derive(Clone, Default, Envelope)]
/// struct Config {
///     #[envelope(embedded)]
///     database: Database,
///
///     #[envelope(skip)]
///     cache: std::collections::HashMap<String, String>,
/// }
/// ```
#[proc_macro_derive(Envelope, attributes(envelope))]
pub fn derive_envelope(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand::Expander::expand(&input).unwrap_or_else(|err| err.to_compile_error().into())
}
