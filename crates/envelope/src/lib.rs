//! # envelope
//!
//! Binds environment variables into strongly-typed configuration structs.
//!
//! Each field names the variable it reads, and optional modifiers, in a
//! single annotation string. `#[derive(Envelope)]` turns the struct into a
//! static field table; decoding walks that table, converts each value into
//! the field's type and reports every problem at once.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use envelope::Envelope;
//!
//! #[derive(Clone, Debug, Default, Envelope)]
//! struct Database {
//!     #[envelope("DATABASE_ADDR,required")]
//!     addr: String,
//!
//!     #[envelope("DATABASE_PORT,default:5432")]
//!     port: i64,
//! }
//!
//! #[derive(Clone, Debug, Default, Envelope)]
//! struct Config {
//!     database: Database,
//!
//!     #[envelope("DEBUG")]
//!     debug: bool,
//! }
//!
//! fn main() -> envelope::Result<()> {
//!     let config: Config = envelope::from_env()?;
//!     println!("connecting to {}:{}", config.database.addr, config.database.port);
//!     Ok(())
//! }
//! ```
//!
//! ## Annotation Grammar
//!
//! ```text
//! <key>[,<modifier>]*      modifier = required | default:<value>
//! ```
//!
//! | Situation | Result |
//! |-----------|--------|
//! | variable set | converted and assigned |
//! | unset, `required` | `missing a required field "<key>"` |
//! | unset, `default:<v>` | `<v>` converted and assigned |
//! | unset, neither | field keeps its prior value |
//! | not convertible | `error converting value from "<key>" field into <kind>` |
//!
//! Unknown modifiers are ignored.
//!
//! ## Field Types
//!
//! | Rust type | Kind |
//! |-----------|------|
//! | `String` | `string` |
//! | `i64` | `int` |
//! | `f64` | `float64` |
//! | `bool` | `bool` (`1 t T TRUE true True` / `0 f F FALSE false False`) |
//! | any `Envelope` struct | nested, recursed into |
//!
//! Annotated fields of any other type fail to convert at runtime.
//!
//! ## Field Attributes
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `#[envelope("KEY,...")]` | Bind the field to a variable |
//! | `#[envelope(embedded)]` | Nested field whose children are lifted under [`Nesting::Flattened`] |
//! | `#[envelope(skip)]` | Leave the field out entirely |
//!
//! ## Error Output
//!
//! Failures are aggregated into one [`Error`] whose message joins every
//! field failure in declaration order:
//!
//! ```text
//! missing a required field "DATABASE_ADDR"; error converting value from "DATABASE_PORT" field into int
//! ```
//!
//! [`Error`] implements [`miette::Diagnostic`], listing each failure as a
//! related diagnostic with its own code and help text.

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets the derive's `::envelope::` paths resolve inside this crate's own tests.
extern crate self as envelope;

pub use envelope_macro::Envelope;

/// Re-export miette so callers can render diagnostics without a direct dependency.
pub use miette;

mod annotation;
mod convert;
mod env;
mod error;
mod example;
mod populate;
mod schema;
mod source;

pub use annotation::FieldDescriptor;
pub use convert::{ConversionError, Kind, Leaf, Value, convert};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::{Error, FieldError};
pub use example::{EnvExample, ExampleEntry};
pub use populate::{Decoder, Nesting};
pub use schema::{Envelope, FieldSchema, Shape};
pub use source::{ConfigSources, Source, ValueSource};

/// A Result type that displays errors with miette's fancy formatting.
///
/// ```rust,ignore
/// fn main() -> envelope::Result<()> {
///     let config: Config = envelope::from_env()?;
///     Ok(())
/// }
/// ```
pub type Result<T> = miette::Result<T>;

/// Populates `target` from the process environment.
///
/// On failure `target` is left exactly as it was.
///
/// # Errors
///
/// Returns every missing required variable and every conversion failure,
/// in field declaration order.
pub fn decode<T: Envelope + Clone>(target: &mut T) -> std::result::Result<(), Error> {
    Decoder::new().decode(target)
}

/// Builds a `T` from its default value and the process environment.
///
/// # Errors
///
/// Same as [`decode`].
pub fn from_env<T: Envelope + Default>() -> std::result::Result<T, Error> {
    Decoder::new().load()
}

/// Renders a `.env.example` template for `T`.
#[must_use]
pub fn env_example<T: Envelope + Default>() -> String {
    EnvExample::of::<T>(Nesting::Nested).to_string()
}
