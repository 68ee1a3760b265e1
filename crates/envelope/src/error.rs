//! Error types for environment decoding.
//!
//! Decoding never stops at the first problem. Every field is visited and
//! each failure becomes one [`FieldError`] record; the records are then
//! wrapped in a single [`Error`] whose `Display` joins them with `"; "`.
//!
//! | Variant | When It Occurs |
//! |---------|----------------|
//! | [`FieldError::MissingRequired`] | Required variable not set |
//! | [`FieldError::Conversion`] | Value (or default) not parseable as the field's kind |
//!
//! Failures inside nested structures are not a separate kind: their records
//! are spliced into the parent list at the position of the nested field.
//!
//! ```text
//! missing a required field "DATABASE_ADDR"; error converting value from "DATABASE_PORT" field into int
//! ```
//!
//! For rich terminal output, convert into a [`miette::Report`]:
//!
//! ```rust,ignore
//! if let Err(e) = envelope::decode(&mut config) {
//!     eprintln!("{:?}", miette::Report::from(e));
//! }
//! ```

use miette::Diagnostic;
use thiserror::Error as ThisError;

use crate::convert::{ConversionError, Kind};

/// A single field that could not be populated.
#[derive(Debug, Diagnostic, ThisError)]
pub enum FieldError {
    /// The variable is not set and the field is marked `required`.
    #[error("missing a required field \"{key}\"")]
    #[diagnostic(code(envelope::missing_field), severity(Error))]
    MissingRequired {
        /// The environment variable name.
        key: String,

        /// Dotted path of the field inside the target type.
        path: String,

        /// Suggested fix.
        #[help]
        help: String,
    },

    /// The value (or the annotation default) does not convert into the
    /// field's kind.
    #[error("error converting value from \"{key}\" field into {kind}")]
    #[diagnostic(code(envelope::conversion_error))]
    Conversion {
        /// The environment variable name.
        key: String,

        /// Dotted path of the field inside the target type.
        path: String,

        /// The kind the field expects.
        kind: Kind,

        /// Suggested fix.
        #[help]
        help: String,

        /// Why conversion failed.
        #[source]
        source: ConversionError,
    },
}

impl FieldError {
    /// Creates a [`FieldError::MissingRequired`] with a standard help message.
    pub fn missing(key: impl Into<String>, path: impl Into<String>) -> Self {
        let key = key.into();
        let help = format!("set {key} in the environment");
        Self::MissingRequired {
            key,
            path: path.into(),
            help,
        }
    }

    /// Creates a [`FieldError::Conversion`] with help text derived from the kind.
    pub fn conversion(
        key: impl Into<String>,
        path: impl Into<String>,
        kind: Kind,
        source: ConversionError,
    ) -> Self {
        let help = match kind {
            Kind::Unsupported(name) => {
                format!("{name} cannot be read from the environment; use String, i64, f64 or bool")
            }
            _ => format!("expected a valid {kind}"),
        };

        Self::Conversion {
            key: key.into(),
            path: path.into(),
            kind,
            help,
            source,
        }
    }

    /// The environment variable the failing field binds to.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::MissingRequired { key, .. } | Self::Conversion { key, .. } => key,
        }
    }

    /// Dotted path of the failing field, e.g. `database.port`.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::MissingRequired { path, .. } | Self::Conversion { path, .. } => path,
        }
    }
}

/// All field failures from one decode call.
///
/// Always holds at least one record; [`Error::from_errors`] returns `None`
/// for an empty list.
#[derive(Debug, Diagnostic, ThisError)]
#[error("{}", join(.errors))]
#[diagnostic(
    code(envelope::decode_failed),
    help("fix all listed configuration errors")
)]
pub struct Error {
    /// Records in field declaration order.
    #[related]
    errors: Vec<FieldError>,
}

impl Error {
    /// Wraps accumulated records, `None` if there are none.
    #[must_use]
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        (!errors.is_empty()).then_some(Self { errors })
    }

    /// The records, in field declaration order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consumes the aggregate, returning its records.
    #[must_use]
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
