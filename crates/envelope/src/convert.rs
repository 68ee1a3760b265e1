//! Raw string to typed value conversion.
//!
//! The converter understands a closed set of primitive [`Kind`]s. A field
//! declared with any other type carries [`Kind::Unsupported`] in its schema
//! and always fails to convert.

use std::fmt::{self, Display, Formatter};
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error as ThisError;

/// The primitive shape a leaf field is converted into.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// UTF-8 text (`String`).
    Text,

    /// 64-bit signed integer (`i64`).
    Int,

    /// 64-bit floating point (`f64`).
    Float,

    /// Boolean (`bool`).
    Bool,

    /// A declared type the converter has no rule for.
    ///
    /// Holds the type as written on the field, for error messages.
    Unsupported(&'static str),
}

impl Kind {
    /// Name used in error messages and `.env.example` hints.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Int => "int",
            Self::Float => "float64",
            Self::Bool => "bool",
            Self::Unsupported(name) => name,
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A successfully converted value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Converted from [`Kind::Text`].
    Text(String),

    /// Converted from [`Kind::Int`].
    Int(i64),

    /// Converted from [`Kind::Float`].
    Float(f64),

    /// Converted from [`Kind::Bool`].
    Bool(bool),
}

impl Value {
    /// The kind this value was converted into.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Text(_) => Kind::Text,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::Bool(_) => Kind::Bool,
        }
    }
}

/// Why a raw string could not be converted.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConversionError {
    /// Not a base-10 integer, or outside the `i64` range.
    #[error("invalid integer: {0}")]
    Int(#[from] ParseIntError),

    /// Not a floating point literal.
    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),

    /// Not one of the accepted boolean literals.
    ///
    /// The rejected input is not kept, the variable may hold a secret.
    #[error("expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False")]
    Bool,

    /// The target kind has no conversion rule.
    #[error("unsupported type {kind}")]
    Unsupported {
        /// The declared type name.
        kind: &'static str,
    },

    /// The variable holds bytes that are not valid UTF-8.
    #[error("value is not valid UTF-8")]
    InvalidUtf8,
}

/// Converts `raw` into a value of the requested kind.
///
/// # Errors
///
/// Returns a [`ConversionError`] when `raw` is not a valid literal for
/// `kind`, or when `kind` is [`Kind::Unsupported`].
pub fn convert(kind: Kind, raw: &str) -> Result<Value, ConversionError> {
    match kind {
        Kind::Text => Ok(Value::Text(raw.to_string())),
        Kind::Int => Ok(Value::Int(raw.parse()?)),
        Kind::Float => Ok(Value::Float(raw.parse()?)),
        Kind::Bool => parse_bool(raw).map(Value::Bool),
        Kind::Unsupported(kind) => Err(ConversionError::Unsupported { kind }),
    }
}

/// Boolean grammar: the single-letter, digit, lower, upper and title-case
/// spellings of true and false.
fn parse_bool(raw: &str) -> Result<bool, ConversionError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConversionError::Bool),
    }
}

/// Rust field types that a [`Value`] can be assigned into.
///
/// Generated setters call [`Leaf::from_value`] so each field receives its
/// own type without an intermediate representation.
pub trait Leaf: Sized {
    /// The kind the converter produces for this type.
    const KIND: Kind;

    /// Unwraps a value of the matching kind, `None` on mismatch.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! impl_leaf {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl Leaf for $ty {
                const KIND: Kind = Kind::$variant;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_leaf! {
    String => Text,
    i64 => Int,
    f64 => Float,
    bool => Bool,
}
