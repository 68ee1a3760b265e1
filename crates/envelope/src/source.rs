//! Source attribution for decoded values.
//!
//! [`Decoder::decode_with_sources`](crate::Decoder::decode_with_sources)
//! reports, for every annotated field, which variable it binds to and
//! whether the value came from the environment, from the annotation
//! default, or was left unset.

use std::fmt::{self, Display, Formatter};

/// Where a field's value came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Source {
    /// Read from the variable table.
    Environment,

    /// The variable was absent and the annotation's `default:` was used.
    Default,

    /// The variable was absent, optional and had no default; the field
    /// kept its prior value.
    NotSet,
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => write!(f, "Environment variable"),

            Self::Default => write!(f, "Default value"),

            Self::NotSet => write!(f, "Not set"),
        }
    }
}

/// Source information for a single field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValueSource {
    /// The environment variable name (e.g., `"DATABASE_ADDR"`).
    pub key: String,

    /// Where the value originated from.
    pub source: Source,
}

impl ValueSource {
    /// Creates a new `ValueSource`.
    pub fn new(key: impl Into<String>, source: Source) -> Self {
        Self {
            key: key.into(),
            source,
        }
    }
}

impl Display for ValueSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.source)
    }
}

/// Per-field attribution for one decode call, in visit order.
///
/// Field paths are dotted (`database.port`). Under
/// [`Nesting::Flattened`](crate::Nesting::Flattened) the children of
/// embedded fields appear without the embedded field's name.
///
/// # Display Output
///
/// ```text
/// Configuration Source:
/// --------------------------------------------------
///   database.addr  <- Environment variable [DATABASE_ADDR]
///   database.port  <- Default value [DATABASE_PORT]
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigSources {
    entries: Vec<(String, ValueSource)>,
}

impl ConfigSources {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records the source of a field.
    pub fn add(&mut self, path: impl Into<String>, source: ValueSource) {
        self.entries.push((path.into(), source));
    }

    /// All entries as `(path, source)` pairs.
    #[must_use]
    pub fn entries(&self) -> &[(String, ValueSource)] {
        &self.entries
    }

    /// Looks up a field by its dotted path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&ValueSource> {
        self.entries
            .iter()
            .find(|(name, _)| name == path)
            .map(|(_, source)| source)
    }

    /// Iterates over `(path, source)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueSource)> {
        self.entries
            .iter()
            .map(|(name, source)| (name.as_str(), source))
    }

    /// Number of attributed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field was attributed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Display for ConfigSources {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration Source:")?;
        writeln!(f, "{}", "-".repeat(50))?;

        let max_len = self
            .entries
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);

        for (path, source) in &self.entries {
            writeln!(
                f,
                "  {:<width$}  <- {} [{}]",
                path,
                source.source,
                source.key,
                width = max_len,
            )?;
        }

        Ok(())
    }
}
