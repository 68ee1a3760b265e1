//! Structure population.
//!
//! The [`Decoder`] walks a target's field table in declaration order:
//!
//! 1. Nested structures are recursed into, annotated or not. Their
//!    failures are recorded in place and siblings are still visited.
//! 2. Leaves without an annotation are skipped.
//! 3. Annotated leaves are looked up, falling back to the annotation's
//!    `default:` when the variable is absent and the field not `required`.
//! 4. The raw string is converted into the field's [`Kind`] and assigned.
//!
//! All failures are collected; the call reports them together as one
//! [`Error`].
//!
//! # Mutation on failure
//!
//! [`Decoder::decode`] populates a clone and swaps it in only when every
//! field succeeded, so a failed call leaves the target untouched.
//! [`Decoder::populate`] writes into the target as it goes; after a failure
//! the target is partially populated and should be discarded.

use std::env::VarError;

use tracing::{debug, instrument, trace, warn};

use crate::annotation::FieldDescriptor;
use crate::convert::{ConversionError, Kind, convert};
use crate::env::{EnvSource, ProcessEnv};
use crate::error::{Error, FieldError};
use crate::schema::{Envelope, FieldSchema, Shape};
use crate::source::{ConfigSources, Source, ValueSource};

/// How field paths are formed for nested structures.
///
/// Values land in the same typed fields in both modes. The mode decides
/// the dotted paths reported in [`ConfigSources`], [`FieldError::path`] and
/// `.env.example` comments.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Nesting {
    /// Every nested field is named under its own field name
    /// (`environment.database_addr`), embedded or not.
    #[default]
    Nested,

    /// Children of fields marked `#[envelope(embedded)]` are named as if
    /// declared on the parent (`database_addr`). Non-embedded nested fields
    /// still nest.
    Flattened,
}

impl Nesting {
    /// The path prefix for the children of a nested field.
    pub(crate) fn child_prefix(self, parent: &str, path: String, embedded: bool) -> String {
        match self {
            Self::Flattened if embedded => parent.to_string(),
            _ => path,
        }
    }
}

/// Joins a parent path and a field name with a dot.
pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Populates [`Envelope`] structs from an [`EnvSource`].
///
/// # Example
///
/// ```rust,ignore
/// use envelope::{Decoder, MapEnv, Nesting};
///
/// let env = MapEnv::new()
///     .with("DATABASE_ADDR", "localhost")
///     .with("DATABASE_PORT", "5432");
///
/// let mut config = Config::default();
/// let sources = Decoder::new()
///     .source(&env)
///     .nesting(Nesting::Flattened)
///     .decode_with_sources(&mut config)?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct Decoder<S = ProcessEnv> {
    source: S,
    nesting: Nesting,
}

impl Decoder<ProcessEnv> {
    /// A decoder reading the process environment with [`Nesting::Nested`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source: ProcessEnv,
            nesting: Nesting::Nested,
        }
    }
}

impl<S: EnvSource> Decoder<S> {
    /// Reads variables from `source` instead.
    #[must_use]
    pub fn source<T: EnvSource>(self, source: T) -> Decoder<T> {
        Decoder {
            source,
            nesting: self.nesting,
        }
    }

    /// Sets the nesting mode.
    #[must_use]
    pub const fn nesting(mut self, nesting: Nesting) -> Self {
        self.nesting = nesting;
        self
    }

    /// Populates `target`, leaving it untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns every missing required variable and every conversion
    /// failure, in field declaration order.
    pub fn decode<T: Envelope + Clone>(&self, target: &mut T) -> Result<(), Error> {
        self.decode_with_sources(target).map(|_| ())
    }

    /// Like [`decode`](Self::decode), also reporting where each value came from.
    ///
    /// # Errors
    ///
    /// Same as [`decode`](Self::decode).
    pub fn decode_with_sources<T: Envelope + Clone>(
        &self,
        target: &mut T,
    ) -> Result<ConfigSources, Error> {
        let mut scratch = target.clone();
        let sources = self.populate(&mut scratch)?;
        *target = scratch;
        Ok(sources)
    }

    /// Builds a `T` from its default value.
    ///
    /// # Errors
    ///
    /// Same as [`decode`](Self::decode).
    pub fn load<T: Envelope + Default>(&self) -> Result<T, Error> {
        let mut value = T::default();
        self.populate(&mut value)?;
        Ok(value)
    }

    /// Populates `target` in place.
    ///
    /// Fields are written as they are resolved, so after a failure `target`
    /// holds a mix of new and prior values.
    ///
    /// # Errors
    ///
    /// Same as [`decode`](Self::decode).
    #[instrument(level = "debug", skip_all, fields(source = self.source.name(), nesting = ?self.nesting))]
    pub fn populate(&self, target: &mut dyn Envelope) -> Result<ConfigSources, Error> {
        let mut walk = Walk {
            source: &self.source,
            nesting: self.nesting,
            errors: Vec::new(),
            sources: ConfigSources::new(),
        };

        walk.visit(target, "");

        debug!(
            fields = walk.sources.len(),
            errors = walk.errors.len(),
            "environment decode finished"
        );

        match Error::from_errors(walk.errors) {
            Some(err) => Err(err),
            None => Ok(walk.sources),
        }
    }
}

/// Traversal state for one populate call.
struct Walk<'a, S: ?Sized> {
    source: &'a S,
    nesting: Nesting,
    errors: Vec<FieldError>,
    sources: ConfigSources,
}

impl<S: EnvSource + ?Sized> Walk<'_, S> {
    fn visit(&mut self, target: &mut dyn Envelope, prefix: &str) {
        for (index, field) in target.fields().iter().enumerate() {
            let path = join_path(prefix, field.name);

            match field.shape {
                Shape::Nested { embedded } => {
                    let child_prefix = self.nesting.child_prefix(prefix, path, embedded);

                    // Rows without an accessor contribute nothing.
                    if let Some(nested) = target.nested_mut(index) {
                        self.visit(nested, &child_prefix);
                    }
                }

                Shape::Leaf(kind) => self.visit_leaf(target, index, field, kind, path),
            }
        }
    }

    fn visit_leaf(
        &mut self,
        target: &mut dyn Envelope,
        index: usize,
        field: &FieldSchema,
        kind: Kind,
        path: String,
    ) {
        let Some(annotation) = field.annotation else {
            trace!(field = %path, "no annotation, skipped");
            return;
        };

        let descriptor = FieldDescriptor::parse(annotation);
        let key = descriptor.key();

        let (raw, origin) = match self.source.var(key) {
            Ok(value) => (value, Source::Environment),

            Err(VarError::NotUnicode(_)) => {
                self.errors.push(FieldError::conversion(
                    key,
                    path,
                    kind,
                    ConversionError::InvalidUtf8,
                ));
                return;
            }

            Err(VarError::NotPresent) if descriptor.is_required() => {
                self.errors.push(FieldError::missing(key, path));
                return;
            }

            Err(VarError::NotPresent) => match descriptor.default_value() {
                Some(default) => (default.to_string(), Source::Default),

                None => {
                    trace!(field = %path, key, "not set, skipped");
                    self.sources.add(path, ValueSource::new(key, Source::NotSet));
                    return;
                }
            },
        };

        let value = match convert(kind, &raw) {
            Ok(value) => value,

            Err(source) => {
                self.errors.push(FieldError::conversion(key, path, kind, source));
                return;
            }
        };

        if !target.assign(index, value) {
            warn!(field = %path, %kind, "setter rejected converted value");
            self.errors.push(FieldError::conversion(
                key,
                path,
                kind,
                ConversionError::Unsupported { kind: kind.name() },
            ));
            return;
        }

        trace!(field = %path, key, source = %origin, "field resolved");
        self.sources.add(path, ValueSource::new(key, origin));
    }
}
