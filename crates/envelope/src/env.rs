//! Where variable values are read from.
//!
//! Decoding reads through the [`EnvSource`] trait. [`ProcessEnv`] is the
//! process environment and the default for every entry point; [`MapEnv`]
//! is an in-memory table for tests and for embedding, so a decode can run
//! without touching process-wide state.
//!
//! ```rust,ignore
//! use envelope::{Decoder, MapEnv};
//!
//! let env = MapEnv::from_iter([("DATABASE_ADDR", "localhost")]);
//! let config: Config = Decoder::new().source(&env).load()?;
//! ```

use std::collections::HashMap;
use std::env::VarError;

/// A read-only table of environment variables.
///
/// Lookups are exact and case-sensitive.
pub trait EnvSource {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Reads a variable.
    ///
    /// # Errors
    ///
    /// [`VarError::NotPresent`] when the key is unset, and
    /// [`VarError::NotUnicode`] when the value is not valid UTF-8.
    fn var(&self, key: &str) -> Result<String, VarError>;
}

/// The process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn var(&self, key: &str) -> Result<String, VarError> {
        // An empty name can never be set, and some platforms reject it outright.
        if key.is_empty() {
            return Err(VarError::NotPresent);
        }

        std::env::var(key)
    }
}

/// An in-memory variable table.
#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Removes a variable.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn name(&self) -> &'static str {
        "map"
    }

    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}
