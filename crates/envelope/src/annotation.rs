//! Field annotation parsing.
//!
//! Every annotated field carries a string of the form
//! `<key>[,<modifier>]*`, where a modifier is either the flag `required`
//! or a `name:value` pair. The only pair understood today is
//! `default:<value>`.
//!
//! ```text
//! "DATABASE_ADDR,required"      -> key = DATABASE_ADDR, required
//! "DATABASE_PORT,default:3000"  -> key = DATABASE_PORT, default = "3000"
//! "LOG_LEVEL,verbose,x:y"       -> key = LOG_LEVEL (unknown modifiers ignored)
//! ```
//!
//! Parsing never fails. Malformed input degrades to "no modifiers
//! recognized" so annotations written for newer versions still load.

use std::fmt::{self, Display, Formatter};

/// Separates the key from the modifiers, and modifiers from each other.
const PROPERTY_SEPARATOR: char = ',';

/// Separates a modifier name from its value.
const VALUE_SEPARATOR: char = ':';

/// Flag marking a field whose variable must be present.
const REQUIRED: &str = "required";

/// Modifier name carrying the fallback value.
const DEFAULT: &str = "default";

/// The parsed form of a field annotation.
///
/// Built once per field visit and never mutated afterwards.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldDescriptor {
    key: String,
    required: bool,
    default: Option<String>,
}

impl FieldDescriptor {
    /// Parses a raw annotation string.
    ///
    /// The first comma-separated segment is the environment key and may be
    /// empty. Modifier values are split on the first `:` only, so
    /// `default:http://localhost` keeps the whole URL. A repeated `default`
    /// overrides the earlier one.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut segments = raw.split(PROPERTY_SEPARATOR);

        let mut descriptor = Self {
            key: segments.next().unwrap_or_default().to_string(),
            ..Self::default()
        };

        for segment in segments {
            if let Some((name, value)) = segment.split_once(VALUE_SEPARATOR) {
                if name == DEFAULT {
                    descriptor.default = Some(value.to_string());
                }
                continue;
            }

            if segment == REQUIRED {
                descriptor.required = true;
            }
        }

        descriptor
    }

    /// The environment variable this field binds to.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a missing variable is an error.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// The fallback used when the variable is absent.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }
}

impl Display for FieldDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)?;

        if self.required {
            write!(f, "{PROPERTY_SEPARATOR}{REQUIRED}")?;
        }

        if let Some(default) = &self.default {
            write!(f, "{PROPERTY_SEPARATOR}{DEFAULT}{VALUE_SEPARATOR}{default}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_only() {
        let descriptor = FieldDescriptor::parse("DATABASE_ADDR");
        assert_eq!(descriptor.key(), "DATABASE_ADDR");
        assert!(!descriptor.is_required());
        assert_eq!(descriptor.default_value(), None);
    }

    #[test]
    fn test_required_flag() {
        let descriptor = FieldDescriptor::parse("DATABASE_ADDR,required");
        assert_eq!(descriptor.key(), "DATABASE_ADDR");
        assert!(descriptor.is_required());
    }

    #[test]
    fn test_default_modifier() {
        let descriptor = FieldDescriptor::parse("DATABASE_PORT,default:3000");
        assert_eq!(descriptor.key(), "DATABASE_PORT");
        assert_eq!(descriptor.default_value(), Some("3000"));
        assert!(!descriptor.is_required());
    }

    #[test]
    fn test_default_keeps_everything_after_first_colon() {
        let descriptor = FieldDescriptor::parse("URL,default:http://localhost:8080");
        assert_eq!(descriptor.default_value(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_empty_default() {
        let descriptor = FieldDescriptor::parse("NAME,default:");
        assert_eq!(descriptor.default_value(), Some(""));
    }

    #[test]
    fn test_unknown_modifiers_ignored() {
        let descriptor = FieldDescriptor::parse("KEY,verbose,secret:yes,required");
        assert_eq!(descriptor.key(), "KEY");
        assert!(descriptor.is_required());
        assert_eq!(descriptor.default_value(), None);
    }

    #[test]
    fn test_flags_are_case_sensitive() {
        let descriptor = FieldDescriptor::parse("KEY,Required,DEFAULT:1");
        assert!(!descriptor.is_required());
        assert_eq!(descriptor.default_value(), None);
    }

    #[test]
    fn test_empty_annotation() {
        let descriptor = FieldDescriptor::parse("");
        assert_eq!(descriptor.key(), "");
        assert!(!descriptor.is_required());
    }

    #[test]
    fn test_empty_key_with_modifiers() {
        let descriptor = FieldDescriptor::parse(",required,default:x");
        assert_eq!(descriptor.key(), "");
        assert!(descriptor.is_required());
        assert_eq!(descriptor.default_value(), Some("x"));
    }

    #[test]
    fn test_last_default_wins() {
        let descriptor = FieldDescriptor::parse("KEY,default:a,default:b");
        assert_eq!(descriptor.default_value(), Some("b"));
    }

    #[test]
    fn test_display_normalizes() {
        let descriptor = FieldDescriptor::parse("PORT,junk,default:80,required");
        assert_eq!(descriptor.to_string(), "PORT,required,default:80");
    }
}
