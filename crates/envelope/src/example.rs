//! `.env.example` generation.
//!
//! Walks a type's field table and renders one entry per annotated leaf:
//!
//! ```text
//! # Database host (database.addr, required, type: string)
//! DATABASE_ADDR=
//!
//! # database.port (type: int)
//! # DATABASE_PORT=5432
//! ```
//!
//! - Fields without a default show `KEY=`
//! - Fields with a default show `# KEY=default` (commented out)

use std::fmt::{self, Display, Formatter};

use crate::annotation::FieldDescriptor;
use crate::convert::Kind;
use crate::populate::{Nesting, join_path};
use crate::schema::{Envelope, Shape};

/// One variable in a `.env.example` file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExampleEntry {
    /// The environment variable name.
    pub key: String,

    /// Dotted path of the field.
    pub path: String,

    /// Doc comment from the field, if any.
    pub doc: Option<&'static str>,

    /// Whether the annotation marks the field `required`.
    pub required: bool,

    /// The annotation default, if any.
    pub default: Option<String>,

    /// The field's kind.
    pub kind: Kind,
}

impl Display for ExampleEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut meta = Vec::new();
        if self.required {
            meta.push("required".to_string());
        }
        meta.push(format!("type: {}", self.kind));
        let meta = meta.join(", ");

        match self.doc {
            Some(doc) => writeln!(f, "# {doc} ({}, {meta})", self.path)?,
            None => writeln!(f, "# {} ({meta})", self.path)?,
        }

        match &self.default {
            Some(default) => write!(f, "# {}={default}", self.key),
            None => write!(f, "{}=", self.key),
        }
    }
}

/// The rendered template for a type.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EnvExample {
    entries: Vec<ExampleEntry>,
}

impl EnvExample {
    /// Collects entries for `T`, naming paths according to `nesting`.
    #[must_use]
    pub fn of<T: Envelope + Default>(nesting: Nesting) -> Self {
        let mut example = Self::default();
        let mut value = T::default();
        example.collect(&mut value, "", nesting);
        example
    }

    /// The entries, in field declaration order.
    #[must_use]
    pub fn entries(&self) -> &[ExampleEntry] {
        &self.entries
    }

    fn collect(&mut self, target: &mut dyn Envelope, prefix: &str, nesting: Nesting) {
        for (index, field) in target.fields().iter().enumerate() {
            let path = join_path(prefix, field.name);

            match field.shape {
                Shape::Nested { embedded } => {
                    let child_prefix = nesting.child_prefix(prefix, path, embedded);
                    if let Some(nested) = target.nested_mut(index) {
                        self.collect(nested, &child_prefix, nesting);
                    }
                }

                Shape::Leaf(kind) => {
                    let Some(annotation) = field.annotation else {
                        continue;
                    };

                    let descriptor = FieldDescriptor::parse(annotation);
                    if descriptor.key().is_empty() {
                        continue;
                    }

                    self.entries.push(ExampleEntry {
                        key: descriptor.key().to_string(),
                        path,
                        doc: field.doc,
                        required: descriptor.is_required(),
                        default: descriptor.default_value().map(str::to_string),
                        kind,
                    });
                }
            }
        }
    }
}

impl Display for EnvExample {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Auto-generated by envelope")?;

        for entry in &self.entries {
            writeln!(f)?;
            writeln!(f, "{entry}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_without_default() {
        let entry = ExampleEntry {
            key: "DATABASE_ADDR".into(),
            path: "database.addr".into(),
            doc: Some("Database host"),
            required: true,
            default: None,
            kind: Kind::Text,
        };

        assert_eq!(
            entry.to_string(),
            "# Database host (database.addr, required, type: string)\nDATABASE_ADDR="
        );
    }

    #[test]
    fn test_entry_with_default_is_commented() {
        let entry = ExampleEntry {
            key: "DATABASE_PORT".into(),
            path: "port".into(),
            doc: None,
            required: false,
            default: Some("3000".into()),
            kind: Kind::Int,
        };

        assert_eq!(entry.to_string(), "# port (type: int)\n# DATABASE_PORT=3000");
    }

    #[allow(dead_code)]
    #[derive(Default, crate::Envelope)]
    struct Limits {
        /// Upper bound on open connections
        #[envelope("LIMITS_MAX,required")]
        max: i64,

        #[envelope("LIMITS_BURST,default:true")]
        burst: bool,

        unannotated: String,
    }

    #[derive(Default, crate::Envelope)]
    struct Server {
        #[envelope(embedded)]
        limits: Limits,
    }

    #[test]
    fn test_collects_annotated_leaves_only() {
        let example = EnvExample::of::<Server>(Nesting::Nested);
        let keys: Vec<&str> = example.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["LIMITS_MAX", "LIMITS_BURST"]);

        let first = &example.entries()[0];
        assert_eq!(first.path, "limits.max");
        assert_eq!(first.doc, Some("Upper bound on open connections"));
        assert!(first.required);
        assert_eq!(example.entries()[1].default.as_deref(), Some("true"));
    }

    #[test]
    fn test_flattened_paths_drop_embedded_name() {
        let example = EnvExample::of::<Server>(Nesting::Flattened);
        assert_eq!(example.entries()[0].path, "max");
    }

    #[test]
    fn test_empty_example_has_header_only() {
        assert_eq!(
            EnvExample::default().to_string(),
            "# Auto-generated by envelope\n"
        );
    }
}
