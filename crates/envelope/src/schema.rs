//! Static per-type field tables and the [`Envelope`] trait.
//!
//! `#[derive(Envelope)]` emits one `&'static [FieldSchema]` per struct,
//! listing the fields in declaration order, together with a typed setter.
//! The populator walks the table instead of inspecting types at runtime.
//!
//! # Generated Code Pattern
//!
//! ```rust,ignore
//! #[derive(Clone, Default, Envelope)]
//! struct Database {
//!     #[envelope("DATABASE_ADDR,required")]
//!     addr: String,
//!     #[envelope("DATABASE_PORT,default:5432")]
//!     port: i64,
//! }
//!
//! // expands to (roughly)
//! impl Envelope for Database {
//!     fn fields(&self) -> &'static [FieldSchema] {
//!         const FIELDS: &[FieldSchema] = &[
//!             FieldSchema::leaf("addr", Some("DATABASE_ADDR,required"), Kind::Text),
//!             FieldSchema::leaf("port", Some("DATABASE_PORT,default:5432"), Kind::Int),
//!         ];
//!         FIELDS
//!     }
//!
//!     fn assign(&mut self, index: usize, value: Value) -> bool {
//!         match index {
//!             0 => Leaf::from_value(value).map(|v| self.addr = v).is_some(),
//!             1 => Leaf::from_value(value).map(|v| self.port = v).is_some(),
//!             _ => false,
//!         }
//!     }
//!
//!     fn nested_mut(&mut self, index: usize) -> Option<&mut dyn Envelope> {
//!         None
//!     }
//! }
//! ```

use crate::convert::{Kind, Value};

/// How a field participates in population.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shape {
    /// A primitive field converted from a single variable.
    Leaf(Kind),

    /// A field whose type is itself an [`Envelope`], recursed into.
    Nested {
        /// Declared with `#[envelope(embedded)]`. Under
        /// [`Nesting::Flattened`](crate::Nesting::Flattened) its children
        /// are named as if they belonged to the parent.
        embedded: bool,
    },
}

/// One row of a target type's field table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldSchema {
    /// The Rust field name.
    pub name: &'static str,

    /// The raw annotation string, `None` when the field has none.
    ///
    /// `Some("")` is a present-but-empty annotation and is not the same
    /// as no annotation at all.
    pub annotation: Option<&'static str>,

    /// Leaf kind or nesting information.
    pub shape: Shape,

    /// The field's doc comment, used in `.env.example` output.
    pub doc: Option<&'static str>,
}

impl FieldSchema {
    /// A primitive field.
    #[must_use]
    pub const fn leaf(name: &'static str, annotation: Option<&'static str>, kind: Kind) -> Self {
        Self {
            name,
            annotation,
            shape: Shape::Leaf(kind),
            doc: None,
        }
    }

    /// A nested structure field.
    ///
    /// Nested fields are recursed into whether or not they carry an
    /// annotation, so none is recorded.
    #[must_use]
    pub const fn nested(name: &'static str, embedded: bool) -> Self {
        Self {
            name,
            annotation: None,
            shape: Shape::Nested { embedded },
            doc: None,
        }
    }

    /// Attaches a doc comment.
    #[must_use]
    pub const fn with_doc(mut self, doc: &'static str) -> Self {
        self.doc = Some(doc);
        self
    }
}

/// A struct that can be populated from the environment.
///
/// Implemented by `#[derive(Envelope)]`. The trait is object safe so the
/// populator can recurse through nested structures of different types.
/// Indexes passed to [`assign`](Self::assign) and
/// [`nested_mut`](Self::nested_mut) are positions in [`fields`](Self::fields).
pub trait Envelope {
    /// The field table, in declaration order.
    fn fields(&self) -> &'static [FieldSchema];

    /// Writes a converted value into the leaf at `index`.
    ///
    /// Returns `false` when `index` is not a leaf or `value` has a kind the
    /// field cannot hold.
    fn assign(&mut self, index: usize, value: Value) -> bool;

    /// Borrows the nested structure at `index`.
    fn nested_mut(&mut self, index: usize) -> Option<&mut dyn Envelope>;
}
