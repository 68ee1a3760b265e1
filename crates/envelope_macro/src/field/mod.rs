//! Field classification and per-field code generation.
//!
//! Every field that survives `#[envelope(skip)]` becomes one row of the
//! generated table. [`FieldFactory`] decides what kind of row, and the
//! matching [`FieldGenerator`] emits the row plus its arm in `assign` or
//! `nested_mut`.
//!
//! ```text
//! Field
//!   │
//!   ├─► #[envelope(skip)]? ──────────────► (omitted)
//!   │
//!   ├─► #[envelope(embedded)]? ──────────► NestedField { embedded: true }
//!   │
//!   ├─► primitive or common std type? ───► LeafField (annotation, if any)
//!   │
//!   └─► Otherwise ───────────────────────► NestedField { embedded: false }
//! ```
//!
//! Classification is syntactic and looks at the last path segment only, so
//! `std::string::String` and `String` are the same type here, while a type
//! alias for `String` is not.

use proc_macro2::TokenStream as QuoteStream;
use syn::{Field, PathArguments, Result as SynResult, Type};

use crate::parse::{FieldConfig, Parser, extract_doc_comment};

mod leaf;
mod nested;

pub use leaf::LeafField;
pub use nested::NestedField;

/// Code generation for one row of the field table.
///
/// `index` is the row's position in the table, which is also the index the
/// runtime passes back to `assign` and `nested_mut`.
pub trait FieldGenerator {
    /// The `FieldSchema` constructor expression for this row.
    fn generate_schema(&self) -> QuoteStream;

    /// A match arm for `Envelope::assign`, if this row is assignable.
    fn generate_assign_arm(&self, index: usize) -> Option<QuoteStream>;

    /// A match arm for `Envelope::nested_mut`, if this row is nested.
    fn generate_nested_arm(&self, index: usize) -> Option<QuoteStream>;
}

/// Leaf types the runtime can convert into.
const CONVERTIBLE: &[&str] = &["String", "i64", "f64", "bool"];

/// Types that are never nested structures.
const OPAQUE: &[&str] = &[
    "bool", "char", "str", "String", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16",
    "u32", "u64", "u128", "usize", "f32", "f64", "Option", "Vec", "VecDeque", "HashMap",
    "HashSet", "BTreeMap", "BTreeSet", "Box", "Rc", "Arc", "Cell", "RefCell", "Cow", "PathBuf",
    "OsString", "Duration", "PhantomData",
];

/// Builds the [`FieldGenerator`] for a field.
pub struct FieldFactory;

impl FieldFactory {
    /// Classifies `field`, returning `None` for skipped fields.
    pub fn parse_field(field: &Field) -> SynResult<Option<Box<dyn FieldGenerator>>> {
        let Some(name) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Envelope requires named fields"));
        };
        let ty = field.ty.clone();
        let doc = extract_doc_comment(field);

        let generator: Box<dyn FieldGenerator> = match Parser::parse_field_config(field)? {
            FieldConfig::Skip => return Ok(None),

            FieldConfig::Embedded => Box::new(NestedField {
                name,
                ty,
                embedded: true,
                doc,
            }),

            FieldConfig::Annotated(annotation) if Self::is_opaque(&ty) => Box::new(LeafField {
                name,
                convertible: Self::is_convertible(&ty),
                ty,
                annotation: Some(annotation),
                doc,
            }),

            FieldConfig::Bare if Self::is_opaque(&ty) => Box::new(LeafField {
                name,
                convertible: Self::is_convertible(&ty),
                ty,
                annotation: None,
                doc,
            }),

            // Structures are recursed into whether or not they carry an
            // annotation; the annotation itself is not used.
            FieldConfig::Annotated(_) | FieldConfig::Bare => Box::new(NestedField {
                name,
                ty,
                embedded: false,
                doc,
            }),
        };

        Ok(Some(generator))
    }

    /// The last path segment's identifier, when it carries no generics.
    fn plain_ident(ty: &Type) -> Option<String> {
        let Type::Path(type_path) = ty else {
            return None;
        };

        if type_path.qself.is_some() {
            return None;
        }

        let segment = type_path.path.segments.last()?;
        matches!(segment.arguments, PathArguments::None).then(|| segment.ident.to_string())
    }

    fn is_convertible(ty: &Type) -> bool {
        Self::plain_ident(ty).is_some_and(|ident| CONVERTIBLE.contains(&ident.as_str()))
    }

    /// References, tuples, arrays and the listed std types.
    fn is_opaque(ty: &Type) -> bool {
        let Type::Path(type_path) = ty else {
            return true;
        };

        type_path
            .path
            .segments
            .last()
            .is_none_or(|segment| OPAQUE.iter().any(|name| segment.ident == *name))
    }
}

/// Renders a type roughly the way it is written (`Vec<String>`, not
/// `Vec < String >`).
pub fn type_name(ty: &Type) -> String {
    quote::quote!(#ty)
        .to_string()
        .replace(" :: ", "::")
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}
