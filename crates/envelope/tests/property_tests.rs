//! Property-based tests for annotation parsing and value conversion.

#![allow(clippy::pedantic)]

use proptest::prelude::*;

// ============================================================================
// Annotation Properties
// ============================================================================

mod annotation_properties {
    use super::*;
    use envelope::FieldDescriptor;

    proptest! {
        /// Parsing never panics on any input
        #[test]
        fn parse_never_panics(s in ".*") {
            let _ = FieldDescriptor::parse(&s);
        }

        /// The key is everything before the first comma
        #[test]
        fn key_is_first_segment(key in "[^,]*", rest in ".*") {
            let raw = format!("{key},{rest}");
            let descriptor = FieldDescriptor::parse(&raw);
            prop_assert_eq!(descriptor.key(), key.as_str());
        }

        /// A comma-free default value survives intact, colons included
        #[test]
        fn default_value_is_preserved(key in "[A-Z_]{1,12}", value in "[^,]*") {
            let raw = format!("{key},default:{value}");
            let descriptor = FieldDescriptor::parse(&raw);
            prop_assert_eq!(descriptor.default_value(), Some(value.as_str()));
            prop_assert!(!descriptor.is_required());
        }

        /// Modifier order does not matter
        #[test]
        fn modifier_order_is_irrelevant(key in "[A-Z_]{1,12}", value in "[a-z0-9:/.]{0,16}") {
            let a = FieldDescriptor::parse(&format!("{key},required,default:{value}"));
            let b = FieldDescriptor::parse(&format!("{key},default:{value},required"));
            prop_assert_eq!(a, b);
        }

        /// Display output parses back to the same descriptor
        #[test]
        fn display_is_stable(key in "[A-Z_]{0,12}", required in any::<bool>(), value in proptest::option::of("[a-z0-9:]{0,8}")) {
            let mut raw = key.clone();
            if required {
                raw.push_str(",required");
            }
            if let Some(value) = &value {
                raw.push_str(",default:");
                raw.push_str(value);
            }

            let descriptor = FieldDescriptor::parse(&raw);
            prop_assert_eq!(FieldDescriptor::parse(&descriptor.to_string()), descriptor);
        }
    }
}

// ============================================================================
// Conversion Properties
// ============================================================================

mod conversion_properties {
    use super::*;
    use envelope::{Kind, Value, convert};

    proptest! {
        /// No kind panics on any input
        #[test]
        fn convert_never_panics(s in ".*") {
            let _ = convert(Kind::Text, &s);
            let _ = convert(Kind::Int, &s);
            let _ = convert(Kind::Float, &s);
            let _ = convert(Kind::Bool, &s);
        }

        /// Text conversion is the identity
        #[test]
        fn text_is_identity(s in ".*") {
            prop_assert_eq!(convert(Kind::Text, &s).unwrap(), Value::Text(s.clone()));
        }

        /// Every i64 converts back from its decimal form
        #[test]
        fn int_roundtrip(n in any::<i64>()) {
            prop_assert_eq!(convert(Kind::Int, &n.to_string()).unwrap(), Value::Int(n));
        }

        /// Finite floats convert back from their display form
        #[test]
        fn float_roundtrip(f in proptest::num::f64::NORMAL) {
            prop_assert_eq!(convert(Kind::Float, &f.to_string()).unwrap(), Value::Float(f));
        }

        /// Strings outside the boolean grammar are rejected
        #[test]
        fn bool_rejects_other_strings(s in "[a-zA-Z0-9]{2,8}") {
            let accepted = ["TRUE", "true", "True", "FALSE", "false", "False"];
            prop_assume!(!accepted.contains(&s.as_str()));
            prop_assert!(convert(Kind::Bool, &s).is_err());
        }

        /// Unsupported kinds always fail
        #[test]
        fn unsupported_always_fails(s in ".*") {
            prop_assert!(convert(Kind::Unsupported("u16"), &s).is_err());
        }
    }
}
