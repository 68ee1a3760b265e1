#![no_main]

use arbitrary::Arbitrary;
use envelope::{Kind, Value, convert};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzKind {
    Text,
    Int,
    Float,
    Bool,
    Unsupported,
}

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    kind: FuzzKind,
    raw: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let kind = match input.kind {
        FuzzKind::Text => Kind::Text,
        FuzzKind::Int => Kind::Int,
        FuzzKind::Float => Kind::Float,
        FuzzKind::Bool => Kind::Bool,
        FuzzKind::Unsupported => Kind::Unsupported("u16"),
    };

    match convert(kind, input.raw) {
        Ok(value) => {
            assert_eq!(value.kind(), kind);

            if let Value::Text(text) = &value {
                assert_eq!(text, input.raw);
            }
        }

        Err(err) => {
            assert_ne!(kind, Kind::Text);
            let _ = err.to_string();
        }
    }
});
