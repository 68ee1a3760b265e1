//! Compile-time tests for the `Envelope` derive.
//!
//! Run with: cargo nextest run --package envelope trybuild

#[test]
fn compile_pass() {
    let t = trybuild::TestCases::new();
    t.pass("tests/compile_pass/basic_fields.rs");
    t.pass("tests/compile_pass/nested_and_embedded.rs");
    t.pass("tests/compile_pass/skip_and_opaque.rs");
    t.pass("tests/compile_pass/unsupported_types.rs");
    t.pass("tests/compile_pass/generic_struct.rs");
    t.pass("tests/compile_pass/annotated_nested.rs");
}
