//! Attribute parsing for `#[envelope("KEY,...")]`, `#[envelope(embedded)]`
//! and `#[envelope(skip)]`.
//!
//! A field may carry several `#[envelope]` attributes; their options are
//! merged and checked together. The annotation string itself is kept raw:
//! its grammar is interpreted at runtime by `envelope::FieldDescriptor`, so
//! unknown modifiers inside the string are ignored rather than rejected.
//!
//! # Rejected at compile time
//!
//! - the same option twice (`#[envelope(skip, skip)]`)
//! - unknown bare options (`#[envelope(flatten)]`)
//! - an annotation string next to `embedded` or `skip`
//! - `embedded` together with `skip`

use std::collections::HashSet;

use proc_macro2::TokenTree;
use syn::meta::ParseNestedMeta;
use syn::parse::ParseStream;
use syn::{
    Attribute, Error as SynError, Expr, ExprLit, Field, Lit, LitStr, Meta, Result as SynResult,
};

/// Joins a field's doc comment lines with spaces.
pub fn extract_doc_comment(field: &Field) -> Option<String> {
    let mut result = String::new();

    for attr in &field.attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }

        if let Meta::NameValue(meta) = &attr.meta
            && let Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) = &meta.value
        {
            if !result.is_empty() {
                result.push(' ');
            }

            result.push_str(lit_str.value().trim());
        }
    }

    (!result.is_empty()).then_some(result)
}

/// What a field's `#[envelope]` attributes ask for.
pub enum FieldConfig {
    /// No attribute at all; classified by type.
    Bare,

    /// `#[envelope("...")]`: the raw annotation string.
    Annotated(String),

    /// `#[envelope(embedded)]`.
    Embedded,

    /// `#[envelope(skip)]`.
    Skip,
}

/// Accumulates options across all `#[envelope]` attributes of one field.
#[derive(Default)]
pub struct Parser {
    annotation: Option<String>,
    embedded: bool,
    skip: bool,

    /// Options seen so far, for duplicate detection.
    seen: HashSet<&'static str>,
}

impl Parser {
    /// Parses every `#[envelope]` attribute on `field`.
    pub fn parse_field_config(field: &Field) -> SynResult<FieldConfig> {
        let mut parser = Self::default();
        let mut last_attr = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("envelope") {
                continue;
            }

            parser.parse_attr(attr)?;
            last_attr = Some(attr);
        }

        match last_attr {
            Some(attr) => parser.build(attr),
            None => Ok(FieldConfig::Bare),
        }
    }

    fn parse_attr(&mut self, attr: &Attribute) -> SynResult<()> {
        let Meta::List(list) = &attr.meta else {
            return Err(SynError::new_spanned(
                attr,
                "expected `#[envelope(\"KEY,...\")]`, `#[envelope(embedded)]` or `#[envelope(skip)]`",
            ));
        };

        // A leading string literal is the annotation; anything else is a
        // list of bare options.
        let starts_with_literal = matches!(
            list.tokens.clone().into_iter().next(),
            Some(TokenTree::Literal(_))
        );

        if starts_with_literal {
            return attr.parse_args_with(|input: ParseStream| self.parse_annotation(input));
        }

        attr.parse_nested_meta(|meta| self.parse_meta(meta))
    }

    fn parse_annotation(&mut self, input: ParseStream) -> SynResult<()> {
        let lit: LitStr = input.parse()?;

        if !self.seen.insert("annotation") {
            return Err(SynError::new(
                lit.span(),
                "Duplicate option: a field takes a single annotation string",
            ));
        }

        if !input.is_empty() {
            return Err(input.error("an annotation string cannot be combined with other options"));
        }

        self.annotation = Some(lit.value());
        Ok(())
    }

    #[expect(
        clippy::needless_pass_by_value,
        reason = "ParseNestedMeta is passed by value per syn's parse_nested_meta callback signature"
    )]
    fn parse_meta(&mut self, meta: ParseNestedMeta) -> SynResult<()> {
        let ident = meta
            .path
            .get_ident()
            .ok_or_else(|| meta.error("Expected Identifier"))?;
        let name = ident.to_string();

        let key: &'static str = match name.as_str() {
            "embedded" => "embedded",
            "skip" => "skip",
            _ => {
                return Err(meta.error(format!(
                    "Unknown option `{name}`, expected `embedded` or `skip`"
                )));
            }
        };

        if !self.seen.insert(key) {
            return Err(meta.error(format!("Duplicate option: `{key}`")));
        }

        match key {
            "embedded" => self.embedded = true,
            _ => self.skip = true,
        }

        Ok(())
    }

    fn build(self, attr: &Attribute) -> SynResult<FieldConfig> {
        if self.skip {
            if self.embedded || self.annotation.is_some() {
                return Err(SynError::new_spanned(
                    attr,
                    "`skip` cannot be combined with other options",
                ));
            }
            return Ok(FieldConfig::Skip);
        }

        match (self.annotation, self.embedded) {
            (Some(_), true) => Err(SynError::new_spanned(
                attr,
                "an annotation string cannot be combined with `embedded`",
            )),
            (Some(annotation), false) => Ok(FieldConfig::Annotated(annotation)),
            (None, true) => Ok(FieldConfig::Embedded),
            (None, false) => Ok(FieldConfig::Bare),
        }
    }
}
