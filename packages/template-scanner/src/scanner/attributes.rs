//! Attribute Parsing
//!
//! Splits the attribute region of a tag into [`TagAttr`] entries and
//! classifies each one by its binding syntax and literal value.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tag::{InputAttrType, TagAttr, TagAttrValueType, TagAttrs};
use crate::chars;

/// An attribute name optionally wrapped in `[...]`, `(...)`, `[(...)]` or
/// prefixed by `#`, optionally followed by `="value"`.
static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"((?:\[|\(|\[\(|#)?[\-\w]+(?:\)\]|\]|\))?)(?:="([^"]+)")?"#).unwrap()
});

/// ` name=` directly before a (possibly empty) run of masked value characters
static ATTR_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s([\w\-:.]+)=%*$").unwrap());

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[.0-9]+$").unwrap());

/// Parse every attribute in `text`. A later attribute with the same stripped
/// name replaces the earlier one.
pub fn get_attrs(text: &str) -> TagAttrs {
    let mut attrs = TagAttrs::new();
    for caps in ATTR_RE.captures_iter(text) {
        let Some(name) = caps.get(1) else { continue };
        let value = caps.get(2).map_or("", |m| m.as_str());
        let attr = pure_attr(name.as_str(), value);
        attrs.insert(attr.name.clone(), attr);
    }
    attrs
}

/// Attribute name in front of the masked value that `masked_prefix` ends in.
pub fn get_attr_name(masked_prefix: &str) -> String {
    ATTR_NAME_RE
        .captures(masked_prefix)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Classify one raw attribute.
pub fn pure_attr(raw_name: &str, value: &str) -> TagAttr {
    let value_type = if value.contains(chars::SQ) && raw_name.contains(chars::LBRACKET) {
        TagAttrValueType::PropertyBinding
    } else if value == "true" || value == "false" {
        TagAttrValueType::Boolean
    } else if NUMBER_RE.is_match(value) {
        TagAttrValueType::Number
    } else {
        TagAttrValueType::String
    };

    let (attr_type, name) = strip_binding(raw_name);

    TagAttr {
        attr_type,
        name: name.to_string(),
        value: value.to_string(),
        value_type,
    }
}

fn strip_binding(raw_name: &str) -> (InputAttrType, &str) {
    if !raw_name.starts_with(chars::is_binding_marker) {
        return (InputAttrType::Input, raw_name);
    }
    if let Some(rest) = raw_name.strip_prefix("[(") {
        (InputAttrType::InputOutput, rest.strip_suffix(")]").unwrap_or(rest))
    } else if let Some(rest) = raw_name.strip_prefix(chars::LBRACKET) {
        (InputAttrType::Input, rest.strip_suffix(chars::RBRACKET).unwrap_or(rest))
    } else if let Some(rest) = raw_name.strip_prefix(chars::LPAREN) {
        (InputAttrType::Output, rest.strip_suffix(chars::RPAREN).unwrap_or(rest))
    } else {
        let rest = raw_name.strip_prefix(chars::HASH).unwrap_or(raw_name);
        (InputAttrType::Template, rest)
    }
}
