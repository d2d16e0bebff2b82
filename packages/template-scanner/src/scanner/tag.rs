//! Tag Classification Result
//!
//! Value objects produced by [`super::TagScanner::get_tag`]. Nothing here is
//! retained between calls.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Binding kind of an attribute, derived from the syntax around its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputAttrType {
    /// `[name]` or a plain attribute
    Input,
    /// `(name)`
    Output,
    /// `[(name)]`
    InputOutput,
    /// `#name`
    Template,
}

/// Literal kind of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagAttrValueType {
    String,
    Boolean,
    Number,
    /// `[name]="... 'literal' ..."`
    PropertyBinding,
}

/// One attribute occurrence on a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagAttr {
    #[serde(rename = "type")]
    pub attr_type: InputAttrType,
    /// Name with binding markers stripped
    pub name: String,
    /// Raw text between the double quotes, empty when absent
    pub value: String,
    pub value_type: TagAttrValueType,
}

/// Attributes keyed by their stripped name, in first-occurrence order.
pub type TagAttrs = IndexMap<String, TagAttr>;

/// What the cursor is on inside the enclosing tag.
///
/// `is_on_tag_name`, `is_on_attr_name` and `is_on_attr_value` are mutually
/// exclusive, except that a word recognized as a component name forces
/// `is_on_tag_name` regardless of the cursor column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    /// Identifier-like token under the cursor, possibly empty
    pub word: String,
    pub is_on_tag_name: bool,
    pub is_on_attr_name: bool,
    pub is_on_attr_value: bool,
    /// Attribute whose value holds the cursor; empty unless `is_on_attr_value`
    pub attr_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<TagAttrs>,
}

impl Tag {
    pub fn attr(&self, name: &str) -> Option<&TagAttr> {
        self.attributes.as_ref().and_then(|attrs| attrs.get(name))
    }
}
