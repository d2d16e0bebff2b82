//! Template Scanner
//!
//! Single-line lexical classification of Angular-style markup for editor
//! completion: which tag encloses the cursor, whether the cursor is on the
//! tag name, an attribute name or an attribute value, and which attributes
//! the tag carries.

pub mod attributes;
pub mod locator;
pub mod mask;
pub mod tag;

pub use attributes::{get_attr_name, get_attrs, pure_attr};
pub use locator::TagScanner;
pub use mask::{mask, mask_interpolations, mask_quoted_values, MaskedLine};
pub use tag::{InputAttrType, Tag, TagAttr, TagAttrValueType, TagAttrs};
