#![deny(clippy::all)]

/**
 * Angular Template Scanner
 *
 * Cursor classification for Angular templates, feeding editor completion
 * and hover providers. Optional Node.js bindings for extension hosts.
 */

#[cfg(feature = "napi-bindings")]
use napi_derive::napi;

pub mod chars;
pub mod config;
pub mod document;
pub mod error;
pub mod resources;
pub mod scanner;

// Re-exports
pub use config::ScannerConfig;
pub use document::{Position, Range, SourceDocument, TextDocument};
pub use error::{Result, ScanError};
pub use resources::{ComponentPredicate, ComponentRegistry, ComponentSet, NoComponents};
pub use scanner::{
    get_attrs, pure_attr, InputAttrType, Tag, TagAttr, TagAttrValueType, TagAttrs, TagScanner,
};

/// Classify `character` within `line_text`.
///
/// Returns the tag as JSON, or `null` when the cursor is not inside a tag
/// opening.
#[cfg(feature = "napi-bindings")]
#[napi(js_name = "getTag")]
pub fn get_tag_json(
    line_text: String,
    character: u32,
    components: Option<Vec<String>>,
    include_attributes: Option<bool>,
) -> napi::Result<String> {
    let document = SourceDocument::new(line_text);
    let components: ComponentSet = components.unwrap_or_default().into_iter().collect();
    let scanner = TagScanner::new(&document, &components);
    let tag = scanner.get_tag(
        Position::new(0, character as usize),
        include_attributes.unwrap_or(true),
    );
    serde_json::to_string(&tag).map_err(|e| napi::Error::from_reason(e.to_string()))
}

/// The `count` characters before `character` in `line_text`.
#[cfg(feature = "napi-bindings")]
#[napi(js_name = "typingPreChar")]
pub fn typing_pre_char(line_text: String, character: u32, count: Option<u32>) -> String {
    let document = SourceDocument::new(line_text);
    let scanner = TagScanner::new(&document, &NoComponents);
    scanner.typing_pre_char(
        Position::new(0, character as usize),
        count.unwrap_or(1) as usize,
    )
}
