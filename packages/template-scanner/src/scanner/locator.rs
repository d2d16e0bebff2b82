//! Tag Locator
//!
//! Finds the tag opening that encloses the cursor on a single line and
//! classifies the cursor as sitting on the tag name, an attribute name or an
//! attribute value.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::attributes::get_attrs;
use super::mask::MaskedLine;
use super::tag::Tag;
use crate::document::{Position, Range, TextDocument};
use crate::resources::ComponentRegistry;

/// `<name` followed by an optional attribute region running up to `>`
static TAG_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([\-\w]+)(\s+[^>]*)?").unwrap());

/// Classifies cursor positions against a host document.
pub struct TagScanner<'a, D: ?Sized, C: ?Sized> {
    document: &'a D,
    components: &'a C,
}

impl<'a, D, C> TagScanner<'a, D, C>
where
    D: TextDocument + ?Sized,
    C: ComponentRegistry + ?Sized,
{
    pub fn new(document: &'a D, components: &'a C) -> Self {
        TagScanner {
            document,
            components,
        }
    }

    /// Classify `position` within its line of the document.
    pub fn get_tag(&self, position: Position, include_attributes: bool) -> Option<Tag> {
        let line = self.document.line_text(position.line)?;
        self.scan_line(line, position, include_attributes)
    }

    /// Classify `position` within `line`, which the caller already fetched for
    /// `position.line`. The word under the cursor is still looked up through
    /// the document.
    ///
    /// When several tag openings touch the cursor the last one wins. The
    /// attribute list comes from the last tag opening on the line, whether or
    /// not it contains the cursor.
    pub fn scan_line(&self, line: &str, position: Position, include_attributes: bool) -> Option<Tag> {
        let masked = MaskedLine::new(line);
        let column = position.character;
        let mut found: Option<Tag> = None;
        let mut attr_text = "";

        for caps in TAG_OPEN_RE.captures_iter(&masked.pure) {
            let (Some(raw), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let start = masked.pure[..raw.start()].chars().count();
            let end = start + raw.as_str().chars().count();

            attr_text = caps.get(2).map_or("", |attr| {
                let attr_start = masked.pure[..attr.start()].chars().count();
                char_span(line, attr_start, attr.as_str().chars().count())
            });

            let contains = start <= column && end >= column;
            trace!(tag = name.as_str(), start, end, contains, "tag opening");
            if !contains {
                continue;
            }

            let word = self.document.word_at(position).unwrap_or_default();
            let mut is_on_tag_name = column <= start + name.as_str().chars().count() + 1;
            // component and directive names count as the tag name anywhere
            if !is_on_tag_name && self.components.is_component(&word) {
                is_on_tag_name = true;
            }
            let is_on_attr_value = masked.is_attr_value_at(column);
            let attr_name = if is_on_attr_value {
                masked.attr_name_before(column)
            } else {
                String::new()
            };
            let is_on_attr_name = !is_on_tag_name && !is_on_attr_value && !word.is_empty();

            found = Some(Tag {
                name: name.as_str().to_string(),
                word,
                is_on_tag_name,
                is_on_attr_name,
                is_on_attr_value,
                attr_name,
                attributes: None,
            });
        }

        let mut tag = found?;
        if include_attributes {
            tag.attributes = Some(get_attrs(attr_text));
        }
        trace!(
            tag = tag.name.as_str(),
            word = tag.word.as_str(),
            tag_name = tag.is_on_tag_name,
            attr_name = tag.is_on_attr_name,
            attr_value = tag.is_on_attr_value,
            "classified cursor"
        );
        Some(tag)
    }

    /// The `count` characters right before `position` on its line.
    pub fn typing_pre_char(&self, position: Position, count: usize) -> String {
        let start = Position::new(position.line, position.character.saturating_sub(count));
        self.document.text_in_range(Range::new(start, position))
    }
}

/// `len` characters of `text` starting at character `start`.
fn char_span(text: &str, start: usize, len: usize) -> &str {
    let byte_at = |column: usize| {
        text.char_indices()
            .nth(column)
            .map_or(text.len(), |(offset, _)| offset)
    };
    &text[byte_at(start)..byte_at(start + len)]
}
