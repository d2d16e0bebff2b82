//! Line Masking
//!
//! Hides interpolations and quoted values behind fill characters so the
//! structural regexes of the locator cannot trip over `<`, `>`, `=` or quotes
//! embedded in them. Masking never changes the number of characters in a line,
//! so a column computed on a masked line is valid on the original.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::chars;

/// `{{ expr }}` spans
static INTERPOLATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{[^}]*?\}\}").unwrap());

/// Single or double quoted string literals
static QUOTED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"("[^"]*"|'[^']*')"#).unwrap());

/// Replace every match of `pattern` with `fill` repeated once per matched character.
pub fn mask(text: &str, pattern: &Regex, fill: char) -> String {
    pattern
        .replace_all(text, |caps: &Captures| {
            let len = caps.get(0).map_or(0, |m| m.as_str().chars().count());
            fill.to_string().repeat(len)
        })
        .into_owned()
}

/// Mask `{{ ... }}` interpolations with `^`.
pub fn mask_interpolations(line: &str) -> String {
    mask(line, &INTERPOLATION_RE, chars::INTERPOLATION_FILL)
}

/// Mask quoted string literals with `%`.
pub fn mask_quoted_values(line: &str) -> String {
    mask(line, &QUOTED_RE, chars::QUOTED_FILL)
}

/// The two masked renditions of a line used during classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedLine {
    /// Interpolations hidden, quotes still literal
    pub pure: String,
    /// Interpolations and quoted values hidden
    pub attr_flags: String,
}

impl MaskedLine {
    pub fn new(line: &str) -> Self {
        let pure = mask_interpolations(line);
        let attr_flags = mask_quoted_values(&pure);
        MaskedLine { pure, attr_flags }
    }

    /// True when `column` falls inside a quoted value.
    pub fn is_attr_value_at(&self, column: usize) -> bool {
        self.attr_flags.chars().nth(column) == Some(chars::QUOTED_FILL)
    }

    /// Name of the attribute whose quoted value runs up to `column`.
    pub fn attr_name_before(&self, column: usize) -> String {
        let prefix: String = self.attr_flags.chars().take(column).collect();
        super::attributes::get_attr_name(&prefix)
    }
}
