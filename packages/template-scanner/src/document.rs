//! Document Access
//!
//! The scanner reads text through [`TextDocument`] so it can run against an
//! editor buffer, a file on disk or a single string alike. Positions are
//! 0-based; columns count characters, not bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::chars;
use crate::error::{Result, ScanError};

/// Identifier-like words: letters, digits, `_`, `-`, `:` and `.`
pub static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[\w\-:.]+\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Position { line, character }
    }
}

/// Half-open span on a single line or across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Range { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Read-only text access supplied by the host.
pub trait TextDocument {
    /// Text of `line` without its terminator, `None` past the last line.
    fn line_text(&self, line: usize) -> Option<&str>;

    /// Range of the `pattern` match containing `position`. A match touching
    /// the cursor on either side counts as containing it.
    fn word_range_at(&self, position: Position, pattern: &Regex) -> Option<Range> {
        let text = self.line_text(position.line)?;
        let column = position.character;
        for m in pattern.find_iter(text) {
            let start = text[..m.start()].chars().count();
            if start > column {
                break;
            }
            let end = start + m.as_str().chars().count();
            if column <= end {
                return Some(Range::new(
                    Position::new(position.line, start),
                    Position::new(position.line, end),
                ));
            }
        }
        None
    }

    /// Identifier-like word at `position`, if any.
    fn word_at(&self, position: Position) -> Option<String> {
        let text = self.line_text(position.line)?;
        let mut around = text.chars().skip(position.character.saturating_sub(1));
        let before = around.next();
        let at = if position.character == 0 { before } else { around.next() };
        if !before.into_iter().chain(at).any(chars::is_word_char) {
            return None;
        }
        let range = self.word_range_at(position, &WORD_RE)?;
        Some(self.text_in_range(range))
    }

    /// Text covered by `range`, clamped to the document. Only the start
    /// line is read; ranges spanning lines are cut at its end.
    fn text_in_range(&self, range: Range) -> String {
        if range.is_empty() {
            return String::new();
        }
        let Some(text) = self.line_text(range.start.line) else {
            return String::new();
        };
        let end = if range.end.line > range.start.line {
            usize::MAX
        } else {
            range.end.character
        };
        text.chars()
            .skip(range.start.character)
            .take(end - range.start.character)
            .collect()
    }
}

/// An owned multi-line text with a line-start index.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    content: String,
    /// Byte offset where each line begins
    line_starts: Vec<usize>,
}

impl SourceDocument {
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let mut line_starts = vec![0];
        for (offset, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(offset + 1);
            }
        }
        SourceDocument {
            content,
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Like [`TextDocument::line_text`], reporting a missing line as an error.
    pub fn line(&self, line: usize) -> Result<&str> {
        self.line_text(line).ok_or(ScanError::LineOutOfRange {
            line,
            line_count: self.line_count(),
        })
    }
}

impl TextDocument for SourceDocument {
    fn line_text(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(self.content.len(), |next| next - 1);
        let text = &self.content[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}
