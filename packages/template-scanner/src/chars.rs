/*
 * Character Codes
 *
 * Characters the template scanner reacts to while classifying a line.
 */

//! Character constants used throughout the scanner

// Quotes
pub const SQ: char = '\'';

// Binding syntax
pub const LBRACKET: char = '[';
pub const RBRACKET: char = ']';
pub const LPAREN: char = '(';
pub const RPAREN: char = ')';
pub const HASH: char = '#';

// Identifier extras accepted by the word pattern
pub const MINUS: char = '-';
pub const COLON: char = ':';
pub const PERIOD: char = '.';
pub const UNDERSCORE: char = '_';

/// Fill character for masked `{{ ... }}` interpolations
pub const INTERPOLATION_FILL: char = '^';

/// Fill character for masked quoted attribute values
pub const QUOTED_FILL: char = '%';

/// Check if character belongs to the identifier class `[\w\-:.]`
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == UNDERSCORE || ch == MINUS || ch == COLON || ch == PERIOD
}

/// Check if character opens a binding marker (`[`, `(` or `#`)
pub fn is_binding_marker(ch: char) -> bool {
    ch == LBRACKET || ch == LPAREN || ch == HASH
}
