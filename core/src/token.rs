//! Lexical tokens with sentence-relative position metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single lexical unit extracted from a sentence.
///
/// Tokens carry two positions: `position` counts tokens from the start of the
/// sentence, `char_position` counts characters to the token's first character.
/// Both are zero-based and assigned by the tokenizer in left-to-right order.
/// A token is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    text: String,
    position: usize,
    char_position: usize,
}

impl Token {
    pub fn new<T: Into<String>>(text: T, position: usize, char_position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            char_position,
        }
    }

    /// The token's textual value.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Zero-based index of this token among the tokens of its sentence.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Zero-based character offset of the token's first character.
    pub fn char_position(&self) -> usize {
        self.char_position
    }

    /// Number of characters in the token text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
