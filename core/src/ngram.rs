//! N-grams: ordered runs of tokens treated as one translation unit.
//!
//! Index keys are derived from token text, never from object identity: two
//! n-grams built independently from the same words must accumulate into the
//! same counter. Token texts are joined with an ASCII unit separator, which
//! cannot survive whitespace tokenization, so distinct token sequences always
//! produce distinct keys.

use crate::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between token texts inside an n-gram key.
pub(crate) const KEY_SEPARATOR: char = '\u{1F}';

/// An ordered, possibly-empty run of tokens from one sentence.
///
/// Tokens keep their source order; an n-gram never reorders them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ngram {
    tokens: Vec<Token>,
}

impl Ngram {
    pub fn new(tokens: Vec<Token>) -> Self {
        Ngram { tokens }
    }

    /// An n-gram with no tokens, used for null alignments.
    pub fn empty() -> Self {
        Ngram { tokens: Vec::new() }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens in the n-gram.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Position of the n-gram in token units: the first token's position,
    /// or 0 when the n-gram is empty.
    pub fn token_position(&self) -> usize {
        match self.tokens.first() {
            Some(t) => t.position(),
            None => 0,
        }
    }

    /// Position of the n-gram in character units: the first token's char
    /// offset, or 0 when the n-gram is empty.
    pub fn char_position(&self) -> usize {
        match self.tokens.first() {
            Some(t) => t.char_position(),
            None => 0,
        }
    }

    /// Total character length across all tokens.
    pub fn char_len(&self) -> usize {
        self.tokens.iter().map(Token::char_len).sum()
    }

    /// Structural index key: token texts joined by [`KEY_SEPARATOR`].
    ///
    /// Equal for any two n-grams with identical token text, regardless of
    /// how or where they were constructed.
    pub fn key(&self) -> String {
        let mut key = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                key.push(KEY_SEPARATOR);
            }
            key.push_str(token.text());
        }
        key
    }
}

impl fmt::Display for Ngram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texts: Vec<&str> = self.tokens.iter().map(Token::text).collect();
        write!(f, "{}", texts.join(":"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ngram(words: &[&str]) -> Ngram {
        let tokens = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i + 2, i * 5))
            .collect();
        Ngram::new(tokens)
    }

    #[test]
    fn positions_come_from_first_token() {
        let n = ngram(&["le", "chat"]);
        assert_eq!(n.token_position(), 2);
        assert_eq!(n.char_position(), 0);
    }

    #[test]
    fn empty_ngram_positions_degrade_to_zero() {
        let n = Ngram::empty();
        assert_eq!(n.token_position(), 0);
        assert_eq!(n.char_position(), 0);
        assert_eq!(n.char_len(), 0);
        assert_eq!(n.key(), "");
    }

    #[test]
    fn identical_text_yields_identical_keys() {
        // Same words, different positions and construction sites.
        let a = Ngram::new(vec![Token::new("le", 0, 0), Token::new("chat", 1, 3)]);
        let b = Ngram::new(vec![Token::new("le", 7, 40), Token::new("chat", 8, 43)]);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn distinct_token_sequences_yield_distinct_keys() {
        let joined = Ngram::new(vec![Token::new("ab", 0, 0)]);
        let split = Ngram::new(vec![Token::new("a", 0, 0), Token::new("b", 1, 2)]);
        assert_ne!(joined.key(), split.key());
    }

    #[test]
    fn display_joins_with_colon() {
        assert_eq!(ngram(&["le", "chat"]).to_string(), "le:chat");
    }
}
