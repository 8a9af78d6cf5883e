//! Deterministic whitespace tokenizer.
//!
//! The indexing and scoring layers assume tokens arrive with increasing
//! `position` and `char_position` in left-to-right order; this module is the
//! reference implementation of that contract for callers that start from raw
//! strings.

use crate::token::Token;
use crate::utils;

/// Split a sentence into tokens on whitespace.
///
/// The sentence is NFC-normalized first so the same word always produces the
/// same token text. Token positions count tokens, char positions count
/// characters of the normalized sentence.
pub fn tokenize(sentence: &str) -> Vec<Token> {
    let normalized = utils::normalize(sentence);

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0usize;

    for (offset, ch) in normalized.chars().enumerate() {
        if ch.is_whitespace() {
            if !current.is_empty() {
                tokens.push(Token::new(
                    std::mem::take(&mut current),
                    tokens.len(),
                    start,
                ));
            }
        } else {
            if current.is_empty() {
                start = offset;
            }
            current.push(ch);
        }
    }
    if !current.is_empty() {
        tokens.push(Token::new(current, tokens.len(), start));
    }
    tokens
}
