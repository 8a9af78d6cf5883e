//! Alignments: hypothesized source-to-target n-gram correspondences.

use crate::ngram::Ngram;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the source and target n-gram keys inside an alignment key.
const PAIR_SEPARATOR: char = '\u{1E}';

/// An ordered pair of n-grams: the hypothesis that the source span translates
/// to the target span.
///
/// Structurally identical alignments (same token text on both sides) share
/// one index entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alignment {
    source: Ngram,
    target: Ngram,
}

impl Alignment {
    pub fn new(source: Ngram, target: Ngram) -> Self {
        Alignment { source, target }
    }

    pub fn source(&self) -> &Ngram {
        &self.source
    }

    pub fn target(&self) -> &Ngram {
        &self.target
    }

    /// Structural index key: the two n-gram keys joined by a record
    /// separator, so (source, target) pairs never collide across sides.
    pub fn key(&self) -> String {
        let mut key = self.source.key();
        key.push(PAIR_SEPARATOR);
        key.push_str(&self.target.key());
        key
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
