//! Frequency indexes: append-only occurrence accumulators.
//!
//! Both indexes map a structural key (derived from token text) to a count.
//! They only ever grow: `increment` adds, `frequency` reads, nothing removes
//! or decrements. Reading a never-seen key returns 0 and does not create an
//! entry. `snapshot`/`replace_with` expose the full key -> count mapping so an
//! external store can persist and restore an index exactly.

use crate::alignment::Alignment;
use crate::ngram::Ngram;
use ahash::AHashMap;
use std::collections::HashMap;

/// Occurrence counts keyed by n-gram text.
#[derive(Debug, Clone, Default)]
pub struct NgramIndex {
    counts: AHashMap<String, u64>,
}

impl NgramIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of the n-gram, creating its entry at 1 if
    /// it has never been seen.
    pub fn increment(&mut self, ngram: &Ngram) {
        let entry = self.counts.entry(ngram.key()).or_insert(0);
        *entry = entry.saturating_add(1);
    }

    /// Number of occurrences counted so far, 0 for an unseen n-gram.
    pub fn frequency(&self, ngram: &Ngram) -> u64 {
        self.counts.get(&ngram.key()).copied().unwrap_or(0)
    }

    /// Number of distinct n-grams counted.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Clone the full key -> count mapping for external persistence.
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.counts.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }

    /// Replace the entire contents with a previously persisted mapping.
    pub fn replace_with(&mut self, data: HashMap<String, u64>) {
        self.counts = data.into_iter().collect();
    }
}

/// Occurrence counts keyed by (source, target) n-gram pair text.
#[derive(Debug, Clone, Default)]
pub struct AlignmentIndex {
    counts: AHashMap<String, u64>,
}

impl AlignmentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of the alignment, creating its entry at 1
    /// if it has never been seen.
    pub fn increment(&mut self, alignment: &Alignment) {
        let entry = self.counts.entry(alignment.key()).or_insert(0);
        *entry = entry.saturating_add(1);
    }

    /// Number of occurrences counted so far, 0 for an unseen alignment.
    pub fn frequency(&self, alignment: &Alignment) -> u64 {
        self.counts.get(&alignment.key()).copied().unwrap_or(0)
    }

    /// Number of distinct alignments counted.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Clone the full key -> count mapping for external persistence.
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.counts.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }

    /// Replace the entire contents with a previously persisted mapping.
    pub fn replace_with(&mut self, data: HashMap<String, u64>) {
        self.counts = data.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;

    fn ngram(words: &[&str]) -> Ngram {
        let tokens = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i, 0))
            .collect();
        Ngram::new(tokens)
    }

    #[test]
    fn frequency_equals_number_of_increments() {
        let mut index = NgramIndex::new();
        let cat = ngram(&["cat"]);
        let dog = ngram(&["dog"]);

        assert_eq!(index.frequency(&cat), 0);
        index.increment(&cat);
        index.increment(&cat);
        index.increment(&dog);
        assert_eq!(index.frequency(&cat), 2);
        assert_eq!(index.frequency(&dog), 1);
        assert_eq!(index.frequency(&ngram(&["bird"])), 0);
    }

    #[test]
    fn reading_an_unseen_key_creates_no_entry() {
        let mut index = NgramIndex::new();
        index.increment(&ngram(&["cat"]));
        assert_eq!(index.frequency(&ngram(&["dog"])), 0);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn separately_constructed_equal_ngrams_merge() {
        let mut index = NgramIndex::new();
        index.increment(&Ngram::new(vec![Token::new("chat", 0, 0)]));
        index.increment(&Ngram::new(vec![Token::new("chat", 5, 20)]));
        assert_eq!(index.len(), 1);
        assert_eq!(index.frequency(&ngram(&["chat"])), 2);
    }

    #[test]
    fn alignment_index_counts_pairs() {
        let mut index = AlignmentIndex::new();
        let forward = Alignment::new(ngram(&["the"]), ngram(&["le"]));
        let reversed = Alignment::new(ngram(&["le"]), ngram(&["the"]));

        index.increment(&forward);
        index.increment(&forward);
        assert_eq!(index.frequency(&forward), 2);
        assert_eq!(index.frequency(&reversed), 0);
    }

    #[test]
    fn snapshot_round_trips() {
        let mut index = NgramIndex::new();
        index.increment(&ngram(&["the", "cat"]));
        index.increment(&ngram(&["the"]));
        index.increment(&ngram(&["the"]));

        let mut restored = NgramIndex::new();
        restored.replace_with(index.snapshot());
        assert_eq!(restored.frequency(&ngram(&["the"])), 2);
        assert_eq!(restored.frequency(&ngram(&["the", "cat"])), 1);
        assert_eq!(restored.len(), index.len());
    }
}
