//! Long-lived frequency indexes: the training corpus and user-confirmed
//! alignments.
//!
//! Both are accumulators with the same shape as [`PermutationIndex`] but a
//! different scope and lifetime: they are populated during the ingest phase,
//! then shared read-only across every scoring request for the rest of the
//! session. Re-adding the same data double-counts; callers own dedup.

use crate::alignment::Alignment;
use crate::engine_index::EngineIndex;
use crate::frequency::{AlignmentIndex, NgramIndex};
use crate::parser;
use crate::token::Token;

/// Global counts over the training corpus of sentence pairs.
///
/// Each ingested pair contributes its full candidate-alignment permutation
/// space, so scoring can ask how often a candidate (or either of its sides)
/// occurred across everything the corpus could have aligned.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    alignments: AlignmentIndex,
    source_ngrams: NgramIndex,
    target_ngrams: NgramIndex,
    sentence_pairs: u64,
}

impl CorpusIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enumerate and accumulate the permutation space of one sentence pair.
    pub fn add_sentence_pair(
        &mut self,
        source: &[Token],
        target: &[Token],
        max_ngram_length: usize,
        include_null: bool,
    ) {
        let candidates =
            parser::alignment_permutations(source, target, max_ngram_length, include_null);
        for alignment in &candidates {
            self.alignments.increment(alignment);
            self.source_ngrams.increment(alignment.source());
            self.target_ngrams.increment(alignment.target());
        }
        self.sentence_pairs += 1;
    }

    /// Number of sentence pairs ingested so far.
    pub fn sentence_pairs(&self) -> u64 {
        self.sentence_pairs
    }

    pub fn alignment_frequency(&self) -> &AlignmentIndex {
        &self.alignments
    }

    pub fn source_ngram_frequency(&self) -> &NgramIndex {
        &self.source_ngrams
    }

    pub fn target_ngram_frequency(&self) -> &NgramIndex {
        &self.target_ngrams
    }

    /// Non-owning read view for the algorithm pipeline.
    pub fn view(&self) -> EngineIndex<'_> {
        EngineIndex::new(&self.alignments, &self.source_ngrams, &self.target_ngrams)
    }
}

/// Counts over alignments a user has explicitly confirmed as correct.
///
/// Much smaller than the corpus index and worth more to the algorithms that
/// consume it: a confirmed alignment is ground truth, not enumeration.
#[derive(Debug, Clone, Default)]
pub struct SavedAlignmentsIndex {
    alignments: AlignmentIndex,
    source_ngrams: NgramIndex,
    target_ngrams: NgramIndex,
}

impl SavedAlignmentsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one confirmed alignment.
    pub fn add_alignment(&mut self, alignment: &Alignment) {
        self.alignments.increment(alignment);
        self.source_ngrams.increment(alignment.source());
        self.target_ngrams.increment(alignment.target());
    }

    /// Record a batch of confirmed alignments.
    pub fn add_alignments(&mut self, alignments: &[Alignment]) {
        for alignment in alignments {
            self.add_alignment(alignment);
        }
    }

    /// Whether this exact alignment has ever been confirmed.
    pub fn contains(&self, alignment: &Alignment) -> bool {
        self.alignments.frequency(alignment) > 0
    }

    pub fn alignment_frequency(&self) -> &AlignmentIndex {
        &self.alignments
    }

    pub fn source_ngram_frequency(&self) -> &NgramIndex {
        &self.source_ngrams
    }

    pub fn target_ngram_frequency(&self) -> &NgramIndex {
        &self.target_ngrams
    }

    /// Non-owning read view for the algorithm pipeline.
    pub fn view(&self) -> EngineIndex<'_> {
        EngineIndex::new(&self.alignments, &self.source_ngrams, &self.target_ngrams)
    }
}
