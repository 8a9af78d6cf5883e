//! Frequency indexes over the candidate-alignment permutation space of one
//! sentence pair.

use crate::alignment::Alignment;
use crate::engine_index::EngineIndex;
use crate::frequency::{AlignmentIndex, NgramIndex};

/// Counts how often alignments and their n-gram sides occur across all
/// candidate permutations enumerated for the sentence pair currently being
/// aligned.
///
/// A candidate that recurs across many permutations of the same pair is
/// evidence of real structure rather than enumeration noise. The index is
/// scoped to a single scoring request: construct a fresh one per sentence
/// pair and never share it across requests.
#[derive(Debug, Clone, Default)]
pub struct PermutationIndex {
    alignments: AlignmentIndex,
    source_ngrams: NgramIndex,
    target_ngrams: NgramIndex,
}

impl PermutationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate a batch of candidate alignments: each one increments the
    /// alignment index by the full pair and the two n-gram indexes by each
    /// side independently.
    pub fn add_alignments(&mut self, alignments: &[Alignment]) {
        for alignment in alignments {
            self.alignments.increment(alignment);
            self.source_ngrams.increment(alignment.source());
            self.target_ngrams.increment(alignment.target());
        }
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
