//! Read-facade over an index bundle, handed to algorithms during scoring.

use crate::alignment::Alignment;
use crate::frequency::{AlignmentIndex, NgramIndex};
use crate::ngram::Ngram;

/// A thin non-owning view bundling the three frequency indexes an algorithm
/// may read.
///
/// The same facade fronts corpus, saved-alignment and permutation bundles, so
/// an algorithm can ask for "the alignment frequency" without knowing which
/// store backs it. Views are `Copy` and live only for one `execute` call.
#[derive(Debug, Clone, Copy)]
pub struct EngineIndex<'a> {
    alignments: &'a AlignmentIndex,
    source_ngrams: &'a NgramIndex,
    target_ngrams: &'a NgramIndex,
}

impl<'a> EngineIndex<'a> {
    pub fn new(
        alignments: &'a AlignmentIndex,
        source_ngrams: &'a NgramIndex,
        target_ngrams: &'a NgramIndex,
    ) -> Self {
        EngineIndex {
            alignments,
            source_ngrams,
            target_ngrams,
        }
    }

    /// Occurrences of the full (source, target) pair.
    pub fn alignment_frequency(&self, alignment: &Alignment) -> u64 {
        self.alignments.frequency(alignment)
    }

    /// Occurrences of the n-gram on the source side.
    pub fn source_ngram_frequency(&self, ngram: &Ngram) -> u64 {
        self.source_ngrams.frequency(ngram)
    }

    /// Occurrences of the n-gram on the target side.
    pub fn target_ngram_frequency(&self, ngram: &Ngram) -> u64 {
        self.target_ngrams.frequency(ngram)
    }
}
