//! Corpus and saved-alignment frequency scoring.

use crate::algorithm::Algorithm;
use crate::algorithms::occurrence_ratio;
use crate::engine_index::EngineIndex;
use crate::prediction::{scores, Prediction};
use crate::token::Token;

/// Scores how strongly the long-lived indexes support a candidate.
///
/// For each prediction the corpus and saved-alignment ratios are combined as
/// `(corpus + boost * saved) / (1 + boost)`: saved alignments were confirmed
/// by a user, so their evidence is weighted `boost` times heavier than the
/// corpus's enumerated evidence. With both ratios in [0, 1] the combined
/// score stays in [0, 1].
pub struct AlignmentFrequency {
    saved_boost: f64,
}

impl AlignmentFrequency {
    /// `saved_boost` is the trust multiplier for user-confirmed alignments;
    /// values below 1 are clamped so saved data is never worth less than the
    /// corpus.
    pub fn new(saved_boost: f64) -> Self {
        AlignmentFrequency {
            saved_boost: saved_boost.max(1.0),
        }
    }
}

impl Default for AlignmentFrequency {
    fn default() -> Self {
        AlignmentFrequency::new(2.0)
    }
}

impl Algorithm for AlignmentFrequency {
    fn name(&self) -> &str {
        "alignment frequency"
    }

    fn execute(
        &self,
        mut predictions: Vec<Prediction>,
        corpus: EngineIndex<'_>,
        saved: EngineIndex<'_>,
        _sentence_pair: (&[Token], &[Token]),
        _permutations: Option<EngineIndex<'_>>,
    ) -> Vec<Prediction> {
        for prediction in predictions.iter_mut() {
            let corpus_ratio = occurrence_ratio(corpus, prediction.alignment());
            let saved_ratio = occurrence_ratio(saved, prediction.alignment());
            let combined =
                (corpus_ratio + self.saved_boost * saved_ratio) / (1.0 + self.saved_boost);
            prediction.set_score(scores::ALIGNMENT_FREQUENCY, combined);
        }
        predictions
    }
}
