//! Character-length similarity scoring.

use crate::algorithm::Algorithm;
use crate::engine_index::EngineIndex;
use crate::prediction::{scores, Prediction};
use crate::token::Token;

/// Scores the character-length similarity of a candidate's two n-grams.
///
/// Translated phrases tend to have comparable lengths, so the score is the
/// ratio of the shorter side's character count to the longer side's: 1 for
/// equal lengths, approaching 0 as they diverge, 0 when either side is
/// empty.
pub struct CharacterLength;

impl Algorithm for CharacterLength {
    fn name(&self) -> &str {
        "character length"
    }

    fn execute(
        &self,
        mut predictions: Vec<Prediction>,
        _corpus: EngineIndex<'_>,
        _saved: EngineIndex<'_>,
        _sentence_pair: (&[Token], &[Token]),
        _permutations: Option<EngineIndex<'_>>,
    ) -> Vec<Prediction> {
        for prediction in predictions.iter_mut() {
            let source_len = prediction.source().char_len();
            let target_len = prediction.target().char_len();
            let score = if source_len == 0 || target_len == 0 {
                0.0
            } else {
                source_len.min(target_len) as f64 / source_len.max(target_len) as f64
            };
            prediction.set_score(scores::CHARACTER_LENGTH, score);
        }
        predictions
    }
}
