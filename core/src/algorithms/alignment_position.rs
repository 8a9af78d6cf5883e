//! Position-delta scoring.

use crate::algorithm::Algorithm;
use crate::engine_index::EngineIndex;
use crate::prediction::{scores, Prediction};
use crate::token::Token;

/// Scores the relative token position of a candidate's two n-grams.
///
/// The smaller the delta between the source and target token positions, the
/// higher the weight: literal, word-order-preserving translations put
/// corresponding phrases at similar positions. Positions are measured in
/// token units; empty n-grams read position 0. The weight is normalized to
/// [0, 1] by the longer sentence's length.
///
/// This is one signal among several. It assumes roughly literal translation
/// order and says nothing useful about heavily reordering language pairs.
pub struct AlignmentPosition;

impl Algorithm for AlignmentPosition {
    fn name(&self) -> &str {
        "alignment position"
    }

    fn execute(
        &self,
        mut predictions: Vec<Prediction>,
        _corpus: EngineIndex<'_>,
        _saved: EngineIndex<'_>,
        sentence_pair: (&[Token], &[Token]),
        _permutations: Option<EngineIndex<'_>>,
    ) -> Vec<Prediction> {
        let (source, target) = sentence_pair;
        let span = source.len().max(target.len()).max(1) as f64;

        for prediction in predictions.iter_mut() {
            let source_position = prediction.source().token_position() as f64;
            let target_position = prediction.target().token_position() as f64;
            let delta = (source_position - target_position).abs();
            let weight = (1.0 - delta / span).max(0.0);
            prediction.set_score(scores::ALIGNMENT_POSITION, weight);
        }
        predictions
    }
}
