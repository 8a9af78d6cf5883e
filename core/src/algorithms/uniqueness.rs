//! Permutation-space exclusivity scoring.

use crate::algorithm::Algorithm;
use crate::algorithms::occurrence_ratio;
use crate::engine_index::EngineIndex;
use crate::prediction::{scores, Prediction};
use crate::token::Token;

/// Scores how exclusively a candidate's n-grams pair with each other across
/// the permutation space of the current sentence pair.
///
/// An n-gram that recurs in many competing candidates dilutes each of them;
/// a pair that accounts for most of its sides' occurrences is more likely to
/// reflect real structure than enumeration noise. Writes 0 when the request
/// carries no permutation index.
pub struct Uniqueness;

impl Algorithm for Uniqueness {
    fn name(&self) -> &str {
        "uniqueness"
    }

    fn execute(
        &self,
        mut predictions: Vec<Prediction>,
        _corpus: EngineIndex<'_>,
        _saved: EngineIndex<'_>,
        _sentence_pair: (&[Token], &[Token]),
        permutations: Option<EngineIndex<'_>>,
    ) -> Vec<Prediction> {
        for prediction in predictions.iter_mut() {
            let score = match permutations {
                Some(index) => occurrence_ratio(index, prediction.alignment()),
                None => 0.0,
            };
            prediction.set_score(scores::UNIQUENESS, score);
        }
        predictions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Alignment;
    use crate::corpus::{CorpusIndex, SavedAlignmentsIndex};
    use crate::ngram::Ngram;
    use crate::permutation::PermutationIndex;
    use crate::text::tokenize;

    fn alignment(source: &str, target: &str) -> Alignment {
        Alignment::new(Ngram::new(tokenize(source)), Ngram::new(tokenize(target)))
    }

    #[test]
    fn recurring_pairs_score_higher_than_diluted_ones() {
        // "a -> x" recurs across permutations; "b" pairs with two targets.
        let mut permutations = PermutationIndex::new();
        permutations.add_alignments(&[
            alignment("a", "x"),
            alignment("a", "x"),
            alignment("b", "y"),
            alignment("b", "z"),
        ]);

        let corpus = CorpusIndex::new();
        let saved = SavedAlignmentsIndex::new();
        let source = tokenize("a b");
        let target = tokenize("x y z");
        let scored = Uniqueness.execute(
            vec![
                Prediction::new(alignment("a", "x")),
                Prediction::new(alignment("b", "y")),
            ],
            corpus.view(),
            saved.view(),
            (&source, &target),
            Some(permutations.view()),
        );

        let exclusive = scored[0].score(scores::UNIQUENESS).unwrap();
        let diluted = scored[1].score(scores::UNIQUENESS).unwrap();
        assert!((exclusive - 1.0).abs() < 1e-12);
        assert!(diluted < exclusive);
        assert!(diluted > 0.0);
    }

    #[test]
    fn missing_permutation_index_scores_zero() {
        let corpus = CorpusIndex::new();
        let saved = SavedAlignmentsIndex::new();
        let source = tokenize("a");
        let target = tokenize("x");
        let scored = Uniqueness.execute(
            vec![Prediction::new(alignment("a", "x"))],
            corpus.view(),
            saved.view(),
            (&source, &target),
            None,
        );
        assert_eq!(scored[0].score(scores::UNIQUENESS), Some(0.0));
    }
}
