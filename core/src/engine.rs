//! Alignment prediction engine.
//!
//! Owns the long-lived indexes, runs the algorithm pipeline over candidate
//! predictions and assembles ranked suggestions. Three sequential phases:
//! ingest (corpus and saved alignments accumulate into the long-lived
//! indexes), candidate generation (a fresh permutation index per request),
//! and scoring (the pipeline plus confidence interpolation). Indexes are
//! only mutated during ingest; scoring reads them shared.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::{debug, trace};

use crate::algorithm::Algorithm;
use crate::algorithms::{AlignmentFrequency, AlignmentPosition, CharacterLength, Uniqueness};
use crate::alignment::Alignment;
use crate::corpus::{CorpusIndex, SavedAlignmentsIndex};
use crate::ngram::KEY_SEPARATOR;
use crate::parser;
use crate::permutation::PermutationIndex;
use crate::prediction::{scores, Prediction};
use crate::suggestion::Suggestion;
use crate::token::Token;
use crate::Config;

/// Orchestrates indexing and scoring for one alignment model.
///
/// The engine holds no per-request state: `predict` borrows the long-lived
/// indexes read-only, so many scoring calls may follow one another freely.
/// Callers that need concurrent ingestion and scoring must serialize access
/// externally.
pub struct Engine {
    config: Config,
    corpus: CorpusIndex,
    saved_alignments: SavedAlignmentsIndex,
    algorithms: Vec<Box<dyn Algorithm>>,
    cache: RefCell<LruCache<String, Vec<Suggestion>>>,
    cache_hits: RefCell<usize>,
    cache_misses: RefCell<usize>,
}

impl Engine {
    /// Create an engine with the default scoring pipeline: alignment
    /// position, alignment frequency, uniqueness, character length.
    pub fn new(config: Config) -> Self {
        let algorithms: Vec<Box<dyn Algorithm>> = vec![
            Box::new(AlignmentPosition),
            Box::new(AlignmentFrequency::new(config.saved_boost as f64)),
            Box::new(Uniqueness),
            Box::new(CharacterLength),
        ];
        Self::with_algorithms(config, algorithms)
    }

    /// Create an engine with a custom pipeline. Algorithms run in the given
    /// order; the engine still interpolates the built-in score names into
    /// the compound confidence afterwards.
    pub fn with_algorithms(config: Config, algorithms: Vec<Box<dyn Algorithm>>) -> Self {
        let cache_capacity = NonZeroUsize::new(config.max_cache_size)
            .unwrap_or_else(|| NonZeroUsize::new(1000).unwrap());
        Self {
            config,
            corpus: CorpusIndex::new(),
            saved_alignments: SavedAlignmentsIndex::new(),
            algorithms,
            cache: RefCell::new(LruCache::new(cache_capacity)),
            cache_hits: RefCell::new(0),
            cache_misses: RefCell::new(0),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn corpus_index(&self) -> &CorpusIndex {
        &self.corpus
    }

    pub fn saved_alignments_index(&self) -> &SavedAlignmentsIndex {
        &self.saved_alignments
    }

    /// Ingest a corpus of sentence pairs given as parallel arrays.
    ///
    /// Accumulator semantics: ingesting the same pair twice doubles its
    /// counts. Clears the suggestion cache.
    ///
    /// # Panics
    ///
    /// Panics if the two sides have different lengths.
    pub fn add_corpus(&mut self, source: &[Vec<Token>], target: &[Vec<Token>]) {
        assert_eq!(
            source.len(),
            target.len(),
            "corpus sides must be parallel arrays"
        );
        for (source_sentence, target_sentence) in source.iter().zip(target) {
            self.corpus.add_sentence_pair(
                source_sentence,
                target_sentence,
                self.config.max_ngram_length,
                self.config.include_null_alignments,
            );
        }
        debug!(
            pairs = source.len(),
            total = self.corpus.sentence_pairs(),
            "ingested corpus sentence pairs"
        );
        self.clear_cache();
    }

    /// Ingest user-confirmed alignments. Clears the suggestion cache.
    pub fn add_saved_alignments(&mut self, alignments: &[Alignment]) {
        self.saved_alignments.add_alignments(alignments);
        debug!(count = alignments.len(), "ingested saved alignments");
        self.clear_cache();
    }

    /// Predict alignments for an unaligned sentence pair, generating the
    /// candidate space internally.
    ///
    /// Returns up to `max_suggestions` suggestions sorted by compound
    /// confidence descending. Results are memoized per sentence pair until
    /// the next ingest.
    pub fn predict(
        &self,
        source: &[Token],
        target: &[Token],
        max_suggestions: usize,
    ) -> Vec<Suggestion> {
        let cache_key = Self::request_key(source, target, max_suggestions);
        if let Some(cached) = self.cache.borrow_mut().get(&cache_key) {
            *self.cache_hits.borrow_mut() += 1;
            return cached.clone();
        }
        *self.cache_misses.borrow_mut() += 1;

        let candidates = parser::alignment_permutations(
            source,
            target,
            self.config.max_ngram_length,
            self.config.include_null_alignments,
        );
        let suggestions =
            self.predict_with_candidates(source, target, candidates, max_suggestions);
        self.cache.borrow_mut().put(cache_key, suggestions.clone());
        suggestions
    }

    /// Predict alignments for an unaligned sentence pair against a
    /// caller-supplied candidate set. Not memoized: the caller controls the
    /// candidate space, so equal sentences need not mean equal results.
    pub fn predict_with_candidates(
        &self,
        source: &[Token],
        target: &[Token],
        candidates: Vec<Alignment>,
        max_suggestions: usize,
    ) -> Vec<Suggestion> {
        let mut permutations = PermutationIndex::new();
        permutations.add_alignments(&candidates);

        let predictions: Vec<Prediction> = candidates.into_iter().map(Prediction::new).collect();
        let predictions = self.run_pipeline(predictions, source, target, &permutations);
        self.assemble_suggestions(predictions, source, max_suggestions)
    }

    /// Run the algorithm pipeline in order, then interpolate the compound
    /// confidence.
    ///
    /// # Panics
    ///
    /// Panics if an algorithm returns a different number of predictions
    /// than it received.
    fn run_pipeline(
        &self,
        mut predictions: Vec<Prediction>,
        source: &[Token],
        target: &[Token],
        permutations: &PermutationIndex,
    ) -> Vec<Prediction> {
        let corpus = self.corpus.view();
        let saved = self.saved_alignments.view();

        for algorithm in &self.algorithms {
            let expected = predictions.len();
            trace!(
                algorithm = algorithm.name(),
                predictions = expected,
                "running scoring pass"
            );
            predictions = algorithm.execute(
                predictions,
                corpus,
                saved,
                (source, target),
                Some(permutations.view()),
            );
            assert_eq!(
                predictions.len(),
                expected,
                "algorithm '{}' changed the number of predictions",
                algorithm.name()
            );
        }

        let [position, frequency, uniqueness, character] = self.normalized_weights();
        for prediction in predictions.iter_mut() {
            let mut confidence = position
                * prediction.score(scores::ALIGNMENT_POSITION).unwrap_or(0.0)
                + frequency
                    * prediction
                        .score(scores::ALIGNMENT_FREQUENCY)
                        .unwrap_or(0.0)
                + uniqueness * prediction.score(scores::UNIQUENESS).unwrap_or(0.0)
                + character * prediction.score(scores::CHARACTER_LENGTH).unwrap_or(0.0);
            if self.saved_alignments.contains(prediction.alignment()) {
                confidence += self.config.saved_alignment_bonus;
            }
            prediction.set_score(scores::CONFIDENCE, confidence);
        }
        predictions
    }

    /// Interpolation weights for the compound confidence, normalized to sum
    /// to 1 so individual settings need not.
    fn normalized_weights(&self) -> [f64; 4] {
        let mut weights = [
            self.config.alignment_position_weight,
            self.config.alignment_frequency_weight,
            self.config.uniqueness_weight,
            self.config.character_length_weight,
        ];
        let sum: f32 = weights.iter().sum();
        if sum > 0.0 {
            for w in weights.iter_mut() {
                *w /= sum;
            }
        }
        weights.map(f64::from)
    }

    /// Group scored predictions into up to `max_suggestions` non-overlapping
    /// covers of the source sentence, ranked by compound confidence.
    ///
    /// Cover `i` seeds from the `i`-th ranked prediction and fills greedily
    /// by rank, so the best cover comes first and later covers explore the
    /// next-best head choices. Duplicate covers collapse.
    fn assemble_suggestions(
        &self,
        predictions: Vec<Prediction>,
        source: &[Token],
        max_suggestions: usize,
    ) -> Vec<Suggestion> {
        let mut ranked = predictions;
        ranked.sort_by(|a, b| {
            b.confidence()
                .partial_cmp(&a.confidence())
                .unwrap_or(Ordering::Equal)
        });

        let mut suggestions: Vec<Suggestion> = Vec::new();
        let mut seen_covers: HashSet<String> = HashSet::new();
        for seed in 0..ranked.len() {
            if suggestions.len() >= max_suggestions {
                break;
            }
            if let Some(suggestion) = Self::greedy_cover(&ranked, seed, source.len()) {
                if seen_covers.insert(Self::cover_key(&suggestion)) {
                    suggestions.push(suggestion);
                }
            }
        }

        suggestions.sort_by(|a, b| {
            b.compound_confidence()
                .partial_cmp(&a.compound_confidence())
                .unwrap_or(Ordering::Equal)
        });
        suggestions
    }

    /// Build one suggestion starting from `ranked[seed]`, then taking
    /// predictions in rank order whenever their source span is uncovered and
    /// their target span unused. Returns `None` if not even the seed fits.
    fn greedy_cover(ranked: &[Prediction], seed: usize, source_len: usize) -> Option<Suggestion> {
        let mut covered: HashSet<usize> = HashSet::new();
        let mut used_target: HashSet<usize> = HashSet::new();
        let mut suggestion = Suggestion::new();

        if Self::try_take(&ranked[seed], &mut covered, &mut used_target) {
            suggestion.add_prediction(ranked[seed].clone());
        }
        for (i, prediction) in ranked.iter().enumerate() {
            if covered.len() >= source_len {
                break;
            }
            if i == seed {
                continue;
            }
            if Self::try_take(prediction, &mut covered, &mut used_target) {
                suggestion.add_prediction(prediction.clone());
            }
        }

        if suggestion.is_empty() {
            None
        } else {
            Some(suggestion)
        }
    }

    /// Claim a prediction's spans if they are still free. Predictions with
    /// an empty source span never participate in a cover.
    fn try_take(
        prediction: &Prediction,
        covered: &mut HashSet<usize>,
        used_target: &mut HashSet<usize>,
    ) -> bool {
        let source_tokens = prediction.source().tokens();
        if source_tokens.is_empty() {
            return false;
        }
        if source_tokens
            .iter()
            .any(|t| covered.contains(&t.position()))
        {
            return false;
        }
        if prediction
            .target()
            .tokens()
            .iter()
            .any(|t| used_target.contains(&t.position()))
        {
            return false;
        }
        covered.extend(source_tokens.iter().map(Token::position));
        used_target.extend(prediction.target().tokens().iter().map(Token::position));
        true
    }

    fn cover_key(suggestion: &Suggestion) -> String {
        let keys: Vec<String> = suggestion
            .predictions()
            .iter()
            .map(|p| p.alignment().key())
            .collect();
        keys.join("\u{1D}")
    }

    fn request_key(source: &[Token], target: &[Token], max_suggestions: usize) -> String {
        let mut key = String::new();
        for token in source {
            key.push_str(token.text());
            key.push(KEY_SEPARATOR);
        }
        key.push('\u{1E}');
        for token in target {
            key.push_str(token.text());
            key.push(KEY_SEPARATOR);
        }
        key.push('\u{1E}');
        key.push_str(&max_suggestions.to_string());
        key
    }

    /// Cache statistics as a (hits, misses) tuple.
    pub fn cache_stats(&self) -> (usize, usize) {
        (*self.cache_hits.borrow(), *self.cache_misses.borrow())
    }

    /// Cache hit rate as a percentage, `None` before any lookup.
    pub fn cache_hit_rate(&self) -> Option<f32> {
        let hits = *self.cache_hits.borrow();
        let misses = *self.cache_misses.borrow();
        let total = hits + misses;
        if total == 0 {
            None
        } else {
            Some((hits as f32 / total as f32) * 100.0)
        }
    }

    /// Number of memoized suggestion lists.
    pub fn cache_size(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache.borrow().cap().get()
    }

    /// Drop all memoized results and reset the statistics.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
        *self.cache_hits.borrow_mut() = 0;
        *self.cache_misses.borrow_mut() = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_index::EngineIndex;
    use crate::text::tokenize;

    fn corpus(pairs: &[(&str, &str)]) -> (Vec<Vec<Token>>, Vec<Vec<Token>>) {
        let source = pairs.iter().map(|(s, _)| tokenize(s)).collect();
        let target = pairs.iter().map(|(_, t)| tokenize(t)).collect();
        (source, target)
    }

    #[test]
    fn predict_returns_ranked_non_overlapping_covers() {
        let mut engine = Engine::new(Config::default());
        let (source, target) = corpus(&[("the cat", "le chat"), ("a dog", "un chien")]);
        engine.add_corpus(&source, &target);

        let suggestions = engine.predict(&tokenize("the dog"), &tokenize("le chien"), 3);
        assert!(!suggestions.is_empty());

        let best = &suggestions[0];
        // The top suggestion covers both source tokens without overlap.
        let mut covered: Vec<usize> = best
            .predictions()
            .iter()
            .flat_map(|p| p.source().tokens().iter().map(Token::position))
            .collect();
        covered.sort_unstable();
        assert_eq!(covered, vec![0, 1]);

        // Ranking is by compound confidence, descending.
        for pair in suggestions.windows(2) {
            assert!(pair[0].compound_confidence() >= pair[1].compound_confidence());
        }
    }

    #[test]
    fn ingest_clears_the_suggestion_cache() {
        let mut engine = Engine::new(Config::default());
        let (source, target) = corpus(&[("the cat", "le chat")]);
        engine.add_corpus(&source, &target);

        let unaligned_source = tokenize("the cat");
        let unaligned_target = tokenize("le chat");
        engine.predict(&unaligned_source, &unaligned_target, 1);
        engine.predict(&unaligned_source, &unaligned_target, 1);
        assert_eq!(engine.cache_stats(), (1, 1));

        engine.add_corpus(&source, &target);
        assert_eq!(engine.cache_stats(), (0, 0));
        assert_eq!(engine.cache_size(), 0);
    }

    #[test]
    fn saved_alignment_bonus_lifts_confirmed_candidates() {
        let mut engine = Engine::new(Config::default());
        let (source, target) = corpus(&[("the cat", "le chat")]);
        engine.add_corpus(&source, &target);

        let confirmed = Alignment::new(
            crate::ngram::Ngram::new(tokenize("the")),
            crate::ngram::Ngram::new(tokenize("chat")),
        );
        engine.add_saved_alignments(&[confirmed.clone()]);

        let suggestions = engine.predict(&tokenize("the"), &tokenize("le chat"), 1);
        let best = &suggestions[0];
        assert_eq!(best.predictions()[0].alignment().key(), confirmed.key());
    }

    #[test]
    #[should_panic(expected = "parallel arrays")]
    fn mismatched_corpus_sides_fail_fast() {
        let mut engine = Engine::new(Config::default());
        engine.add_corpus(&[tokenize("the cat")], &[]);
    }

    #[test]
    #[should_panic(expected = "changed the number of predictions")]
    fn cardinality_violations_fail_fast() {
        struct Truncating;
        impl Algorithm for Truncating {
            fn name(&self) -> &str {
                "truncating"
            }
            fn execute(
                &self,
                mut predictions: Vec<Prediction>,
                _corpus: EngineIndex<'_>,
                _saved: EngineIndex<'_>,
                _sentence_pair: (&[Token], &[Token]),
                _permutations: Option<EngineIndex<'_>>,
            ) -> Vec<Prediction> {
                predictions.pop();
                predictions
            }
        }

        let engine = Engine::with_algorithms(Config::default(), vec![Box::new(Truncating)]);
        engine.predict(&tokenize("the dog"), &tokenize("le chien"), 1);
    }
}
