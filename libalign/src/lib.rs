//! # libalign
//!
//! String-level alignment suggestions built on libalign-core: feed it a
//! corpus of translated sentence pairs (and, over time, the alignments a
//! user confirms), then ask for ranked alignment suggestions for new
//! sentence pairs.
//!
//! The core works on token sequences; this crate owns the tokenization so
//! callers can stay in string land.

pub use libalign_core::{
    scores, Algorithm, Alignment, Config, Engine, Ngram, Prediction, Suggestion, Token,
};

use libalign_core::text::tokenize;

/// A string-facing alignment suggester.
///
/// Wraps an [`Engine`] plus the reference tokenizer. All sentences pass
/// through the same deterministic tokenization, so corpus data and scoring
/// requests index consistently.
pub struct Aligner {
    engine: Engine,
}

impl Aligner {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Aligner {
            engine: Engine::new(config),
        }
    }

    /// Ingest a corpus of translated sentence pairs.
    ///
    /// # Panics
    ///
    /// Panics if the two sides have different lengths.
    pub fn add_corpus(&mut self, source: &[&str], target: &[&str]) {
        assert_eq!(
            source.len(),
            target.len(),
            "corpus sides must be parallel arrays"
        );
        let source_tokens: Vec<Vec<Token>> = source.iter().map(|s| tokenize(s)).collect();
        let target_tokens: Vec<Vec<Token>> = target.iter().map(|t| tokenize(t)).collect();
        self.engine.add_corpus(&source_tokens, &target_tokens);
    }

    /// Record a user-confirmed phrase alignment.
    pub fn confirm(&mut self, source_phrase: &str, target_phrase: &str) {
        let alignment = Alignment::new(
            Ngram::new(tokenize(source_phrase)),
            Ngram::new(tokenize(target_phrase)),
        );
        self.engine.add_saved_alignments(&[alignment]);
    }

    /// Suggest alignments for an unaligned sentence pair, best first.
    pub fn align(&self, source: &str, target: &str, max_suggestions: usize) -> Vec<Suggestion> {
        self.engine
            .predict(&tokenize(source), &tokenize(target), max_suggestions)
    }

    /// The underlying engine, for callers that need token-level access.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new()
    }
}
