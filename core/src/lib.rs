//! libalign-core
//!
//! Frequency indexing and scoring core for predicting token and phrase
//! alignments between a source and a target sentence, given a corpus of
//! previously observed sentence pairs and user-confirmed alignments.
//!
//! Public API:
//! - `Token` / `Ngram` / `Alignment` - the data model
//! - `NgramIndex` / `AlignmentIndex` - append-only frequency accumulators
//! - `CorpusIndex` / `SavedAlignmentsIndex` / `PermutationIndex` - index bundles
//! - `Algorithm` - the pluggable scoring contract, with built-ins in `algorithms`
//! - `Prediction` / `Suggestion` - scored candidates and ranked covers
//! - `Engine` - ingestion, pipeline orchestration and suggestion assembly
//! - `Config` - scoring weights and feature flags

use serde::{Deserialize, Serialize};

pub mod token;
pub use token::Token;

pub mod ngram;
pub use ngram::Ngram;

pub mod alignment;
pub use alignment::Alignment;

pub mod prediction;
pub use prediction::{scores, Prediction};

pub mod suggestion;
pub use suggestion::Suggestion;

pub mod frequency;
pub use frequency::{AlignmentIndex, NgramIndex};

pub mod permutation;
pub use permutation::PermutationIndex;

pub mod corpus;
pub use corpus::{CorpusIndex, SavedAlignmentsIndex};

pub mod engine_index;
pub use engine_index::EngineIndex;

pub mod algorithm;
pub use algorithm::Algorithm;

pub mod algorithms;

pub mod parser;
pub mod text;

pub mod engine;
pub use engine::Engine;

/// Configuration for candidate generation and scoring.
///
/// The four `*_weight` fields are interpolation weights for the compound
/// confidence; they are normalized at scoring time, so they need not sum
/// to 1.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Longest n-gram (in tokens) enumerated on either side of a candidate.
    pub max_ngram_length: usize,

    /// Weight of the position-delta score.
    pub alignment_position_weight: f32,
    /// Weight of the corpus/saved frequency score.
    pub alignment_frequency_weight: f32,
    /// Weight of the permutation-space uniqueness score.
    pub uniqueness_weight: f32,
    /// Weight of the character-length similarity score.
    pub character_length_weight: f32,

    /// Trust multiplier for user-confirmed alignments inside the frequency
    /// score. 1.0 treats saved data like corpus data; larger trusts it more.
    pub saved_boost: f32,
    /// Flat confidence bonus for a candidate whose exact alignment was
    /// confirmed by the user.
    pub saved_alignment_bonus: f64,

    /// Emit source -> empty null alignments during candidate generation so
    /// untranslated source spans can still be covered.
    pub include_null_alignments: bool,

    /// Maximum number of entries in the sentence-pair -> suggestions cache.
    pub max_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_ngram_length: 3,
            // Frequency evidence dominates; position and uniqueness refine;
            // character length is a weak tie-breaker.
            alignment_position_weight: 0.25,
            alignment_frequency_weight: 0.45,
            uniqueness_weight: 0.2,
            character_length_weight: 0.1,
            saved_boost: 2.0,
            saved_alignment_bonus: 1.0,
            include_null_alignments: true,
            max_cache_size: 1000,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}
