//! Predictions: alignments annotated with named scores.

use crate::alignment::Alignment;
use crate::ngram::Ngram;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Well-known score names written by the built-in algorithms and the engine.
pub mod scores {
    /// Compound score interpolated by the engine after the pipeline runs.
    pub const CONFIDENCE: &str = "confidence";
    /// Written by [`crate::algorithms::AlignmentPosition`].
    pub const ALIGNMENT_POSITION: &str = "alignmentPosition";
    /// Written by [`crate::algorithms::AlignmentFrequency`].
    pub const ALIGNMENT_FREQUENCY: &str = "alignmentFrequency";
    /// Written by [`crate::algorithms::Uniqueness`].
    pub const UNIQUENESS: &str = "uniqueness";
    /// Written by [`crate::algorithms::CharacterLength`].
    pub const CHARACTER_LENGTH: &str = "characterLength";
}

/// One candidate alignment plus a mapping from score name to value.
///
/// The alignment is immutable once the prediction is constructed; scores are
/// added or overwritten by algorithms as the pipeline runs. A `BTreeMap`
/// keeps score iteration order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    alignment: Alignment,
    scores: BTreeMap<String, f64>,
}

impl Prediction {
    pub fn new(alignment: Alignment) -> Self {
        Prediction {
            alignment,
            scores: BTreeMap::new(),
        }
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    /// The source side of the wrapped alignment.
    pub fn source(&self) -> &Ngram {
        self.alignment.source()
    }

    /// The target side of the wrapped alignment.
    pub fn target(&self) -> &Ngram {
        self.alignment.target()
    }

    /// Add or overwrite a named score.
    pub fn set_score<N: Into<String>>(&mut self, name: N, value: f64) {
        self.scores.insert(name.into(), value);
    }

    /// Read a named score, `None` if no algorithm has written it.
    pub fn score(&self, name: &str) -> Option<f64> {
        self.scores.get(name).copied()
    }

    /// The compound `"confidence"` score, 0.0 until the engine writes it.
    pub fn confidence(&self) -> f64 {
        self.score(scores::CONFIDENCE).unwrap_or(0.0)
    }

    /// All scores in name order.
    pub fn scores(&self) -> &BTreeMap<String, f64> {
        &self.scores
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} {}", self.confidence(), self.alignment)
    }
}
