//! Suggestions: position-sorted groups of predictions forming one proposed
//! sentence alignment.

use crate::prediction::Prediction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered collection of predictions that together cover one proposed
/// alignment of a sentence pair.
///
/// Predictions are kept sorted ascending by the source n-gram's token
/// position after every insertion. The sort is stable, so predictions with
/// equal positions keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    predictions: Vec<Prediction>,
}

impl Suggestion {
    pub fn new() -> Self {
        Suggestion {
            predictions: Vec::new(),
        }
    }

    /// Sort a batch of predictions ascending by source token position.
    ///
    /// Same ordering rule the suggestion maintains internally, usable on a
    /// free batch before grouping into suggestions.
    pub fn sort_predictions(mut predictions: Vec<Prediction>) -> Vec<Prediction> {
        predictions.sort_by_key(|p| p.source().token_position());
        predictions
    }

    /// Insert a prediction, re-establishing the position ordering.
    pub fn add_prediction(&mut self, prediction: Prediction) {
        self.predictions.push(prediction);
        self.predictions.sort_by_key(|p| p.source().token_position());
    }

    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Arithmetic mean of the contained predictions' `"confidence"` scores.
    ///
    /// # Panics
    ///
    /// Panics if the suggestion holds no predictions. An empty suggestion has
    /// no meaningful confidence and silently returning 0 would let it rank.
    pub fn compound_confidence(&self) -> f64 {
        assert!(
            !self.predictions.is_empty(),
            "compound_confidence requires at least one prediction"
        );
        let total: f64 = self.predictions.iter().map(Prediction::confidence).sum();
        total / self.predictions.len() as f64
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.predictions.is_empty() {
            return write!(f, "(empty)");
        }
        write!(f, "{:.4}", self.compound_confidence())?;
        for p in &self.predictions {
            write!(f, " [{}]", p)?;
        }
        Ok(())
    }
}
