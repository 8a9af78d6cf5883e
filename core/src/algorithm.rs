//! The scoring contract every algorithm in the pipeline implements.

use crate::engine_index::EngineIndex;
use crate::prediction::Prediction;
use crate::token::Token;

/// A pure scoring pass over a batch of predictions.
///
/// An algorithm reads the supplied index views and the raw unaligned
/// sentence pair, writes one named score onto each prediction, and returns
/// the batch. It must return exactly as many predictions as it received (the
/// engine checks and panics otherwise) and must never mutate an index.
///
/// Algorithms are order-independent unless one documents that it reads a
/// score written by an earlier pass; the engine runs the pipeline strictly
/// in its configured sequence either way.
pub trait Algorithm {
    /// Human-readable algorithm name, used in diagnostics.
    fn name(&self) -> &str;

    /// Score a batch of predictions.
    ///
    /// `corpus` and `saved` are views of the long-lived indexes;
    /// `permutations` views the candidate space of this request when the
    /// caller populated one. `sentence_pair` is the raw (source, target)
    /// token pair being aligned.
    fn execute(
        &self,
        predictions: Vec<Prediction>,
        corpus: EngineIndex<'_>,
        saved: EngineIndex<'_>,
        sentence_pair: (&[Token], &[Token]),
        permutations: Option<EngineIndex<'_>>,
    ) -> Vec<Prediction>;
}
