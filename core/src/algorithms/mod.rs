//! Built-in scoring algorithms.
//!
//! Each writes one named score in [0, 1] per prediction (see
//! [`crate::prediction::scores`]) and leaves prediction identity untouched.

mod alignment_frequency;
mod alignment_position;
mod character_length;
mod uniqueness;

pub use alignment_frequency::AlignmentFrequency;
pub use alignment_position::AlignmentPosition;
pub use character_length::CharacterLength;
pub use uniqueness::Uniqueness;

use crate::alignment::Alignment;
use crate::engine_index::EngineIndex;

/// Conditional-probability-style ratio of an alignment within an index:
/// the mean of P(pair | source n-gram) and P(pair | target n-gram).
///
/// 0 whenever the pair (or either denominator) has never been counted, so
/// unseen data reads as "no evidence" rather than an error.
pub(crate) fn occurrence_ratio(index: EngineIndex<'_>, alignment: &Alignment) -> f64 {
    let pair = index.alignment_frequency(alignment) as f64;
    if pair == 0.0 {
        return 0.0;
    }
    let source = index.source_ngram_frequency(alignment.source()) as f64;
    let target = index.target_ngram_frequency(alignment.target()) as f64;
    let by_source = if source > 0.0 { pair / source } else { 0.0 };
    let by_target = if target > 0.0 { pair / target } else { 0.0 };
    (by_source + by_target) / 2.0
}
