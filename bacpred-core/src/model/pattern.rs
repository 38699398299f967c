use super::counts::OutcomeCounts;
use super::outcome::Outcome;
use super::predictor::Prediction;

use std::collections::HashMap;

/// Default number of prior outcomes used as context.
pub const DEFAULT_WINDOW: usize = 2;

/// Predicts the next outcome with a fixed-window pattern model.
///
/// Slides a window of `window` consecutive outcomes across the sequence
/// and records, for every position, the outcome that immediately
/// followed. The trailing `window` outcomes are then looked up in that
/// table.
///
/// # Results
/// - `InsufficientData` when the sequence is shorter than `window + 1`
///   (no complete window-plus-successor exists).
/// - `NoMatchingPattern` when the trailing window never occurred earlier
///   in the sequence. There is enough data, just no observation for this
///   exact context; the strategy does not fall back to a coarser window.
/// - Otherwise the most frequent successor of the matched window, ties
///   resolved in declaration order as in the Markov strategy.
pub fn predict(sequence: &[Outcome], window: usize) -> Prediction {
	if sequence.len() < window + 1 {
		return Prediction::InsufficientData { required: window + 1 };
	}

	// Keys borrow from the input sequence; the table lives only for
	// this call.
	let mut patterns: HashMap<&[Outcome], OutcomeCounts> = HashMap::new();
	for start in 0..sequence.len() - window {
		let key = &sequence[start..start + window];
		let next = sequence[start + window];
		patterns.entry(key).or_default().record(next);
	}

	let last_pattern = &sequence[sequence.len() - window..];
	match patterns.get(last_pattern) {
		Some(row) => Prediction::Outcome(row.argmax()),
		None => Prediction::NoMatchingPattern,
	}
}
