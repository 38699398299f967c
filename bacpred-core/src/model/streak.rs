use super::counts::OutcomeCounts;
use super::outcome::Outcome;

use serde::{Deserialize, Serialize};

/// A maximal run of identical consecutive outcomes.
///
/// # Invariants
/// - `length` is always >= 1
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Streak {
	pub outcome: Outcome,
	pub length: usize,
}

/// Run-length encodes a sequence into its streaks.
///
/// Scans left to right, growing a run while the symbol repeats and
/// closing it on any change or at the end of the sequence.
///
/// # Notes
/// - Concatenating each streak's outcome repeated `length` times
///   reconstructs the input exactly; the lengths sum to the input length.
/// - An empty sequence yields an empty list, not an error.
pub fn streaks(sequence: &[Outcome]) -> Vec<Streak> {
	let mut result = Vec::new();
	let Some((&first, rest)) = sequence.split_first() else {
		return result;
	};

	let mut current = first;
	let mut length = 1;
	for &outcome in rest {
		if outcome == current {
			length += 1;
		} else {
			result.push(Streak { outcome: current, length });
			current = outcome;
			length = 1;
		}
	}
	result.push(Streak { outcome: current, length });
	result
}

/// Per-outcome totals over the whole sequence, in declaration order.
///
/// Feeds host-side frequency charts; the order is fixed so hosts can
/// rely on it.
pub fn tally(sequence: &[Outcome]) -> [(Outcome, usize); 3] {
	let mut totals = OutcomeCounts::new();
	for &outcome in sequence {
		totals.record(outcome);
	}
	Outcome::ALL.map(|outcome| (outcome, totals.get(outcome)))
}
