use super::outcome::Outcome;

/// Occurrence counts per outcome, indexed by declaration order.
///
/// Conceptually this is one row of a transition or tally table: how many
/// times each outcome was observed in some context (after a given
/// outcome, after a given window, inside a trailing window).
///
/// ## Responsibilities
/// - Accumulate occurrences during a single table build
/// - Resolve the most frequent outcome deterministically
///
/// ## Invariants
/// - Counts only grow; `record` is the single mutation point
/// - `argmax` ties resolve to the outcome declared first in `Outcome::ALL`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct OutcomeCounts {
	counts: [usize; 3],
}

impl OutcomeCounts {
	/// Creates an all-zero row.
	pub(crate) fn new() -> Self {
		Self { counts: [0; 3] }
	}

	/// Records one occurrence of `outcome`.
	pub(crate) fn record(&mut self, outcome: Outcome) {
		self.counts[outcome.index()] += 1;
	}

	/// Count recorded for a single outcome.
	pub(crate) fn get(&self, outcome: Outcome) -> usize {
		self.counts[outcome.index()]
	}

	/// Sum of all recorded counts.
	pub(crate) fn total(&self) -> usize {
		self.counts.iter().sum()
	}

	/// Outcome holding the highest count.
	///
	/// Candidates are scanned in declaration order and the first maximum
	/// wins, so an all-zero row resolves to `Player` and equal counts
	/// never depend on map iteration order.
	pub(crate) fn argmax(&self) -> Outcome {
		let mut best = Outcome::Player;
		for outcome in Outcome::ALL {
			if self.get(outcome) > self.get(best) {
				best = outcome;
			}
		}
		best
	}
}
