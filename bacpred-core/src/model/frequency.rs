use super::counts::OutcomeCounts;
use super::outcome::Outcome;
use super::predictor::Prediction;

use rand::Rng;
use rand::seq::IndexedRandom;

/// Default number of trailing results the majority vote considers.
pub const DEFAULT_LOOKBACK: usize = 10;

/// Predicts the next outcome from the recent majority.
///
/// Counts `Player` and `Banker` inside the last `min(lookback, len)`
/// results; a strict majority wins. Ties carry no weight in the
/// comparison.
///
/// When the vote is level (including an empty window) the strategy draws
/// uniformly from all three outcomes using the provided random source,
/// so a seeded generator makes the branch reproducible.
pub fn predict<R: Rng + ?Sized>(sequence: &[Outcome], lookback: usize, rng: &mut R) -> Prediction {
	let start = sequence.len().saturating_sub(lookback);
	let mut window = OutcomeCounts::new();
	for &outcome in &sequence[start..] {
		window.record(outcome);
	}

	let player = window.get(Outcome::Player);
	let banker = window.get(Outcome::Banker);
	if player > banker {
		Prediction::Outcome(Outcome::Player)
	} else if banker > player {
		Prediction::Outcome(Outcome::Banker)
	} else {
		// Level vote, no signal: uniform draw. The fallback should not
		// happen (ALL is never empty), but kept for safety.
		let pick = Outcome::ALL.choose(rng).copied().unwrap_or(Outcome::Player);
		Prediction::Outcome(pick)
	}
}
