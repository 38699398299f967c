use super::counts::OutcomeCounts;
use super::outcome::Outcome;
use super::predictor::Prediction;

/// Minimum sequence length: one adjacent pair.
pub const MIN_RESULTS: usize = 2;

/// Predicts the next outcome with a first-order Markov model.
///
/// Counts every adjacent pair `(sequence[i], sequence[i+1])` over the
/// whole sequence into a 3x3 transition table, then reads the row of the
/// final outcome and returns its most frequent successor.
///
/// # Notes
/// - Fully deterministic: ties resolve in declaration order
///   (`Player`, `Banker`, `Tie`), and an all-zero row (the final outcome
///   was never followed by anything) resolves to `Player`.
/// - Sequences shorter than two elements hold no pair, so the result is
///   `InsufficientData`.
pub fn predict(sequence: &[Outcome]) -> Prediction {
	if sequence.len() < MIN_RESULTS {
		return Prediction::InsufficientData { required: MIN_RESULTS };
	}

	// All three rows are always present, possibly all-zero.
	let mut transitions = [OutcomeCounts::new(); 3];
	for pair in sequence.windows(2) {
		transitions[pair[0].index()].record(pair[1]);
	}

	let last = sequence[sequence.len() - 1];
	Prediction::Outcome(transitions[last.index()].argmax())
}
