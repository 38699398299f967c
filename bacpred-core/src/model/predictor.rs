use super::outcome::Outcome;
use super::{frequency, markov, pattern, stochastic};

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Result of a single prediction call.
///
/// Either a concrete outcome or a status, never both. Statuses are
/// ordinary results of the computation, not errors: a short sequence or
/// an unseen pattern leaves nothing to predict, and the engine says so
/// instead of guessing or failing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prediction {
	/// Concrete next-outcome prediction.
	Outcome(Outcome),
	/// The sequence is shorter than the strategy's minimum.
	InsufficientData { required: usize },
	/// Enough data, but the trailing window was never observed.
	NoMatchingPattern,
}

impl std::fmt::Display for Prediction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Prediction::Outcome(outcome) => write!(f, "{}", outcome),
			Prediction::InsufficientData { required } => {
				write!(f, "at least {} results are required", required)
			}
			Prediction::NoMatchingPattern => write!(f, "no matching pattern"),
		}
	}
}

/// Selector for one of the prediction strategies.
///
/// The dispatcher invokes exactly the selected strategy; there is no
/// fallback between strategies.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
	Frequency,
	Markov,
	Pattern,
	Stochastic,
}

impl Strategy {
	/// All strategies, in the order hosts usually list them.
	pub const ALL: [Strategy; 4] =
		[Strategy::Frequency, Strategy::Markov, Strategy::Pattern, Strategy::Stochastic];
}

impl FromStr for Strategy {
	type Err = String;

	/// Parses a case-insensitive strategy name.
	///
	/// # Errors
	/// An unknown name is a caller configuration error and is rejected
	/// instead of being defaulted.
	fn from_str(name: &str) -> Result<Self, Self::Err> {
		match name.trim().to_lowercase().as_str() {
			"frequency" => Ok(Strategy::Frequency),
			"markov" => Ok(Strategy::Markov),
			"pattern" => Ok(Strategy::Pattern),
			"stochastic" => Ok(Strategy::Stochastic),
			_ => Err(format!("Unknown strategy: {}", name)),
		}
	}
}

impl std::fmt::Display for Strategy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Strategy::Frequency => "frequency",
			Strategy::Markov => "markov",
			Strategy::Pattern => "pattern",
			Strategy::Stochastic => "stochastic",
		};
		write!(f, "{}", name)
	}
}

/// Tunable prediction settings.
///
/// # Responsibilities
/// - Track the frequency lookback and the pattern window size
/// - Keep both strictly positive through validated setters
///
/// # Invariants
/// - `lookback >= 1` and `window >= 1`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PredictorConfig {
	/// Trailing results the frequency vote considers.
	lookback: usize,

	/// Prior outcomes the pattern model uses as context.
	window: usize,
}

impl Default for PredictorConfig {
	fn default() -> Self {
		Self { lookback: frequency::DEFAULT_LOOKBACK, window: pattern::DEFAULT_WINDOW }
	}
}

impl PredictorConfig {
	/// Returns the current frequency lookback.
	pub fn lookback(&self) -> usize {
		self.lookback
	}

	/// Returns the current pattern window size.
	pub fn window(&self) -> usize {
		self.window
	}

	/// Sets the frequency lookback.
	///
	/// # Errors
	/// Returns an error if `lookback` is zero.
	pub fn set_lookback(&mut self, lookback: usize) -> Result<(), String> {
		if lookback == 0 {
			return Err("Lookback must be at least 1".to_owned());
		}
		self.lookback = lookback;
		Ok(())
	}

	/// Sets the pattern window size.
	///
	/// # Errors
	/// Returns an error if `window` is zero.
	pub fn set_window(&mut self, window: usize) -> Result<(), String> {
		if window == 0 {
			return Err("Window must be at least 1".to_owned());
		}
		self.window = window;
		Ok(())
	}
}

/// Runs the selected strategy over the sequence.
///
/// Invokes exactly the strategy named by `strategy` and returns its
/// result unchanged; statuses are never converted into fallback calls.
///
/// The random source is only consulted by the frequency tie-break and
/// the stochastic placeholder; the Markov and pattern strategies are
/// fully deterministic.
pub fn predict<R: Rng + ?Sized>(
	sequence: &[Outcome],
	strategy: Strategy,
	config: &PredictorConfig,
	rng: &mut R,
) -> Prediction {
	log::debug!("running {} over {} results", strategy, sequence.len());
	match strategy {
		Strategy::Frequency => frequency::predict(sequence, config.lookback(), rng),
		Strategy::Markov => markov::predict(sequence),
		Strategy::Pattern => pattern::predict(sequence, config.window()),
		Strategy::Stochastic => stochastic::predict(sequence, rng),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::outcome::parse_sequence;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn strategy_names_parse_case_insensitively() {
		assert_eq!("markov".parse::<Strategy>(), Ok(Strategy::Markov));
		assert_eq!("Markov".parse::<Strategy>(), Ok(Strategy::Markov));
		assert_eq!(" FREQUENCY ".parse::<Strategy>(), Ok(Strategy::Frequency));
		assert_eq!("pattern".parse::<Strategy>(), Ok(Strategy::Pattern));
		assert_eq!("stochastic".parse::<Strategy>(), Ok(Strategy::Stochastic));
	}

	#[test]
	fn unknown_strategy_is_rejected() {
		assert!("deep-learning".parse::<Strategy>().is_err());
		assert!("".parse::<Strategy>().is_err());
	}

	#[test]
	fn strategy_display_round_trips() {
		for strategy in Strategy::ALL {
			assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
		}
	}

	#[test]
	fn config_defaults() {
		let config = PredictorConfig::default();
		assert_eq!(config.lookback(), 10);
		assert_eq!(config.window(), 2);
	}

	#[test]
	fn config_setters_validate() {
		let mut config = PredictorConfig::default();
		assert!(config.set_lookback(0).is_err());
		assert!(config.set_window(0).is_err());
		assert!(config.set_lookback(5).is_ok());
		assert!(config.set_window(3).is_ok());
		assert_eq!(config.lookback(), 5);
		assert_eq!(config.window(), 3);
	}

	#[test]
	fn dispatch_routes_to_the_selected_strategy() {
		let config = PredictorConfig::default();
		let mut rng = StdRng::seed_from_u64(3);

		let sequence = parse_sequence("P,B,P,B,P");
		assert_eq!(
			predict(&sequence, Strategy::Markov, &config, &mut rng),
			Prediction::Outcome(Outcome::Banker)
		);

		let sequence = parse_sequence("P,B,P,B,T,B");
		assert_eq!(
			predict(&sequence, Strategy::Pattern, &config, &mut rng),
			Prediction::NoMatchingPattern
		);

		assert_eq!(
			predict(&[], Strategy::Stochastic, &config, &mut rng),
			Prediction::InsufficientData { required: 20 }
		);

		let sequence = parse_sequence("P,P,B");
		assert_eq!(
			predict(&sequence, Strategy::Frequency, &config, &mut rng),
			Prediction::Outcome(Outcome::Player)
		);
	}

	#[test]
	fn dispatch_honors_the_config_window() {
		let mut config = PredictorConfig::default();
		config.set_window(3).unwrap();

		let sequence = parse_sequence("P,B,P");
		assert_eq!(
			predict(&sequence, Strategy::Pattern, &config, &mut StdRng::seed_from_u64(0)),
			Prediction::InsufficientData { required: 4 }
		);
	}

	#[test]
	fn prediction_messages() {
		assert_eq!(Prediction::Outcome(Outcome::Player).to_string(), "Player");
		assert_eq!(
			Prediction::InsufficientData { required: 20 }.to_string(),
			"at least 20 results are required"
		);
		assert_eq!(Prediction::NoMatchingPattern.to_string(), "no matching pattern");
	}
}
