use serde::{Deserialize, Serialize};

/// The result of a single round.
///
/// The declaration order `Player`, `Banker`, `Tie` is fixed and doubles
/// as the deterministic tie-break order: whenever two outcomes hold the
/// same count, the one declared first wins.
///
/// # Invariants
/// - `ALL` lists the variants in declaration order
/// - `index` is the position of a variant in `ALL`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	Player,
	Banker,
	Tie,
}

impl Outcome {
	/// All outcomes in declaration (tie-break) order.
	pub const ALL: [Outcome; 3] = [Outcome::Player, Outcome::Banker, Outcome::Tie];

	/// Maps a single raw token to an outcome.
	///
	/// The token is trimmed and case-normalized; the accepted codes are
	/// `P`, `B` and `T`. Any other token maps to `None`.
	pub fn from_token(token: &str) -> Option<Self> {
		match token.trim().to_uppercase().as_str() {
			"P" => Some(Outcome::Player),
			"B" => Some(Outcome::Banker),
			"T" => Some(Outcome::Tie),
			_ => None,
		}
	}

	/// Single-letter code of the outcome.
	pub fn symbol(&self) -> char {
		match self {
			Outcome::Player => 'P',
			Outcome::Banker => 'B',
			Outcome::Tie => 'T',
		}
	}

	/// Position of the outcome in the declaration order.
	pub(crate) fn index(&self) -> usize {
		*self as usize
	}
}

impl std::fmt::Display for Outcome {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let word = match self {
			Outcome::Player => "Player",
			Outcome::Banker => "Banker",
			Outcome::Tie => "Tie",
		};
		write!(f, "{}", word)
	}
}

/// Parses a raw comma-separated result string into an outcome sequence.
///
/// Each token is trimmed and case-normalized; anything outside the
/// `{P, B, T}` alphabet is dropped silently. Order is preserved.
///
/// # Notes
/// - The parser is a pure filter and never fails; an empty vector is a
///   valid result.
/// - Use `is_noise` to detect input that contained text but no valid
///   token at all.
pub fn parse_sequence(raw: &str) -> Vec<Outcome> {
	let sequence: Vec<Outcome> = raw.split(',').filter_map(Outcome::from_token).collect();
	log::debug!("parsed {} outcomes from raw input", sequence.len());
	sequence
}

/// Returns true when the raw input contained text but nothing parsed.
///
/// This is the "input present but invalid" condition a host surfaces as
/// a warning. Empty or whitespace-only input is not flagged.
pub fn is_noise(raw: &str, parsed: &[Outcome]) -> bool {
	!raw.trim().is_empty() && parsed.is_empty()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_normalizes_and_filters() {
		assert_eq!(
			parse_sequence("P,b, T,x,P"),
			vec![Outcome::Player, Outcome::Banker, Outcome::Tie, Outcome::Player]
		);
	}

	#[test]
	fn parse_drops_invalid_tokens_silently() {
		assert_eq!(parse_sequence("P,b, T,x"), vec![Outcome::Player, Outcome::Banker, Outcome::Tie]);
		assert_eq!(parse_sequence("player,banker"), vec![]);
	}

	#[test]
	fn parse_empty_input() {
		assert_eq!(parse_sequence(""), vec![]);
		assert_eq!(parse_sequence(" , , "), vec![]);
	}

	#[test]
	fn noise_detection() {
		let parsed = parse_sequence("x,y");
		assert!(is_noise("x,y", &parsed));
		assert!(!is_noise("", &parse_sequence("")));
		assert!(!is_noise("   ", &parse_sequence("   ")));
		assert!(!is_noise("P", &parse_sequence("P")));
	}

	#[test]
	fn symbol_round_trip() {
		for outcome in Outcome::ALL {
			assert_eq!(Outcome::from_token(&outcome.symbol().to_string()), Some(outcome));
		}
	}

	#[test]
	fn display_uses_full_words() {
		assert_eq!(Outcome::Player.to_string(), "Player");
		assert_eq!(Outcome::Banker.to_string(), "Banker");
		assert_eq!(Outcome::Tie.to_string(), "Tie");
	}
}
