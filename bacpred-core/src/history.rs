use crate::model::outcome::Outcome;

/// Rows for the host's results log, one symbol per row.
///
/// The engine only formats the validated sequence; appending it to a
/// file (or anywhere else) is the host's concern.
pub fn history_rows(sequence: &[Outcome]) -> Vec<String> {
	sequence.iter().map(|outcome| outcome.symbol().to_string()).collect()
}

/// Line for the host's notes log: `"<raw input> → <note text>"`.
///
/// The raw input is kept as typed so the note stays attached to what the
/// user actually entered. No trailing newline; the host decides the
/// record separator.
pub fn note_line(raw_input: &str, note: &str) -> String {
	format!("{} → {}", raw_input, note)
}
