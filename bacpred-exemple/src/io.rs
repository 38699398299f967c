use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use std::io;

use bacpred_core::model::outcome::Outcome;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Loads an outcome sequence from the first column of a tabular file.
///
/// - The first line is treated as a header and skipped
/// - Each remaining line contributes its first comma-separated field
/// - Fields outside the `{P, B, T}` alphabet are dropped, as in parsing
pub(crate) fn load_results_column<P: AsRef<Path>>(path: P) -> io::Result<Vec<Outcome>> {
	let lines = read_file(path)?;
	Ok(lines
		.iter()
		.skip(1)
		.filter_map(|line| line.split(',').next())
		.filter_map(Outcome::from_token)
		.collect())
}

/// Appends lines to a file, creating it if needed.
///
/// Each entry is written followed by a newline.
pub(crate) fn append_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> io::Result<()> {
	let mut file = OpenOptions::new().create(true).append(true).open(path)?;
	for line in lines {
		writeln!(file, "{}", line)?;
	}
	Ok(())
}
