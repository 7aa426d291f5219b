use std::io::Write;

use clap::ValueEnum;

use crate::error::SessionError;
use crate::search::{FileMatches, MatchRecord};

/// How search results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	#[default]
	Plain,
	Json,
}

impl OutputFormat {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Plain => "plain",
			Self::Json => "json",
		}
	}
}

/// Write one search round in the chosen format.
pub fn write_matches<W: Write>(
	out: &mut W,
	format: OutputFormat,
	results: &[FileMatches],
) -> Result<(), SessionError> {
	match format {
		OutputFormat::Plain => write_plain(out, results).map_err(SessionError::Output),
		OutputFormat::Json => write_json(out, results),
	}
}

/// A `File:` header per file followed by its indented matching lines.
pub fn write_plain<W: Write>(out: &mut W, results: &[FileMatches]) -> std::io::Result<()> {
	for found in results {
		writeln!(out)?;
		writeln!(out, "File: {}", found.path.display())?;
		for record in &found.records {
			writeln!(out, "  Line {}: {}", record.line_number, record.text)?;
		}
	}
	Ok(())
}

/// Every match as one pretty-printed JSON array.
pub fn format_json(results: &[FileMatches]) -> Result<String, SessionError> {
	let records: Vec<&MatchRecord> = results.iter().flat_map(|found| &found.records).collect();
	Ok(serde_json::to_string_pretty(&records)?)
}

fn write_json<W: Write>(out: &mut W, results: &[FileMatches]) -> Result<(), SessionError> {
	let payload = format_json(results)?;
	writeln!(out, "{payload}").map_err(SessionError::Output)
}
