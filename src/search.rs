//! Case-insensitive multi-term line search over selected files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Lowercased search terms. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerms(Vec<String>);

impl SearchTerms {
	/// Split `input` on whitespace. Returns `None` when there are no terms.
	pub fn parse(input: &str) -> Option<Self> {
		Self::from_terms(input.split_whitespace())
	}

	/// Build from individual terms, dropping empty ones.
	pub fn from_terms<I, S>(terms: I) -> Option<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let terms: Vec<String> = terms
			.into_iter()
			.map(|term| term.as_ref().to_lowercase())
			.filter(|term| !term.is_empty())
			.collect();
		(!terms.is_empty()).then_some(Self(terms))
	}

	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	/// True when every term occurs in `line`, ignoring case.
	pub fn matches(&self, line: &str) -> bool {
		let lowered = line.to_lowercase();
		self.0.iter().all(|term| lowered.contains(term.as_str()))
	}
}

/// One line that contained every search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
	pub path: PathBuf,
	/// 1-based.
	#[serde(rename = "line")]
	pub line_number: usize,
	/// The line with surrounding whitespace removed.
	pub text: String,
}

/// All matches found in one file, by ascending line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatches {
	pub path: PathBuf,
	pub records: Vec<MatchRecord>,
}

/// Search `files` in order. Files without matches, and files that cannot be
/// read as UTF-8 text, are left out of the result.
pub fn search_files<P: AsRef<Path>>(files: &[P], terms: &SearchTerms) -> Vec<FileMatches> {
	files
		.iter()
		.filter_map(|path| search_file(path.as_ref(), terms))
		.collect()
}

/// Search a single file. `None` when it has no matching line or is unreadable.
pub fn search_file(path: &Path, terms: &SearchTerms) -> Option<FileMatches> {
	let contents = match fs::read_to_string(path) {
		Ok(contents) => contents,
		Err(err) => {
			tracing::debug!(path = %path.display(), error = %err, "skipping unreadable file");
			return None;
		}
	};

	let records: Vec<MatchRecord> = split_lines(&contents)
		.enumerate()
		.filter(|(_, line)| terms.matches(line))
		.map(|(offset, line)| MatchRecord {
			path: path.to_path_buf(),
			line_number: offset + 1,
			text: line.trim().to_string(),
		})
		.collect();

	if records.is_empty() {
		return None;
	}

	tracing::trace!(path = %path.display(), matches = records.len(), "file matched");
	Some(FileMatches {
		path: path.to_path_buf(),
		records,
	})
}

/// Split on `\n`, `\r\n` or a lone `\r`. A trailing terminator does not
/// produce an empty final line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
	let mut rest = text;
	std::iter::from_fn(move || {
		if rest.is_empty() {
			return None;
		}
		match rest.find(['\n', '\r']) {
			Some(at) => {
				let line = &rest[..at];
				let skip = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
				rest = &rest[at + skip..];
				Some(line)
			}
			None => {
				let line = rest;
				rest = "";
				Some(line)
			}
		}
	})
}
