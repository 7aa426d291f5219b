//! Turn the user's index selection into a list of file paths.

use std::num::IntErrorKind;
use std::path::PathBuf;

use crate::error::SelectionError;
use crate::filesystem::FileListing;

/// Outcome of interpreting one line of selection input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	/// The chosen paths in input order. Repeated indices repeat the path.
	Selected(Vec<PathBuf>),
	/// The user asked to leave the program.
	Quit,
	/// Nothing was selected; ask again.
	Retry(SelectionError),
}

/// Returns true for the tokens that end the session at any strict prompt.
pub fn is_quit_token(input: &str) -> bool {
	matches!(input.to_lowercase().as_str(), "q" | "quit")
}

/// Interpret `input` against `listing`.
///
/// `.` selects every file in index order and `none` (any case) selects
/// nothing. Otherwise the input must be whitespace-separated integers. Every
/// token is parsed before any is checked, and the first index that names no
/// listed file rejects the whole input.
pub fn resolve_selection(listing: &FileListing, input: &str) -> Resolution {
	let input = input.trim();

	if is_quit_token(input) {
		return Resolution::Quit;
	}
	if input == "." {
		return Resolution::Selected(listing.paths());
	}
	if input.eq_ignore_ascii_case("none") {
		return Resolution::Selected(Vec::new());
	}

	let indices = match parse_indices(input) {
		Ok(indices) => indices,
		Err(err) => return Resolution::Retry(err),
	};

	let mut selected = Vec::with_capacity(indices.len());
	for index in indices {
		let entry = match index {
			Index::Value(value) => usize::try_from(value)
				.ok()
				.and_then(|value| listing.get(value)),
			Index::OutOfRange(_) => None,
		};
		match entry {
			Some(entry) => selected.push(entry.path.clone()),
			None => {
				return Resolution::Retry(SelectionError::UnknownIndex {
					index: index.into_text(),
				});
			}
		}
	}

	Resolution::Selected(selected)
}

/// A well-formed integer token. Ones too wide for `i64` can never name a
/// file.
enum Index {
	Value(i64),
	OutOfRange(String),
}

impl Index {
	fn into_text(self) -> String {
		match self {
			Index::Value(value) => value.to_string(),
			Index::OutOfRange(text) => text,
		}
	}
}

fn parse_indices(input: &str) -> Result<Vec<Index>, SelectionError> {
	input.split_whitespace().map(parse_index).collect()
}

fn parse_index(token: &str) -> Result<Index, SelectionError> {
	match token.parse::<i64>() {
		Ok(value) => Ok(Index::Value(value)),
		Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
			Ok(Index::OutOfRange(normalize_digits(token)))
		}
		Err(_) => Err(SelectionError::InvalidToken {
			token: token.to_string(),
		}),
	}
}

/// Drop a leading `+` and leading zeros, the way the number would print.
fn normalize_digits(token: &str) -> String {
	let (sign, digits) = match token.strip_prefix('-') {
		Some(digits) => ("-", digits),
		None => ("", token.strip_prefix('+').unwrap_or(token)),
	};
	format!("{sign}{}", digits.trim_start_matches('0'))
}
