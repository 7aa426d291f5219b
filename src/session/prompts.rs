//! The concrete questions asked during a session.

use std::path::PathBuf;

use super::prompt::{Prompt, Reply};
use crate::filesystem::FileListing;
use crate::search::SearchTerms;
use crate::selection::{Resolution, is_quit_token, resolve_selection};

/// A y/n question that insists on `y` or `n` and honours the quit tokens.
pub struct YesNo {
	message: &'static str,
}

impl YesNo {
	pub fn new(message: &'static str) -> Self {
		Self { message }
	}
}

impl Prompt for YesNo {
	type Output = bool;

	fn message(&self) -> &str {
		self.message
	}

	fn interpret(&mut self, input: &str) -> Reply<bool> {
		if is_quit_token(input) {
			return Reply::Quit;
		}
		match input.to_lowercase().as_str() {
			"y" => Reply::Accept(true),
			"n" => Reply::Accept(false),
			_ => Reply::Retry("Invalid input. Please answer 'y' or 'n'.".into()),
		}
	}
}

/// A y/n question where anything but `y` means no.
pub struct Confirm {
	message: &'static str,
}

impl Confirm {
	pub fn new(message: &'static str) -> Self {
		Self { message }
	}
}

impl Prompt for Confirm {
	type Output = bool;

	fn message(&self) -> &str {
		self.message
	}

	fn interpret(&mut self, input: &str) -> Reply<bool> {
		Reply::Accept(input.eq_ignore_ascii_case("y"))
	}
}

/// Asks for the directory to map. `.` or a blank answer means `current_dir`.
pub struct FolderPrompt {
	current_dir: PathBuf,
}

impl FolderPrompt {
	pub fn new(current_dir: PathBuf) -> Self {
		Self { current_dir }
	}
}

impl Prompt for FolderPrompt {
	type Output = PathBuf;

	fn message(&self) -> &str {
		"Enter the folder path (or '.' for current folder): "
	}

	fn interpret(&mut self, input: &str) -> Reply<PathBuf> {
		if is_quit_token(input) {
			return Reply::Quit;
		}
		let folder = if input.is_empty() || input == "." {
			self.current_dir.clone()
		} else {
			PathBuf::from(input)
		};

		if folder.is_dir() {
			Reply::Accept(folder)
		} else {
			Reply::Retry(format!(
				"Error: '{}' is not a valid directory. Please try again.",
				folder.display()
			))
		}
	}
}

/// Asks which of the listed files to search.
pub struct SelectionPrompt<'a> {
	listing: &'a FileListing,
}

impl<'a> SelectionPrompt<'a> {
	pub fn new(listing: &'a FileListing) -> Self {
		Self { listing }
	}
}

impl Prompt for SelectionPrompt<'_> {
	type Output = Vec<PathBuf>;

	fn message(&self) -> &str {
		"Your selection: "
	}

	fn interpret(&mut self, input: &str) -> Reply<Vec<PathBuf>> {
		match resolve_selection(self.listing, input) {
			Resolution::Selected(paths) => Reply::Accept(paths),
			Resolution::Quit => Reply::Quit,
			Resolution::Retry(err) => Reply::Retry(err.to_string()),
		}
	}
}

/// The answer to the search terms question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermsInput {
	/// `.`: stop searching.
	Cancel,
	/// Nothing but whitespace.
	Empty,
	Terms(SearchTerms),
}

/// Asks for the words to search for. Always accepts.
pub struct TermsPrompt;

impl Prompt for TermsPrompt {
	type Output = TermsInput;

	fn message(&self) -> &str {
		"Enter the words you want to search for (separated by spaces), or '.' for no search: "
	}

	fn interpret(&mut self, input: &str) -> Reply<TermsInput> {
		if input == "." {
			return Reply::Accept(TermsInput::Cancel);
		}
		Reply::Accept(SearchTerms::parse(input).map_or(TermsInput::Empty, TermsInput::Terms))
	}
}
