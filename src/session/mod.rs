//! The interactive session: ask for a folder, show it, pick files and search
//! them.
//!
//! Terminal I/O is injected, so a whole session can be scripted in tests.

mod prompt;
mod prompts;

use std::env;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub use prompt::{Flow, Prompt, PromptState, Prompter, Reply};
pub use prompts::{Confirm, FolderPrompt, SelectionPrompt, TermsInput, TermsPrompt, YesNo};

use crate::error::SessionError;
use crate::filesystem::{FileListing, FilterPolicy, enumerate_files, print_tree};
use crate::output::{OutputFormat, write_matches};
use crate::search::search_files;

const BANNER: &str = "\
=========================================
  Welcome to the Folder Mapping Script
=========================================

This script will:
1. Ask for a folder (or use '.') to scan.
2. Print the folder tree, skipping 'node_modules' and some common files.
3. List files with numeric indices.
4. Let you choose files by number or '.' for all.
5. Optionally search for files containing specific word combinations.
Type 'q' or 'quit' at any prompt to exit.
";

const MAP_QUESTION: &str = "Do you want to map a folder? (y/n): ";
const SEARCH_QUESTION: &str =
	"Do you want to search for specific word combinations in the selected files? (y/n): ";
const AGAIN_QUESTION: &str = "Another search? (y/n): ";

/// How a session ended. Every variant is a normal exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
	/// Went through to the final message.
	Completed,
	/// The user chose not to map a folder.
	Declined,
	/// A quit token (or end of input) was entered.
	Quit,
}

/// Knobs for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
	/// Map this folder without asking.
	pub root: Option<PathBuf>,
	pub format: OutputFormat,
	pub show_banner: bool,
	pub policy: FilterPolicy,
	/// Used for `.` at the folder prompt. Defaults to the process directory.
	pub current_dir: Option<PathBuf>,
}

impl Default for SessionOptions {
	fn default() -> Self {
		Self {
			root: None,
			format: OutputFormat::Plain,
			show_banner: true,
			policy: FilterPolicy::default(),
			current_dir: None,
		}
	}
}

/// One run of the interactive tool.
pub struct Session<R, W> {
	prompter: Prompter<R, W>,
	options: SessionOptions,
}

macro_rules! proceed {
	($flow:expr) => {
		match $flow {
			Flow::Continue(value) => value,
			Flow::Quit => return Ok(SessionEnd::Quit),
		}
	};
}

impl<R: BufRead, W: Write> Session<R, W> {
	pub fn new(input: R, output: W, options: SessionOptions) -> Self {
		Self {
			prompter: Prompter::new(input, output),
			options,
		}
	}

	/// Hand back the output stream, e.g. to inspect a scripted run.
	pub fn into_output(self) -> W {
		self.prompter.into_output()
	}

	pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
		if self.options.show_banner {
			self.prompter.say(BANNER)?;
		}

		let root = match self.options.root.clone() {
			Some(root) => root,
			None => {
				if !proceed!(self.prompter.ask(&mut YesNo::new(MAP_QUESTION))?) {
					self.prompter.say("No folder mapping selected. Exiting...")?;
					return Ok(SessionEnd::Declined);
				}
				let current_dir = self.current_dir()?;
				proceed!(self.prompter.ask(&mut FolderPrompt::new(current_dir))?)
			}
		};
		tracing::info!(root = %root.display(), "mapping folder");

		self.prompter.say("\nFolder Tree:\n")?;
		print_tree(&root, &self.options.policy, self.prompter.output())
			.map_err(SessionError::Output)?;

		let listing = enumerate_files(&root, &self.options.policy);
		let selected = proceed!(self.select_files(&listing)?);
		if selected.is_empty() {
			self.prompter.say("No files selected.")?;
		} else {
			self.prompter
				.say(format_args!("\nYou have selected {} file(s).", selected.len()))?;
		}

		loop {
			if !proceed!(self.prompter.ask(&mut YesNo::new(SEARCH_QUESTION))?) {
				break;
			}

			match proceed!(self.prompter.ask(&mut TermsPrompt)?) {
				TermsInput::Cancel => break,
				TermsInput::Empty => self.prompter.say("No search terms entered.")?,
				TermsInput::Terms(terms) => {
					tracing::info!(
						terms = terms.as_slice().len(),
						files = selected.len(),
						"searching selection"
					);
					let results = search_files(&selected, &terms);
					write_matches(self.prompter.output(), self.options.format, &results)?;
				}
			}

			if !proceed!(self.prompter.ask(&mut Confirm::new(AGAIN_QUESTION))?) {
				break;
			}
		}

		self.prompter.say("\nDone. Exiting...")?;
		Ok(SessionEnd::Completed)
	}

	/// Show the numbered files and ask which to search.
	fn select_files(&mut self, listing: &FileListing) -> Result<Flow<Vec<PathBuf>>, SessionError> {
		if listing.is_empty() {
			self.prompter.say("No files found.")?;
			return Ok(Flow::Continue(Vec::new()));
		}

		self.prompter.say("\nList of discovered files:")?;
		for entry in listing {
			self.prompter
				.say(format_args!("{}. {}", entry.index, entry.path.display()))?;
		}
		self.prompter
			.say("\nEnter the file indices separated by spaces (e.g., '1 3 5'), ")?;
		self.prompter
			.say("or '.' to select all, or 'none' to select none.")?;
		self.prompter.say("Type 'q' or 'quit' to exit.")?;

		self.prompter.ask(&mut SelectionPrompt::new(listing))
	}

	fn current_dir(&self) -> Result<PathBuf, SessionError> {
		match &self.options.current_dir {
			Some(dir) => Ok(dir.clone()),
			None => env::current_dir().map_err(SessionError::CurrentDir),
		}
	}
}

/// Run a session over the given streams with default options rooted at
/// `root`.
pub fn run_at<R: BufRead, W: Write>(
	root: &Path,
	input: R,
	output: W,
) -> Result<SessionEnd, SessionError> {
	let options = SessionOptions {
		root: Some(root.to_path_buf()),
		show_banner: false,
		..SessionOptions::default()
	};
	Session::new(input, output, options).run()
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::io::Cursor;

	use tempfile::tempdir;

	use super::*;

	fn scripted(options: SessionOptions, input: &str) -> (SessionEnd, String) {
		let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), options);
		let end = session.run().unwrap();
		(end, String::from_utf8(session.into_output()).unwrap())
	}

	#[test]
	fn declining_to_map_ends_early() {
		let (end, output) = scripted(SessionOptions::default(), "maybe\nn\n");
		assert_eq!(end, SessionEnd::Declined);
		assert!(output.starts_with("=========="));
		assert!(output.contains("Invalid input. Please answer 'y' or 'n'."));
		assert!(output.ends_with("No folder mapping selected. Exiting...\n"));
	}

	#[test]
	fn quit_at_folder_prompt() {
		let (end, output) = scripted(SessionOptions::default(), "y\nquit\n");
		assert_eq!(end, SessionEnd::Quit);
		assert!(!output.contains("Folder Tree"));
	}

	#[test]
	fn dot_maps_the_current_directory() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("a.txt"), "hello").unwrap();
		let options = SessionOptions {
			show_banner: false,
			current_dir: Some(dir.path().to_path_buf()),
			..SessionOptions::default()
		};

		let (end, output) = scripted(options, "y\n.\nnone\nn\n");

		assert_eq!(end, SessionEnd::Completed);
		assert!(output.contains(&format!("1. {}", dir.path().join("a.txt").display())));
		assert!(output.contains("No files selected."));
	}

	#[test]
	fn empty_folder_skips_selection() {
		let dir = tempdir().unwrap();
		let (end, output) = {
			let mut out = Vec::new();
			let end = run_at(dir.path(), Cursor::new("n\n"), &mut out).unwrap();
			(end, String::from_utf8(out).unwrap())
		};

		assert_eq!(end, SessionEnd::Completed);
		assert!(output.contains("No files found.\nNo files selected.\n"));
		assert!(!output.contains("Your selection: "));
	}

	#[test]
	fn end_of_input_quits() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("a.txt"), "hello").unwrap();
		let mut out = Vec::new();
		let end = run_at(dir.path(), Cursor::new(""), &mut out).unwrap();
		assert_eq!(end, SessionEnd::Quit);
	}
}
