use std::io;

use thiserror::Error;

/// Why a file selection was rejected. The user is asked again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
	/// A token was not an integer.
	#[error("Invalid input. Please enter indices like '1 2 3' or '.' or 'none'.")]
	InvalidToken { token: String },

	/// The first index, in input order, that names no listed file. Kept as
	/// text so numbers wider than 64 bits are reported as typed.
	#[error("Index {index} is not in the list of files.")]
	UnknownIndex { index: String },
}

/// Failures that end an interactive session early.
#[derive(Debug, Error)]
pub enum SessionError {
	#[error("failed to read from the terminal")]
	Input(#[source] io::Error),

	#[error("failed to write to the terminal")]
	Output(#[source] io::Error),

	#[error("failed to serialize search results")]
	Serialize(#[from] serde_json::Error),

	#[error("cannot determine the current directory")]
	CurrentDir(#[source] io::Error),
}
