//! Core crate exports for the `foldermap` interactive folder mapper.
//!
//! The library exposes the pieces the binary strings together: a name
//! filter, a tree renderer, an indexed file listing, the selection parser
//! and the line search. [`Session`] drives them over any input and output
//! stream.

pub mod error;
pub mod filesystem;
pub mod logging;
pub mod output;
pub mod search;
pub mod selection;
pub mod session;

pub use error::{SelectionError, SessionError};
pub use filesystem::{
	DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_FILES, FileEntry, FileListing, FilterPolicy,
	enumerate_files, print_tree, render_tree,
};
pub use output::OutputFormat;
pub use search::{FileMatches, MatchRecord, SearchTerms, search_file, search_files};
pub use selection::{Resolution, resolve_selection};
pub use session::{Session, SessionEnd, SessionOptions};
