//! Directory traversal: the name filter, the tree renderer and the indexed
//! file listing.

mod enumerate;
mod policy;
mod tree;

use std::path::Path;

use ignore::{DirEntry, Error as WalkError, WalkBuilder};

pub use enumerate::{FileEntry, FileListing, enumerate_files};
pub use policy::{DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_FILES, FilterPolicy};
pub use tree::{print_tree, render_tree};

/// A walker over `root` with every built-in filter off (no hidden-file rule,
/// no ignore files) that consults `policy` for each entry below the root.
fn policy_walker(root: &Path, policy: &FilterPolicy) -> WalkBuilder {
	let policy = policy.clone();
	let mut builder = WalkBuilder::new(root);
	builder
		.standard_filters(false)
		.filter_entry(move |entry| admits(&policy, entry));
	builder
}

fn admits(policy: &FilterPolicy, entry: &DirEntry) -> bool {
	let name = entry.file_name();
	if entry_is_dir(entry) {
		!policy.is_ignored_dir(name)
	} else {
		!policy.is_ignored_file(name)
	}
}

/// Directories are classified through symlinks. Anything whose target cannot
/// be resolved counts as a file.
fn entry_is_dir(entry: &DirEntry) -> bool {
	match entry.file_type() {
		Some(kind) if kind.is_dir() => true,
		Some(kind) if kind.is_symlink() => entry.path().is_dir(),
		_ => false,
	}
}

/// The path a walk error refers to, if any.
fn error_path(err: &WalkError) -> Option<&Path> {
	match err {
		WalkError::WithPath { path, .. } => Some(path.as_path()),
		WalkError::WithDepth { err, .. } => error_path(err),
		WalkError::Loop { child, .. } => Some(child.as_path()),
		_ => None,
	}
}

/// True when the walker refused to follow a link back into an ancestor.
fn is_loop(err: &WalkError) -> bool {
	match err {
		WalkError::Loop { .. } => true,
		WalkError::WithPath { err, .. } | WalkError::WithDepth { err, .. } => is_loop(err),
		_ => false,
	}
}
