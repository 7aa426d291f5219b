use std::collections::HashSet;
use std::ffi::{OsStr, OsString};

/// Directory names skipped by default: build output, dependency caches and
/// version-control metadata.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &["node_modules", ".git", "build", "dist", "__pycache__"];

/// File names skipped by default: OS metadata and package lock files.
pub const DEFAULT_IGNORED_FILES: &[&str] = &[".DS_Store", "package-lock.json", "yarn.lock"];

/// Decides which directory and file names are left out of the tree and the
/// file listing.
///
/// A name is excluded when it matches one of the configured names exactly or
/// when it starts with a dot. The hidden-name rule cannot be switched off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPolicy {
	ignored_dirs: HashSet<OsString>,
	ignored_files: HashSet<OsString>,
}

impl Default for FilterPolicy {
	fn default() -> Self {
		Self::new(
			DEFAULT_IGNORED_DIRS.iter().copied(),
			DEFAULT_IGNORED_FILES.iter().copied(),
		)
	}
}

impl FilterPolicy {
	/// Build a policy from explicit directory and file name sets.
	pub fn new<D, F>(dirs: D, files: F) -> Self
	where
		D: IntoIterator,
		D::Item: Into<OsString>,
		F: IntoIterator,
		F::Item: Into<OsString>,
	{
		Self {
			ignored_dirs: dirs.into_iter().map(Into::into).collect(),
			ignored_files: files.into_iter().map(Into::into).collect(),
		}
	}

	pub fn is_ignored_dir(&self, name: &OsStr) -> bool {
		is_hidden(name) || self.ignored_dirs.contains(name)
	}

	pub fn is_ignored_file(&self, name: &OsStr) -> bool {
		is_hidden(name) || self.ignored_files.contains(name)
	}
}

fn is_hidden(name: &OsStr) -> bool {
	name.as_encoded_bytes().first() == Some(&b'.')
}
