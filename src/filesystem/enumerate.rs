use std::path::{Path, PathBuf};

use super::{FilterPolicy, entry_is_dir, policy_walker};

/// One discovered file and the 1-based index the user selects it by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
	pub index: usize,
	pub path: PathBuf,
}

/// Files discovered under a root, indexed `1..=len` in visitation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileListing {
	entries: Vec<FileEntry>,
}

impl FileListing {
	/// Look up an entry by its 1-based index.
	pub fn get(&self, index: usize) -> Option<&FileEntry> {
		let entry = self.entries.get(index.checked_sub(1)?)?;
		debug_assert_eq!(entry.index, index);
		Some(entry)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
		self.entries.iter()
	}

	/// All paths in index order.
	pub fn paths(&self) -> Vec<PathBuf> {
		self.entries.iter().map(|entry| entry.path.clone()).collect()
	}

	fn push(&mut self, path: PathBuf) {
		let index = self.entries.len() + 1;
		self.entries.push(FileEntry { index, path });
	}
}

impl<'a> IntoIterator for &'a FileListing {
	type Item = &'a FileEntry;
	type IntoIter = std::slice::Iter<'a, FileEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Walk `root` top-down and number every file that survives `policy`.
///
/// Each directory's own files are numbered first, in the order the OS lists
/// them, then its subdirectories are walked in listing order. Ignored
/// directories are pruned before descending. Symlinked directories are
/// neither followed nor listed. Directories that cannot be read contribute
/// nothing. Listing order is not sorted, so the numbering may not follow
/// the order [`print_tree`](super::print_tree) displays.
pub fn enumerate_files(root: &Path, policy: &FilterPolicy) -> FileListing {
	let mut listing = FileListing::default();

	// Stable sort: files keep their listing order and come before directories.
	let walker = policy_walker(root, policy)
		.follow_links(false)
		.sort_by_file_path(|a, b| a.is_dir().cmp(&b.is_dir()))
		.build();

	for result in walker {
		let entry = match result {
			Ok(entry) => entry,
			Err(err) => {
				tracing::debug!(error = %err, "cannot list directory");
				continue;
			}
		};
		if entry.depth() == 0 || entry_is_dir(&entry) {
			continue;
		}
		listing.push(entry.into_path());
	}

	tracing::debug!(root = %root.display(), files = listing.len(), "enumerated files");
	listing
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	fn touch(path: &Path) {
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).unwrap();
		}
		fs::write(path, "x").unwrap();
	}

	fn sample_tree(root: &Path) {
		touch(&root.join("README.md"));
		touch(&root.join("src/main.rs"));
		touch(&root.join("src/util/strings.rs"));
		touch(&root.join("docs/index.md"));
		touch(&root.join(".hidden"));
		touch(&root.join("package-lock.json"));
		touch(&root.join("node_modules/pkg/index.js"));
		touch(&root.join(".git/config"));
		touch(&root.join("build/artifact.bin"));
	}

	#[test]
	fn indices_are_contiguous_from_one() {
		let dir = tempdir().unwrap();
		sample_tree(dir.path());

		let listing = enumerate_files(dir.path(), &FilterPolicy::default());
		let indices: Vec<usize> = listing.iter().map(|entry| entry.index).collect();

		assert_eq!(indices, (1..=4).collect::<Vec<_>>());
	}

	#[test]
	fn ignored_names_never_reach_the_listing() {
		let dir = tempdir().unwrap();
		sample_tree(dir.path());

		let listing = enumerate_files(dir.path(), &FilterPolicy::default());
		let found: HashSet<PathBuf> = listing.paths().into_iter().collect();
		let expected: HashSet<PathBuf> = [
			"README.md",
			"src/main.rs",
			"src/util/strings.rs",
			"docs/index.md",
		]
		.iter()
		.map(|relative| dir.path().join(relative))
		.collect();

		assert_eq!(found, expected);
	}

	#[test]
	fn repeated_walks_agree() {
		let dir = tempdir().unwrap();
		sample_tree(dir.path());
		let policy = FilterPolicy::default();

		assert_eq!(
			enumerate_files(dir.path(), &policy),
			enumerate_files(dir.path(), &policy)
		);
	}

	#[test]
	fn directory_files_come_before_nested_files() {
		let dir = tempdir().unwrap();
		sample_tree(dir.path());

		let listing = enumerate_files(dir.path(), &FilterPolicy::default());
		let first = listing.get(1).unwrap();
		assert_eq!(first.path, dir.path().join("README.md"));

		// Whole subtrees stay together: `src/main.rs` and `src/util/strings.rs`
		// are never split by a file from `docs`.
		let position = |relative: &str| {
			listing
				.iter()
				.position(|entry| entry.path == dir.path().join(relative))
				.unwrap()
		};
		let main = position("src/main.rs");
		let nested = position("src/util/strings.rs");
		let docs = position("docs/index.md");
		assert_eq!(nested, main + 1);
		assert!(docs < main || docs > nested);
	}

	#[test]
	fn order_follows_listing_not_sorting() {
		let dir = tempdir().unwrap();
		for name in ["b.txt", "a.txt", "c.txt"] {
			touch(&dir.path().join(name));
		}

		let listing = enumerate_files(dir.path(), &FilterPolicy::default());
		let listed: Vec<PathBuf> = fs::read_dir(dir.path())
			.unwrap()
			.map(|entry| entry.unwrap().path())
			.collect();

		assert_eq!(listing.paths(), listed);
	}

	#[test]
	fn relative_root_yields_relative_paths() {
		let dir = tempdir().unwrap();
		touch(&dir.path().join("X/a.txt"));
		touch(&dir.path().join("X/.hidden"));

		let root = dir.path().join("X");
		let listing = enumerate_files(&root, &FilterPolicy::default());

		assert_eq!(listing.len(), 1);
		assert_eq!(
			listing.get(1),
			Some(&FileEntry {
				index: 1,
				path: root.join("a.txt"),
			})
		);
	}

	#[test]
	fn missing_root_is_empty() {
		let dir = tempdir().unwrap();
		let listing = enumerate_files(&dir.path().join("nope"), &FilterPolicy::default());
		assert!(listing.is_empty());
		assert_eq!(listing.get(1), None);
		assert_eq!(listing.get(0), None);
	}

	#[cfg(unix)]
	#[test]
	fn symlinked_directories_are_not_followed() {
		let dir = tempdir().unwrap();
		touch(&dir.path().join("real/inner.txt"));
		std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
		std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

		let listing = enumerate_files(dir.path(), &FilterPolicy::default());
		let found: HashSet<PathBuf> = listing.paths().into_iter().collect();

		assert!(found.contains(&dir.path().join("real/inner.txt")));
		assert!(found.contains(&dir.path().join("dangling")));
		assert!(!found.contains(&dir.path().join("link")));
		assert!(!found.contains(&dir.path().join("link/inner.txt")));
		assert_eq!(listing.len(), 2);
	}

	#[cfg(unix)]
	#[test]
	fn unreadable_directories_contribute_nothing() {
		use std::os::unix::fs::PermissionsExt;

		let dir = tempdir().unwrap();
		touch(&dir.path().join("locked/secret.txt"));
		touch(&dir.path().join("open/visible.txt"));
		touch(&dir.path().join("top.txt"));
		let locked = dir.path().join("locked");
		fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
		// Privileged users can still list it.
		let readable = fs::read_dir(&locked).is_ok();

		let listing = enumerate_files(dir.path(), &FilterPolicy::default());
		fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
		if readable {
			return;
		}

		let found: HashSet<PathBuf> = listing.paths().into_iter().collect();
		let expected: HashSet<PathBuf> = [dir.path().join("open/visible.txt"), dir.path().join("top.txt")]
			.into_iter()
			.collect();
		assert_eq!(found, expected);
		assert_eq!(listing.len(), 2);
	}
}
