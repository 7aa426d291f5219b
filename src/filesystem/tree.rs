use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{FilterPolicy, entry_is_dir, error_path, is_loop, policy_walker};

const INDENT: &str = "  ";

/// A directory line held back until its listing is known to be readable.
struct PendingDir {
	path: PathBuf,
	line: String,
}

/// Write an indented tree of `root` to `out`.
///
/// Each directory prints its name followed by `/`, then its subdirectories
/// (recursively), then its files. Both groups are filtered through `policy`
/// and sorted by name. Directory symlinks are followed, except those leading
/// back into an ancestor. A directory that cannot be listed is left out along
/// with everything below it.
pub fn print_tree<W: Write>(root: &Path, policy: &FilterPolicy, out: &mut W) -> io::Result<()> {
	let walker = policy_walker(root, policy)
		.follow_links(true)
		.sort_by_file_path(|a, b| (!a.is_dir(), a.file_name()).cmp(&(!b.is_dir(), b.file_name())))
		.build();

	let mut pending: Option<PendingDir> = None;
	for result in walker {
		match result {
			Ok(entry) => {
				flush_pending(&mut pending, out)?;
				let depth = entry.depth();
				if entry_is_dir(&entry) {
					let label = if depth == 0 {
						dir_label(root)
					} else {
						entry.file_name().to_string_lossy()
					};
					pending = Some(PendingDir {
						line: format!("{}{label}/", INDENT.repeat(depth)),
						path: entry.path().to_path_buf(),
					});
				} else if depth > 0 {
					writeln!(out, "{}{}", INDENT.repeat(depth), entry.file_name().to_string_lossy())?;
				}
			}
			Err(err) => {
				let path = error_path(&err);
				// The listing of the directory just announced failed.
				if pending.as_ref().is_some_and(|dir| path == Some(dir.path.as_path())) {
					tracing::debug!(error = %err, "skipping unreadable subtree");
					pending = None;
					continue;
				}
				flush_pending(&mut pending, out)?;

				match path.and_then(|path| dangling_link_depth(root, path, &err)) {
					Some((name, depth)) if !policy.is_ignored_file(name) => {
						writeln!(out, "{}{}", INDENT.repeat(depth), name.to_string_lossy())?;
					}
					Some(_) => {}
					None => tracing::debug!(error = %err, "skipping entry"),
				}
			}
		}
	}

	flush_pending(&mut pending, out)
}

fn flush_pending<W: Write>(pending: &mut Option<PendingDir>, out: &mut W) -> io::Result<()> {
	if let Some(dir) = pending.take() {
		writeln!(out, "{}", dir.line)?;
	}
	Ok(())
}

/// A link below `root` whose target is missing is shown as a plain file.
fn dangling_link_depth<'p>(
	root: &Path,
	path: &'p Path,
	err: &ignore::Error,
) -> Option<(&'p std::ffi::OsStr, usize)> {
	if is_loop(err) {
		return None;
	}
	let depth = path.strip_prefix(root).ok()?.components().count();
	let is_link = fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink());
	if depth == 0 || !is_link || path.exists() {
		return None;
	}
	Some((path.file_name()?, depth))
}

/// Render the tree of `root` into a string.
pub fn render_tree(root: &Path, policy: &FilterPolicy) -> String {
	let mut buffer = Vec::new();
	// Writing into a Vec cannot fail.
	let _ = print_tree(root, policy, &mut buffer);
	String::from_utf8_lossy(&buffer).into_owned()
}

fn dir_label(path: &Path) -> Cow<'_, str> {
	match path.file_name() {
		Some(name) => name.to_string_lossy(),
		None if path.parent().is_none() => Cow::Borrowed(""),
		None => Cow::Owned(path.display().to_string()),
	}
}
