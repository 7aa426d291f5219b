use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use foldermap::{DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_FILES};

/// Produce the full version banner including the fixed ignore lists.
pub(super) fn long_version() -> &'static str {
	let mut details = format!("foldermap {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "ignored directories: {}", DEFAULT_IGNORED_DIRS.join(", "));
	let _ = writeln!(details, "ignored files: {}", DEFAULT_IGNORED_FILES.join(", "));
	let _ = writeln!(details, "names starting with '.' are always ignored");

	Box::leak(details.into_boxed_str())
}

/// Help colours: blue section headings, magenta flags, dimmed placeholders.
pub(super) fn cli_styles() -> Styles {
	let heading = AnsiColor::Blue.on_default().effects(Effects::BOLD);
	Styles::styled()
		.header(heading.effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(heading)
		.literal(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::BrightBlack.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.invalid(AnsiColor::Red.on_default())
		.valid(AnsiColor::Blue.on_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn long_version_lists_ignored_names() {
		let text = long_version();
		assert!(text.starts_with("foldermap "));
		assert!(text.contains("node_modules"));
		assert!(text.contains("yarn.lock"));
	}

	#[test]
	fn help_styles_use_the_blue_and_magenta_palette() {
		let styles = cli_styles();
		assert_eq!(
			*styles.get_usage(),
			AnsiColor::Blue.on_default().effects(Effects::BOLD)
		);
		assert_eq!(
			*styles.get_header(),
			AnsiColor::Blue
				.on_default()
				.effects(Effects::BOLD | Effects::UNDERLINE)
		);
		assert_eq!(
			*styles.get_literal(),
			AnsiColor::Magenta.on_default().effects(Effects::BOLD)
		);
		assert_eq!(*styles.get_placeholder(), AnsiColor::BrightBlack.on_default());
	}
}
