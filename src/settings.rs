//! Resolve command-line values into the settings a session runs with.

use std::path::PathBuf;

use foldermap::{FilterPolicy, OutputFormat, SessionOptions};
use thiserror::Error;

use crate::cli::CliArgs;

/// Invalid values supplied on the command line or through the environment.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
	#[error("root '{}' is not a valid directory", path.display())]
	InvalidRoot { path: PathBuf },
}

/// Application-ready settings derived from user input and defaults.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
	pub(crate) root: Option<PathBuf>,
	pub(crate) output: OutputFormat,
	pub(crate) show_banner: bool,
	pub(crate) verbosity: u8,
}

impl Settings {
	pub(crate) fn resolve(cli: &CliArgs) -> Result<Self, SettingsError> {
		if let Some(root) = &cli.root {
			if !root.is_dir() {
				return Err(SettingsError::InvalidRoot { path: root.clone() });
			}
		}

		Ok(Self {
			root: cli.root.clone(),
			output: cli.output,
			show_banner: !cli.no_banner,
			verbosity: cli.verbose,
		})
	}

	pub(crate) fn session_options(&self) -> SessionOptions {
		SessionOptions {
			root: self.root.clone(),
			format: self.output,
			show_banner: self.show_banner,
			policy: FilterPolicy::default(),
			current_dir: None,
		}
	}

	/// Human readable summary of the effective settings.
	pub(crate) fn summary(&self) -> String {
		let root = self
			.root
			.as_ref()
			.map_or_else(|| "(prompt)".to_string(), |root| root.display().to_string());
		format!(
			"Effective settings:\n  root: {root}\n  output: {}\n  banner: {}\n  verbosity: {}",
			self.output.as_str(),
			self.show_banner,
			self.verbosity
		)
	}
}
