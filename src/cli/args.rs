use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};
use foldermap::OutputFormat;

use super::styles::{cli_styles, long_version};

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "foldermap",
	version,
	long_version = long_version(),
	about = "Map a folder, pick files by number and search them for word combinations",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `foldermap` binary.
pub(crate) struct CliArgs {
	#[arg(
		short = 'r',
		long,
		value_name = "PATH",
		env = "FOLDERMAP_ROOT",
		help = "Map this folder without asking (default: prompt for one)"
	)]
	pub(crate) root: Option<PathBuf>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		env = "FOLDERMAP_OUTPUT",
		default_value_t = OutputFormat::Plain,
		help = "Format used to print search results"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "no-banner",
		help = "Skip the welcome banner (default: disabled)"
	)]
	pub(crate) no_banner: bool,
	#[arg(
		long = "print-config",
		help = "Print the effective settings before starting (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short,
		long,
		action = ArgAction::Count,
		help = "Increase log verbosity on stderr; repeat for more detail"
	)]
	pub(crate) verbose: u8,
}
