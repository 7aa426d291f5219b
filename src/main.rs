mod cli;
mod settings;

use std::io;

use anyhow::{Context, Result};
use cli::parse_cli;
use foldermap::{Session, SessionEnd, logging};
use settings::Settings;

fn main() -> Result<()> {
	let cli = parse_cli();
	let settings = Settings::resolve(&cli)?;
	logging::initialize(settings.verbosity);

	if cli.print_config {
		println!("{}", settings.summary());
	}

	run_session(&settings)
}

/// Run the interactive session on the process terminal.
fn run_session(settings: &Settings) -> Result<()> {
	let stdin = io::stdin();
	let stdout = io::stdout();
	let mut session = Session::new(stdin.lock(), stdout.lock(), settings.session_options());

	let end = session.run().context("interactive session failed")?;
	tracing::debug!(?end, "session finished");

	if end == SessionEnd::Quit {
		eprintln!("Quitting...");
	}
	Ok(())
}
