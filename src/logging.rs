//! Diagnostics go to stderr so they never mix with the session on stdout.

use tracing_subscriber::EnvFilter;

/// Map the number of `-v` flags to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Install the global subscriber. `RUST_LOG` takes precedence over
/// `verbosity`. Calling this twice keeps the first subscriber.
pub fn initialize(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
