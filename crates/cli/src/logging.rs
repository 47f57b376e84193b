use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Target of the fatal diagnostic printed before a non-zero exit.
pub const FAILURE_TARGET: &str = "snipfence::failure";

/// Installs the global subscriber. `RUST_LOG` wins over `-v` when set.
///
/// Logs go to stderr so the report on stdout stays pipeable. Error events on
/// [`FAILURE_TARGET`] are always enabled, whatever `RUST_LOG` says.
pub fn init_logging(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_level))
		.add_directive(format!("{FAILURE_TARGET}=error").parse().expect("failure directive should parse"));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(std::io::stderr().is_terminal())
		.with_target(verbose > 1)
		.try_init();
}
