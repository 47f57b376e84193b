use clap::Parser;
use snipfence_cli::{app, cli::Cli, logging};
use tracing::error;

fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if let Err(err) = app::execute(&cli) {
		error!(target: logging::FAILURE_TARGET, error = %err, "snippet conversion failed");
		std::process::exit(1);
	}
}
