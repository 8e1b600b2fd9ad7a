use std::time::Instant;

use clap::Parser;
use resume_cli::cli::Cli;
use resume_cli::output::print_result;
use resume_cli::{commands, logging};
use tracing::error;

fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let started = Instant::now();
	let format = cli.format;
	let command = cli.command.name();

	if let Err(err) = commands::dispatch(cli) {
		error!(target = "resume.cli", command, error = %err, "command failed");
		print_result(&commands::failure(command, &err, started), format);
		std::process::exit(1);
	}
}
