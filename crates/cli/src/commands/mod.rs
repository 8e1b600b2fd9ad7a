mod inspect;
mod link;
mod notes;
mod reset;
mod restore;
mod save;
mod set;
mod show;

use std::time::Instant;

use serde::Serialize;
use serde_json::json;

use crate::cli::{Cli, Commands};
use crate::context::CommandContext;
use crate::error::{CliError, Result};
use crate::output::{CommandResult, ResultBuilder, print_result};

pub fn dispatch(cli: Cli) -> Result<()> {
	let ctx = CommandContext::new(&cli)?;

	match cli.command {
		Commands::Set { field, value } => set::run(&ctx, field, &value),
		Commands::Show => show::run(&ctx),
		Commands::Save(args) => save::run(&ctx, args),
		Commands::Resume(args) => restore::run(&ctx, args),
		Commands::Inspect { input } => inspect::run(&ctx, &input),
		Commands::Link { token, base } => link::run(&ctx, &token, base.as_deref()),
		Commands::Notes { copy } => notes::run(&ctx, copy),
		Commands::Reset { yes } => reset::run(&ctx, yes),
	}
}

/// Print a finished result in the context's format.
fn emit<T: Serialize>(ctx: &CommandContext, builder: ResultBuilder<T>) {
	print_result(&builder.build(), ctx.format);
}

/// Failure envelope for `command`.
pub fn failure(command: &str, err: &CliError, started: Instant) -> CommandResult<()> {
	let builder = ResultBuilder::started(command, started);
	let builder = match err.decode_kind() {
		Some(kind) => builder.error_with_details(err.code(), err.to_string(), json!({ "kind": kind })),
		None => builder.error(err.code(), err.to_string()),
	};
	builder.build()
}
