use super::emit;
use crate::context::CommandContext;
use crate::error::{CliError, Result};
use crate::output::{ResetData, ResultBuilder};

pub fn run(ctx: &CommandContext, yes: bool) -> Result<()> {
	if !yes {
		return Err(CliError::usage("This forgets every saved field and short code on this device. Run again with --yes to confirm."));
	}

	let builder = ResultBuilder::new("reset");
	let removed = ctx.state().reset()?;
	emit(
		ctx,
		builder
			.data(ResetData { removed })
			.text(format!("Cleared {removed} saved entries.")),
	);
	Ok(())
}
