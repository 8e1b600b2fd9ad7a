use std::fmt::Write as _;

use super::emit;
use crate::context::CommandContext;
use crate::error::{CliError, Result};
use crate::output::{InspectData, ResultBuilder};

pub fn run(ctx: &CommandContext, input: &str) -> Result<()> {
	let builder = ResultBuilder::new("inspect");
	let token = ctx
		.link_parser()?
		.parse_resume_token(input)
		.ok_or_else(|| CliError::usage("Nothing to inspect. Paste a resume link or token."))?;
	let (tag, fields) = ctx.decoder().decode_tagged(token.as_str())?;

	let mut text = String::new();
	let _ = writeln!(text, "Format: {tag}{}", if tag.is_legacy() { " (legacy)" } else { "" });
	if fields.is_empty() {
		let _ = writeln!(text, "No saved fields.");
	}
	for (field, value) in fields.iter() {
		let _ = writeln!(text, "{}: {value:?}", field.key());
	}

	emit(
		ctx,
		builder
			.data(InspectData {
				legacy: tag.is_legacy(),
				tag,
				fields,
			})
			.text(text),
	);
	Ok(())
}
