use resume::Field;

use super::emit;
use crate::context::CommandContext;
use crate::error::Result;
use crate::feedback::branch_feedback;
use crate::output::{ResultBuilder, SetData};

pub fn run(ctx: &CommandContext, field: Field, value: &str) -> Result<()> {
	let builder = ResultBuilder::new("set");
	ctx.state().set_field(field, value)?;

	let feedback = match field {
		Field::BranchChoice => branch_feedback(value),
		_ => None,
	};
	let text = feedback.map_or_else(|| format!("Saved {field}."), str::to_string);

	emit(
		ctx,
		builder
			.data(SetData {
				field: field.key().to_string(),
				value: value.to_string(),
				feedback,
			})
			.text(text),
	);
	Ok(())
}
