use std::fmt::Write as _;

use resume::Field;

use super::emit;
use crate::context::CommandContext;
use crate::error::Result;
use crate::feedback::branch_feedback;
use crate::output::{ResultBuilder, ShowData};

pub fn run(ctx: &CommandContext) -> Result<()> {
	let builder = ResultBuilder::new("show");
	let snapshot = ctx.state().build()?;
	let feedback = branch_feedback(snapshot.get(Field::BranchChoice));

	let width = Field::ALL.iter().map(|field| field.key().len()).max().unwrap_or(0);
	let mut text = String::new();
	for (field, value) in snapshot.iter() {
		let shown = if value.is_empty() { "(blank)" } else { value };
		let _ = writeln!(text, "{:width$}  {}", field.key(), shown.replace('\n', "\n  "));
	}
	if let Some(line) = feedback {
		let _ = writeln!(text, "\n{line}");
	}

	emit(
		ctx,
		builder
			.data(ShowData {
				store: ctx.store_path.clone(),
				snapshot,
				feedback,
			})
			.text(text),
	);
	Ok(())
}
