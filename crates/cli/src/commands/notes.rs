use super::emit;
use crate::clipboard::CopyOutcome;
use crate::context::CommandContext;
use crate::error::Result;
use crate::output::{NotesData, ResultBuilder};

pub fn run(ctx: &CommandContext, copy: bool) -> Result<()> {
	let builder = ResultBuilder::new("notes");
	let notes = crate::notes::render(&ctx.state().build()?);
	let copied = copy.then(|| ctx.clipboard().copy(&notes));

	let text = match &copied {
		Some(CopyOutcome::Copied { via }) => format!("{notes}\nCopied to clipboard ({via}).\n"),
		Some(CopyOutcome::Manual) => format!("{notes}\nClipboard unavailable; copy the notes above.\n"),
		None => notes.clone(),
	};

	emit(ctx, builder.data(NotesData { notes, copied }).text(text));
	Ok(())
}
