use std::fmt::Write as _;

use resume::{Field, PartialSnapshot, TAG_SEPARATOR, TokenTag};
use tracing::info;

use super::emit;
use crate::cli::ResumeArgs;
use crate::context::CommandContext;
use crate::error::{CliError, Result};
use crate::feedback::branch_feedback;
use crate::output::{ResultBuilder, ResumeData};

/// Where the restored fields came from.
enum Source {
	Token(TokenTag),
	Code,
}

pub fn run(ctx: &CommandContext, args: ResumeArgs) -> Result<()> {
	let builder = ResultBuilder::new("resume");

	let (source, fields) = match (args.code, args.input) {
		(Some(code), _) => (Source::Code, ctx.registry().resolve(&code)?),
		(None, Some(input)) => from_input(ctx, &input)?,
		(None, None) => return Err(CliError::usage("Nothing to resume. Paste a resume link, token or short code.")),
	};

	let mut state = ctx.state();
	let applied = state.apply(&fields)?;
	let snapshot = state.build()?;
	let feedback = branch_feedback(snapshot.get(Field::BranchChoice));
	info!(target = "resume.cli", applied, "progress restored");

	let mut text = String::new();
	let _ = write!(text, "Restored {applied} saved field{}", if applied == 1 { "" } else { "s" });
	match &source {
		Source::Token(tag) => {
			let _ = writeln!(text, " from a {tag} token.");
		}
		Source::Code => {
			let _ = writeln!(text, " from a short code.");
		}
	}
	let step = snapshot.get(Field::CurrentStep);
	let _ = writeln!(text, "Saved place: {}", if step.is_empty() { "step1" } else { step });
	if let Some(line) = feedback {
		let _ = writeln!(text, "{line}");
	}

	let (source, tag) = match source {
		Source::Token(tag) => ("token", Some(tag)),
		Source::Code => ("code", None),
	};
	emit(
		ctx,
		builder
			.data(ResumeData {
				source,
				tag,
				applied,
				snapshot,
				feedback,
			})
			.text(text),
	);
	Ok(())
}

/// Decodes pasted input. A bare short code issued on this device is accepted
/// too, so one prompt serves both.
fn from_input(ctx: &CommandContext, input: &str) -> Result<(Source, PartialSnapshot)> {
	let token = ctx
		.link_parser()?
		.parse_resume_token(input)
		.ok_or_else(|| CliError::usage("Nothing to resume. Paste a resume link, token or short code."))?;

	if !token.as_str().contains(TAG_SEPARATOR) {
		let registry = ctx.registry();
		if registry.contains(token.as_str())? {
			return Ok((Source::Code, registry.resolve(token.as_str())?));
		}
	}

	let (tag, fields) = ctx.decoder().decode_tagged(token.as_str())?;
	Ok((Source::Token(tag), fields))
}
