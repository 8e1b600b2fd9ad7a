use std::fmt::Write as _;

use resume::{CodeDisplay, TokenCodec, TokenTag};

use super::emit;
use crate::cli::SaveArgs;
use crate::clipboard::CopyOutcome;
use crate::context::CommandContext;
use crate::display::FramedText;
use crate::error::Result;
use crate::output::{DiagnosticLevel, ResultBuilder, SaveData};

pub fn run(ctx: &CommandContext, args: SaveArgs) -> Result<()> {
	let mut builder = ResultBuilder::new("save");
	let snapshot = ctx.state().build()?;
	TokenCodec::check_size(&snapshot)?;
	if snapshot.is_blank() {
		builder = builder.diagnostic(DiagnosticLevel::Info, "Nothing has been saved yet; the token restores an empty journal.");
	}

	let token = ctx.codec(args.token_format).encode(&snapshot);
	let tag = token.tag().unwrap_or(TokenTag::Plain);
	let link = if args.link { Some(ctx.link(None)?.build_resume_url(&token).to_string()) } else { None };
	let code = if args.code { Some(ctx.registry().issue(&snapshot)?) } else { None };
	let copied = args.copy.then(|| ctx.clipboard().copy(link.as_deref().unwrap_or(token.as_str())));

	let mut text = String::new();
	let _ = writeln!(text, "Resume token ({tag}, {} chars):", token.as_str().len());
	let _ = writeln!(text, "{token}");
	if let Some(url) = &link {
		let mut framed = Vec::new();
		FramedText::new().title("Resume link").color(ctx.color()).render(url, &mut framed)?;
		let _ = write!(text, "\n{}", String::from_utf8_lossy(&framed));
	}
	if let Some(code) = &code {
		let _ = writeln!(text, "\nShort code (this device only): {code}");
	}
	match &copied {
		Some(CopyOutcome::Copied { via }) => {
			let _ = writeln!(text, "\nCopied to clipboard ({via}).");
		}
		Some(CopyOutcome::Manual) => {
			let _ = writeln!(text, "\nClipboard unavailable; copy the {} above.", if link.is_some() { "link" } else { "token" });
		}
		None => {}
	}

	emit(
		ctx,
		builder
			.data(SaveData {
				length: token.as_str().len(),
				token: token.into_string(),
				tag,
				link,
				code,
				copied,
			})
			.text(text),
	);
	Ok(())
}
