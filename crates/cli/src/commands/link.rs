use resume::{CodeDisplay, Token};

use super::emit;
use crate::context::CommandContext;
use crate::display::FramedText;
use crate::error::Result;
use crate::output::{LinkData, ResultBuilder};

pub fn run(ctx: &CommandContext, token: &str, base: Option<&str>) -> Result<()> {
	let builder = ResultBuilder::new("link");
	let token = Token::from(token.trim());

	// Refuse to publish a link that would not resume.
	let (tag, _) = ctx.decoder().decode_tagged(token.as_str())?;
	let url = ctx.link(base)?.build_resume_url(&token).to_string();

	let mut framed = Vec::new();
	FramedText::new().title("Resume link").color(ctx.color()).render(&url, &mut framed)?;

	emit(
		ctx,
		builder
			.data(LinkData { url, tag })
			.text(String::from_utf8_lossy(&framed).into_owned()),
	);
	Ok(())
}
