//! Terminal rendering for resume links and codes.

use std::io::{self, Write};

use colored::Colorize;
use resume::CodeDisplay;

/// Draws the content inside a box so it stands out and copies cleanly.
///
/// Content is never wrapped; a resume link broken across lines stops
/// working when pasted.
#[derive(Debug, Clone, Default)]
pub struct FramedText {
	title: Option<String>,
	color: bool,
}

impl FramedText {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn color(mut self, color: bool) -> Self {
		self.color = color;
		self
	}
}

impl CodeDisplay for FramedText {
	fn render(&self, content: &str, target: &mut dyn Write) -> io::Result<()> {
		let title = self.title.as_deref().unwrap_or("");
		let width = content.chars().count().max(title.chars().count() + 2);
		let rule = "─".repeat(width + 2);

		if title.is_empty() {
			writeln!(target, "┌{rule}┐")?;
		} else {
			let label = if self.color { title.bold().to_string() } else { title.to_string() };
			let rest = "─".repeat(width - title.chars().count() - 1);
			writeln!(target, "┌─ {label} {rest}┐")?;
		}

		let padding = " ".repeat(width - content.chars().count());
		let body = if self.color { content.cyan().to_string() } else { content.to_string() };
		writeln!(target, "│ {body}{padding} │")?;
		writeln!(target, "└{rule}┘")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn render(display: &FramedText, content: &str) -> String {
		let mut out = Vec::new();
		display.render(content, &mut out).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[test]
	fn frames_content() {
		let text = render(&FramedText::new(), "ABCDEF");
		assert_eq!(text, "┌────────┐\n│ ABCDEF │\n└────────┘\n");
	}

	#[test]
	fn title_sits_in_the_top_rule() {
		let text = render(&FramedText::new().title("Code"), "ABCDEF");
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines[0], "┌─ Code ─┐");
		assert_eq!(lines[1], "│ ABCDEF │");
		assert_eq!(lines[0].chars().count(), lines[1].chars().count());
		assert_eq!(lines[2].chars().count(), lines[1].chars().count());
	}

	#[test]
	fn short_content_under_long_title() {
		let text = render(&FramedText::new().title("Resume link"), "x");
		let widths: Vec<usize> = text.lines().map(|line| line.chars().count()).collect();
		assert!(widths.windows(2).all(|pair| pair[0] == pair[1]), "{text}");
	}

	#[test]
	fn long_links_are_not_wrapped() {
		let link = format!("https://example.com/#t=v-compressed.{}", "A".repeat(300));
		let text = render(&FramedText::new(), &link);
		assert_eq!(text.lines().count(), 3);
		assert!(text.contains(&link));
	}
}
