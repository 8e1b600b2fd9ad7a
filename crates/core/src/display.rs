//! Rendering a link or code for the user to carry to another device.

use std::io::{self, Write};

/// Presents `content` (a resume link or token) in some scannable or readable
/// form. View layers supply the implementation; a QR renderer and a framed
/// terminal block are both valid.
pub trait CodeDisplay {
	fn render(&self, content: &str, target: &mut dyn Write) -> io::Result<()>;
}

/// Writes the content on its own line, unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDisplay;

impl CodeDisplay for PlainDisplay {
	fn render(&self, content: &str, target: &mut dyn Write) -> io::Result<()> {
		writeln!(target, "{content}")
	}
}

impl<D: CodeDisplay + ?Sized> CodeDisplay for &D {
	fn render(&self, content: &str, target: &mut dyn Write) -> io::Result<()> {
		(**self).render(content, target)
	}
}

impl<D: CodeDisplay + ?Sized> CodeDisplay for Box<D> {
	fn render(&self, content: &str, target: &mut dyn Write) -> io::Result<()> {
		(**self).render(content, target)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_display_writes_one_line() {
		let mut out = Vec::new();
		let display: Box<dyn CodeDisplay> = Box::new(PlainDisplay);
		display.render("https://example.com/#t=v-plain.e30", &mut out).unwrap();
		assert_eq!(out, b"https://example.com/#t=v-plain.e30\n");
	}
}
