//! Clipboard access through the platform clipboard.
//!
//! Copying is a convenience: when the clipboard is unavailable or refuses the
//! text, the caller shows the text for manual copying instead.

use serde::Serialize;
use tracing::{debug, warn};

/// What happened to a copy request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CopyOutcome {
	/// The text is on the clipboard.
	Copied { via: String },
	/// The user has to copy the text themselves.
	Manual,
}

pub trait Clipboard {
	fn copy(&self, text: &str) -> CopyOutcome;
}

/// Backend name reported in [`CopyOutcome::Copied`].
const SYSTEM_VIA: &str = "system";

/// The OS clipboard (X11/Wayland, macOS pasteboard, Windows clipboard).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
	fn copy(&self, text: &str) -> CopyOutcome {
		let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
		outcome(result)
	}
}

fn outcome(result: Result<(), arboard::Error>) -> CopyOutcome {
	match result {
		Ok(()) => {
			debug!(target = "resume.cli", via = SYSTEM_VIA, "copied to clipboard");
			CopyOutcome::Copied { via: SYSTEM_VIA.to_string() }
		}
		Err(err) => {
			warn!(target = "resume.cli", error = %err, "clipboard copy failed");
			CopyOutcome::Manual
		}
	}
}

/// Never copies; used when the clipboard should not be touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
	fn copy(&self, _text: &str) -> CopyOutcome {
		CopyOutcome::Manual
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn outcome_serializes_with_status_tag() {
		let copied = serde_json::to_value(CopyOutcome::Copied { via: "system".into() }).unwrap();
		assert_eq!(copied, serde_json::json!({ "status": "copied", "via": "system" }));

		let manual = serde_json::to_value(CopyOutcome::Manual).unwrap();
		assert_eq!(manual, serde_json::json!({ "status": "manual" }));
	}

	#[test]
	fn clipboard_errors_fall_back_to_manual() {
		assert_eq!(outcome(Err(arboard::Error::ClipboardNotSupported)), CopyOutcome::Manual);
		assert_eq!(outcome(Err(arboard::Error::ContentNotAvailable)), CopyOutcome::Manual);
		assert_eq!(outcome(Ok(())), CopyOutcome::Copied { via: "system".into() });
	}

	#[test]
	fn no_clipboard_is_manual() {
		assert_eq!(NoClipboard.copy("v-plain.e30"), CopyOutcome::Manual);
	}
}
