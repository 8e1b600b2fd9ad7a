//! Plain-text notes export of the saved fields.

use std::fmt::Write as _;

use resume::{Field, Snapshot};

const HEADING: &str = "Eco-Responders Notes (Prototype)";
const DEFAULT_STEP: &str = "step1";

/// Section label for each exported field, in export order.
const SECTIONS: [(Field, &str, &str); 4] = [
	(Field::P1Original, "Step 1 - First Thinking:", "(blank)"),
	(Field::P1Revised, "Step 1 - Revised Thinking (optional):", "(blank)"),
	(Field::P2Original, "Step 2 - Evidence I want:", "(blank)"),
	(Field::BranchChoice, "Decision Track:", "(not selected)"),
];

/// Formats the snapshot as notes suitable for pasting into a journal.
pub fn render(snapshot: &Snapshot) -> String {
	let step = non_empty(snapshot.get(Field::CurrentStep)).unwrap_or(DEFAULT_STEP);

	let mut out = String::new();
	let _ = write!(out, "{HEADING}\n\nSaved Place:\n{step}\n");
	for (field, label, placeholder) in SECTIONS {
		let value = non_empty(snapshot.get(field)).unwrap_or(placeholder);
		let _ = write!(out, "\n{label}\n{value}\n");
	}
	out
}

fn non_empty(value: &str) -> Option<&str> {
	if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_snapshot_uses_placeholders() {
		let notes = render(&Snapshot::new());
		assert_eq!(
			notes,
			"Eco-Responders Notes (Prototype)\n\nSaved Place:\nstep1\n\n\
			 Step 1 - First Thinking:\n(blank)\n\n\
			 Step 1 - Revised Thinking (optional):\n(blank)\n\n\
			 Step 2 - Evidence I want:\n(blank)\n\n\
			 Decision Track:\n(not selected)\n"
		);
	}

	#[test]
	fn filled_fields_are_exported_verbatim() {
		let snapshot = Snapshot::new()
			.with(Field::P1Original, "dead fish along the shore\nsecond line")
			.with(Field::BranchChoice, "habitat")
			.with(Field::CurrentStep, "step3");
		let notes = render(&snapshot);

		assert!(notes.contains("Saved Place:\nstep3\n"));
		assert!(notes.contains("Step 1 - First Thinking:\ndead fish along the shore\nsecond line\n"));
		assert!(notes.contains("Decision Track:\nhabitat\n"));
		assert!(notes.contains("Step 2 - Evidence I want:\n(blank)\n"));
	}
}
