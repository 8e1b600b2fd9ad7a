//! Confirmation lines for the decision track.

/// Feedback for a saved `branch_choice`; `None` when nothing is selected.
pub fn branch_feedback(choice: &str) -> Option<&'static str> {
	match choice.trim() {
		"" => None,
		"weather" => Some("Weather track selected."),
		"human" => Some("Human-cause track selected."),
		"habitat" => Some("Habitat recovery track selected."),
		_ => Some("Choice saved."),
	}
}
