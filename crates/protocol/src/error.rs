use thiserror::Error;

/// Errors raised when parsing protocol names from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("unknown field `{0}` (expected one of: {names})", names = crate::Field::names().join(", "))]
	UnknownField(String),

	#[error("unknown token format `{0}` (expected plain, compressed or lz)")]
	UnknownFormat(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_field_lists_the_valid_names() {
		let message = ParseError::UnknownField("theme".into()).to_string();
		assert_eq!(
			message,
			"unknown field `theme` (expected one of: p1_original, p1_revised, p2_original, branch_choice, currentStep)"
		);
	}
}
