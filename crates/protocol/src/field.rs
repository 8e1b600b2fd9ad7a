use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Number of fields in a snapshot.
pub const FIELD_COUNT: usize = 5;

/// The closed set of saved fields, in canonical order.
///
/// The wire name doubles as the state store key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
	#[serde(rename = "p1_original")]
	P1Original,
	#[serde(rename = "p1_revised")]
	P1Revised,
	#[serde(rename = "p2_original")]
	P2Original,
	#[serde(rename = "branch_choice")]
	BranchChoice,
	#[serde(rename = "currentStep")]
	CurrentStep,
}

impl Field {
	/// All fields in canonical serialization order.
	pub const ALL: [Field; FIELD_COUNT] = [
		Field::P1Original,
		Field::P1Revised,
		Field::P2Original,
		Field::BranchChoice,
		Field::CurrentStep,
	];

	/// Wire name and store key.
	pub const fn key(self) -> &'static str {
		match self {
			Field::P1Original => "p1_original",
			Field::P1Revised => "p1_revised",
			Field::P2Original => "p2_original",
			Field::BranchChoice => "branch_choice",
			Field::CurrentStep => "currentStep",
		}
	}

	/// Position in [`Field::ALL`].
	pub const fn index(self) -> usize {
		self as usize
	}

	/// Looks up a field by its exact wire name.
	pub fn parse(name: &str) -> Option<Field> {
		Field::ALL.into_iter().find(|field| field.key() == name)
	}

	pub fn names() -> Vec<&'static str> {
		Field::ALL.iter().map(|f| f.key()).collect()
	}
}

impl FromStr for Field {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Field::parse(s).ok_or_else(|| ParseError::UnknownField(s.to_string()))
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn index_matches_canonical_order() {
		for (i, field) in Field::ALL.iter().enumerate() {
			assert_eq!(field.index(), i);
		}
	}

	#[test]
	fn parse_accepts_only_wire_names() {
		assert_eq!(Field::parse("currentStep"), Some(Field::CurrentStep));
		assert_eq!(Field::parse("branch_choice"), Some(Field::BranchChoice));
		assert_eq!(Field::parse("current_step"), None);
		assert_eq!(Field::parse("P1Original"), None);
		assert_eq!(Field::parse(""), None);
	}

	#[test]
	fn from_str_reports_known_names() {
		let err = "nope".parse::<Field>().unwrap_err();
		let message = err.to_string();
		assert!(message.contains("nope"));
		assert!(message.contains("p1_original"));
	}

	#[test]
	fn serde_uses_wire_names() {
		let json = serde_json::to_string(&Field::CurrentStep).unwrap();
		assert_eq!(json, "\"currentStep\"");
		let back: Field = serde_json::from_str("\"p2_original\"").unwrap();
		assert_eq!(back, Field::P2Original);
	}
}
