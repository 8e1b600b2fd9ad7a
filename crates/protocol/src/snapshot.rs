//! Snapshot records: the fixed-shape saved progress.
//!
//! [`Snapshot`] always carries every field (empty string means unset).
//! [`PartialSnapshot`] is what a decoded token or a foreign JSON object yields:
//! fields may be absent, and only string values survive deserialization.

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::field::{FIELD_COUNT, Field};

/// A complete snapshot with one value per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
	values: [String; FIELD_COUNT],
}

impl Snapshot {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, field: Field) -> &str {
		&self.values[field.index()]
	}

	pub fn set(&mut self, field: Field, value: impl Into<String>) {
		self.values[field.index()] = value.into();
	}

	/// Builder-style [`set`](Self::set).
	pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
		self.set(field, value);
		self
	}

	/// Iterates fields in canonical order.
	pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
		Field::ALL.into_iter().map(move |field| (field, self.get(field)))
	}

	/// Returns true when every field is unset.
	pub fn is_blank(&self) -> bool {
		self.values.iter().all(String::is_empty)
	}

	/// Compact JSON object in canonical field order.
	///
	/// Byte-identical to `serde_json::to_string(self)` but infallible.
	pub fn to_canonical_json(&self) -> String {
		let members: Vec<String> = self
			.iter()
			.map(|(field, value)| format!("{}:{}", Value::from(field.key()), Value::from(value)))
			.collect();
		format!("{{{}}}", members.join(","))
	}
}

impl Serialize for Snapshot {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
		for (field, value) in self.iter() {
			map.serialize_entry(field.key(), value)?;
		}
		map.end()
	}
}

impl<'de> Deserialize<'de> for Snapshot {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		PartialSnapshot::deserialize(deserializer).map(PartialSnapshot::into_snapshot)
	}
}

/// A snapshot whose fields may be absent.
///
/// Applying a partial snapshot only touches the fields it carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialSnapshot {
	values: [Option<String>; FIELD_COUNT],
}

impl PartialSnapshot {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, field: Field) -> Option<&str> {
		self.values[field.index()].as_deref()
	}

	pub fn set(&mut self, field: Field, value: impl Into<String>) {
		self.values[field.index()] = Some(value.into());
	}

	pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
		self.set(field, value);
		self
	}

	/// Iterates present fields in canonical order.
	pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
		Field::ALL
			.into_iter()
			.filter_map(move |field| self.get(field).map(|value| (field, value)))
	}

	pub fn len(&self) -> usize {
		self.values.iter().filter(|v| v.is_some()).count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns true when every field is present.
	pub fn is_complete(&self) -> bool {
		self.values.iter().all(Option::is_some)
	}

	/// Fills absent fields with the empty string.
	pub fn into_snapshot(self) -> Snapshot {
		Snapshot {
			values: self.values.map(Option::unwrap_or_default),
		}
	}

	/// Picks the known fields with string values out of a JSON object.
	///
	/// Unknown keys and non-string values are dropped.
	pub fn from_object(object: &Map<String, Value>) -> Self {
		let mut partial = Self::default();
		for field in Field::ALL {
			if let Some(Value::String(value)) = object.get(field.key()) {
				partial.set(field, value.as_str());
			}
		}
		partial
	}
}

impl From<Snapshot> for PartialSnapshot {
	fn from(snapshot: Snapshot) -> Self {
		Self {
			values: snapshot.values.map(Some),
		}
	}
}

impl Serialize for PartialSnapshot {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (field, value) in self.iter() {
			map.serialize_entry(field.key(), value)?;
		}
		map.end()
	}
}

impl<'de> Deserialize<'de> for PartialSnapshot {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let object = Map::<String, Value>::deserialize(deserializer)?;
		Ok(Self::from_object(&object))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Snapshot {
		Snapshot::new()
			.with(Field::P1Original, "first")
			.with(Field::BranchChoice, "weather")
			.with(Field::CurrentStep, "step3")
	}

	#[test]
	fn snapshot_serializes_every_field_in_canonical_order() {
		let json = serde_json::to_string(&sample()).unwrap();
		assert_eq!(
			json,
			r#"{"p1_original":"first","p1_revised":"","p2_original":"","branch_choice":"weather","currentStep":"step3"}"#
		);
	}

	#[test]
	fn canonical_json_matches_serde_output() {
		let snapshot = sample()
			.with(Field::P1Revised, "quote \" backslash \\ newline \n tab \t")
			.with(Field::P2Original, "föhn 🌧️ \u{1}");
		assert_eq!(snapshot.to_canonical_json(), serde_json::to_string(&snapshot).unwrap());
		assert_eq!(Snapshot::new().to_canonical_json(), serde_json::to_string(&Snapshot::new()).unwrap());
	}

	#[test]
	fn partial_serializes_only_present_fields() {
		let partial = PartialSnapshot::new().with(Field::CurrentStep, "step2");
		assert_eq!(serde_json::to_string(&partial).unwrap(), r#"{"currentStep":"step2"}"#);
	}

	#[test]
	fn partial_deserialize_filters_unknown_and_non_string() {
		let json = r#"{"p1_original":"kept","p1_revised":42,"branch_choice":null,"extra":"dropped","currentStep":["x"]}"#;
		let partial: PartialSnapshot = serde_json::from_str(json).unwrap();
		assert_eq!(partial.len(), 1);
		assert_eq!(partial.get(Field::P1Original), Some("kept"));
		assert_eq!(partial.get(Field::P1Revised), None);
		assert_eq!(partial.get(Field::BranchChoice), None);
		assert_eq!(partial.get(Field::CurrentStep), None);
	}

	#[test]
	fn snapshot_deserialize_defaults_missing_fields() {
		let snapshot: Snapshot = serde_json::from_str(r#"{"branch_choice":"human"}"#).unwrap();
		assert_eq!(snapshot.get(Field::BranchChoice), "human");
		assert_eq!(snapshot.get(Field::P1Original), "");
	}

	#[test]
	fn conversions_preserve_values() {
		let partial = PartialSnapshot::from(sample());
		assert!(partial.is_complete());
		assert_eq!(partial.clone().into_snapshot(), sample());
		assert_eq!(partial.get(Field::P1Revised), Some(""));
	}

	#[test]
	fn blank_snapshot() {
		assert!(Snapshot::new().is_blank());
		assert!(!sample().is_blank());
	}
}
