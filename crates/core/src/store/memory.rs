use std::collections::BTreeMap;

use super::StateStore;
use crate::error::StoreError;

/// In-memory store; never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
	entries: BTreeMap<String, String>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn entries(&self) -> &BTreeMap<String, String> {
		&self.entries
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
		}
	}
}

impl StateStore for MemoryStore {
	fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.entries.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
		self.entries.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn delete(&mut self, key: &str) -> Result<(), StoreError> {
		self.entries.remove(key);
		Ok(())
	}

	fn keys(&self) -> Result<Vec<String>, StoreError> {
		Ok(self.entries.keys().cloned().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn get_defaults_to_empty() {
		let store = MemoryStore::new();
		assert_eq!(store.get("missing").unwrap(), "");
		assert!(!store.contains("missing").unwrap());
	}

	#[test]
	fn set_overwrites_and_delete_is_idempotent() {
		let mut store = MemoryStore::new();
		store.set("k", "one").unwrap();
		store.set("k", "two").unwrap();
		assert_eq!(store.read("k").unwrap().as_deref(), Some("two"));

		store.delete("k").unwrap();
		store.delete("k").unwrap();
		assert!(store.is_empty());
	}

	#[test]
	fn empty_value_is_present() {
		let mut store = MemoryStore::new();
		store.set("k", "").unwrap();
		assert!(store.contains("k").unwrap());
		assert_eq!(store.keys().unwrap(), vec!["k".to_string()]);
	}

	#[test]
	fn works_through_mutable_reference() {
		let mut store = MemoryStore::new();
		{
			let mut by_ref = &mut store;
			StateStore::set(&mut by_ref, "k", "v").unwrap();
		}
		assert_eq!(store.get("k").unwrap(), "v");
	}
}
