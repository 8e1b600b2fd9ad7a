//! Persistent keyed string storage.
//!
//! The core never reaches a global store: every component is handed a
//! [`StateStore`]. Two backends live here, [`MemoryStore`] for tests and
//! ephemeral sessions and [`FileStore`] for a JSON document on disk. Browser
//! storage is provided by the web binding.

mod file;
mod memory;

pub use file::{FileStore, STORE_SCHEMA_VERSION, StoreFile};
pub use memory::MemoryStore;

use crate::error::StoreError;

/// Durable, synchronous key/value store scoped to one device or origin.
///
/// All writes are independent single-key operations.
pub trait StateStore {
	/// Returns `None` when the key is absent.
	fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

	/// Removing an absent key is not an error.
	fn delete(&mut self, key: &str) -> Result<(), StoreError>;

	/// All keys currently present, in no particular order.
	fn keys(&self) -> Result<Vec<String>, StoreError>;

	/// Reads a key, defaulting to the empty string.
	fn get(&self, key: &str) -> Result<String, StoreError> {
		Ok(self.read(key)?.unwrap_or_default())
	}

	fn contains(&self, key: &str) -> Result<bool, StoreError> {
		Ok(self.read(key)?.is_some())
	}
}

impl<S: StateStore + ?Sized> StateStore for &mut S {
	fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
		(**self).read(key)
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
		(**self).set(key, value)
	}

	fn delete(&mut self, key: &str) -> Result<(), StoreError> {
		(**self).delete(key)
	}

	fn keys(&self) -> Result<Vec<String>, StoreError> {
		(**self).keys()
	}
}

impl<S: StateStore + ?Sized> StateStore for Box<S> {
	fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
		(**self).read(key)
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
		(**self).set(key, value)
	}

	fn delete(&mut self, key: &str) -> Result<(), StoreError> {
		(**self).delete(key)
	}

	fn keys(&self) -> Result<Vec<String>, StoreError> {
		(**self).keys()
	}
}
