//! JSON-file state store.
//!
//! The whole store is one small document, loaded at open and rewritten on
//! every mutation so each `set`/`delete` is durable on return.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::StateStore;
use crate::error::StoreError;

pub const STORE_SCHEMA_VERSION: u32 = 1;

/// On-disk format for a state store file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreFile {
	pub schema: u32,
	#[serde(default)]
	pub entries: BTreeMap<String, String>,
}

impl Default for StoreFile {
	fn default() -> Self {
		Self {
			schema: STORE_SCHEMA_VERSION,
			entries: BTreeMap::new(),
		}
	}
}

/// A state store backed by a JSON file.
#[derive(Debug)]
pub struct FileStore {
	path: PathBuf,
	file: StoreFile,
}

impl FileStore {
	/// Opens the store at `path`.
	///
	/// A missing file is an empty store. An unreadable or unparsable file is
	/// also treated as empty (and replaced on the next write), with a warning.
	pub fn open(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let file = match fs::read_to_string(&path) {
			Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
				warn!(target = "resume.store", path = %path.display(), error = %err, "state store is not valid JSON; starting empty");
				StoreFile::default()
			}),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreFile::default(),
			Err(err) => {
				warn!(target = "resume.store", path = %path.display(), error = %err, "state store unreadable; starting empty");
				StoreFile::default()
			}
		};
		debug!(target = "resume.store", path = %path.display(), entries = file.entries.len(), "state store opened");
		Self { path, file }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn entries(&self) -> &BTreeMap<String, String> {
		&self.file.entries
	}

	fn save(&self) -> Result<(), StoreError> {
		let io_err = |source| StoreError::Io {
			path: self.path.clone(),
			source,
		};
		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() {
				fs::create_dir_all(parent).map_err(io_err)?;
			}
		}
		let json = serde_json::to_string_pretty(&self.file)?;
		fs::write(&self.path, json).map_err(io_err)?;
		Ok(())
	}
}

impl StateStore for FileStore {
	fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.file.entries.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
		if self.file.entries.get(key).is_some_and(|current| current == value) {
			return Ok(());
		}
		self.file.entries.insert(key.to_string(), value.to_string());
		self.save()
	}

	fn delete(&mut self, key: &str) -> Result<(), StoreError> {
		if self.file.entries.remove(key).is_none() {
			return Ok(());
		}
		self.save()
	}

	fn keys(&self) -> Result<Vec<String>, StoreError> {
		Ok(self.file.entries.keys().cloned().collect())
	}
}

#[cfg(test)]
mod tests {
	use tempfile::TempDir;

	use super::*;

	#[test]
	fn missing_file_is_empty_and_not_created_by_reads() {
		let tmp = TempDir::new().unwrap();
		let path = tmp.path().join("nested/state.json");
		let store = FileStore::open(&path);
		assert_eq!(store.get("anything").unwrap(), "");
		assert!(!path.exists());
	}

	#[test]
	fn writes_survive_reopen() {
		let tmp = TempDir::new().unwrap();
		let path = tmp.path().join("nested/state.json");

		let mut store = FileStore::open(&path);
		store.set("currentStep", "step2").unwrap();
		store.set("gone", "soon").unwrap();
		store.delete("gone").unwrap();

		let reopened = FileStore::open(&path);
		assert_eq!(reopened.get("currentStep").unwrap(), "step2");
		assert!(!reopened.contains("gone").unwrap());
	}

	#[test]
	fn file_carries_schema_version() {
		let tmp = TempDir::new().unwrap();
		let path = tmp.path().join("state.json");
		let mut store = FileStore::open(&path);
		store.set("k", "v").unwrap();

		let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
		assert_eq!(raw["schema"], STORE_SCHEMA_VERSION);
		assert_eq!(raw["entries"]["k"], "v");
	}

	#[test]
	fn corrupt_file_starts_empty() {
		let tmp = TempDir::new().unwrap();
		let path = tmp.path().join("state.json");
		fs::write(&path, "{not json").unwrap();

		let mut store = FileStore::open(&path);
		assert!(store.keys().unwrap().is_empty());
		store.set("k", "v").unwrap();
		assert_eq!(FileStore::open(&path).get("k").unwrap(), "v");
	}

	#[test]
	fn write_into_file_path_parent_fails() {
		let tmp = TempDir::new().unwrap();
		let blocker = tmp.path().join("blocker");
		fs::write(&blocker, "file, not dir").unwrap();

		let mut store = FileStore::open(blocker.join("state.json"));
		let err = store.set("k", "v").unwrap_err();
		assert!(matches!(err, StoreError::Io { .. }));
	}
}
