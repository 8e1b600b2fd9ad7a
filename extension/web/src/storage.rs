//! `window.localStorage` as a [`StateStore`].

use resume::{StateStore, StoreError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Storage;

/// Origin-scoped browser storage. Every call goes straight to the browser,
/// so writes are durable as soon as they return.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
	storage: Storage,
}

impl LocalStorageStore {
	pub fn from_window() -> Result<Self, StoreError> {
		let window = web_sys::window().ok_or_else(|| StoreError::Backend("no window in this context".to_string()))?;
		let storage = window
			.local_storage()
			.map_err(backend)?
			.ok_or_else(|| StoreError::Backend("localStorage is disabled".to_string()))?;
		Ok(Self { storage })
	}
}

/// Quota and security errors arrive as `DOMException`s.
fn backend(value: JsValue) -> StoreError {
	let message = value
		.dyn_ref::<js_sys::Error>()
		.map(|err| String::from(err.message()))
		.or_else(|| value.as_string())
		.unwrap_or_else(|| format!("{value:?}"));
	StoreError::Backend(message)
}

impl StateStore for LocalStorageStore {
	fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
		self.storage.get_item(key).map_err(backend)
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
		self.storage.set_item(key, value).map_err(backend)
	}

	fn delete(&mut self, key: &str) -> Result<(), StoreError> {
		self.storage.remove_item(key).map_err(backend)
	}

	fn keys(&self) -> Result<Vec<String>, StoreError> {
		let len = self.storage.length().map_err(backend)?;
		let mut keys = Vec::with_capacity(len as usize);
		for index in 0..len {
			if let Some(key) = self.storage.key(index).map_err(backend)? {
				keys.push(key);
			}
		}
		Ok(keys)
	}
}
