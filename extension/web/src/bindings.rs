//! `#[wasm_bindgen]` exports for page scripts.
//!
//! Errors are thrown as JS `Error`s with a `kind` property (for example
//! `truncated_payload` or `not_found`) and a message that can be shown to the
//! user as-is.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;

use crate::api::{self, WebError};
use crate::storage::LocalStorageStore;

#[wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();
}

fn js_error(err: WebError) -> JsValue {
	let error = js_sys::Error::new(&err.to_string());
	let _ = Reflect::set(&error, &JsValue::from_str("kind"), &JsValue::from_str(err.kind()));
	error.into()
}

fn store() -> Result<LocalStorageStore, JsValue> {
	LocalStorageStore::from_window().map_err(|err| js_error(WebError::Core(err.into())))
}

/// Encodes the saved fields into a token.
#[wasm_bindgen]
pub fn save_token(format: Option<String>) -> Result<String, JsValue> {
	api::save_token(store()?, format.as_deref()).map(|token| token.into_string()).map_err(js_error)
}

/// Restores from a resume link, fragment or token and returns the number of
/// fields written.
#[wasm_bindgen]
pub fn resume(input: &str) -> Result<u32, JsValue> {
	api::resume(store()?, input).map(|applied| applied as u32).map_err(js_error)
}

#[wasm_bindgen]
pub fn build_resume_url(token: &str, base: &str) -> Result<String, JsValue> {
	api::build_resume_url(token, base).map_err(js_error)
}

#[wasm_bindgen]
pub fn parse_resume_token(input: &str) -> Option<String> {
	api::parse_resume_token(input).map(|token| token.into_string())
}

/// Issues a short code valid in this browser only.
#[wasm_bindgen]
pub fn issue_code() -> Result<String, JsValue> {
	api::issue_code(store()?).map_err(js_error)
}

#[wasm_bindgen]
pub fn resume_code(code: &str) -> Result<u32, JsValue> {
	api::resume_code(store()?, code).map(|applied| applied as u32).map_err(js_error)
}

/// Forgets saved fields and short codes; returns the number of keys removed.
#[wasm_bindgen]
pub fn reset() -> Result<u32, JsValue> {
	api::reset(store()?).map(|removed| removed as u32).map_err(js_error)
}

/// The saved fields as a plain object keyed by wire name.
#[wasm_bindgen]
pub fn snapshot() -> Result<JsValue, JsValue> {
	let snapshot = api::snapshot(store()?).map_err(js_error)?;
	serde_wasm_bindgen::to_value(&snapshot).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn set_field(name: &str, value: &str) -> Result<(), JsValue> {
	api::set_field(store()?, name, value).map_err(js_error)
}
