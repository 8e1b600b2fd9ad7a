#![cfg(target_arch = "wasm32")]

use resume::{StateStore, TokenCodec};
use resume_web::storage::LocalStorageStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clean_store() -> LocalStorageStore {
	let mut store = LocalStorageStore::from_window().expect("localStorage available");
	for key in store.keys().expect("keys") {
		store.delete(&key).expect("delete");
	}
	store
}

#[wasm_bindgen_test]
fn store_reads_back_writes() {
	let mut store = clean_store();
	store.set("p1_original", "fog on the marsh").expect("set");
	assert_eq!(store.get("p1_original").expect("get"), "fog on the marsh");
	assert_eq!(store.keys().expect("keys"), vec!["p1_original".to_string()]);

	store.delete("p1_original").expect("delete");
	assert!(!store.contains("p1_original").expect("contains"));
}

#[wasm_bindgen_test]
fn exports_save_and_resume() {
	let _ = clean_store();
	resume_web::set_field("branch_choice", "habitat").expect("set_field");
	let token = resume_web::save_token(Some("lz".to_string())).expect("save_token");
	assert!(token.starts_with("v-lz."));

	let url = resume_web::build_resume_url(&token, "https://journal.example/").expect("build_resume_url");
	assert_eq!(resume_web::parse_resume_token(&url), Some(token.clone()));

	let removed = resume_web::reset().expect("reset");
	assert_eq!(removed, 1);
	assert_eq!(resume_web::resume(&url).expect("resume"), 5);
	assert!(TokenCodec::default().decode(&token).is_ok());
}

#[wasm_bindgen_test]
fn short_codes_stay_in_this_browser() {
	let _ = clean_store();
	let code = resume_web::issue_code().expect("issue_code");
	assert_eq!(resume_web::resume_code(&code.to_lowercase()).expect("resume_code"), 5);
	assert!(resume_web::resume_code("ZZZZZZ").is_err());
}
