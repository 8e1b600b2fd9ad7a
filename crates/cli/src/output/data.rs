use std::path::PathBuf;

use resume::{PartialSnapshot, Snapshot, TokenTag};
use serde::Serialize;

use crate::clipboard::CopyOutcome;

/// Result data for set command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetData {
	pub field: String,
	pub value: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub feedback: Option<&'static str>,
}

/// Result data for show command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowData {
	pub store: PathBuf,
	pub snapshot: Snapshot,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub feedback: Option<&'static str>,
}

/// Result data for save command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
	pub token: String,
	pub tag: TokenTag,
	pub length: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub code: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub copied: Option<CopyOutcome>,
}

/// Result data for resume command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
	/// `token` or `code`.
	pub source: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<TokenTag>,
	pub applied: usize,
	pub snapshot: Snapshot,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub feedback: Option<&'static str>,
}

/// Result data for inspect command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectData {
	pub tag: TokenTag,
	pub legacy: bool,
	pub fields: PartialSnapshot,
}

/// Result data for link command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkData {
	pub url: String,
	pub tag: TokenTag,
}

/// Result data for notes command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesData {
	pub notes: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub copied: Option<CopyOutcome>,
}

/// Result data for reset command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetData {
	pub removed: usize,
}
