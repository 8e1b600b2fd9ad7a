//! Error types for snapshot stores, token decoding and short-code lookup.
//!
//! Every user-facing failure here is recoverable by re-entering the code, so
//! the [`DecodeError`] and [`Error::NotFound`] messages are written to be shown
//! as-is.

use std::path::PathBuf;

use thiserror::Error;

/// Longest tag echoed back in [`DecodeError::UnsupportedVersion`].
const MAX_ECHOED_TAG_LEN: usize = 24;

/// Why a token could not be turned back into a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
	/// The token has no recognizable tag.
	#[error("That doesn't look like a valid resume code (unknown version `{tag}`). Check the code and try again.")]
	UnsupportedVersion { tag: String },

	/// The payload breaks the alphabet or structure of its encoding.
	#[error("That resume code is not valid ({reason}). Paste the code again.")]
	MalformedPayload { reason: &'static str },

	/// The payload ends mid-structure, typically from a partial copy.
	#[error("That resume code looks cut off. Copy the whole code and try again.")]
	TruncatedPayload,

	/// The payload decodes but does not hold snapshot data.
	#[error("That resume code is damaged and can't be read ({reason}). Check the code and try again.")]
	CorruptPayload { reason: &'static str },
}

impl DecodeError {
	pub(crate) fn unsupported(tag: &str) -> Self {
		let tag = match tag.char_indices().nth(MAX_ECHOED_TAG_LEN) {
			Some((cut, _)) => format!("{}…", &tag[..cut]),
			None => tag.to_string(),
		};
		DecodeError::UnsupportedVersion { tag }
	}

	pub(crate) fn malformed(reason: &'static str) -> Self {
		DecodeError::MalformedPayload { reason }
	}

	pub(crate) fn corrupt(reason: &'static str) -> Self {
		DecodeError::CorruptPayload { reason }
	}

	/// Short machine-readable kind, stable across releases.
	pub fn kind(&self) -> &'static str {
		match self {
			DecodeError::UnsupportedVersion { .. } => "unsupported_version",
			DecodeError::MalformedPayload { .. } => "malformed_payload",
			DecodeError::TruncatedPayload => "truncated_payload",
			DecodeError::CorruptPayload { .. } => "corrupt_payload",
		}
	}
}

/// Failures of a [`StateStore`](crate::StateStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
	#[error("failed to write state store {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to serialize state store: {0}")]
	Json(#[from] serde_json::Error),

	/// Errors reported by non-file backends such as browser storage.
	#[error("state store unavailable: {0}")]
	Backend(String),
}

/// Errors returned by the resume core.
#[derive(Debug, Error)]
pub enum Error {
	#[error(transparent)]
	Decode(#[from] DecodeError),

	#[error("No saved work found for code {code} on this device. Check the code and try again.")]
	NotFound { code: String },

	#[error("could not find an unused short code after {attempts} attempts")]
	CodeSpaceExhausted { attempts: usize },

	#[error(transparent)]
	Store(#[from] StoreError),

	#[error("invalid resume link base `{base}`: {reason}")]
	InvalidBase { base: String, reason: String },

	/// The saved fields would encode to more than
	/// [`MAX_SNAPSHOT_LEN`](crate::MAX_SNAPSHOT_LEN) bytes of canonical text.
	#[error("Saved work is too large to save ({len} bytes, limit {limit}). Shorten some answers and try again.")]
	SnapshotTooLarge { len: usize, limit: usize },
}

impl Error {
	/// Returns true when re-entering the code is the right fix.
	pub fn is_user_input(&self) -> bool {
		matches!(self, Error::Decode(_) | Error::NotFound { .. })
	}
}

pub type Result<T> = std::result::Result<T, Error>;
