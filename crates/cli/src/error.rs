use std::path::PathBuf;

use resume::{DecodeError, Error as CoreError};
use thiserror::Error;

use crate::output::ErrorCode;

#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Core(#[from] CoreError),

	#[error("failed to read config {}: {source}", .path.display())]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid config {}: {source}", .path.display())]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("{0}")]
	Usage(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl From<DecodeError> for CliError {
	fn from(err: DecodeError) -> Self {
		CliError::Core(CoreError::Decode(err))
	}
}

impl CliError {
	pub fn usage(message: impl Into<String>) -> Self {
		CliError::Usage(message.into())
	}

	/// Envelope code for this failure.
	pub fn code(&self) -> ErrorCode {
		match self {
			CliError::Core(CoreError::NotFound { .. }) => ErrorCode::NotFound,
			CliError::Core(CoreError::Decode(_) | CoreError::InvalidBase { .. } | CoreError::SnapshotTooLarge { .. }) => ErrorCode::InvalidInput,
			CliError::Core(CoreError::Store(_)) => ErrorCode::IoError,
			CliError::Core(CoreError::CodeSpaceExhausted { .. }) => ErrorCode::InternalError,
			CliError::ConfigRead { .. } | CliError::Io(_) => ErrorCode::IoError,
			CliError::ConfigParse { .. } | CliError::Usage(_) => ErrorCode::InvalidInput,
		}
	}

	/// Machine-readable decode kind, when the failure came from a token.
	pub fn decode_kind(&self) -> Option<&'static str> {
		match self {
			CliError::Core(CoreError::Decode(err)) => Some(err.kind()),
			_ => None,
		}
	}
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_mistakes_are_invalid_input() {
		assert_eq!(CliError::from(DecodeError::TruncatedPayload).code(), ErrorCode::InvalidInput);
		assert_eq!(CliError::usage("pass --yes").code(), ErrorCode::InvalidInput);
		let too_large = CliError::from(CoreError::SnapshotTooLarge { len: 2_000_000, limit: resume::MAX_SNAPSHOT_LEN });
		assert_eq!(too_large.code(), ErrorCode::InvalidInput);
	}

	#[test]
	fn missing_code_is_not_found() {
		let err = CliError::from(CoreError::NotFound { code: "ABCDEF".into() });
		assert_eq!(err.code(), ErrorCode::NotFound);
		assert!(err.to_string().contains("ABCDEF"));
		assert_eq!(err.decode_kind(), None);
	}

	#[test]
	fn decode_kind_is_exposed() {
		let err = CliError::from(DecodeError::TruncatedPayload);
		assert_eq!(err.decode_kind(), Some("truncated_payload"));
	}
}
