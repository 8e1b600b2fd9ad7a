//! `SINS1`: the prototype's resume codes, kept decodable.
//!
//! The prototype wrote the UTF-8 JSON in padded standard base64, so these
//! payloads may contain `+`, `/` and `=`.

use base64::{Engine as _, engine::general_purpose};

use super::alphabet::MAX_PAYLOAD_LEN;
use crate::error::DecodeError;

pub(super) fn decode(raw: &str) -> Result<Vec<u8>, DecodeError> {
	if raw.is_empty() {
		return Err(DecodeError::TruncatedPayload);
	}
	if raw.len() > MAX_PAYLOAD_LEN {
		return Err(DecodeError::malformed("payload too long"));
	}
	if !raw.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')) {
		return Err(DecodeError::malformed("unexpected character"));
	}
	if raw.len() % 4 != 0 {
		return Err(DecodeError::malformed("payload length is not a multiple of four"));
	}
	general_purpose::STANDARD
		.decode(raw)
		.map_err(|_| DecodeError::malformed("invalid base64"))
}
