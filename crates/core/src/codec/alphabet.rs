//! URL-safe text mapping for token payloads.
//!
//! Payloads use base64url without padding, so a token never needs
//! percent-encoding inside a URL fragment.

use base64::{Engine as _, engine::general_purpose};

use super::MAX_SNAPSHOT_LEN;
use crate::error::DecodeError;

/// Worst-case packed size of a snapshot at the limit. LZ4 grows
/// incompressible input by `n / 255 + 16` plus its 4-byte size prefix; stored
/// DEFLATE blocks add 5 bytes per 64 KiB. Both fit under this bound.
const MAX_PACKED_LEN: usize = MAX_SNAPSHOT_LEN + MAX_SNAPSHOT_LEN / 255 + 64;

/// Upper bound on payload text accepted for decoding: the base64 length of
/// the largest packed snapshot any pipeline emits.
pub(crate) const MAX_PAYLOAD_LEN: usize = MAX_PACKED_LEN.div_ceil(3) * 4;

pub(crate) fn encode(bytes: &[u8]) -> String {
	general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn sextet(b: u8) -> Option<u8> {
	match b {
		b'A'..=b'Z' => Some(b - b'A'),
		b'a'..=b'z' => Some(b - b'a' + 26),
		b'0'..=b'9' => Some(b - b'0' + 52),
		b'-' => Some(62),
		b'_' => Some(63),
		_ => None,
	}
}

/// Decodes canonical base64url-no-pad.
///
/// Anything that could not have come from [`encode`] is rejected before the
/// bytes reach a decompressor.
pub(crate) fn decode(raw: &str) -> Result<Vec<u8>, DecodeError> {
	if raw.is_empty() {
		return Err(DecodeError::TruncatedPayload);
	}
	if raw.len() > MAX_PAYLOAD_LEN {
		return Err(DecodeError::malformed("payload too long"));
	}

	let bytes = raw.as_bytes();
	let mut last = 0;
	for &b in bytes {
		last = sextet(b).ok_or(DecodeError::malformed("unexpected character"))?;
	}

	// len % 4 == 2 leaves 4 unused bits in the last symbol, == 3 leaves 2.
	// Both must be zero in canonical output.
	match bytes.len() % 4 {
		1 => return Err(DecodeError::malformed("impossible payload length")),
		2 if last & 0x0f != 0 => return Err(DecodeError::malformed("non-canonical final symbol")),
		3 if last & 0x03 != 0 => return Err(DecodeError::malformed("non-canonical final symbol")),
		_ => {}
	}

	general_purpose::URL_SAFE_NO_PAD
		.decode(raw)
		.map_err(|_| DecodeError::malformed("invalid base64url"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn roundtrips_arbitrary_bytes() {
		let bytes: Vec<u8> = (0..=255).collect();
		let text = encode(&bytes);
		assert!(text.bytes().all(|b| sextet(b).is_some()));
		assert_eq!(decode(&text).unwrap(), bytes);
	}

	#[test]
	fn rejects_standard_alphabet_and_padding() {
		assert!(matches!(decode("ab+/"), Err(DecodeError::MalformedPayload { .. })));
		assert!(matches!(decode("YQ=="), Err(DecodeError::MalformedPayload { .. })));
		assert!(matches!(decode("a b"), Err(DecodeError::MalformedPayload { .. })));
	}

	#[test]
	fn rejects_impossible_length() {
		assert!(matches!(decode("abcde"), Err(DecodeError::MalformedPayload { .. })));
	}

	#[test]
	fn rejects_non_canonical_trailing_bits() {
		// "YQ" is canonical for b"a"; "YR" sets unused bits.
		assert_eq!(decode("YQ").unwrap(), b"a");
		assert!(matches!(decode("YR"), Err(DecodeError::MalformedPayload { .. })));
	}

	#[test]
	fn empty_payload_is_truncated() {
		assert_eq!(decode(""), Err(DecodeError::TruncatedPayload));
	}

	#[test]
	fn payload_cap_covers_every_emitter() {
		assert!(encode(&vec![0xff; MAX_PACKED_LEN]).len() <= MAX_PAYLOAD_LEN);
		// Padded legacy text of a snapshot at the limit.
		assert!(MAX_SNAPSHOT_LEN.div_ceil(3) * 4 <= MAX_PAYLOAD_LEN);
	}

	#[test]
	fn oversized_payload_is_rejected() {
		let long = "A".repeat(MAX_PAYLOAD_LEN + 4);
		assert!(matches!(decode(&long), Err(DecodeError::MalformedPayload { .. })));
	}
}
