//! `v-lz`: LZ4 block with a little-endian `u32` length prefix.
//!
//! LZ4 favours speed and short inputs over ratio; the prefix lets the decoder
//! size its output exactly and detect a block that stops early.

use std::io;

use lz4_flex::block::{self, DecompressError};

use super::MAX_SNAPSHOT_LEN;
use crate::error::DecodeError;

pub(super) fn compress(input: &[u8]) -> io::Result<Vec<u8>> {
	Ok(block::compress_prepend_size(input))
}

pub(super) fn decompress(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
	let Some((prefix, body)) = input.split_first_chunk::<4>() else {
		return Err(DecodeError::TruncatedPayload);
	};
	let declared = u32::from_le_bytes(*prefix) as usize;
	if declared > MAX_SNAPSHOT_LEN {
		return Err(DecodeError::corrupt("declared size too large"));
	}
	if body.is_empty() {
		return Err(DecodeError::TruncatedPayload);
	}

	let out = block::decompress(body, declared).map_err(|err| match err {
		DecompressError::ExpectedAnotherByte | DecompressError::LiteralOutOfBounds => DecodeError::TruncatedPayload,
		_ => DecodeError::corrupt("invalid lz4 block"),
	})?;

	if out.len() < declared {
		return Err(DecodeError::TruncatedPayload);
	}
	if out.len() > declared {
		return Err(DecodeError::corrupt("lz4 block longer than declared"));
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn roundtrip() {
		let text = br#"{"p1_original":"","p1_revised":"","p2_original":"","branch_choice":"habitat","currentStep":"step4"}"#;
		let packed = compress(text).unwrap();
		assert_eq!(decompress(&packed).unwrap(), text.to_vec());
	}

	#[test]
	fn every_strict_prefix_is_truncated() {
		let text = "habitat recovery notes, ".repeat(30);
		let packed = compress(text.as_bytes()).unwrap();
		for cut in 0..packed.len() {
			let result = decompress(&packed[..cut]);
			assert_eq!(result, Err(DecodeError::TruncatedPayload), "cut at {cut}");
		}
	}

	#[test]
	fn oversized_declaration_is_corrupt() {
		let mut packed = compress(b"{}").unwrap();
		packed[..4].copy_from_slice(&u32::MAX.to_le_bytes());
		assert!(matches!(decompress(&packed), Err(DecodeError::CorruptPayload { .. })));
	}
}
