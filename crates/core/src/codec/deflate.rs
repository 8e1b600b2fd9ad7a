//! `v-compressed`: raw DEFLATE between the canonical text and the alphabet.

use std::io::{self, Write};

use flate2::write::DeflateEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use super::MAX_SNAPSHOT_LEN;
use crate::error::DecodeError;

pub(super) fn compress(input: &[u8]) -> io::Result<Vec<u8>> {
	let mut encoder = DeflateEncoder::new(Vec::with_capacity(input.len()), Compression::best());
	encoder.write_all(input)?;
	encoder.finish()
}

/// Inflates a complete raw DEFLATE stream.
///
/// Running out of input before the end-of-stream marker is truncation; the
/// stream must also account for every input byte.
pub(super) fn decompress(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
	let mut inflater = Decompress::new(false);
	let mut out = Vec::with_capacity((input.len() * 4).clamp(64, MAX_SNAPSHOT_LEN));

	loop {
		if out.len() == out.capacity() {
			if out.len() > MAX_SNAPSHOT_LEN {
				return Err(DecodeError::corrupt("decompressed payload too large"));
			}
			// One byte of headroom past the limit tells a stream that ends
			// exactly at the limit from one that keeps going.
			let room = MAX_SNAPSHOT_LEN + 1 - out.len();
			out.reserve_exact(out.len().max(64).min(room));
		}

		let consumed = inflater.total_in() as usize;
		let produced = out.len();
		let status = inflater
			.decompress_vec(&input[consumed..], &mut out, FlushDecompress::None)
			.map_err(|_| DecodeError::corrupt("invalid compressed stream"))?;

		if matches!(status, Status::StreamEnd) {
			break;
		}

		let stalled = inflater.total_in() as usize == consumed && out.len() == produced;
		if stalled && out.len() < out.capacity() {
			return Err(DecodeError::TruncatedPayload);
		}
	}

	if out.len() > MAX_SNAPSHOT_LEN {
		return Err(DecodeError::corrupt("decompressed payload too large"));
	}
	if inflater.total_in() as usize != input.len() {
		return Err(DecodeError::corrupt("trailing bytes after compressed stream"));
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn roundtrip() {
		let text = br#"{"p1_original":"the river rose after three days of rain","p1_revised":"","p2_original":"","branch_choice":"weather","currentStep":"step3"}"#;
		let packed = compress(text).unwrap();
		assert_eq!(decompress(&packed).unwrap(), text.to_vec());
	}

	#[test]
	fn every_strict_prefix_is_truncated() {
		let text = "evidence ".repeat(40);
		let packed = compress(text.as_bytes()).unwrap();
		for cut in 0..packed.len() {
			assert_eq!(decompress(&packed[..cut]), Err(DecodeError::TruncatedPayload), "cut at {cut}");
		}
	}

	#[test]
	fn trailing_bytes_are_corrupt() {
		let mut packed = compress(b"{}").unwrap();
		packed.extend_from_slice(b"junk");
		assert!(matches!(decompress(&packed), Err(DecodeError::CorruptPayload { .. })));
	}

	#[test]
	fn output_grows_past_initial_capacity() {
		let text = "a".repeat(50_000);
		let packed = compress(text.as_bytes()).unwrap();
		assert!(packed.len() * 4 < text.len());
		assert_eq!(decompress(&packed).unwrap().len(), text.len());
	}

	#[test]
	fn output_exactly_at_the_limit_inflates() {
		let text = vec![b'x'; MAX_SNAPSHOT_LEN];
		let packed = compress(&text).unwrap();
		assert_eq!(decompress(&packed).unwrap().len(), MAX_SNAPSHOT_LEN);
	}

	#[test]
	fn bombs_are_rejected() {
		let text = vec![b'x'; MAX_SNAPSHOT_LEN + 1];
		let packed = compress(&text).unwrap();
		assert!(matches!(decompress(&packed), Err(DecodeError::CorruptPayload { .. })));
	}
}
