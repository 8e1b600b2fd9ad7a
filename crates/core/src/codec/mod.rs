//! Token encoding and decoding.
//!
//! A token is `<tag>.<payload>`. Each [`TokenTag`] owns exactly one pipeline
//! in [`PIPELINES`]; decoding looks the tag up and runs that pipeline, never
//! trying alternatives. Capability differences (a compressor compiled out, a
//! compressor failing) are settled at encode time by choosing the tag, so any
//! token decodes deterministically.
//!
//! # Pipelines
//!
//! | Tag | Payload |
//! |---|---|
//! | `v-plain` | canonical JSON → base64url |
//! | `v-compressed` | canonical JSON → raw DEFLATE → base64url |
//! | `v-lz` | canonical JSON → LZ4 block (length-prefixed) → base64url |
//! | `SINS1` | decode only: canonical JSON → padded standard base64 |
//!
//! Adding an encoding means adding a tag and a table row; existing rows are
//! never changed.

mod alphabet;
#[cfg(feature = "deflate")]
mod deflate;
mod legacy;
#[cfg(feature = "lz4")]
mod lz;

use std::io;

use resume_protocol::{PartialSnapshot, Snapshot, TAG_SEPARATOR, Token, TokenFormat, TokenTag};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{DecodeError, Error};

/// Largest canonical snapshot text, in bytes, that a token may carry.
///
/// Writers refuse snapshots above it (see [`TokenCodec::check_size`]) and
/// decoders accept every payload an encoder can emit for a snapshot at or
/// below it.
pub const MAX_SNAPSHOT_LEN: usize = 1024 * 1024;

/// Canonical text bytes to payload text.
type EmitFn = fn(&[u8]) -> io::Result<String>;
/// Payload text to canonical text bytes.
type ReadFn = fn(&str) -> Result<Vec<u8>, DecodeError>;

/// One row of the dispatch table.
struct Pipeline {
	tag: TokenTag,
	/// `None` for decode-only tags and for pipelines compiled out.
	emit: Option<EmitFn>,
	/// `None` when the pipeline is compiled out.
	read: Option<ReadFn>,
}

/// Dispatch table, indexed in [`TokenTag::ALL`] order.
const PIPELINES: [Pipeline; 4] = [
	Pipeline {
		tag: TokenTag::Plain,
		emit: Some(emit_plain),
		read: Some(alphabet::decode),
	},
	Pipeline {
		tag: TokenTag::Compressed,
		#[cfg(feature = "deflate")]
		emit: Some(emit_deflate),
		#[cfg(not(feature = "deflate"))]
		emit: None,
		#[cfg(feature = "deflate")]
		read: Some(read_deflate),
		#[cfg(not(feature = "deflate"))]
		read: None,
	},
	Pipeline {
		tag: TokenTag::Lz,
		#[cfg(feature = "lz4")]
		emit: Some(emit_lz),
		#[cfg(not(feature = "lz4"))]
		emit: None,
		#[cfg(feature = "lz4")]
		read: Some(read_lz),
		#[cfg(not(feature = "lz4"))]
		read: None,
	},
	Pipeline {
		tag: TokenTag::LegacySins1,
		emit: None,
		read: Some(legacy::decode),
	},
];

fn pipeline(tag: TokenTag) -> &'static Pipeline {
	let index = match tag {
		TokenTag::Plain => 0,
		TokenTag::Compressed => 1,
		TokenTag::Lz => 2,
		TokenTag::LegacySins1 => 3,
	};
	&PIPELINES[index]
}

fn emit_plain(canonical: &[u8]) -> io::Result<String> {
	Ok(alphabet::encode(canonical))
}

#[cfg(feature = "deflate")]
fn emit_deflate(canonical: &[u8]) -> io::Result<String> {
	deflate::compress(canonical).map(|packed| alphabet::encode(&packed))
}

#[cfg(feature = "deflate")]
fn read_deflate(payload: &str) -> Result<Vec<u8>, DecodeError> {
	deflate::decompress(&alphabet::decode(payload)?)
}

#[cfg(feature = "lz4")]
fn emit_lz(canonical: &[u8]) -> io::Result<String> {
	lz::compress(canonical).map(|packed| alphabet::encode(&packed))
}

#[cfg(feature = "lz4")]
fn read_lz(payload: &str) -> Result<Vec<u8>, DecodeError> {
	lz::decompress(&alphabet::decode(payload)?)
}

/// Encodes snapshots into tokens and decodes tokens back.
///
/// The codec only carries the encoder's preferred format; decoding accepts
/// every tag whose pipeline is compiled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenCodec {
	preferred: TokenFormat,
}

impl TokenCodec {
	pub fn new(preferred: TokenFormat) -> Self {
		Self { preferred }
	}

	pub fn preferred(&self) -> TokenFormat {
		self.preferred
	}

	/// Returns true when this build can emit `format`.
	pub fn can_emit(format: TokenFormat) -> bool {
		pipeline(format.tag()).emit.is_some()
	}

	/// Returns true when this build can decode tokens tagged `tag`.
	pub fn can_decode(tag: TokenTag) -> bool {
		pipeline(tag).read.is_some()
	}

	/// The format [`encode`](Self::encode) commits to in this build.
	pub fn effective_format(&self) -> TokenFormat {
		if Self::can_emit(self.preferred) {
			self.preferred
		} else {
			TokenFormat::Plain
		}
	}

	/// Fails with [`Error::SnapshotTooLarge`] when `snapshot` would not decode
	/// again after encoding.
	pub fn check_size(snapshot: &Snapshot) -> crate::Result<()> {
		let len = snapshot.to_canonical_json().len();
		if len > MAX_SNAPSHOT_LEN {
			return Err(Error::SnapshotTooLarge { len, limit: MAX_SNAPSHOT_LEN });
		}
		Ok(())
	}

	/// Encodes a snapshot. Total: if the preferred pipeline is unavailable or
	/// its compressor fails, the token is tagged `v-plain` instead.
	///
	/// Snapshots above [`MAX_SNAPSHOT_LEN`] still encode, but their tokens are
	/// rejected by [`decode`](Self::decode); callers that persist or hand out
	/// tokens check with [`check_size`](Self::check_size) first.
	pub fn encode(&self, snapshot: &Snapshot) -> Token {
		let canonical = snapshot.to_canonical_json();
		if canonical.len() > MAX_SNAPSHOT_LEN {
			warn!(target = "resume.codec", text_len = canonical.len(), limit = MAX_SNAPSHOT_LEN, "snapshot exceeds the decodable size");
		}
		let tag = self.effective_format().tag();

		if tag != TokenTag::Plain {
			if let Some(emit) = pipeline(tag).emit {
				match emit(canonical.as_bytes()) {
					Ok(payload) => {
						debug!(target = "resume.codec", %tag, text_len = canonical.len(), payload_len = payload.len(), "snapshot encoded");
						return Token::new(tag, &payload);
					}
					Err(err) => {
						warn!(target = "resume.codec", %tag, error = %err, "compressor failed; falling back to plain token");
					}
				}
			}
		}

		let payload = alphabet::encode(canonical.as_bytes());
		debug!(target = "resume.codec", tag = %TokenTag::Plain, text_len = canonical.len(), payload_len = payload.len(), "snapshot encoded");
		Token::new(TokenTag::Plain, &payload)
	}

	/// Decodes a token into the fields it carries.
	///
	/// Unknown keys and non-string values in the payload are dropped.
	pub fn decode(&self, token: &str) -> Result<PartialSnapshot, DecodeError> {
		self.decode_tagged(token).map(|(_, snapshot)| snapshot)
	}

	/// Like [`decode`](Self::decode), also reporting which pipeline ran.
	pub fn decode_tagged(&self, token: &str) -> Result<(TokenTag, PartialSnapshot), DecodeError> {
		let Some((tag_text, payload)) = token.split_once(TAG_SEPARATOR) else {
			return Err(if is_tag_prefix(token) {
				DecodeError::TruncatedPayload
			} else {
				DecodeError::unsupported(token)
			});
		};
		let Some(tag) = TokenTag::parse(tag_text) else {
			return Err(DecodeError::unsupported(tag_text));
		};
		let Some(read) = pipeline(tag).read else {
			debug!(target = "resume.codec", %tag, "pipeline not compiled in");
			return Err(DecodeError::unsupported(tag_text));
		};

		let canonical = read(payload)?;
		let snapshot = parse_snapshot(&canonical)?;
		debug!(target = "resume.codec", %tag, fields = snapshot.len(), "token decoded");
		Ok((tag, snapshot))
	}
}

/// A separator-less token that could still grow into `<tag>.` was cut short.
fn is_tag_prefix(text: &str) -> bool {
	TokenTag::ALL.iter().any(|tag| tag.as_str().starts_with(text))
}

fn parse_snapshot(canonical: &[u8]) -> Result<PartialSnapshot, DecodeError> {
	let value: Value = serde_json::from_slice(canonical).map_err(|err| {
		if err.is_eof() {
			DecodeError::TruncatedPayload
		} else {
			DecodeError::corrupt("payload is not valid JSON")
		}
	})?;
	match value {
		Value::Object(object) => Ok(PartialSnapshot::from_object(&object)),
		_ => Err(DecodeError::corrupt("payload is not a snapshot object")),
	}
}
