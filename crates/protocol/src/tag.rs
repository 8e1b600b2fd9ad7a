//! Token tags and the opaque token string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Separator between a token's tag and its payload.
pub const TAG_SEPARATOR: char = '.';

/// Literal prefix naming the exact pipeline that produced a token.
///
/// Tags are append-only: a published tag keeps decoding forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenTag {
	/// Canonical JSON, base64url.
	Plain,
	/// Canonical JSON, raw DEFLATE, base64url.
	Compressed,
	/// Canonical JSON, length-prefixed LZ4 block, base64url.
	Lz,
	/// Prototype tokens: canonical JSON in padded standard base64.
	LegacySins1,
}

impl TokenTag {
	pub const ALL: [TokenTag; 4] = [TokenTag::Plain, TokenTag::Compressed, TokenTag::Lz, TokenTag::LegacySins1];

	pub const fn as_str(self) -> &'static str {
		match self {
			TokenTag::Plain => "v-plain",
			TokenTag::Compressed => "v-compressed",
			TokenTag::Lz => "v-lz",
			TokenTag::LegacySins1 => "SINS1",
		}
	}

	/// Exact-match lookup; no prefix or case folding.
	pub fn parse(tag: &str) -> Option<TokenTag> {
		TokenTag::ALL.into_iter().find(|t| t.as_str() == tag)
	}

	/// Legacy tags decode but are never emitted.
	pub const fn is_legacy(self) -> bool {
		matches!(self, TokenTag::LegacySins1)
	}
}

impl fmt::Display for TokenTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Serialize for TokenTag {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

/// Encoder preference; each format owns exactly one emitted tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenFormat {
	Plain,
	#[default]
	Compressed,
	Lz,
}

impl TokenFormat {
	pub const ALL: [TokenFormat; 3] = [TokenFormat::Plain, TokenFormat::Compressed, TokenFormat::Lz];

	pub const fn tag(self) -> TokenTag {
		match self {
			TokenFormat::Plain => TokenTag::Plain,
			TokenFormat::Compressed => TokenTag::Compressed,
			TokenFormat::Lz => TokenTag::Lz,
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			TokenFormat::Plain => "plain",
			TokenFormat::Compressed => "compressed",
			TokenFormat::Lz => "lz",
		}
	}
}

impl FromStr for TokenFormat {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"plain" => Ok(TokenFormat::Plain),
			"compressed" => Ok(TokenFormat::Compressed),
			"lz" => Ok(TokenFormat::Lz),
			_ => Err(ParseError::UnknownFormat(s.to_string())),
		}
	}
}

impl fmt::Display for TokenFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// An opaque `<tag>.<payload>` string.
///
/// Construction does not validate; decoding does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
	pub fn new(tag: TokenTag, payload: &str) -> Self {
		Self(format!("{}{TAG_SEPARATOR}{payload}", tag.as_str()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}

	/// Splits at the first separator into `(tag, payload)`.
	pub fn split(&self) -> Option<(&str, &str)> {
		self.0.split_once(TAG_SEPARATOR)
	}

	/// The recognized tag, if any.
	pub fn tag(&self) -> Option<TokenTag> {
		self.split().and_then(|(tag, _)| TokenTag::parse(tag))
	}
}

impl From<String> for Token {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for Token {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl AsRef<str> for Token {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
