//! Resume links: a token carried in a URL fragment.
//!
//! The fragment is never sent to a server, so a link can be opened on any
//! static host without the token leaving the browser.

use std::borrow::Cow;

use resume_protocol::Token;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Fragment parameter that carries the token by default.
pub const DEFAULT_FRAGMENT_PARAM: &str = "t";

/// Builds resume URLs and pulls tokens back out of pasted links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportLink {
	base: Url,
	param: String,
}

impl TransportLink {
	/// Creates a link builder for `base`, the page that should reopen the work.
	///
	/// Any existing fragment on `base` is replaced when building.
	pub fn new(base: &str) -> Result<Self> {
		let invalid = |reason: String| Error::InvalidBase {
			base: base.to_string(),
			reason,
		};
		let base = Url::parse(base.trim()).map_err(|err| invalid(err.to_string()))?;
		if base.cannot_be_a_base() {
			return Err(invalid("URL cannot carry a path".to_string()));
		}
		Ok(Self {
			base,
			param: DEFAULT_FRAGMENT_PARAM.to_string(),
		})
	}

	/// Uses `param` instead of [`DEFAULT_FRAGMENT_PARAM`].
	pub fn with_param(mut self, param: impl Into<String>) -> Self {
		let param = param.into();
		if !param.is_empty() {
			self.param = param;
		}
		self
	}

	pub fn base(&self) -> &Url {
		&self.base
	}

	pub fn param(&self) -> &str {
		&self.param
	}

	/// Returns `<base>#<param>=<token>`.
	pub fn build_resume_url(&self, token: &Token) -> Url {
		let mut url = self.base.clone();
		let fragment = format!("{}={}", self.param, urlencoding::encode(token.as_str()));
		url.set_fragment(Some(&fragment));
		url
	}

	/// Extracts a token from pasted input.
	///
	/// Accepts a full resume URL, a bare fragment (`#t=...` or `t=...`) or a
	/// bare token. Returns `None` when there is nothing to decode; whether the
	/// token is valid is left to the codec.
	pub fn parse_resume_token(&self, input: &str) -> Option<Token> {
		let raw = input.trim();
		if raw.is_empty() {
			return None;
		}

		if let Ok(url) = Url::parse(raw) {
			let token = url.fragment().and_then(|fragment| self.lookup(fragment));
			debug!(target = "resume.link", found = token.is_some(), "parsed resume URL");
			return token;
		}

		let fragment = raw.strip_prefix('#');
		match fragment {
			Some(fragment) => self.lookup(fragment),
			// Legacy tokens end in `=` padding, so only an inner `=` marks a fragment.
			None if raw.trim_end_matches('=').contains('=') => self.lookup(raw),
			None => Some(Token::from(raw)),
		}
	}

	fn lookup(&self, fragment: &str) -> Option<Token> {
		fragment
			.split('&')
			.filter_map(|pair| pair.split_once('='))
			.find(|(name, _)| *name == self.param)
			.map(|(_, value)| urlencoding::decode(value).unwrap_or(Cow::Borrowed(value)))
			.filter(|value| !value.is_empty())
			.map(|value| Token::from(value.into_owned()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn link() -> TransportLink {
		TransportLink::new("https://example.com/journal/").unwrap()
	}

	#[test]
	fn builds_fragment_url() {
		let url = link().build_resume_url(&Token::from("v-plain.eyJ9"));
		assert_eq!(url.as_str(), "https://example.com/journal/#t=v-plain.eyJ9");
	}

	#[test]
	fn roundtrips_through_url() {
		let token = Token::from("v-compressed.q1YqSs1JzSspVrJSKkktLlGqBQA");
		let link = link();
		let url = link.build_resume_url(&token);
		assert_eq!(link.parse_resume_token(url.as_str()), Some(token));
	}

	#[test]
	fn existing_fragment_is_replaced() {
		let link = TransportLink::new("https://example.com/app#step3").unwrap();
		let url = link.build_resume_url(&Token::from("v-plain.e30"));
		assert_eq!(url.fragment(), Some("t=v-plain.e30"));
	}

	#[test]
	fn legacy_padding_survives() {
		let token = Token::from("SINS1.eyJhIjoiYiJ9+/==");
		let link = link();
		let url = link.build_resume_url(&token);
		assert_eq!(link.parse_resume_token(url.as_str()), Some(token.clone()));
		assert_eq!(link.parse_resume_token(token.as_str()), Some(token));
	}

	#[test]
	fn accepts_fragments_and_bare_tokens() {
		let link = link();
		let expected = Some(Token::from("v-plain.e30"));
		assert_eq!(link.parse_resume_token("#t=v-plain.e30"), expected);
		assert_eq!(link.parse_resume_token("x=1&t=v-plain.e30"), expected);
		assert_eq!(link.parse_resume_token("  v-plain.e30\n"), expected);
	}

	#[test]
	fn nothing_to_decode() {
		let link = link();
		assert_eq!(link.parse_resume_token(""), None);
		assert_eq!(link.parse_resume_token("   "), None);
		assert_eq!(link.parse_resume_token("https://example.com/journal/"), None);
		assert_eq!(link.parse_resume_token("https://example.com/journal/#x=1"), None);
		assert_eq!(link.parse_resume_token("#t="), None);
	}

	#[test]
	fn custom_param() {
		let link = link().with_param("resume");
		let url = link.build_resume_url(&Token::from("v-lz.AAAA"));
		assert_eq!(url.fragment(), Some("resume=v-lz.AAAA"));
		assert_eq!(link.parse_resume_token(url.as_str()), Some(Token::from("v-lz.AAAA")));
	}

	#[test]
	fn rejects_unusable_bases() {
		assert!(matches!(TransportLink::new("not a url"), Err(Error::InvalidBase { .. })));
		assert!(matches!(TransportLink::new("mailto:someone@example.com"), Err(Error::InvalidBase { .. })));
	}
}
