//! Page-level operations over any [`StateStore`].
//!
//! The wasm exports are thin wrappers around these, so the behavior is tested
//! natively against a [`MemoryStore`](resume::MemoryStore).

use resume::{
	DEFAULT_FRAGMENT_PARAM, Field, ParseError, ShortCodeRegistry, Snapshot, StateSnapshot, StateStore, Token, TokenCodec, TokenFormat, TransportLink,
};
use thiserror::Error;
use tracing::debug;

/// Any absolute base works for parsing; only the fragment is read.
const PARSE_BASE: &str = "http://localhost/";

#[derive(Debug, Error)]
pub enum WebError {
	#[error(transparent)]
	Core(#[from] resume::Error),

	#[error(transparent)]
	Parse(#[from] ParseError),

	#[error("Nothing to resume. Paste a resume link or code.")]
	Empty,
}

impl WebError {
	/// Stable kind for JS callers.
	pub fn kind(&self) -> &'static str {
		match self {
			WebError::Core(resume::Error::Decode(err)) => err.kind(),
			WebError::Core(resume::Error::NotFound { .. }) => "not_found",
			WebError::Core(resume::Error::Store(_)) => "storage",
			WebError::Core(resume::Error::SnapshotTooLarge { .. }) => "too_large",
			WebError::Core(_) => "internal",
			WebError::Parse(_) | WebError::Empty => "invalid_input",
		}
	}
}

pub type Result<T> = std::result::Result<T, WebError>;

/// Encodes the saved fields. `format` is `plain`, `compressed` or `lz`.
pub fn save_token<S: StateStore>(store: S, format: Option<&str>) -> Result<Token> {
	let format = format.map(str::parse::<TokenFormat>).transpose()?.unwrap_or_default();
	let snapshot = StateSnapshot::new(store).build()?;
	TokenCodec::check_size(&snapshot)?;
	Ok(TokenCodec::new(format).encode(&snapshot))
}

/// Restores from a pasted link, fragment or token; returns the fields written.
///
/// Nothing is written unless the whole input decodes.
pub fn resume<S: StateStore>(store: S, input: &str) -> Result<usize> {
	let token = parse_resume_token(input).ok_or(WebError::Empty)?;
	let fields = TokenCodec::default().decode(token.as_str()).map_err(resume::Error::from)?;
	let applied = StateSnapshot::new(store).apply(&fields)?;
	debug!(target = "resume.web", applied, "resumed from token");
	Ok(applied)
}

pub fn build_resume_url(token: &str, base: &str) -> Result<String> {
	let link = TransportLink::new(base)?;
	Ok(link.build_resume_url(&Token::from(token)).into())
}

pub fn parse_resume_token(input: &str) -> Option<Token> {
	TransportLink::new(PARSE_BASE)
		.ok()?
		.with_param(DEFAULT_FRAGMENT_PARAM)
		.parse_resume_token(input)
}

pub fn issue_code<S: StateStore>(mut store: S) -> Result<String> {
	let snapshot = StateSnapshot::new(&mut store).build()?;
	Ok(ShortCodeRegistry::new(store).issue(&snapshot)?)
}

pub fn resume_code<S: StateStore>(mut store: S, code: &str) -> Result<usize> {
	let fields = ShortCodeRegistry::new(&mut store).resolve(code)?;
	Ok(StateSnapshot::new(store).apply(&fields)?)
}

pub fn reset<S: StateStore>(store: S) -> Result<usize> {
	Ok(StateSnapshot::new(store).reset()?)
}

pub fn snapshot<S: StateStore>(store: S) -> Result<Snapshot> {
	Ok(StateSnapshot::new(store).build()?)
}

/// Auto-save hook for inputs; `name` is a wire field name.
pub fn set_field<S: StateStore>(store: S, name: &str, value: &str) -> Result<()> {
	let field: Field = name.parse()?;
	Ok(StateSnapshot::new(store).set_field(field, value)?)
}
