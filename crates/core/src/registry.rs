//! Same-device short codes.
//!
//! A short code is an alias for a snapshot kept in the local store. It is only
//! meaningful on the device (or browser origin) that issued it; resume tokens
//! and links are the cross-device path.

use rand::Rng;
use rand::rngs::OsRng;
use resume_protocol::{PartialSnapshot, Snapshot, TokenFormat};
use tracing::{debug, info, warn};

use crate::codec::TokenCodec;
use crate::error::{Error, Result};
use crate::store::StateStore;

/// Symbols a short code is drawn from. `I`, `L`, `O`, `0` and `1` are left out
/// so codes survive being read aloud or copied by hand.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

/// Store key namespace for issued codes.
pub const CODE_KEY_PREFIX: &str = "resume.code.";

pub const DEFAULT_CODE_LEN: usize = 6;
pub const MIN_CODE_LEN: usize = 4;
pub const MAX_CODE_LEN: usize = 16;

const MAX_ATTEMPTS: usize = 32;

/// Issues and resolves short codes against a [`StateStore`].
#[derive(Debug)]
pub struct ShortCodeRegistry<S, R = OsRng> {
	store: S,
	rng: R,
	code_len: usize,
	codec: TokenCodec,
}

impl<S: StateStore> ShortCodeRegistry<S> {
	pub fn new(store: S) -> Self {
		Self::with_rng(store, OsRng)
	}
}

impl<S: StateStore, R: Rng> ShortCodeRegistry<S, R> {
	pub fn with_rng(store: S, rng: R) -> Self {
		Self {
			store,
			rng,
			code_len: DEFAULT_CODE_LEN,
			// Entries never leave the device, so the readable form is kept.
			codec: TokenCodec::new(TokenFormat::Plain),
		}
	}

	/// Sets the code length, clamped to `4..=16`.
	pub fn code_len(mut self, len: usize) -> Self {
		self.code_len = len.clamp(MIN_CODE_LEN, MAX_CODE_LEN);
		self
	}

	/// Stores `snapshot` under a fresh code and returns the code.
	///
	/// Snapshots too large to decode again are refused with
	/// [`Error::SnapshotTooLarge`]. Existing codes are never overwritten; after repeated collisions the
	/// call fails with [`Error::CodeSpaceExhausted`].
	pub fn issue(&mut self, snapshot: &Snapshot) -> Result<String> {
		TokenCodec::check_size(snapshot)?;
		let token = self.codec.encode(snapshot);
		for attempt in 1..=MAX_ATTEMPTS {
			let code = self.draw();
			let key = storage_key(&code);
			if self.store.contains(&key)? {
				debug!(target = "resume.registry", attempt, "short code collision");
				continue;
			}
			self.store.set(&key, token.as_str())?;
			info!(target = "resume.registry", code = %code, "short code issued");
			return Ok(code);
		}
		warn!(target = "resume.registry", attempts = MAX_ATTEMPTS, len = self.code_len, "short code space exhausted");
		Err(Error::CodeSpaceExhausted { attempts: MAX_ATTEMPTS })
	}

	fn draw(&mut self) -> String {
		(0..self.code_len)
			.map(|_| char::from(CODE_ALPHABET[self.rng.gen_range(0..CODE_ALPHABET.len())]))
			.collect()
	}
}

impl<S: StateStore, R> ShortCodeRegistry<S, R> {
	/// Looks up a code. Surrounding whitespace and letter case are ignored.
	pub fn resolve(&self, code: &str) -> Result<PartialSnapshot> {
		let code = normalize(code);
		let not_found = || Error::NotFound { code: code.clone() };
		if code.is_empty() || !code.bytes().all(|b| CODE_ALPHABET.contains(&b)) {
			return Err(not_found());
		}

		let Some(token) = self.store.read(&storage_key(&code))? else {
			debug!(target = "resume.registry", code = %code, "short code not found");
			return Err(not_found());
		};
		Ok(self.codec.decode(&token)?)
	}

	pub fn contains(&self, code: &str) -> Result<bool> {
		Ok(self.store.contains(&storage_key(&normalize(code)))?)
	}

	pub fn into_inner(self) -> S {
		self.store
	}
}

fn normalize(code: &str) -> String {
	code.trim().to_ascii_uppercase()
}

fn storage_key(code: &str) -> String {
	format!("{CODE_KEY_PREFIX}{code}")
}
