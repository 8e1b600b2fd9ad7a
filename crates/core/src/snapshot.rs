//! Capturing and restoring the saved fields of a [`StateStore`].

use resume_protocol::{Field, PartialSnapshot, Snapshot};
use tracing::{debug, info};

use crate::codec::TokenCodec;
use crate::error::Result;
use crate::registry::CODE_KEY_PREFIX;
use crate::store::StateStore;

/// Reads and writes the fixed field set of a store.
///
/// Only the keys of [`Field::ALL`] are ever touched by [`build`](Self::build)
/// and [`apply`](Self::apply); other keys in the store are left alone.
#[derive(Debug)]
pub struct StateSnapshot<S> {
	store: S,
}

impl<S: StateStore> StateSnapshot<S> {
	pub fn new(store: S) -> Self {
		Self { store }
	}

	/// Reads every field, treating absent keys as `""`.
	pub fn build(&self) -> Result<Snapshot> {
		let mut snapshot = Snapshot::new();
		for field in Field::ALL {
			snapshot.set(field, self.store.get(field.key())?);
		}
		Ok(snapshot)
	}

	/// Writes the fields present in `snapshot` and returns how many were written.
	///
	/// Absent fields keep their stored value, so applying a decoded token never
	/// clears progress the token did not carry.
	pub fn apply(&mut self, snapshot: &PartialSnapshot) -> Result<usize> {
		let mut written = 0;
		for (field, value) in snapshot.iter() {
			self.store.set(field.key(), value)?;
			written += 1;
		}
		debug!(target = "resume.store", written, "snapshot applied");
		Ok(written)
	}

	pub fn get_field(&self, field: Field) -> Result<String> {
		Ok(self.store.get(field.key())?)
	}

	/// Writes one field, refusing a value that would make the saved fields too
	/// large to resume from.
	pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
		let mut next = self.build()?;
		next.set(field, value);
		TokenCodec::check_size(&next)?;
		self.store.set(field.key(), value)?;
		Ok(())
	}

	/// Clears every field and every short code, returning the number of keys
	/// removed.
	pub fn reset(&mut self) -> Result<usize> {
		let mut doomed: Vec<String> = self
			.store
			.keys()?
			.into_iter()
			.filter(|key| key.starts_with(CODE_KEY_PREFIX) || Field::parse(key).is_some())
			.collect();
		doomed.sort();

		for key in &doomed {
			self.store.delete(key)?;
		}
		info!(target = "resume.store", removed = doomed.len(), "saved progress reset");
		Ok(doomed.len())
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	pub fn store_mut(&mut self) -> &mut S {
		&mut self.store
	}

	pub fn into_inner(self) -> S {
		self.store
	}
}
