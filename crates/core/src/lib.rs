//! Serverless save and resume for small, fixed-shape progress records.
//!
//! A view layer captures the user's saved fields from a [`StateStore`] with
//! [`StateSnapshot::build`], turns them into an opaque, URL-safe [`Token`] with
//! [`TokenCodec::encode`] and hands that token to the user directly, inside a
//! resume link ([`TransportLink`]) or behind a same-device short code
//! ([`ShortCodeRegistry`]). Resuming runs the same steps backwards and merges
//! the decoded fields into the store with [`StateSnapshot::apply`].
//!
//! # Example
//!
//! ```no_run
//! use resume::{Field, MemoryStore, StateSnapshot, TokenCodec, TokenFormat, TransportLink};
//!
//! # fn main() -> resume::Result<()> {
//! let mut snapshot = StateSnapshot::new(MemoryStore::new());
//! snapshot.set_field(Field::BranchChoice, "weather")?;
//!
//! let codec = TokenCodec::new(TokenFormat::Compressed);
//! let token = codec.encode(&snapshot.build()?);
//!
//! let link = TransportLink::new("https://example.com/journal/")?;
//! let url = link.build_resume_url(&token);
//!
//! let mut other_device = StateSnapshot::new(MemoryStore::new());
//! if let Some(token) = link.parse_resume_token(url.as_str()) {
//!     other_device.apply(&codec.decode(token.as_str())?)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod display;
pub mod error;
pub mod link;
pub mod registry;
pub mod snapshot;
pub mod store;

pub use codec::{MAX_SNAPSHOT_LEN, TokenCodec};
pub use display::{CodeDisplay, PlainDisplay};
pub use error::{DecodeError, Error, Result, StoreError};
pub use link::{DEFAULT_FRAGMENT_PARAM, TransportLink};
pub use registry::{CODE_ALPHABET, CODE_KEY_PREFIX, DEFAULT_CODE_LEN, MAX_CODE_LEN, MIN_CODE_LEN, ShortCodeRegistry};
pub use resume_protocol::{FIELD_COUNT, Field, ParseError, PartialSnapshot, Snapshot, TAG_SEPARATOR, Token, TokenFormat, TokenTag};
pub use snapshot::StateSnapshot;
pub use store::{FileStore, MemoryStore, StateStore};
