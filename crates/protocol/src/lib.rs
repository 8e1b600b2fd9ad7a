//! Wire types for the resume-token protocol.
//!
//! This crate contains the serde-serializable types shared by every layer that
//! saves or restores progress: the closed field set, snapshot records and the
//! token tags that name each encoding pipeline.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization and parsing
//! * Closed: The field set is fixed at compile time
//! * Append-only: Tags are never reused or removed once published
//!
//! Encoding pipelines, stores and transport helpers are built on top of these
//! types in `resume-core`.

pub mod error;
pub mod field;
pub mod snapshot;
pub mod tag;

pub use error::*;
pub use field::*;
pub use snapshot::*;
pub use tag::*;
