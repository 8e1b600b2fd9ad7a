//! Command-line front end for saving and resuming progress.
//!
//! The CLI stands in for a page's view layer: `set` mimics auto-saved inputs,
//! `save` hands out a token, link or short code, and `resume` restores from
//! any of them into the local state store.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod notes;
pub mod output;
