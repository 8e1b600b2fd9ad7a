//! Per-invocation settings shared by every command.

use std::io::IsTerminal;
use std::path::PathBuf;

use resume::{FileStore, ShortCodeRegistry, StateSnapshot, TokenCodec, TokenFormat, TransportLink};
use tracing::{debug, warn};

use crate::cli::Cli;
use crate::clipboard::{Clipboard, NoClipboard, SystemClipboard};
use crate::config::{CliConfig, DEFAULT_BASE_URL, resolve_store_path};
use crate::error::Result;
use crate::output::OutputFormat;

/// Set to `off` to keep commands away from the system clipboard.
pub const CLIPBOARD_ENV: &str = "RESUME_CLIPBOARD";

pub struct CommandContext {
	pub format: OutputFormat,
	pub config: CliConfig,
	pub store_path: PathBuf,
	clipboard: Box<dyn Clipboard>,
}

impl CommandContext {
	pub fn new(cli: &Cli) -> Result<Self> {
		let config = CliConfig::load(cli.config.as_deref())?;
		let store_path = resolve_store_path(cli.store.clone());
		debug!(target = "resume.cli", store = %store_path.display(), "resolved state store");

		let clipboard: Box<dyn Clipboard> = match std::env::var(CLIPBOARD_ENV) {
			Ok(value) if value.eq_ignore_ascii_case("off") => Box::new(NoClipboard),
			_ => Box::new(SystemClipboard),
		};

		Ok(Self {
			format: cli.format,
			config,
			store_path,
			clipboard,
		})
	}

	pub fn state(&self) -> StateSnapshot<FileStore> {
		StateSnapshot::new(FileStore::open(&self.store_path))
	}

	pub fn registry(&self) -> ShortCodeRegistry<FileStore> {
		ShortCodeRegistry::new(FileStore::open(&self.store_path)).code_len(self.config.short_code_length)
	}

	pub fn codec(&self, format: Option<TokenFormat>) -> TokenCodec {
		let codec = TokenCodec::new(format.unwrap_or(self.config.token_format));
		if codec.effective_format() != codec.preferred() {
			warn!(target = "resume.cli", preferred = %codec.preferred(), "token format not built in; using plain tokens");
		}
		codec
	}

	/// Decoding accepts every built-in tag regardless of the preferred format.
	pub fn decoder(&self) -> TokenCodec {
		TokenCodec::default()
	}

	/// Link builder for the configured base, or `base` when given.
	pub fn link(&self, base: Option<&str>) -> Result<TransportLink> {
		let link = TransportLink::new(base.unwrap_or(&self.config.base_url))?;
		Ok(link.with_param(self.config.fragment_param.clone()))
	}

	/// Link parser; only the fragment parameter matters, so a broken base URL
	/// in the config does not block resuming.
	pub fn link_parser(&self) -> Result<TransportLink> {
		match self.link(None) {
			Ok(link) => Ok(link),
			Err(err) => {
				warn!(target = "resume.cli", error = %err, "configured base URL unusable; parsing with defaults");
				Ok(TransportLink::new(DEFAULT_BASE_URL)?.with_param(self.config.fragment_param.clone()))
			}
		}
	}

	pub fn clipboard(&self) -> &dyn Clipboard {
		self.clipboard.as_ref()
	}

	/// Color only for text output on a terminal.
	pub fn color(&self) -> bool {
		!self.format.is_structured() && std::io::stdout().is_terminal()
	}
}
