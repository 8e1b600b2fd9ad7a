//! CLI configuration and file locations.
//!
//! Config lives in `<config dir>/resume/config.json`; the state store in
//! `<data dir>/resume/state.json`. Both can be overridden per call.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use resume::{DEFAULT_CODE_LEN, DEFAULT_FRAGMENT_PARAM, TokenFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, Result};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_BASE_URL: &str = "https://example.invalid/resume/";
pub const STORE_ENV: &str = "RESUME_STORE";

const APP_DIR: &str = "resume";

/// Persisted CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CliConfig {
	pub schema: u32,
	/// Page that reopens saved work; resume links point here.
	pub base_url: String,
	pub fragment_param: String,
	pub token_format: TokenFormat,
	pub short_code_length: usize,
}

impl Default for CliConfig {
	fn default() -> Self {
		Self {
			schema: CONFIG_SCHEMA_VERSION,
			base_url: DEFAULT_BASE_URL.to_string(),
			fragment_param: DEFAULT_FRAGMENT_PARAM.to_string(),
			token_format: TokenFormat::default(),
			short_code_length: DEFAULT_CODE_LEN,
		}
	}
}

impl CliConfig {
	/// Loads the config at `path`, or at the default location.
	///
	/// A missing file yields defaults; a file that exists but does not parse
	/// is an error.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
			return Ok(Self::default());
		};
		match fs::read_to_string(&path) {
			Ok(content) => {
				let config = serde_json::from_str(&content).map_err(|source| CliError::ConfigParse { path: path.clone(), source })?;
				debug!(target = "resume.cli", path = %path.display(), "config loaded");
				Ok(config)
			}
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
			Err(source) => Err(CliError::ConfigRead { path, source }),
		}
	}
}

pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
}

/// Store location: `--store`, then `$RESUME_STORE`, then the user data dir.
pub fn resolve_store_path(flag: Option<PathBuf>) -> PathBuf {
	store_path_from(flag, std::env::var_os(STORE_ENV), dirs::data_dir())
}

fn store_path_from(flag: Option<PathBuf>, env: Option<OsString>, data_dir: Option<PathBuf>) -> PathBuf {
	flag.or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
		.or_else(|| data_dir.map(|dir| dir.join(APP_DIR).join("state.json")))
		.unwrap_or_else(|| PathBuf::from(".resume").join("state.json"))
}

#[cfg(test)]
mod tests {
	use tempfile::TempDir;

	use super::*;

	#[test]
	fn missing_config_is_default() {
		let dir = TempDir::new().unwrap();
		let config = CliConfig::load(Some(&dir.path().join("absent.json"))).unwrap();
		assert_eq!(config, CliConfig::default());
		assert_eq!(config.token_format, TokenFormat::Compressed);
		assert_eq!(config.fragment_param, "t");
	}

	#[test]
	fn partial_config_fills_defaults() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("config.json");
		fs::write(&path, r#"{"baseUrl":"https://notes.example/app/","tokenFormat":"lz"}"#).unwrap();

		let config = CliConfig::load(Some(&path)).unwrap();
		assert_eq!(config.base_url, "https://notes.example/app/");
		assert_eq!(config.token_format, TokenFormat::Lz);
		assert_eq!(config.short_code_length, DEFAULT_CODE_LEN);
	}

	#[test]
	fn invalid_config_is_an_error() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("config.json");
		fs::write(&path, "{ not json").unwrap();
		assert!(matches!(CliConfig::load(Some(&path)), Err(CliError::ConfigParse { .. })));
	}

	#[test]
	fn store_path_precedence() {
		let flag = Some(PathBuf::from("/flag/state.json"));
		let env = Some(OsString::from("/env/state.json"));
		let data = Some(PathBuf::from("/data"));

		assert_eq!(store_path_from(flag, env.clone(), data.clone()), PathBuf::from("/flag/state.json"));
		assert_eq!(store_path_from(None, env, data.clone()), PathBuf::from("/env/state.json"));
		assert_eq!(store_path_from(None, Some(OsString::new()), data.clone()), PathBuf::from("/data/resume/state.json"));
		assert_eq!(store_path_from(None, None, None), PathBuf::from(".resume/state.json"));
	}
}
