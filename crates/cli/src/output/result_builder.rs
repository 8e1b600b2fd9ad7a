use std::io::{self, Write};
use std::time::Instant;

use serde::Serialize;

use crate::output::format::OutputFormat;
use crate::output::model::{CommandError, CommandResult, Diagnostic, DiagnosticLevel, ErrorCode, SCHEMA_VERSION};

/// Builder for constructing command results.
pub struct ResultBuilder<T: Serialize> {
	command: String,
	data: Option<T>,
	error: Option<CommandError>,
	start_time: Instant,
	duration_ms: Option<u64>,
	diagnostics: Vec<Diagnostic>,
	text: Option<String>,
}

impl<T: Serialize> ResultBuilder<T> {
	pub fn new(command: impl Into<String>) -> Self {
		Self::started(command, Instant::now())
	}

	/// Starts the duration clock at `start` instead of now.
	pub fn started(command: impl Into<String>, start: Instant) -> Self {
		Self {
			command: command.into(),
			data: None,
			error: None,
			start_time: start,
			duration_ms: None,
			diagnostics: Vec::new(),
			text: None,
		}
	}

	pub fn data(mut self, data: T) -> Self {
		self.data = Some(data);
		self
	}

	pub fn error(mut self, code: ErrorCode, message: impl Into<String>) -> Self {
		self.error = Some(CommandError {
			code,
			message: message.into(),
			details: None,
		});
		self
	}

	pub fn error_with_details(mut self, code: ErrorCode, message: impl Into<String>, details: serde_json::Value) -> Self {
		self.error = Some(CommandError {
			code,
			message: message.into(),
			details: Some(details),
		});
		self
	}

	pub fn diagnostic(mut self, level: DiagnosticLevel, message: impl Into<String>) -> Self {
		self.diagnostics.push(Diagnostic {
			level,
			message: message.into(),
		});
		self
	}

	/// Text shown by [`OutputFormat::Text`] in place of the data.
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.text = Some(text.into());
		self
	}

	pub fn duration_ms(mut self, duration_ms: u64) -> Self {
		self.duration_ms = Some(duration_ms);
		self
	}

	pub fn build(self) -> CommandResult<T> {
		let ok = self.error.is_none() && self.data.is_some();
		let duration_ms = self.duration_ms.unwrap_or_else(|| self.start_time.elapsed().as_millis() as u64);

		CommandResult {
			schema_version: Some(SCHEMA_VERSION),
			ok,
			command: self.command,
			data: self.data,
			error: self.error,
			duration_ms: Some(duration_ms),
			diagnostics: self.diagnostics,
			text: self.text,
		}
	}
}

/// Print a command result to stdout in the specified format.
pub fn print_result<T: Serialize>(result: &CommandResult<T>, format: OutputFormat) {
	let mut stdout = io::stdout().lock();
	let _ = write_result(&mut stdout, result, format);
}

/// Write a command result in the specified format.
pub fn write_result<T: Serialize>(out: &mut dyn Write, result: &CommandResult<T>, format: OutputFormat) -> io::Result<()> {
	match format {
		OutputFormat::Toon => {
			if let Ok(json_value) = serde_json::to_value(result) {
				writeln!(out, "{}", toon::encode(&json_value, None))?;
			}
		}
		OutputFormat::Json => {
			if let Ok(json) = serde_json::to_string_pretty(result) {
				writeln!(out, "{json}")?;
			}
		}
		OutputFormat::Ndjson => {
			if let Ok(json) = serde_json::to_string(result) {
				writeln!(out, "{json}")?;
			}
		}
		OutputFormat::Text => write_result_text(out, result)?,
	}
	Ok(())
}

fn write_result_text<T: Serialize>(out: &mut dyn Write, result: &CommandResult<T>) -> io::Result<()> {
	if result.ok {
		if let Some(ref text) = result.text {
			write!(out, "{text}")?;
			if !text.ends_with('\n') {
				writeln!(out)?;
			}
		} else if let Some(ref data) = result.data {
			if let Ok(json) = serde_json::to_string_pretty(data) {
				writeln!(out, "{json}")?;
			}
		}
	} else if let Some(ref error) = result.error {
		writeln!(out, "Error [{}]: {}", error.code, error.message)?;
		if let Some(ref details) = error.details {
			if let Ok(json) = serde_json::to_string_pretty(details) {
				writeln!(out, "Details: {json}")?;
			}
		}
	}

	for diag in &result.diagnostics {
		let prefix = match diag.level {
			DiagnosticLevel::Info => "info",
			DiagnosticLevel::Warning => "warning",
		};
		writeln!(out, "[{prefix}] {}", diag.message)?;
	}
	Ok(())
}
