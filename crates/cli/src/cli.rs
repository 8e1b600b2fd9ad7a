use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use resume::{Field, TokenFormat};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "resume")]
#[command(about = "Save your place and pick it up again anywhere, without an account")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format
	#[arg(short, long, global = true, value_enum, default_value = "text")]
	pub format: OutputFormat,

	/// State store file (defaults to $RESUME_STORE, then the user data dir)
	#[arg(long, global = true, value_name = "FILE")]
	pub store: Option<PathBuf>,

	/// Config file (defaults to the user config dir)
	#[arg(long, global = true, value_name = "FILE")]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Write one saved field
	Set {
		/// Field name (p1_original, p1_revised, p2_original, branch_choice, currentStep)
		field: Field,
		value: String,
	},

	/// Show the saved fields
	Show,

	/// Encode the saved fields into a resume token
	Save(SaveArgs),

	/// Restore saved fields from a token, resume link or short code
	#[command(alias = "load")]
	Resume(ResumeArgs),

	/// Decode a token or resume link without changing anything
	Inspect {
		/// Token, resume link or link fragment
		input: String,
	},

	/// Build a resume link for a token
	Link {
		token: String,

		/// Page that reopens the work (overrides the configured base URL)
		#[arg(long, value_name = "URL")]
		base: Option<String>,
	},

	/// Print the saved fields as plain-text notes
	Notes {
		/// Copy the notes to the clipboard
		#[arg(long)]
		copy: bool,
	},

	/// Forget all saved fields and short codes
	Reset {
		/// Confirm the reset
		#[arg(long, short)]
		yes: bool,
	},
}

impl Commands {
	/// Name reported in the result envelope.
	pub fn name(&self) -> &'static str {
		match self {
			Commands::Set { .. } => "set",
			Commands::Show => "show",
			Commands::Save(_) => "save",
			Commands::Resume(_) => "resume",
			Commands::Inspect { .. } => "inspect",
			Commands::Link { .. } => "link",
			Commands::Notes { .. } => "notes",
			Commands::Reset { .. } => "reset",
		}
	}
}

#[derive(Args, Debug, Default)]
pub struct SaveArgs {
	/// Token format (plain, compressed, lz); defaults to the configured format
	#[arg(long, short = 't', value_name = "FORMAT")]
	pub token_format: Option<TokenFormat>,

	/// Also build a resume link
	#[arg(long)]
	pub link: bool,

	/// Also issue a short code for this device
	#[arg(long)]
	pub code: bool,

	/// Copy the link (or the token) to the clipboard
	#[arg(long)]
	pub copy: bool,
}

#[derive(Args, Debug)]
pub struct ResumeArgs {
	/// Token, resume link or link fragment
	#[arg(required_unless_present = "code", conflicts_with = "code")]
	pub input: Option<String>,

	/// Short code issued on this device
	#[arg(long, value_name = "CODE")]
	pub code: Option<String>,
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn parse_set_with_wire_field_name() {
		let cli = Cli::try_parse_from(["resume", "set", "branch_choice", "weather"]).unwrap();
		match cli.command {
			Commands::Set { field, value } => {
				assert_eq!(field, Field::BranchChoice);
				assert_eq!(value, "weather");
			}
			other => panic!("expected set, got {other:?}"),
		}
	}

	#[test]
	fn parse_rejects_unknown_field() {
		assert!(Cli::try_parse_from(["resume", "set", "favourite_colour", "blue"]).is_err());
	}

	#[test]
	fn parse_save_flags() {
		let cli = Cli::try_parse_from(["resume", "save", "-t", "lz", "--link", "--code", "--copy"]).unwrap();
		match cli.command {
			Commands::Save(args) => {
				assert_eq!(args.token_format, Some(TokenFormat::Lz));
				assert!(args.link && args.code && args.copy);
			}
			other => panic!("expected save, got {other:?}"),
		}
	}

	#[test]
	fn parse_resume_requires_input_or_code() {
		assert!(Cli::try_parse_from(["resume", "resume"]).is_err());
		assert!(Cli::try_parse_from(["resume", "resume", "v-plain.e30", "--code", "ABCDEF"]).is_err());

		let cli = Cli::try_parse_from(["resume", "resume", "--code", "abcdef"]).unwrap();
		match cli.command {
			Commands::Resume(args) => assert_eq!(args.code.as_deref(), Some("abcdef")),
			other => panic!("expected resume, got {other:?}"),
		}
	}

	#[test]
	fn parse_global_flags_after_subcommand() {
		let cli = Cli::try_parse_from(["resume", "show", "-vv", "-f", "json", "--store", "/tmp/state.json"]).unwrap();
		assert_eq!(cli.verbose, 2);
		assert_eq!(cli.format, OutputFormat::Json);
		assert_eq!(cli.store, Some(PathBuf::from("/tmp/state.json")));
	}

	#[test]
	fn default_format_is_text() {
		let cli = Cli::try_parse_from(["resume", "show"]).unwrap();
		assert_eq!(cli.format, OutputFormat::Text);
		assert_eq!(cli.command.name(), "show");
	}
}
