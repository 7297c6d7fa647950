use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `odontolife` binary.
#[derive(Parser, Debug)]
#[command(
	name = "odontolife",
	version,
	long_version = long_version(),
	about = "Searchable list of dental clinic appointments",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ODONTOLIFE_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "Load appointments from a JSON or TOML file (default: built-in records)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "TEXT",
		help = "Initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 's',
		long = "search",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Open the search bar on start (default: closed)"
	)]
	pub(crate) start_in_search: Option<bool>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: odontolife)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(long = "list-themes", help = "List available themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'l',
		long = "list",
		help = "Print the matching appointments and exit without opening the screen"
	)]
	pub(crate) list: bool,
	#[arg(
		short,
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Output format for --list"
	)]
	pub(crate) output: OutputFormat,
	#[arg(long = "print-config", help = "Print the effective configuration")]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log level: off, error, warn, info, debug or trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: odontolife.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
}
