use std::path::PathBuf;

use odontolife::logging::LogOptions;
use odontolife::{Theme, UiLabels};

mod errors;
mod sources;
mod summary;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Catalog file to load instead of the built-in records.
	pub catalog_path: Option<PathBuf>,
	pub theme_name: &'static str,
	pub theme: Theme,
	pub initial_query: String,
	pub start_in_search: bool,
	pub labels: UiLabels,
	pub logging: LogOptions,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
