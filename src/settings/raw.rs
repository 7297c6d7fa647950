use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

use odontolife::logging::{self, LogOptions};
use odontolife::tui::theme;
use odontolife::UiLabels;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
	start_in_search: Option<bool>,
	title: Option<String>,
	heading: Option<String>,
	search_placeholder: Option<String>,
	empty_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values and record
	/// which settings came from flags.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) -> ConfigSources {
		let mut sources = ConfigSources::default();

		if let Some(path) = cli.catalog.clone() {
			self.catalog.path = Some(path);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
			sources.theme = Some(SettingSource::CliFlag("--theme"));
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(value) = cli.start_in_search {
			self.ui.start_in_search = Some(value);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
			sources.log_level = Some(SettingSource::CliFlag("--log-level"));
		}
		if let Some(file) = cli.log_file.clone() {
			self.logging.file = Some(file);
		}

		sources
	}

	/// Validate the merged values and fill in defaults.
	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<ResolvedConfig, ConfigError> {
		let theme_name = match self.ui.theme.as_deref() {
			None => theme::DEFAULT_THEME,
			Some(name) => theme::canonical_name(name).ok_or_else(|| {
				ConfigError::invalid(
					"ui.theme",
					name,
					sources.source_for_theme(),
					format!("unknown theme; available: {}", theme::names().join(", ")),
				)
			})?,
		};
		let theme = theme::by_name(theme_name).unwrap_or_default();

		let level = match self.logging.level.as_deref() {
			None => DEFAULT_LOG_LEVEL,
			Some(value) => value.trim().parse::<LevelFilter>().map_err(|_| {
				ConfigError::invalid(
					"logging.level",
					value,
					sources.source_for_log_level(),
					"expected one of off, error, warn, info, debug, trace",
				)
			})?,
		};

		let log_file = match self.logging.file {
			Some(path) => absolutize(path),
			None => logging::default_log_file().map_err(|err| {
				ConfigError::invalid(
					"logging.file",
					"",
					SettingSource::ConfigKey("logging.file"),
					format!("no default log location: {err}"),
				)
			})?,
		};

		let labels = resolve_labels(self.ui.clone())?;

		Ok(ResolvedConfig {
			catalog_path: self.catalog.path.map(absolutize),
			theme_name,
			theme,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			start_in_search: self.ui.start_in_search.unwrap_or(false),
			labels,
			logging: LogOptions {
				level,
				file: log_file,
			},
		})
	}
}

fn resolve_labels(ui: UiSection) -> Result<UiLabels, ConfigError> {
	let mut labels = UiLabels::default();
	let overrides = [
		("ui.title", ui.title, &mut labels.title),
		("ui.heading", ui.heading, &mut labels.heading),
		(
			"ui.search_placeholder",
			ui.search_placeholder,
			&mut labels.search_placeholder,
		),
		("ui.empty_text", ui.empty_text, &mut labels.empty_text),
	];
	for (key, value, slot) in overrides {
		let Some(value) = value else {
			continue;
		};
		let trimmed = value.trim();
		if trimmed.is_empty() {
			return Err(ConfigError::invalid(
				key,
				value.as_str(),
				SettingSource::ConfigKey(key),
				"must not be empty",
			));
		}
		*slot = trimmed.to_string();
	}
	Ok(labels)
}

fn absolutize(path: PathBuf) -> PathBuf {
	if path.is_relative()
		&& let Ok(current) = env::current_dir()
	{
		return current.join(path);
	}
	path
}
