//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI while the screen runs, so log lines go to a
//! file instead of stderr. `RUST_LOG` overrides the configured level.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::app_dirs;

const LOG_FILE_NAME: &str = "odontolife.log";

#[derive(Debug, Clone)]
pub struct LogOptions {
	pub level: LevelFilter,
	pub file: PathBuf,
}

/// Default log location inside the data directory.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Install the global subscriber. Fails if the log file cannot be opened or a
/// subscriber is already installed.
pub fn initialize(options: &LogOptions) -> Result<()> {
	let file = open_log_file(&options.file)?;

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::default().add_directive(options.level.into()));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(false)
		.try_init()
		.map_err(|err| anyhow!(err))
}

fn open_log_file(path: &Path) -> Result<fs::File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}

	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}
