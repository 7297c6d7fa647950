use std::path::PathBuf;

use thiserror::Error;

use super::RecordId;

/// Reasons a catalog could not be built or loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("appointment id {0} appears more than once")]
	DuplicateId(RecordId),
	#[error("appointment at position {position} has an empty id")]
	EmptyId { position: usize },
	#[error("failed to read catalog file {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse catalog file {path}: {reason}")]
	Parse { path: PathBuf, reason: String },
}
