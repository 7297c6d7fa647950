use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{AppointmentRecord, Catalog, CatalogError};

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
	#[serde(default)]
	appointments: Vec<AppointmentRecord>,
}

impl Catalog {
	/// Load a catalog from a JSON (`.json`) or TOML file. The file is only read.
	pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
		let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
			path: path.to_path_buf(),
			source,
		})?;

		let is_json = path
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

		let parsed: CatalogFile = if is_json {
			serde_json::from_str(&contents).map_err(|err| parse_error(path, err))?
		} else {
			toml::from_str(&contents).map_err(|err| parse_error(path, err))?
		};

		Self::new(parsed.appointments)
	}
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> CatalogError {
	CatalogError::Parse {
		path: path.to_path_buf(),
		reason: err.to_string(),
	}
}
