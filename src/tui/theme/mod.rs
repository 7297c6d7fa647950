mod builtins;
mod registry;
mod types;

pub use builtins::{ODONTOLIFE, PLAIN};
pub use registry::{by_name, canonical_name, names};
pub use types::{Theme, ThemeDefinition};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = builtins::odontolife::NAME;

impl Default for Theme {
	fn default() -> Self {
		ODONTOLIFE
	}
}
