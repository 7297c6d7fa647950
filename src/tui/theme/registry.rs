use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::{Theme, ThemeDefinition};

/// Look up a built-in theme by name or alias, ignoring case and surrounding
/// whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	find(name).map(|definition| definition.theme)
}

/// Canonical names of the built-in themes, in registration order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

/// Resolve a name or alias to its canonical theme name.
#[must_use]
pub fn canonical_name(name: &str) -> Option<&'static str> {
	find(name).map(|definition| definition.name)
}

fn find(name: &str) -> Option<&'static ThemeDefinition> {
	let normalized = normalize_name(name);
	BUILT_IN_DEFINITIONS.iter().find(|definition| {
		definition.name == normalized
			|| definition.aliases.iter().any(|alias| *alias == normalized)
	})
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}
