use super::types::ThemeDefinition;

pub mod odontolife;
pub mod plain;

pub use odontolife::ODONTOLIFE;
pub use plain::PLAIN;

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] =
	&[odontolife::DEFINITION, plain::DEFINITION];
