use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	match &config.catalog_path {
		Some(path) => {
			let _ = writeln!(out, "  Catalog: {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Catalog: (built-in appointments)");
		}
	}
	let _ = writeln!(out, "  Theme: {}", config.theme_name);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(
		out,
		"  Start in search: {}",
		bool_to_word(config.start_in_search)
	);
	let _ = writeln!(out, "  Title: {}", config.labels.title);
	let _ = writeln!(out, "  Heading: {}", config.labels.heading);
	let _ = writeln!(out, "  Log level: {}", config.logging.level);
	let _ = writeln!(out, "  Log file: {}", config.logging.file.display());
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
