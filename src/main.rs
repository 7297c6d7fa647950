mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use odontolife::{AppointmentListScreen, Catalog, ScreenUi, logging, tui::theme};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::initialize(&resolved.logging)?;
	let catalog = load_catalog(&resolved)?;

	if cli.list {
		return print_listing(cli.output, catalog, &resolved);
	}

	run_screen(catalog, resolved)
}

fn load_catalog(settings: &ResolvedConfig) -> Result<Catalog> {
	let catalog = match &settings.catalog_path {
		Some(path) => Catalog::from_path(path)
			.with_context(|| format!("failed to load appointments from {}", path.display()))?,
		None => Catalog::seed(),
	};
	tracing::info!(records = catalog.len(), "catalog loaded");
	Ok(catalog)
}

/// Print the records matching the initial query without opening the screen.
fn print_listing(format: OutputFormat, catalog: Catalog, settings: &ResolvedConfig) -> Result<()> {
	let mut screen = AppointmentListScreen::new(catalog);
	screen.set_search_query(settings.initial_query.as_str());

	match format {
		OutputFormat::Plain => print_plain(screen.visible_records(), &settings.labels.empty_text),
		OutputFormat::Json => print_json(screen.query(), screen.visible_records())?,
	}

	Ok(())
}

fn run_screen(catalog: Catalog, settings: ResolvedConfig) -> Result<()> {
	let summary = ScreenUi::new(catalog)
		.with_labels(settings.labels)
		.with_theme(settings.theme)
		.with_initial_query(settings.initial_query)
		.with_search_open(settings.start_in_search)
		.run()?;

	tracing::info!(
		query = %summary.query,
		expanded = summary.expanded.len(),
		"appointment screen closed"
	);
	Ok(())
}
