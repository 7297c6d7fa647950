use anyhow::Result;

use super::config::UiLabels;
use super::state::{App, ExitSummary};
use crate::catalog::Catalog;
use crate::screen::AppointmentListScreen;
use crate::tui::theme::Theme;

/// Configure the appointment screen before running it in the terminal.
pub struct ScreenUi {
	catalog: Catalog,
	labels: UiLabels,
	theme: Option<Theme>,
	initial_query: String,
	search_open: bool,
}

impl ScreenUi {
	pub fn new(catalog: Catalog) -> Self {
		Self {
			catalog,
			labels: UiLabels::default(),
			theme: None,
			initial_query: String::new(),
			search_open: false,
		}
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Start with the search bar open instead of the title.
	pub fn with_search_open(mut self, open: bool) -> Self {
		self.search_open = open;
		self
	}

	/// Build the [`App`] without touching the terminal.
	pub fn build<'a>(self) -> App<'a> {
		let mut screen = AppointmentListScreen::new(self.catalog);
		if !self.initial_query.is_empty() {
			screen.set_search_query(self.initial_query);
		}
		if self.search_open {
			screen.toggle_search_bar();
		}

		let mut app = App::with_labels(screen, self.labels);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app
	}

	/// Run the interactive screen until the user quits.
	pub fn run(self) -> Result<ExitSummary> {
		let mut app = self.build();
		app.run()
	}
}
