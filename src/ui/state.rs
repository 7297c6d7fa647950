use ratatui::widgets::ListState;

use super::config::UiLabels;
use crate::catalog::{AppointmentRecord, RecordId};
use crate::screen::AppointmentListScreen;
use crate::tui::input::SearchInput;
use crate::tui::theme::Theme;

/// What the user left behind when closing the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitSummary {
	pub query: String,
	pub expanded: Vec<RecordId>,
}

pub struct App<'a> {
	pub screen: AppointmentListScreen,
	pub search_input: SearchInput<'a>,
	/// Cursor over the visible cards.
	pub list_state: ListState,
	pub(crate) labels: UiLabels,
	pub theme: Theme,
}

impl<'a> App<'a> {
	pub fn new(screen: AppointmentListScreen) -> Self {
		Self::with_labels(screen, UiLabels::default())
	}

	pub fn with_labels(screen: AppointmentListScreen, labels: UiLabels) -> Self {
		let theme = Theme::default();
		let mut search_input = SearchInput::new(screen.query());
		search_input.set_placeholder(labels.search_placeholder.clone(), theme.hint);
		search_input.set_style(theme.search);

		let mut app = Self {
			screen,
			search_input,
			list_state: ListState::default(),
			labels,
			theme,
		};
		app.ensure_selection();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.search_input
			.set_placeholder(self.labels.search_placeholder.clone(), theme.hint);
		self.search_input.set_style(theme.search);
	}

	#[must_use]
	pub fn labels(&self) -> &UiLabels {
		&self.labels
	}

	/// Record under the cursor, if any card is visible.
	#[must_use]
	pub fn selected_record(&self) -> Option<&AppointmentRecord> {
		self.list_state
			.selected()
			.and_then(|position| self.screen.visible_record(position))
	}

	pub(crate) fn selected_id(&self) -> Option<RecordId> {
		self.selected_record().map(|record| record.id.clone())
	}

	/// Keep the cursor inside the visible range after the view changed.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.screen.visible_len();
		if len == 0 {
			self.list_state.select(None);
		} else {
			match self.list_state.selected() {
				None => self.list_state.select(Some(0)),
				Some(selected) if selected >= len => {
					self.list_state.select(Some(len.saturating_sub(1)));
				}
				Some(_) => {}
			}
		}
	}

	pub(crate) fn exit_summary(&self) -> ExitSummary {
		ExitSummary {
			query: self.screen.query().to_string(),
			expanded: self.screen.expanded_ids().iter().cloned().collect(),
		}
	}
}
