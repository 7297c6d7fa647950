use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout},
	widgets::Paragraph,
};

use super::components::{
	HeaderContext, render_cards, render_dialog, render_empty, render_header,
};
use super::state::App;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();

		let [header, _, heading, cards, footer] = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.areas(area);

		render_header(
			frame,
			header,
			HeaderContext {
				search_input: &self.search_input,
				search_active: self.screen.is_search_bar_active(),
				labels: &self.labels,
				theme: &self.theme,
			},
		);

		let heading_widget = Paragraph::new(self.labels.heading.as_str())
			.alignment(Alignment::Center)
			.style(self.theme.heading);
		frame.render_widget(heading_widget, heading);

		if self.screen.shows_empty_placeholder() {
			render_empty(frame, cards, &self.labels.empty_text, &self.theme);
		} else {
			render_cards(
				frame,
				cards,
				&mut self.list_state,
				&self.screen,
				&self.labels,
				&self.theme,
			);
		}

		let hint = Paragraph::new(self.labels.hint.as_str()).style(self.theme.hint);
		frame.render_widget(hint, footer);

		if let Some(dialog) = self.screen.dialog() {
			render_dialog(frame, area, dialog, &self.theme);
		}
	}
}
