use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Rect},
	widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::input::SearchInput;
use crate::tui::theme::Theme;
use crate::ui::UiLabels;

/// Inputs needed to draw the app bar.
pub struct HeaderContext<'a, 'b> {
	pub search_input: &'a SearchInput<'b>,
	pub search_active: bool,
	pub labels: &'a UiLabels,
	pub theme: &'a Theme,
}

/// Draw the app bar: title or search field on the left, action icons on the
/// right.
pub fn render_header(frame: &mut Frame, area: Rect, ctx: HeaderContext<'_, '_>) {
	frame.render_widget(Block::default().style(ctx.theme.header), area);

	let actions = format!(
		"{}  {}",
		ctx.labels.search_action, ctx.labels.notifications_action
	);
	let actions_width = u16::try_from(actions.width()).unwrap_or(u16::MAX);
	let [content, icons] = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Min(1), Constraint::Length(actions_width + 1)])
		.areas(area);

	if ctx.search_active {
		let field = Rect {
			x: content.x.saturating_add(1),
			width: content.width.saturating_sub(2),
			..content
		};
		frame.render_widget(ctx.search_input.widget(), field);
	} else {
		let title = Paragraph::new(ctx.labels.title.as_str())
			.alignment(Alignment::Center)
			.style(ctx.theme.header);
		frame.render_widget(title, content);
	}

	let icons_widget = Paragraph::new(actions)
		.alignment(Alignment::Right)
		.style(ctx.theme.header);
	frame.render_widget(icons_widget, icons);
}
