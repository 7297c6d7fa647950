use ratatui::{
	Frame,
	layout::{Alignment, Rect},
	text::{Line, Span},
	widgets::{List, ListItem, ListState, Paragraph},
};

use crate::catalog::AppointmentRecord;
use crate::screen::AppointmentListScreen;
use crate::tui::theme::Theme;
use crate::ui::UiLabels;

const COLLAPSED_MARKER: &str = "▸";
const EXPANDED_MARKER: &str = "▾";
const DETAIL_INDENT: &str = "   ";

/// Build one list item per visible appointment, in display order.
pub fn card_items(
	screen: &AppointmentListScreen,
	labels: &UiLabels,
	theme: &Theme,
) -> Vec<ListItem<'static>> {
	screen
		.visible_records()
		.map(|record| card(record, screen.is_expanded(record.id.as_str()), labels, theme))
		.collect()
}

fn card(
	record: &AppointmentRecord,
	expanded: bool,
	labels: &UiLabels,
	theme: &Theme,
) -> ListItem<'static> {
	let marker = if expanded {
		EXPANDED_MARKER
	} else {
		COLLAPSED_MARKER
	};
	let mut lines = vec![Line::from(format!("{marker} {}", record.title))];

	if !expanded {
		return ListItem::new(lines).style(theme.card);
	}

	let details = [
		(&labels.patient_label, &record.patient_name),
		(&labels.time_label, &record.time),
		(&labels.document_label, &record.document_id),
		(&labels.procedure_label, &record.procedure_type),
	];
	for (label, value) in details {
		lines.push(Line::from(vec![
			Span::raw(DETAIL_INDENT),
			Span::styled(format!("{label}: {value}"), theme.details),
		]));
	}
	lines.push(Line::from(vec![
		Span::raw(DETAIL_INDENT),
		Span::styled(format!(" {} ", labels.edit_button), theme.edit_button),
		Span::raw("  "),
		Span::styled(format!(" {} ", labels.delete_button), theme.delete_button),
	]));

	ListItem::new(lines).style(theme.card_expanded)
}

pub fn render_cards(
	frame: &mut Frame,
	area: Rect,
	list_state: &mut ListState,
	screen: &AppointmentListScreen,
	labels: &UiLabels,
	theme: &Theme,
) {
	let list = List::new(card_items(screen, labels, theme))
		.highlight_style(theme.cursor)
		.highlight_symbol("› ");
	frame.render_stateful_widget(list, area, list_state);
}

/// Placeholder drawn instead of the list when nothing matches.
pub fn render_empty(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	let empty = Paragraph::new(text)
		.alignment(Alignment::Center)
		.style(theme.empty);
	frame.render_widget(empty, area);
}
