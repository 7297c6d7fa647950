use ratatui::{
	Frame,
	layout::{Alignment, Rect},
	text::{Line, Span},
	widgets::{Block, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::centered_area;
use crate::screen::{ConfirmChoice, DeleteConfirmation, Dialog};
use crate::tui::theme::Theme;

const MAX_DIALOG_WIDTH: u16 = 60;

/// Draw `dialog` as a bordered overlay centred in `area`.
pub fn render_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog, theme: &Theme) {
	let (body, buttons) = match dialog {
		Dialog::Notice(notice) => (
			notice.lines.clone(),
			vec![Span::styled(
				format!(" {} ", notice.dismiss_label()),
				theme.button_focus,
			)],
		),
		Dialog::ConfirmDelete(confirmation) => {
			(vec![confirmation.message()], confirm_buttons(confirmation, theme))
		}
	};

	let content_width = body
		.iter()
		.map(|line| line.width())
		.chain([dialog.title().width() + 2])
		.chain([buttons.iter().map(Span::width).sum::<usize>()])
		.max()
		.unwrap_or(0);
	let width = u16::try_from(content_width + 4)
		.unwrap_or(u16::MAX)
		.min(MAX_DIALOG_WIDTH);
	let inner_width = usize::from(width.saturating_sub(4)).max(1);
	let body_rows: usize = body
		.iter()
		.map(|line| line.width().max(1).div_ceil(inner_width))
		.sum();
	let height = u16::try_from(body_rows + 4).unwrap_or(u16::MAX);

	let popup = centered_area(area, width, height);
	let mut lines: Vec<Line> = body.into_iter().map(Line::from).collect();
	lines.push(Line::default());
	lines.push(Line::from(buttons).alignment(Alignment::Center));

	let block = Block::bordered()
		.title(format!(" {} ", dialog.title()))
		.style(theme.dialog);
	let paragraph = Paragraph::new(lines)
		.block(block)
		.wrap(Wrap { trim: true })
		.style(theme.dialog);

	frame.render_widget(Clear, popup);
	frame.render_widget(paragraph, popup);
}

fn confirm_buttons(confirmation: &DeleteConfirmation, theme: &Theme) -> Vec<Span<'static>> {
	let (cancel_style, confirm_style) = match confirmation.choice {
		ConfirmChoice::Cancel => (theme.button_focus, theme.delete_button),
		ConfirmChoice::Confirm => (theme.dialog, theme.button_focus),
	};
	vec![
		Span::styled(format!(" {} ", DeleteConfirmation::CANCEL_LABEL), cancel_style),
		Span::raw("  "),
		Span::styled(format!(" {} ", DeleteConfirmation::CONFIRM_LABEL), confirm_style),
	]
}
