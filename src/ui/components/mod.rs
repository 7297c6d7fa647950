//! Widgets composing the appointment screen.

mod cards;
mod dialog;
mod header;

pub use cards::{card_items, render_cards, render_empty};
pub use dialog::render_dialog;
pub use header::{HeaderContext, render_header};

use ratatui::layout::Rect;

/// Rectangle of at most `width` x `height` centred inside `area`.
#[must_use]
pub fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}
