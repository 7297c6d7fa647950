//! Single-line search field backed by `tui-textarea`.

use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, Key, TextArea};

pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current text of the field.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key press to the field. Returns `true` when the text changed.
	///
	/// Keys that would break the single-line shape (newlines, tabs) are
	/// rejected.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let input = Input::from(key);
		if is_line_break(&input) || input.key == Key::Tab {
			return false;
		}
		self.textarea.input(input)
	}

	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// Widget to render; `&TextArea` implements `ratatui::widgets::Widget`.
	#[must_use]
	pub fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

fn is_line_break(input: &Input) -> bool {
	match input.key {
		Key::Enter => true,
		Key::Char('m') | Key::Char('j') => input.ctrl,
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_after_initial_text() {
		let mut input = SearchInput::new("con");
		assert!(input.input(press(KeyCode::Char('s'))));
		assert_eq!(input.text(), "cons");
		assert!(input.input(press(KeyCode::Backspace)));
		assert_eq!(input.text(), "con");
	}

	#[test]
	fn line_breaks_and_tabs_are_rejected() {
		let mut input = SearchInput::new("abc");
		assert!(!input.input(press(KeyCode::Enter)));
		assert!(!input.input(press(KeyCode::Tab)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "abc");
	}
}
