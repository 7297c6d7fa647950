use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, ExitSummary};
use crate::screen::{ConfirmChoice, Dialog};

impl<'a> App<'a> {
	/// Process a key press and return a summary once the user quits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<ExitSummary> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		if ctrl && key.code == KeyCode::Char('c') {
			return Some(self.exit_summary());
		}

		if self.screen.dialog().is_some() {
			self.handle_dialog_key(key);
			return None;
		}

		if self.screen.is_search_bar_active() {
			self.handle_search_key(key);
			return None;
		}

		self.handle_list_key(key)
	}

	fn handle_dialog_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => self.screen.dismiss_dialog(),
			KeyCode::Left
			| KeyCode::Right
			| KeyCode::Tab
			| KeyCode::BackTab
			| KeyCode::Char('h')
			| KeyCode::Char('l') => self.screen.toggle_confirm_choice(),
			KeyCode::Enter | KeyCode::Char(' ') => {
				let choice = match self.screen.dialog() {
					Some(Dialog::ConfirmDelete(confirmation)) => Some(confirmation.choice),
					_ => None,
				};
				match choice {
					Some(ConfirmChoice::Confirm) => {
						self.screen.confirm_delete();
					}
					Some(ConfirmChoice::Cancel) => {
						self.screen.cancel_delete();
					}
					None => self.screen.dismiss_dialog(),
				}
			}
			_ => {}
		}
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => self.screen.toggle_search_bar(),
			KeyCode::Char('f') if ctrl => self.screen.toggle_search_bar(),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			KeyCode::Enter => self.toggle_selected(),
			_ => {
				if self.search_input.input(key) {
					let text = self.search_input.text().to_string();
					self.screen.set_search_query(text);
					self.ensure_selection();
				}
			}
		}
	}

	fn handle_list_key(&mut self, key: KeyEvent) -> Option<ExitSummary> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.exit_summary()),
			KeyCode::Char('f') if ctrl => self.screen.toggle_search_bar(),
			KeyCode::Char('/') => self.screen.toggle_search_bar(),
			KeyCode::Char('n') => self.screen.show_notifications(),
			KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
			KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
			KeyCode::Home | KeyCode::Char('g') => self.select_first(),
			KeyCode::End | KeyCode::Char('G') => self.select_last(),
			KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
			KeyCode::Char('e') => {
				if let Some(id) = self.selected_expanded_id() {
					self.screen.request_edit(id.as_str());
				}
			}
			KeyCode::Char('d') => {
				if let Some(id) = self.selected_expanded_id() {
					self.screen.request_delete(id.as_str());
				}
			}
			_ => {}
		}
		None
	}

	fn toggle_selected(&mut self) {
		if let Some(id) = self.selected_id() {
			self.screen.toggle_expand(id.as_str());
		}
	}

	/// Edit and delete are only reachable from an expanded card.
	fn selected_expanded_id(&self) -> Option<crate::catalog::RecordId> {
		self.selected_id()
			.filter(|id| self.screen.is_expanded(id.as_str()))
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected > 0
		{
			self.list_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected + 1 < self.screen.visible_len()
		{
			self.list_state.select(Some(selected + 1));
		}
	}

	fn select_first(&mut self) {
		if self.screen.visible_len() > 0 {
			self.list_state.select(Some(0));
		}
	}

	fn select_last(&mut self) {
		let len = self.screen.visible_len();
		if len > 0 {
			self.list_state.select(Some(len - 1));
		}
	}
}
