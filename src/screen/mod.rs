//! State and operations of the appointment list screen.
//!
//! [`AppointmentListScreen`] owns the injected [`Catalog`] together with the
//! ephemeral UI state (expanded cards, search text, filtered view, header mode
//! and the open dialog). It knows nothing about terminals; the `ui` module
//! drives it from key events and renders it.

mod dialog;
mod expanded;
mod outcome;

pub use dialog::{ConfirmChoice, DeleteConfirmation, Dialog, Notice, NoticeKind};
pub use expanded::ExpandedSet;
pub use outcome::{ActionOutcome, RecordAction};

use crate::catalog::{AppointmentRecord, Catalog, RecordId};

pub struct AppointmentListScreen {
	catalog: Catalog,
	expanded: ExpandedSet,
	query: String,
	/// Catalog indices of the records matching `query`, in catalog order.
	visible: Vec<usize>,
	search_bar_active: bool,
	dialog: Option<Dialog>,
}

impl AppointmentListScreen {
	pub fn new(catalog: Catalog) -> Self {
		let visible = (0..catalog.len()).collect();
		Self {
			catalog,
			expanded: ExpandedSet::default(),
			query: String::new(),
			visible,
			search_bar_active: false,
			dialog: None,
		}
	}

	#[must_use]
	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	/// Flip the detail panel of `id`. Returns the new state, or `None` when the
	/// id is not part of the catalog.
	pub fn toggle_expand(&mut self, id: &str) -> Option<bool> {
		let record = self.catalog.get(id)?;
		let expanded = self.expanded.toggle(&record.id);
		tracing::debug!(id, expanded, "toggled appointment card");
		Some(expanded)
	}

	#[must_use]
	pub fn is_expanded(&self, id: &str) -> bool {
		self.expanded.contains(id)
	}

	#[must_use]
	pub fn expanded_ids(&self) -> &ExpandedSet {
		&self.expanded
	}

	pub fn request_edit(&mut self, id: &str) -> ActionOutcome {
		let Some(record) = self.catalog.get(id) else {
			return not_found(id);
		};
		let id = record.id.clone();
		tracing::info!(id = %id, "edit requested");
		self.dialog = Some(Dialog::Notice(Notice::edit(&id)));
		ActionOutcome::NotImplemented {
			action: RecordAction::Edit,
			id,
		}
	}

	pub fn request_delete(&mut self, id: &str) -> ActionOutcome {
		let Some(record) = self.catalog.get(id) else {
			return not_found(id);
		};
		let id = record.id.clone();
		tracing::info!(id = %id, "delete confirmation opened");
		self.dialog = Some(Dialog::ConfirmDelete(DeleteConfirmation::new(id.clone())));
		ActionOutcome::AwaitingConfirmation(id)
	}

	/// Accept the open delete confirmation. The record stays in the catalog and
	/// in the visible list; only a completion notice is shown.
	pub fn confirm_delete(&mut self) -> ActionOutcome {
		let Some(Dialog::ConfirmDelete(confirmation)) = self.dialog.take_if(is_confirmation) else {
			return ActionOutcome::NoPendingConfirmation;
		};
		let id = confirmation.id;
		tracing::info!(id = %id, "delete confirmed; catalog left unchanged");
		self.dialog = Some(Dialog::Notice(Notice::deleted(&id)));
		ActionOutcome::NotImplemented {
			action: RecordAction::Delete,
			id,
		}
	}

	pub fn cancel_delete(&mut self) -> ActionOutcome {
		match self.dialog.take_if(is_confirmation) {
			Some(Dialog::ConfirmDelete(confirmation)) => {
				tracing::debug!(id = %confirmation.id, "delete cancelled");
				ActionOutcome::Cancelled(confirmation.id)
			}
			_ => ActionOutcome::NoPendingConfirmation,
		}
	}

	/// Move focus between the buttons of an open delete confirmation.
	pub fn toggle_confirm_choice(&mut self) {
		if let Some(Dialog::ConfirmDelete(confirmation)) = self.dialog.as_mut() {
			confirmation.choice = confirmation.choice.toggled();
		}
	}

	/// Close whatever dialog is open. A pending delete counts as cancelled.
	pub fn dismiss_dialog(&mut self) {
		if matches!(self.dialog, Some(Dialog::ConfirmDelete(_))) {
			self.cancel_delete();
		} else {
			self.dialog = None;
		}
	}

	pub fn show_notifications(&mut self) {
		self.dialog = Some(Dialog::Notice(Notice::notifications()));
	}

	#[must_use]
	pub fn dialog(&self) -> Option<&Dialog> {
		self.dialog.as_ref()
	}

	pub fn set_search_query(&mut self, text: impl Into<String>) {
		self.query = text.into();
		self.refilter();
		tracing::debug!(query = %self.query, visible = self.visible.len(), "search query updated");
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Switch the header between title and search input. The query and the
	/// filtered view survive leaving search mode.
	pub fn toggle_search_bar(&mut self) {
		self.search_bar_active = !self.search_bar_active;
	}

	#[must_use]
	pub fn is_search_bar_active(&self) -> bool {
		self.search_bar_active
	}

	pub fn visible_records(&self) -> impl Iterator<Item = &AppointmentRecord> + '_ {
		self.visible
			.iter()
			.filter_map(|&index| self.catalog.get_index(index))
	}

	#[must_use]
	pub fn visible_record(&self, position: usize) -> Option<&AppointmentRecord> {
		self.visible
			.get(position)
			.and_then(|&index| self.catalog.get_index(index))
	}

	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.visible.len()
	}

	#[must_use]
	pub fn is_visible(&self, id: &str) -> bool {
		self.catalog
			.position(id)
			.is_some_and(|index| self.visible.contains(&index))
	}

	/// Whether the list should be replaced by the "no results" placeholder.
	#[must_use]
	pub fn shows_empty_placeholder(&self) -> bool {
		self.visible.is_empty()
	}

	fn refilter(&mut self) {
		if self.query.is_empty() {
			self.visible = (0..self.catalog.len()).collect();
			return;
		}
		let needle = self.query.to_lowercase();
		self.visible = self
			.catalog
			.iter()
			.enumerate()
			.filter(|(_, record)| record.matches_lowercase(&needle))
			.map(|(index, _)| index)
			.collect();
	}
}

fn is_confirmation(dialog: &mut Dialog) -> bool {
	matches!(dialog, Dialog::ConfirmDelete(_))
}

fn not_found(id: &str) -> ActionOutcome {
	tracing::warn!(id, "action requested for unknown appointment");
	ActionOutcome::NotFound(RecordId::new(id))
}

#[cfg(test)]
mod tests;
