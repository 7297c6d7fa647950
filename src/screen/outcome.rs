use std::fmt;

use crate::catalog::RecordId;

/// Record-level actions offered on an expanded card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
	Edit,
	Delete,
}

impl fmt::Display for RecordAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RecordAction::Edit => f.write_str("edit"),
			RecordAction::Delete => f.write_str("delete"),
		}
	}
}

/// Result of an edit/delete request against the screen.
///
/// Neither action changes the catalog. A confirmed action reports
/// [`ActionOutcome::NotImplemented`] so callers never mistake the completion
/// notice for a real mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
	/// The id does not exist in the catalog; no dialog was opened.
	NotFound(RecordId),
	/// A delete confirmation is now open for the id.
	AwaitingConfirmation(RecordId),
	/// The user backed out of a delete confirmation.
	Cancelled(RecordId),
	/// The action was acknowledged with a notice but no data changed.
	NotImplemented { action: RecordAction, id: RecordId },
	/// Confirm/cancel was requested while no confirmation was open.
	NoPendingConfirmation,
}
