use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of an appointment within a [`Catalog`](super::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for RecordId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for RecordId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for RecordId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for RecordId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

/// A single scheduled appointment as shown on a card.
///
/// Every field except `id` is display text: times and document numbers are
/// rendered exactly as stored and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
	pub id: RecordId,
	/// Appointment category, used as the card title.
	pub title: String,
	pub patient_name: String,
	pub time: String,
	/// Patient document number (CPF).
	pub document_id: String,
	pub procedure_type: String,
}

impl AppointmentRecord {
	pub fn new(
		id: impl Into<RecordId>,
		title: impl Into<String>,
		patient_name: impl Into<String>,
		time: impl Into<String>,
		document_id: impl Into<String>,
		procedure_type: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			patient_name: patient_name.into(),
			time: time.into(),
			document_id: document_id.into(),
			procedure_type: procedure_type.into(),
		}
	}

	/// Return `true` when the lowercase `needle` occurs in the title or the
	/// patient name, ignoring case.
	#[must_use]
	pub fn matches_lowercase(&self, needle: &str) -> bool {
		self.title.to_lowercase().contains(needle)
			|| self.patient_name.to_lowercase().contains(needle)
	}
}
