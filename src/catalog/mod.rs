//! Appointment records and the ordered catalog the screen is built from.
//!
//! A [`Catalog`] is validated once at construction (ids must be unique and
//! non-empty) and is immutable afterwards. The screen only ever reads it.

mod error;
mod load;
mod record;
mod seed;

pub use error::CatalogError;
pub use record::{AppointmentRecord, RecordId};

use indexmap::IndexMap;
use indexmap::map::Entry;

/// Immutable, insertion-ordered collection of appointments keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
	records: IndexMap<RecordId, AppointmentRecord>,
}

impl Catalog {
	/// Build a catalog from records in display order.
	pub fn new<I>(records: I) -> Result<Self, CatalogError>
	where
		I: IntoIterator<Item = AppointmentRecord>,
	{
		let mut map = IndexMap::new();
		for (position, record) in records.into_iter().enumerate() {
			if record.id.as_str().is_empty() {
				return Err(CatalogError::EmptyId { position });
			}
			match map.entry(record.id.clone()) {
				Entry::Occupied(entry) => {
					return Err(CatalogError::DuplicateId(entry.key().clone()));
				}
				Entry::Vacant(entry) => {
					entry.insert(record);
				}
			}
		}
		Ok(Self { records: map })
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	#[must_use]
	pub fn get(&self, id: &str) -> Option<&AppointmentRecord> {
		self.records.get(id)
	}

	#[must_use]
	pub fn contains(&self, id: &str) -> bool {
		self.records.contains_key(id)
	}

	/// Declaration index of `id`, if present.
	#[must_use]
	pub fn position(&self, id: &str) -> Option<usize> {
		self.records.get_index_of(id)
	}

	#[must_use]
	pub fn get_index(&self, index: usize) -> Option<&AppointmentRecord> {
		self.records.get_index(index).map(|(_, record)| record)
	}

	pub fn iter(&self) -> impl Iterator<Item = &AppointmentRecord> + '_ {
		self.records.values()
	}
}

impl<'a> IntoIterator for &'a Catalog {
	type Item = &'a AppointmentRecord;
	type IntoIter = indexmap::map::Values<'a, RecordId, AppointmentRecord>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.values()
	}
}
