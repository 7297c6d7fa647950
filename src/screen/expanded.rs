use indexmap::IndexSet;

use crate::catalog::RecordId;

/// Ids whose detail panel is open, in the order they were expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSet {
	ids: IndexSet<RecordId>,
}

impl ExpandedSet {
	#[must_use]
	pub fn contains(&self, id: &str) -> bool {
		self.ids.contains(id)
	}

	/// Flip membership of `id` and return whether it is now expanded.
	pub fn toggle(&mut self, id: &RecordId) -> bool {
		if self.ids.shift_remove(id.as_str()) {
			false
		} else {
			self.ids.insert(id.clone());
			true
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &RecordId> + '_ {
		self.ids.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn removal_keeps_remaining_order() {
		let mut set = ExpandedSet::default();
		for id in ["3", "1", "2"] {
			assert!(set.toggle(&RecordId::new(id)));
		}
		assert!(!set.toggle(&RecordId::new("1")));

		let order: Vec<&str> = set.iter().map(RecordId::as_str).collect();
		assert_eq!(order, ["3", "2"]);
		assert!(set.contains("2"));
		assert!(!set.contains("1"));
	}
}
