use serde::{Deserialize, Serialize};

use crate::SectionId;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExpandableEntry {
	pub title: String,
	pub body: String
}

// opening one entry never closes another
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisclosureGroup {
	open: Vec<bool>
}

impl DisclosureGroup {
	pub fn new(len: usize) -> Self {
		Self { open: vec![false; len] }
	}

	pub fn is_open(&self, idx: usize) -> bool {
		self.open.get(idx).copied().unwrap_or(false)
	}

	pub fn toggle(&mut self, idx: usize) {
		if let Some(open) = self.open.get_mut(idx) {
			*open = !*open;
		}
	}
}

pub fn panel_ids(section: SectionId, idx: usize) -> (String, String) {
	(
		format!("{section}-entry-{idx}"),
		format!("{section}-panel-{idx}")
	)
}
