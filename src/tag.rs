//! Stamping finished items with the day they were finished.

use crate::{
	date::has_date_tag,
	journal::{TodoItem, TodoJournal},
};

impl TodoItem {
	/// Append ` #<date>` to this item when it is done and not tagged yet, then recurse
	/// into every sub-item regardless.
	pub fn tag_completed(&mut self, date: &str) {
		if date.is_empty() {
			return;
		}
		if self.completed && !has_date_tag(&self.text) {
			self.text.push_str(" #");
			self.text.push_str(date);
		}
		for item in &mut self.sub_items {
			item.tag_completed(date);
		}
	}
}

/// Tag every finished item, top-level and nested. Meant for the completed side of a split.
pub fn tag_completed(journal: &mut TodoJournal, date: &str) {
	for item in journal.days.iter_mut().flat_map(|day| day.items.iter_mut()) {
		item.tag_completed(date);
	}
}

/// Tag finished descendants only, never the top-level items themselves. Meant for the open
/// side of a split, where a parent is still pending though some of its steps are done.
pub fn tag_completed_sub_items(journal: &mut TodoJournal, date: &str) {
	for item in journal.days.iter_mut().flat_map(|day| day.items.iter_mut()) {
		for sub in &mut item.sub_items {
			sub.tag_completed(date);
		}
	}
}
