//! The todo journal tree.
//!
//! Parents own their children outright; there are no back references. The tree is only
//! ever mutated by the date tagger once parsed.

use serde::{Deserialize, Serialize};

use crate::dialect::{COMPLETED_MARKER, OPEN_MARKER};

/// A single checklist entry.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TodoItem {
	/// Only the lowercase `x` marker counts as done.
	pub completed: bool,
	/// Label without marker and indentation. Date tags get appended to it.
	pub text: String,
	/// Nested checklist items, in document order.
	pub sub_items: Vec<TodoItem>,
	/// Notes attached to this item, tab-normalized, otherwise verbatim (indentation included).
	pub bullet_lines: Vec<String>,
}

impl TodoItem {
	pub fn new(completed: bool, text: impl Into<String>) -> Self {
		Self {
			completed,
			text: text.into(),
			..Default::default()
		}
	}

	/// Build from the marker character found between the brackets.
	pub fn from_marker(marker: char, text: impl Into<String>) -> Self {
		Self::new(marker == COMPLETED_MARKER, text)
	}

	/// Character written between the brackets when serializing.
	pub fn marker(&self) -> char {
		if self.completed { COMPLETED_MARKER } else { OPEN_MARKER }
	}

	pub fn with_sub_items(mut self, sub_items: impl IntoIterator<Item = TodoItem>) -> Self {
		self.sub_items.extend(sub_items);
		self
	}

	pub fn with_bullet_lines<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
		self.bullet_lines.extend(lines.into_iter().map(Into::into));
		self
	}

	/// Done itself, and every descendant is done too.
	pub fn is_fully_completed(&self) -> bool {
		self.completed && self.sub_items.iter().all(TodoItem::is_fully_completed)
	}

	/// This item plus all of its descendants.
	pub fn count(&self) -> usize {
		1 + self.sub_items.iter().map(TodoItem::count).sum::<usize>()
	}

	/// Nesting depth below this item; 0 for a leaf.
	pub fn depth(&self) -> usize {
		self.sub_items.iter().map(|item| item.depth() + 1).max().unwrap_or(0)
	}
}

/// One calendar day worth of items.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DaySection {
	/// Always a validated `YYYY-MM-DD`.
	pub date: String,
	pub items: Vec<TodoItem>,
}

impl DaySection {
	pub fn new(date: impl Into<String>) -> Self {
		Self {
			date: date.into(),
			items: Vec::new(),
		}
	}

	pub fn with_items(mut self, items: impl IntoIterator<Item = TodoItem>) -> Self {
		self.items.extend(items);
		self
	}

	pub fn item_count(&self) -> usize {
		self.items.iter().map(TodoItem::count).sum()
	}
}

/// The whole parsed todos section. Days stay in document order, unsorted.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TodoJournal {
	pub days: Vec<DaySection>,
}

impl TodoJournal {
	pub fn new(days: impl IntoIterator<Item = DaySection>) -> Self {
		Self { days: days.into_iter().collect() }
	}

	/// Every item of every day, nested ones included.
	pub fn item_count(&self) -> usize {
		self.days.iter().map(DaySection::item_count).sum()
	}

	/// No day holds any item.
	pub fn is_empty(&self) -> bool {
		self.days.iter().all(|day| day.items.is_empty())
	}

	/// Pre-order walk over every item, yielding the day date alongside.
	pub fn iter_items(&self) -> impl Iterator<Item = (&str, &TodoItem)> {
		self.days.iter().flat_map(|day| {
			let mut stack: Vec<&TodoItem> = day.items.iter().rev().collect();
			std::iter::from_fn(move || {
				let item = stack.pop()?;
				stack.extend(item.sub_items.iter().rev());
				Some((day.date.as_str(), item))
			})
		})
	}
}
