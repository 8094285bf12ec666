//! Canonical text form of a journal.
//!
//! Items are re-indented to [`INDENT_UNIT`] per depth level, while attached lines are written
//! back as they were read. Parsing the canonical form therefore gives back the same items
//! and nesting, but a note indented between two nesting levels of the source can attach to a
//! different item once the items around it have moved.

use std::fmt;

use crate::{
	dialect::{INDENT_UNIT, moved_placeholder},
	journal::{DaySection, TodoItem, TodoJournal},
};

impl fmt::Display for TodoJournal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for day in &self.days {
			write!(f, "{day}")?;
		}
		Ok(())
	}
}

impl fmt::Display for DaySection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "- [[{}]]", self.date)?;
		for item in &self.items {
			write_item(f, item, 1)?;
		}
		Ok(())
	}
}

fn write_item(f: &mut fmt::Formatter<'_>, item: &TodoItem, depth: usize) -> fmt::Result {
	writeln!(f, "{}- [{}] {}", INDENT_UNIT.repeat(depth), item.marker(), item.text)?;
	for line in &item.bullet_lines {
		writeln!(f, "{line}")?;
	}
	for sub in &item.sub_items {
		write_item(f, sub, depth + 1)?;
	}
	Ok(())
}

impl TodoJournal {
	/// Canonical text, without trailing newlines. Empty for a journal with no days.
	///
	/// Attached lines keep their original indentation, see the module docs.
	pub fn to_text(&self) -> String {
		let mut out = self.to_string();
		out.truncate(out.trim_end_matches('\n').len());
		out
	}

	/// Text for the archive side of a rollover: the canonical form, or a pointer to the
	/// day the work moved to when nothing got finished.
	pub fn to_completed_text(&self, current_date: &str) -> String {
		match self.is_empty() {
			true => moved_placeholder(current_date),
			false => self.to_text(),
		}
	}
}

/// Convenience over [`TodoJournal::to_text`] accepting an optional journal.
pub fn to_text(journal: Option<&TodoJournal>) -> String {
	journal.map(TodoJournal::to_text).unwrap_or_default()
}
