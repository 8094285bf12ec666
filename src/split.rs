//! Partitioning a journal into finished and unfinished work.

use crate::journal::{DaySection, TodoJournal};

/// Split `journal` into `(completed, open)`.
///
/// Each top-level item lands, deep-copied, on the completed side only when it is fully
/// completed. A day appears on a side only if it received at least one item there. The input
/// is left untouched and the two outputs share nothing with it or with each other.
pub fn split(journal: &TodoJournal) -> (TodoJournal, TodoJournal) {
	let mut completed = TodoJournal::default();
	let mut open = TodoJournal::default();

	for day in &journal.days {
		let (done, pending): (Vec<_>, Vec<_>) = day.items.iter().cloned().partition(|item| item.is_fully_completed());
		if !done.is_empty() {
			completed.days.push(DaySection::new(day.date.clone()).with_items(done));
		}
		if !pending.is_empty() {
			open.days.push(DaySection::new(day.date.clone()).with_items(pending));
		}
	}

	(completed, open)
}
