//! The whole parse → split → tag → serialize pipeline over one todos section.

use miette::Diagnostic;

use crate::{
	date::{DateError, parse_date},
	error::ParseError,
	journal::TodoJournal,
	split::split,
	stats::Stats,
	tag::{tag_completed, tag_completed_sub_items},
};

#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum RolloverError {
	#[error(transparent)]
	#[diagnostic(transparent)]
	Date(#[from] DateError),
	#[error(transparent)]
	#[diagnostic(transparent)]
	Parse(#[from] ParseError),
}

/// Knobs of [`roll_over`].
#[derive(Clone, Copy, Debug, smart_default::SmartDefault)]
pub struct RolloverOptions {
	/// Stamp finished sub-items of still-open items on the carried side.
	#[default(true)]
	pub tag_open_sub_items: bool,
}

/// Text blocks produced by a rollover.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rollover {
	/// Archive left in the original file; the `Moved to` placeholder when nothing was done.
	pub completed: String,
	/// Unfinished work carried into the new file. Empty when everything was done.
	pub open: String,
	pub stats: Stats,
}

/// Roll the todos of `section`, written on `original_date`, over to `current_date`.
///
/// Finished items are tagged with `original_date`, the day they were ticked off.
pub fn roll_over(section: &str, original_date: &str, current_date: &str, options: RolloverOptions) -> Result<Rollover, RolloverError> {
	parse_date(original_date)?;
	parse_date(current_date)?;

	let journal = TodoJournal::parse(section)?;
	Ok(Rollover::build(&journal, original_date, current_date, options))
}

impl Rollover {
	/// [`roll_over`] for a journal that is already parsed.
	pub fn from_journal(journal: &TodoJournal, original_date: &str, current_date: &str, options: RolloverOptions) -> Result<Self, DateError> {
		parse_date(original_date)?;
		parse_date(current_date)?;
		Ok(Self::build(journal, original_date, current_date, options))
	}

	fn build(journal: &TodoJournal, original_date: &str, current_date: &str, options: RolloverOptions) -> Self {
		let (mut completed, mut open) = split(journal);
		tracing::debug!(completed = completed.item_count(), open = open.item_count(), "split todos");

		tag_completed(&mut completed, original_date);
		if options.tag_open_sub_items {
			tag_completed_sub_items(&mut open, original_date);
		}

		Self {
			completed: completed.to_completed_text(current_date),
			open: open.to_text(),
			stats: Stats::compute(&completed, &open, current_date),
		}
	}
}
