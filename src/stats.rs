//! Numbers derived from a split journal, handed to templates.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{date::parse_date, journal::TodoJournal};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Stats {
	/// Open items, nested ones included.
	pub open_count: usize,
	/// Items on the completed side, nested ones included.
	pub completed_count: usize,
	/// Distinct day dates found on either side, ascending.
	pub dates: Vec<String>,
	/// Smallest of `dates`, empty when there are none.
	pub earliest_date: String,
	/// Days from `earliest_date` to the reference date, never negative.
	pub days_span: i64,
}

impl Stats {
	pub fn compute(completed: &TodoJournal, open: &TodoJournal, reference_date: &str) -> Self {
		let dates: BTreeSet<&str> = completed.days.iter().chain(&open.days).map(|day| day.date.as_str()).collect();
		// the fixed layout makes lexical order chronological
		let earliest_date = dates.first().map(|d| d.to_string()).unwrap_or_default();

		Self {
			open_count: open.item_count(),
			completed_count: completed.item_count(),
			days_span: days_between(&earliest_date, reference_date),
			dates: dates.into_iter().map(str::to_owned).collect(),
			earliest_date,
		}
	}
}

/// Whole days from `from` to `to`; 0 when either is invalid or `to` comes first.
fn days_between(from: &str, to: &str) -> i64 {
	let (Ok(from), Ok(to)) = (parse_date(from), parse_date(to)) else {
		return 0;
	};
	match from.until(to) {
		Ok(span) => i64::from(span.get_days()).max(0),
		Err(e) => {
			tracing::debug!(error = %e, "failed to compute day span");
			0
		}
	}
}
