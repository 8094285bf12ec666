//! Strict `YYYY-MM-DD` dates.

use std::sync::LazyLock;

use jiff::civil::Date;
use miette::Diagnostic;
use regex::Regex;

use crate::dialect::DATE_FORMAT;

static DATE_LAYOUT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static DATE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\d{4}-\d{2}-\d{2}").unwrap());

#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum DateError {
	#[error("date '{input}' is not in YYYY-MM-DD form")]
	#[diagnostic(code(rollover::date::layout), help("write dates as e.g. 2025-06-19"))]
	Layout { input: String },

	#[error("date '{input}' is not a real calendar date")]
	#[diagnostic(code(rollover::date::calendar))]
	Calendar {
		input: String,
		#[source]
		source: jiff::Error,
	},
}

/// Validate `s` against the fixed layout and the calendar.
///
/// Anything but exactly `YYYY-MM-DD` is rejected, even when it would name a real day.
pub fn parse_date(s: &str) -> Result<Date, DateError> {
	if !DATE_LAYOUT.is_match(s) {
		return Err(DateError::Layout { input: s.to_owned() });
	}
	Date::strptime(DATE_FORMAT, s).map_err(|source| DateError::Calendar { input: s.to_owned(), source })
}

/// Format a date the way it appears in journals.
pub fn format_date(date: Date) -> String {
	date.strftime(DATE_FORMAT).to_string()
}

/// Whether `text` already carries a `#YYYY-MM-DD` tag.
pub fn has_date_tag(text: &str) -> bool {
	DATE_TAG.is_match(text)
}
