//! Structural shapes a line of the todos section can take.

use std::sync::LazyLock;

use regex::Regex;

use crate::indent::indent_level;

/// `- [[2024-01-01]]`, matched against the trimmed line. Anything date-like inside the link
/// is captured so that malformed dates surface as errors instead of passing as notes.
static DAY_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^- \[\[(\d[\d-]*)\]\]$").unwrap());
static CHECKLIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([ \t]*)- \[(.)\](?: (.*))?$").unwrap());
static FREE_TEXT_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*+](?:\s|$)").unwrap());

/// A classified line. Borrowed from the source text; the parser decides what to own.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line<'a> {
	Blank,
	/// Date payload of the wikilink, not yet validated.
	DayHeader { date: &'a str },
	Item { indent: usize, marker: char, text: &'a str },
	/// Bullet that is not a checklist item.
	FreeText { indent: usize },
	/// Indented line of plain text.
	Continuation { indent: usize },
	/// Unindented plain text. Only an error once a day is open.
	Unrecognized,
}

/// Classify one raw line (without its line terminator).
///
/// Shapes are tried in priority order: day header, checklist item, free-text bullet,
/// continuation.
pub fn classify_line(raw: &str) -> Line<'_> {
	let line = raw.trim_end();
	let trimmed = line.trim_start();
	if trimmed.is_empty() {
		return Line::Blank;
	}

	if let Some(caps) = DAY_HEADER.captures(trimmed) {
		let date = caps.get(1).map_or("", |m| m.as_str());
		return Line::DayHeader { date };
	}

	let indent = indent_level(line);

	if let Some(caps) = CHECKLIST_ITEM.captures(line) {
		let marker = caps.get(2).and_then(|m| m.as_str().chars().next()).unwrap_or(' ');
		let text = caps.get(3).map_or("", |m| m.as_str());
		return Line::Item { indent, marker, text };
	}

	if FREE_TEXT_BULLET.is_match(trimmed) {
		return Line::FreeText { indent };
	}

	if indent > 0 {
		return Line::Continuation { indent };
	}

	Line::Unrecognized
}
