//! Rebuilding the journal tree from indentation.
//!
//! Two parallel stacks track the open items: their indent levels, and their position as a
//! path of child indices starting from the current day. The stack always describes a chain
//! of ancestors, so each entry is a child of the one below it.

use std::str::FromStr;

use crate::{
	date::parse_date,
	error::{ParseContext, ParseError},
	indent::normalize_tabs,
	journal::{DaySection, TodoItem, TodoJournal},
	line::{Line, classify_line},
	section::Section,
};

/// Display name of the source when none is given.
const DEFAULT_SOURCE_NAME: &str = "todos";

impl TodoJournal {
	/// Parse the body of a todos section.
	pub fn parse(section: &str) -> Result<Self, ParseError> {
		Self::parse_named(section, DEFAULT_SOURCE_NAME)
	}

	/// Same as [`TodoJournal::parse`], with `name` shown in diagnostics.
	pub fn parse_named(section: &str, name: &str) -> Result<Self, ParseError> {
		Self::parse_in(section, ParseContext::new(section, name))
	}

	/// Parse the body of `section` found in `document`.
	/// Diagnostics point at lines and bytes of the whole document, which is shown as `name`.
	pub fn parse_section(document: &str, section: &Section, name: &str) -> Result<Self, ParseError> {
		Self::parse_in(section.body(document), ParseContext::within(document, section.body_range.start, name))
	}

	fn parse_in(section: &str, ctx: ParseContext<'_>) -> Result<Self, ParseError> {
		let mut builder = Builder::default();

		let mut offset = 0;
		for (idx, raw) in section.split_inclusive('\n').enumerate() {
			let line_offset = offset;
			offset += raw.len();
			let raw = raw.trim_end_matches(['\n', '\r']);
			let line_number = idx + 1;

			match classify_line(raw) {
				Line::Blank => {}
				Line::DayHeader { date } => {
					if let Err(e) = parse_date(date) {
						let date_offset = line_offset + raw.find(date).unwrap_or(0);
						return Err(ctx.invalid_day_header(line_number, date_offset, date.len(), e));
					}
					builder.open_day(date);
				}
				_ if builder.day.is_none() => {
					tracing::trace!(line_number, "ignoring line before the first day header");
				}
				Line::Item { indent, marker, text } => builder.push_item(indent, TodoItem::from_marker(marker, text)),
				Line::FreeText { indent } | Line::Continuation { indent } => builder.attach_note(indent, normalize_tabs(raw)),
				Line::Unrecognized => return Err(ctx.unparseable(line_number, line_offset, raw)),
			}
		}

		Ok(builder.finish())
	}
}

impl FromStr for TodoJournal {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

#[derive(Debug, Default)]
struct Builder {
	journal: TodoJournal,
	day: Option<DaySection>,
	indents: Vec<usize>,
	path: Vec<usize>,
}

impl Builder {
	fn open_day(&mut self, date: &str) {
		if let Some(day) = self.day.take() {
			self.journal.days.push(day);
		}
		tracing::debug!(date, "opening day section");
		self.day = Some(DaySection::new(date));
		self.indents.clear();
		self.path.clear();
	}

	fn push_item(&mut self, indent: usize, item: TodoItem) {
		while self.indents.last().is_some_and(|&top| top >= indent) {
			self.indents.pop();
			self.path.pop();
		}

		let Some(day) = self.day.as_mut() else { return };
		let siblings = if self.path.is_empty() {
			&mut day.items
		} else if let Some(parent) = resolve(&mut day.items, &self.path) {
			&mut parent.sub_items
		} else {
			return;
		};
		siblings.push(item);
		self.path.push(siblings.len() - 1);
		self.indents.push(indent);
	}

	/// Attach a note to the innermost open item indented strictly less than it, falling back
	/// to the most recent item when none is.
	fn attach_note(&mut self, indent: usize, line: String) {
		let Some(top) = self.indents.len().checked_sub(1) else {
			tracing::debug!(line, "dropping note with no item to attach to");
			return;
		};
		let target = self.indents.iter().rposition(|&stacked| stacked < indent).unwrap_or(top);

		let Some(day) = self.day.as_mut() else { return };
		if let Some(item) = resolve(&mut day.items, &self.path[..=target]) {
			item.bullet_lines.push(line);
		}
	}

	fn finish(mut self) -> TodoJournal {
		if let Some(day) = self.day.take() {
			self.journal.days.push(day);
		}
		self.journal
	}
}

/// Follow a path of child indices down from a day's top-level items.
/// An empty path resolves to nothing.
fn resolve<'a>(items: &'a mut [TodoItem], path: &[usize]) -> Option<&'a mut TodoItem> {
	let (&first, rest) = path.split_first()?;
	let mut item = items.get_mut(first)?;
	for &idx in rest {
		item = item.sub_items.get_mut(idx)?;
	}
	Some(item)
}
