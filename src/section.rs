//! Locating the todos section inside a journal document.
//!
//! Only ATX headers are recognized. YAML frontmatter and fenced code blocks are skipped, so a
//! `# comment` inside either never counts as a header.

use std::ops::Range;

/// A markdown header: `# Content`, `## Content`, etc.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Header {
	pub level: usize,
	pub content: String,
}

impl Header {
	/// Create a new header with the given level and content.
	/// Level must be >= 1.
	pub fn new(level: usize, content: impl Into<String>) -> Self {
		debug_assert!(level >= 1, "Header level must be >= 1");
		Self {
			level: level.max(1),
			content: content.into(),
		}
	}

	/// Decode a header from a line. Returns None if the line is not a valid header.
	pub fn decode(s: &str) -> Option<Self> {
		let trimmed = s.trim();
		let level = trimmed.chars().take_while(|&c| c == '#').count();
		if level == 0 || level > 6 {
			return None;
		}
		// Valid header must have space after the # characters
		let content = trimmed[level..].strip_prefix(' ')?;
		Some(Self {
			level,
			content: content.trim().to_string(),
		})
	}

	/// Check if this header's content matches the given text (case-insensitive).
	pub fn content_eq_ignore_case(&self, text: &str) -> bool {
		self.content.eq_ignore_ascii_case(text)
	}
}

/// Byte ranges of a section within the document it was found in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Section {
	pub header: Header,
	/// The header line, terminator included.
	pub header_range: Range<usize>,
	/// Everything after the header line up to the next header of the same or higher level.
	pub body_range: Range<usize>,
}

impl Section {
	/// Find the first section titled `title` (case-insensitive).
	pub fn find(document: &str, title: &str) -> Option<Self> {
		let mut found: Option<(Header, Range<usize>)> = None;

		for (range, header) in headers(document) {
			match &found {
				None if header.content_eq_ignore_case(title) => found = Some((header, range)),
				Some((open, header_range)) if header.level <= open.level => {
					return Some(Self {
						header: open.clone(),
						header_range: header_range.clone(),
						body_range: header_range.end..range.start,
					});
				}
				_ => {}
			}
		}

		found.map(|(header, header_range)| Self {
			header,
			body_range: header_range.end..document.len(),
			header_range,
		})
	}

	pub fn body<'a>(&self, document: &'a str) -> &'a str {
		&document[self.body_range.clone()]
	}

	/// Rebuild `document` with this section's body swapped for `new_body`.
	///
	/// The new body is trimmed of surrounding newlines; a blank line separates it from
	/// whatever followed the section.
	pub fn replace_body(&self, document: &str, new_body: &str) -> String {
		let head = &document[..self.body_range.start];
		let tail = &document[self.body_range.end..];
		let new_body = new_body.trim_matches('\n');

		let mut out = String::with_capacity(document.len() + new_body.len());
		out.push_str(head);
		if !head.ends_with('\n') {
			out.push('\n');
		}
		if !new_body.is_empty() {
			out.push_str(new_body);
			out.push('\n');
		}
		if !tail.is_empty() {
			out.push('\n');
			out.push_str(tail);
		}
		out
	}
}

/// Every header line of the document with its byte range, terminator included.
fn headers(document: &str) -> impl Iterator<Item = (Range<usize>, Header)> + '_ {
	let mut offset = 0;
	let mut in_frontmatter = false;
	let mut in_fence = false;

	document.split_inclusive('\n').enumerate().filter_map(move |(idx, raw)| {
		let range = offset..offset + raw.len();
		offset = range.end;
		let line = raw.trim_end_matches(['\n', '\r']);

		if line == "---" && (idx == 0 || in_frontmatter) {
			in_frontmatter = idx == 0;
			return None;
		}
		if in_frontmatter {
			return None;
		}
		if line.trim_start().starts_with("```") || line.trim_start().starts_with("~~~") {
			in_fence = !in_fence;
			return None;
		}
		if in_fence {
			return None;
		}
		Header::decode(line).map(|header| (range, header))
	})
}
