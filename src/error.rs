//! Error types for parsing the todos section.
//!
//! Uses miette for rich diagnostics with source code spans.

#![allow(unused_assignments)] // Fields are read by miette's derive macro via attributes

use miette::{Diagnostic, NamedSource, SourceSpan};

use crate::date::DateError;

/// Error type for todos section parsing.
/// A failed parse discards everything built so far.
#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum ParseError {
	#[error("unparseable line {line_number}: '{text}'")]
	#[diagnostic(
		code(rollover::parse::unparseable_line),
		help("inside a day, every line must be '- [ ] task', '- [x] task', a '- ' note, or indented text")
	)]
	UnparseableLine {
		line_number: usize,
		text: String,
		#[source_code]
		src: NamedSource<String>,
		#[label("not a checklist item, bullet, or indented continuation")]
		span: SourceSpan,
	},

	#[error("invalid day header on line {line_number}: {source}")]
	#[diagnostic(code(rollover::parse::invalid_day_header), help("day headers look like '- [[2025-06-19]]'"))]
	InvalidDayHeader {
		line_number: usize,
		#[source]
		source: DateError,
		#[source_code]
		src: NamedSource<String>,
		#[label("this date")]
		span: SourceSpan,
	},
}

impl ParseError {
	/// 1-based line the error points at.
	pub fn line_number(&self) -> usize {
		match self {
			ParseError::UnparseableLine { line_number, .. } | ParseError::InvalidDayHeader { line_number, .. } => *line_number,
		}
	}
}

/// Holds source content and its display name for error reporting.
///
/// The parsed text may be a slice of `content` starting at `byte_offset`, after
/// `line_offset` lines; errors are reported against the whole of `content`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ParseContext<'a> {
	pub content: &'a str,
	pub filename: &'a str,
	pub byte_offset: usize,
	pub line_offset: usize,
}

impl<'a> ParseContext<'a> {
	pub fn new(content: &'a str, filename: &'a str) -> Self {
		Self::within(content, 0, filename)
	}

	/// Context for text that starts at byte `start` of `content`.
	pub fn within(content: &'a str, start: usize, filename: &'a str) -> Self {
		Self {
			content,
			filename,
			byte_offset: start,
			line_offset: content[..start].matches('\n').count(),
		}
	}

	/// Create a NamedSource for miette diagnostics.
	pub fn named_source(&self) -> NamedSource<String> {
		NamedSource::new(self.filename, self.content.to_owned())
	}

	pub fn unparseable(&self, line_number: usize, offset: usize, text: &str) -> ParseError {
		ParseError::UnparseableLine {
			line_number: line_number + self.line_offset,
			text: text.to_owned(),
			src: self.named_source(),
			span: (offset + self.byte_offset, text.len()).into(),
		}
	}

	pub fn invalid_day_header(&self, line_number: usize, offset: usize, len: usize, source: DateError) -> ParseError {
		ParseError::InvalidDayHeader {
			line_number: line_number + self.line_offset,
			source,
			src: self.named_source(),
			span: (offset + self.byte_offset, len).into(),
		}
	}
}
