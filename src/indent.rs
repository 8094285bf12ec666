//! Leading-whitespace handling.

use crate::dialect::TAB_WIDTH;

/// Indent level of a line's leading whitespace run: spaces count 1, tabs count [`TAB_WIDTH`].
/// Stops at the first non-whitespace character, so passing a whole line is fine.
pub fn indent_level(s: &str) -> usize {
	s.chars()
		.map_while(|c| match c {
			' ' => Some(1),
			'\t' => Some(TAB_WIDTH),
			_ => None,
		})
		.sum()
}

/// Rewrite every tab of `line` to [`TAB_WIDTH`] spaces.
pub fn normalize_tabs(line: &str) -> String {
	line.replace('\t', &" ".repeat(TAB_WIDTH))
}
