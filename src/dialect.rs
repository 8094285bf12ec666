//! Fixed tokens of the journal dialect.
//!
//! Everything the parser recognizes and the serializer emits is derived from these.

/// Width, in spaces, a tab contributes to an indent level.
pub const TAB_WIDTH: usize = 2;

/// Indentation emitted per nesting depth when serializing.
pub const INDENT_UNIT: &str = "  ";

/// Marker character of a finished item: `- [x]`. Case-sensitive, `X` is not done.
pub const COMPLETED_MARKER: char = 'x';

/// Marker character written for every item that is not finished.
pub const OPEN_MARKER: char = ' ';

/// `strptime`/`strftime` layout of every date the crate accepts or emits.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default title of the section holding the todos.
pub const TODOS_SECTION: &str = "Todos";

/// Text left in place of the archive when nothing got finished.
pub fn moved_placeholder(current_date: &str) -> String {
	format!("Moved to [[{current_date}]]")
}
