//! Daily journal todos: parse the `Todos` section, split finished from unfinished work, stamp
//! completion dates, and write both halves back in canonical form.
//!
//! ```text
//! - [[2025-06-18]]
//!   - [x] finished
//!   - [ ] carried over
//!     - [x] finished step
//!     - a note on the carried item
//! ```

pub mod date;
pub mod dialect;
mod error;
pub mod indent;
mod journal;
pub mod line;
mod parse;
pub mod rollover;
pub mod section;
mod serialize;
mod split;
pub mod stats;
mod tag;
pub mod template;

pub use date::{DateError, parse_date};
pub use error::ParseError;
pub use journal::{DaySection, TodoItem, TodoJournal};
pub use rollover::{Rollover, RolloverError, RolloverOptions, roll_over};
pub use section::{Header, Section};
pub use serialize::to_text;
pub use split::split;
pub use stats::Stats;
pub use tag::{tag_completed, tag_completed_sub_items};
pub use template::{Template, TemplateVars};
