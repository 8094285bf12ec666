//! `{{ name }}` substitution for new journal files.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;
use serde_json::Value;

use crate::stats::Stats;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

const BUILTIN: &str = "# {{ date }}\n\n## {{ section }}\n{{ todos }}\n";

/// Values a template can refer to by name.
#[derive(Clone, Debug, Default, Serialize, derive_new::new)]
pub struct TemplateVars {
	pub date: String,
	pub previous_date: String,
	pub section: String,
	pub todos: String,
	#[serde(flatten)]
	pub stats: Stats,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Template {
	source: String,
}

impl Default for Template {
	fn default() -> Self {
		Self::new(BUILTIN)
	}
}

impl Template {
	pub fn new(source: impl Into<String>) -> Self {
		Self { source: source.into() }
	}

	/// Substitute every known placeholder. Unknown ones are left in place.
	pub fn render(&self, vars: &TemplateVars) -> String {
		let values = match serde_json::to_value(vars) {
			Ok(Value::Object(map)) => map,
			_ => serde_json::Map::new(),
		};

		PLACEHOLDER
			.replace_all(&self.source, |caps: &Captures| match values.get(&caps[1]) {
				Some(Value::String(s)) => s.clone(),
				Some(Value::Array(items)) => items.iter().map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_owned)).collect::<Vec<_>>().join(", "),
				Some(other) => other.to_string(),
				None => {
					tracing::warn!(placeholder = &caps[1], "unknown template placeholder, leaving it as is");
					caps[0].to_owned()
				}
			})
			.into_owned()
	}
}
