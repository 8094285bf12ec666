use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr as _};
use rollover::{RolloverOptions, dialect::TODOS_SECTION};
use serde::Deserialize;
use smart_default::SmartDefault;

static APP_NAME: &str = "rollover";
static ENV_PREFIX: &str = "ROLLOVER";

#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct AppConfig {
	/// Directory holding one `<YYYY-MM-DD>.<extension>` file per day.
	#[default(_code = "PathBuf::from(\".\")")]
	pub journal_dir: PathBuf,
	/// Title of the header whose body holds the todos.
	#[default(TODOS_SECTION.to_owned())]
	pub section: String,
	#[default = "md"]
	pub extension: String,
	/// Template for newly created day files; the built-in one when unset.
	pub template: Option<PathBuf>,
	/// Copy the original file to `<file>.bak` before rewriting it.
	#[default(true)]
	pub backup: bool,
	#[default(true)]
	pub tag_open_sub_items: bool,
}

impl AppConfig {
	/// Layer defaults, the config file, then `ROLLOVER__*` environment variables.
	///
	/// An explicitly passed file must exist; the XDG one is optional.
	pub fn load(explicit: Option<&Path>) -> Result<Self> {
		let mut builder = config::Config::builder();
		match explicit {
			Some(path) => builder = builder.add_source(config::File::from(path).required(true)),
			None =>
				if let Some(path) = xdg::BaseDirectories::with_prefix(APP_NAME).find_config_file("config.toml") {
					tracing::debug!(path = %path.display(), "using config file");
					builder = builder.add_source(config::File::from(path).required(false));
				},
		}
		builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"));

		let settings = builder.build().wrap_err("The config file is not correctly formatted TOML")?;
		settings.try_deserialize().wrap_err("Config is missing or mistypes some of its fields")
	}

	pub fn rollover_options(&self) -> RolloverOptions {
		RolloverOptions {
			tag_open_sub_items: self.tag_open_sub_items,
		}
	}

	/// Path of the journal file for `date`.
	pub fn day_path(&self, date: &str) -> PathBuf {
		self.journal_dir.join(format!("{date}.{}", self.extension))
	}
}
