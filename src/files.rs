//! Journal file handling: locating day files, backups, atomic writes.

use std::{
	io::Write as _,
	path::{Path, PathBuf},
};

use color_eyre::eyre::{Result, WrapErr as _, eyre};
use jiff::civil::Date;

use crate::config::AppConfig;

/// Latest day file in the journal directory dated strictly before `before`.
pub fn latest_before(config: &AppConfig, before: Date) -> Result<Option<(Date, PathBuf)>> {
	let entries = std::fs::read_dir(&config.journal_dir).wrap_err_with(|| format!("Failed to read journal directory {}", config.journal_dir.display()))?;

	let mut latest: Option<(Date, PathBuf)> = None;
	for entry in entries {
		let path = entry?.path();
		if path.extension().and_then(|e| e.to_str()) != Some(config.extension.as_str()) {
			continue;
		}
		let Some(date) = path.file_stem().and_then(|s| s.to_str()).and_then(|s| rollover::parse_date(s).ok()) else {
			continue;
		};
		if date < before && latest.as_ref().is_none_or(|(best, _)| date > *best) {
			latest = Some((date, path));
		}
	}
	Ok(latest)
}

/// Copy `path` to `<path>.bak`, replacing any earlier backup.
pub fn backup(path: &Path) -> Result<PathBuf> {
	let mut name = path.file_name().ok_or_else(|| eyre!("{} has no file name", path.display()))?.to_os_string();
	name.push(".bak");
	let backup_path = path.with_file_name(name);
	std::fs::copy(path, &backup_path).wrap_err_with(|| format!("Failed to back up {}", path.display()))?;
	tracing::debug!(path = %backup_path.display(), "wrote backup");
	Ok(backup_path)
}

/// Write `contents` to a temporary file beside `path`, then move it into place.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
	let dir = match path.parent() {
		Some(p) if !p.as_os_str().is_empty() => p,
		_ => Path::new("."),
	};
	let mut tmp = tempfile::NamedTempFile::new_in(dir).wrap_err_with(|| format!("Failed to create a temporary file in {}", dir.display()))?;
	tmp.write_all(contents.as_bytes())?;
	tmp.as_file().sync_all()?;
	tmp.persist(path).wrap_err_with(|| format!("Failed to write {}", path.display()))?;
	tracing::info!(path = %path.display(), "wrote file");
	Ok(())
}
