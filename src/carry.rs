//! `carry`: archive yesterday's finished todos and start today's file with the rest.

use std::path::Path;

use clap::Args;
use color_eyre::eyre::{Result, WrapErr as _, bail, eyre};
use rollover::{Rollover, Section, Template, TemplateVars, TodoJournal, date::format_date, parse_date};

use crate::{config::AppConfig, files};

#[derive(Args, Clone, Debug)]
pub struct CarryArgs {
	/// Day to carry todos from. Defaults to the latest journal file before `--to`.
	#[arg(long)]
	pub from: Option<String>,
	/// Day to carry todos to. Defaults to today.
	#[arg(long)]
	pub to: Option<String>,
	/// Print the results instead of writing any file.
	#[arg(long)]
	pub dry_run: bool,
	/// Overwrite the target day's file if it already exists.
	#[arg(long, short)]
	pub force: bool,
}

pub fn carry_command(config: &AppConfig, args: CarryArgs) -> Result<()> {
	let current = match &args.to {
		Some(s) => parse_date(s)?,
		None => jiff::Zoned::now().date(),
	};
	let (original, original_path) = match &args.from {
		Some(s) => {
			let date = parse_date(s)?;
			(date, config.day_path(s))
		}
		None => files::latest_before(config, current)?.ok_or_else(|| eyre!("No journal file dated before {current} in {}", config.journal_dir.display()))?,
	};
	if original >= current {
		bail!("Can only carry todos forward: {original} is not before {current}");
	}
	let (original_date, current_date) = (format_date(original), format_date(current));
	let target_path = config.day_path(&current_date);
	tracing::debug!(from = %original_path.display(), to = %target_path.display(), "carrying todos");

	let (document, section, journal) = read_journal(config, &original_path)?;
	let rollover = Rollover::from_journal(&journal, &original_date, &current_date, config.rollover_options())?;

	let template = match &config.template {
		Some(path) => Template::new(std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read template {}", path.display()))?),
		None => Template::default(),
	};
	let vars = TemplateVars::new(current_date.clone(), original_date.clone(), config.section.clone(), rollover.open.clone(), rollover.stats.clone());
	let new_document = template.render(&vars);
	let archived_document = section.replace_body(&document, &rollover.completed);

	if args.dry_run {
		println!("==> {} <==\n{archived_document}", original_path.display());
		println!("==> {} <==\n{new_document}", target_path.display());
		return Ok(());
	}

	if target_path.exists() && !args.force {
		bail!("{} already exists, pass --force to overwrite it", target_path.display());
	}
	// the open items only exist in the original until the new file is in place
	files::write_atomic(&target_path, &new_document)?;
	if config.backup {
		files::backup(&original_path)?;
	}
	files::write_atomic(&original_path, &archived_document)?;

	eprintln!(
		"Carried {} open item(s) from {original_date} to {current_date}, archived {}",
		rollover.stats.open_count, rollover.stats.completed_count
	);
	Ok(())
}

/// Read a journal file and parse its todos section, rendering parse failures as miette
/// diagnostics against the whole file.
pub fn read_journal(config: &AppConfig, path: &Path) -> Result<(String, Section, TodoJournal)> {
	let document = std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
	let section = Section::find(&document, &config.section).ok_or_else(|| eyre!("{} has no '{}' section", path.display(), config.section))?;
	let journal = TodoJournal::parse_section(&document, &section, &path.display().to_string()).map_err(|e| eyre!("{:?}", miette::Report::new(e)))?;
	Ok((document, section, journal))
}
