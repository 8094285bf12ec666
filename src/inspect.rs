//! Read-only views of a single journal file: `stats` and `format`.

use std::path::PathBuf;

use clap::{Args, ValueHint};
use color_eyre::eyre::Result;
use rollover::{Stats, date::format_date, parse_date, split};

use crate::{carry::read_journal, config::AppConfig, files};

#[derive(Args, Clone, Debug)]
pub struct StatsArgs {
	#[arg(value_hint = ValueHint::FilePath)]
	file: PathBuf,
	/// Reference date for the day span. Defaults to today.
	#[arg(long)]
	date: Option<String>,
	#[arg(long)]
	json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct FormatArgs {
	#[arg(value_hint = ValueHint::FilePath)]
	file: PathBuf,
	/// Rewrite the file in place instead of printing the canonical section.
	#[arg(long, short)]
	write: bool,
}

pub fn stats_command(config: &AppConfig, args: StatsArgs) -> Result<()> {
	let reference = match &args.date {
		Some(s) => parse_date(s)?,
		None => jiff::Zoned::now().date(),
	};
	let (_, _, journal) = read_journal(config, &args.file)?;
	let (completed, open) = split(&journal);
	let stats = Stats::compute(&completed, &open, &format_date(reference));

	if args.json {
		println!("{}", serde_json::to_string_pretty(&stats)?);
	} else {
		println!("open:      {}", stats.open_count);
		println!("completed: {}", stats.completed_count);
		println!("days:      {}", stats.dates.join(", "));
		if !stats.earliest_date.is_empty() {
			println!("oldest:    {} ({} days ago)", stats.earliest_date, stats.days_span);
		}
	}
	Ok(())
}

pub fn format_command(config: &AppConfig, args: FormatArgs) -> Result<()> {
	let (document, section, journal) = read_journal(config, &args.file)?;
	let canonical = journal.to_text();

	if !args.write {
		println!("{canonical}");
		return Ok(());
	}

	let formatted = section.replace_body(&document, &canonical);
	if formatted == document {
		tracing::debug!(path = %args.file.display(), "already canonical");
		return Ok(());
	}
	if config.backup {
		files::backup(&args.file)?;
	}
	files::write_atomic(&args.file, &formatted)
}
