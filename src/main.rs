use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueHint};
use color_eyre::eyre::{Result, WrapErr as _};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

mod carry;
mod config;
mod files;
mod inspect;
mod shell_init;

use config::AppConfig;

#[derive(Parser)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
	#[command(subcommand)]
	command: Commands,
	/// Config file to use instead of `$XDG_CONFIG_HOME/rollover/config.toml`.
	#[arg(long, global = true, value_hint = ValueHint::FilePath)]
	config: Option<PathBuf>,
	/// Journal directory, overriding the configured one.
	#[arg(long, short, global = true, value_hint = ValueHint::DirPath)]
	dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Archive finished todos in the previous day's file and carry the rest into a new one
	Carry(carry::CarryArgs),
	/// Count open and finished todos of a journal file
	Stats(inspect::StatsArgs),
	/// Print, or rewrite, a journal file's todos in canonical form
	Format(inspect::FormatArgs),
	/// Shell aliases and completions
	ShellInit(shell_init::ShellInitArgs),
}

fn main() -> Result<()> {
	color_eyre::install()?;
	init_tracing()?;
	let cli = Cli::parse();

	let config = || load_config(cli.config.as_deref(), cli.dir.clone());
	match cli.command {
		Commands::Carry(args) => carry::carry_command(&config()?, args),
		Commands::Stats(args) => inspect::stats_command(&config()?, args),
		Commands::Format(args) => inspect::format_command(&config()?, args),
		Commands::ShellInit(args) => {
			shell_init::output(&config()?, args);
			Ok(())
		}
	}
}

fn load_config(path: Option<&Path>, dir: Option<PathBuf>) -> Result<AppConfig> {
	let mut config = AppConfig::load(path)?;
	if let Some(dir) = dir {
		config.journal_dir = dir;
	}
	Ok(config)
}

/// `ROLLOVER_LOG` filters, falling back to directives baked in at build time.
/// With `ROLLOVER_TRACE_FILE` set, events go to that file as JSON lines instead of stderr.
fn init_tracing() -> Result<()> {
	let filter = match std::env::var("ROLLOVER_LOG") {
		Ok(directives) => EnvFilter::try_new(directives)?,
		Err(_) => EnvFilter::try_new(option_env!("LOG_DIRECTIVES").unwrap_or("warn"))?,
	};

	match std::env::var_os("ROLLOVER_TRACE_FILE") {
		Some(path) => {
			let file = std::fs::File::create(&path).wrap_err_with(|| format!("Failed to create trace file {}", PathBuf::from(&path).display()))?;
			tracing_subscriber::registry()
				.with(filter)
				.with(tracing_subscriber::fmt::layer().json().with_writer(std::sync::Mutex::new(file)))
				.init();
		}
		None => {
			tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)).init();
		}
	}
	Ok(())
}
