use std::path::Path;

use clap::{Args, CommandFactory};
use clap_complete::Shell as ClapShell;
use derive_more::derive::{Display, FromStr};

use crate::config::AppConfig;

static EXE_NAME: &str = "rollover";

#[derive(Clone, Debug, Args)]
pub struct ShellInitArgs {
	shell: Shell,
}
#[derive(Debug, Clone, Copy, Display, FromStr)]
enum Shell {
	Dash,
	Bash,
	Zsh,
	Fish,
}

impl From<Shell> for ClapShell {
	fn from(shell: Shell) -> Self {
		match shell {
			Shell::Dash | Shell::Bash => ClapShell::Bash,
			Shell::Zsh => ClapShell::Zsh,
			Shell::Fish => ClapShell::Fish,
		}
	}
}

/// Aliases for the daily routine. A configured journal directory is baked in, so they work
/// from anywhere.
fn aliases(journal_dir: &Path) -> String {
	let exe = match journal_dir == Path::new(".") {
		true => EXE_NAME.to_owned(),
		false => format!("{EXE_NAME} --dir '{}'", journal_dir.display()),
	};
	format!(
		r#"
# {EXE_NAME}
alias rlo="{exe} carry"
alias rlon="{exe} carry --dry-run"
alias rlos="{exe} stats"
alias rlof="{exe} format --write"
"#
	)
}

fn completions(shell: Shell) -> String {
	let mut buffer = Vec::new();
	clap_complete::generate(ClapShell::from(shell), &mut crate::Cli::command(), EXE_NAME, &mut buffer);
	String::from_utf8_lossy(&buffer).into_owned()
}

pub fn output(config: &AppConfig, args: ShellInitArgs) {
	let shell = args.shell;
	tracing::debug!(%shell, dir = %config.journal_dir.display(), "generating shell init");
	println!("{}\n{}", aliases(&config.journal_dir), completions(shell));
}
