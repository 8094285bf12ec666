//! Shared test infrastructure for integration tests.
//!
//! `TestContext` writes a fixture into a temporary journal directory and runs the compiled
//! binary against it, isolated from the user's config and environment.
//!
//! ```ignore
//! let ctx = TestContext::new("
//! //- /2025-06-18.md
//! ## Todos
//! - [[2025-06-18]]
//!   - [ ] a
//! ");
//! let out = ctx.run(&["stats", "2025-06-18.md"]);
//! ```

use std::{
	path::PathBuf,
	process::{Command, Output},
};

use tempfile::TempDir;

pub struct TestContext {
	dir: TempDir,
	xdg_config: TempDir,
}

impl TestContext {
	/// Files in the fixture are introduced by `//- /relative/path` lines; everything up to the
	/// next such line is that file's content.
	pub fn new(fixture: &str) -> Self {
		let dir = tempfile::tempdir().unwrap();
		let xdg_config = tempfile::tempdir().unwrap();

		let mut current: Option<(PathBuf, String)> = None;
		let flush = |file: Option<(PathBuf, String)>| {
			if let Some((path, content)) = file {
				std::fs::create_dir_all(path.parent().unwrap()).unwrap();
				std::fs::write(path, content).unwrap();
			}
		};
		for line in fixture.lines() {
			if let Some(rel) = line.strip_prefix("//- /") {
				flush(current.take());
				current = Some((dir.path().join(rel.trim()), String::new()));
			} else if let Some((_, content)) = current.as_mut() {
				content.push_str(line);
				content.push('\n');
			}
		}
		flush(current.take());

		Self { dir, xdg_config }
	}

	pub fn path(&self, relative: &str) -> PathBuf {
		self.dir.path().join(relative)
	}

	pub fn read(&self, relative: &str) -> String {
		std::fs::read_to_string(self.path(relative)).unwrap()
	}

	pub fn exists(&self, relative: &str) -> bool {
		self.path(relative).exists()
	}

	/// Run the binary with the journal directory as working directory and `--dir`.
	pub fn run(&self, args: &[&str]) -> Output {
		let mut cmd = Command::new(env!("CARGO_BIN_EXE_rollover"));
		cmd.args(args).arg("--dir").arg(self.dir.path()).current_dir(self.dir.path()).env("XDG_CONFIG_HOME", self.xdg_config.path());
		for (key, _) in std::env::vars_os() {
			if key.to_string_lossy().starts_with("ROLLOVER") {
				cmd.env_remove(key);
			}
		}
		cmd.output().unwrap()
	}

	/// Run and assert success, returning stdout.
	pub fn run_ok(&self, args: &[&str]) -> String {
		let out = self.run(args);
		assert!(out.status.success(), "{args:?} failed:\n{}", String::from_utf8_lossy(&out.stderr));
		String::from_utf8(out.stdout).unwrap()
	}

	/// Run and assert failure, returning stderr.
	pub fn run_err(&self, args: &[&str]) -> String {
		let out = self.run(args);
		assert!(!out.status.success(), "{args:?} unexpectedly succeeded");
		String::from_utf8(out.stderr).unwrap()
	}
}
