//! Integration tests for the `carry` command.

use rstest::{fixture, rstest};

use crate::common::TestContext;

#[fixture]
fn journal() -> TestContext {
	TestContext::new(
		"\
//- /2025-06-16.md
## Todos
- [[2025-06-16]]
  - [ ] older file
//- /2025-06-18.md
# 2025-06-18

## Todos
- [[2025-06-17]]
  - [x] shipped
  - [ ] review
    - [x] read diff
- [[2025-06-18]]
  - [ ] write docs
    - draft outline

## Log
fine day
",
	)
}

#[rstest]
fn test_carry_splits_files(journal: TestContext) {
	journal.run_ok(&["carry", "--from", "2025-06-18", "--to", "2025-06-19"]);

	insta::assert_snapshot!(journal.read("2025-06-18.md"), @r"
	# 2025-06-18

	## Todos
	- [[2025-06-17]]
	  - [x] shipped #2025-06-18

	## Log
	fine day
	");
	insta::assert_snapshot!(journal.read("2025-06-19.md"), @r"
	# 2025-06-19

	## Todos
	- [[2025-06-17]]
	  - [ ] review
	    - [x] read diff #2025-06-18
	- [[2025-06-18]]
	  - [ ] write docs
	    - draft outline
	");
}

#[rstest]
fn test_carry_backs_up_original(journal: TestContext) {
	let before = journal.read("2025-06-18.md");
	journal.run_ok(&["carry", "--from", "2025-06-18", "--to", "2025-06-19"]);
	assert_eq!(journal.read("2025-06-18.md.bak"), before);
}

#[rstest]
fn test_carry_defaults_to_latest_earlier_file(journal: TestContext) {
	journal.run_ok(&["carry", "--to", "2025-06-19"]);
	assert!(journal.read("2025-06-19.md").contains("write docs"));
	assert!(!journal.read("2025-06-19.md").contains("older file"));
	assert!(!journal.exists("2025-06-16.md.bak"));
}

#[rstest]
fn test_carry_refuses_to_overwrite(journal: TestContext) {
	journal.run_ok(&["carry", "--from", "2025-06-16", "--to", "2025-06-17"]);
	let stderr = journal.run_err(&["carry", "--from", "2025-06-16", "--to", "2025-06-17"]);
	assert!(stderr.contains("already exists"));

	journal.run_ok(&["carry", "--from", "2025-06-16", "--to", "2025-06-17", "--force"]);
}

#[rstest]
fn test_carry_nothing_done(journal: TestContext) {
	journal.run_ok(&["carry", "--from", "2025-06-16", "--to", "2025-06-17"]);
	assert_eq!(journal.read("2025-06-16.md"), "## Todos\nMoved to [[2025-06-17]]\n");
	assert!(journal.read("2025-06-17.md").contains("  - [ ] older file"));
}

#[rstest]
fn test_dry_run_writes_nothing(journal: TestContext) {
	let before = journal.read("2025-06-18.md");
	let stdout = journal.run_ok(&["carry", "--from", "2025-06-18", "--to", "2025-06-19", "--dry-run"]);

	assert!(stdout.contains("shipped #2025-06-18"));
	assert!(stdout.contains("# 2025-06-19"));
	assert_eq!(journal.read("2025-06-18.md"), before);
	assert!(!journal.exists("2025-06-19.md"));
	assert!(!journal.exists("2025-06-18.md.bak"));
}

#[rstest]
#[case(&["carry", "--to", "2025/06/19"], "not in YYYY-MM-DD form")]
#[case(&["carry", "--from", "2025-02-30", "--to", "2025-03-01"], "not a real calendar date")]
#[case(&["carry", "--from", "2025-06-18", "--to", "2025-06-18"], "not before")]
#[case(&["carry", "--to", "2025-06-16"], "No journal file dated before")]
fn test_carry_rejects(journal: TestContext, #[case] args: &[&str], #[case] expected: &str) {
	let stderr = journal.run_err(args);
	assert!(stderr.contains(expected), "stderr did not mention {expected:?}:\n{stderr}");
}

#[test]
fn test_carry_parse_error_leaves_files_alone() {
	let ctx = TestContext::new(
		"\
//- /2025-06-18.md
## Todos
- [[2025-06-18]]
  - [ ] fine
plain prose
",
	);
	let stderr = ctx.run_err(&["carry", "--from", "2025-06-18", "--to", "2025-06-19"]);
	assert!(stderr.contains("unparseable line 4"), "{stderr}");
	assert!(!ctx.exists("2025-06-19.md"));
	assert!(!ctx.exists("2025-06-18.md.bak"));
}

#[test]
fn test_carry_with_configured_template() {
	let ctx = TestContext::new(
		"\
//- /rollover.toml
template = \"template.md\"
backup = false
//- /template.md
---
carried_from: {{ previous_date }}
---
# {{ date }}

## Todos
{{ todos }}

{{ open_count }} open, {{ completed_count }} archived
//- /2025-06-18.md
## Todos
- [[2025-06-18]]
  - [x] a
  - [ ] b
",
	);
	ctx.run_ok(&["--config", "rollover.toml", "carry", "--from", "2025-06-18", "--to", "2025-06-19"]);

	insta::assert_snapshot!(ctx.read("2025-06-19.md"), @r"
	---
	carried_from: 2025-06-18
	---
	# 2025-06-19

	## Todos
	- [[2025-06-18]]
	  - [ ] b

	1 open, 1 archived
	");
	assert!(!ctx.exists("2025-06-18.md.bak"));
}

#[test]
fn test_failed_target_write_keeps_original() {
	let ctx = TestContext::new(
		"\
//- /rollover.toml
backup = false
//- /2025-06-18.md
## Todos
- [[2025-06-18]]
  - [x] done
  - [ ] still open
",
	);
	let before = ctx.read("2025-06-18.md");
	// a directory where the new day file should go makes the write fail
	std::fs::create_dir(ctx.path("2025-06-19.md")).unwrap();

	let stderr = ctx.run_err(&["--config", "rollover.toml", "carry", "--from", "2025-06-18", "--to", "2025-06-19", "--force"]);
	assert!(stderr.contains("Failed to write"), "{stderr}");
	assert_eq!(ctx.read("2025-06-18.md"), before);
}
