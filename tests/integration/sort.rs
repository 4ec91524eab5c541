//! Integration tests for `stampsort sort` and `stampsort headings`.

use rstest::{fixture, rstest};

use crate::common::TestContext;

#[fixture]
fn journal_md() -> &'static str {
	"\
# Journal
- 202401011200 - new year lunch
loose thought

- 20231224 - christmas eve
- 202401101 - half-typed code
- 202406011830 - summer
## Drafts
- 20220101 - draft row
# Archive
- 20200101 - old
- 20210101 - older but later"
}

#[rstest]
fn test_sort_section_by_heading(journal_md: &str) {
	let ctx = TestContext::new(&format!("//- /data/journal.md\n{journal_md}"));

	let (status, _stdout, stderr) = ctx.run(&["sort", "journal.md", "--section", "journal"]);
	assert!(status.success(), "stderr: {stderr}");
	assert!(stderr.contains("Sorted 5 entries in `Journal`"), "stderr: {stderr}");

	let sorted = ctx.read_note("journal.md");
	assert_eq!(sorted.lines().count(), journal_md.lines().count());
	insta::assert_snapshot!(sorted, @r"
	# Journal
	- 202401101 - half-typed code
	- 202406011830 - summer
	- 202401011200 - new year lunch
	- 20231224 - christmas eve
	- 20220101 - draft row
	loose thought
	## Drafts

	# Archive
	- 20200101 - old
	- 20210101 - older but later
	");
}

#[rstest]
fn test_sort_is_idempotent(journal_md: &str) {
	let ctx = TestContext::new(&format!("//- /data/journal.md\n{journal_md}"));

	let (status, _, stderr) = ctx.run(&["sort", "journal.md", "--section", "Archive"]);
	assert!(status.success(), "stderr: {stderr}");
	let once = ctx.read_note("journal.md");

	let (status, _, stderr) = ctx.run(&["sort", "journal.md", "--section", "Archive"]);
	assert!(status.success(), "stderr: {stderr}");
	assert!(stderr.contains("already sorted"), "stderr: {stderr}");
	assert_eq!(ctx.read_note("journal.md"), once);
}

#[rstest]
fn test_sort_dry_run_leaves_file(journal_md: &str) {
	let ctx = TestContext::new(&format!("//- /data/journal.md\n{journal_md}"));
	let before = ctx.read_note("journal.md");

	let (status, stdout, stderr) = ctx.run(&["sort", "journal", "--whole", "--dry-run"]);
	assert!(status.success(), "stderr: {stderr}");
	assert!(stdout.starts_with("- 202401101 - half-typed code\n"));
	assert_eq!(ctx.read_note("journal.md"), before);
}

#[test]
fn test_sort_nothing_to_sort() {
	let ctx = TestContext::new("//- /data/notes.md\n# Ideas\nno rows here\n");
	let before = ctx.read_note("notes.md");

	let (status, _, stderr) = ctx.run(&["sort", "notes.md", "--whole"]);
	assert!(status.success(), "stderr: {stderr}");
	assert!(stderr.contains("Nothing to sort"));
	assert_eq!(ctx.read_note("notes.md"), before);
}

#[test]
fn test_sort_missing_document_fails() {
	let ctx = TestContext::new("//- /data/other.md\n- 20240101 - a\n");

	let (status, _, stderr) = ctx.run(&["sort", "missing.md", "--whole"]);
	assert!(!status.success());
	assert!(stderr.contains("document `missing.md` not found"), "stderr: {stderr}");
}

#[rstest]
fn test_headings_lists_indented_labels(journal_md: &str) {
	let ctx = TestContext::new(&format!("//- /data/journal.md\n{journal_md}"));

	let (status, stdout, stderr) = ctx.run(&["headings", "journal.md"]);
	assert!(status.success(), "stderr: {stderr}");
	assert_eq!(stdout, "Journal\n  Drafts\nArchive\n");
}
