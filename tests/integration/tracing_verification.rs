//! Integration tests that verify what the binary reports through tracing.

use rstest::rstest;

use crate::{assert_traced, common::TestContext, tracing_utils::TraceLog};

#[rstest]
#[case::strict_only("- 20240101 - a\n- 20240601 - b\n", 2, 0)]
#[case::with_loose_rows("- 2024010100 - ten\n- 20240601 - b\n- 20241301 - bad month\nplain\n", 3, 2)]
fn test_sort_traces_partition(#[case] doc: &str, #[case] n_rows: u64, #[case] n_undated: u64) {
	let ctx = TestContext::new(&format!("//- /data/log.md\n{doc}"));

	let (status, _, stderr) = ctx.run(&["sort", "log.md", "--whole"]);
	assert!(status.success(), "stderr: {stderr}");

	let trace = TraceLog::from_file(&ctx.trace_file);
	let event = assert_traced!(trace, "partitioned section");
	assert_eq!(event.level, "DEBUG");
	assert_eq!(event.target, "stampsort::sort");
	assert_eq!(event.fields.n_rows, Some(n_rows));
	assert_eq!(event.fields.n_undated, Some(n_undated));
}

#[test]
fn test_extract_traces_skipped_candidates() {
	let ctx = TestContext::new(
		r#"//- /data/inbox/page.html
<shreddit-post post-title="Kept" permalink="/r/a/comments/1/" created-timestamp="2024-06-18T16:45:00Z"></shreddit-post>
<shreddit-post post-title="Dropped" permalink="/r/a/comments/2/"></shreddit-post>
"#,
	);
	let page = ctx.data_path("inbox/page.html");

	let (status, _, stderr) = ctx.run(&["extract", "--input", page.to_str().unwrap(), "--no-clipboard"]);
	assert!(status.success(), "stderr: {stderr}");

	let trace = TraceLog::from_file(&ctx.trace_file);
	assert_traced!(trace, "skipping post candidate");
	let event = assert_traced!(trace, "extracted posts");
	assert_eq!(event.fields.n_candidates, Some(2));
	assert_eq!(event.fields.n_posts, Some(1));
}
