//! Reordering timestamp-rows inside a section.
//!
//! The section is rewritten in place: sorted rows first, then the remaining non-blank lines in
//! their original order, then blank padding so the section keeps its exact line count.
//! Lines are split on `\n` only, so a CRLF document keeps its `\r` on every line, padding included.

use tracing::instrument;

use crate::{
	SectionError,
	section::{self, Section, SectionChoice},
	timestamp::{self, LineKind, TimestampedEntry},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SortOutcome {
	/// The section holds no timestamp-rows; nothing was changed.
	NothingToSort,
	/// Full document, with only the section rewritten.
	Sorted { lines: Vec<String>, n_rows: usize },
}

impl SortOutcome {
	/// New document text, joined the same way [`sort_document`] splits it, so a trailing newline survives.
	pub fn text(&self) -> Option<String> {
		match self {
			SortOutcome::Sorted { lines, .. } => Some(lines.join("\n")),
			SortOutcome::NothingToSort => None,
		}
	}
}

/// Sort the timestamp-rows of `section` within `lines`.
#[instrument(skip(lines), fields(section = %section.label))]
pub fn sort_section(lines: &[&str], section: &Section) -> SortOutcome {
	let range = section.range();
	let mut entries = Vec::new();
	let mut rest = Vec::new();
	for (i, &line) in lines.iter().enumerate().take(range.end).skip(range.start) {
		match timestamp::classify(line) {
			LineKind::TimestampRow(ts) => entries.push(TimestampedEntry::new(line.to_string(), ts, i)),
			LineKind::Content => rest.push(line),
		}
	}

	if entries.is_empty() {
		tracing::info!("no timestamp-rows in section");
		return SortOutcome::NothingToSort;
	}
	let n_rows = entries.len();
	let n_undated = entries.iter().filter(|e| e.timestamp.is_none()).count();
	tracing::debug!(n_rows, n_undated, n_other = rest.len(), "partitioned section");

	entries.sort_by(timestamp::compare);

	let (blank, other): (Vec<&str>, Vec<&str>) = rest.into_iter().partition(|l| l.trim().is_empty());
	let mut body: Vec<String> = entries.into_iter().map(|e| e.text).collect();
	body.extend(other.into_iter().map(str::to_string));
	// Padding is one empty line per dropped blank one, keeping a CRLF ending where it had one.
	body.extend(blank.into_iter().map(|l| if l.ends_with('\r') { "\r" } else { "" }.to_string()));
	debug_assert_eq!(body.len(), range.len());

	let mut out: Vec<String> = Vec::with_capacity(lines.len());
	out.extend(lines[..range.start].iter().map(|s| s.to_string()));
	out.extend(body);
	out.extend(lines[range.end..].iter().map(|s| s.to_string()));
	debug_assert_eq!(out.len(), lines.len());

	SortOutcome::Sorted { lines: out, n_rows }
}

/// Locate `choice` in `text` and sort it.
pub fn sort_document(text: &str, choice: SectionChoice) -> Result<SortOutcome, SectionError> {
	let lines: Vec<&str> = text.split('\n').collect();
	let section = section::locate(&lines, choice)?;
	Ok(sort_section(&lines, &section))
}
