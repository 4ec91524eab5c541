//! Locating the body of a markdown section.
//!
//! A section runs from the line after its heading up to (not including) the next heading of the
//! same or a shallower level. Deeper headings stay inside.

use derive_more::Display;
use tracing::instrument;

use crate::{Header, SectionError};

/// Label shown for the "whole document" choice.
pub const WHOLE_DOCUMENT_LABEL: &str = "(whole document)";

/// What the user picked to sort.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum SectionChoice {
	#[display("whole document")]
	WholeDocument,
	/// Index of the heading line.
	#[display("heading at line {_0}")]
	Heading(usize),
}

/// A heading found while scanning a document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Heading {
	pub line: usize,
	pub header: Header,
}

impl Heading {
	/// Heading text indented by two spaces per level below the top one.
	pub fn label(&self) -> String {
		format!("{}{}", "  ".repeat(self.header.level - 1), self.header.content)
	}
}

/// Body of a section, as inclusive line indices. Empty when `start_line == end_line + 1`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Section {
	pub label: String,
	pub start_line: usize,
	pub end_line: usize,
}

impl Section {
	pub fn range(&self) -> std::ops::Range<usize> {
		self.start_line..self.end_line + 1
	}

	pub fn len(&self) -> usize {
		self.range().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// All headings, top to bottom.
pub fn headings(lines: &[&str]) -> Vec<Heading> {
	lines
		.iter()
		.enumerate()
		.filter_map(|(line, s)| Header::decode(s).map(|header| Heading { line, header }))
		.collect()
}

/// Options to present: the whole document first, then every heading.
pub fn choices(lines: &[&str]) -> Vec<(String, SectionChoice)> {
	std::iter::once((WHOLE_DOCUMENT_LABEL.to_string(), SectionChoice::WholeDocument))
		.chain(headings(lines).into_iter().map(|h| (h.label(), SectionChoice::Heading(h.line))))
		.collect()
}

/// First heading whose text matches `query`, ignoring case and any leading `#` markers.
pub fn find_heading(lines: &[&str], query: &str) -> Option<Heading> {
	let wanted = query.trim_start_matches('#').trim();
	headings(lines).into_iter().find(|h| h.header.content_eq_ignore_case(wanted))
}

#[instrument(skip(lines), fields(n_lines = lines.len()))]
pub fn locate(lines: &[&str], choice: SectionChoice) -> Result<Section, SectionError> {
	let last_line = lines.len().checked_sub(1).ok_or(SectionError::EmptyDocument)?;

	let section = match choice {
		SectionChoice::WholeDocument => Section {
			label: WHOLE_DOCUMENT_LABEL.to_string(),
			start_line: 0,
			end_line: last_line,
		},
		SectionChoice::Heading(h) => {
			let header = lines.get(h).and_then(|s| Header::decode(s)).ok_or(SectionError::NotAHeading { line: h })?;
			let start_line = h + 1;
			let end_line = lines
				.iter()
				.enumerate()
				.skip(start_line)
				.find(|(_, s)| (1..=header.level).contains(&Header::level_of(s)))
				.map(|(next, _)| next - 1)
				.unwrap_or(last_line);
			Section {
				label: header.content,
				start_line,
				end_line,
			}
		}
	};
	tracing::debug!(start = section.start_line, end = section.end_line, "located section");
	Ok(section)
}
