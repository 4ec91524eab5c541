//! Note-keeping utilities: turn pasted post markup into timestamp-rows, and keep
//! sections of timestamp-rows ordered newest-first.

pub mod error;
pub mod extract;
pub mod host;
pub mod section;
pub mod sort;
pub mod timestamp;

pub use error::{ExtractError, HostError, SectionError};
pub use extract::{ExtractSettings, ExtractedPost, extract_posts};
pub use section::{Heading, Section, SectionChoice};
pub use sort::{SortOutcome, sort_document, sort_section};
pub use timestamp::{LineKind, TimestampedEntry};

/// Deepest heading level markdown knows about.
pub const MAX_HEADER_LEVEL: usize = 6;

/// A markdown header: `# Content`, `## Content`, etc.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Header {
	pub level: usize,
	pub content: String,
}

impl Header {
	/// Decode a header from a line.
	///
	/// The `#` run must start the line, be 1 to 6 long, and be followed by whitespace and non-empty text.
	/// Returns None otherwise.
	pub fn decode(s: &str) -> Option<Self> {
		let level = s.chars().take_while(|&ch| ch == '#').count();
		if level == 0 || level > MAX_HEADER_LEVEL {
			return None;
		}
		let rest = &s[level..];
		if !rest.starts_with(char::is_whitespace) {
			return None;
		}
		let content = rest.trim();
		if content.is_empty() {
			return None;
		}
		Some(Self {
			level,
			content: content.to_string(),
		})
	}

	/// Heading level of a line, 0 when it is not a header.
	pub fn level_of(s: &str) -> usize {
		Self::decode(s).map(|h| h.level).unwrap_or(0)
	}

	/// Check if this header's content matches the given text (case-insensitive).
	pub fn content_eq_ignore_case(&self, text: &str) -> bool {
		self.content.eq_ignore_ascii_case(text)
	}
}
