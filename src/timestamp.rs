//! Codec for timestamp-rows.
//!
//! A timestamp-row is a list item whose first token is a compact date code:
//! `- 20240618 - text` (date only) or `- 202406181245 - text` (date and time).
//! Codes are civil date-times; no time zone is attached to them.

use std::{cmp::Ordering, str::FromStr, sync::LazyLock};

use jiff::civil::{Date, DateTime, Time};
use regex::Regex;

/// Exactly 8 or exactly 12 digits.
static STRICT_ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^- ([0-9]{12}|[0-9]{8}) - ").unwrap());
/// Anything from 8 to 12 digits. Rows that only match this still go to the timestamp bucket.
static LOOSE_ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^- [0-9]{8,12} - ").unwrap());

/// How a single line takes part in sorting.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineKind {
	/// Ordinary content.
	Content,
	/// A timestamp-row. `None` when the code has the wrong width or is not a real calendar date.
	TimestampRow(Option<DateTime>),
}

/// Classify a line using both the strict and the loose row grammar.
pub fn classify(line: &str) -> LineKind {
	if STRICT_ROW.is_match(line) || LOOSE_ROW.is_match(line) {
		LineKind::TimestampRow(decode(line))
	} else {
		LineKind::Content
	}
}

/// Strict decode of the line's prefix.
pub fn decode(line: &str) -> Option<DateTime> {
	let code = STRICT_ROW.captures(line)?.get(1)?.as_str();
	decode_code(code)
}

fn decode_code(code: &str) -> Option<DateTime> {
	let date = Date::new(field(code, 0..4)?, field(code, 4..6)?, field(code, 6..8)?).ok()?;
	match code.len() {
		8 => Some(date.to_datetime(Time::midnight())),
		12 => {
			let time = Time::new(field(code, 8..10)?, field(code, 10..12)?, 0, 0).ok()?;
			Some(date.to_datetime(time))
		}
		_ => None,
	}
}

fn field<T: FromStr>(code: &str, range: std::ops::Range<usize>) -> Option<T> {
	code.get(range)?.parse().ok()
}

/// 12-digit `YYYYMMDDHHmm` code for a point in time.
pub fn encode(dt: DateTime) -> String {
	format!("{:04}{:02}{:02}{:02}{:02}", dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute())
}

/// `- <code> - [<title>](<url>)`
pub fn format_line(dt: DateTime, title: &str, url: &str) -> String {
	format!("- {} - [{title}]({url})", encode(dt))
}

/// A timestamp-row pulled out of a section for sorting.
#[derive(Clone, Debug, Eq, PartialEq, derive_new::new)]
pub struct TimestampedEntry {
	pub text: String,
	pub timestamp: Option<DateTime>,
	/// Absolute line index in the document.
	pub original_position: usize,
}

/// Rows without a usable timestamp first (in encounter order), then newest to oldest.
///
/// Equal timestamps compare as equal, so encounter order among them relies on a stable sort.
pub fn compare(a: &TimestampedEntry, b: &TimestampedEntry) -> Ordering {
	match (a.timestamp, b.timestamp) {
		(None, None) => a.original_position.cmp(&b.original_position),
		(None, Some(_)) => Ordering::Less,
		(Some(_), None) => Ordering::Greater,
		(Some(a), Some(b)) => b.cmp(&a),
	}
}
