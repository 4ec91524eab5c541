//! Turning pasted post markup into timestamp-rows.
//!
//! Post elements carry everything as attributes:
//! ```html
//! <shreddit-post post-title="Hello" permalink="/r/test/comments/abc123/hello/" created-timestamp="2024-06-18T16:45:00Z">
//! ```
//! Each valid element becomes `- 202406181245 - [Hello](https://www.reddit.com/r/test/comments/abc123/)`.
//! Elements missing a field, or whose permalink or timestamp don't parse, are skipped.

use std::{fmt, sync::LazyLock};

use jiff::{Timestamp, civil::DateTime, tz::Offset};
use kuchikikiki::{ElementData, NodeDataRef, NodeRef, traits::TendrilSink};
use regex::Regex;
use tracing::instrument;
use url::Url;

use crate::{ExtractError, timestamp};

pub const TITLE_ATTR: &str = "post-title";
pub const PERMALINK_ATTR: &str = "permalink";
pub const CREATED_ATTR: &str = "created-timestamp";

/// `/r/<subreddit>/comments/<id>/`, anything after the id is dropped.
static PERMALINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/r/[^/]+/comments/[^/]+/").unwrap());

/// Read access to named attributes of an element.
pub trait AttributeReader {
	fn attribute(&self, name: &str) -> Option<String>;
}

/// Anything post elements can be selected from.
pub trait PostSource {
	type Element: AttributeReader;

	/// Elements matching `marker`, in document order.
	fn select(&self, marker: &str) -> Result<Vec<Self::Element>, ExtractError>;
}

/// Parsed HTML, as produced by a browser's parser.
pub struct HtmlFragment {
	root: NodeRef,
}

impl HtmlFragment {
	pub fn parse(html: &str) -> Self {
		Self {
			root: kuchikikiki::parse_html().one(html),
		}
	}
}

impl PostSource for HtmlFragment {
	type Element = NodeDataRef<ElementData>;

	fn select(&self, marker: &str) -> Result<Vec<Self::Element>, ExtractError> {
		let selected = self.root.select(marker).map_err(|()| ExtractError::InvalidMarker { marker: marker.to_string() })?;
		Ok(selected.collect())
	}
}

impl AttributeReader for NodeDataRef<ElementData> {
	fn attribute(&self, name: &str) -> Option<String> {
		self.attributes.borrow().get(name).map(str::to_owned)
	}
}

/// Where posts are looked for and how their links and times are rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractSettings {
	pub post_tag: String,
	/// Scheme and host, without a trailing slash.
	pub base_url: String,
	/// Fixed shift applied to every post time. Does not follow daylight saving.
	pub utc_offset: Offset,
}

impl ExtractSettings {
	pub fn new(post_tag: impl Into<String>, base_url: &str, utc_offset_hours: i8) -> Result<Self, ExtractError> {
		let parsed = Url::parse(base_url).map_err(|source| ExtractError::InvalidBaseUrl {
			base_url: base_url.to_string(),
			source,
		})?;
		let utc_offset = Offset::from_hours(utc_offset_hours).map_err(|source| ExtractError::InvalidOffset { hours: utc_offset_hours, source })?;
		Ok(Self {
			post_tag: post_tag.into(),
			base_url: parsed.as_str().trim_end_matches('/').to_string(),
			utc_offset,
		})
	}
}

impl Default for ExtractSettings {
	fn default() -> Self {
		Self {
			post_tag: "shreddit-post".to_string(),
			base_url: "https://www.reddit.com".to_string(),
			utc_offset: Offset::constant(-4),
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtractedPost {
	pub title: String,
	pub canonical_url: String,
	pub local_timestamp: DateTime,
}

impl ExtractedPost {
	pub fn line(&self) -> String {
		timestamp::format_line(self.local_timestamp, &self.title, &self.canonical_url)
	}
}

impl fmt::Display for ExtractedPost {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.line())
	}
}

/// Why a candidate element produced no line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Rejection {
	Missing(&'static str),
	PermalinkShape,
	Timestamp,
}

/// Parse `html` and extract every valid post.
#[instrument(skip_all, fields(input_len = html.len()))]
pub fn extract_posts(html: &str, settings: &ExtractSettings) -> Result<Vec<ExtractedPost>, ExtractError> {
	if html.trim().is_empty() {
		return Err(ExtractError::InputEmpty);
	}
	collect_posts(&HtmlFragment::parse(html), settings)
}

/// Extract posts from any element source, keeping source order.
pub fn collect_posts<S: PostSource>(source: &S, settings: &ExtractSettings) -> Result<Vec<ExtractedPost>, ExtractError> {
	let candidates = source.select(&settings.post_tag)?;
	let n_candidates = candidates.len();
	let posts: Vec<ExtractedPost> = candidates
		.iter()
		.enumerate()
		.filter_map(|(i, element)| match to_post(element, settings) {
			Ok(post) => Some(post),
			Err(reason) => {
				tracing::debug!(candidate = i, ?reason, "skipping post candidate");
				None
			}
		})
		.collect();
	tracing::info!(n_candidates, n_posts = posts.len(), "extracted posts");
	Ok(posts)
}

fn to_post<E: AttributeReader>(element: &E, settings: &ExtractSettings) -> Result<ExtractedPost, Rejection> {
	let required = |name: &'static str| element.attribute(name).filter(|v| !v.is_empty()).ok_or(Rejection::Missing(name));
	let title = required(TITLE_ATTR)?;
	let permalink = required(PERMALINK_ATTR)?;
	let created = required(CREATED_ATTR)?;

	let path = PERMALINK.find(&permalink).ok_or(Rejection::PermalinkShape)?.as_str();
	let instant = parse_instant(&created).ok_or(Rejection::Timestamp)?;

	Ok(ExtractedPost {
		title,
		canonical_url: format!("{}{path}", settings.base_url),
		local_timestamp: settings.utc_offset.to_datetime(instant),
	})
}

/// RFC 3339 first, then the `+0000` offset style some pages emit.
fn parse_instant(raw: &str) -> Option<Timestamp> {
	raw.parse::<Timestamp>().ok().or_else(|| Timestamp::strptime("%Y-%m-%dT%H:%M:%S%.f%z", raw).ok())
}
