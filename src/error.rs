//! Error types for the extractor, the section locator and host collaborators.
//!
//! Uses miette for diagnostic codes and help text.
//! Outcomes that are merely informational (no posts found, nothing to sort, a cancelled choice)
//! are not errors and never show up here.

use std::path::PathBuf;

use miette::Diagnostic;

/// Whole-operation failures of post extraction.
#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum ExtractError {
	#[error("input is empty")]
	#[diagnostic(code(stampsort::extract::empty_input), help("copy the post markup to the clipboard first"))]
	InputEmpty,

	#[error("cannot select post elements with marker `{marker}`")]
	#[diagnostic(code(stampsort::extract::bad_marker), help("`extract.post_tag` must be a valid CSS selector, e.g. `shreddit-post`"))]
	InvalidMarker { marker: String },

	#[error("invalid base url `{base_url}`")]
	#[diagnostic(code(stampsort::extract::bad_base_url))]
	InvalidBaseUrl {
		base_url: String,
		#[source]
		source: url::ParseError,
	},

	#[error("utc offset of {hours}h is out of range")]
	#[diagnostic(code(stampsort::extract::bad_offset), help("offsets must be within -25..=25 hours"))]
	InvalidOffset {
		hours: i8,
		#[source]
		source: jiff::Error,
	},
}

/// Failures of locating a section inside a document.
#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum SectionError {
	#[error("document is empty")]
	#[diagnostic(code(stampsort::section::empty_document))]
	EmptyDocument,

	#[error("line {line} is not a heading")]
	#[diagnostic(code(stampsort::section::not_a_heading))]
	NotAHeading { line: usize },

	#[error("no heading matches `{query}`")]
	#[diagnostic(code(stampsort::section::no_such_heading), help("run `stampsort headings <doc>` to list available sections"))]
	NoSuchHeading { query: String },
}

/// Failures talking to the surrounding environment.
#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum HostError {
	#[error("document `{id}` not found at {}", .path.display())]
	#[diagnostic(code(stampsort::host::document_not_found))]
	DocumentNotFound { id: String, path: PathBuf },

	#[error("document `{id}` is empty")]
	#[diagnostic(code(stampsort::host::empty_document))]
	DocumentEmpty { id: String },

	#[error("No clipboard tool available. On Linux, install wl-clipboard, xclip, or xsel.")]
	#[diagnostic(code(stampsort::host::no_clipboard_tool))]
	NoClipboardTool,

	#[error("'{tool}' failed: {message}")]
	#[diagnostic(code(stampsort::host::tool_failed))]
	ToolFailed { tool: &'static str, message: String },

	#[error(transparent)]
	#[diagnostic(code(stampsort::host::io))]
	Io(#[from] std::io::Error),
}
