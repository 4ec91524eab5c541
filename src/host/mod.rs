//! Collaborators the commands talk to: documents, an interactive chooser, the clipboard and a
//! place to report status. Each is a trait so commands can run against test doubles.

mod chooser;
mod clipboard;
mod documents;
mod notify;

pub use chooser::FzfChooser;
pub use clipboard::{ClipboardTool, SystemClipboard};
pub use documents::NotesDir;
pub use notify::StderrNotifier;

use crate::HostError;

/// Text blobs addressed by a logical name.
pub trait Documents {
	/// All document ids, sorted.
	fn list(&self) -> Result<Vec<String>, HostError>;
	fn read(&self, id: &str) -> Result<String, HostError>;
	fn write(&self, id: &str, text: &str) -> Result<(), HostError>;
}

/// Result of asking the user to pick one of several options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Choice<T> {
	Selected(T),
	Cancelled,
}

pub trait Chooser {
	/// Index into `options` of the picked entry.
	fn choose(&self, prompt: &str, options: &[String]) -> Result<Choice<usize>, HostError>;
}

pub trait Clipboard {
	fn read_text(&self) -> Result<String, HostError>;
	fn write_text(&self, text: &str) -> Result<(), HostError>;
}

/// User-visible status and error messages.
pub trait Notifier {
	fn notify(&self, message: &str);
}

/// Everything a command may need from its environment.
#[derive(Clone, Copy)]
pub struct Host<'a> {
	pub documents: &'a dyn Documents,
	pub chooser: &'a dyn Chooser,
	pub clipboard: &'a dyn Clipboard,
	pub notifier: &'a dyn Notifier,
}

/// Insert `text` into `doc` before line `cursor` (at the end when `None` or past the end).
///
/// A trailing newline of the document is kept.
pub fn insert_lines(doc: &str, cursor: Option<usize>, text: &str) -> String {
	let trailing_newline = doc.is_empty() || doc.ends_with('\n');
	let mut lines: Vec<&str> = doc.lines().collect();
	let at = cursor.unwrap_or(lines.len()).min(lines.len());
	lines.splice(at..at, text.lines());

	let mut out = lines.join("\n");
	if trailing_newline {
		out.push('\n');
	}
	out
}
