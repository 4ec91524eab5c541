//! System clipboard through whichever command-line tool is installed.

use std::{
	io::Write as _,
	process::{Command, Stdio},
};

use super::Clipboard;
use crate::HostError;

/// A clipboard tool pair: one command prints the clipboard, the other reads new contents from stdin.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClipboardTool {
	pub name: &'static str,
	pub paste: &'static [&'static str],
	pub copy: &'static [&'static str],
}

impl ClipboardTool {
	pub const WL_CLIPBOARD: Self = Self {
		name: "wl-clipboard",
		paste: &["wl-paste", "--no-newline"],
		copy: &["wl-copy"],
	};
	pub const XCLIP: Self = Self {
		name: "xclip",
		paste: &["xclip", "-selection", "clipboard", "-o"],
		copy: &["xclip", "-selection", "clipboard"],
	};
	pub const XSEL: Self = Self {
		name: "xsel",
		paste: &["xsel", "--clipboard", "--output"],
		copy: &["xsel", "--clipboard", "--input"],
	};
	pub const PBCOPY: Self = Self {
		name: "pbcopy",
		paste: &["pbpaste"],
		copy: &["pbcopy"],
	};

	/// Tools for this platform in priority order.
	pub fn platform_tools() -> Vec<Self> {
		if cfg!(target_os = "macos") {
			vec![Self::PBCOPY]
		} else if cfg!(target_os = "linux") {
			vec![Self::WL_CLIPBOARD, Self::XCLIP, Self::XSEL]
		} else {
			vec![]
		}
	}

	/// Check if both binaries are installed.
	pub fn is_available(&self) -> bool {
		[self.paste[0], self.copy[0]]
			.iter()
			.all(|bin| Command::new("which").arg(bin).output().map(|o| o.status.success()).unwrap_or(false))
	}

	fn paste(&self) -> Result<String, HostError> {
		let output = Command::new(self.paste[0])
			.args(&self.paste[1..])
			.output()
			.map_err(|e| HostError::ToolFailed { tool: self.name, message: e.to_string() })?;
		if !output.status.success() {
			return Err(HostError::ToolFailed {
				tool: self.name,
				message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
			});
		}
		Ok(String::from_utf8_lossy(&output.stdout).into_owned())
	}

	fn copy(&self, text: &str) -> Result<(), HostError> {
		let failed = |e: std::io::Error| HostError::ToolFailed { tool: self.name, message: e.to_string() };
		let mut child = Command::new(self.copy[0]).args(&self.copy[1..]).stdin(Stdio::piped()).spawn().map_err(failed)?;
		if let Some(mut stdin) = child.stdin.take() {
			stdin.write_all(text.as_bytes()).map_err(failed)?;
		}
		let status = child.wait().map_err(failed)?;
		if status.success() {
			Ok(())
		} else {
			Err(HostError::ToolFailed {
				tool: self.name,
				message: format!("exited with {status}"),
			})
		}
	}
}

/// Uses the first available tool, detected once on construction.
#[derive(Clone, Debug)]
pub struct SystemClipboard {
	tool: Option<ClipboardTool>,
}

impl SystemClipboard {
	pub fn detect() -> Self {
		let tool = ClipboardTool::platform_tools().into_iter().find(ClipboardTool::is_available);
		tracing::debug!(tool = tool.map(|t| t.name), "detected clipboard tool");
		Self { tool }
	}

	fn tool(&self) -> Result<&ClipboardTool, HostError> {
		self.tool.as_ref().ok_or(HostError::NoClipboardTool)
	}
}

impl Clipboard for SystemClipboard {
	fn read_text(&self) -> Result<String, HostError> {
		self.tool()?.paste()
	}

	fn write_text(&self, text: &str) -> Result<(), HostError> {
		self.tool()?.copy(text)
	}
}
