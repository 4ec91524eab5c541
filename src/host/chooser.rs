use std::{
	io::Write as _,
	process::{Command, Stdio},
};

use super::{Choice, Chooser};
use crate::HostError;

/// Picks with `fzf`, keeping the options in the given order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FzfChooser;

impl Chooser for FzfChooser {
	fn choose(&self, prompt: &str, options: &[String]) -> Result<Choice<usize>, HostError> {
		if options.is_empty() {
			return Ok(Choice::Cancelled);
		}

		// Prefix each option with its index so duplicate labels stay distinguishable; only the label is shown.
		let input = options.iter().enumerate().map(|(i, o)| format!("{i}\t{o}")).collect::<Vec<_>>().join("\n");

		let mut fzf = Command::new("fzf")
			.args(["--prompt", &format!("{prompt}> "), "--delimiter", "\t", "--with-nth", "2..", "--no-sort", "--layout", "reverse"])
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.spawn()
			.map_err(|e| HostError::ToolFailed { tool: "fzf", message: e.to_string() })?;

		if let Some(mut stdin) = fzf.stdin.take() {
			stdin.write_all(input.as_bytes())?;
		}

		let output = fzf.wait_with_output()?;
		if !output.status.success() {
			// 1: no match, 130: interrupted with Esc/Ctrl-C
			tracing::debug!(code = ?output.status.code(), "fzf exited without a selection");
			return Ok(Choice::Cancelled);
		}

		let chosen = String::from_utf8_lossy(&output.stdout);
		let index = chosen.split('\t').next().and_then(|i| i.trim().parse::<usize>().ok()).filter(|&i| i < options.len());
		Ok(match index {
			Some(i) => Choice::Selected(i),
			None => Choice::Cancelled,
		})
	}
}
