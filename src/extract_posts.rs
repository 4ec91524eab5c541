use std::{io::Read as _, path::PathBuf};

use clap::Args;
use color_eyre::eyre::{Result, WrapErr as _};
use stampsort::{
	extract_posts,
	host::{self, Host},
};
use tracing::instrument;

use crate::config::AppConfig;

#[derive(Args, Clone, Debug, Default)]
pub struct ExtractArgs {
	/// Read markup from this file (`-` for stdin) instead of the clipboard
	#[arg(short, long)]
	pub input: Option<PathBuf>,
	/// Also insert the lines into this document
	#[arg(long)]
	pub into: Option<String>,
	/// 0-based line of `--into` to insert before; defaults to the end of the document
	#[arg(long, requires = "into")]
	pub line: Option<usize>,
	/// Don't copy the result to the clipboard
	#[arg(long)]
	pub no_clipboard: bool,
}

#[instrument(skip_all)]
pub fn extract_command(config: &AppConfig, args: ExtractArgs, host: Host) -> Result<()> {
	let html = match &args.input {
		None => host.clipboard.read_text().wrap_err("Failed to read the clipboard")?,
		Some(path) if path.as_os_str() == "-" => {
			let mut buf = String::new();
			std::io::stdin().read_to_string(&mut buf).wrap_err("Failed to read stdin")?;
			buf
		}
		Some(path) => std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?,
	};

	let settings = config.extract_settings()?;
	let posts = extract_posts(&html, &settings)?;
	if posts.is_empty() {
		host.notifier.notify("No posts found");
		return Ok(());
	}
	let text = posts.iter().map(|p| p.line()).collect::<Vec<_>>().join("\n");

	// The document goes first: if it can't be updated, stdout and the clipboard stay untouched.
	if let Some(id) = &args.into {
		let doc = host.documents.read(id)?;
		host.documents
			.write(id, &host::insert_lines(&doc, args.line, &text))
			.wrap_err_with(|| format!("Failed to insert into `{id}`"))?;
	}

	println!("{text}");

	if !args.no_clipboard {
		// The lines are already on stdout, so a clipboard failure only warrants a warning.
		if let Err(e) = host.clipboard.write_text(&text) {
			tracing::warn!(error = %e, "could not copy to clipboard");
			host.notifier.notify(&format!("Could not copy to clipboard: {e}"));
		}
	}

	host.notifier.notify(&format!("Extracted {} post(s)", posts.len()));
	Ok(())
}
