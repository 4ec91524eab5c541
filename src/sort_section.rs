use clap::Args;
use color_eyre::eyre::{Result, WrapErr as _};
use stampsort::{
	HostError, SectionChoice, SectionError, SortOutcome,
	host::{Choice, Host},
	section, sort_section,
};
use tracing::instrument;

#[derive(Args, Clone, Debug, Default)]
pub struct SortArgs {
	/// Document to sort, relative to the notes dir; picked interactively when omitted
	pub doc: Option<String>,
	/// Heading of the section to sort; picked interactively when omitted
	#[arg(short, long, conflicts_with = "whole")]
	pub section: Option<String>,
	/// Sort the whole document
	#[arg(short, long)]
	pub whole: bool,
	/// Print the sorted document instead of writing it back
	#[arg(long)]
	pub dry_run: bool,
}

#[derive(Args, Clone, Debug)]
pub struct HeadingsArgs {
	/// Document to list, relative to the notes dir
	pub doc: String,
}

#[instrument(skip(host))]
pub fn sort_command(args: SortArgs, host: Host) -> Result<()> {
	let doc_id = match args.doc {
		Some(id) => id,
		None => {
			let ids = host.documents.list()?;
			if ids.is_empty() {
				host.notifier.notify("No documents to sort");
				return Ok(());
			}
			match picked(host.chooser.choose("document", &ids)?, &ids) {
				Some(id) => id.clone(),
				None => return Ok(()),
			}
		}
	};

	let text = host.documents.read(&doc_id)?;
	if text.trim().is_empty() {
		return Err(HostError::DocumentEmpty { id: doc_id }.into());
	}
	let lines: Vec<&str> = text.split('\n').collect();

	let choice = if args.whole {
		SectionChoice::WholeDocument
	} else if let Some(query) = args.section {
		let heading = section::find_heading(&lines, &query).ok_or(SectionError::NoSuchHeading { query })?;
		SectionChoice::Heading(heading.line)
	} else {
		let (labels, choices): (Vec<String>, Vec<SectionChoice>) = section::choices(&lines).into_iter().unzip();
		match picked(host.chooser.choose("section", &labels)?, &choices) {
			Some(&choice) => choice,
			None => return Ok(()),
		}
	};
	tracing::debug!(%choice, doc = %doc_id, "sorting");

	let target = section::locate(&lines, choice)?;
	let outcome = sort_section(&lines, &target);
	let n_rows = match &outcome {
		SortOutcome::NothingToSort => {
			host.notifier.notify(&format!("Nothing to sort in `{}`", target.label));
			return Ok(());
		}
		SortOutcome::Sorted { n_rows, .. } => *n_rows,
	};
	let Some(new_text) = outcome.text() else { return Ok(()) };

	if args.dry_run {
		print!("{new_text}");
		return Ok(());
	}
	if new_text == text {
		host.notifier.notify(&format!("`{}` is already sorted", target.label));
		return Ok(());
	}
	host.documents.write(&doc_id, &new_text).wrap_err_with(|| format!("Failed to write `{doc_id}`"))?;
	host.notifier.notify(&format!("Sorted {n_rows} entries in `{}`", target.label));
	Ok(())
}

/// The picked item; an index out of range counts as cancelled.
fn picked<T>(choice: Choice<usize>, items: &[T]) -> Option<&T> {
	match choice {
		Choice::Selected(i) => items.get(i),
		Choice::Cancelled => None,
	}
}

pub fn headings_command(args: HeadingsArgs, host: Host) -> Result<()> {
	let text = host.documents.read(&args.doc)?;
	let lines: Vec<&str> = text.split('\n').collect();
	for heading in section::headings(&lines) {
		println!("{}", heading.label());
	}
	Ok(())
}
