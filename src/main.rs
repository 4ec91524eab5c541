use std::sync::Mutex;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr as _};
use stampsort::host::{FzfChooser, Host, NotesDir, StderrNotifier, SystemClipboard};
use tracing_subscriber::{EnvFilter, Layer as _, prelude::*};

mod config;
mod extract_posts;
#[cfg(test)]
mod mocks;
mod shell_init;
mod sort_section;

use config::{AppConfig, SettingsFlags};
use extract_posts::ExtractArgs;
use shell_init::ShellInitArgs;
use sort_section::{HeadingsArgs, SortArgs};

/// When set, every event is also written to this file as JSON lines.
static TRACE_FILE_ENV: &str = "STAMPSORT_TRACE_FILE";

#[derive(Parser)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
	#[clap(flatten)]
	settings: SettingsFlags,
}

#[derive(Subcommand)]
enum Commands {
	/// Turn post markup (from the clipboard by default) into timestamp-rows
	Extract(ExtractArgs),
	/// Sort the timestamp-rows of a document section, newest first
	Sort(SortArgs),
	/// List the headings of a document, indented by level
	Headings(HeadingsArgs),
	/// Shell aliases and completions, e.g. `stampsort shell-init fish | source`
	ShellInit(ShellInitArgs),
}

fn main() -> Result<()> {
	color_eyre::install()?;
	let cli = Cli::parse();
	let config = AppConfig::load(&cli.settings)?;
	init_tracing(config.debug)?;
	tracing::debug!(?config, "loaded config");

	let documents = NotesDir::new(&config.notes_dir);
	let clipboard = SystemClipboard::detect();
	let host = Host {
		documents: &documents,
		chooser: &FzfChooser,
		clipboard: &clipboard,
		notifier: &StderrNotifier,
	};

	match cli.command {
		Commands::Extract(args) => extract_posts::extract_command(&config, args, host),
		Commands::Sort(args) => sort_section::sort_command(args, host),
		Commands::Headings(args) => sort_section::headings_command(args, host),
		Commands::ShellInit(args) => {
			println!("{}", shell_init::output(args));
			Ok(())
		}
	}
}

/// `RUST_LOG` wins; otherwise the debug flag, then directives baked in at build time, then `warn`.
fn init_tracing(debug: bool) -> Result<()> {
	let fallback = if debug { "debug" } else { option_env!("LOG_DIRECTIVES").unwrap_or("warn") };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
	let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false).with_filter(filter);

	let file_layer = match std::env::var_os(TRACE_FILE_ENV) {
		Some(path) => {
			let file = std::fs::File::create(&path).wrap_err_with(|| format!("Failed to create trace file {}", path.to_string_lossy()))?;
			Some(tracing_subscriber::fmt::layer().json().with_writer(Mutex::new(file)).with_filter(EnvFilter::new("debug")))
		}
		None => None,
	};

	tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
	Ok(())
}
