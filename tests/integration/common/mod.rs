//! Shared test infrastructure for integration tests.
//!
//! Provides `TestContext`, which lays out a fixture in a temporary XDG tree and runs the compiled
//! binary against it.
//!
//! # Example
//!
//! ```ignore
//! let ctx = TestContext::new(r#"
//! //- /data/log.md
//! - 20240101 - a
//! "#);
//!
//! let (status, stdout, stderr) = ctx.run(&["sort", "log.md", "--whole"]);
//! assert!(status.success());
//! ```

use std::{
	path::PathBuf,
	process::{Command, ExitStatus},
};

use v_fixtures::{Fixture, fs_standards::xdg::Xdg};

pub struct TestContext {
	/// The Xdg wrapper managing temp directories
	pub xdg: Xdg,
	/// JSON trace output of the last run.
	pub trace_file: PathBuf,
}

impl TestContext {
	/// Create a new test context from a fixture string.
	///
	/// Files in the fixture use XDG category prefixes:
	/// - `/data/log.md` → `XDG_DATA_HOME/stampsort/log.md` (the default notes dir)
	pub fn new(fixture_str: &str) -> Self {
		let fixture = Fixture::parse(fixture_str);
		let xdg = Xdg::new(fixture.write_to_tempdir(), env!("CARGO_PKG_NAME"));
		let trace_file = xdg.inner.root.join("trace.jsonl");
		Self { xdg, trace_file }
	}

	/// Run a command with the temp XDG environment.
	///
	/// Returns (exit_status, stdout, stderr) for easy assertions.
	pub fn run(&self, args: &[&str]) -> (ExitStatus, String, String) {
		self.run_with_env(args, &[])
	}

	/// Same as [`run`](Self::run), with extra environment variables on top.
	pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> (ExitStatus, String, String) {
		let mut cmd = Command::new(env!("CARGO_BIN_EXE_stampsort"));
		cmd.args(args);
		for (key, value) in self.xdg.env_vars() {
			cmd.env(key, value);
		}
		cmd.env("STAMPSORT_TRACE_FILE", &self.trace_file).env_remove("RUST_LOG");
		cmd.envs(env.iter().copied());
		let output = cmd.output().unwrap();
		(
			output.status,
			String::from_utf8_lossy(&output.stdout).into_owned(),
			String::from_utf8_lossy(&output.stderr).into_owned(),
		)
	}

	/// Absolute path of a file in the data directory.
	pub fn data_path(&self, relative_path: &str) -> PathBuf {
		self.xdg.data_dir().join(relative_path.trim_start_matches('/'))
	}

	/// Write a file to the data directory.
	pub fn write(&self, relative_path: &str, content: &str) {
		self.xdg.write_data(relative_path.trim_start_matches('/'), content);
	}

	/// Read a note by its path relative to the notes dir.
	pub fn read_note(&self, id: &str) -> String {
		self.xdg.read_data(id.trim_start_matches('/'))
	}
}
