use super::Notifier;

/// Prints status to stderr, keeping stdout for command output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
	fn notify(&self, message: &str) {
		tracing::info!(target: "notify", "{message}");
		eprintln!("{message}");
	}
}
