//! In-memory stand-ins for the host collaborators, for command tests.

use std::{
	cell::RefCell,
	collections::{BTreeMap, VecDeque},
};

use stampsort::{
	HostError,
	host::{Choice, Chooser, Clipboard, Documents, Host, Notifier},
};
use tracing::instrument;

#[derive(Default)]
pub struct MockHost {
	pub documents: MockDocuments,
	pub chooser: MockChooser,
	pub clipboard: MockClipboard,
	pub notifier: MockNotifier,
}

impl MockHost {
	pub fn host(&self) -> Host<'_> {
		Host {
			documents: &self.documents,
			chooser: &self.chooser,
			clipboard: &self.clipboard,
			notifier: &self.notifier,
		}
	}

	pub fn with_document(self, id: &str, text: &str) -> Self {
		self.documents.docs.borrow_mut().insert(id.to_string(), text.to_string());
		self
	}

	pub fn with_choices(self, choices: impl IntoIterator<Item = Choice<usize>>) -> Self {
		self.chooser.script.borrow_mut().extend(choices);
		self
	}

	pub fn with_clipboard(self, text: &str) -> Self {
		*self.clipboard.text.borrow_mut() = text.to_string();
		self
	}
}

#[derive(Default)]
pub struct MockDocuments {
	pub docs: RefCell<BTreeMap<String, String>>,
	pub n_writes: RefCell<usize>,
}

impl MockDocuments {
	pub fn get(&self, id: &str) -> Option<String> {
		self.docs.borrow().get(id).cloned()
	}
}

impl Documents for MockDocuments {
	fn list(&self) -> Result<Vec<String>, HostError> {
		Ok(self.docs.borrow().keys().cloned().collect())
	}

	#[instrument(skip(self), name = "MockDocuments::read")]
	fn read(&self, id: &str) -> Result<String, HostError> {
		self.get(id).ok_or_else(|| HostError::DocumentNotFound {
			id: id.to_string(),
			path: id.into(),
		})
	}

	#[instrument(skip(self, text), name = "MockDocuments::write")]
	fn write(&self, id: &str, text: &str) -> Result<(), HostError> {
		*self.n_writes.borrow_mut() += 1;
		self.docs.borrow_mut().insert(id.to_string(), text.to_string());
		Ok(())
	}
}

/// Answers with scripted choices, cancelling once the script runs out.
#[derive(Default)]
pub struct MockChooser {
	pub script: RefCell<VecDeque<Choice<usize>>>,
	/// Every `(prompt, options)` presented.
	pub presented: RefCell<Vec<(String, Vec<String>)>>,
}

impl Chooser for MockChooser {
	#[instrument(skip(self, options), name = "MockChooser::choose")]
	fn choose(&self, prompt: &str, options: &[String]) -> Result<Choice<usize>, HostError> {
		self.presented.borrow_mut().push((prompt.to_string(), options.to_vec()));
		Ok(self.script.borrow_mut().pop_front().unwrap_or(Choice::Cancelled))
	}
}

#[derive(Default)]
pub struct MockClipboard {
	pub text: RefCell<String>,
}

impl Clipboard for MockClipboard {
	fn read_text(&self) -> Result<String, HostError> {
		Ok(self.text.borrow().clone())
	}

	fn write_text(&self, text: &str) -> Result<(), HostError> {
		*self.text.borrow_mut() = text.to_string();
		Ok(())
	}
}

#[derive(Default)]
pub struct MockNotifier {
	pub messages: RefCell<Vec<String>>,
}

impl Notifier for MockNotifier {
	fn notify(&self, message: &str) {
		self.messages.borrow_mut().push(message.to_string());
	}
}
