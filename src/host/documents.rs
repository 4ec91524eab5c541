use std::path::PathBuf;

use tracing::instrument;
use walkdir::WalkDir;

use super::Documents;
use crate::HostError;

/// Markdown notes under one directory. Ids are paths relative to it; the `.md` extension may be omitted.
#[derive(Clone, Debug)]
pub struct NotesDir {
	root: PathBuf,
}

impl NotesDir {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	fn path_of(&self, id: &str) -> PathBuf {
		let path = self.root.join(id);
		if !path.exists() && path.extension().is_none() {
			let with_ext = path.with_extension("md");
			if with_ext.exists() {
				return with_ext;
			}
		}
		path
	}
}

impl Documents for NotesDir {
	fn list(&self) -> Result<Vec<String>, HostError> {
		let ids = WalkDir::new(&self.root)
			.sort_by_file_name()
			.into_iter()
			.filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
			.filter_map(Result::ok)
			.filter(|e| e.file_type().is_file() && e.path().extension().is_some_and(|ext| ext == "md"))
			.filter_map(|e| e.path().strip_prefix(&self.root).ok().map(|p| p.to_string_lossy().into_owned()))
			.collect();
		Ok(ids)
	}

	#[instrument(skip(self))]
	fn read(&self, id: &str) -> Result<String, HostError> {
		let path = self.path_of(id);
		if !path.is_file() {
			return Err(HostError::DocumentNotFound { id: id.to_string(), path });
		}
		Ok(std::fs::read_to_string(&path)?)
	}

	#[instrument(skip(self, text), fields(len = text.len()))]
	fn write(&self, id: &str, text: &str) -> Result<(), HostError> {
		let path = self.path_of(id);
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&path, text)?;
		tracing::debug!(path = %path.display(), "wrote document");
		Ok(())
	}
}
