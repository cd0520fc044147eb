use nodelens_editor::{DocumentStore, EditorResult};
use std::path::PathBuf;
use tracing::debug;

/// JSON file on disk acting as the document store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentStore for FileStore {
    fn current_text(&self) -> EditorResult<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }

    fn replace_text(&mut self, mut text: String) -> EditorResult<()> {
        if !text.ends_with('\n') {
            text.push('\n');
        }
        std::fs::write(&self.path, &text)?;
        debug!(path = %self.path.display(), bytes = text.len(), "Wrote document");
        Ok(())
    }
}
