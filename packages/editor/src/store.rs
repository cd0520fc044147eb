//! # Document Store Boundary
//!
//! The store holds the authoritative serialized document. The editor reads
//! the current text from it and, on save, hands back one full replacement.
//! Nothing else writes to it.

use crate::EditorResult;
use tracing::debug;

pub trait DocumentStore {
    /// Current serialized document
    fn current_text(&self) -> EditorResult<String>;

    /// Replace the whole document
    fn replace_text(&mut self, text: String) -> EditorResult<()>;
}

type Subscriber = Box<dyn FnMut(&str, u64)>;

/// In-process store that notifies subscribers after every replacement
pub struct MemoryStore {
    text: String,
    version: u64,
    subscribers: Vec<Subscriber>,
}

impl MemoryStore {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            version: 0,
            subscribers: Vec::new(),
        }
    }

    /// Called with the new text and version after each replacement
    pub fn subscribe(&mut self, subscriber: impl FnMut(&str, u64) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

impl DocumentStore for MemoryStore {
    fn current_text(&self) -> EditorResult<String> {
        Ok(self.text.clone())
    }

    fn replace_text(&mut self, text: String) -> EditorResult<()> {
        self.text = text;
        self.version += 1;

        debug!(version = self.version, subscribers = self.subscribers.len(), "Store updated");
        for subscriber in &mut self.subscribers {
            subscriber(&self.text, self.version);
        }

        Ok(())
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("text", &self.text)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
