//! # Nodelens Editor
//!
//! Editing engine for one node of a JSON document at a time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host: selection → SelectedNode { path }     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: classify → edit → commit / discard  │
//! │  - ShapeClassifier picks the edit form      │
//! │  - EditSession buffers a private draft      │
//! │  - NodeEditor reads and writes the store    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: resolve / set on Document values  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The store is authoritative**: only `save` replaces its document
//! 2. **Drafts are private**: edits never reach the document before commit
//! 3. **Failures are local**: a rejected edit or commit changes nothing
//!
//! ## Usage
//!
//! ```rust
//! use nodelens_document::path;
//! use nodelens_editor::{EditorConfig, MemoryStore, NodeEditor, SelectedNode};
//!
//! let store = MemoryStore::new(r#"{"a": [1, {"b": 2}]}"#);
//! let mut editor = NodeEditor::new(store, EditorConfig::default());
//!
//! editor.open(SelectedNode::new(path!("a", 1usize, "b"))).unwrap();
//! editor.session_mut().update_scalar("5").unwrap();
//! editor.save().unwrap();
//! ```

mod config;
mod errors;
mod form;
mod node_editor;
mod session;
mod shape;
mod store;

pub use config::{EditorConfig, RecognizedShape, ReopenPolicy, DEFAULT_CONFIG_NAME};
pub use errors::{EditorError, EditorResult};
pub use form::{parse_scalar_text, EditForm, FieldKind, FormField};
pub use node_editor::{DisplayRow, NodeEditor, SelectedNode};
pub use session::{Draft, EditSession, SessionState};
pub use shape::{classify, ShapeClassifier, ShapeTag};
pub use store::{DocumentStore, MemoryStore};

// Re-export document types for convenience
pub use nodelens_document::{Document, Path, Segment};
