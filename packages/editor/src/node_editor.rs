//! # Node Editor
//!
//! Host-facing controller for viewing and editing one selected node:
//! open a selection, edit the draft through the session, then save into the
//! store or cancel.
//!
//! ```text
//! store text ─parse─► Document ─begin─► EditSession ─commit─► Document ─serialize─► store
//! ```

use crate::config::EditorConfig;
use crate::{DocumentStore, EditForm, EditSession, EditorError, EditorResult, ShapeTag};
use nodelens_document::{resolve, Document, DocumentResult, Path};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Key/value pair shown in the read-only content view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub key: String,
    pub value: Document,
}

/// What the host hands over when a node is selected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedNode {
    pub path: Path,
    #[serde(default)]
    pub rows: Vec<DisplayRow>,
}

impl SelectedNode {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, key: impl Into<String>, value: Document) -> Self {
        self.rows.push(DisplayRow {
            key: key.into(),
            value,
        });
        self
    }

    /// Selection for the node at `path`, with one row per scalar field of an
    /// object node, or a single unnamed row for a scalar node.
    pub fn from_document(document: &Document, path: Path) -> DocumentResult<Self> {
        let node = resolve(document, &path)?;

        let rows = match node {
            Document::Object(fields) => fields
                .iter()
                .filter(|(_, v)| v.is_scalar())
                .map(|(k, v)| DisplayRow {
                    key: k.clone(),
                    value: v.clone(),
                })
                .collect(),
            Document::Array(_) => Vec::new(),
            scalar => vec![DisplayRow {
                key: String::new(),
                value: scalar.clone(),
            }],
        };

        Ok(Self { path, rows })
    }

    /// Canonical path string, e.g. `$["fruits"][0]`
    pub fn path_label(&self) -> String {
        self.path.encode()
    }

    /// Rows as a pretty JSON array of `{"key", "value"}` objects
    pub fn content_json(&self, indent: usize) -> EditorResult<String> {
        let rows: Document = self
            .rows
            .iter()
            .map(|row| {
                [
                    ("key".to_string(), Document::from(row.key.as_str())),
                    ("value".to_string(), row.value.clone()),
                ]
                .into_iter()
                .collect::<Document>()
            })
            .collect();

        Ok(rows.to_json_pretty(indent)?)
    }
}

pub struct NodeEditor<S: DocumentStore> {
    store: S,
    session: EditSession,
    config: EditorConfig,
    selection: Option<SelectedNode>,
}

impl<S: DocumentStore> NodeEditor<S> {
    pub fn new(store: S, config: EditorConfig) -> Self {
        Self {
            session: EditSession::with_config(&config),
            store,
            config,
            selection: None,
        }
    }

    /// Parse the store's current document
    pub fn document(&self) -> EditorResult<Document> {
        let text = self.store.current_text()?;
        Ok(Document::parse(&text)?)
    }

    /// Start editing the selected node against the store's current document.
    ///
    /// A selection whose path no longer resolves is `NotFound`.
    pub fn open(&mut self, selection: SelectedNode) -> EditorResult<ShapeTag> {
        let document = self.document()?;
        let shape = self.session.begin(&document, selection.path.clone())?;
        self.selection = Some(selection);
        Ok(shape)
    }

    /// Commit the draft onto the store's current document and persist it.
    ///
    /// Any failure leaves the draft open and the store unchanged.
    pub fn save(&mut self) -> EditorResult<Document> {
        if !self.session.is_editing() {
            return Err(EditorError::NotEditing);
        }

        let current = self.document()?;
        let checkpoint = self.session.clone();

        let updated = self.session.commit_onto(&current)?;
        let written = updated
            .to_json_pretty(self.config.indent)
            .map_err(EditorError::from)
            .and_then(|text| self.store.replace_text(text));

        if let Err(err) = written {
            warn!(error = %err, "Store rejected document; keeping draft open");
            self.session = checkpoint;
            return Err(err);
        }

        if let Some(selection) = self.selection.take() {
            info!(path = %selection.path, "Saved node");
        }
        Ok(updated)
    }

    /// Drop the draft without touching the store
    pub fn cancel(&mut self) -> bool {
        self.selection = None;
        self.session.discard()
    }

    pub fn form(&self) -> EditorResult<EditForm> {
        self.session.form()
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Draft edits go through the session directly
    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    pub fn selection(&self) -> Option<&SelectedNode> {
        self.selection.as_ref()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
