//! Error types for the editor

use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Error, Debug)]
pub enum EditorError {
    /// Resolution, mutation and path decoding failures
    #[error("Document error: {0}")]
    Document(#[from] nodelens_document::DocumentError),

    /// Raw-text draft is not a valid document; the previous draft is kept
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No node is being edited")]
    NotEditing,

    #[error("An edit session is already open for {0}")]
    SessionActive(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl EditorError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, EditorError::Document(e) if e.is_not_found())
    }

    pub fn is_structural_mismatch(&self) -> bool {
        matches!(self, EditorError::Document(e) if e.is_structural_mismatch())
    }
}
