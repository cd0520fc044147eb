use crate::{Kind, Path};
use thiserror::Error;

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// `depth` is the index of the first segment that did not resolve.
    #[error("Path not found: {path} (failed at segment {depth})")]
    NotFound { path: Path, depth: usize },

    #[error("Structural mismatch at {path}: expected {expected}, found {found}")]
    StructuralMismatch {
        path: Path,
        expected: Kind,
        found: Kind,
    },

    #[error("Cannot replace the document root: path is empty")]
    EmptyPath,

    /// Rename target already names a field of the object at `path`
    #[error("Field {key:?} already exists in {path}")]
    KeyConflict { path: Path, key: String },

    #[error("Invalid document: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid path at {pos} in {input:?}: {message}")]
    InvalidPath {
        input: String,
        pos: usize,
        message: String,
    },
}

impl DocumentError {
    pub fn not_found(path: &Path, depth: usize) -> Self {
        Self::NotFound {
            path: path.clone(),
            depth,
        }
    }

    /// Mismatch reported against the prefix of `path` up to and including `depth`.
    pub fn mismatch(path: &Path, depth: usize, expected: Kind, found: Kind) -> Self {
        Self::StructuralMismatch {
            path: path.slice(0, depth + 1),
            expected,
            found,
        }
    }

    pub fn invalid_path(input: impl Into<String>, pos: usize, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            input: input.into(),
            pos,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_structural_mismatch(&self) -> bool {
        matches!(self, Self::StructuralMismatch { .. })
    }

    pub fn is_key_conflict(&self) -> bool {
        matches!(self, Self::KeyConflict { .. })
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(e: serde_json::Error) -> Self {
        DocumentError::Parse(e.to_string())
    }
}
