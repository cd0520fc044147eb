use crate::{EditorError, EditorResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "nodelens.config.json";

/// Editor configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Indentation used when handing documents back to the store
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// What `begin` does while another node is being edited
    #[serde(default)]
    pub reopen_policy: ReopenPolicy,

    /// Field set that marks an object as a described item
    #[serde(default)]
    pub recognized_shape: RecognizedShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReopenPolicy {
    /// Drop the open draft and start the new session
    #[default]
    AutoDiscard,
    /// Refuse until the open session is committed or discarded
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedShape {
    #[serde(default = "default_required_fields")]
    pub required_fields: Vec<String>,
}

fn default_indent() -> usize {
    2
}

fn default_required_fields() -> Vec<String> {
    ["name", "color", "details", "nutrients"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for RecognizedShape {
    fn default() -> Self {
        Self {
            required_fields: default_required_fields(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            reopen_policy: ReopenPolicy::default(),
            recognized_shape: RecognizedShape::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(dir: impl AsRef<Path>) -> EditorResult<Self> {
        let config_path = Self::path_in(dir);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_json(content: &str) -> EditorResult<Self> {
        serde_json::from_str(content).map_err(|e| EditorError::Config(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> EditorResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EditorError::Config(e.to_string()))
    }

    pub fn path_in(dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(DEFAULT_CONFIG_NAME)
    }
}
