use crate::store::FileStore;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use nodelens_document::decode;
use nodelens_editor::{EditorConfig, EditorError, NodeEditor, SelectedNode};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct SetArgs {
    /// JSON document, rewritten in place
    pub file: PathBuf,

    /// Canonical path of an existing node
    pub path: String,

    /// Replacement as JSON; anything that is not valid JSON is taken as a
    /// plain scalar (number, boolean, null or string)
    pub value: Option<String>,

    /// Rename the field to this key, keeping its position
    #[arg(long)]
    pub key: Option<String>,
}

pub fn set(args: SetArgs, cwd: &str) -> Result<()> {
    if args.value.is_none() && args.key.is_none() {
        bail!("Nothing to change: pass a value, --key, or both");
    }

    let config = EditorConfig::load(cwd)?;
    let path = decode(&args.path)?;

    let mut editor = NodeEditor::new(FileStore::new(&args.file), config);
    editor.open(SelectedNode::new(path.clone()))?;

    if let Some(value) = &args.value {
        match editor.session_mut().update_raw(value) {
            Ok(()) => {}
            Err(EditorError::InvalidInput(reason)) => {
                debug!(%reason, "Value is not JSON; using scalar text");
                editor.session_mut().update_scalar(value)?;
            }
            Err(other) => return Err(other.into()),
        }
    }
    if let Some(key) = &args.key {
        editor.session_mut().update_key(key)?;
    }

    let modified = editor.session().is_modified();
    editor.save()?;

    if modified {
        println!("{} Updated {}", "✓".green(), path.encode().cyan());
    } else {
        println!("{} {} unchanged", "✓".green(), path.encode().cyan());
    }
    Ok(())
}
