use crate::store::FileStore;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use nodelens_document::decode;
use nodelens_editor::{EditForm, EditorConfig, FieldKind, NodeEditor, SelectedNode};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FormArgs {
    /// JSON document
    pub file: PathBuf,

    /// Canonical path of the node to edit
    pub path: String,
}

pub fn form(args: FormArgs, cwd: &str) -> Result<()> {
    let config = EditorConfig::load(cwd)?;
    let path = decode(&args.path)?;

    let mut editor = NodeEditor::new(FileStore::new(&args.file), config);
    let shape = editor.open(SelectedNode::new(path.clone()))?;

    println!("{} {}", "Path:".dimmed(), path.encode().cyan());
    println!("{} {:?}", "Shape:".dimmed(), shape);
    if let Some(key) = editor.session().draft().and_then(|draft| draft.key()) {
        println!("{} {}", "Key:".dimmed(), key.bright_white());
    }
    println!();

    match editor.form()? {
        EditForm::Scalar(field) => {
            println!("  {} {}", "value".bright_white(), field.display_text());
        }
        EditForm::Fields(fields) => {
            for field in fields {
                let marker = match field.kind {
                    FieldKind::Color => " (color)".magenta().to_string(),
                    FieldKind::Text => String::new(),
                };
                println!(
                    "  {}{} {}",
                    field.label.bright_white(),
                    marker,
                    field.display_text()
                );
            }
        }
        EditForm::RawText(text) => println!("{}", text),
    }

    editor.cancel();
    Ok(())
}
