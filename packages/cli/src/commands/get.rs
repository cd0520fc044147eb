use anyhow::Result;
use clap::Args;
use colored::Colorize;
use nodelens_document::{decode, resolve, Document};
use nodelens_editor::{classify, EditorConfig};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GetArgs {
    /// JSON document
    pub file: PathBuf,

    /// Canonical path, e.g. '$["fruits"][0]'
    pub path: String,
}

pub fn get(args: GetArgs, cwd: &str) -> Result<()> {
    let config = EditorConfig::load(cwd)?;
    let path = decode(&args.path)?;
    let document = Document::parse(&std::fs::read_to_string(&args.file)?)?;

    let value = resolve(&document, &path)?;

    println!("{} {:?}", "Shape:".dimmed(), classify(value));
    println!("{}", value.to_json_pretty(config.indent)?);
    Ok(())
}
