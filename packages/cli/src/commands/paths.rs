use anyhow::Result;
use clap::Args;
use colored::Colorize;
use nodelens_document::{walk, Document};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PathsArgs {
    /// JSON document
    pub file: PathBuf,

    /// Only list scalar leaves
    #[arg(long)]
    pub leaves: bool,
}

pub fn paths(args: PathsArgs, _cwd: &str) -> Result<()> {
    let document = Document::parse(&std::fs::read_to_string(&args.file)?)?;

    for (path, node) in walk(&document) {
        if args.leaves && !node.is_scalar() {
            continue;
        }
        println!("{}  {}", path.encode(), node.kind().to_string().dimmed());
    }

    Ok(())
}
