mod commands;
mod store;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    form, get, init, path, paths, set, FormArgs, GetArgs, InitArgs, PathArgs, PathsArgs, SetArgs,
};

/// Nodelens - inspect and edit single nodes of JSON documents
#[derive(Parser, Debug)]
#[command(name = "nodelens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default nodelens.config.json
    Init(InitArgs),

    /// Print the canonical path string for a list of segments
    Path(PathArgs),

    /// List the canonical path of every node in a document
    Paths(PathsArgs),

    /// Print the value at a path
    Get(GetArgs),

    /// Print the edit form for the node at a path
    Form(FormArgs),

    /// Replace the value at a path and write the document back
    Set(SetArgs),
}

fn main() {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Path(args) => path(args, &cwd),
        Command::Paths(args) => paths(args, &cwd),
        Command::Get(args) => get(args, &cwd),
        Command::Form(args) => form(args, &cwd),
        Command::Set(args) => set(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
