use anyhow::Result;
use clap::Args;
use colored::Colorize;
use nodelens_editor::{EditorConfig, DEFAULT_CONFIG_NAME};
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = EditorConfig::path_in(cwd);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let content = EditorConfig::default().to_json_pretty()?;
    fs::write(&config_path, content + "\n")?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_string_lossy().to_string();

        init(InitArgs { force: false }, &cwd).unwrap();

        assert_eq!(EditorConfig::load(&cwd).unwrap(), EditorConfig::default());
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_string_lossy().to_string();
        fs::write(EditorConfig::path_in(&cwd), r#"{ "indent": 7 }"#).unwrap();

        init(InitArgs { force: false }, &cwd).unwrap();
        assert_eq!(EditorConfig::load(&cwd).unwrap().indent, 7);

        init(InitArgs { force: true }, &cwd).unwrap();
        assert_eq!(EditorConfig::load(&cwd).unwrap().indent, 2);
    }
}
