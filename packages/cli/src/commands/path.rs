use anyhow::Result;
use clap::Args;
use nodelens_document::{Path, Segment};

#[derive(Debug, Args)]
pub struct PathArgs {
    /// Segments from the root; plain integers become array indices
    pub segments: Vec<String>,

    /// Treat every segment as a field name
    #[arg(long)]
    pub field: bool,
}

pub fn path(args: PathArgs, _cwd: &str) -> Result<()> {
    println!("{}", build_path(&args.segments, args.field).encode());
    Ok(())
}

pub(crate) fn build_path(segments: &[String], all_fields: bool) -> Path {
    segments
        .iter()
        .map(|raw| match raw.parse::<usize>() {
            Ok(i) if !all_fields && i.to_string() == *raw => Segment::Index(i),
            _ => Segment::Field(raw.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodelens_document::path;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_integers_become_indices() {
        let p = build_path(&strings(&["a", "1", "b"]), false);
        assert_eq!(p, path!("a", 1usize, "b"));
        assert_eq!(p.encode(), r#"$["a"][1]["b"]"#);
    }

    #[test]
    fn test_non_canonical_integers_stay_fields() {
        let p = build_path(&strings(&["01", "+1"]), false);
        assert_eq!(p, path!("01", "+1"));
    }

    #[test]
    fn test_field_flag() {
        assert_eq!(build_path(&strings(&["0"]), true), path!("0"));
    }

    #[test]
    fn test_no_segments_is_root() {
        assert_eq!(build_path(&[], false).encode(), "$");
    }
}
