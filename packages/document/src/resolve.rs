//! # Resolution
//!
//! Read-only descent from the root along a path. Results borrow from the
//! document; nothing is copied.

use crate::{Document, DocumentError, DocumentResult, Path, Segment};
use tracing::debug;

/// Value at `path`, or `NotFound` naming the first segment that failed.
///
/// A field segment only descends into an object and an index segment only
/// into an array; any other pairing is `NotFound` as well.
pub fn resolve<'a>(document: &'a Document, path: &Path) -> DocumentResult<&'a Document> {
    let mut current = document;

    for (depth, segment) in path.iter().enumerate() {
        let next = match (current, segment) {
            (Document::Object(fields), Segment::Field(name)) => fields.get(name),
            (Document::Array(items), Segment::Index(i)) => items.get(*i),
            _ => None,
        };

        current = match next {
            Some(child) => child,
            None => {
                debug!(path = %path, depth, found = %current.kind(), "Path did not resolve");
                return Err(DocumentError::not_found(path, depth));
            }
        };
    }

    Ok(current)
}

/// `Option` form of [`resolve`].
pub fn get<'a>(document: &'a Document, path: &Path) -> Option<&'a Document> {
    resolve(document, path).ok()
}

/// Every node of `document` with its path, parents before children and
/// siblings in document order. The root comes first with the empty path.
pub fn walk(document: &Document) -> Vec<(Path, &Document)> {
    let mut nodes = Vec::new();
    walk_into(document, Path::root(), &mut nodes);
    nodes
}

fn walk_into<'a>(node: &'a Document, path: Path, out: &mut Vec<(Path, &'a Document)>) {
    match node {
        Document::Object(fields) => {
            out.push((path.clone(), node));
            for (name, child) in fields.iter() {
                walk_into(child, path.child(name.as_str()), out);
            }
        }
        Document::Array(items) => {
            out.push((path.clone(), node));
            for (i, child) in items.iter().enumerate() {
                walk_into(child, path.child(i), out);
            }
        }
        _ => out.push((path, node)),
    }
}
