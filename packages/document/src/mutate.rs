//! # Mutation
//!
//! Copy-on-write replacement of one node.
//!
//! `set` never touches its input. It returns a new root in which every
//! container on the path is a fresh shallow copy with exactly one child
//! swapped; every other subtree is shared with the input document.
//!
//! ```text
//! set({"a": [1, {"b": 2}]}, ["a", 1, "b"], 5)
//!
//!   root'  ──"a"──► array' ──[1]──► object' ──"b"──► 5
//!                      └──[0]──► 1          (shared)
//! ```
//!
//! The whole path is validated before anything is copied, so a failed call
//! has no observable effect. `rename` follows the same rules for moving a
//! field to a new key.

use crate::{resolve, Document, DocumentError, DocumentResult, Fields, Kind, Path, Segment};
use std::sync::Arc;
use tracing::debug;

/// Replace the node at `path` with `value`, returning the new root.
///
/// - An empty path is rejected with `EmptyPath`; the root is never replaced.
/// - A field segment against a non-object (or an index segment against a
///   non-array) is `StructuralMismatch`.
/// - A missing field or out-of-range index is `NotFound`; `set` replaces
///   existing nodes only.
///
/// Replacing an existing object field keeps the field's position.
pub fn set(document: &Document, path: &Path, value: Document) -> DocumentResult<Document> {
    if path.is_empty() {
        return Err(DocumentError::EmptyPath);
    }

    let result = set_at(document, path, 0, value);
    if let Err(err) = &result {
        debug!(path = %path, error = %err, "Mutation rejected");
    }
    result
}

fn set_at(node: &Document, path: &Path, depth: usize, value: Document) -> DocumentResult<Document> {
    let Some(segment) = path.segments().get(depth) else {
        return Ok(value);
    };

    match (node, segment) {
        (Document::Object(fields), Segment::Field(name)) => {
            let child = fields
                .get(name)
                .ok_or_else(|| DocumentError::not_found(path, depth))?;
            let replacement = set_at(child, path, depth + 1, value)?;

            // Still shared with `node`, so make_mut clones the map shallowly
            let mut fields = Arc::clone(fields);
            Arc::make_mut(&mut fields).insert(name.clone(), replacement);
            Ok(Document::Object(fields))
        }
        (Document::Array(items), Segment::Index(i)) => {
            let child = items
                .get(*i)
                .ok_or_else(|| DocumentError::not_found(path, depth))?;
            let replacement = set_at(child, path, depth + 1, value)?;

            let mut items = Arc::clone(items);
            Arc::make_mut(&mut items)[*i] = replacement;
            Ok(Document::Array(items))
        }
        (other, Segment::Field(_)) => Err(DocumentError::mismatch(
            path,
            depth,
            Kind::Object,
            other.kind(),
        )),
        (other, Segment::Index(_)) => Err(DocumentError::mismatch(
            path,
            depth,
            Kind::Array,
            other.kind(),
        )),
    }
}

/// Rename the object field at `path` to `new_key`, returning the new root.
///
/// The value moves with the key and keeps its position among its siblings.
/// The terminal segment must be a field of an object; an index terminal is
/// `StructuralMismatch` and an empty path is `EmptyPath`. A missing field is
/// `NotFound`, and a `new_key` that already names a sibling is `KeyConflict`.
/// Renaming a field to its own name returns the document unchanged.
pub fn rename(document: &Document, path: &Path, new_key: &str) -> DocumentResult<Document> {
    let (Some(last), Some(parent_path)) = (path.last(), path.parent()) else {
        return Err(DocumentError::EmptyPath);
    };
    let depth = parent_path.len();

    let parent = resolve(document, &parent_path)?;
    let (fields, old_key) = match (parent, last) {
        (Document::Object(fields), Segment::Field(name)) => (fields, name),
        // Array items have no key to rename
        (Document::Array(_), Segment::Index(_)) => {
            return Err(DocumentError::mismatch(path, depth, Kind::Object, Kind::Array));
        }
        (other, Segment::Index(_)) => {
            return Err(DocumentError::mismatch(path, depth, Kind::Array, other.kind()));
        }
        (other, Segment::Field(_)) => {
            return Err(DocumentError::mismatch(path, depth, Kind::Object, other.kind()));
        }
    };

    if !fields.contains_key(old_key) {
        return Err(DocumentError::not_found(path, depth));
    }
    if old_key == new_key {
        return Ok(document.clone());
    }
    if fields.contains_key(new_key) {
        debug!(path = %path, key = new_key, "Rename rejected");
        return Err(DocumentError::KeyConflict {
            path: parent_path,
            key: new_key.to_string(),
        });
    }

    let renamed: Fields = fields
        .iter()
        .map(|(key, value)| {
            let key = if key == old_key { new_key } else { key.as_str() };
            (key.to_string(), value.clone())
        })
        .collect();
    let renamed = Document::Object(Arc::new(renamed));

    if parent_path.is_empty() {
        Ok(renamed)
    } else {
        set(document, &parent_path, renamed)
    }
}
