//! # Nodelens Document
//!
//! Path-addressed access to JSON documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ codec: Path ⇄ $["key"][0]["nested"]         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ resolve: (Document, Path) → &Document       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ mutate: (Document, Path, value) → Document  │
//! │  - copy-on-write along the path only        │
//! │  - rename keeps the field's position        │
//! │  - input document never changes             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use nodelens_document::{path, resolve, set, Document};
//!
//! let doc = Document::parse(r#"{"a": [1, {"b": 2}]}"#).unwrap();
//! let p = path!("a", 1usize, "b");
//!
//! assert_eq!(p.to_string(), r#"$["a"][1]["b"]"#);
//! assert_eq!(resolve(&doc, &p).unwrap(), &Document::from(2i64));
//!
//! let updated = set(&doc, &p, Document::from(5i64)).unwrap();
//! assert_eq!(updated.to_json_string().unwrap(), r#"{"a":[1,{"b":5}]}"#);
//! ```

pub mod codec;
mod error;
mod mutate;
mod path;
mod resolve;
mod value;

pub use codec::{decode, encode};
pub use error::{DocumentError, DocumentResult};
pub use mutate::{rename, set};
pub use path::{Path, Segment};
pub use resolve::{get, resolve, walk};
pub use value::{Document, Fields, Kind};
