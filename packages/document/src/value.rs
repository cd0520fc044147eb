//! # Document Values
//!
//! The recursive tree being edited: objects, arrays and scalar leaves.
//!
//! Containers sit behind `Arc`, so cloning a `Document` is cheap and the
//! clone shares every subtree with the original. Nothing hands out mutable
//! access to a shared container; edits go through [`crate::set`], which
//! rebuilds only the containers along the edited path.

use crate::{DocumentError, DocumentResult};
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Field map of an object node. Insertion order is preserved.
pub type Fields = IndexMap<String, Document>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Document {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Arc<Vec<Document>>),
    Object(Arc<Fields>),
}

/// Node kind, used for classification and mismatch reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Kind::Array | Kind::Object)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Document {
    /// Parse JSON text into a document.
    pub fn parse(text: &str) -> DocumentResult<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(Document::from(value))
    }

    pub fn object(fields: Fields) -> Self {
        Document::Object(Arc::new(fields))
    }

    pub fn array(items: Vec<Document>) -> Self {
        Document::Array(Arc::new(items))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Document::Null => Kind::Null,
            Document::Bool(_) => Kind::Bool,
            Document::Number(_) => Kind::Number,
            Document::String(_) => Kind::String,
            Document::Array(_) => Kind::Array,
            Document::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }

    /// Strings, numbers, booleans and null.
    pub fn is_scalar(&self) -> bool {
        !self.kind().is_container()
    }

    pub fn as_object(&self) -> Option<&Fields> {
        match self {
            Document::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Document]> {
        match self {
            Document::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Document> {
        self.as_object()?.get(name)
    }

    pub fn item(&self, index: usize) -> Option<&Document> {
        self.as_array()?.get(index)
    }

    /// True when both values are containers backed by the same allocation.
    pub fn ptr_eq(&self, other: &Document) -> bool {
        match (self, other) {
            (Document::Array(a), Document::Array(b)) => Arc::ptr_eq(a, b),
            (Document::Object(a), Document::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Copy that shares no container with `self`.
    pub fn deep_copy(&self) -> Document {
        match self {
            Document::Array(items) => {
                Document::array(items.iter().map(Document::deep_copy).collect())
            }
            Document::Object(fields) => Document::object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.deep_copy()))
                    .collect(),
            ),
            scalar => scalar.clone(),
        }
    }

    /// Serialize to compact JSON.
    pub fn to_json_string(&self) -> DocumentResult<String> {
        serde_json::to_string(self).map_err(|e| DocumentError::Serialize(e.to_string()))
    }

    /// Serialize to pretty-printed JSON with `indent` spaces per level.
    pub fn to_json_pretty(&self, indent: usize) -> DocumentResult<String> {
        let spaces = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(spaces.as_bytes());
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|e| DocumentError::Serialize(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| DocumentError::Serialize(e.to_string()))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Document::Null => serializer.serialize_unit(),
            Document::Bool(b) => serializer.serialize_bool(*b),
            Document::Number(n) => n.serialize(serializer),
            Document::String(s) => serializer.serialize_str(s),
            Document::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Document::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Document::from)
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => Document::Number(n),
            Value::String(s) => Document::String(s),
            Value::Array(items) => Document::array(items.into_iter().map(Document::from).collect()),
            Value::Object(map) => {
                Document::object(map.into_iter().map(|(k, v)| (k, Document::from(v))).collect())
            }
        }
    }
}

impl From<&Document> for serde_json::Value {
    fn from(doc: &Document) -> Self {
        use serde_json::Value;

        match doc {
            Document::Null => Value::Null,
            Document::Bool(b) => Value::Bool(*b),
            Document::Number(n) => Value::Number(n.clone()),
            Document::String(s) => Value::String(s.clone()),
            Document::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            Document::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Document> for serde_json::Value {
    fn from(doc: Document) -> Self {
        serde_json::Value::from(&doc)
    }
}

impl From<bool> for Document {
    fn from(b: bool) -> Self {
        Document::Bool(b)
    }
}

impl From<i64> for Document {
    fn from(n: i64) -> Self {
        Document::Number(n.into())
    }
}

impl From<u64> for Document {
    fn from(n: u64) -> Self {
        Document::Number(n.into())
    }
}

/// Non-finite floats have no JSON form and become `null`.
impl From<f64> for Document {
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n)
            .map(Document::Number)
            .unwrap_or(Document::Null)
    }
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Document::String(s.to_string())
    }
}

impl From<String> for Document {
    fn from(s: String) -> Self {
        Document::String(s)
    }
}

impl FromIterator<Document> for Document {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Document::array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Document)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Document)>>(iter: I) -> Self {
        Document::object(iter.into_iter().collect())
    }
}
