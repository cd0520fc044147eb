//! Paths are root-relative sequences of segments. A path is pure position:
//! it owns no part of any document and can outlive every document it was
//! computed against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One step of a path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// Object field access
    Field(String),
    /// Array position access
    Index(usize),
}

impl Segment {
    pub fn field(name: impl Into<String>) -> Self {
        Segment::Field(name.into())
    }

    pub fn index(i: usize) -> Self {
        Segment::Index(i)
    }

    pub fn as_field(&self) -> Option<&str> {
        match self {
            Segment::Field(name) => Some(name),
            Segment::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Field(_) => None,
            Segment::Index(i) => Some(*i),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => write!(f, "[\"{}\"]", name),
            Segment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        Segment::Field(s)
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Segment::Field(s.to_owned())
    }
}

impl From<usize> for Segment {
    fn from(i: usize) -> Self {
        Segment::Index(i)
    }
}

/// Location of one node in a document. The empty path is the root.
///
/// ```
/// use nodelens_document::Path;
///
/// let path = Path::root().field("a").index(1).field("b");
/// assert_eq!(path.to_string(), r#"$["a"][1]["b"]"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Segment>);

impl Path {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    /// Append a field segment (builder).
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.0.push(Segment::Field(name.into()));
        self
    }

    /// Append an index segment (builder).
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Segment::Index(i));
        self
    }

    pub fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.0.pop()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Segment> {
        self.0.last()
    }

    pub fn parent(&self) -> Option<Path> {
        let (_, init) = self.0.split_last()?;
        Some(Path(init.to_vec()))
    }

    pub fn child(&self, segment: impl Into<Segment>) -> Path {
        let mut result = self.clone();
        result.0.push(segment.into());
        result
    }

    pub fn join(&self, other: &Path) -> Path {
        let mut result = self.clone();
        result.0.extend(other.0.iter().cloned());
        result
    }

    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Segments `start..end`, clamped to the path length.
    pub fn slice(&self, start: usize, end: usize) -> Path {
        let end = end.min(self.0.len());
        let start = start.min(end);
        Path(self.0[start..end].to_vec())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.0.iter()
    }

    /// Canonical string form, see [`crate::codec::encode`].
    pub fn encode(&self) -> String {
        crate::codec::encode(self)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::codec::encode(self))
    }
}

impl FromStr for Path {
    type Err = crate::DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::decode(s)
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Segment;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Build a [`Path`] from field-name and index literals.
///
/// ```
/// use nodelens_document::path;
///
/// let p = path!("a", 1usize, "b");
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push($crate::Segment::from($seg));
        )+
        p
    }};
}
