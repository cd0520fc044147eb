//! # Edit Session Management
//!
//! Tracks the draft for the one node currently being edited.
//!
//! ```text
//!            begin                 commit / discard
//! Viewing ──────────► Editing ─────────────────────► Viewing
//!                      │   ▲
//!                      └───┘ update_field / update_raw / update_scalar / update_key
//! ```
//!
//! The draft is a deep copy of the resolved node, so nothing done to it is
//! visible through the document it came from. The document itself is only
//! read: `commit` returns a new document and leaves persisting it to the
//! caller.

use crate::config::{EditorConfig, ReopenPolicy};
use crate::form::{parse_scalar_text, EditForm};
use crate::{EditorError, EditorResult, ShapeClassifier, ShapeTag};
use nodelens_document::{rename, resolve, set, Document, Path, Segment};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Viewing,
    Editing(Draft),
}

/// Work in progress for one node
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    path: Path,
    /// Document the node was resolved from
    snapshot: Document,
    /// Node as resolved at `begin`
    original: Document,
    value: Document,
    /// Key the node is saved under; `None` unless the node is an object field
    key: Option<String>,
    shape: ShapeTag,
}

impl Draft {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> &Document {
        &self.snapshot
    }

    pub fn original(&self) -> &Document {
        &self.original
    }

    pub fn value(&self) -> &Document {
        &self.value
    }

    pub fn shape(&self) -> ShapeTag {
        self.shape
    }

    /// Key the node will be saved under
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// New key, if it differs from the one in the path
    pub fn renamed_to(&self) -> Option<&str> {
        match (self.path.last(), self.key.as_deref()) {
            (Some(Segment::Field(old)), Some(key)) if old != key => Some(key),
            _ => None,
        }
    }

    pub fn is_modified(&self) -> bool {
        self.value != self.original || self.renamed_to().is_some()
    }
}

/// Single edit session; at most one draft is open at a time
#[derive(Debug, Clone)]
pub struct EditSession {
    state: SessionState,
    classifier: ShapeClassifier,
    policy: ReopenPolicy,
    indent: usize,
}

impl EditSession {
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            state: SessionState::Viewing,
            classifier: ShapeClassifier::new(&config.recognized_shape),
            policy: config.reopen_policy,
            indent: config.indent,
        }
    }

    /// Start editing the node at `path`.
    ///
    /// If a draft is already open it is dropped first (`AutoDiscard`) or the
    /// call fails with `SessionActive` (`Reject`). A path that does not
    /// resolve fails with `NotFound` and leaves the session as it was.
    pub fn begin(&mut self, document: &Document, path: Path) -> EditorResult<ShapeTag> {
        if let SessionState::Editing(open) = &self.state {
            if self.policy == ReopenPolicy::Reject {
                return Err(EditorError::SessionActive(open.path.to_string()));
            }
        }

        let original = resolve(document, &path)?.clone();
        let shape = self.classifier.classify(&original);

        if let SessionState::Editing(open) = &self.state {
            info!(previous = %open.path, next = %path, "Discarding open draft");
        }

        debug!(path = %path, ?shape, "Editing node");
        let key = path.last().and_then(Segment::as_field).map(str::to_string);
        self.state = SessionState::Editing(Draft {
            value: original.deep_copy(),
            original,
            snapshot: document.clone(),
            path,
            key,
            shape,
        });

        Ok(shape)
    }

    /// Replace the draft's sub-node at `field_path`, or the whole draft when
    /// `field_path` is empty. On failure the draft is unchanged.
    pub fn update_field(&mut self, field_path: &Path, value: Document) -> EditorResult<()> {
        let draft = self.draft_mut()?;

        draft.value = if field_path.is_empty() {
            value
        } else {
            set(&draft.value, field_path, value)?
        };

        Ok(())
    }

    /// Replace the whole draft with parsed raw text.
    ///
    /// Text that is not a valid document is `InvalidInput`, and the previous
    /// draft stays in place.
    pub fn update_raw(&mut self, text: &str) -> EditorResult<()> {
        let draft = self.draft_mut()?;

        let parsed = Document::parse(text).map_err(|e| {
            debug!(path = %draft.path, error = %e, "Rejected raw draft");
            EditorError::InvalidInput(e.to_string())
        })?;

        draft.value = parsed;
        Ok(())
    }

    /// Replace the whole draft with text from a scalar input.
    pub fn update_scalar(&mut self, text: &str) -> EditorResult<()> {
        self.draft_mut()?.value = parse_scalar_text(text);
        Ok(())
    }

    /// Save the node under `key` instead of its current field name.
    ///
    /// Only object fields have a key: for an array item or the root this is
    /// `InvalidInput`, as is an empty key. A key that collides with a sibling
    /// is only detected at commit, as `KeyConflict`.
    pub fn update_key(&mut self, key: &str) -> EditorResult<()> {
        let draft = self.draft_mut()?;

        if draft.key.is_none() {
            return Err(EditorError::InvalidInput(format!(
                "{} is not an object field and has no key",
                draft.path
            )));
        }
        if key.is_empty() {
            return Err(EditorError::InvalidInput("Key cannot be empty".to_string()));
        }

        draft.key = Some(key.to_string());
        Ok(())
    }

    /// Write the draft into the document it was resolved from.
    ///
    /// On success the session returns to `Viewing`. On failure it stays in
    /// `Editing` with the draft intact.
    pub fn commit(&mut self) -> EditorResult<Document> {
        self.commit_with(None)
    }

    /// Write the draft into `current`, a newer version of the document.
    pub fn commit_onto(&mut self, current: &Document) -> EditorResult<Document> {
        self.commit_with(Some(current))
    }

    fn commit_with(&mut self, base: Option<&Document>) -> EditorResult<Document> {
        let SessionState::Editing(draft) = &self.state else {
            return Err(EditorError::NotEditing);
        };

        let target = base.unwrap_or(&draft.snapshot);
        let mut updated = set(target, &draft.path, draft.value.clone())?;
        if let Some(key) = draft.renamed_to() {
            updated = rename(&updated, &draft.path, key)?;
        }

        info!(
            path = %draft.path,
            modified = draft.is_modified(),
            renamed_to = draft.renamed_to(),
            "Committed draft"
        );
        self.state = SessionState::Viewing;
        Ok(updated)
    }

    /// Drop the draft. Returns whether there was one.
    pub fn discard(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            SessionState::Editing(draft) => {
                debug!(path = %draft.path, "Discarded draft");
                true
            }
            SessionState::Viewing => false,
        }
    }

    /// Form for the current draft, picked by the shape seen at `begin`.
    pub fn form(&self) -> EditorResult<EditForm> {
        let draft = self.draft().ok_or(EditorError::NotEditing)?;
        EditForm::build(draft.shape, &draft.value, &self.classifier, self.indent)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, SessionState::Editing(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            SessionState::Editing(draft) => Some(draft),
            SessionState::Viewing => None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.draft().map(Draft::path)
    }

    pub fn shape(&self) -> Option<ShapeTag> {
        self.draft().map(Draft::shape)
    }

    pub fn is_modified(&self) -> bool {
        self.draft().is_some_and(Draft::is_modified)
    }

    fn draft_mut(&mut self) -> EditorResult<&mut Draft> {
        match &mut self.state {
            SessionState::Editing(draft) => Ok(draft),
            SessionState::Viewing => Err(EditorError::NotEditing),
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodelens_document::path;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        Document::from(value)
    }

    #[test]
    fn test_session_starts_viewing() {
        let session = EditSession::new();
        assert_eq!(session.state(), &SessionState::Viewing);
        assert!(!session.is_editing());
        assert!(session.draft().is_none());
    }

    #[test]
    fn test_begin_resolves_and_classifies() {
        let document = doc(json!({"a": [1, {"b": 2}]}));
        let mut session = EditSession::new();

        let shape = session.begin(&document, path!("a", 1usize, "b")).unwrap();
        assert_eq!(shape, ShapeTag::Scalar);
        assert_eq!(session.draft().unwrap().value(), &Document::from(2i64));
        assert!(!session.is_modified());
    }

    #[test]
    fn test_begin_missing_path_is_not_found() {
        let document = doc(json!({"a": 1}));
        let mut session = EditSession::new();

        let err = session.begin(&document, path!("b")).unwrap_err();
        assert!(err.is_not_found());
        assert!(!session.is_editing());
    }

    #[test]
    fn test_draft_is_a_deep_copy() {
        let document = doc(json!({"item": {"tags": ["a", "b"]}}));
        let mut session = EditSession::new();
        session.begin(&document, path!("item")).unwrap();

        let draft = session.draft().unwrap();
        assert_eq!(draft.value(), document.field("item").unwrap());
        assert!(!draft.value().ptr_eq(document.field("item").unwrap()));
        assert!(!draft
            .value()
            .field("tags")
            .unwrap()
            .ptr_eq(document.field("item").unwrap().field("tags").unwrap()));
    }

    #[test]
    fn test_update_field_edits_draft_only() {
        let document = doc(json!({"item": {"name": "Apple", "n": 1}}));
        let mut session = EditSession::new();
        session.begin(&document, path!("item")).unwrap();

        session.update_field(&path!("name"), Document::from("Pear")).unwrap();

        assert_eq!(
            session.draft().unwrap().value(),
            &doc(json!({"name": "Pear", "n": 1}))
        );
        assert_eq!(document, doc(json!({"item": {"name": "Apple", "n": 1}})));
        assert!(session.is_modified());
    }

    #[test]
    fn test_update_field_with_empty_path_replaces_draft() {
        let document = doc(json!({"item": {"name": "Apple"}}));
        let mut session = EditSession::new();
        session.begin(&document, path!("item")).unwrap();

        session.update_field(&Path::root(), Document::from(3i64)).unwrap();
        assert_eq!(session.draft().unwrap().value(), &Document::from(3i64));
    }

    #[test]
    fn test_bad_field_path_keeps_draft() {
        let document = doc(json!({"item": {"name": "Apple"}}));
        let mut session = EditSession::new();
        session.begin(&document, path!("item")).unwrap();

        let err = session.update_field(&path!("name", "x"), Document::Null).unwrap_err();
        assert!(err.is_structural_mismatch());
        assert_eq!(session.draft().unwrap().value(), &doc(json!({"name": "Apple"})));
    }

    #[test]
    fn test_invalid_raw_text_keeps_previous_draft() {
        let document = doc(json!({"list": [1, 2]}));
        let mut session = EditSession::new();
        session.begin(&document, path!("list")).unwrap();

        session.update_raw("[1, 2, 3]").unwrap();
        let err = session.update_raw("[1, 2,").unwrap_err();

        assert!(matches!(err, EditorError::InvalidInput(_)));
        assert_eq!(session.draft().unwrap().value(), &doc(json!([1, 2, 3])));
        assert!(session.is_editing());
    }

    #[test]
    fn test_update_scalar_interprets_text() {
        let document = doc(json!({"n": 1}));
        let mut session = EditSession::new();
        session.begin(&document, path!("n")).unwrap();

        session.update_scalar("12").unwrap();
        assert_eq!(session.draft().unwrap().value(), &Document::from(12i64));

        session.update_scalar("twelve").unwrap();
        assert_eq!(session.draft().unwrap().value(), &Document::from("twelve"));
    }

    #[test]
    fn test_commit_returns_new_document() {
        let document = doc(json!({"a": [1, {"b": 2}]}));
        let mut session = EditSession::new();
        session.begin(&document, path!("a", 1usize, "b")).unwrap();
        session.update_scalar("5").unwrap();

        let updated = session.commit().unwrap();

        assert_eq!(updated, doc(json!({"a": [1, {"b": 5}]})));
        assert_eq!(document, doc(json!({"a": [1, {"b": 2}]})));
        assert_eq!(session.state(), &SessionState::Viewing);
    }

    #[test]
    fn test_commit_onto_newer_document() {
        let document = doc(json!({"a": 1, "b": 1}));
        let mut session = EditSession::new();
        session.begin(&document, path!("a")).unwrap();
        session.update_scalar("2").unwrap();

        let newer = set(&document, &path!("b"), Document::from(7i64)).unwrap();
        let updated = session.commit_onto(&newer).unwrap();

        assert_eq!(updated, doc(json!({"a": 2, "b": 7})));
    }

    #[test]
    fn test_failed_commit_stays_editing() {
        let document = doc(json!({"a": {"b": 1}}));
        let mut session = EditSession::new();
        session.begin(&document, path!("a", "b")).unwrap();
        session.update_scalar("2").unwrap();

        let reshaped = doc(json!({"a": [1]}));
        let err = session.commit_onto(&reshaped).unwrap_err();

        assert!(err.is_structural_mismatch());
        assert!(session.is_editing());
        assert_eq!(session.draft().unwrap().value(), &Document::from(2i64));
    }

    #[test]
    fn test_commit_and_updates_require_editing() {
        let mut session = EditSession::new();
        assert!(matches!(session.commit(), Err(EditorError::NotEditing)));
        assert!(matches!(session.update_raw("1"), Err(EditorError::NotEditing)));
        assert!(matches!(
            session.update_field(&Path::root(), Document::Null),
            Err(EditorError::NotEditing)
        ));
        assert!(matches!(session.form(), Err(EditorError::NotEditing)));
    }

    #[test]
    fn test_discard_drops_draft() {
        let document = doc(json!({"a": 1}));
        let mut session = EditSession::new();
        session.begin(&document, path!("a")).unwrap();
        session.update_scalar("2").unwrap();

        assert!(session.discard());
        assert!(!session.is_editing());
        assert!(!session.discard());
        assert_eq!(document, doc(json!({"a": 1})));
    }

    #[test]
    fn test_reopen_auto_discards() {
        let document = doc(json!({"a": 1, "b": 2}));
        let mut session = EditSession::new();
        session.begin(&document, path!("a")).unwrap();
        session.update_scalar("10").unwrap();

        session.begin(&document, path!("b")).unwrap();
        assert_eq!(session.path(), Some(&path!("b")));
        assert!(!session.is_modified());
    }

    #[test]
    fn test_reopen_with_bad_path_keeps_open_draft() {
        let document = doc(json!({"a": 1}));
        let mut session = EditSession::new();
        session.begin(&document, path!("a")).unwrap();
        session.update_scalar("10").unwrap();

        assert!(session.begin(&document, path!("zzz")).is_err());
        assert_eq!(session.path(), Some(&path!("a")));
        assert_eq!(session.draft().unwrap().value(), &Document::from(10i64));
    }

    #[test]
    fn test_reopen_rejected_by_policy() {
        let config = EditorConfig {
            reopen_policy: ReopenPolicy::Reject,
            ..EditorConfig::default()
        };
        let document = doc(json!({"a": 1, "b": 2}));
        let mut session = EditSession::with_config(&config);
        session.begin(&document, path!("a")).unwrap();

        let err = session.begin(&document, path!("b")).unwrap_err();
        assert!(matches!(err, EditorError::SessionActive(ref p) if p == r#"$["a"]"#));
        assert_eq!(session.path(), Some(&path!("a")));
    }

    #[test]
    fn test_key_defaults_to_field_name() {
        let document = doc(json!({"a": [1], "b": 2}));
        let mut session = EditSession::new();

        session.begin(&document, path!("b")).unwrap();
        assert_eq!(session.draft().unwrap().key(), Some("b"));

        session.begin(&document, path!("a", 0usize)).unwrap();
        assert_eq!(session.draft().unwrap().key(), None);
    }

    #[test]
    fn test_rename_and_edit_commit_together() {
        let document = doc(json!({"x": 0, "name": "Apple", "z": 1}));
        let mut session = EditSession::new();
        session.begin(&document, path!("name")).unwrap();

        session.update_key("title").unwrap();
        session.update_scalar("Pear").unwrap();
        assert!(session.is_modified());
        assert_eq!(session.draft().unwrap().renamed_to(), Some("title"));

        let updated = session.commit().unwrap();
        assert_eq!(
            updated.to_json_string().unwrap(),
            r#"{"x":0,"title":"Pear","z":1}"#
        );
    }

    #[test]
    fn test_rename_back_to_original_is_unmodified() {
        let document = doc(json!({"a": 1}));
        let mut session = EditSession::new();
        session.begin(&document, path!("a")).unwrap();

        session.update_key("b").unwrap();
        session.update_key("a").unwrap();
        assert!(!session.is_modified());
        assert_eq!(session.commit().unwrap(), document);
    }

    #[test]
    fn test_update_key_rejects_items_and_empty_keys() {
        let document = doc(json!({"list": [1], "a": 1}));
        let mut session = EditSession::new();

        session.begin(&document, path!("list", 0usize)).unwrap();
        assert!(matches!(session.update_key("k"), Err(EditorError::InvalidInput(_))));

        session.begin(&document, path!("a")).unwrap();
        assert!(matches!(session.update_key(""), Err(EditorError::InvalidInput(_))));
        assert_eq!(session.draft().unwrap().key(), Some("a"));
    }

    #[test]
    fn test_key_conflict_keeps_session_editing() {
        let document = doc(json!({"a": 1, "b": 2}));
        let mut session = EditSession::new();
        session.begin(&document, path!("a")).unwrap();
        session.update_key("b").unwrap();

        let err = session.commit().unwrap_err();
        assert!(matches!(
            err,
            EditorError::Document(ref e) if e.is_key_conflict()
        ));
        assert!(session.is_editing());
        assert_eq!(session.draft().unwrap().key(), Some("b"));
    }

    #[test]
    fn test_root_can_be_opened_but_not_committed() {
        let document = doc(json!({"a": 1}));
        let mut session = EditSession::new();
        assert_eq!(session.begin(&document, Path::root()).unwrap(), ShapeTag::GenericObject);

        let err = session.commit().unwrap_err();
        assert!(matches!(
            err,
            EditorError::Document(nodelens_document::DocumentError::EmptyPath)
        ));
        assert!(session.is_editing());
    }
}
