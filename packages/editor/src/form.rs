//! Edit forms derived from a draft and its [`ShapeTag`].

use crate::{EditorResult, ShapeClassifier, ShapeTag};
use nodelens_document::{Document, Path};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Text,
    /// Hex color string, shown with a color picker
    Color,
}

/// One input of a structured form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    /// Relative to the draft root
    pub path: Path,
    /// Dotted label, e.g. `details.type`
    pub label: String,
    pub value: Document,
    pub kind: FieldKind,
}

impl FormField {
    fn new(path: Path, label: String, value: &Document) -> Self {
        let kind = if value.as_str().is_some_and(is_hex_color) {
            FieldKind::Color
        } else {
            FieldKind::Text
        };

        Self {
            path,
            label,
            value: value.clone(),
            kind,
        }
    }

    /// Text shown in the input: strings bare, everything else as JSON
    pub fn display_text(&self) -> String {
        match &self.value {
            Document::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EditForm {
    /// Single input for a scalar node
    Scalar(FormField),
    /// Field-by-field form for a recognized shape
    Fields(Vec<FormField>),
    /// Pretty JSON in a text area
    RawText(String),
}

impl EditForm {
    /// Build the form for `value` already classified as `tag`.
    ///
    /// For a described item each required field becomes one input, except
    /// object-valued fields, which expand one level into their entries.
    pub fn build(
        tag: ShapeTag,
        value: &Document,
        classifier: &ShapeClassifier,
        indent: usize,
    ) -> EditorResult<Self> {
        let form = match tag {
            ShapeTag::Scalar => {
                EditForm::Scalar(FormField::new(Path::root(), String::new(), value))
            }
            ShapeTag::DescribedItem => {
                let mut fields = Vec::new();

                for name in classifier.required_fields() {
                    let Some(field_value) = value.field(name) else {
                        continue;
                    };
                    let field_path = Path::root().field(name.as_str());

                    match field_value.as_object() {
                        Some(entries) => {
                            for (key, entry) in entries.iter() {
                                fields.push(FormField::new(
                                    field_path.child(key.as_str()),
                                    format!("{}.{}", name, key),
                                    entry,
                                ));
                            }
                        }
                        None => fields.push(FormField::new(field_path, name.clone(), field_value)),
                    }
                }

                EditForm::Fields(fields)
            }
            ShapeTag::GenericObject => EditForm::RawText(value.to_json_pretty(indent)?),
        };

        Ok(form)
    }

    pub fn fields(&self) -> &[FormField] {
        match self {
            EditForm::Scalar(field) => std::slice::from_ref(field),
            EditForm::Fields(fields) => fields,
            EditForm::RawText(_) => &[],
        }
    }
}

/// Interpret text typed into a scalar input.
///
/// `true`, `false`, `null` and valid JSON numbers keep their JSON meaning;
/// any other input is taken verbatim as a string. Surrounding whitespace is
/// ignored when matching keywords and numbers, but kept in strings.
pub fn parse_scalar_text(input: &str) -> Document {
    let trimmed = input.trim();

    match trimmed {
        "true" => return Document::Bool(true),
        "false" => return Document::Bool(false),
        "null" => return Document::Null,
        _ => {}
    }

    // JSON grammar only: `007`, `+5` and `.5` stay strings
    match serde_json::from_str::<serde_json::Number>(trimmed) {
        Ok(n) => Document::Number(n),
        Err(_) => Document::String(input.to_string()),
    }
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
