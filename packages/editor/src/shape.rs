//! # Shape Classification
//!
//! Decides which edit form applies to a resolved value. The policy lives
//! here only; forms and hosts consume the resulting [`ShapeTag`].

use crate::config::RecognizedShape;
use nodelens_document::Document;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeTag {
    /// String, number, boolean or null
    Scalar,
    /// Any array, or an object missing part of the recognized field set
    GenericObject,
    /// Object carrying every recognized field with a non-null value
    DescribedItem,
}

impl ShapeTag {
    /// Whether the value is edited field by field rather than as raw text
    pub fn is_structured(&self) -> bool {
        !matches!(self, ShapeTag::GenericObject)
    }
}

/// Total classification over documents
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeClassifier {
    required_fields: Vec<String>,
}

impl ShapeClassifier {
    pub fn new(shape: &RecognizedShape) -> Self {
        Self {
            required_fields: shape.required_fields.clone(),
        }
    }

    pub fn required_fields(&self) -> &[String] {
        &self.required_fields
    }

    pub fn classify(&self, value: &Document) -> ShapeTag {
        match value {
            Document::Object(fields) => {
                let recognized = !self.required_fields.is_empty()
                    && self
                        .required_fields
                        .iter()
                        .all(|name| fields.get(name).is_some_and(|v| !v.is_null()));

                if recognized {
                    ShapeTag::DescribedItem
                } else {
                    ShapeTag::GenericObject
                }
            }
            Document::Array(_) => ShapeTag::GenericObject,
            _ => ShapeTag::Scalar,
        }
    }
}

impl Default for ShapeClassifier {
    fn default() -> Self {
        Self::new(&RecognizedShape::default())
    }
}

/// Classify with the default field set (`name`, `color`, `details`, `nutrients`).
pub fn classify(value: &Document) -> ShapeTag {
    ShapeClassifier::default().classify(value)
}
