use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value of one annotation element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationValue {
    String(String),
    Annotations(Vec<Annotation>),
}

impl AnnotationValue {
    /// Human readable kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            AnnotationValue::String(_) => "string",
            AnnotationValue::Annotations(_) => "annotation array",
        }
    }
}

/// An annotation use: its fully qualified name and explicitly given elements.
///
/// Elements left at their declared default are absent from `elements`; callers
/// apply the defaults they know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    name: String,
    #[serde(default)]
    elements: BTreeMap<String, AnnotationValue>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        let mut name = name.into();
        if let Some(stripped) = name.strip_prefix('@') {
            name = stripped.to_string();
        }
        Self {
            name,
            elements: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_string(mut self, element: impl Into<String>, value: impl Into<String>) -> Self {
        self.elements
            .insert(element.into(), AnnotationValue::String(value.into()));
        self
    }

    #[must_use]
    pub fn with_annotations(
        mut self,
        element: impl Into<String>,
        values: impl IntoIterator<Item = Annotation>,
    ) -> Self {
        self.elements.insert(
            element.into(),
            AnnotationValue::Annotations(values.into_iter().collect()),
        );
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self, element: &str) -> Option<&AnnotationValue> {
        self.elements.get(element)
    }

    pub fn string_element(&self, element: &str) -> Option<&str> {
        match self.elements.get(element)? {
            AnnotationValue::String(value) => Some(value),
            AnnotationValue::Annotations(_) => None,
        }
    }

    pub fn annotations_element(&self, element: &str) -> Option<&[Annotation]> {
        match self.elements.get(element)? {
            AnnotationValue::Annotations(values) => Some(values),
            AnnotationValue::String(_) => None,
        }
    }
}
