use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Class,
    Interface,
    Enum,
    AnnotationType,
    Constructor,
    Method,
    Field,
    Parameter,
    LocalVariable,
    Package,
    Other,
}

impl ElementKind {
    /// Class, interface or enum declarations.
    #[must_use]
    pub fn is_type(self) -> bool {
        matches!(
            self,
            ElementKind::Class | ElementKind::Interface | ElementKind::Enum
        )
    }

    #[must_use]
    pub fn is_executable(self) -> bool {
        matches!(self, ElementKind::Constructor | ElementKind::Method)
    }
}

/// A type as written at one position, with its type annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeUse {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl TypeUse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a.name() == name)
    }
}

/// Annotated types of a method or constructor signature.
///
/// `return_type` is `None` for `void` methods and constructors, and
/// `receiver_type` is `None` for static methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutableSignature {
    pub return_type: Option<TypeUse>,
    pub receiver_type: Option<TypeUse>,
    pub parameters: Vec<TypeUse>,
}

impl ExecutableSignature {
    /// Return type, receiver type, then parameter types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeUse> {
        self.return_type
            .iter()
            .chain(self.receiver_type.iter())
            .chain(self.parameters.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub signature: Option<ExecutableSignature>,
}

impl Element {
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            annotations: Vec::new(),
            signature: None,
        }
    }

    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_signature(mut self, signature: ExecutableSignature) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Annotations of type `name`, including repeated ones.
    ///
    /// Repeated annotations are stored in a container annotation whose `value`
    /// element is an array; entries of such arrays that match `name` are
    /// returned after any directly present annotation.
    pub fn annotations_by_type<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Annotation> {
        let direct = self.annotations.iter().filter(move |a| a.name() == name);
        let contained = self
            .annotations
            .iter()
            .filter_map(|a| a.annotations_element("value"))
            .flatten()
            .filter(move |a| a.name() == name);
        direct.chain(contained)
    }
}
