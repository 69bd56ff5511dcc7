//! Read-only view of Java declarations and the annotations attached to them.
//!
//! This is the slice of the front end the qualifier converters consult: an
//! annotation is a qualified name plus named element values, and an element
//! is a declaration with its kind, its own annotations and (for methods and
//! constructors) the annotated types of its signature.

mod annotation;
mod element;

pub use crate::annotation::{Annotation, AnnotationValue};
pub use crate::element::{Element, ElementKind, ExecutableSignature, TypeUse};
