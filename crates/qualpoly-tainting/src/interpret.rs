use qualpoly_hir::{Annotation, AnnotationValue};
use qualpoly_types::{Lub, PolyQual, QualifierHierarchy, Tainting, Wildcard};

use crate::error::{ConvertError, Result};
use crate::merge::merge_params;
use crate::vocab::{Marker, TaintingVocabulary, DEFAULT_NAME, POLY_NAME};
use crate::ParamMap;

/// Bindings contributed by one annotation, or `None` if the annotation does
/// not bind parameters (unknown names, `@Extends`, `@Super`, `@TaintingParam`).
///
/// Aggregates contribute the merge of their nested annotations; an empty
/// aggregate contributes an empty map.
pub(crate) fn interpret<H>(
    vocab: &TaintingVocabulary,
    lub: &Lub<H>,
    anno: &Annotation,
) -> Result<Option<ParamMap>>
where
    H: QualifierHierarchy<Qual = Tainting>,
{
    let Some(marker) = vocab.classify(anno.name()) else {
        return Ok(None);
    };

    if marker == Marker::Aggregate {
        let mut result = ParamMap::new();
        for nested in nested_annotations(anno)? {
            if let Some(params) = interpret(vocab, lub, nested)? {
                merge_params(&mut result, params, lub);
            }
        }
        return Ok(Some(result));
    }

    let (bottom, top) = (lub.hierarchy().bottom(), lub.hierarchy().top());
    let wildcard = match marker {
        Marker::Tainted => Wildcard::ground(top),
        Marker::Untainted => Wildcard::ground(bottom),
        Marker::Var => {
            let name = required_string(anno, "value")?;
            Wildcard::exact(PolyQual::var(name, bottom, top))
        }
        Marker::PolyTainting => Wildcard::exact(PolyQual::var(POLY_NAME, bottom, top)),
        Marker::Wild => Wildcard::ground_range(bottom, top),
        Marker::Aggregate | Marker::Extends | Marker::Super | Marker::TaintingParam => {
            return Ok(None)
        }
    };

    let target = target(anno)?;
    Ok(Some(ParamMap::from([(target.to_owned(), wildcard)])))
}

/// The `target` element, defaulting to the implicit `Main` parameter.
pub(crate) fn target(anno: &Annotation) -> Result<&str> {
    match anno.element("target") {
        None => Ok(DEFAULT_NAME),
        Some(AnnotationValue::String(target)) => Ok(target),
        Some(other) => Err(mismatch(anno, "target", "string", other)),
    }
}

pub(crate) fn required_string<'a>(anno: &'a Annotation, element: &'static str) -> Result<&'a str> {
    match anno.element(element) {
        Some(AnnotationValue::String(value)) => Ok(value),
        Some(other) => Err(mismatch(anno, element, "string", other)),
        None => Err(missing(anno, element)),
    }
}

/// The `value` array of an aggregate annotation.
pub(crate) fn nested_annotations(anno: &Annotation) -> Result<&[Annotation]> {
    match anno.element("value") {
        Some(AnnotationValue::Annotations(nested)) => Ok(nested),
        Some(other) => Err(mismatch(anno, "value", "annotation array", other)),
        None => Err(missing(anno, "value")),
    }
}

fn missing(anno: &Annotation, element: &'static str) -> ConvertError {
    ConvertError::MissingElement {
        annotation: anno.name().to_owned(),
        element,
    }
}

fn mismatch(
    anno: &Annotation,
    element: &'static str,
    expected: &'static str,
    found: &AnnotationValue,
) -> ConvertError {
    ConvertError::ElementTypeMismatch {
        annotation: anno.name().to_owned(),
        element,
        expected,
        found: found.kind(),
    }
}
