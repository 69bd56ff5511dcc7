use qualpoly_hir::Annotation;
use qualpoly_tainting::{QualifierParameterAnnotationConverter, TaintingAnnotationConverter};

use super::{multi, qual, targeted};

#[test]
fn binding_markers_and_modifiers_are_supported() {
    let converter = TaintingAnnotationConverter::new();
    for simple in [
        "Tainted",
        "Untainted",
        "Var",
        "PolyTainting",
        "Wild",
        "Extends",
        "Super",
    ] {
        assert!(converter.is_annotation_supported(&qual(simple)), "{simple}");
    }
}

#[test]
fn aggregates_are_supported_whatever_they_contain() {
    let converter = TaintingAnnotationConverter::new();
    assert!(converter.is_annotation_supported(&multi("Tainted", Vec::<Annotation>::new())));
    assert!(converter.is_annotation_supported(&multi(
        "Var",
        [targeted("Var", "X"), Annotation::new("java.lang.Deprecated")]
    )));
    // Not expanded, so a missing `value` array does not matter here.
    assert!(converter.is_annotation_supported(&qual("MultiWild")));
}

#[test]
fn other_annotations_are_not_supported() {
    let converter = TaintingAnnotationConverter::new();
    assert!(!converter.is_annotation_supported(&Annotation::new("java.lang.Override")));
    assert!(!converter.is_annotation_supported(&Annotation::new("Tainted")));
    assert!(!converter.is_annotation_supported(&qual("TaintingParam")));
}
