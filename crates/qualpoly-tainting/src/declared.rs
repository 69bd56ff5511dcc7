use std::collections::BTreeSet;

use qualpoly_hir::Element;

use crate::error::Result;
use crate::interpret::required_string;
use crate::vocab::{TaintingVocabulary, DEFAULT_NAME, POLY_NAME};

/// Qualifier parameters declared by `elt`.
///
/// Every `@TaintingParam` contributes its value. Type declarations also
/// declare `Main`, and methods and constructors declare `_poly` when their
/// signature mentions `@PolyTainting`.
pub(crate) fn declared_parameters(
    vocab: &TaintingVocabulary,
    elt: &Element,
) -> Result<BTreeSet<String>> {
    let mut result = BTreeSet::new();
    for anno in elt.annotations_by_type(vocab.param_name()) {
        result.insert(required_string(anno, "value")?.to_owned());
    }

    if elt.kind.is_type() {
        result.insert(DEFAULT_NAME.to_owned());
    } else if elt.kind.is_executable() && has_poly_annotation(vocab, elt) {
        result.insert(POLY_NAME.to_owned());
    }

    Ok(result)
}

/// Checks the return type, the receiver type, then each parameter type.
fn has_poly_annotation(vocab: &TaintingVocabulary, elt: &Element) -> bool {
    elt.signature.as_ref().is_some_and(|signature| {
        signature
            .types()
            .any(|ty| ty.has_annotation(vocab.poly_name()))
    })
}
