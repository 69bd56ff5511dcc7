use qualpoly_config::MissingBasePolicy;
use qualpoly_hir::Annotation;
use qualpoly_types::{PolyQual, QualifierHierarchy, Tainting};

use crate::error::{BoundModifier, ConvertError, Result};
use crate::interpret::{nested_annotations, target};
use crate::vocab::{Marker, TaintingVocabulary};
use crate::{ParamMap, LOG_TARGET};

/// Apply `@Extends` / `@Super` found in `anno` to the bindings built by the
/// first pass.
///
/// `@Extends` drops the lower bound to bottom and `@Super` raises the upper
/// bound to top; the other bound is kept. Returns whether anything was
/// processed: `true` for a modifier that was applied and for an aggregate with
/// at least one nested annotation.
pub(crate) fn adjust_bounds<H>(
    vocab: &TaintingVocabulary,
    hierarchy: &H,
    missing_base: MissingBasePolicy,
    anno: &Annotation,
    params: &mut ParamMap,
) -> Result<bool>
where
    H: QualifierHierarchy<Qual = Tainting>,
{
    let modifier = match vocab.classify(anno.name()) {
        Some(Marker::Aggregate) => {
            let nested = nested_annotations(anno)?;
            for nested_anno in nested {
                adjust_bounds(vocab, hierarchy, missing_base, nested_anno, params)?;
            }
            return Ok(!nested.is_empty());
        }
        Some(Marker::Extends) => BoundModifier::Extends,
        Some(Marker::Super) => BoundModifier::Super,
        _ => return Ok(false),
    };

    let target = target(anno)?;
    let Some(old) = params.remove(target) else {
        return match missing_base {
            MissingBasePolicy::Error => Err(ConvertError::BoundModifierWithoutBase {
                modifier,
                target: target.to_owned(),
            }),
            MissingBasePolicy::Warn => {
                tracing::warn!(
                    target: LOG_TARGET,
                    %modifier,
                    parameter = target,
                    "ignoring bound modifier for a parameter with no base declaration"
                );
                Ok(false)
            }
        };
    };

    let adjusted = match modifier {
        BoundModifier::Extends => old.with_lower_bound(PolyQual::Ground(hierarchy.bottom())),
        BoundModifier::Super => old.with_upper_bound(PolyQual::Ground(hierarchy.top())),
    };
    tracing::debug!(
        target: LOG_TARGET,
        %modifier,
        parameter = target,
        adjusted = %adjusted,
        "adjusted bounds"
    );
    params.insert(target.to_owned(), adjusted);
    Ok(true)
}
