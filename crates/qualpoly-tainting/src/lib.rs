//! Qualifier parameters for the tainting checker.
//!
//! Declarations may be polymorphic over named qualifier parameters. At each
//! type use the parameters are bound by annotations such as
//! `@Tainted(target = "X")` or `@Var(target = "X", value = "v")`; this crate
//! turns those annotations into a [`QualParams`] map for the type-checking
//! engine.
//!
//! Conversion runs in two passes over the same annotations:
//!
//! 1. every binding annotation is interpreted and contributions for the same
//!    parameter are joined bound by bound;
//! 2. `@Extends` / `@Super` then widen the bindings built in pass 1.
//!
//! The second pass reads bindings, so it must not start before the first one
//! has seen every annotation.

use std::collections::{BTreeMap, BTreeSet};

use qualpoly_config::{MissingBasePolicy, QualPolyConfig};
use qualpoly_hir::{Annotation, Element};
use qualpoly_types::{Lub, QualParams, QualifierHierarchy, Tainting, TaintingHierarchy, Wildcard};

mod adjust;
mod declared;
mod error;
mod interpret;
mod merge;
mod vocab;

pub use crate::error::{BoundModifier, ConvertError, Result};
pub use crate::vocab::{Marker, TaintingVocabulary, DEFAULT_NAME, POLY_NAME};
pub use qualpoly_config::DEFAULT_QUAL_PACKAGE;

pub(crate) const LOG_TARGET: &str = "qualpoly.tainting";

pub(crate) type ParamMap = BTreeMap<String, Wildcard<Tainting>>;

/// Converts qualifier annotations into qualifier parameter bindings.
pub trait QualifierParameterAnnotationConverter<Q> {
    /// Bindings for one type use, or `None` when the annotations bind no
    /// parameter at all.
    fn from_annotations(&self, annos: &[Annotation]) -> Result<Option<QualParams<Q>>>;

    /// Whether `anno` is one of the converter's annotations. Decided from the
    /// annotation name only; aggregates are not expanded.
    fn is_annotation_supported(&self, anno: &Annotation) -> bool;

    fn declared_parameters(&self, elt: &Element) -> Result<BTreeSet<String>>;
}

#[derive(Debug, Clone)]
pub struct TaintingAnnotationConverter<H = TaintingHierarchy> {
    vocab: TaintingVocabulary,
    lub: Lub<H>,
    missing_base: MissingBasePolicy,
}

impl TaintingAnnotationConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &QualPolyConfig) -> Self {
        Self {
            vocab: TaintingVocabulary::new(config.annotations.package.clone()),
            lub: Lub::new(TaintingHierarchy),
            missing_base: config.bounds.missing_base,
        }
    }
}

impl Default for TaintingAnnotationConverter {
    fn default() -> Self {
        Self::from_config(&QualPolyConfig::default())
    }
}

impl<H: QualifierHierarchy<Qual = Tainting>> TaintingAnnotationConverter<H> {
    /// Use `hierarchy` to join bounds, in particular bounds holding variables.
    pub fn with_hierarchy<H2>(self, hierarchy: H2) -> TaintingAnnotationConverter<H2>
    where
        H2: QualifierHierarchy<Qual = Tainting>,
    {
        TaintingAnnotationConverter {
            vocab: self.vocab,
            lub: Lub::new(hierarchy),
            missing_base: self.missing_base,
        }
    }

    #[must_use]
    pub fn with_missing_base(mut self, missing_base: MissingBasePolicy) -> Self {
        self.missing_base = missing_base;
        self
    }

    pub fn vocabulary(&self) -> &TaintingVocabulary {
        &self.vocab
    }

    pub fn hierarchy(&self) -> &H {
        self.lub.hierarchy()
    }
}

impl<H: QualifierHierarchy<Qual = Tainting>> QualifierParameterAnnotationConverter<Tainting>
    for TaintingAnnotationConverter<H>
{
    fn from_annotations(&self, annos: &[Annotation]) -> Result<Option<QualParams<Tainting>>> {
        let mut params = ParamMap::new();
        for anno in annos {
            if let Some(contribution) = interpret::interpret(&self.vocab, &self.lub, anno)? {
                merge::merge_params(&mut params, contribution, &self.lub);
            }
        }
        for anno in annos {
            adjust::adjust_bounds(
                &self.vocab,
                self.lub.hierarchy(),
                self.missing_base,
                anno,
                &mut params,
            )?;
        }

        tracing::debug!(
            target: LOG_TARGET,
            annotations = annos.len(),
            parameters = params.len(),
            "converted qualifier parameters"
        );
        Ok((!params.is_empty()).then(|| QualParams::new(params)))
    }

    fn is_annotation_supported(&self, anno: &Annotation) -> bool {
        matches!(
            self.vocab.classify(anno.name()),
            Some(
                Marker::Aggregate
                    | Marker::Extends
                    | Marker::Super
                    | Marker::Tainted
                    | Marker::Untainted
                    | Marker::Var
                    | Marker::PolyTainting
                    | Marker::Wild
            )
        )
    }

    fn declared_parameters(&self, elt: &Element) -> Result<BTreeSet<String>> {
        declared::declared_parameters(&self.vocab, elt)
    }
}
