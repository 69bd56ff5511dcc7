use std::collections::btree_map::Entry;

use qualpoly_types::{CombiningOperation, Tainting};

use crate::{ParamMap, LOG_TARGET};

/// Fold `new_params` into `params`.
///
/// Names bound on one side only are kept as is; names bound on both sides get
/// the pointwise join of both wildcards.
pub(crate) fn merge_params(
    params: &mut ParamMap,
    new_params: ParamMap,
    lub: &dyn CombiningOperation<Tainting>,
) {
    for (name, new_wild) in new_params {
        match params.entry(name) {
            Entry::Vacant(entry) => {
                entry.insert(new_wild);
            }
            Entry::Occupied(mut entry) => {
                let combined = entry.get().combine_with(&new_wild, lub, lub);
                tracing::trace!(
                    target: LOG_TARGET,
                    name = %entry.key(),
                    old = %entry.get(),
                    new = %new_wild,
                    combined = %combined,
                    "combined wildcards"
                );
                entry.insert(combined);
            }
        }
    }
}
