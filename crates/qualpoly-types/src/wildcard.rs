use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lattice::QualifierHierarchy;
use crate::poly::{CombiningOperation, PolyQual};

/// The range of qualifiers a parameter may take at one use site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wildcard<Q> {
    lower: PolyQual<Q>,
    upper: PolyQual<Q>,
}

impl<Q> Wildcard<Q> {
    pub fn new(lower: PolyQual<Q>, upper: PolyQual<Q>) -> Self {
        Self { lower, upper }
    }

    /// A range between two concrete qualifiers.
    pub fn ground_range(lower: Q, upper: Q) -> Self {
        Self::new(PolyQual::Ground(lower), PolyQual::Ground(upper))
    }

    pub fn lower_bound(&self) -> &PolyQual<Q> {
        &self.lower
    }

    pub fn upper_bound(&self) -> &PolyQual<Q> {
        &self.upper
    }

    #[must_use]
    pub fn with_lower_bound(self, lower: PolyQual<Q>) -> Self {
        Self {
            lower,
            upper: self.upper,
        }
    }

    #[must_use]
    pub fn with_upper_bound(self, upper: PolyQual<Q>) -> Self {
        Self {
            lower: self.lower,
            upper,
        }
    }
}

impl<Q: Clone> Wildcard<Q> {
    /// A range containing exactly `qual`; both bounds hold the same value.
    pub fn exact(qual: PolyQual<Q>) -> Self {
        Self {
            lower: qual.clone(),
            upper: qual,
        }
    }

    pub fn ground(qual: Q) -> Self {
        Self::exact(PolyQual::Ground(qual))
    }

    /// Combine two ranges bound by bound.
    #[must_use]
    pub fn combine_with(
        &self,
        other: &Self,
        lower_op: &dyn CombiningOperation<Q>,
        upper_op: &dyn CombiningOperation<Q>,
    ) -> Self {
        Self {
            lower: lower_op.combine(&self.lower, &other.lower),
            upper: upper_op.combine(&self.upper, &other.upper),
        }
    }
}

impl<Q: PartialEq> Wildcard<Q> {
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.lower == self.upper
    }
}

impl<Q: Clone + Eq + fmt::Debug> Wildcard<Q> {
    /// Whether the lower bound lies below the upper bound.
    ///
    /// Ranges with a symbolic bound are compared through the variable's own
    /// bounds, which is the most this check can say without a solver.
    pub fn is_well_formed<H>(&self, hierarchy: &H) -> bool
    where
        H: QualifierHierarchy<Qual = Q>,
    {
        match (&self.lower, &self.upper) {
            (PolyQual::Ground(lower), PolyQual::Ground(upper)) => {
                hierarchy.is_subtype(lower, upper)
            }
            (lower, upper) => hierarchy.is_subtype(lower.lower_qual(), upper.upper_qual()),
        }
    }
}

impl<Q: fmt::Display> fmt::Display for Wildcard<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.lower, self.upper)
    }
}
