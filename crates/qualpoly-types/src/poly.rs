use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lattice::QualifierHierarchy;

/// A named qualifier variable with its own bounds.
///
/// Variables compare by value. Two variables with the same name and bounds are
/// the same variable as far as [`QualifierHierarchy::lub_symbolic`] is
/// concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualVar<Q> {
    name: String,
    lower: Q,
    upper: Q,
}

impl<Q> QualVar<Q> {
    pub fn new(name: impl Into<String>, lower: Q, upper: Q) -> Self {
        Self {
            name: name.into(),
            lower,
            upper,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lower(&self) -> &Q {
        &self.lower
    }

    pub fn upper(&self) -> &Q {
        &self.upper
    }
}

impl<Q> fmt::Display for QualVar<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A qualifier that is either concrete or symbolic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolyQual<Q> {
    Ground(Q),
    Var(QualVar<Q>),
}

impl<Q> PolyQual<Q> {
    pub fn var(name: impl Into<String>, lower: Q, upper: Q) -> Self {
        PolyQual::Var(QualVar::new(name, lower, upper))
    }

    #[must_use]
    pub fn as_var(&self) -> Option<&QualVar<Q>> {
        match self {
            PolyQual::Ground(_) => None,
            PolyQual::Var(var) => Some(var),
        }
    }

    /// The smallest concrete value this qualifier can stand for.
    pub fn lower_qual(&self) -> &Q {
        match self {
            PolyQual::Ground(q) => q,
            PolyQual::Var(var) => var.lower(),
        }
    }

    /// The largest concrete value this qualifier can stand for.
    pub fn upper_qual(&self) -> &Q {
        match self {
            PolyQual::Ground(q) => q,
            PolyQual::Var(var) => var.upper(),
        }
    }
}

impl<Q: fmt::Display> fmt::Display for PolyQual<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyQual::Ground(q) => q.fmt(f),
            PolyQual::Var(var) => var.fmt(f),
        }
    }
}

/// A binary operation over symbolic qualifiers, used to combine wildcard bounds.
pub trait CombiningOperation<Q> {
    fn combine(&self, a: &PolyQual<Q>, b: &PolyQual<Q>) -> PolyQual<Q>;
}

/// Least upper bound lifted to [`PolyQual`].
///
/// Two ground qualifiers join by the base lattice rule; any pair involving a
/// variable is routed to [`QualifierHierarchy::lub_symbolic`].
#[derive(Debug, Clone, Default)]
pub struct Lub<H> {
    hierarchy: H,
}

impl<H: QualifierHierarchy> Lub<H> {
    pub fn new(hierarchy: H) -> Self {
        Self { hierarchy }
    }

    pub fn hierarchy(&self) -> &H {
        &self.hierarchy
    }
}

impl<H: QualifierHierarchy> CombiningOperation<H::Qual> for Lub<H> {
    fn combine(&self, a: &PolyQual<H::Qual>, b: &PolyQual<H::Qual>) -> PolyQual<H::Qual> {
        match (a, b) {
            (PolyQual::Ground(a), PolyQual::Ground(b)) => {
                PolyQual::Ground(self.hierarchy.lub(a, b))
            }
            _ => self.hierarchy.lub_symbolic(a, b),
        }
    }
}
