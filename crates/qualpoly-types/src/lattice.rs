use std::fmt;

use serde::{Deserialize, Serialize};

use crate::poly::PolyQual;

/// A bounded qualifier lattice.
///
/// `lub` must be a least upper bound: commutative, associative and
/// idempotent. Converters fold annotation contributions in source order and
/// only produce order-independent results when these laws hold.
pub trait QualifierHierarchy {
    type Qual: Clone + Eq + fmt::Debug;

    fn bottom(&self) -> Self::Qual;

    fn top(&self) -> Self::Qual;

    fn lub(&self, a: &Self::Qual, b: &Self::Qual) -> Self::Qual;

    fn is_subtype(&self, sub: &Self::Qual, sup: &Self::Qual) -> bool {
        self.lub(sub, sup) == *sup
    }

    /// Least upper bound of two symbolic qualifiers, at least one of which is
    /// a variable.
    ///
    /// The default orders a variable against ground qualifiers through its
    /// bounds: `Ground(q)` lies below a variable whose lower bound is at least
    /// `q`, and a variable lies below every ground qualifier above its upper
    /// bound. A variable whose bounds coincide stands for that single ground
    /// qualifier. Equal variables join to themselves; two distinct variables
    /// are widened to the ground join of their upper bounds.
    fn lub_symbolic(
        &self,
        a: &PolyQual<Self::Qual>,
        b: &PolyQual<Self::Qual>,
    ) -> PolyQual<Self::Qual> {
        if a == b {
            return a.clone();
        }
        match (settle(self, a), settle(self, b)) {
            (PolyQual::Ground(a), PolyQual::Ground(b)) => PolyQual::Ground(self.lub(&a, &b)),
            (PolyQual::Ground(q), PolyQual::Var(var)) | (PolyQual::Var(var), PolyQual::Ground(q)) => {
                if self.is_subtype(&q, var.lower()) {
                    PolyQual::Var(var)
                } else {
                    PolyQual::Ground(self.lub(&q, var.upper()))
                }
            }
            (PolyQual::Var(a), PolyQual::Var(b)) => PolyQual::Ground(self.lub(a.upper(), b.upper())),
        }
    }
}

/// Replaces a variable pinned to a single qualifier by that qualifier.
fn settle<H>(hierarchy: &H, qual: &PolyQual<H::Qual>) -> PolyQual<H::Qual>
where
    H: QualifierHierarchy + ?Sized,
{
    match qual {
        PolyQual::Var(var) if hierarchy.is_subtype(var.upper(), var.lower()) => {
            PolyQual::Ground(var.lower().clone())
        }
        other => other.clone(),
    }
}

/// Qualifiers of the tainting checker.
///
/// Variant order is lattice order: `Untainted` is bottom, `Tainted` is top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tainting {
    Untainted,
    Tainted,
}

impl fmt::Display for Tainting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tainting::Untainted => f.write_str("UNTAINTED"),
            Tainting::Tainted => f.write_str("TAINTED"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaintingHierarchy;

impl QualifierHierarchy for TaintingHierarchy {
    type Qual = Tainting;

    fn bottom(&self) -> Tainting {
        Tainting::Untainted
    }

    fn top(&self) -> Tainting {
        Tainting::Tainted
    }

    fn lub(&self, a: &Tainting, b: &Tainting) -> Tainting {
        *a.max(b)
    }
}
