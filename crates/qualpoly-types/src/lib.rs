//! Qualifier values shared across the qualifier-polymorphism crates.
//!
//! A use site of a polymorphic declaration is described by a [`QualParams`]
//! map: every qualifier parameter name is bound to a [`Wildcard`], a range
//! between two [`PolyQual`] bounds. Bounds are either concrete lattice values
//! or named [`QualVar`]s. The lattice itself is supplied through
//! [`QualifierHierarchy`]; [`TaintingHierarchy`] is the two-point instance used
//! by the tainting checker.

mod lattice;
mod params;
mod poly;
mod wildcard;

pub use crate::lattice::{QualifierHierarchy, Tainting, TaintingHierarchy};
pub use crate::params::QualParams;
pub use crate::poly::{CombiningOperation, Lub, PolyQual, QualVar};
pub use crate::wildcard::Wildcard;
