use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::wildcard::Wildcard;

/// Qualifier parameter bindings for one type use.
///
/// Iteration is ordered by parameter name. A use that carries no parameters at
/// all is represented by the absence of a `QualParams` (`Option::None`), never
/// by an empty map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualParams<Q> {
    params: BTreeMap<String, Wildcard<Q>>,
}

impl<Q> QualParams<Q> {
    pub fn new(params: BTreeMap<String, Wildcard<Q>>) -> Self {
        Self { params }
    }

    pub fn get(&self, name: &str) -> Option<&Wildcard<Q>> {
        self.params.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Wildcard<Q>)> {
        self.params.iter().map(|(name, wild)| (name.as_str(), wild))
    }

    pub fn into_inner(self) -> BTreeMap<String, Wildcard<Q>> {
        self.params
    }
}

impl<Q> FromIterator<(String, Wildcard<Q>)> for QualParams<Q> {
    fn from_iter<I: IntoIterator<Item = (String, Wildcard<Q>)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

impl<Q: fmt::Display> fmt::Display for QualParams<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (name, wild)) in self.params.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={wild}")?;
        }
        f.write_str("}")
    }
}
