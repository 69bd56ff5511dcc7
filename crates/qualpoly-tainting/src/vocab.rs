//! Annotation names understood by the tainting converter.

/// Parameter every class, interface and enum declares implicitly.
pub const DEFAULT_NAME: &str = "Main";

/// Parameter bound by `@PolyTainting` on a method or constructor signature.
pub const POLY_NAME: &str = "_poly";

/// Role of a recognized annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Any `Multi*` container; its `value` array holds further markers.
    Aggregate,
    /// `@Tainted`: exactly top.
    Tainted,
    /// `@Untainted`: exactly bottom.
    Untainted,
    /// `@Var(value = "v")`: exactly the variable `v`.
    Var,
    /// `@PolyTainting`: exactly the method's `_poly` variable.
    PolyTainting,
    /// `@Wild`: anything between bottom and top.
    Wild,
    Extends,
    Super,
    /// `@TaintingParam("X")` on a declaration.
    TaintingParam,
}

impl Marker {
    const SIMPLE_NAMES: [(&'static str, Marker); 8] = [
        ("Tainted", Marker::Tainted),
        ("Untainted", Marker::Untainted),
        ("Var", Marker::Var),
        ("PolyTainting", Marker::PolyTainting),
        ("Wild", Marker::Wild),
        ("Extends", Marker::Extends),
        ("Super", Marker::Super),
        ("TaintingParam", Marker::TaintingParam),
    ];

    fn from_simple_name(simple: &str) -> Option<Marker> {
        Self::SIMPLE_NAMES
            .iter()
            .find(|(name, _)| *name == simple)
            .map(|(_, marker)| *marker)
    }
}

/// Qualified annotation names for one qualifier package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaintingVocabulary {
    package: String,
    aggregate_prefix: String,
    poly: String,
    param: String,
}

impl TaintingVocabulary {
    pub fn new(package: impl Into<String>) -> Self {
        let package = package.into();
        Self {
            aggregate_prefix: format!("{package}.Multi"),
            poly: format!("{package}.PolyTainting"),
            param: format!("{package}.TaintingParam"),
            package,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub(crate) fn poly_name(&self) -> &str {
        &self.poly
    }

    pub(crate) fn param_name(&self) -> &str {
        &self.param
    }

    /// Classify an annotation by its qualified name alone.
    pub fn classify(&self, name: &str) -> Option<Marker> {
        if name.starts_with(&self.aggregate_prefix) {
            return Some(Marker::Aggregate);
        }
        let simple = name.strip_prefix(self.package.as_str())?.strip_prefix('.')?;
        Marker::from_simple_name(simple)
    }
}

impl Default for TaintingVocabulary {
    fn default() -> Self {
        Self::new(qualpoly_config::DEFAULT_QUAL_PACKAGE)
    }
}
