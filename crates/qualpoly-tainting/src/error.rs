use std::fmt;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Second-pass modifiers that narrow an existing binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundModifier {
    Extends,
    Super,
}

impl fmt::Display for BoundModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundModifier::Extends => f.write_str("@Extends"),
            BoundModifier::Super => f.write_str("@Super"),
        }
    }
}

/// Malformed qualifier annotations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("{modifier}(target = \"{target}\") has no base declaration for parameter `{target}`")]
    BoundModifierWithoutBase {
        modifier: BoundModifier,
        target: String,
    },

    #[error("annotation {annotation} is missing required element `{element}`")]
    MissingElement {
        annotation: String,
        element: &'static str,
    },

    #[error("element `{element}` of annotation {annotation} must be a {expected}, found a {found}")]
    ElementTypeMismatch {
        annotation: String,
        element: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}
