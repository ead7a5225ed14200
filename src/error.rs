use thiserror::Error;

use crate::path::Path;

/// Why a value failed to match a pattern.
///
/// Only the first failure of a walk is reported; enclosing walks abort with it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// The top-level value handed to an array matcher is not a container.
    #[error("{type_name} \"{value}\" is not a valid array.")]
    NotAContainer {
        type_name: &'static str,
        value: String,
    },
    /// A key present in the value has no counterpart in the pattern.
    #[error("There is no element under path {path} in pattern.")]
    MissingInPattern { path: Path },
    /// A key present in the pattern has no counterpart in the value.
    #[error("There is no element under path {path} in value.")]
    MissingInValue { path: Path },
    /// A leaf comparison failed; the message comes from the leaf matcher.
    #[error("{0}")]
    Mismatch(String),
}

impl MatchError {
    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::Mismatch(message.into())
    }

    /// The path of a missing-element failure.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::MissingInPattern { path } | Self::MissingInValue { path } => Some(path),
            _ => None,
        }
    }
}
