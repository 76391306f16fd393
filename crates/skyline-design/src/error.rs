//! Errors from design-result operations.

use std::fmt;

/// A design operation needed a primitive root where none exists.
///
/// Distinct from [`skyline_table::ValidationError`]: this is the
/// should-be-unreachable condition of asking for the default root of a
/// value without primitive roots, not a bad parameter set. Searches
/// never signal it; an exhausted search just yields nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    /// The prime has no primitive roots to choose from.
    NoPrimitiveRoots {
        /// The offending prime.
        prime: u64,
    },
}

impl fmt::Display for DesignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPrimitiveRoots { prime } => {
                write!(f, "prime: {prime} has no primitive roots")
            }
        }
    }
}

impl std::error::Error for DesignError {}
