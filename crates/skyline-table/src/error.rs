//! Validation errors for table parameters.

use smallvec::SmallVec;
use std::fmt;

/// The offending `(field, value)` pairs of a failed check.
pub type ErrorFields = SmallVec<[(&'static str, u64); 2]>;

/// A table parameter set that cannot describe a real diffuser.
///
/// Produced by [`crate::TableParameters::validate`], which runs its
/// checks in a fixed order and reports the first failure. Messages
/// follow the `fields: message` shape, so `prime: 153 is not a prime
/// number` names both what to fix and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The modulus is not a prime number.
    NotPrime {
        /// The rejected modulus.
        prime: u64,
    },
    /// The chosen root does not generate the full residue sequence.
    NotPrimitiveRoot {
        /// The rejected root.
        primitive_root: u64,
        /// The modulus it was tested against.
        prime: u64,
    },
    /// The grid does not hold exactly `prime - 1` wells.
    SizeMismatch {
        /// Requested well columns.
        columns: u32,
        /// Requested well rows.
        rows: u32,
        /// The well count the prime requires.
        expected: u64,
    },
    /// The grid dimensions share a common factor, so the diagonal
    /// traversal would revisit cells before covering the panel.
    NotCoprime {
        /// Requested well columns.
        columns: u32,
        /// Requested well rows.
        rows: u32,
    },
}

impl ValidationError {
    /// The offending field names and values, in declaration order.
    pub fn fields(&self) -> ErrorFields {
        match *self {
            Self::NotPrime { prime } => SmallVec::from_slice(&[("prime", prime)]),
            Self::NotPrimitiveRoot { primitive_root, .. } => {
                SmallVec::from_slice(&[("primitive_root", primitive_root)])
            }
            Self::SizeMismatch { columns, rows, .. } | Self::NotCoprime { columns, rows } => {
                SmallVec::from_slice(&[("columns", columns as u64), ("rows", rows as u64)])
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPrime { prime } => {
                write!(f, "prime: {prime} is not a prime number")
            }
            Self::NotPrimitiveRoot { primitive_root, prime } => {
                write!(
                    f,
                    "primitive_root: {primitive_root} is not a primitive root of {prime}"
                )
            }
            Self::SizeMismatch { columns, rows, expected } => {
                write!(
                    f,
                    "columns, rows: {columns} x {rows} wells, table must hold exactly {expected} (prime - 1)"
                )
            }
            Self::NotCoprime { columns, rows } => {
                write!(f, "columns, rows: {columns} and {rows} must be coprime")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
