//! Viable design candidates.

use skyline_num::{primitive_roots, PrimitiveRoots};
use skyline_table::TableParameters;

use crate::error::DesignError;

/// One viable `(columns, rows, prime)` combination.
///
/// Produced by the searches on [`Designer`](crate::Designer); consumed
/// by picking a primitive root and converting to
/// [`TableParameters`] for calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignResult {
    /// Well columns across the panel.
    pub columns: u32,
    /// Well rows down the panel.
    pub rows: u32,
    /// The prime whose residue sequence fills the table.
    pub prime: u64,
}

impl DesignResult {
    /// Panel aspect ratio: columns per row.
    pub fn aspect_ratio(&self) -> f64 {
        self.columns as f64 / self.rows as f64
    }

    /// The primitive roots available for this design's prime,
    /// ascending.
    pub fn primitive_roots(&self) -> PrimitiveRoots {
        primitive_roots(self.prime)
    }

    /// The conventional root choice: the smallest primitive root above
    /// 2, or the smallest root overall when none exceeds 2 (only the
    /// tiniest primes). Fails only when the prime has no primitive
    /// roots at all, which cannot happen for a search-produced design.
    pub fn default_primitive_root(&self) -> Result<u64, DesignError> {
        let mut smallest = None;
        for root in self.primitive_roots() {
            if root > 2 {
                return Ok(root);
            }
            if smallest.is_none() {
                smallest = Some(root);
            }
        }
        smallest.ok_or(DesignError::NoPrimitiveRoots { prime: self.prime })
    }

    /// Table parameters for this design at `design_frequency` Hz, using
    /// the given root or the default choice, with the standard well
    /// width and speed of sound. Adjust the physical fields on the
    /// returned struct before calculating a non-standard panel.
    pub fn to_parameters(
        &self,
        design_frequency: u32,
        primitive_root: Option<u64>,
    ) -> Result<TableParameters, DesignError> {
        let root = match primitive_root {
            Some(root) => root,
            None => self.default_primitive_root()?,
        };
        Ok(TableParameters::new(
            self.columns,
            self.rows,
            self.prime,
            root,
            design_frequency,
        ))
    }
}
