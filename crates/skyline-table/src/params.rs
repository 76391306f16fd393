//! Diffuser table parameters and validation.

use skyline_num::{is_coprime, is_prime, is_primitive_root};

use crate::acoustics;
use crate::error::ValidationError;
use crate::result::TableResult;

/// The full recipe for one diffuser table.
///
/// Fields are public and any combination can be built, including
/// inconsistent ones: the number-theoretic invariants are enforced by
/// [`validate`](Self::validate), not by construction, so a caller can
/// assemble a candidate, check it, and report exactly what is wrong.
#[derive(Debug, Clone, PartialEq)]
pub struct TableParameters {
    /// Well columns across the panel.
    pub columns: u32,
    /// Well rows down the panel.
    pub rows: u32,
    /// Prime modulus; a valid table holds exactly `prime - 1` wells.
    pub prime: u64,
    /// Generator of the residue sequence, a primitive root of `prime`.
    pub primitive_root: u64,
    /// Design frequency in Hz, the low end of the diffusion band.
    pub design_frequency: u32,
    /// Well width in centimetres.
    pub well_width: f64,
    /// Speed of sound in metres per second.
    pub speed_of_sound: f64,
}

impl TableParameters {
    /// Parameter set with the physical defaults
    /// ([`acoustics::DEFAULT_WELL_WIDTH_CM`],
    /// [`acoustics::SPEED_OF_SOUND`]). Adjust the public fields
    /// afterwards for non-standard panels.
    pub fn new(
        columns: u32,
        rows: u32,
        prime: u64,
        primitive_root: u64,
        design_frequency: u32,
    ) -> Self {
        Self {
            columns,
            rows,
            prime,
            primitive_root,
            design_frequency,
            well_width: acoustics::DEFAULT_WELL_WIDTH_CM,
            speed_of_sound: acoustics::SPEED_OF_SOUND,
        }
    }

    /// Checks the number-theoretic invariants and reports the first
    /// violation, in a fixed order: the modulus is prime, the root is a
    /// primitive root of it, the grid holds exactly `prime - 1` wells,
    /// and the grid dimensions are coprime.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_prime(self.prime as i128) {
            return Err(ValidationError::NotPrime { prime: self.prime });
        }
        if !is_primitive_root(self.primitive_root, self.prime) {
            return Err(ValidationError::NotPrimitiveRoot {
                primitive_root: self.primitive_root,
                prime: self.prime,
            });
        }
        let expected = self.prime - 1;
        if self.columns as u64 * self.rows as u64 != expected {
            return Err(ValidationError::SizeMismatch {
                columns: self.columns,
                rows: self.rows,
                expected,
            });
        }
        if !is_coprime(self.columns as u64, self.rows as u64) {
            return Err(ValidationError::NotCoprime {
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Validates, then computes the full well table.
    pub fn calculate(&self) -> Result<TableResult, ValidationError> {
        TableResult::compute(self.clone())
    }

    /// Highest frequency the panel diffuses: the frequency whose
    /// half-wavelength equals the well width, as integer Hz (ties to
    /// even).
    pub fn high_frequency(&self) -> u32 {
        acoustics::frequency_from_wavelength_cm(self.well_width * 2.0, self.speed_of_sound)
            .round_ties_even() as u32
    }

    /// Overall panel width in centimetres.
    pub fn total_width_cm(&self) -> f64 {
        self.well_width * self.columns as f64
    }

    /// Overall panel height in centimetres.
    pub fn total_height_cm(&self) -> f64 {
        self.well_width * self.rows as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> TableParameters {
        TableParameters::new(13, 12, 157, 5, 500)
    }

    // ── Validation ──────────────────────────────────────────────

    #[test]
    fn canonical_parameter_sets_validate() {
        assert_eq!(reference().validate(), Ok(()));
        assert_eq!(TableParameters::new(16, 15, 241, 7, 500).validate(), Ok(()));
        assert_eq!(TableParameters::new(29, 12, 349, 13, 1500).validate(), Ok(()));
    }

    #[test]
    fn composite_modulus_is_rejected_first() {
        // 153 = 9 * 17; the nonsensical grid shape is never reached.
        let params = TableParameters::new(17, 9, 153, 3, 500);
        assert_eq!(
            params.validate(),
            Err(ValidationError::NotPrime { prime: 153 })
        );
    }

    #[test]
    fn non_generating_roots_are_rejected() {
        for root in [2u64, 3, 4, 7, 8, 9, 10, 11, 12, 13, 14] {
            let params = TableParameters::new(13, 12, 157, root, 500);
            assert_eq!(
                params.validate(),
                Err(ValidationError::NotPrimitiveRoot {
                    primitive_root: root,
                    prime: 157
                }),
                "root = {root}"
            );
        }
    }

    #[test]
    fn wrong_well_count_is_a_size_mismatch() {
        let params = TableParameters::new(29, 11, 349, 13, 1500);
        assert_eq!(
            params.validate(),
            Err(ValidationError::SizeMismatch {
                columns: 29,
                rows: 11,
                expected: 348
            })
        );
    }

    #[test]
    fn shared_dimension_factor_is_rejected_last() {
        // 24 * 10 = 240 = 241 - 1, but gcd(24, 10) = 2.
        let params = TableParameters::new(24, 10, 241, 7, 500);
        assert_eq!(
            params.validate(),
            Err(ValidationError::NotCoprime {
                columns: 24,
                rows: 10
            })
        );
    }

    #[test]
    fn check_order_is_fixed() {
        // Composite prime and non-coprime dimensions: primality wins.
        let params = TableParameters::new(24, 10, 153, 3, 500);
        assert!(matches!(
            params.validate(),
            Err(ValidationError::NotPrime { .. })
        ));
        // Bad root and bad shape: the root check wins.
        let params = TableParameters::new(10, 10, 157, 2, 500);
        assert!(matches!(
            params.validate(),
            Err(ValidationError::NotPrimitiveRoot { .. })
        ));
    }

    // ── Derived values ──────────────────────────────────────────

    #[test]
    fn high_frequency_of_the_default_well_width() {
        assert_eq!(reference().high_frequency(), 4501);
    }

    #[test]
    fn panel_dimensions_of_the_reference_design() {
        let params = reference();
        assert!((params.total_width_cm() - 49.53).abs() < 1e-9);
        assert!((params.total_height_cm() - 45.72).abs() < 1e-9);
    }

    #[test]
    fn defaults_fill_the_physical_fields() {
        let params = reference();
        assert_eq!(params.well_width, 3.81);
        assert_eq!(params.speed_of_sound, 343.0);
    }
}
