//! Benchmark profiles for the Skyline diffuser workspace.
//!
//! Provides pre-built parameter sets shared by the Criterion benches:
//!
//! - [`reference_parameters`]: the 13 x 12 reference panel (prime 157)
//! - [`stress_parameters`]: a 16 x 63 panel (prime 1009), six and a half
//!   times the well count

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use skyline_table::TableParameters;

/// The canonical 13 x 12 reference panel: prime 157, primitive root 5,
/// 500 Hz design frequency, physical defaults.
pub fn reference_parameters() -> TableParameters {
    TableParameters::new(13, 12, 157, 5, 500)
}

/// A 16 x 63 stress panel: prime 1009, primitive root 11, 500 Hz.
/// 1008 wells, the largest table the workspace exercises.
pub fn stress_parameters() -> TableParameters {
    TableParameters::new(16, 63, 1009, 11, 500)
}
