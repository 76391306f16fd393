//! Skyline: primitive-root diffuser design.
//!
//! A primitive-root diffuser is an acoustic panel of equal-width wells
//! whose depths follow the powers of a primitive root modulo a prime,
//! scattered over the grid along wrapping anti-diagonals. This is the
//! top-level facade crate that re-exports the public API from all
//! Skyline sub-crates; for most users, adding `skyline` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use skyline::prelude::*;
//!
//! // Find a panel layout for a target prime.
//! let design = Designer::default()
//!     .search_from_prime(157)
//!     .find(|design| design.columns > design.rows)
//!     .unwrap();
//! assert_eq!((design.columns, design.rows, design.prime), (13, 12, 157));
//!
//! // Turn the design into parameters and compute the well table.
//! let parameters = design.to_parameters(500, None).unwrap();
//! let result = parameters.calculate().unwrap();
//! assert_eq!(result.well_heights().len(), 156);
//!
//! // Render the cut list for the workshop.
//! let text = summary(&result, 0);
//! assert!(text.starts_with("13 x 12 wells (156 total)"));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`num`] | `skyline-num` | Primality, totients, primitive roots, coprime splits |
//! | [`table`] | `skyline-table` | Parameters, validation, diagonal fill, well tables |
//! | [`design`] | `skyline-design` | Design-space searches and root selection |
//! | [`report`] | `skyline-report` | Delimited, boxed-grid, and summary rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Number-theory kernel (`skyline-num`).
///
/// Primality and coprimality tests, Euler's totient and the Carmichael
/// function, primitive-root predicates and iterators, and the coprime
/// divisor splits the design search is built on.
pub use skyline_num as num;

/// Well-table construction (`skyline-table`).
///
/// [`table::TableParameters`] validation and
/// [`table::TableParameters::calculate`], the wrapping anti-diagonal
/// fill in [`table::diagonal`], and the acoustic conversions in
/// [`table::acoustics`].
pub use skyline_table as table;

/// Design-space search (`skyline-design`).
///
/// [`design::Designer`] searches viable `(columns, rows, prime)`
/// combinations from a fixed column count or a target prime; each
/// [`design::DesignResult`] converts into ready-to-calculate parameters.
pub use skyline_design as design;

/// Table rendering (`skyline-report`).
///
/// Delimited text via [`report::to_delimited`], an ASCII grid via
/// [`report::to_boxed_table`], and the height histogram and panel
/// summary in [`report::summary`].
pub use skyline_report as report;

/// Common imports for typical Skyline usage.
///
/// ```rust
/// use skyline::prelude::*;
/// ```
///
/// This imports the designer, the table parameter and result types, the
/// error types, and the renderers.
pub mod prelude {
    // Number theory
    pub use skyline_num::{is_coprime, is_prime, is_primitive_root, primitive_roots};

    // Table construction
    pub use skyline_table::{TableParameters, TableResult, ValidationError, WellCell};

    // Design search
    pub use skyline_design::{DesignError, DesignResult, Designer};

    // Rendering
    pub use skyline_report::{summary, to_boxed_table, to_delimited, well_counts};
}
