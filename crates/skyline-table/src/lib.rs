//! Well-table construction for primitive-root diffusers.
//!
//! This crate turns a validated parameter set into the physical layout of
//! a diffuser panel. The pipeline:
//!
//! 1. [`TableParameters`] carries the design recipe (grid shape, prime,
//!    primitive root, design frequency, well width, speed of sound).
//! 2. [`TableParameters::validate`] checks the number-theoretic
//!    invariants and reports the first violation as a [`ValidationError`].
//! 3. [`TableParameters::calculate`] walks the grid in the wrapping
//!    anti-diagonal order of [`diagonal::diagonal_cells`], assigns each
//!    cell its primitive-root residue, and converts residues to well
//!    depths, yielding an immutable [`TableResult`].
//!
//! The diagonal traversal is what makes the coprimality requirement on
//! the grid shape meaningful: for coprime `(rows, columns)` it is exactly
//! the torus walk `i ↦ (i mod rows, i mod columns)`, which spreads the
//! residue sequence evenly over the panel.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod acoustics;
pub mod diagonal;
pub mod error;
pub mod params;
pub mod result;

#[cfg(test)]
pub(crate) mod checks;

pub use error::ValidationError;
pub use params::TableParameters;
pub use result::{TableResult, WellCell};
