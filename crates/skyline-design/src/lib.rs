//! Design-space search for primitive-root diffusers.
//!
//! A diffuser table needs a prime, a coprime grid factorization of
//! `prime - 1`, and a primitive root — too many coupled choices to pick
//! by hand. This crate searches the space from either end:
//!
//! - [`Designer::search_from_columns`] holds a column count fixed and
//!   scans row counts for primes of the form `columns · rows + 1`;
//! - [`Designer::search_from_prime`] starts from a target prime
//!   (advancing to the next usable one if necessary) and enumerates the
//!   coprime splits of `prime - 1` in both orientations.
//!
//! Either way, each hit is a [`DesignResult`] that can pick a primitive
//! root and convert itself into ready-to-calculate
//! [`TableParameters`](skyline_table::TableParameters).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod designer;
pub mod error;
pub mod result;

pub use designer::{ColumnSearch, Designer, PrimeSearch};
pub use error::DesignError;
pub use result::DesignResult;
