//! Shared fixtures and assertions for Skyline development.
//!
//! Canonical parameter sets (valid and known-bad), the prime list below
//! 1000, and the uniqueness/permutation assertions the workspace's test
//! suites lean on.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod asserts;
pub mod fixtures;

pub use asserts::{assert_all_distinct, assert_permutation_of_range};
pub use fixtures::{
    invalid_parameter_sets, params_157, params_241, params_349, params_pocket, PRIMES_TO_1000,
};
