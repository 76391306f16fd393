//! Text rendering for computed diffuser well tables.
//!
//! A [`TableResult`](skyline_table::TableResult) is a grid of well
//! heights in centimetres; this crate turns it into something a workshop
//! can use. [`to_delimited`] emits machine-readable rows for a
//! spreadsheet or CNC toolchain, [`to_boxed_table`] draws the panel as
//! an ASCII grid, and [`summary`] prints the physical envelope together
//! with the [`well_counts`] cut list (how many blocks of each height to
//! prepare).
//!
//! Every renderer takes a presentation `offset` added to each height at
//! render time. Lifting the whole panel this way leaves the acoustics
//! unchanged while avoiding zero-depth wells, so the offset never
//! touches the computed result itself.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod render;
pub mod summary;

pub use render::{to_boxed_table, to_delimited};
pub use summary::{summary, well_counts};
