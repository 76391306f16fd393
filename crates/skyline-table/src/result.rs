//! Computed well tables.

use skyline_num::root_sequence;

use crate::acoustics;
use crate::diagonal::diagonal_cells;
use crate::error::ValidationError;
use crate::params::TableParameters;

/// One well of a computed table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellCell {
    /// Residue of the primitive-root sequence assigned to this well.
    pub value: u64,
    /// 0-based position of this well in the diagonal fill order.
    pub index: usize,
    /// Physical well depth in centimetres.
    pub depth_cm: f64,
}

/// A fully computed diffuser table.
///
/// Owns the [`TableParameters`] it was computed from plus a row-major
/// store of `rows × columns` cells and their integer well heights.
/// Never mutated after construction; presentation offsets are applied
/// by the report layer at render time, not written back here.
#[derive(Debug, Clone, PartialEq)]
pub struct TableResult {
    parameters: TableParameters,
    cells: Vec<WellCell>,
    well_heights: Vec<i64>,
}

impl TableResult {
    /// Validates the parameters, then fills the grid: the i-th cell of
    /// the wrapping diagonal traversal receives the i-th element of the
    /// primitive-root sequence, and each residue converts to a depth by
    /// `value · wavelength / (2 · prime)`.
    pub(crate) fn compute(parameters: TableParameters) -> Result<Self, ValidationError> {
        parameters.validate()?;
        let columns = parameters.columns as usize;
        let sequence: Vec<u64> =
            root_sequence(parameters.prime, parameters.primitive_root).collect();
        let wavelength_cm =
            acoustics::wavelength_cm(parameters.design_frequency as f64, parameters.speed_of_sound);
        let well_count = parameters.rows as usize * columns;
        let mut cells = vec![WellCell { value: 0, index: 0, depth_cm: 0.0 }; well_count];
        // A validated root yields exactly prime - 1 values; cycling
        // keeps the fill total if a shorter sequence ever gets here.
        let fill = diagonal_cells(parameters.rows, parameters.columns)
            .zip(sequence.iter().copied().cycle());
        for (index, ((row, col), value)) in fill.enumerate() {
            cells[row as usize * columns + col as usize] = WellCell {
                value,
                index,
                depth_cm: value as f64 * wavelength_cm / (2.0 * parameters.prime as f64),
            };
        }
        let well_heights = cells
            .iter()
            .map(|cell| cell.depth_cm.round_ties_even() as i64)
            .collect();
        Ok(Self { parameters, cells, well_heights })
    }

    /// The parameters this table was computed from.
    pub fn parameters(&self) -> &TableParameters {
        &self.parameters
    }

    /// Well rows down the panel.
    pub fn rows(&self) -> u32 {
        self.parameters.rows
    }

    /// Well columns across the panel.
    pub fn columns(&self) -> u32 {
        self.parameters.columns
    }

    /// The cell at `(row, column)`, or `None` outside the grid.
    pub fn cell(&self, row: u32, column: u32) -> Option<WellCell> {
        if row < self.parameters.rows && column < self.parameters.columns {
            Some(self.cells[row as usize * self.parameters.columns as usize + column as usize])
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[WellCell] {
        &self.cells
    }

    /// Integer well heights in row-major order: each cell's depth
    /// rounded to the nearest centimetre, ties to even.
    pub fn well_heights(&self) -> &[i64] {
        &self.well_heights
    }
}
