//! Table invariant helpers shared across test modules.
//!
//! Reused by the diagonal, params, and result tests to verify the
//! traversal and fill properties that make a computed table a real
//! diffuser layout.

use indexmap::IndexSet;

use crate::diagonal::diagonal_cells;
use crate::result::TableResult;

/// Assert the flattened diagonal traversal hits every cell of a
/// `rows × columns` grid exactly once and never leaves the grid.
pub fn assert_visits_every_cell_once(rows: u32, columns: u32) {
    let cells: Vec<(u32, u32)> = diagonal_cells(rows, columns).collect();
    assert_eq!(
        cells.len() as u64,
        rows as u64 * columns as u64,
        "{rows}x{columns}: traversal length mismatch"
    );
    let mut seen = IndexSet::new();
    for &(row, col) in &cells {
        assert!(
            row < rows && col < columns,
            "{rows}x{columns}: ({row}, {col}) out of bounds"
        );
        assert!(
            seen.insert((row, col)),
            "{rows}x{columns}: ({row}, {col}) visited twice"
        );
    }
}

/// Assert every fill index satisfies the torus-walk congruences
/// `index ≡ row (mod rows)` and `index ≡ col (mod columns)`.
/// Meaningful for coprime grid shapes.
pub fn assert_fill_is_torus_walk(result: &TableResult) {
    let rows = result.rows();
    let columns = result.columns();
    for row in 0..rows {
        for col in 0..columns {
            let cell = result.cell(row, col).expect("cell in bounds");
            assert_eq!(
                cell.index as u64 % rows as u64,
                row as u64,
                "cell ({row}, {col})"
            );
            assert_eq!(
                cell.index as u64 % columns as u64,
                col as u64,
                "cell ({row}, {col})"
            );
        }
    }
}

/// Assert the table holds every nonzero residue mod its prime exactly
/// once.
pub fn assert_values_permute_nonzero_residues(result: &TableResult) {
    let prime = result.parameters().prime;
    let mut values: Vec<u64> = result.cells().iter().map(|cell| cell.value).collect();
    values.sort_unstable();
    let expected: Vec<u64> = (1..prime).collect();
    assert_eq!(values, expected, "values are not a residue permutation");
}

/// Assert the fill indices are a permutation of `0..rows * columns`.
pub fn assert_indices_permute_fill_order(result: &TableResult) {
    let mut indices: Vec<usize> = result.cells().iter().map(|cell| cell.index).collect();
    indices.sort_unstable();
    let expected: Vec<usize> = (0..result.cells().len()).collect();
    assert_eq!(indices, expected, "indices are not a fill permutation");
}
