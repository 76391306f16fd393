//! Anti-diagonal grid traversal with wrap continuation.
//!
//! Diagonals are indexed by `k`: diagonal `k >= 0` starts at cell
//! `(0, k)` on the top edge, diagonal `k < 0` starts at `(-k, 0)` on the
//! left edge, and every diagonal advances one row and one column per
//! step until it leaves the grid.
//!
//! [`DiagonalOrder`] enumerates the diagonals in *wrap order*: the walk
//! starts at `k = 0`, and after a diagonal ends at cell `(er, ec)` it
//! continues from `(0, ec + 1)` when that column exists, otherwise from
//! `(er + 1, 0)`. On a `rows × columns` grid with coprime dimensions the
//! flattened traversal is the torus walk — the i-th visited cell is
//! `(i mod rows, i mod columns)` — which is what lets a linear residue
//! sequence cover the whole panel evenly.

use smallvec::SmallVec;

/// The cells of one diagonal, top-left to bottom-right.
pub type DiagonalRun = SmallVec<[(u32, u32); 16]>;

/// The cells of diagonal `k`, in traversal order.
///
/// Empty when `k` names no diagonal of the grid (`k >= columns` or
/// `-k >= rows`) and for zero-sized grids.
pub fn diagonal_coords(rows: u32, columns: u32, k: i64) -> DiagonalRun {
    let mut run = DiagonalRun::new();
    if rows == 0 || columns == 0 {
        return run;
    }
    let (mut row, mut col) = if k >= 0 {
        if k >= columns as i64 {
            return run;
        }
        (0u64, k as u64)
    } else {
        let start = k.unsigned_abs();
        if start >= rows as u64 {
            return run;
        }
        (start, 0u64)
    };
    while row < rows as u64 && col < columns as u64 {
        run.push((row as u32, col as u32));
        row += 1;
        col += 1;
    }
    run
}

/// Iterator over `(k, cells)` for every diagonal of a grid, in wrap
/// order. Created by [`diagonal_order`].
#[derive(Debug, Clone)]
pub struct DiagonalOrder {
    rows: u32,
    columns: u32,
    // Wrap continuation target; None when the walk ran off the grid.
    next_k: Option<i64>,
    emitted: u64,
    total: u64,
    visited: Vec<bool>,
}

impl DiagonalOrder {
    fn index_of(&self, k: i64) -> usize {
        (k + self.rows as i64 - 1) as usize
    }

    /// First diagonal not yet visited: top edge left to right, then
    /// left edge top to bottom. Only consulted when the wrap
    /// continuation dead-ends, which cannot happen for coprime shapes.
    fn first_unvisited(&self) -> Option<i64> {
        (0..self.columns as i64)
            .chain((1..self.rows as i64).map(|d| -d))
            .find(|&k| !self.visited[self.index_of(k)])
    }
}

impl Iterator for DiagonalOrder {
    type Item = (i64, DiagonalRun);

    fn next(&mut self) -> Option<(i64, DiagonalRun)> {
        if self.emitted == self.total {
            return None;
        }
        let k = match self.next_k {
            Some(k) if !self.visited[self.index_of(k)] => k,
            _ => self.first_unvisited()?,
        };
        let index = self.index_of(k);
        self.visited[index] = true;
        self.emitted += 1;
        let run = diagonal_coords(self.rows, self.columns, k);
        if let Some(&(end_row, end_col)) = run.last() {
            self.next_k = if end_col + 1 < self.columns {
                Some((end_col + 1) as i64)
            } else if end_row + 1 < self.rows {
                Some(-((end_row + 1) as i64))
            } else {
                None
            };
        }
        Some((k, run))
    }
}

/// All `rows + columns - 1` diagonals of the grid in wrap order, each
/// exactly once. Zero-sized grids yield nothing.
pub fn diagonal_order(rows: u32, columns: u32) -> DiagonalOrder {
    let total = if rows == 0 || columns == 0 {
        0
    } else {
        rows as u64 + columns as u64 - 1
    };
    DiagonalOrder {
        rows,
        columns,
        next_k: Some(0),
        emitted: 0,
        total,
        visited: vec![false; total as usize],
    }
}

/// Flattened cell iterator over [`diagonal_order`]. Created by
/// [`diagonal_cells`].
#[derive(Debug, Clone)]
pub struct DiagonalCells {
    order: DiagonalOrder,
    current: DiagonalRun,
    pos: usize,
}

impl Iterator for DiagonalCells {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        loop {
            if self.pos < self.current.len() {
                let cell = self.current[self.pos];
                self.pos += 1;
                return Some(cell);
            }
            let (_, run) = self.order.next()?;
            self.current = run;
            self.pos = 0;
        }
    }
}

/// Every cell of the grid exactly once, in the concatenated wrap-order
/// diagonal traversal.
pub fn diagonal_cells(rows: u32, columns: u32) -> DiagonalCells {
    DiagonalCells {
        order: diagonal_order(rows, columns),
        current: DiagonalRun::new(),
        pos: 0,
    }
}
