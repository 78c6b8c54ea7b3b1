//! Placement module - merging landed pieces and sweeping full rows
//!
//! Rows are swept bottom to top; a cleared row is dropped from the grid, the
//! rows above shift down by one, and an empty row appears at the top. The same
//! row index is then examined again since a new row has moved into it.

use crate::matrix::Matrix;
use crate::scoring::row_score;
use crate::types::{Position, EMPTY};

/// Result of one [`sweep`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepOutcome {
    pub rows_cleared: u32,
    pub score: u32,
}

/// Write every filled cell of `shape` into the arena at `offset`.
///
/// The caller guarantees `offset` is collision-free; this does not re-check and
/// overwrites whatever is underneath. Cells outside the arena are skipped.
pub fn merge(arena: &mut Matrix, shape: &Matrix, offset: Position) {
    for (x, y, value) in shape.occupied() {
        arena.set(offset.x + x, offset.y + y, value);
    }
}

/// Check if every cell of row `y` is filled
pub fn is_row_full(arena: &Matrix, y: usize) -> bool {
    y < arena.height() && arena.row(y).iter().all(|&c| c != EMPTY)
}

/// Clear full rows and score them in discovery order.
///
/// The Nth row found in one call is worth `10 * 2^(N-1)`.
pub fn sweep(arena: &mut Matrix) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();
    if arena.width() == 0 {
        return outcome;
    }

    let mut y = arena.height();
    while y > 0 {
        let row = y - 1;
        if !is_row_full(arena, row) {
            y -= 1;
            continue;
        }

        remove_row(arena, row);
        outcome.rows_cleared += 1;
        outcome.score = outcome.score.saturating_add(row_score(outcome.rows_cleared));
        // Re-check `row`: the row above now sits there.
    }

    outcome
}

/// Drop row `y`, shift the rows above it down, and empty the top row
fn remove_row(arena: &mut Matrix, y: usize) {
    let width = arena.width();
    // copy_within handles the overlapping ranges.
    arena.cells_mut().copy_within(0..y * width, width);
    arena.row_mut(0).fill(EMPTY);
}
