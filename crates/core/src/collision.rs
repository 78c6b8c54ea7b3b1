//! Collision module - pure overlap/bounds predicate
//!
//! A shape collides at an offset when any of its filled cells lands outside
//! the arena (on either axis) or on a filled arena cell.

use crate::matrix::Matrix;
use crate::types::{Position, EMPTY};

/// Check whether `shape` placed at `offset` overlaps the arena or leaves it
pub fn collides(arena: &Matrix, shape: &Matrix, offset: Position) -> bool {
    shape.occupied().any(|(x, y, _)| {
        // Out of bounds reads as a filled cell.
        arena
            .get(offset.x + x, offset.y + y)
            .map_or(true, |cell| cell != EMPTY)
    })
}

/// Check whether the arena cell at `(x, y)` is inside the arena and empty
pub fn is_free(arena: &Matrix, x: i32, y: i32) -> bool {
    matches!(arena.get(x, y), Some(EMPTY))
}
