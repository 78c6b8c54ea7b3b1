//! Pieces module - the canonical shape catalog
//!
//! Every shape is a square matrix whose filled cells hold the piece's colour
//! index, so merging a piece into the arena is a direct write.

use crate::matrix::Matrix;
use crate::types::PieceKind;

/// Canonical spawn shape for a piece kind
pub fn create_piece(kind: PieceKind) -> Matrix {
    let c = kind.color_index();
    match kind {
        PieceKind::T => Matrix::from_rows(&[[0, 0, 0], [c, c, c], [0, c, 0]]),
        PieceKind::O => Matrix::from_rows(&[[c, c], [c, c]]),
        PieceKind::L => Matrix::from_rows(&[[0, c, 0], [0, c, 0], [0, c, c]]),
        PieceKind::J => Matrix::from_rows(&[[0, c, 0], [0, c, 0], [c, c, 0]]),
        PieceKind::I => Matrix::from_rows(&[[0, c, 0, 0], [0, c, 0, 0], [0, c, 0, 0], [0, c, 0, 0]]),
        PieceKind::S => Matrix::from_rows(&[[0, c, c], [c, c, 0], [0, 0, 0]]),
        PieceKind::Z => Matrix::from_rows(&[[c, c, 0], [0, c, c], [0, 0, 0]]),
    }
}

/// Shape for a one-letter identifier.
///
/// Unknown identifiers yield [`Matrix::empty`]. An empty shape never collides
/// and never occupies a cell, so callers must treat it as "no piece" and must
/// not place it.
pub fn create_piece_named(name: &str) -> Matrix {
    match PieceKind::from_str(name) {
        Some(kind) => create_piece(kind),
        None => Matrix::empty(),
    }
}

