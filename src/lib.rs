//! matrix-tetris (workspace facade crate).
//!
//! Re-exports the member crates under one name so integration tests, benches
//! and the binary share a single import path.

pub use matrix_tetris_core as core;
pub use matrix_tetris_input as input;
pub use matrix_tetris_term as term;
pub use matrix_tetris_types as types;
