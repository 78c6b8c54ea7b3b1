//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Each key
//! press is one discrete command; there is no auto-repeat state here, the
//! terminal's own key repeat is passed through as further presses.

pub mod map;

pub use matrix_tetris_types as types;

pub use map::{handle_key_event, should_quit};
