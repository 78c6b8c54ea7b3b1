//! Terminal rendering for matrix-tetris.
//!
//! The view draws a [`core::GameState`] into a plain framebuffer of styled
//! characters; the renderer flushes framebuffers to the terminal. The core
//! never calls into this crate.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use matrix_tetris_core as core;
pub use matrix_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{kind_color, piece_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
