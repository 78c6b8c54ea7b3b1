//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and the session state. It has no
//! dependencies on terminals, input devices or clocks: callers feed it
//! commands and elapsed milliseconds and read the state back.
//!
//! # Module Structure
//!
//! - [`matrix`]: flat row-major grids with in-place and allocating rotation
//! - [`pieces`]: the seven canonical shapes
//! - [`collision`]: the bounds/overlap predicate
//! - [`placement`]: merge a landed piece, sweep full rows
//! - [`scoring`]: per-row doubling score, level and gravity curve
//! - [`rng`]: seeded uniform piece selection
//! - [`config`]: session configuration and validation
//! - [`game_state`]: the session, its controller and the gravity tick
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece is an independent uniform draw, with a
//!   one-piece lookahead
//! - **Wall kicks**: a failed rotation tries `x` offsets `+1, -1, +2, -2, ...`
//!   bounded by the rotated shape's width, otherwise it is undone
//! - **Scoring**: the Nth row cleared in one sweep is worth `10 * 2^(N-1)`
//! - **Game over**: only when a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use matrix_tetris_core::GameState;
//! use matrix_tetris_types::{GameAction, GamePhase};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The first piece landed on an empty arena: nothing cleared yet.
//! assert_eq!(game.score(), 0);
//! assert!(game.arena().cells().iter().any(|&c| c != 0));
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) with the elapsed
//! milliseconds since the previous call. Gravity fires once the accumulated
//! time exceeds the drop interval (1000ms by default).

pub mod collision;
pub mod config;
pub mod game_state;
pub mod matrix;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod scoring;

pub use matrix_tetris_types as types;

// Re-export commonly used types for convenience
pub use collision::collides;
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameState, Player};
pub use matrix::Matrix;
pub use pieces::{create_piece, create_piece_named};
pub use placement::{merge, sweep, SweepOutcome};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{drop_interval_for_level, level_for_lines, row_score, sweep_score};
