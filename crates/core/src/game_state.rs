//! Game state module - the session and its controller
//!
//! Ties the arena, the active piece, the randomizer and the scoring rules
//! together. Every command is a no-op once the session is over; the only way
//! back to play is [`GameState::restart`].

use tracing::{debug, info, trace};

use crate::collision::collides;
use crate::config::{ConfigError, GameConfig};
use crate::matrix::Matrix;
use crate::pieces::create_piece;
use crate::placement::{merge, sweep};
use crate::rng::PieceRandomizer;
use crate::scoring::{drop_interval_for_level, level_for_lines};
use crate::types::*;

/// The player-controlled falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    /// Owned copy of the catalog shape, rotated in place
    pub matrix: Matrix,
    /// Top-left offset into the arena
    pub pos: Position,
    pub score: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    arena: Matrix,
    player: Player,
    active_kind: Option<PieceKind>,
    next: Option<PieceKind>,
    randomizer: PieceRandomizer,
    lines: u32,
    level: u32,
    drop_counter_ms: u32,
    game_over: bool,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// New session on the default 12x20 arena, first piece already spawned
    pub fn new(seed: u32) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    /// New session with a custom configuration
    pub fn with_config(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: GameConfig, seed: u32) -> Self {
        let mut state = Self {
            config,
            arena: Matrix::new(config.width, config.height),
            player: Player {
                matrix: Matrix::empty(),
                pos: Position::default(),
                score: 0,
            },
            active_kind: None,
            next: None,
            randomizer: PieceRandomizer::new(seed),
            lines: 0,
            level: 0,
            drop_counter_ms: 0,
            game_over: false,
            last_event: None,
        };
        state.spawn_next();
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn arena(&self) -> &Matrix {
        &self.arena
    }

    /// Direct arena access for scripted setups.
    ///
    /// Changes made here bypass collision; callers own the consequences.
    #[doc(hidden)]
    pub fn arena_mut(&mut self) -> &mut Matrix {
        &mut self.arena
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    #[doc(hidden)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Shape of the active piece
    pub fn active_shape(&self) -> &Matrix {
        &self.player.matrix
    }

    pub fn position(&self) -> Position {
        self.player.pos
    }

    /// Kind of the active piece
    pub fn active_kind(&self) -> Option<PieceKind> {
        self.active_kind
    }

    /// The queued lookahead piece
    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next
    }

    /// Replace the queued piece; the next spawn promotes it
    pub fn set_next_piece(&mut self, kind: PieceKind) {
        self.next = Some(kind);
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }

    /// Time accumulated towards the next gravity step
    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        if self.config.level_gravity {
            drop_interval_for_level(self.level, self.config.drop_interval_ms)
        } else {
            self.config.drop_interval_ms
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Promote the queued piece to active and queue a fresh one.
    ///
    /// The new piece sits on row 0, horizontally centred. If it collides
    /// immediately the session is over and nothing is placed.
    pub fn spawn_next(&mut self) {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.randomizer.draw(),
        };
        self.next = Some(self.randomizer.draw());

        self.player.matrix = create_piece(kind);
        self.active_kind = Some(kind);
        let centre = (self.arena.width() / 2) as i32;
        let half_shape = (self.player.matrix.width() / 2) as i32;
        self.player.pos = Position::new(centre - half_shape, 0);

        if self.player_collides() {
            self.game_over = true;
            info!(
                score = self.player.score,
                lines = self.lines,
                piece = kind.as_str(),
                "spawn blocked, game over"
            );
        }
    }

    fn player_collides(&self) -> bool {
        collides(&self.arena, &self.player.matrix, self.player.pos)
    }

    /// Shift the active piece one column. Returns true if it moved.
    pub fn move_piece(&mut self, dir: HorizontalDirection) -> bool {
        if self.game_over {
            return false;
        }

        self.player.pos.x += dir.dx();
        if self.player_collides() {
            self.player.pos.x -= dir.dx();
            return false;
        }
        true
    }

    /// Rotate the active piece with the alternating wall-kick search.
    ///
    /// While the rotated shape collides, `x` is shifted by `+1, -2, +3, -4, ...`
    /// (net offsets `+1, -1, +2, -2, ...`). The search gives up once the next
    /// step's magnitude exceeds the rotated shape's width, at which point the
    /// shape is rotated back and `x` restored. Returns true if the rotation stuck.
    pub fn rotate(&mut self, dir: RotationDir) -> bool {
        if self.game_over {
            return false;
        }

        let original_x = self.player.pos.x;
        let mut step: i32 = 1;

        self.player.matrix.rotate(dir);
        while self.player_collides() {
            self.player.pos.x += step;
            step = -(step + step.signum());
            if step > self.player.matrix.width() as i32 {
                trace!(x = original_x, "no kick found, rotation reverted");
                self.player.matrix.rotate(dir.reverse());
                self.player.pos.x = original_x;
                return false;
            }
        }
        true
    }

    /// Move the active piece down one row, locking it if it cannot fall.
    ///
    /// Returns true if the piece moved, false if it locked (or the game is over).
    /// Either way the gravity accumulator restarts.
    pub fn soft_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        self.drop_counter_ms = 0;
        self.player.pos.y += 1;
        if !self.player_collides() {
            return true;
        }

        self.player.pos.y -= 1;
        self.lock_piece();
        false
    }

    /// Drop the active piece to the lowest free row and lock it.
    ///
    /// Returns the number of rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        // An empty shape never collides and would fall forever.
        if self.game_over || self.player.matrix.is_empty() {
            return 0;
        }

        let mut rows = 0;
        while !collides(&self.arena, &self.player.matrix, self.player.pos.offset(0, 1)) {
            self.player.pos.y += 1;
            rows += 1;
        }
        // The final drop cannot move, so it locks.
        self.soft_drop();
        rows
    }

    /// Merge the active piece, sweep, score, and spawn the next piece
    fn lock_piece(&mut self) {
        merge(&mut self.arena, &self.player.matrix, self.player.pos);

        let outcome = sweep(&mut self.arena);
        self.player.score = self.player.score.saturating_add(outcome.score);
        self.lines = self.lines.saturating_add(outcome.rows_cleared);
        self.level = level_for_lines(self.lines);

        if let Some(kind) = self.active_kind {
            debug!(
                piece = kind.as_str(),
                x = self.player.pos.x,
                y = self.player.pos.y,
                rows = outcome.rows_cleared,
                score = outcome.score,
                "piece locked"
            );
            self.last_event = Some(LockEvent {
                kind,
                rows_cleared: outcome.rows_cleared,
                score_delta: outcome.score,
            });
        }

        self.spawn_next();
    }

    /// Advance the gravity timer.
    ///
    /// Once the accumulated time exceeds the drop interval the piece drops one
    /// row and the accumulator restarts. Returns true if a drop happened.
    pub fn tick(&mut self, delta_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(delta_ms);
        if self.drop_counter_ms > self.drop_interval_ms() {
            self.soft_drop();
            return true;
        }
        false
    }

    /// Clear the arena, reset score, lines and timers, and spawn a new piece.
    ///
    /// The randomizer keeps its stream, so a restart does not replay the
    /// previous sequence.
    pub fn restart(&mut self) {
        info!(score = self.player.score, lines = self.lines, "restart");
        self.arena.fill(EMPTY);
        self.player.score = 0;
        self.lines = 0;
        self.level = 0;
        self.drop_counter_ms = 0;
        self.game_over = false;
        self.next = None;
        self.last_event = None;
        self.spawn_next();
    }

    /// Apply a game action. Returns true if it changed the state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(HorizontalDirection::Left),
            GameAction::MoveRight => self.move_piece(HorizontalDirection::Right),
            GameAction::SoftDrop => {
                let was_over = self.game_over;
                self.soft_drop();
                !was_over
            }
            GameAction::HardDrop => {
                let was_over = self.game_over;
                self.hard_drop();
                !was_over
            }
            GameAction::RotateCw => self.rotate(RotationDir::Clockwise),
            GameAction::RotateCcw => self.rotate(RotationDir::CounterClockwise),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Session whose active piece is `kind` at `pos`
    fn state_with(kind: PieceKind, pos: Position) -> GameState {
        let mut state = GameState::new(12345);
        state.set_next_piece(kind);
        state.spawn_next();
        state.player.pos = pos;
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.phase(), GamePhase::Playing);
        assert!(!state.game_over);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level, 0);
        assert_eq!(state.lines, 0);
        assert!(state.active_kind.is_some());
        assert!(state.next.is_some());
        assert_eq!(state.arena.width(), 12);
        assert_eq!(state.arena.height(), 20);
    }

    #[test]
    fn test_spawn_is_centred_on_row_zero() {
        let mut state = GameState::new(1);
        state.set_next_piece(PieceKind::I);
        state.spawn_next();
        // floor(12 / 2) - floor(4 / 2)
        assert_eq!(state.position(), Position::new(4, 0));

        state.set_next_piece(PieceKind::T);
        state.spawn_next();
        // floor(12 / 2) - floor(3 / 2)
        assert_eq!(state.position(), Position::new(5, 0));

        state.set_next_piece(PieceKind::O);
        state.spawn_next();
        assert_eq!(state.position(), Position::new(5, 0));
    }

    #[test]
    fn test_spawn_promotes_queued_piece() {
        let mut state = GameState::new(7);
        state.set_next_piece(PieceKind::Z);
        state.spawn_next();
        assert_eq!(state.active_kind(), Some(PieceKind::Z));
        assert_eq!(state.active_shape(), &create_piece(PieceKind::Z));
        assert!(state.next_piece().is_some());
    }

    #[test]
    fn test_move_reverts_on_wall() {
        let mut state = state_with(PieceKind::O, Position::new(0, 5));
        assert!(!state.move_piece(HorizontalDirection::Left));
        assert_eq!(state.position(), Position::new(0, 5));
        assert!(state.move_piece(HorizontalDirection::Right));
        assert_eq!(state.position(), Position::new(1, 5));
    }

    #[test]
    fn test_drop_resets_counter() {
        let mut state = GameState::new(1);
        state.tick(500);
        assert_eq!(state.drop_counter_ms(), 500);
        assert!(state.soft_drop());
        assert_eq!(state.drop_counter_ms(), 0);
    }

    #[test]
    fn test_tick_drops_only_after_interval_exceeded() {
        let mut state = GameState::new(1);
        let y0 = state.position().y;
        assert!(!state.tick(1000));
        assert_eq!(state.position().y, y0);
        assert!(state.tick(1));
        assert_eq!(state.position().y, y0 + 1);
        assert_eq!(state.drop_counter_ms(), 0);
    }

    #[test]
    fn test_level_gravity_shortens_interval() {
        let config = GameConfig {
            level_gravity: true,
            ..GameConfig::default()
        };
        let mut state = GameState::with_config(config, 1).unwrap();
        assert_eq!(state.drop_interval_ms(), 1000);
        state.lines = 10;
        state.level = level_for_lines(state.lines);
        assert_eq!(state.drop_interval_ms(), 800);
    }

    #[test]
    fn test_lock_records_event() {
        let mut state = state_with(PieceKind::O, Position::new(0, 18));
        assert!(!state.soft_drop());
        let event = state.take_last_event().unwrap();
        assert_eq!(event.kind, PieceKind::O);
        assert_eq!(event.rows_cleared, 0);
        assert_eq!(event.score_delta, 0);
        assert!(state.take_last_event().is_none());
        assert_eq!(state.arena.get(0, 19), Some(2));
        assert_eq!(state.arena.get(1, 18), Some(2));
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = GameConfig {
            width: 2,
            ..GameConfig::default()
        };
        assert_eq!(
            GameState::with_config(config, 1).unwrap_err(),
            ConfigError::Width(2)
        );
    }

    #[test]
    fn test_restart_clears_session() {
        let mut state = state_with(PieceKind::I, Position::new(0, 0));
        state.hard_drop();
        state.player.score = 120;
        state.lines = 12;
        state.level = 1;
        state.game_over = true;

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.level(), 0);
        assert!(state.arena.cells().iter().all(|&c| c == EMPTY));
        assert!(state.active_kind().is_some());
        assert_eq!(state.position().y, 0);
    }
}
