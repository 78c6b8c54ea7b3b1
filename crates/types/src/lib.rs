//! Shared types and constants for the matrix-tetris workspace.
//!
//! Everything here is plain data with no dependencies so the core engine, the
//! input mapping and the terminal view can all agree on the same vocabulary.
//!
//! # Arena Dimensions
//!
//! The default arena is 12 columns by 20 rows. Coordinates are `(x, y)` with
//! `x` growing to the right and `y` growing downwards; row 0 is the spawn row.
//!
//! # Cell Values
//!
//! Arena cells and piece cells share one value domain: `0` is empty and
//! `1..=7` is the colour index of the piece that filled the cell.
//!
//! | Piece | T | O | L | J | I | S | Z |
//! |-------|---|---|---|---|---|---|---|
//! | Index | 1 | 2 | 3 | 4 | 5 | 6 | 7 |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frontend tick interval (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Default gravity interval |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Floor when gravity speeds up with level |
//!
//! # Examples
//!
//! ```
//! use matrix_tetris_types::{GameAction, PieceKind, RotationDir, ARENA_HEIGHT, ARENA_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color_index(), 1);
//!
//! assert_eq!(RotationDir::Clockwise.reverse(), RotationDir::CounterClockwise);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(ARENA_WIDTH, 12);
//! assert_eq!(ARENA_HEIGHT, 20);
//! ```

/// Default arena width in cells (12 columns)
pub const ARENA_WIDTH: usize = 12;

/// Default arena height in cells (20 rows)
pub const ARENA_HEIGHT: usize = 20;

/// Smallest arena side that still fits the 4x4 I piece
pub const MIN_ARENA_SIDE: usize = 4;

/// Largest arena side the terminal view can lay out
pub const MAX_ARENA_SIDE: usize = 255;

/// Frontend tick interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default gravity interval (1000ms = 1 row per second)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Gravity curve by level, in milliseconds per row at a 1000ms base.
///
/// Index 0 = Level 0, Index 8 = Level 8+
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Absolute minimum drop interval when gravity follows the level (100ms)
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points for the first row cleared in a sweep; each further row doubles it
pub const BASE_ROW_SCORE: u32 = 10;

/// Value of an empty cell
pub const EMPTY: Cell = 0;

/// A cell in the arena or in a piece shape (`0` empty, `1..=7` colour index)
pub type Cell = u8;

/// The seven piece kinds
///
/// The discriminant order is the random alphabet order `T J L O S Z I`;
/// the colour index is a separate, fixed table (see [`PieceKind::color_index`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    J,
    L,
    O,
    S,
    Z,
    I,
}

impl PieceKind {
    /// All kinds in random-alphabet order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
    ];

    /// Parse piece kind from a one-letter string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use matrix_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("X"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Parse piece kind from a single letter (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'T' => Some(PieceKind::T),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'I' => Some(PieceKind::I),
            _ => None,
        }
    }

    /// Upper-case letter for display
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "T",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::I => "I",
        }
    }

    /// Cell value written by this piece
    ///
    /// # Examples
    ///
    /// ```
    /// use matrix_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::T.color_index(), 1);
    /// assert_eq!(PieceKind::I.color_index(), 5);
    /// assert_eq!(PieceKind::Z.color_index(), 7);
    /// ```
    pub fn color_index(&self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::color_index`]; `None` for empty or unknown values
    pub fn from_color_index(cell: Cell) -> Option<Self> {
        match cell {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Quarter-turn direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDir {
    /// +1
    Clockwise,
    /// -1
    CounterClockwise,
}

impl RotationDir {
    /// Map a signed direction (`> 0` clockwise, otherwise counter-clockwise)
    pub fn from_sign(sign: i32) -> Self {
        if sign > 0 {
            RotationDir::Clockwise
        } else {
            RotationDir::CounterClockwise
        }
    }

    pub fn sign(&self) -> i32 {
        match self {
            RotationDir::Clockwise => 1,
            RotationDir::CounterClockwise => -1,
        }
    }

    /// The direction that undoes this one
    pub fn reverse(&self) -> Self {
        match self {
            RotationDir::Clockwise => RotationDir::CounterClockwise,
            RotationDir::CounterClockwise => RotationDir::Clockwise,
        }
    }
}

/// Direction for horizontal movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalDirection {
    Left,
    Right,
}

impl HorizontalDirection {
    /// Map a signed direction (`< 0` left, otherwise right)
    pub fn from_sign(sign: i32) -> Self {
        if sign < 0 {
            HorizontalDirection::Left
        } else {
            HorizontalDirection::Right
        }
    }

    /// Column delta for one step
    pub fn dx(&self) -> i32 {
        match self {
            HorizontalDirection::Left => -1,
            HorizontalDirection::Right => 1,
        }
    }
}

/// Top-left offset of a shape inside the arena
///
/// Either coordinate may be negative or past the arena edge; whether a
/// position is legal is decided by collision, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This position shifted by `(dx, dy)`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Commands accepted by the game state
///
/// Each input event maps to exactly one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Drop piece one row (locks it if it cannot fall)
    SoftDrop,
    /// Drop piece to the lowest free row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Start a fresh session
    Restart,
}

impl GameAction {
    /// Parse action from a camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use matrix_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateccw"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Restart => "restart",
        }
    }
}

/// Record of a piece locking into the arena.
///
/// Emitted by the core after every lock and consumed by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub rows_cleared: u32,
    pub score_delta: u32,
}
