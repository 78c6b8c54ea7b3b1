//! Session configuration and its validation.

use thiserror::Error;

use crate::types::{ARENA_HEIGHT, ARENA_WIDTH, DROP_INTERVAL_MS, MAX_ARENA_SIDE, MIN_ARENA_SIDE};

/// Tunable parameters of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Arena columns
    pub width: usize,
    /// Arena rows
    pub height: usize,
    /// Gravity interval at level 0
    pub drop_interval_ms: u32,
    /// Speed gravity up as the level rises
    pub level_gravity: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
            level_gravity: false,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("arena width {0} is outside {min}..={max}", min = MIN_ARENA_SIDE, max = MAX_ARENA_SIDE)]
    Width(usize),
    #[error("arena height {0} is outside {min}..={max}", min = MIN_ARENA_SIDE, max = MAX_ARENA_SIDE)]
    Height(usize),
    #[error("drop interval must be at least 1ms")]
    DropInterval,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let side = MIN_ARENA_SIDE..=MAX_ARENA_SIDE;
        if !side.contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !side.contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::DropInterval);
        }
        Ok(())
    }
}
