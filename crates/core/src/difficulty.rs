//! Difficulty scheduling - level, sequence length and flash hold.
//!
//! Every completed level adds [`SEQUENCE_LEN_STEP`] colors and removes
//! [`FLASH_STEP_US`] from the flash hold. The hold has no floor here; callers
//! that turn it into a real pause must handle values at or below zero.

use crate::types::{
    FLASH_STEP_US, MAX_LEVEL, SEQUENCE_LEN_STEP, START_FLASH_US, START_LEVEL, START_SEQUENCE_LEN,
};

/// Mutable progress carried from round to round until a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub level: u8,
    /// Colors the player must repeat this level.
    pub required_length: usize,
    /// Flash hold in microseconds.
    pub flash_duration: i32,
    /// Outcome of the most recently completed round.
    pub lost: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            level: START_LEVEL,
            required_length: START_SEQUENCE_LEN,
            flash_duration: START_FLASH_US,
            lost: false,
        }
    }

    /// Move to the next level after a cleared round.
    pub fn advance(&mut self) {
        self.level += 1;
        self.required_length += SEQUENCE_LEN_STEP;
        self.flash_duration -= FLASH_STEP_US;
    }

    /// Back to level one. `lost` is left for the caller.
    pub fn reset(&mut self) {
        self.level = START_LEVEL;
        self.required_length = START_SEQUENCE_LEN;
        self.flash_duration = START_FLASH_US;
    }

    pub fn is_max_level(&self) -> bool {
        is_max_level(self.level)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_max_level(level: u8) -> bool {
    level == MAX_LEVEL
}

/// Sequence length at `level`, counting from a reset at level one.
pub fn required_length(level: u8) -> usize {
    START_SEQUENCE_LEN + SEQUENCE_LEN_STEP * level.saturating_sub(START_LEVEL) as usize
}

/// Flash hold at `level` in microseconds, counting from a reset at level one.
pub fn flash_duration(level: u8) -> i32 {
    START_FLASH_US - FLASH_STEP_US * level.saturating_sub(START_LEVEL) as i32
}
