//! Capabilities the game needs from the outside world.
//!
//! The engine drives a session purely through these traits. The terminal front
//! end implements them with crossterm; the engine's headless module implements
//! them with scripted keys and recorded output.

use std::time::Duration;

use anyhow::Result;

use crate::types::{Notice, RawKeyCode};

/// Full-screen color output.
pub trait Display {
    /// Switch into the full-screen mode used for flashing colors.
    fn enter_graphics_mode(&mut self) -> Result<()>;

    /// Restore whatever mode was active before `enter_graphics_mode`.
    fn exit_graphics_mode(&mut self) -> Result<()>;

    /// Fill the whole surface with a palette index (0 blanks it).
    fn fill(&mut self, color_index: u8) -> Result<()>;

    /// Show a text notice over the current fill.
    fn show(&mut self, notice: Notice) -> Result<()>;
}

/// Blocking key input.
pub trait Input {
    /// Block until the next key press and return its raw code.
    fn read_key(&mut self) -> Result<RawKeyCode>;
}

/// Blocking pauses.
pub trait Timer {
    fn pause(&mut self, duration: Duration);
}

/// Produces the seed for each round's generator.
pub trait SeedSource {
    fn seed(&mut self) -> u32;
}
