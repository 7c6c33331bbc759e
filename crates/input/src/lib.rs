//! Terminal input module.
//!
//! Translates `crossterm` key events into the raw codes the game decodes, and
//! provides a blocking [`TerminalInput`] for the engine.

pub mod map;
pub mod terminal;

pub use memorize_types as types;

pub use map::raw_code;
pub use terminal::TerminalInput;
