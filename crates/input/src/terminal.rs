//! Blocking keyboard reads from the terminal.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use memorize_core::Input;

use crate::map::raw_code;
use crate::types::RawKeyCode;

/// Reads key presses from the controlling terminal.
///
/// Release and auto-repeat events are skipped, as are resize, mouse and focus
/// events. The terminal must already be in raw mode.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl Input for TerminalInput {
    fn read_key(&mut self) -> Result<RawKeyCode> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(raw_code(key));
                }
            }
        }
    }
}
