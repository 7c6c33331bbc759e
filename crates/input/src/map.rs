//! Key mapping from terminal events to raw key codes.
//!
//! Codes follow what a DOS `getch()` would report for the same key: ASCII for
//! printable characters, control codes for Ctrl+letter, 27 for Escape. Keys with
//! no single-byte code map to 0, which never decodes to a color.

use crate::types::RawKeyCode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key event to its raw code.
pub fn raw_code(key: KeyEvent) -> RawKeyCode {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if c.is_ascii_alphabetic() {
                (c.to_ascii_lowercase() as RawKeyCode) & 0x1f
            } else {
                0
            }
        }
        KeyCode::Char(c) if c.is_ascii() => c as RawKeyCode,
        KeyCode::Esc => 27,
        KeyCode::Enter => 13,
        KeyCode::Tab => 9,
        KeyCode::Backspace => 8,
        _ => 0,
    }
}
