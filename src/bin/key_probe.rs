//! Key probe: prints the raw code and decoded color for each key press.
//!
//! Useful for checking which keys a terminal reports as game colors.
//! Press Escape to quit.

use anyhow::Result;
use crossterm::terminal;

use vga_memorize::core::{decode, display_code, Input};
use vga_memorize::input::TerminalInput;
use vga_memorize::types::EXIT_KEY_CODE;

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = run();
    // Always try to restore terminal state.
    let _ = terminal::disable_raw_mode();
    result
}

fn run() -> Result<()> {
    let mut input = TerminalInput::new();
    print!("Press keys to see their codes (ESC to quit)\r\n");

    loop {
        let raw = input.read_key()?;
        let color = decode(raw);
        match color {
            Some(c) => print!(
                "raw={:<4} color={:<7} palette={}\r\n",
                raw,
                c.as_str(),
                display_code(color)
            ),
            None => print!("raw={:<4} (no color)\r\n", raw),
        }
        if raw == EXIT_KEY_CODE {
            return Ok(());
        }
    }
}
