//! Terminal front end.
//!
//! The terminal stands in for a VGA screen: every "fill" paints the whole
//! viewport in one palette color, and notices are drawn as centered text on
//! top of it. Rendering goes through a small framebuffer that is diffed against
//! the previous frame before being flushed to the terminal.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`screen_view`]: pure mapping from screen state to a framebuffer
//! - [`renderer`]: crossterm output, implements the `Display` capability
//! - [`timer`]: thread-sleep `Timer`

pub mod fb;
pub mod renderer;
pub mod screen_view;
pub mod timer;

pub use memorize_core as core;
pub use memorize_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_enter_into, encode_full_into, TerminalRenderer};
pub use screen_view::{notice_lines, palette_rgb, ScreenState, ScreenView, Viewport};
pub use timer::SleepTimer;
