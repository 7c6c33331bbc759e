//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, so they
//! can be shared by the game logic, the engine, and the terminal front end.
//!
//! # Difficulty Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_LEVEL` | 1 | Level after a reset |
//! | `MAX_LEVEL` | 25 | Winning level |
//! | `START_SEQUENCE_LEN` | 4 | Colors to repeat at level 1 |
//! | `SEQUENCE_LEN_STEP` | 2 | Colors added per level |
//! | `START_FLASH_US` | 2,000,000 | Flash hold at level 1 |
//! | `FLASH_STEP_US` | 60,000 | Flash hold removed per level |
//!
//! # Timing Constants
//!
//! - `BLANK_GAP_US`: 30,000µs blank screen before each flash
//! - `LEVEL_BANNER_MS`: 1,000ms level announcement pause
//!
//! # Examples
//!
//! ```
//! use memorize_types::{Color, Notice, MAX_LEVEL, SEQUENCE_CAPACITY};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Color::from_str("Blue"), Some(Color::Blue));
//! assert_eq!(Color::Red.key_hint(), 'R');
//!
//! // The last level fills the sequence buffer exactly
//! assert_eq!(SEQUENCE_CAPACITY, 52);
//! assert_eq!(MAX_LEVEL, 25);
//!
//! assert_eq!(Notice::Level(3), Notice::Level(3));
//! ```

/// Opaque key code as read from the input device.
pub type RawKeyCode = u32;

/// Key code that quits the game from the start screen (Escape).
pub const EXIT_KEY_CODE: RawKeyCode = 27;

/// Fixed capacity of a color sequence.
pub const SEQUENCE_CAPACITY: usize = 52;

/// Level a fresh session starts at.
pub const START_LEVEL: u8 = 1;

/// Completing this level wins the game.
pub const MAX_LEVEL: u8 = 25;

/// Sequence length at `START_LEVEL`.
pub const START_SEQUENCE_LEN: usize = 4;

/// Colors added to the sequence per completed level.
pub const SEQUENCE_LEN_STEP: usize = 2;

/// Flash hold at `START_LEVEL`, in microseconds.
pub const START_FLASH_US: i32 = 2_000_000;

/// Flash hold removed per completed level, in microseconds.
pub const FLASH_STEP_US: i32 = 60_000;

/// Blank interval shown before each flash, in microseconds.
pub const BLANK_GAP_US: u64 = 30_000;

/// How long the level announcement stays up before the flashes start.
pub const LEVEL_BANNER_MS: u64 = 1_000;

/// Palette index used to blank the screen.
pub const BLANK_DISPLAY_CODE: u8 = 0;

/// The four colors of the game
///
/// Each color has a VGA palette index and a response key:
/// - **Blue**: index 1, key `B`
/// - **Green**: index 2, key `G`
/// - **Red**: index 12, key `R`
/// - **Yellow**: index 14, key `Y`
///
/// There is no "empty" variant: an empty sequence slot or an unrecognized key is
/// `None` wherever an `Option<Color>` appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Green,
    Red,
    Yellow,
}

impl Color {
    /// All colors, in draw order.
    pub const ALL: [Color; 4] = [Color::Blue, Color::Green, Color::Red, Color::Yellow];

    /// Parse color from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use memorize_types::Color;
    ///
    /// assert_eq!(Color::from_str("yellow"), Some(Color::Yellow));
    /// assert_eq!(Color::from_str("GREEN"), Some(Color::Green));
    /// assert_eq!(Color::from_str("purple"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" => Some(Color::Blue),
            "green" => Some(Color::Green),
            "red" => Some(Color::Red),
            "yellow" => Some(Color::Yellow),
            _ => None,
        }
    }

    /// Convert to lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Yellow => "yellow",
        }
    }

    /// Letter shown to the player in the instructions.
    pub fn key_hint(&self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Yellow => 'Y',
        }
    }
}

/// Text the game asks the display to show over the current fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Title screen with the start/exit prompt.
    Banner,
    /// Level announcement before the flashes.
    Level(u8),
    /// Key reminder shown while the player types the sequence.
    Instructions,
    /// Shown after completing `MAX_LEVEL`.
    Victory,
}

/// Session state machine phases
///
/// The loop goes `StartScreen → Presenting → Collecting → Evaluating`, then one of
/// `LevelAdvanced` (back to `Presenting`), `Won` or `Lost` (back to `StartScreen`).
/// `Exited` is terminal and only reachable from `StartScreen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    StartScreen,
    Presenting,
    Collecting,
    Evaluating,
    LevelAdvanced,
    Won,
    Lost,
    Exited,
}

impl Phase {
    /// Convert to camelCase name (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::StartScreen => "startScreen",
            Phase::Presenting => "presenting",
            Phase::Collecting => "collecting",
            Phase::Evaluating => "evaluating",
            Phase::LevelAdvanced => "levelAdvanced",
            Phase::Won => "won",
            Phase::Lost => "lost",
            Phase::Exited => "exited",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Exited)
    }
}
