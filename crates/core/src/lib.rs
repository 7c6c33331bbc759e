//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules: color codes, sequence generation,
//! difficulty progression and response checking. It does no I/O itself; the
//! display, keyboard and clock are reached through the traits in [`ports`].
//!
//! - **Deterministic**: a fixed seed reproduces every round's sequence
//! - **Testable**: every rule is a plain function or small value type
//! - **Portable**: runs against a terminal or fully headless
//!
//! # Module Structure
//!
//! - [`codec`]: raw key codes to colors, colors to palette indices
//! - [`difficulty`]: session progress and the per-level schedule
//! - [`ports`]: display, input, timer and seed capabilities
//! - [`response`]: fail-fast checking of the player's answer
//! - [`rng`]: LCG and per-round seed sources
//! - [`sequence`]: fixed-capacity color sequence and its generator
//!
//! # Example
//!
//! ```
//! use memorize_core::{check_all, generate, Session, SimpleRng, Verdict};
//!
//! let mut session = Session::new();
//! let mut rng = SimpleRng::new(7);
//! let sequence = generate(session.required_length, &mut rng).unwrap();
//!
//! // Repeating the sequence exactly clears the round.
//! let verdict = check_all(&sequence, sequence.iter().map(Some));
//! assert_eq!(verdict, Verdict::Matched);
//!
//! session.advance();
//! assert_eq!(session.level, 2);
//! assert_eq!(session.required_length, 6);
//! ```

pub mod codec;
pub mod difficulty;
pub mod ports;
pub mod response;
pub mod rng;
pub mod sequence;

pub use memorize_types as types;

// Re-export commonly used types for convenience
pub use codec::{decode, display_code, key_code};
pub use difficulty::{flash_duration, is_max_level, required_length, Session};
pub use ports::{Display, Input, SeedSource, Timer};
pub use response::{check_all, ResponseCheck, Step, Verdict};
pub use rng::{FixedSeed, SimpleRng, WallClockSeed};
pub use sequence::{generate, next_color, Sequence, SequenceError};
