//! Game engine - drives a session through its phases.
//!
//! [`GameSession`] owns the capabilities from `memorize_core::ports` and
//! advances one phase per [`GameSession::step`]. [`headless`] provides
//! scripted and recording capabilities for tests and benchmarks.

pub mod headless;
pub mod session;

pub use memorize_core as core;
pub use memorize_types as types;

pub use headless::{DisplayEvent, RecordingDisplay, RecordingTimer, ScriptedInput};
pub use session::{evaluate, flash_hold, GameSession};
