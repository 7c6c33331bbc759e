//! VGA Memorize (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `vga_memorize::{core,engine,input,term,types}`.

pub use memorize_core as core;
pub use memorize_engine as engine;
pub use memorize_input as input;
pub use memorize_term as term;
pub use memorize_types as types;
