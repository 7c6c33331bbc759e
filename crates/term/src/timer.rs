//! Wall-clock pauses.

use std::thread;
use std::time::Duration;

use memorize_core::Timer;

/// Blocks the calling thread for each pause.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepTimer;

impl Timer for SleepTimer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
