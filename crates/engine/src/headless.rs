//! Headless capabilities: scripted keys in, recorded output out.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::core::{Display, Input, Timer};
use crate::types::{Notice, RawKeyCode, BLANK_DISPLAY_CODE};

/// Something the session asked the display to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    EnterGraphics,
    ExitGraphics,
    Fill(u8),
    Show(Notice),
}

/// Display that only records calls.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    events: Vec<DisplayEvent>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// Non-blank fills in order, i.e. the flashed palette indices.
    pub fn flashed(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Fill(c) if *c != BLANK_DISPLAY_CODE => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl Display for RecordingDisplay {
    fn enter_graphics_mode(&mut self) -> Result<()> {
        self.events.push(DisplayEvent::EnterGraphics);
        Ok(())
    }

    fn exit_graphics_mode(&mut self) -> Result<()> {
        self.events.push(DisplayEvent::ExitGraphics);
        Ok(())
    }

    fn fill(&mut self, color_index: u8) -> Result<()> {
        self.events.push(DisplayEvent::Fill(color_index));
        Ok(())
    }

    fn show(&mut self, notice: Notice) -> Result<()> {
        self.events.push(DisplayEvent::Show(notice));
        Ok(())
    }
}

/// Input that replays a fixed list of key codes.
///
/// Reading past the end is an error, which ends a run cleanly in tests.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    keys: VecDeque<RawKeyCode>,
}

impl ScriptedInput {
    pub fn new(keys: impl IntoIterator<Item = RawKeyCode>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Keys not yet read.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl Input for ScriptedInput {
    fn read_key(&mut self) -> Result<RawKeyCode> {
        match self.keys.pop_front() {
            Some(key) => Ok(key),
            None => bail!("input script exhausted"),
        }
    }
}

/// Timer that records pauses instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingTimer {
    pauses: Vec<Duration>,
}

impl RecordingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Sum of every pause so far.
    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Timer for RecordingTimer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
