//! Sequence module - the colors the player has to repeat
//!
//! A [`Sequence`] holds at most [`SEQUENCE_CAPACITY`] colors. Slots past its
//! length read back as `None`, the same value an unrecognized key decodes to.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::rng::SimpleRng;
use crate::types::{Color, SEQUENCE_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("sequence length {requested} exceeds capacity {}", SEQUENCE_CAPACITY)]
    CapacityExceeded { requested: usize },
}

/// Fixed-capacity run of colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    colors: ArrayVec<Color, SEQUENCE_CAPACITY>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence from explicit colors.
    pub fn from_colors(colors: &[Color]) -> Result<Self, SequenceError> {
        let mut seq = Self::new();
        for &color in colors {
            seq.push(color)?;
        }
        Ok(seq)
    }

    pub fn push(&mut self, color: Color) -> Result<(), SequenceError> {
        self.colors
            .try_push(color)
            .map_err(|_| SequenceError::CapacityExceeded {
                requested: SEQUENCE_CAPACITY + 1,
            })
    }

    /// Color at `index`, or `None` for an unused slot.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}

/// Draw one color, uniformly over the four.
pub fn next_color(rng: &mut SimpleRng) -> Color {
    Color::ALL[rng.next_range(Color::ALL.len() as u32) as usize]
}

/// Generate a sequence of exactly `length` independently drawn colors.
pub fn generate(length: usize, rng: &mut SimpleRng) -> Result<Sequence, SequenceError> {
    if length > SEQUENCE_CAPACITY {
        return Err(SequenceError::CapacityExceeded { requested: length });
    }
    let mut seq = Sequence::new();
    for _ in 0..length {
        seq.push(next_color(rng))?;
    }
    Ok(seq)
}
