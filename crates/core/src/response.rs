//! Response checking - fail-fast comparison of the player's keys.

use crate::sequence::Sequence;
use crate::types::Color;

/// Result of feeding one decoded key to a [`ResponseCheck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Correct; more colors are expected.
    Continue,
    /// Correct, and every required position is confirmed.
    Complete,
    /// Wrong color or a key that decodes to no color.
    Mismatch { position: usize },
}

/// Final outcome of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Matched,
    Mismatch { position: usize },
    /// The response ran out before every position was confirmed.
    Incomplete { confirmed: usize },
}

/// Walks the sequence one position at a time as keys arrive.
#[derive(Debug, Clone)]
pub struct ResponseCheck<'a> {
    sequence: &'a Sequence,
    position: usize,
}

impl<'a> ResponseCheck<'a> {
    pub fn new(sequence: &'a Sequence) -> Self {
        Self {
            sequence,
            position: 0,
        }
    }

    /// Positions confirmed so far.
    pub fn confirmed(&self) -> usize {
        self.position
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.sequence.len()
    }

    /// Check the next key. Once a step returns `Complete` or `Mismatch` the
    /// check is finished and further keys are not expected.
    pub fn accept(&mut self, key: Option<Color>) -> Step {
        let expected = self.sequence.get(self.position);
        match (expected, key) {
            (Some(want), Some(got)) if want == got => {
                self.position += 1;
                if self.is_complete() {
                    Step::Complete
                } else {
                    Step::Continue
                }
            }
            _ => Step::Mismatch {
                position: self.position,
            },
        }
    }
}

/// Check a whole response against `sequence`, stopping at the first mismatch.
///
/// An empty sequence matches without reading any keys.
pub fn check_all<I>(sequence: &Sequence, keys: I) -> Verdict
where
    I: IntoIterator<Item = Option<Color>>,
{
    let mut check = ResponseCheck::new(sequence);
    if check.is_complete() {
        return Verdict::Matched;
    }
    for key in keys {
        match check.accept(key) {
            Step::Continue => {}
            Step::Complete => return Verdict::Matched,
            Step::Mismatch { position } => return Verdict::Mismatch { position },
        }
    }
    Verdict::Incomplete {
        confirmed: check.confirmed(),
    }
}
