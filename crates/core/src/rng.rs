//! RNG module - LCG plus the seed sources used at the start of each round
//!
//! Every round builds a fresh [`SimpleRng`] from a [`SeedSource`](crate::ports::SeedSource).
//! The game seeds from the wall clock in whole seconds, so two rounds started
//! within the same second replay the same colors. Tests substitute [`FixedSeed`].

use std::time::{SystemTime, UNIX_EPOCH};

use crate::ports::SeedSource;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Scale from the high bits: the low bits of a power-of-two LCG cycle with
        // period 2^k, so `% 4` alone would repeat every four draws.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Seeds each round from the current Unix time in whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClockSeed;

impl SeedSource for WallClockSeed {
    fn seed(&mut self) -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0)
    }
}

/// Hands out the same seed every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub u32);

impl SeedSource for FixedSeed {
    fn seed(&mut self) -> u32 {
        self.0
    }
}
