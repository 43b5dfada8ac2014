//! Puzzle dimensions.

use serde::{Deserialize, Serialize};

use crate::error::HanoiError;
use crate::stack::STACK_CAPACITY;

pub const MIN_PEGS: usize = 3;
pub const MAX_PEGS: usize = 25;
pub const MIN_DISCS: u32 = 3;
/// Bounded by the width of [`DiscStack`](crate::DiscStack).
pub const MAX_DISCS: u32 = STACK_CAPACITY;

/// Peg and disc counts for one puzzle.
///
/// Passed by value into [`Hanoi::new`](crate::Hanoi::new); the engine keeps
/// its own copy and reads no other configuration.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct HanoiConfig {
    pub pegs_n: usize,
    pub discs_n: u32,
}

impl HanoiConfig {
    #[inline]
    pub const fn new(pegs_n: usize, discs_n: u32) -> HanoiConfig {
        HanoiConfig { pegs_n, discs_n }
    }

    /// Check both counts against their supported ranges.
    pub fn validate(&self) -> Result<(), HanoiError> {
        if !(MIN_PEGS..=MAX_PEGS).contains(&self.pegs_n) {
            return Err(HanoiError::InvalidPegCount(self.pegs_n));
        }
        if !(MIN_DISCS..=MAX_DISCS).contains(&self.discs_n) {
            return Err(HanoiError::InvalidDiscCount(self.discs_n));
        }
        Ok(())
    }

    /// Bitset with one bit per disc: `{0, ..., discs_n - 1}`.
    ///
    /// Saturates at 32 discs instead of overflowing the shift.
    #[inline]
    pub fn full_mask(&self) -> u32 {
        match 1u32.checked_shl(self.discs_n) {
            Some(bit) => bit - 1,
            None => u32::MAX,
        }
    }
}

impl Default for HanoiConfig {
    fn default() -> Self {
        HanoiConfig::new(3, 3)
    }
}
