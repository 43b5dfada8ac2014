//! Errors reported by the engine.

use thiserror::Error;

/// Why an engine operation was refused.
///
/// Whatever the variant, the engine state is unchanged when one of these is
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HanoiError {
    #[error("peg count {0} is outside the supported range 3..=25")]
    InvalidPegCount(usize),

    #[error("disc count {0} is outside the supported range 3..=32")]
    InvalidDiscCount(u32),

    #[error("peg {peg} does not exist (the puzzle has {pegs_n} pegs)")]
    PegOutOfRange { peg: usize, pegs_n: usize },

    #[error("disc {disc} does not exist (the puzzle has {discs_n} discs)")]
    DiscOutOfRange { disc: u32, discs_n: u32 },

    /// The destination's top disc is smaller than the one being moved.
    #[error("disc {disc} cannot be placed on the smaller disc {top}")]
    DiscTooLarge { disc: u32, top: u32 },

    /// The disc is either elsewhere or buried under a smaller disc.
    #[error("disc {disc} is not on top of peg {peg}")]
    NotOnTop { disc: u32, peg: usize },
}

impl HanoiError {
    /// True for construction errors: no engine exists and the caller must not
    /// go on. Every other variant is an ordinary rejected request.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            HanoiError::InvalidPegCount(_) | HanoiError::InvalidDiscCount(_)
        )
    }
}
