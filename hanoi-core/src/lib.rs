//! Tower of Hanoi rule engine with bit-based peg representation.
//!
//! # Peg Encoding (32-bit per peg)
//!
//! ```text
//! Bit i of a peg: disc of size i sits on it (0 = smallest)
//!
//! 3 pegs, 3 discs, initial state:
//!   peg 0 (A): 0b111   discs {0, 1, 2}, top = 0
//!   peg 1 (B): 0b000   empty
//!   peg 2 (C): 0b000   empty
//!
//! Full mask: (1 << discs_n) - 1, or u32::MAX for 32 discs
//! ```
//!
//! Every disc is on exactly one peg at all times. The puzzle is complete when
//! the last peg holds the full mask.
//!
//! # Moves
//!
//! [`Hanoi::try_move_disc`] checks before it mutates: the destination is read
//! first, then the source is popped with [`DiscStack::pop_if`], which only
//! changes anything on a match. A rejected move therefore leaves every peg
//! exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

pub mod config;
pub mod error;
pub mod stack;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{HanoiConfig, MAX_DISCS, MAX_PEGS, MIN_DISCS, MIN_PEGS};
pub use error::HanoiError;
pub use stack::{DiscStack, Discs, STACK_CAPACITY};

/// Letter naming a peg: `A` for peg 0, `B` for peg 1, ...
#[inline]
pub fn peg_label(peg: usize) -> Option<char> {
    if peg < MAX_PEGS {
        Some((b'A' + peg as u8) as char)
    } else {
        None
    }
}

/// Inverse of [`peg_label`]. Does not know the puzzle size; the engine still
/// bounds-checks the result.
#[inline]
pub fn peg_from_label(label: char) -> Option<usize> {
    if label.is_ascii_uppercase() {
        let peg = (label as u8 - b'A') as usize;
        (peg < MAX_PEGS).then_some(peg)
    } else {
        None
    }
}

/// One puzzle: a row of pegs and the discs on them.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Hanoi {
    config: HanoiConfig,
    pegs: Vec<DiscStack>,
    full_mask: DiscStack,
}

impl Hanoi {
    /// Create a puzzle with every disc on peg 0.
    ///
    /// Fails without producing an engine if either count is out of range.
    pub fn new(config: HanoiConfig) -> Result<Hanoi, HanoiError> {
        config.validate()?;

        let full_mask = DiscStack::from_bits(config.full_mask());
        let mut pegs = vec![DiscStack::new(); config.pegs_n];
        pegs[0].copy_from(&full_mask);

        info!(
            pegs_n = config.pegs_n,
            discs_n = config.discs_n,
            "puzzle created"
        );

        Ok(Hanoi {
            config,
            pegs,
            full_mask,
        })
    }

    /// Shorthand for [`Hanoi::new`] with explicit counts.
    #[inline]
    pub fn create(pegs_n: usize, discs_n: u32) -> Result<Hanoi, HanoiError> {
        Hanoi::new(HanoiConfig::new(pegs_n, discs_n))
    }

    /// Tear the puzzle down. Dropping the engine does the same.
    pub fn destroy(mut self) {
        for peg in &mut self.pegs {
            peg.destroy();
        }
    }

    // ========== Queries ==========

    #[inline]
    pub fn config(&self) -> HanoiConfig {
        self.config
    }

    #[inline]
    pub fn pegs_n(&self) -> usize {
        self.config.pegs_n
    }

    #[inline]
    pub fn discs_n(&self) -> u32 {
        self.config.discs_n
    }

    /// The set `{0, ..., discs_n - 1}`.
    #[inline]
    pub fn full_mask(&self) -> DiscStack {
        self.full_mask
    }

    /// Current state of every peg, indexed by peg.
    #[inline]
    pub fn pegs(&self) -> &[DiscStack] {
        &self.pegs
    }

    /// True iff the last peg holds every disc.
    #[inline]
    pub fn is_challenge_completed(&self) -> bool {
        self.pegs[self.config.pegs_n - 1] == self.full_mask
    }

    /// Independent copy of one peg.
    pub fn get_peg_copy(&self, peg: usize) -> Result<DiscStack, HanoiError> {
        self.check_peg(peg)?;

        let mut copy = DiscStack::new();
        copy.copy_from(&self.pegs[peg]);
        Ok(copy)
    }

    /// Peg currently holding `disc`, or None if the disc does not exist.
    pub fn locate(&self, disc: u32) -> Option<usize> {
        if disc >= self.config.discs_n {
            return None;
        }
        self.pegs.iter().position(|peg| peg.contains(disc))
    }

    /// Serializable picture of the whole puzzle.
    pub fn snapshot(&self) -> HanoiState {
        HanoiState {
            pegs_n: self.config.pegs_n,
            discs_n: self.config.discs_n,
            pegs: self.pegs.iter().map(|peg| peg.iter().collect()).collect(),
            completed: self.is_challenge_completed(),
        }
    }

    // ========== Moves ==========

    /// Move `disc` from `from_peg` to `to_peg`.
    ///
    /// A move is valid iff:
    /// - both pegs and the disc exist,
    /// - the disc is on `from_peg` and on its top,
    /// - `to_peg` is empty or its top is not smaller than the disc.
    ///
    /// Moving a top disc onto its own peg is accepted and changes nothing.
    /// On error the puzzle is untouched.
    pub fn try_move_disc(
        &mut self,
        disc: u32,
        from_peg: usize,
        to_peg: usize,
    ) -> Result<(), HanoiError> {
        self.check_peg(from_peg)?;
        self.check_peg(to_peg)?;
        self.check_disc(disc)?;

        // 1: disc must not be larger than the destination's top.
        // An empty destination accepts anything.
        if let Some(top) = self.pegs[to_peg].top() {
            if top < disc {
                trace!(disc, from_peg, to_peg, top, "move rejected: destination top is smaller");
                return Err(HanoiError::DiscTooLarge { disc, top });
            }
        }

        // 2: disc must be on from_peg, and on its top.
        // pop_if leaves the peg alone when it fails.
        if self.pegs[from_peg].pop_if(disc).is_none() {
            trace!(disc, from_peg, to_peg, "move rejected: disc not on top of source");
            return Err(HanoiError::NotOnTop {
                disc,
                peg: from_peg,
            });
        }

        // Order was checked above
        self.pegs[to_peg].add(disc);

        debug!(disc, from_peg, to_peg, "disc moved");
        Ok(())
    }

    #[inline]
    fn check_peg(&self, peg: usize) -> Result<(), HanoiError> {
        if peg >= self.config.pegs_n {
            return Err(HanoiError::PegOutOfRange {
                peg,
                pegs_n: self.config.pegs_n,
            });
        }
        Ok(())
    }

    #[inline]
    fn check_disc(&self, disc: u32) -> Result<(), HanoiError> {
        if disc >= self.config.discs_n {
            return Err(HanoiError::DiscOutOfRange {
                disc,
                discs_n: self.config.discs_n,
            });
        }
        Ok(())
    }
}

impl Default for Hanoi {
    fn default() -> Self {
        let config = HanoiConfig::default();
        let full_mask = DiscStack::from_bits(config.full_mask());
        let mut pegs = vec![DiscStack::new(); config.pegs_n];
        pegs[0] = full_mask;
        Hanoi {
            config,
            pegs,
            full_mask,
        }
    }
}

/// Renders one line per peg, discs listed bottom to top:
///
/// ```text
/// A: 2 1 0
/// B:
/// C:
/// ```
impl std::fmt::Display for Hanoi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, peg) in self.pegs.iter().enumerate() {
            let label = peg_label(i).unwrap_or('?');
            write!(f, "{}:", label)?;
            let discs: Vec<u32> = peg.iter().collect();
            for disc in discs.iter().rev() {
                write!(f, " {}", disc)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serializable view of a puzzle.
///
/// `pegs[i]` lists the discs on peg `i` from top (smallest) to bottom.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HanoiState {
    pub pegs_n: usize,
    pub discs_n: u32,
    pub pegs: Vec<Vec<u32>>,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(discs: &[u32]) -> DiscStack {
        discs.iter().copied().collect()
    }

    /// Recursive 3-peg solution, used only to drive the engine.
    fn solve(h: &mut Hanoi, n: u32, from: usize, to: usize, via: usize, moves: &mut u32) {
        if n == 0 {
            return;
        }
        solve(h, n - 1, from, via, to, moves);
        h.try_move_disc(n - 1, from, to).unwrap();
        *moves += 1;
        solve(h, n - 1, via, to, from, moves);
    }

    fn assert_conserved(h: &Hanoi) {
        let mut union = 0u32;
        for peg in h.pegs() {
            assert_eq!(union & peg.bits(), 0, "disc on two pegs: {:?}", h.pegs());
            union |= peg.bits();
        }
        assert_eq!(union, h.full_mask().bits(), "disc missing: {:?}", h.pegs());
    }

    // ========== Construction ==========

    #[test]
    fn test_create_initial_state() {
        let h = Hanoi::create(3, 3).unwrap();
        assert_eq!(h.pegs_n(), 3);
        assert_eq!(h.discs_n(), 3);
        assert_eq!(h.get_peg_copy(0).unwrap(), stack(&[0, 1, 2]));
        assert!(h.get_peg_copy(1).unwrap().is_empty());
        assert!(h.get_peg_copy(2).unwrap().is_empty());
        assert!(!h.is_challenge_completed());
        assert_conserved(&h);
    }

    #[test]
    fn test_create_boundaries() {
        assert!(Hanoi::create(3, 32).is_ok());
        assert!(Hanoi::create(25, 3).is_ok());
        assert_eq!(Hanoi::create(3, 33), Err(HanoiError::InvalidDiscCount(33)));
        assert_eq!(Hanoi::create(2, 3), Err(HanoiError::InvalidPegCount(2)));
        assert_eq!(Hanoi::create(26, 3), Err(HanoiError::InvalidPegCount(26)));
        assert_eq!(Hanoi::create(3, 2), Err(HanoiError::InvalidDiscCount(2)));
    }

    #[test]
    fn test_create_32_discs_full_mask() {
        let h = Hanoi::create(3, 32).unwrap();
        assert_eq!(h.full_mask().bits(), u32::MAX);
        assert_eq!(h.get_peg_copy(0).unwrap().len(), 32);
        assert_conserved(&h);
    }

    #[test]
    fn test_default_matches_create() {
        assert_eq!(Hanoi::default(), Hanoi::create(3, 3).unwrap());
    }

    #[test]
    fn test_destroy() {
        let h = Hanoi::create(4, 5).unwrap();
        h.destroy();
    }

    // ========== Queries ==========

    #[test]
    fn test_get_peg_copy_out_of_range() {
        let h = Hanoi::create(3, 3).unwrap();
        assert_eq!(
            h.get_peg_copy(3),
            Err(HanoiError::PegOutOfRange { peg: 3, pegs_n: 3 })
        );
    }

    #[test]
    fn test_get_peg_copy_is_snapshot() {
        let mut h = Hanoi::create(3, 3).unwrap();
        let mut snap = h.get_peg_copy(0).unwrap();

        // Draining the copy leaves the engine alone
        while snap.pop().is_some() {}
        assert_eq!(h.get_peg_copy(0).unwrap().len(), 3);

        // Moving leaves an earlier copy alone
        let before = h.get_peg_copy(0).unwrap();
        h.try_move_disc(0, 0, 1).unwrap();
        assert_eq!(before, stack(&[0, 1, 2]));
    }

    #[test]
    fn test_locate() {
        let mut h = Hanoi::create(3, 3).unwrap();
        assert_eq!(h.locate(2), Some(0));
        h.try_move_disc(0, 0, 2).unwrap();
        assert_eq!(h.locate(0), Some(2));
        assert_eq!(h.locate(3), None);
    }

    #[test]
    fn test_completion_requires_last_peg() {
        let mut h = Hanoi::create(3, 3).unwrap();
        let mut moves = 0;

        // All discs on the middle peg is not completion
        solve(&mut h, 3, 0, 1, 2, &mut moves);
        assert_eq!(h.get_peg_copy(1).unwrap(), h.full_mask());
        assert!(!h.is_challenge_completed());

        solve(&mut h, 3, 1, 2, 0, &mut moves);
        assert!(h.is_challenge_completed());
    }

    // ========== Moves ==========

    #[test]
    fn test_classic_three_disc_solution() {
        let mut h = Hanoi::create(3, 3).unwrap();
        let script = [
            (0, 0, 2),
            (1, 0, 1),
            (0, 2, 1),
            (2, 0, 2),
            (0, 1, 0),
            (1, 1, 2),
            (0, 0, 2),
        ];

        for (i, &(disc, from, to)) in script.iter().enumerate() {
            assert_eq!(h.try_move_disc(disc, from, to), Ok(()), "move {} failed", i);
            assert_conserved(&h);
        }

        assert!(h.get_peg_copy(0).unwrap().is_empty());
        assert!(h.get_peg_copy(1).unwrap().is_empty());
        assert_eq!(h.get_peg_copy(2).unwrap(), stack(&[0, 1, 2]));
        assert!(h.is_challenge_completed());
    }

    #[test]
    fn test_move_out_of_range() {
        let mut h = Hanoi::create(3, 3).unwrap();
        let before = h.clone();

        assert_eq!(
            h.try_move_disc(0, 3, 1),
            Err(HanoiError::PegOutOfRange { peg: 3, pegs_n: 3 })
        );
        assert_eq!(
            h.try_move_disc(0, 0, 7),
            Err(HanoiError::PegOutOfRange { peg: 7, pegs_n: 3 })
        );
        assert_eq!(
            h.try_move_disc(3, 0, 1),
            Err(HanoiError::DiscOutOfRange { disc: 3, discs_n: 3 })
        );
        assert_eq!(h, before);
    }

    #[test]
    fn test_move_buried_disc_rejected() {
        let mut h = Hanoi::create(3, 3).unwrap();
        let before = h.clone();
        assert_eq!(
            h.try_move_disc(1, 0, 1),
            Err(HanoiError::NotOnTop { disc: 1, peg: 0 })
        );
        assert_eq!(h, before);
    }

    #[test]
    fn test_move_from_wrong_peg_rejected() {
        let mut h = Hanoi::create(3, 3).unwrap();
        let before = h.clone();
        assert_eq!(
            h.try_move_disc(0, 1, 2),
            Err(HanoiError::NotOnTop { disc: 0, peg: 1 })
        );
        assert_eq!(h, before);
    }

    #[test]
    fn test_move_onto_smaller_rejected() {
        let mut h = Hanoi::create(3, 3).unwrap();
        h.try_move_disc(0, 0, 2).unwrap();
        let before = h.clone();

        // Disc 1 is now on top of peg 0, but peg 2 has disc 0
        assert_eq!(
            h.try_move_disc(1, 0, 2),
            Err(HanoiError::DiscTooLarge { disc: 1, top: 0 })
        );
        assert_eq!(h, before);
    }

    #[test]
    fn test_destination_checked_before_source() {
        let mut h = Hanoi::create(3, 3).unwrap();
        h.try_move_disc(0, 0, 2).unwrap();
        let before = h.clone();

        // Both checks fail: disc 2 is buried and peg 2's top is smaller.
        // The destination error wins and nothing was popped.
        assert_eq!(
            h.try_move_disc(2, 0, 2),
            Err(HanoiError::DiscTooLarge { disc: 2, top: 0 })
        );
        assert_eq!(h, before);
    }

    #[test]
    fn test_same_peg_move_is_noop() {
        let mut h = Hanoi::create(3, 3).unwrap();
        let before = h.clone();
        assert_eq!(h.try_move_disc(0, 0, 0), Ok(()));
        assert_eq!(h, before);

        // A buried disc still cannot "move" onto its own peg
        assert!(h.try_move_disc(2, 0, 0).is_err());
        assert_eq!(h, before);
    }

    #[test]
    fn test_onto_larger_accepted() {
        let mut h = Hanoi::create(3, 3).unwrap();
        h.try_move_disc(0, 0, 1).unwrap();
        h.try_move_disc(1, 0, 2).unwrap();
        assert_eq!(h.try_move_disc(0, 1, 2), Ok(()));
        assert_eq!(h.get_peg_copy(2).unwrap(), stack(&[0, 1]));
    }

    #[test]
    fn test_full_solve_ten_discs() {
        let mut h = Hanoi::create(3, 10).unwrap();
        let mut moves = 0;
        solve(&mut h, 10, 0, 2, 1, &mut moves);
        assert_eq!(moves, (1 << 10) - 1);
        assert!(h.is_challenge_completed());
        assert_conserved(&h);
    }

    #[test]
    fn test_full_solve_many_pegs() {
        // Extra pegs are just unused by the 3-peg solution
        let mut h = Hanoi::create(25, 5).unwrap();
        let mut moves = 0;
        solve(&mut h, 5, 0, 24, 12, &mut moves);
        assert!(h.is_challenge_completed());
    }

    // ========== Randomized ==========

    #[test]
    fn test_random_walk_conservation_and_atomicity() {
        use rand::prelude::*;

        let mut rng = rand::rng();

        for _ in 0..50 {
            let pegs_n = rng.random_range(3..=6);
            let discs_n = rng.random_range(3..=8);
            let mut h = Hanoi::create(pegs_n, discs_n).unwrap();

            for _ in 0..300 {
                // Occasionally ask for things that do not exist
                let disc = rng.random_range(0..discs_n + 1);
                let from = rng.random_range(0..pegs_n + 1);
                let to = rng.random_range(0..pegs_n + 1);

                let before = h.clone();
                let legal = from < pegs_n
                    && to < pegs_n
                    && h.pegs()[from].top() == Some(disc)
                    && h.pegs()[to].top().map_or(true, |top| top >= disc);

                let result = h.try_move_disc(disc, from, to);
                assert_eq!(result.is_ok(), legal, "disc={} {}->{} on {:?}", disc, from, to, before.pegs());

                if result.is_err() {
                    assert_eq!(h, before, "rejected move changed state");
                } else if from == to {
                    assert_eq!(h, before, "same-peg move changed state");
                } else {
                    assert_eq!(h.locate(disc), Some(to));
                }
                assert_conserved(&h);
            }
        }
    }

    #[test]
    fn test_random_walk_pegs_stay_ordered() {
        use rand::prelude::*;

        let mut rng = rand::rng();
        let mut h = Hanoi::create(4, 6).unwrap();

        for _ in 0..1000 {
            let from = rng.random_range(0..4);
            let to = rng.random_range(0..4);
            if let Some(disc) = h.pegs()[from].top() {
                let _ = h.try_move_disc(disc, from, to);
            }

            // Only legal moves are applied, so each peg is a valid stack:
            // rebuilding it bottom-up with push must always succeed.
            for peg in h.pegs() {
                let discs: Vec<u32> = peg.iter().collect();
                let mut rebuilt = DiscStack::new();
                for &d in discs.iter().rev() {
                    assert!(rebuilt.push(d).is_some());
                }
                assert_eq!(rebuilt, *peg);
            }
        }
    }

    // ========== Labels, display, snapshot ==========

    #[test]
    fn test_peg_labels() {
        assert_eq!(peg_label(0), Some('A'));
        assert_eq!(peg_label(24), Some('Y'));
        assert_eq!(peg_label(25), None);
        assert_eq!(peg_from_label('A'), Some(0));
        assert_eq!(peg_from_label('C'), Some(2));
        assert_eq!(peg_from_label('Y'), Some(24));
        assert_eq!(peg_from_label('Z'), None);
        assert_eq!(peg_from_label('a'), None);
        assert_eq!(peg_from_label('0'), None);
    }

    #[test]
    fn test_display() {
        let mut h = Hanoi::create(3, 3).unwrap();
        h.try_move_disc(0, 0, 2).unwrap();
        assert_eq!(h.to_string(), "A: 2 1\nB:\nC: 0\n");
    }

    #[test]
    fn test_snapshot() {
        let mut h = Hanoi::create(3, 3).unwrap();
        h.try_move_disc(0, 0, 1).unwrap();

        let state = h.snapshot();
        assert_eq!(state.pegs, vec![vec![1, 2], vec![0], vec![]]);
        assert!(!state.completed);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["pegs_n"], 3);
        assert_eq!(json["pegs"][0], serde_json::json!([1, 2]));
        assert_eq!(json["completed"], false);
    }
}
