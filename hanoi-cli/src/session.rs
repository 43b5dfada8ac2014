//! The engine shared behind one lock.
//!
//! Every operation holds the mutex for its whole duration, so a listing can
//! never observe a disc between the source pop and the destination add.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hanoi_core::{Hanoi, HanoiState};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::CliResult;
use crate::namespace::{self, Attr, Relocation};

/// Result of an accepted move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    pub relocation: Relocation,
    /// This move is the one that finished the puzzle.
    pub just_completed: bool,
}

/// Shared puzzle state. Cloning shares the same engine.
#[derive(Clone)]
pub struct Session {
    engine: Arc<Mutex<Hanoi>>,
    message: Arc<str>,
}

impl Session {
    pub fn new(config: &AppConfig) -> CliResult<Session> {
        let engine = Hanoi::new(config.puzzle)?;
        Ok(Session {
            engine: Arc::new(Mutex::new(engine)),
            message: Arc::from(config.message.as_str()),
        })
    }

    /// Completion message from the configuration.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn lock(&self) -> MutexGuard<'_, Hanoi> {
        // Every engine failure path is side-effect free, so the state behind
        // a poisoned lock is still consistent.
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self, path: &str) -> CliResult<Vec<String>> {
        let h = self.lock();
        let node = namespace::resolve(path, &h)?;
        namespace::list(node, path, &h)
    }

    pub fn stat(&self, path: &str) -> CliResult<Attr> {
        let h = self.lock();
        let node = namespace::resolve(path, &h)?;
        Ok(namespace::attr(node, &h))
    }

    /// `mv SRC DST`: exactly one engine move.
    pub fn rename(&self, src: &str, dst: &str) -> CliResult<MoveOutcome> {
        let mut h = self.lock();
        let relocation = namespace::relocation(src, dst, &h)?;
        Self::apply(&mut h, relocation)
    }

    /// Move by disc number and peg index.
    pub fn move_disc(&self, disc: u32, from: usize, to: usize) -> CliResult<MoveOutcome> {
        let mut h = self.lock();
        Self::apply(&mut h, Relocation { disc, from, to })
    }

    fn apply(h: &mut Hanoi, relocation: Relocation) -> CliResult<MoveOutcome> {
        let was_completed = h.is_challenge_completed();
        h.try_move_disc(relocation.disc, relocation.from, relocation.to)?;

        let just_completed = !was_completed && h.is_challenge_completed();
        if just_completed {
            info!("puzzle completed");
        } else {
            debug!(?relocation, "move applied");
        }

        Ok(MoveOutcome {
            relocation,
            just_completed,
        })
    }

    pub fn is_completed(&self) -> bool {
        self.lock().is_challenge_completed()
    }

    pub fn state(&self) -> HanoiState {
        self.lock().snapshot()
    }

    /// Text rendering, one line per peg, bottom to top.
    pub fn render(&self) -> String {
        self.lock().to_string()
    }
}
