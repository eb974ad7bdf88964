//! Best-score tracking
//!
//! A single value, read once at startup and written at most once per run,
//! only when beaten.

use crate::consts::HIGH_SCORE_KEY;
use crate::persistence::ScoreStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    /// Storage key, shared by the whole page
    pub const STORAGE_KEY: &'static str = HIGH_SCORE_KEY;

    pub fn new(best: u32) -> Self {
        Self { best }
    }

    /// Load from `store`; absent is 0
    pub fn load<S: ScoreStore>(store: &S) -> Self {
        let best = store.get(Self::STORAGE_KEY).unwrap_or(0);
        log::info!("High score loaded: {}", best);
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Whether `score` beats the current best
    pub fn is_beaten_by(&self, score: f64) -> bool {
        score > f64::from(self.best)
    }

    /// Compare and, if beaten, record `floor(score)` and persist it
    ///
    /// Persistence failures are logged and swallowed. Returns whether the
    /// stored best went up.
    pub fn submit<S: ScoreStore>(&mut self, score: f64, store: &mut S) -> bool {
        if !self.is_beaten_by(score) {
            return false;
        }
        let previous = self.best;
        self.best = score.floor() as u32;
        if let Err(e) = store.set(Self::STORAGE_KEY, self.best) {
            log::warn!("Failed to save high score {}: {}", self.best, e);
        }
        self.best > previous
    }
}
