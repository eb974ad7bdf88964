//! Obstacle spawn timing
//!
//! Spawns are paced by wall-clock time, not ticks: a spawn fires once the
//! time since the previous one exceeds a threshold drawn fresh from
//! `[spawn_min_ms, spawn_min_ms + spawn_jitter_ms)` after every spawn.

use rand::Rng;

use crate::tuning::Tuning;

#[derive(Debug, Clone, Default)]
pub struct SpawnTimer {
    /// `None` until the first spawn of a run, which fires immediately
    since_last_ms: Option<f64>,
    threshold_ms: f64,
}

impl SpawnTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous spawn so the next update fires
    pub fn reset(&mut self) {
        self.since_last_ms = None;
    }

    /// Current threshold (meaningful after the first spawn)
    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    /// Advance by `dt_ms`; returns true when a spawn is due
    pub fn update<R: Rng>(&mut self, dt_ms: f64, rng: &mut R, tuning: &Tuning) -> bool {
        let due = match self.since_last_ms {
            None => true,
            Some(elapsed) => {
                let elapsed = elapsed + dt_ms.max(0.0);
                self.since_last_ms = Some(elapsed);
                elapsed > self.threshold_ms
            }
        };
        if due {
            self.since_last_ms = Some(0.0);
            self.threshold_ms = tuning.spawn_min_ms + rng.random::<f64>() * tuning.spawn_jitter_ms;
        }
        due
    }
}
