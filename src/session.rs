//! Game session: the aggregate root for one page lifetime
//!
//! Wraps the simulation state together with the high score and its store.
//! The session is created once at startup; only its fields reset between
//! runs.

use crate::highscores::HighScore;
use crate::persistence::ScoreStore;
use crate::renderer::Snapshot;
use crate::sim::{GamePhase, GameState, TickOutcome, tick};
use crate::tuning::Tuning;

/// Result of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Final score, floored for display
    pub score: u32,
    /// Best score after this run
    pub high_score: u32,
    /// Whether this run raised the best score
    pub new_high_score: bool,
}

pub struct GameSession<S: ScoreStore> {
    state: GameState,
    high_score: HighScore,
    store: S,
}

impl<S: ScoreStore> GameSession<S> {
    /// Create an idle session, reading the high score from `store`
    pub fn new(seed: u64, tuning: Tuning, store: S) -> Self {
        let high_score = HighScore::load(&store);
        Self {
            state: GameState::new(seed, tuning),
            high_score,
            store,
        }
    }

    /// Lay out against a viewport; call at load and on every resize
    pub fn configure(&mut self, width: f32, height: f32) {
        self.state.configure(width, height);
    }

    /// Begin a new run
    pub fn start(&mut self) {
        self.state.start();
        log::info!("Run started (high score {})", self.high_score.best());
    }

    /// Jump command from the input adapter
    ///
    /// Starts a run when none is in progress; otherwise jumps if grounded.
    pub fn jump(&mut self) {
        if self.state.phase.is_playing() {
            self.state.jump();
        } else {
            self.start();
        }
    }

    /// Advance one tick. Returns the run summary if the run ended this tick.
    pub fn advance(&mut self, dt_ms: f64) -> Option<RunSummary> {
        match tick(&mut self.state, dt_ms) {
            TickOutcome::Collision { obstacle } => {
                log::debug!("Collision with obstacle {}", obstacle);
                self.end()
            }
            TickOutcome::Continue | TickOutcome::Idle => None,
        }
    }

    /// End the current run and settle the high score
    ///
    /// Returns `None` if no run is in progress, so the high score is
    /// settled at most once per run.
    pub fn end(&mut self) -> Option<RunSummary> {
        let score = self.state.finish()?;
        let new_high_score = self.high_score.submit(score, &mut self.store);
        let summary = RunSummary {
            score: score.floor() as u32,
            high_score: self.high_score.best(),
            new_high_score,
        };
        if new_high_score {
            log::info!("Game over: score {} (new high score!)", summary.score);
        } else {
            log::info!("Game over: score {} (best {})", summary.score, summary.high_score);
        }
        Some(summary)
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state.phase.is_playing()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for tools and tests
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Cap live particles (0 disables the jump trail)
    pub fn set_particle_cap(&mut self, cap: usize) {
        self.state.max_particles = cap;
        if self.state.particles.len() > cap {
            let excess = self.state.particles.len() - cap;
            self.state.particles.drain(..excess);
        }
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.state.phase,
            player: &self.state.player,
            obstacles: &self.state.obstacles,
            particles: &self.state.particles,
            score: self.state.score.floor() as u32,
            high_score: self.high_score.best(),
            ground_height: self.state.ground_height,
            field_width: self.state.field_width,
        }
    }
}
