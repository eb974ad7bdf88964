//! Ride or Die - An endless BMX obstacle runner
//!
//! Core modules:
//! - `sim`: Simulation core (physics, spawning, collisions, run state)
//! - `session`: Game session aggregate (run lifecycle + high score)
//! - `renderer`: Read-only frame snapshots and the canvas renderer
//! - `platform`: Input mapping and the frame loop driver
//! - `persistence`: High score storage backends
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use highscores::HighScore;
pub use session::{GameSession, RunSummary};
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal frame duration (host refresh is ~60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Longest frame gap fed to the spawn timer (tab switches, stalls)
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Player box, anchored at a fixed horizontal offset
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// Distance between the bottom of the viewport and the ground line
    pub const GROUND_MARGIN: f32 = 50.0;

    /// Vertical physics (units per tick)
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_FORCE: f32 = 12.0;
    /// Airborne spin (radians per tick, cosmetic)
    pub const SPIN_PER_TICK: f32 = 0.1;

    /// Difficulty ramp
    pub const INITIAL_SPEED: f64 = 5.0;
    pub const SPEED_RAMP: f64 = 0.003;
    pub const SCORE_PER_TICK: f64 = 0.1;

    /// Obstacles
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const CONE_HEIGHT: f32 = 30.0;
    pub const BOX_HEIGHT: f32 = 40.0;
    /// Spawn interval is drawn from [SPAWN_MIN_MS, SPAWN_MIN_MS + SPAWN_JITTER_MS)
    pub const SPAWN_MIN_MS: f64 = 1500.0;
    pub const SPAWN_JITTER_MS: f64 = 1000.0;

    /// Jump trail particles
    pub const BURST_COUNT: usize = 5;
    pub const PARTICLE_DECAY: f32 = 0.95;
    pub const PARTICLE_MIN_SIZE: f32 = 0.1;
    pub const PARTICLE_COLOR: u32 = 0x333333;

    /// LocalStorage key for the persisted high score
    pub const HIGH_SCORE_KEY: &str = "bmxHighScore";
}
