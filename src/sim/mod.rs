//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform code:
//! - Fixed per-tick physics
//! - Seeded RNG only
//! - No rendering, storage or input dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_collision};
pub use spawn::SpawnTimer;
pub use state::{GamePhase, GameState, Obstacle, ObstacleKind, Particle, Player};
pub use tick::{TickOutcome, tick};
