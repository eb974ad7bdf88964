//! Data-driven game balance
//!
//! Every gameplay constant in one serializable struct. Missing fields fall
//! back to the defaults in [`crate::consts`], so partial overrides work.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub ground_margin: f32,

    pub gravity: f32,
    pub jump_force: f32,
    pub spin_per_tick: f32,

    pub initial_speed: f64,
    pub speed_ramp: f64,
    pub score_per_tick: f64,

    pub obstacle_width: f32,
    pub cone_height: f32,
    pub box_height: f32,
    pub spawn_min_ms: f64,
    pub spawn_jitter_ms: f64,

    pub burst_count: usize,
    pub particle_decay: f32,
    pub particle_min_size: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            ground_margin: GROUND_MARGIN,

            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            spin_per_tick: SPIN_PER_TICK,

            initial_speed: INITIAL_SPEED,
            speed_ramp: SPEED_RAMP,
            score_per_tick: SCORE_PER_TICK,

            obstacle_width: OBSTACLE_WIDTH,
            cone_height: CONE_HEIGHT,
            box_height: BOX_HEIGHT,
            spawn_min_ms: SPAWN_MIN_MS,
            spawn_jitter_ms: SPAWN_JITTER_MS,

            burst_count: BURST_COUNT,
            particle_decay: PARTICLE_DECAY,
            particle_min_size: PARTICLE_MIN_SIZE,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
