//! Per-frame simulation tick
//!
//! Physics, scoring and the speed ramp advance by fixed amounts per tick, so
//! game speed follows the host frame rate. Only obstacle spawning looks at
//! elapsed wall-clock time.

use super::collision::first_collision;
use super::state::{GameState, Obstacle, Particle, Player};
use crate::tuning::Tuning;

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No run in progress; nothing was simulated
    Idle,
    /// Run continues
    Continue,
    /// Player hit the obstacle at this index; the run must end
    Collision { obstacle: usize },
}

/// Advance the game state by one tick
///
/// `dt_ms` is the wall-clock time since the previous tick, used only for
/// spawn pacing.
pub fn tick(state: &mut GameState, dt_ms: f64) -> TickOutcome {
    if !state.phase.is_playing() {
        return TickOutcome::Idle;
    }
    state.time_ticks += 1;

    step_player(&mut state.player, state.ground_height, &state.tuning);

    // Difficulty ramp
    state.game_speed += state.tuning.speed_ramp;
    state.score += state.tuning.score_per_tick;

    if state.spawn_due(dt_ms) {
        state.spawn_obstacle();
    }

    scroll_obstacles(&mut state.obstacles, state.game_speed as f32);

    if let Some(obstacle) = first_collision(&state.player.aabb(), &state.obstacles) {
        return TickOutcome::Collision { obstacle };
    }

    step_particles(&mut state.particles, &state.tuning);

    TickOutcome::Continue
}

/// Gravity, integration and ground clamp
pub fn step_player(player: &mut Player, ground: f32, tuning: &Tuning) {
    player.dy += tuning.gravity;
    player.pos.y += player.dy;

    if player.bottom() > ground {
        player.land(ground);
    } else {
        player.rotation += tuning.spin_per_tick;
    }
}

/// Move obstacles left and drop those fully past the left edge
pub fn scroll_obstacles(obstacles: &mut Vec<Obstacle>, speed: f32) {
    for obstacle in obstacles.iter_mut() {
        obstacle.scroll(speed);
    }
    obstacles.retain(|o| !o.is_off_field());
}

/// Drift and shrink particles, dropping the ones that have faded
pub fn step_particles(particles: &mut Vec<Particle>, tuning: &Tuning) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.size *= tuning.particle_decay;
    }
    particles.retain(|p| p.size >= tuning.particle_min_size);
}
