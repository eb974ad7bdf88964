//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`]. High score bookkeeping
//! sits one level up in [`crate::session`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::spawn::SpawnTimer;
use crate::consts::PARTICLE_COLOR;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Page loaded, no run yet
    Idle,
    /// A run is in progress
    Running,
    /// The last run hit an obstacle
    GameOver,
}

impl GamePhase {
    #[inline]
    pub fn is_playing(self) -> bool {
        self == GamePhase::Running
    }
}

/// The rider
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = falling)
    pub dy: f32,
    pub grounded: bool,
    /// Airborne spin in radians, cosmetic only
    pub rotation: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, 0.0),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            dy: 0.0,
            grounded: true,
            rotation: 0.0,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Rest on the ground with the bottom edge at `ground`
    pub fn land(&mut self, ground: f32) {
        self.pos.y = ground - self.size.y;
        self.dy = 0.0;
        self.grounded = true;
        self.rotation = 0.0;
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Cone,
    Box,
}

/// An obstacle scrolling toward the player
///
/// Only `x` changes after creation, so the fields stay private.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    kind: ObstacleKind,
    pos: Vec2,
    size: Vec2,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, pos: Vec2, size: Vec2) -> Self {
        Self { kind, pos, size }
    }

    /// Obstacle of `kind` at the right edge of the field, base on the ground line
    pub fn spawn(kind: ObstacleKind, field_width: f32, ground: f32, tuning: &Tuning) -> Self {
        let height = match kind {
            ObstacleKind::Cone => tuning.cone_height,
            ObstacleKind::Box => tuning.box_height,
        };
        Self::new(
            kind,
            Vec2::new(field_width, ground - height),
            Vec2::new(tuning.obstacle_width, height),
        )
    }

    #[inline]
    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Scroll left by `speed`
    pub fn scroll(&mut self, speed: f32) {
        self.pos.x -= speed;
    }

    /// True once the right edge has passed the left edge of the field
    pub fn is_off_field(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// A jump-trail particle
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// 0xRRGGBB
    pub color: u32,
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed of the random source
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    pub particles: Vec<Particle>,
    pub score: f64,
    pub game_speed: f64,
    /// y of the ground line
    pub ground_height: f32,
    /// Width of the play field
    pub field_width: f32,
    /// Ticks since the current run started
    pub time_ticks: u64,
    /// Upper bound on live particles (0 disables the jump trail)
    pub max_particles: usize,
    pub tuning: Tuning,
    spawn: SpawnTimer,
    rng: Pcg32,
}

impl GameState {
    /// Create an idle state; call [`GameState::configure`] before the first run
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            particles: Vec::new(),
            score: 0.0,
            game_speed: tuning.initial_speed,
            ground_height: 0.0,
            field_width: 0.0,
            time_ticks: 0,
            max_particles: usize::MAX,
            tuning,
            spawn: SpawnTimer::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Recompute layout from the viewport size
    ///
    /// A grounded or idle player is snapped onto the new ground line. An
    /// airborne player mid-run keeps its height unless the new ground would
    /// put it below the line, in which case it lands.
    pub fn configure(&mut self, width: f32, height: f32) {
        self.field_width = width;
        self.ground_height = height - self.tuning.ground_margin;

        let ground = self.ground_height;
        if self.phase.is_playing() && !self.player.grounded {
            if self.player.bottom() > ground {
                self.player.land(ground);
            }
        } else {
            self.player.land(ground);
        }
    }

    /// Reset the run and enter `Running`
    pub fn start(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0.0;
        self.game_speed = self.tuning.initial_speed;
        self.obstacles.clear();
        self.time_ticks = 0;
        self.spawn.reset();
    }

    /// Jump if running and grounded. Returns whether a jump happened.
    pub fn jump(&mut self) -> bool {
        if !self.phase.is_playing() || !self.player.grounded {
            return false;
        }
        self.player.dy = -self.tuning.jump_force;
        self.player.grounded = false;

        let origin = Vec2::new(self.player.pos.x + 10.0, self.player.bottom());
        self.emit_burst(origin);
        true
    }

    /// Leave `Running` for `GameOver`, returning the final score
    ///
    /// Returns `None` when no run is in progress.
    pub fn finish(&mut self) -> Option<f64> {
        if !self.phase.is_playing() {
            return None;
        }
        self.phase = GamePhase::GameOver;
        Some(self.score)
    }

    /// Push a new obstacle of random kind at the right edge
    pub fn spawn_obstacle(&mut self) -> ObstacleKind {
        let kind = if self.rng.random_bool(0.5) {
            ObstacleKind::Cone
        } else {
            ObstacleKind::Box
        };
        self.obstacles.push(Obstacle::spawn(
            kind,
            self.field_width,
            self.ground_height,
            &self.tuning,
        ));
        log::debug!("Spawned {:?} at tick {}", kind, self.time_ticks);
        kind
    }

    /// Feed wall-clock time to the spawn timer; true when an obstacle is due
    pub fn spawn_due(&mut self, dt_ms: f64) -> bool {
        self.spawn.update(dt_ms, &mut self.rng, &self.tuning)
    }

    /// Emit the jump trail at `origin`, dropping the oldest particles past the cap
    pub fn emit_burst(&mut self, origin: Vec2) {
        if self.max_particles == 0 {
            return;
        }
        for _ in 0..self.tuning.burst_count {
            let size = self.rng.random_range(1.0..4.0);
            let vel = Vec2::new(
                self.rng.random_range(-1.0..1.0),
                -self.rng.random::<f32>() * 2.0,
            );
            self.particles.push(Particle {
                pos: origin,
                vel,
                size,
                color: PARTICLE_COLOR,
            });
        }
        if self.particles.len() > self.max_particles {
            let excess = self.particles.len() - self.max_particles;
            self.particles.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Tuning::default());
        state.configure(800.0, 400.0);
        state
    }

    #[test]
    fn test_configure_places_player_on_ground() {
        let state = configured(1);
        assert_eq!(state.ground_height, 350.0);
        assert_eq!(state.player.pos.y, 310.0);
        assert_eq!(state.player.bottom(), state.ground_height);
        assert!(state.player.grounded);
    }

    #[test]
    fn test_configure_idempotent_while_idle() {
        let mut state = configured(1);
        let first = state.player.pos;
        state.configure(800.0, 400.0);
        state.configure(800.0, 400.0);
        assert_eq!(state.player.pos, first);
    }

    #[test]
    fn test_configure_keeps_airborne_height_when_ground_drops() {
        let mut state = configured(1);
        state.start();
        assert!(state.jump());
        state.player.pos.y = 200.0;

        // Taller viewport: ground moves down, player stays mid-air
        state.configure(800.0, 600.0);
        assert_eq!(state.player.pos.y, 200.0);
        assert!(!state.player.grounded);
    }

    #[test]
    fn test_configure_lands_airborne_player_when_ground_rises() {
        let mut state = configured(1);
        state.start();
        assert!(state.jump());
        state.player.pos.y = 200.0;

        // Ground at 150: the player would be below it
        state.configure(800.0, 200.0);
        assert_eq!(state.player.bottom(), 150.0);
        assert!(state.player.grounded);
        assert_eq!(state.player.dy, 0.0);
        assert_eq!(state.player.rotation, 0.0);
    }

    #[test]
    fn test_start_resets_run() {
        let mut state = configured(7);
        state.start();
        state.score = 42.0;
        state.game_speed = 9.0;
        state.spawn_obstacle();
        state.phase = GamePhase::GameOver;

        state.start();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.game_speed, 5.0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_jump_requires_running_and_grounded() {
        let mut state = configured(3);
        assert!(!state.jump(), "idle state must not jump");

        state.start();
        assert!(state.jump());
        assert_eq!(state.player.dy, -12.0);
        assert!(!state.player.grounded);

        // No double jump
        state.player.dy = -3.0;
        assert!(!state.jump());
        assert_eq!(state.player.dy, -3.0);
    }

    #[test]
    fn test_jump_emits_burst_at_player_base() {
        let mut state = configured(3);
        state.start();
        state.jump();
        assert_eq!(state.particles.len(), 5);
        for p in &state.particles {
            assert_eq!(p.pos, Vec2::new(60.0, 350.0));
            assert!((1.0..4.0).contains(&p.size));
            assert!((-1.0..1.0).contains(&p.vel.x));
            assert!(p.vel.y <= 0.0 && p.vel.y > -2.0);
            assert_eq!(p.color, 0x333333);
        }
    }

    #[test]
    fn test_burst_respects_particle_cap() {
        let mut state = configured(3);
        state.max_particles = 8;
        state.emit_burst(Vec2::ZERO);
        state.emit_burst(Vec2::ONE);
        assert_eq!(state.particles.len(), 8);
        // Oldest dropped first
        assert_eq!(state.particles.last().unwrap().pos, Vec2::ONE);

        state.max_particles = 0;
        state.particles.clear();
        state.emit_burst(Vec2::ZERO);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_spawned_obstacle_sits_on_ground() {
        let mut state = configured(11);
        for _ in 0..20 {
            let kind = state.spawn_obstacle();
            let obstacle = state.obstacles.last().unwrap();
            assert_eq!(obstacle.kind(), kind);
            assert_eq!(obstacle.pos().x, 800.0);
            assert_eq!(obstacle.pos().y + obstacle.size().y, state.ground_height);
            assert_eq!(obstacle.size().x, 30.0);
            let expected_height = match kind {
                ObstacleKind::Cone => 30.0,
                ObstacleKind::Box => 40.0,
            };
            assert_eq!(obstacle.size().y, expected_height);
        }
    }

    #[test]
    fn test_both_kinds_spawn() {
        let mut state = configured(5);
        let kinds: Vec<_> = (0..64).map(|_| state.spawn_obstacle()).collect();
        assert!(kinds.contains(&ObstacleKind::Cone));
        assert!(kinds.contains(&ObstacleKind::Box));
    }

    #[test]
    fn test_finish_only_once() {
        let mut state = configured(5);
        assert_eq!(state.finish(), None);
        state.start();
        state.score = 3.5;
        assert_eq!(state.finish(), Some(3.5));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.finish(), None);
    }
}
