//! Axis-aligned box collision
//!
//! Discrete overlap test, evaluated once per tick. A fast enough obstacle
//! could step over the player between ticks; at current speeds it can't.

use glam::Vec2;

use super::state::Obstacle;

/// Axis-aligned bounding box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap; boxes sharing only an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Index of the first obstacle overlapping `player`, if any
pub fn first_collision(player: &Aabb, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| player.overlaps(&o.aabb()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;

    fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_pos_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&aabb(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&aabb(-5.0, -5.0, 30.0, 30.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&aabb(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&aabb(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_disjoint() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&aabb(20.0, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&aabb(0.0, -20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_first_collision_short_circuits() {
        let player = aabb(50.0, 310.0, 40.0, 40.0);
        let obstacles = vec![
            Obstacle::new(ObstacleKind::Cone, Vec2::new(300.0, 320.0), Vec2::new(30.0, 30.0)),
            Obstacle::new(ObstacleKind::Box, Vec2::new(60.0, 310.0), Vec2::new(30.0, 40.0)),
            Obstacle::new(ObstacleKind::Cone, Vec2::new(70.0, 320.0), Vec2::new(30.0, 30.0)),
        ];
        assert_eq!(first_collision(&player, &obstacles), Some(1));
        assert_eq!(first_collision(&player, &obstacles[..1]), None);
    }

    #[test]
    fn test_jump_clears_cone() {
        // Player bottom above the cone tip
        let player = aabb(50.0, 270.0, 40.0, 40.0);
        let cone = Obstacle::new(ObstacleKind::Cone, Vec2::new(60.0, 320.0), Vec2::new(30.0, 30.0));
        assert_eq!(first_collision(&player, &[cone]), None);
    }
}
