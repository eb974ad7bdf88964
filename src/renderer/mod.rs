//! Rendering module
//!
//! The simulation hands a borrowed [`Snapshot`] to a [`Renderer`] once per
//! frame. Renderers only draw; they cannot reach back into the session.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::{GamePhase, Obstacle, Particle, Player};

/// Read-only view of a session for one frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub player: &'a Player,
    /// Oldest first
    pub obstacles: &'a [Obstacle],
    pub particles: &'a [Particle],
    /// Current score, floored
    pub score: u32,
    pub high_score: u32,
    pub ground_height: f32,
    pub field_width: f32,
}

pub trait Renderer {
    fn render(&mut self, frame: &Snapshot<'_>);
}

/// CSS colour string for a packed 0xRRGGBB value
pub fn css_color(rgb: u32) -> String {
    format!("#{:06x}", rgb & 0xFF_FFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(0x333333), "#333333");
        assert_eq!(css_color(0xff0055), "#ff0055");
        assert_eq!(css_color(0x1), "#000001");
    }
}
