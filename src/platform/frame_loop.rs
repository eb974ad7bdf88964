//! Frame loop driver
//!
//! The host calls [`FrameLoop::frame`] from its animation-frame callback and
//! only re-arms the callback while it returns [`LoopControl::Continue`]. The
//! loop is armed by a run starting and disarms itself when the run ends, so
//! nothing is scheduled while idle.

use crate::consts::{FRAME_MS, MAX_FRAME_MS};
use crate::persistence::ScoreStore;
use crate::renderer::Renderer;
use crate::session::{GameSession, RunSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Request another frame
    Continue,
    /// Stop requesting frames until re-armed
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    pub control: LoopControl,
    /// Set on the frame where the run ended
    pub ended: Option<RunSummary>,
}

#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    armed: bool,
    last_time: Option<f64>,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the loop. Returns true if the caller must request the first
    /// frame; false if a frame is already pending.
    pub fn arm(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        self.last_time = None;
        true
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Frames stepped since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame: one advance followed by one render
    ///
    /// `now_ms` is the host frame timestamp.
    pub fn frame<S, R>(
        &mut self,
        session: &mut GameSession<S>,
        renderer: &mut R,
        now_ms: f64,
    ) -> FrameResult
    where
        S: ScoreStore,
        R: Renderer + ?Sized,
    {
        if !self.armed || !session.is_playing() {
            self.disarm();
            return FrameResult {
                control: LoopControl::Stop,
                ended: None,
            };
        }

        let dt_ms = match self.last_time {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => FRAME_MS,
        };
        self.last_time = Some(now_ms);
        self.frames += 1;

        let ended = session.advance(dt_ms);
        renderer.render(&session.snapshot());

        if session.is_playing() {
            FrameResult {
                control: LoopControl::Continue,
                ended,
            }
        } else {
            self.disarm();
            FrameResult {
                control: LoopControl::Stop,
                ended,
            }
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
        self.last_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::renderer::Snapshot;
    use crate::sim::{GamePhase, Obstacle, ObstacleKind};
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<(GamePhase, u32)>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, frame: &Snapshot<'_>) {
            self.frames.push((frame.phase, frame.score));
        }
    }

    fn session_with(tuning: Tuning) -> GameSession<MemoryStore> {
        let mut session = GameSession::new(5, tuning, MemoryStore::new());
        session.configure(800.0, 400.0);
        session
    }

    fn session() -> GameSession<MemoryStore> {
        session_with(Tuning {
            spawn_min_ms: 1.0e12,
            ..Tuning::default()
        })
    }

    #[test]
    fn test_arm_once() {
        let mut frame_loop = FrameLoop::new();
        assert!(!frame_loop.is_armed());
        assert!(frame_loop.arm());
        assert!(!frame_loop.arm(), "second arm must not request another frame");
        assert!(frame_loop.is_armed());
    }

    #[test]
    fn test_idle_session_stops_without_rendering() {
        let mut session = session();
        let mut renderer = RecordingRenderer::default();
        let mut frame_loop = FrameLoop::new();
        frame_loop.arm();

        let result = frame_loop.frame(&mut session, &mut renderer, 0.0);
        assert_eq!(result.control, LoopControl::Stop);
        assert!(renderer.frames.is_empty());
        assert!(!frame_loop.is_armed());
    }

    #[test]
    fn test_one_advance_and_render_per_frame() {
        let mut session = session();
        let mut renderer = RecordingRenderer::default();
        let mut frame_loop = FrameLoop::new();
        session.start();
        frame_loop.arm();

        for i in 0..30 {
            let result = frame_loop.frame(&mut session, &mut renderer, i as f64 * FRAME_MS);
            assert_eq!(result.control, LoopControl::Continue);
            session.state_mut().obstacles.clear();
        }
        assert_eq!(renderer.frames.len(), 30);
        assert_eq!(session.state().time_ticks, 30);
        assert_eq!(frame_loop.frames(), 30);
    }

    #[test]
    fn test_game_over_stops_loop() {
        let mut session = session();
        let mut renderer = RecordingRenderer::default();
        let mut frame_loop = FrameLoop::new();
        session.start();
        frame_loop.arm();
        frame_loop.frame(&mut session, &mut renderer, 0.0);

        let ground = session.state().ground_height;
        session.state_mut().obstacles = vec![Obstacle::new(
            ObstacleKind::Box,
            Vec2::new(60.0, ground - 40.0),
            Vec2::new(30.0, 40.0),
        )];
        let result = frame_loop.frame(&mut session, &mut renderer, FRAME_MS);
        assert_eq!(result.control, LoopControl::Stop);
        assert!(result.ended.is_some());
        assert!(!frame_loop.is_armed());
        // The final frame is still drawn
        assert_eq!(renderer.frames.last().unwrap().0, GamePhase::GameOver);

        // A stray callback after stopping does nothing
        let result = frame_loop.frame(&mut session, &mut renderer, 2.0 * FRAME_MS);
        assert_eq!(result.control, LoopControl::Stop);
        assert_eq!(renderer.frames.len(), 2);

        // Next run re-arms
        session.jump();
        assert!(frame_loop.arm());
    }

    #[test]
    fn test_long_gap_clamped() {
        let mut session = session_with(Tuning::default());
        let mut renderer = RecordingRenderer::default();
        let mut frame_loop = FrameLoop::new();
        session.start();
        frame_loop.arm();
        frame_loop.frame(&mut session, &mut renderer, 0.0);
        session.state_mut().obstacles.clear();

        // A 10 s stall counts as one 100 ms frame for spawn pacing
        let result = frame_loop.frame(&mut session, &mut renderer, 10_000.0);
        assert_eq!(result.control, LoopControl::Continue);
        assert!(session.state().obstacles.is_empty());
    }
}
