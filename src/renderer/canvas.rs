//! Canvas 2D renderer
//!
//! Draws the ground line, the rider, obstacles, the jump trail and the HUD.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Renderer, Snapshot, css_color};
use crate::sim::{GamePhase, Obstacle, ObstacleKind, Player};
use crate::ui;

const INK: &str = "#333";
const FRAME: &str = "#000";
const RIDER: &str = "#ff3333";
const DANGER: &str = "#ff0055";
const HUD_FONT: &str = "20px \"Space Grotesk\"";
const IDLE_VEIL: &str = "rgba(255, 255, 255, 0.8)";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Skip the airborne spin
    pub reduced_motion: bool,
}

impl CanvasRenderer {
    /// Fails when the canvas has no 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            reduced_motion: false,
        })
    }

    /// Match the drawing buffer to the parent's size; returns the new size
    pub fn fit_to_parent(&self) -> (f32, f32) {
        let (w, h) = match self.canvas.parent_element() {
            Some(parent) => (parent.client_width(), parent.client_height()),
            None => (self.canvas.client_width(), self.canvas.client_height()),
        };
        let (w, h) = (w.max(0) as u32, h.max(0) as u32);
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        (w as f32, h as f32)
    }

    fn circle(&self, x: f64, y: f64, r: f64, fill: bool) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, r, 0.0, TAU);
        if fill {
            self.ctx.fill();
        } else {
            self.ctx.stroke();
        }
    }

    fn draw_ground(&self, frame: &Snapshot<'_>) {
        let y = frame.ground_height as f64;
        self.ctx.begin_path();
        self.ctx.move_to(0.0, y);
        self.ctx.line_to(frame.field_width as f64, y);
        self.ctx.set_stroke_style_str(INK);
        self.ctx.set_line_width(2.0);
        self.ctx.stroke();
    }

    /// Stick-figure rider on a BMX, drawn around the player centre
    fn draw_rider(&self, player: &Player) {
        let ctx = &self.ctx;
        let center = player.pos + player.size / 2.0;
        ctx.save();
        let _ = ctx.translate(center.x as f64, center.y as f64);
        if !self.reduced_motion {
            let _ = ctx.rotate(player.rotation as f64);
        }

        ctx.set_fill_style_str(FRAME);
        ctx.set_stroke_style_str(FRAME);
        ctx.set_line_width(2.0);

        // Wheels
        self.circle(-15.0, 15.0, 9.0, false);
        self.circle(15.0, 15.0, 9.0, false);

        // Frame
        ctx.begin_path();
        ctx.move_to(-15.0, 15.0);
        ctx.line_to(-5.0, 5.0);
        ctx.line_to(10.0, 5.0);
        ctx.line_to(15.0, 15.0);
        ctx.move_to(-5.0, 5.0);
        ctx.line_to(-5.0, -5.0);
        ctx.line_to(10.0, 5.0);
        ctx.stroke();

        // Handlebars
        ctx.begin_path();
        ctx.move_to(10.0, 5.0);
        ctx.line_to(8.0, -8.0);
        ctx.line_to(12.0, -10.0);
        ctx.stroke();

        // Seat
        ctx.fill_rect(-8.0, -5.0, 6.0, 2.0);

        // Rider: back, arms, neck, leg
        ctx.set_stroke_style_str(RIDER);
        ctx.begin_path();
        ctx.move_to(-5.0, -5.0);
        ctx.line_to(0.0, -15.0);
        ctx.line_to(8.0, -8.0);
        ctx.move_to(0.0, -15.0);
        ctx.line_to(-5.0, -25.0);
        ctx.move_to(-5.0, -5.0);
        ctx.line_to(0.0, 10.0);
        ctx.stroke();

        ctx.set_fill_style_str(RIDER);
        self.circle(0.0, -20.0, 3.0, true);

        ctx.restore();
    }

    fn draw_obstacle(&self, obstacle: &Obstacle) {
        let pos = obstacle.pos();
        let size = obstacle.size();
        let (x, y, w, h) = (pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        self.ctx.set_fill_style_str(DANGER);
        match obstacle.kind() {
            ObstacleKind::Cone => {
                self.ctx.begin_path();
                self.ctx.move_to(x, y + h);
                self.ctx.line_to(x + w / 2.0, y);
                self.ctx.line_to(x + w, y + h);
                self.ctx.fill();
            }
            ObstacleKind::Box => self.ctx.fill_rect(x, y, w, h),
        }
    }

    fn draw_hud(&self, frame: &Snapshot<'_>) {
        self.ctx.set_fill_style_str(INK);
        self.ctx.set_font(HUD_FONT);
        let _ = self.ctx.fill_text(&ui::score_line(frame.score), 20.0, 30.0);
        let _ = self.ctx.fill_text(&ui::high_score_line(frame.high_score), 20.0, 60.0);
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, frame: &Snapshot<'_>) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        self.draw_ground(frame);
        self.draw_rider(frame.player);
        for obstacle in frame.obstacles {
            self.draw_obstacle(obstacle);
        }
        for particle in frame.particles {
            self.ctx.set_fill_style_str(&css_color(particle.color));
            self.circle(particle.pos.x as f64, particle.pos.y as f64, particle.size as f64, true);
        }
        self.draw_hud(frame);

        // Before the first run the overlay text sits on a light veil
        if frame.phase == GamePhase::Idle {
            self.ctx.set_fill_style_str(IDLE_VEIL);
            self.ctx.fill_rect(0.0, 0.0, w, h);
        }
    }
}
