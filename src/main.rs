//! Ride or Die entry point
//!
//! On the web: binds the session to the `#bmx-game` canvas, wires input and
//! resize events, and drives the frame loop. Natively: runs a headless
//! autopilot run as a smoke test of the simulation.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        AddEventListenerOptions, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent,
        TouchEvent,
    };

    use ride_or_die::persistence::LocalStorageStore;
    use ride_or_die::platform::{FrameLoop, InputCommand, InputEvent, LoopControl};
    use ride_or_die::renderer::{CanvasRenderer, Renderer};
    use ride_or_die::ui::{self, Language};
    use ride_or_die::{GameSession, RunSummary, Settings, Tuning};

    const CANVAS_ID: &str = "bmx-game";
    const OVERLAY_ID: &str = "game-overlay";

    /// Everything the browser callbacks share
    struct Game {
        session: GameSession<LocalStorageStore>,
        renderer: CanvasRenderer,
        frame_loop: FrameLoop,
        settings: Settings,
    }

    impl Game {
        /// Apply an input; returns true if the caller must request a frame
        fn handle(&mut self, event: InputEvent<'_>) -> bool {
            match event.command() {
                Some(InputCommand::Jump) => {
                    self.session.jump();
                    if self.session.is_playing() {
                        hide_overlay();
                        self.frame_loop.arm()
                    } else {
                        false
                    }
                }
                None => false,
            }
        }

        /// Refit the canvas and relayout; redraw if the loop is not running
        fn resize(&mut self) {
            let (w, h) = self.renderer.fit_to_parent();
            self.session.configure(w, h);
            if !self.frame_loop.is_armed() {
                self.renderer.render(&self.session.snapshot());
            }
        }

        fn language(&self) -> Language {
            page_language().unwrap_or(self.settings.language)
        }

        fn show_game_over(&self, summary: &RunSummary) {
            show_overlay(&ui::game_over_html(
                self.language(),
                summary.score,
                summary.new_high_score,
            ));
        }
    }

    /// Language declared on `<html lang>`
    fn page_language() -> Option<Language> {
        let lang = web_sys::window()?
            .document()?
            .document_element()?
            .get_attribute("lang")?;
        Language::from_tag(&lang)
    }

    fn overlay() -> Option<HtmlElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(OVERLAY_ID)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn show_overlay(html: &str) {
        if let Some(el) = overlay() {
            el.set_inner_html(html);
            let _ = el.style().set_property("display", "flex");
        }
    }

    fn hide_overlay() {
        if let Some(el) = overlay() {
            let _ = el.style().set_property("display", "none");
        }
    }

    /// Optional JSON balance override on the canvas `data-tuning` attribute
    fn load_tuning(canvas: &HtmlCanvasElement) -> Tuning {
        match canvas.get_attribute("data-tuning") {
            Some(json) => match Tuning::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Using tuning override from data-tuning");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring invalid data-tuning: {}", e);
                    Tuning::default()
                }
            },
            None => Tuning::default(),
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Ride or Die starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // No canvas, no game
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("no game canvas")?
            .dyn_into()?;
        let mut renderer = CanvasRenderer::new(canvas.clone())?;

        let settings = Settings::load();
        renderer.reduced_motion = settings.reduced_motion;
        log::info!(
            "Quality {}, particle cap {}",
            settings.quality.as_str(),
            settings.max_particles()
        );

        let seed = js_sys::Date::now() as u64;
        let mut session = GameSession::new(seed, load_tuning(&canvas), LocalStorageStore::new());
        session.set_particle_cap(settings.max_particles());
        log::info!("Session created with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            renderer,
            frame_loop: FrameLoop::new(),
            settings,
        }));

        {
            let mut g = game.borrow_mut();
            g.resize();
            let lang = g.language();
            log::info!("Overlay language: {}", lang.as_str());
            show_overlay(&ui::start_overlay_html(lang));
        }

        setup_input_handlers(&canvas, game.clone())?;
        setup_resize(game)?;

        log::info!("Ride or Die ready");
        Ok(())
    }

    fn dispatch(game: &Rc<RefCell<Game>>, event: InputEvent<'_>) {
        let needs_frame = game.borrow_mut().handle(event);
        if needs_frame {
            request_animation_frame(game.clone());
        }
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                let input = InputEvent::Key(&code);
                if input.suppresses_default() {
                    event.prevent_default();
                }
                dispatch(&game, input);
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start (non-passive so the tap does not scroll or zoom)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let input = InputEvent::Tap;
                if input.suppresses_default() {
                    event.prevent_default();
                }
                dispatch(&game, input);
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            canvas.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        // Click
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                dispatch(&game, InputEvent::Click);
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let result = {
            let mut g = game.borrow_mut();
            let Game {
                session,
                renderer,
                frame_loop,
                ..
            } = &mut *g;
            frame_loop.frame(session, renderer, time)
        };

        match result.control {
            LoopControl::Continue => request_animation_frame(game),
            LoopControl::Stop => {
                if let Some(summary) = result.ended {
                    game.borrow().show_game_over(&summary);
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless autopilot run for native builds
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use ride_or_die::consts::FRAME_MS;
    use ride_or_die::persistence::MemoryStore;
    use ride_or_die::platform::{FrameLoop, LoopControl};
    use ride_or_die::renderer::{Renderer, Snapshot};
    use ride_or_die::{GameSession, RunSummary, Tuning};

    /// Field size used for headless runs
    const FIELD: (f32, f32) = (960.0, 400.0);
    /// Ticks of lead time before an obstacle reaches the rider
    const LEAD_TICKS: f64 = 9.0;
    /// Give up after two minutes of simulated play
    const MAX_FRAMES: u32 = 60 * 120;

    /// Logs progress every few seconds instead of drawing
    struct LogRenderer;

    impl Renderer for LogRenderer {
        fn render(&mut self, frame: &Snapshot<'_>) {
            if frame.score > 0 && frame.score % 50 == 0 {
                log::debug!(
                    "score {} obstacles {} particles {}",
                    frame.score,
                    frame.obstacles.len(),
                    frame.particles.len()
                );
            }
        }
    }

    /// Jump when the next obstacle is `LEAD_TICKS` away
    fn should_jump(session: &GameSession<MemoryStore>) -> bool {
        let state = session.state();
        let front = state.player.pos.x + state.player.size.x;
        let lead = state.game_speed * LEAD_TICKS;
        state
            .obstacles
            .iter()
            .map(|o| f64::from(o.pos().x - front))
            .filter(|gap| *gap >= 0.0)
            .any(|gap| gap < lead)
    }

    pub fn run(seed: u64, tuning: Tuning) -> Option<RunSummary> {
        let mut session = GameSession::new(seed, tuning, MemoryStore::new());
        session.configure(FIELD.0, FIELD.1);
        let mut renderer = LogRenderer;
        let mut frame_loop = FrameLoop::new();

        session.jump();
        frame_loop.arm();

        for frame in 0..MAX_FRAMES {
            if session.state().player.grounded && should_jump(&session) {
                session.jump();
            }
            let result = frame_loop.frame(&mut session, &mut renderer, frame as f64 * FRAME_MS);
            if result.control == LoopControl::Stop {
                return result.ended;
            }
        }
        session.end()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use ride_or_die::Tuning;

    env_logger::init();
    log::info!("Ride or Die (native) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading tuning file {}", path))?;
            Tuning::from_json(&json).with_context(|| format!("parsing tuning file {}", path))?
        }
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    match autopilot::run(seed, tuning) {
        Some(summary) => println!(
            "Autopilot run (seed {}): score {}, best {}",
            seed, summary.score, summary.high_score
        ),
        None => println!("Autopilot run (seed {}) ended without a result", seed),
    }
    Ok(())
}
