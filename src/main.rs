//! Tourney Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, CustomEvent, CustomEventInit, HtmlCanvasElement, KeyboardEvent,
        MouseEvent, TouchEvent,
    };

    use tourney_runner::assets::AssetStore;
    use tourney_runner::audio::{AudioBank, SoundCue};
    use tourney_runner::renderer::{Renderer, reset_button_rect};
    use tourney_runner::sim::{GameEvent, GameState, SessionPhase, TickInput, tick};
    use tourney_runner::{BestScore, GameConfig};

    /// DOM event the host page listens for; fired once per session end
    const GAMEOVER_EVENT: &str = "runner:gameover";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Renderer,
        input: TickInput,
        audio: AudioBank,
        best: BestScore,
        config: GameConfig,
        canvas: HtmlCanvasElement,
        /// Whether the current session's outcome has been reported
        reported: bool,
        /// Whether a frame callback is queued; the loop parks on terminal
        /// sessions and restart handlers re-kick it
        scheduled: bool,
    }

    impl Game {
        /// One display frame: tick, execute the resulting effects, draw
        fn frame(&mut self) {
            let events = tick(&mut self.state, &self.input);
            // Clear one-shot inputs after processing
            self.input.jump = false;
            self.input.restart = false;

            for event in events {
                match event {
                    GameEvent::Started => log::info!("Session started"),
                    GameEvent::Jumped => self.audio.play(SoundCue::Jump),
                    GameEvent::Milestone => self.audio.play(SoundCue::Score),
                    GameEvent::Crashed { score } => {
                        self.audio.play(SoundCue::Hit);
                        if self.best.record(score, js_sys::Date::now()) {
                            self.best.save();
                        }
                        self.report_game_over(score);
                    }
                    GameEvent::Restarted => {
                        self.reported = false;
                        log::info!("Session restarted");
                    }
                }
            }

            self.renderer
                .render(&self.state, &self.config, self.best.score);
        }

        /// Fire the outward report exactly once per session.
        ///
        /// The detail carries the raw score; booster multiplication and
        /// server persistence are the host's job from here.
        fn report_game_over(&mut self, score: u32) {
            if self.reported {
                return;
            }
            self.reported = true;
            log::info!("Session over, score {score}");

            let init = CustomEventInit::new();
            init.set_bubbles(true);
            init.set_detail(&JsValue::from_f64(score as f64));
            if let Ok(event) = CustomEvent::new_with_event_init_dict(GAMEOVER_EVENT, &init) {
                let _ = self.canvas.dispatch_event(&event);
            }

            // Courtesy DOM poke for pages that show the result outside
            // the canvas
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&score.to_string()));
                }
            }
        }

        /// Queue a restart for the next tick (no-op unless terminal)
        fn request_restart(&mut self) {
            if self.state.phase == SessionPhase::Over {
                self.input.restart = true;
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tourney Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Backing store at device resolution, sim in CSS pixels
        let dpr = window.device_pixel_ratio();
        let (client_w, client_h) = client_size(&canvas);
        canvas.set_width((client_w as f64 * dpr) as u32);
        canvas.set_height((client_h as f64 * dpr) as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");
        let _ = ctx.scale(dpr, dpr);

        let config = canvas
            .get_attribute("data-game-config")
            .map(|json| GameConfig::from_json(&json))
            .unwrap_or_default();

        let assets = AssetStore::load_all().await;
        if assets.failed > 0 {
            if let Some(el) = document.get_element_by_id("asset-notice") {
                let _ = el.set_attribute("class", "");
            }
        }

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(seed, client_w, client_h);
        state.seed_initial_clouds();
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer: Renderer::new(ctx.clone(), assets),
            input: TickInput::default(),
            audio: AudioBank::new(),
            best: BestScore::load(),
            config,
            canvas: canvas.clone(),
            reported: false,
            scheduled: true,
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_screen_buttons(game.clone());
        setup_resize_handler(&canvas, ctx, game.clone());

        // Start game loop
        request_frame(game);

        log::info!("Tourney Runner running!");
    }

    /// Canvas CSS size, with a fallback for pages that don't style it
    fn client_size(canvas: &HtmlCanvasElement) -> (f32, f32) {
        let w = canvas.client_width();
        let h = canvas.client_height();
        if w > 0 && h > 0 {
            (w as f32, h as f32)
        } else {
            (600.0, 750.0)
        }
    }

    fn request_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_going = {
            let mut g = game.borrow_mut();
            g.frame();
            // Park the loop on terminal sessions; the last frame drawn
            // already shows the game-over overlay
            let running = g.state.phase != SessionPhase::Over;
            g.scheduled = running;
            running
        };
        if keep_going {
            request_frame(game);
        }
    }

    /// Re-kick the frame chain if it parked on a terminal session
    fn resume_if_parked(game: &Rc<RefCell<Game>>) {
        let was_parked = {
            let mut g = game.borrow_mut();
            let parked = !g.scheduled;
            g.scheduled = true;
            parked
        };
        if was_parked {
            request_frame(game.clone());
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard down: jump, duck, restart, mute
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.code().as_str() {
                    "Space" | "ArrowUp" => {
                        event.prevent_default();
                        game.borrow_mut().input.jump = true;
                    }
                    "ArrowDown" => {
                        event.prevent_default();
                        game.borrow_mut().input.duck = true;
                    }
                    "KeyR" => {
                        game.borrow_mut().request_restart();
                        resume_if_parked(&game);
                    }
                    "KeyM" => game.borrow_mut().audio.toggle_muted(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard up: release duck
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "ArrowDown" {
                    game.borrow_mut().input.duck = false;
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch: jump, or restart when terminal
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                {
                    let mut g = game.borrow_mut();
                    if g.state.phase == SessionPhase::Over {
                        g.input.restart = true;
                    } else {
                        g.input.jump = true;
                    }
                }
                resume_if_parked(&game);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click: restart via the overlay's reset control
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                {
                    let mut g = game.borrow_mut();
                    if g.state.phase != SessionPhase::Over {
                        return;
                    }
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = event.client_x() as f32 - rect.left() as f32;
                    let y = event.client_y() as f32 - rect.top() as f32;
                    let button = reset_button_rect(g.state.width, g.state.height);
                    if !button.contains(glam::Vec2::new(x, y)) {
                        return;
                    }
                    g.input.restart = true;
                }
                resume_if_parked(&game);
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Optional on-screen controls for touch layouts
    fn setup_screen_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("btn-jump") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                {
                    let mut g = game.borrow_mut();
                    if g.state.phase == SessionPhase::Over {
                        g.input.restart = true;
                    } else {
                        g.input.jump = true;
                    }
                }
                resume_if_parked(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("btn-duck") {
            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    game.borrow_mut().input.duck = true;
                });
                let _ = btn.add_event_listener_with_callback(
                    "touchstart",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
            {
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    game.borrow_mut().input.duck = false;
                });
                let _ = btn.add_event_listener_with_callback(
                    "touchend",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }
    }

    /// Track viewport resizes; the backing store and the sim's notion of
    /// the viewport both follow the canvas's CSS size
    fn setup_resize_handler(
        canvas: &HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        game: Rc<RefCell<Game>>,
    ) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let dpr = window.device_pixel_ratio();
            let (w, h) = client_size(&canvas);
            canvas.set_width((w as f64 * dpr) as u32);
            canvas.set_height((h as f64 * dpr) as u32);
            // Setting the size resets the context transform
            let _ = ctx.scale(dpr, dpr);
            game.borrow_mut().state.resize(w, h);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tourney Runner (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    run_headless_session(2024);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a scripted session to completion and print the final score
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_session(seed: u64) {
    use tourney_runner::consts::RUNNER_X;
    use tourney_runner::sim::{GameState, SessionPhase, TickInput, tick};

    let mut state = GameState::new(seed, 600.0, 750.0);
    state.seed_initial_clouds();

    // First jump starts the session
    let mut input = TickInput {
        jump: true,
        ..Default::default()
    };

    for _ in 0..10_000 {
        tick(&mut state, &input);
        input.jump = false;
        if state.phase == SessionPhase::Over {
            break;
        }

        // Naive autopilot: jump when grounded and anything is close ahead
        let threat = state.obstacles.iter().any(|o| {
            o.pos.x + o.size.x > RUNNER_X && o.pos.x < RUNNER_X + 120.0
        });
        if threat && !state.runner.is_airborne() {
            input.jump = true;
        }
    }

    log::info!(
        "Headless session done: score {} after {} frames (seed {})",
        state.score,
        state.frame,
        state.seed
    );
    println!("final score: {}", state.score);
}
