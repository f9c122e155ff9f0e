//! Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use breakout::HighScore;
    use breakout::persistence::LocalStorageStore;
    use breakout::platform::InputState;
    use breakout::renderer::{CanvasRenderer, Renderer};
    use breakout::sim::{GameEvent, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        renderer: CanvasRenderer,
        high_score: HighScore<LocalStorageStore>,
    }

    impl Game {
        /// One frame: sample input, advance one tick, persist, draw
        fn frame(&mut self) {
            let input = self.input.sample();
            tick(&mut self.state, &input);

            let events = self.state.drain_events();
            self.high_score.observe(&events);
            for event in &events {
                if let GameEvent::RoundWon { score } | GameEvent::RoundLost { score } = event {
                    log::info!("Round over: {} (best {})", score, self.high_score.best());
                }
            }

            self.renderer.render(&self.state);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Breakout starting...");

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(seed);
        let high_score = HighScore::load(LocalStorageStore::new());
        high_score.apply_to(&mut state);

        let renderer = CanvasRenderer::new(
            "gameCanvas",
            state.tuning.field_width,
            state.tuning.field_height,
        )?;

        let game = Rc::new(RefCell::new(Game {
            state,
            input: InputState::new(),
            renderer,
            high_score,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone())?;
        request_animation_frame(game);

        log::info!("Breakout running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.key_down(&event.code()) {
                    // Keep Space/arrows from scrolling the page
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.key_up(&event.code()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    /// Exactly one tick per animation frame, whatever the frame interval
    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::Context;

    use breakout::persistence::JsonFileStore;
    use breakout::renderer::{AsciiRenderer, Renderer};
    use breakout::sim::{GameEvent, GameState, TickInput, tick};
    use breakout::{HighScore, Tuning};

    /// Safety cap on a headless run (about ten minutes at 60 Hz)
    const MAX_TICKS: u64 = 36_000;
    /// Rounds played before the runner stops
    const ROUNDS: u32 = 3;

    /// Play a few autopilot rounds headlessly and log the results
    pub fn run() -> anyhow::Result<()> {
        let tuning = match std::env::var("BREAKOUT_TUNING") {
            Ok(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading tuning file {path}"))?;
                let tuning = Tuning::from_json(&json)
                    .with_context(|| format!("parsing tuning file {path}"))?;
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(_) => Tuning::default(),
        };
        tuning.validate().context("invalid tuning")?;

        let scores_path = std::env::var("BREAKOUT_SCORES")
            .unwrap_or_else(|_| "breakout-scores.json".to_string());
        let mut high_score = HighScore::load(JsonFileStore::new(scores_path));

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut state = GameState::with_tuning(tuning, seed);
        high_score.apply_to(&mut state);
        log::info!("Headless run with seed {}", seed);

        let mut renderer = AsciiRenderer::new(80, 30);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let mut rounds_done = 0;

        while state.time_ticks < MAX_TICKS && rounds_done < ROUNDS {
            tick(&mut state, &input);

            let events = state.drain_events();
            high_score.observe(&events);

            for event in &events {
                match event {
                    GameEvent::RoundWon { score } | GameEvent::RoundLost { score } => {
                        rounds_done += 1;
                        log::info!(
                            "Round {} finished at tick {}: {} of {} bricks",
                            state.round,
                            state.time_ticks,
                            score,
                            state.total_bricks()
                        );
                    }
                    GameEvent::BrickDestroyed { .. } if state.remaining_bricks() % 10 == 0 => {
                        renderer.render(&state);
                        log::debug!("\n{}", renderer.frame());
                    }
                    _ => {}
                }
            }
        }

        renderer.render(&state);
        log::info!("\n{}", renderer.frame());
        log::info!(
            "Played {} rounds in {} ticks, best score {}",
            rounds_done,
            state.time_ticks,
            high_score.best()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Breakout (native) starting...");
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
