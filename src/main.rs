//! Canvasoids entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use canvasoids::consts::STEP_MS;
    use canvasoids::renderer::canvas_text::CanvasText;
    use canvasoids::renderer::{DisplayList, RenderState, TextRenderer, draw_frame};
    use canvasoids::sim::{FrameClock, GameState, Key, key_down, key_up, next_delay_ms, tick};
    use canvasoids::{Config, Error, Result, Viewport};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        config: Config,
        clock: FrameClock,
        frame: DisplayList,
        render_state: RenderState,
        /// HUD text; absent when the page has no overlay canvas
        text: Option<CanvasText>,
    }

    impl Game {
        /// Run the steps that are due, draw, and return the delay until the
        /// next callback
        fn step(&mut self, now_ms: f64) -> f32 {
            let frame = self.clock.advance(now_ms);
            for _ in 0..frame.steps {
                tick(&mut self.state, STEP_MS);
            }
            self.render();
            next_delay_ms(frame.elapsed_ms)
        }

        fn render(&mut self) {
            let text: Option<&mut dyn TextRenderer> = match self.text.as_mut() {
                Some(t) => {
                    t.begin_frame();
                    Some(t)
                }
                None => None,
            };
            draw_frame(&self.state, &self.config, &mut self.frame, text);

            match self.render_state.render(&self.frame) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    fn startup(msg: &str) -> Error {
        Error::Startup(msg.to_string())
    }

    pub async fn run() -> Result<()> {
        log::info!("Canvasoids starting...");

        let window = web_sys::window().ok_or_else(|| startup("no window"))?;
        let document = window.document().ok_or_else(|| startup("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| startup("no #canvas element"))?
            .dyn_into()
            .map_err(|_| startup("#canvas is not a canvas"))?;

        // Sized once from the window; no resize handling
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0) as u32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let config = Config::from_json_or_default(canvas.get_attribute("data-config").as_deref());
        let seed = config.seed.unwrap_or(js_sys::Date::now() as u64);
        let state = GameState::with_config(Viewport::new(width as f32, height as f32), &config, seed);
        log::info!("Game initialized with seed: {} ({}x{})", seed, width, height);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| Error::Startup(format!("failed to create surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| Error::Startup(format!("no GPU adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, config.line_width)
            .await
            .map_err(|e| Error::Startup(format!("failed to create device: {e}")))?;

        let text = document
            .get_element_by_id("hud")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .and_then(|hud| CanvasText::from_canvas(&hud, width, height));
        if text.is_none() {
            log::info!("No text overlay available, HUD text disabled");
        }

        let game = Rc::new(RefCell::new(Game {
            state,
            config,
            clock: FrameClock::new(),
            frame: DisplayList::new(),
            render_state,
            text,
        }));

        setup_input_handlers(game.clone());

        // Start game loop
        schedule_step(game, STEP_MS);

        log::info!("Canvasoids running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = Key::from_dom_key(&event.key());
                if key != Key::Other {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                }
                key_down(&mut game.borrow_mut().state, key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = Key::from_dom_key(&event.key());
                key_up(&mut game.borrow_mut().state, key);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Arm the one-shot timer for the next step
    fn schedule_step(game: Rc<RefCell<Game>>, delay_ms: f32) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move || game_step(game));
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms.round() as i32,
        ) {
            log::error!("setTimeout failed, game loop stopped: {:?}", e);
        }
        closure.forget();
    }

    fn game_step(game: Rc<RefCell<Game>>) {
        let delay = game.borrow_mut().step(js_sys::Date::now());
        schedule_step(game, delay);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = wasm_game::run().await {
        log::error!("{}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvasoids (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let json = std::env::args().nth(1).and_then(|path| {
        std::fs::read_to_string(&path)
            .map_err(|e| log::warn!("Cannot read config {}: {}", path, e))
            .ok()
    });
    let config = canvasoids::Config::from_json_or_default(json.as_deref());

    let summary = headless::run(&config, 2000);
    println!(
        "\nHeadless run (seed {}): {} steps, level {}, score {}, high score {}, lives {}, busiest frame {} segments",
        summary.seed,
        summary.steps,
        summary.level,
        summary.score,
        summary.high_score,
        summary.lives,
        summary.max_segments
    );
}

/// Scripted attract-mode run without a window
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use canvasoids::consts::STEP_MS;
    use canvasoids::renderer::{DisplayList, draw_frame};
    use canvasoids::sim::{GameState, Key, key_down, key_up, tick};
    use canvasoids::{Config, Viewport};

    pub struct Summary {
        pub seed: u64,
        pub steps: u32,
        pub level: u32,
        pub score: u64,
        pub high_score: u64,
        pub lives: u32,
        pub max_segments: usize,
    }

    /// Scripted pilot: spin in bursts, thrust now and then, fire constantly
    fn script(step: u32) -> (Option<Key>, Option<Key>) {
        match step % 40 {
            0 => (Some(Key::RotateLeft), None),
            6 => (None, Some(Key::RotateLeft)),
            20 => (Some(Key::Thrust), None),
            30 => (Some(Key::Reverse), None),
            n if n % 4 == 2 => (Some(Key::Other), None),
            _ => (None, None),
        }
    }

    pub fn run(config: &Config, steps: u32) -> Summary {
        let seed = config.seed.unwrap_or(0x5eed);
        let mut state = GameState::with_config(Viewport::new(800.0, 600.0), config, seed);
        let mut frame = DisplayList::new();
        let mut max_segments = 0;

        // Any key starts the first round
        key_down(&mut state, Key::Other);

        let mut ran = 0;
        for step in 0..steps {
            let (down, up) = script(step);
            if let Some(key) = down {
                key_down(&mut state, key);
            }
            if let Some(key) = up {
                key_up(&mut state, key);
            }

            tick(&mut state, STEP_MS);
            draw_frame(&state, config, &mut frame, None);
            max_segments = max_segments.max(frame.segment_count());
            ran = step + 1;

            if state.is_game_over() {
                break;
            }
        }

        Summary {
            seed: state.seed,
            steps: ran,
            level: state.level,
            score: state.score,
            high_score: state.high_score,
            lives: state.lives,
            max_segments,
        }
    }
}
