//! SCOOT: a tiny ECS runtime scooting squares around a 2D window
//!
//! The interesting part lives in `ecs/`: entity storage, a fixed set of
//! systems and the Update/Draw frame driver. This file is the host glue -
//! window setup, keyboard and drawing bindings over macroquad, frame
//! pacing, and the process entry point.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod ecs;
mod scene;

use std::sync::OnceLock;

use macroquad::prelude::*;

use config::HostConfig;
use ecs::{Canvas, Control, FrameDriver, InputSource, Rgba};

/// Background clear color (off-white).
const BACKGROUND: Color = Color::new(0.96, 0.96, 0.96, 1.0);

/// Host configuration, loaded once. `window_conf` runs before `main`, so
/// both read through this.
fn host_config() -> &'static HostConfig {
    static CONFIG: OnceLock<HostConfig> = OnceLock::new();
    CONFIG.get_or_init(HostConfig::load)
}

fn window_conf() -> Conf {
    // Logger must be up before config loading so fallback warnings land
    // somewhere.
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let config = host_config();
    Conf {
        window_title: format!("{} v{}", config.title, VERSION),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Keyboard-backed input capability: arrow keys map to the four controls.
struct Keyboard;

impl InputSource for Keyboard {
    fn is_active(&self, control: Control) -> bool {
        match control {
            Control::Right => is_key_down(KeyCode::Right),
            Control::Left => is_key_down(KeyCode::Left),
            Control::Up => is_key_down(KeyCode::Up),
            Control::Down => is_key_down(KeyCode::Down),
        }
    }
}

/// Drawing capability over macroquad's immediate-mode primitives.
struct Screen;

fn to_mq(color: Rgba) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

impl Canvas for Screen {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        draw_rectangle(x, y, w, h, to_mq(color));
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Rgba) {
        macroquad::text::draw_text(text, x, y, size, to_mq(color));
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = host_config();
    log::info!(
        "scoot v{VERSION}: {}x{} window, target {} fps",
        config.window_width,
        config.window_height,
        config.target_fps
    );

    let mut driver = FrameDriver::new(config.player_speed);
    scene::populate(driver.store_mut());
    log::info!("scene populated with {} entities", driver.store().len());

    // Ask macroquad to report window close as a quit request instead of
    // killing the process, so the loop below is the single exit point.
    prevent_quit();

    let mut screen = Screen;
    loop {
        let frame_start = get_time();

        if is_quit_requested() {
            break;
        }

        // Update: systems that mutate the store.
        driver.update(&Keyboard);

        // Draw: read-only over the store.
        clear_background(BACKGROUND);
        driver.draw(&mut screen);

        // FPS limiting
        if let Some(target_frame_time) = config.frame_time() {
            let elapsed = get_time() - frame_start;
            let remaining = target_frame_time - elapsed;

            if remaining > 0.0 {
                // Native: sleep for the bulk, then spin-wait for precision
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let spin_margin = 0.002; // 2ms
                    while get_time() - frame_start + spin_margin < target_frame_time {
                        std::thread::sleep(std::time::Duration::from_millis(1));
                    }
                    while get_time() - frame_start < target_frame_time {
                        std::hint::spin_loop();
                    }
                }
                // WASM: browser handles frame pacing
            }
        }

        next_frame().await;
    }

    log::info!("close requested, exiting");
}
