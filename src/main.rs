// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional u32->f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 for viewport and pointer coordinates

//! Desktop simulator for the Task Reminder welcome screen.
//!
//! Acts as the platform shell: owns the SDL2 window, measures frame time,
//! turns mouse input into touch events and blits the rendered canvas.
//!
//! # Controls
//!
//! | Input              | Action                                              |
//! |--------------------|-----------------------------------------------------|
//! | Left mouse button  | Touch (down / move while held / up)                 |
//! | `R`                | Cycle viewport presets (1200x800, 900x600, 1024x768) |
//! | `F`                | Toggle FPS overlay                                  |
//! | `Escape` / close   | Quit                                                |
//!
//! The SDL2 window keeps its initial 1200x800 size. Smaller viewport presets
//! render into its top-left corner, the rest shows the clear color.
//!
//! # Environment
//!
//! - `RUST_LOG`: log filter (default `welcome_screen=info,simulator=info`)
//! - `WELCOME_PARTICLES`: particle count override
//! - `WELCOME_SEED`: fixed RNG seed

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use tracing::{debug, info};
use welcome_screen::clock::clamp_frame_dt;
use welcome_screen::config::{
    FRAME_TIME,
    MAX_FRAME_DT,
    MIN_VIEWPORT,
    ScreenConfig,
    VIEWPORT_PRESETS,
    WINDOW_HEIGHT,
    WINDOW_TITLE,
    WINDOW_WIDTH,
};
use welcome_screen::geometry::Viewport;
use welcome_screen::input::{TouchEvent, TouchPhase};
use welcome_screen::logging;
use welcome_screen::render::{Canvas, draw_fps};
use welcome_screen::screens::Screen;

/// Interval between FPS recalculations.
const FPS_INTERVAL: Duration = Duration::from_secs(1);

fn main() {
    logging::init();

    let config = ScreenConfig::from_env();
    info!(
        particles = config.particle_count,
        seed = ?config.seed,
        "starting welcome screen simulator"
    );

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);
    let mut canvas = Canvas::new(WINDOW_WIDTH, WINDOW_HEIGHT);

    let mut screen = Screen::new(config);

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    // Index into VIEWPORT_PRESETS (R cycles)
    let mut preset = 0usize;
    // Left button held: mouse moves become touch moves
    let mut pointer_down = false;

    // FPS counter state (F toggles)
    let mut show_fps = false;
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    let mut last_frame = Instant::now();

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    'running: loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => break 'running,
                        Keycode::R => {
                            preset = (preset + 1) % VIEWPORT_PRESETS.len();
                            let (w, h) = VIEWPORT_PRESETS[preset];
                            let viewport = Viewport::new(w as f32, h as f32).at_least(MIN_VIEWPORT);
                            screen.resize(viewport.width, viewport.height);
                            info!(width = viewport.width, height = viewport.height, "viewport preset");
                        }
                        Keycode::F => {
                            show_fps = !show_fps;
                            debug!(show_fps, "fps overlay toggled");
                        }
                        _ => {}
                    }
                }
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    pointer_down = true;
                    screen.handle_touch(touch_at(&screen, TouchPhase::Down, point));
                }
                SimulatorEvent::MouseMove { point } if pointer_down => {
                    screen.handle_touch(touch_at(&screen, TouchPhase::Move, point));
                }
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    pointer_down = false;
                    screen.handle_touch(touch_at(&screen, TouchPhase::Up, point));
                }
                _ => {}
            }
        }

        // ======================================================================
        // Update and Render
        // ======================================================================

        let dt = clamp_frame_dt(last_frame.elapsed(), MAX_FRAME_DT);
        last_frame = Instant::now();
        screen.tick(dt);

        screen.draw(&mut canvas);
        if show_fps {
            draw_fps(&mut canvas, current_fps);
        }
        canvas.blit(&mut display);
        window.update(&display);

        // FPS calculation (updated once per interval)
        fps_frame_count += 1;
        let since_fps = last_fps_calc.elapsed();
        if since_fps >= FPS_INTERVAL {
            current_fps = fps_frame_count as f32 / since_fps.as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // Sleep to maintain target frame rate (~60 FPS)
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    info!(elapsed_s = screen.elapsed().as_secs_f32(), "simulator closed");
}

/// Touch event at a window point (y down) in the screen's layout space.
fn touch_at(screen: &Screen, phase: TouchPhase, point: Point) -> TouchEvent {
    TouchEvent {
        phase,
        pos: screen.viewport().canvas_to_layout(point.x as f32, point.y as f32),
        id: None,
    }
}
