// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // usize/u32->f32 in layout calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for canvas sizes
#![allow(clippy::cast_sign_loss)] // f32->u32 where the value is clamped non-negative
#![allow(clippy::module_name_repetitions)] // OptionTile in option_tile etc.

//! Animated welcome screen for the Task Reminder app.
//!
//! The crate renders a single screen: a drifting-particle background, a
//! pulsing title with drop shadow, a subtitle, three touch-reactive option
//! tiles (Login, Sign Up, Exit), a header logo and a footer.
//!
//! # Modules
//!
//! | Module         | Role                                                    |
//! |----------------|---------------------------------------------------------|
//! | [`animations`] | Tween engine: chained, repeating, eased property tracks |
//! | [`clock`]      | Scene time and one-shot timers                          |
//! | [`widgets`]    | Background, particles, labels, header, option tiles     |
//! | [`screens`]    | Screen composer: layout, touch routing, frame cycle     |
//! | [`render`]     | Software rasterizer onto an `Rgb888` canvas             |
//! | [`geometry`]   | Viewport, rectangles, normalized anchors                |
//! | [`colors`]     | RGBA color type and palette                             |
//! | [`config`]     | Constants and runtime overrides                         |
//! | [`random`]     | Injectable uniform random source                        |
//! | [`input`]      | Touch events                                            |
//! | [`styles`]     | Font roles and text alignment                           |
//! | [`logging`]    | Subscriber setup for binaries                           |
//!
//! # Driving the Screen
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use welcome_screen::config::ScreenConfig;
//! use welcome_screen::input::TouchEvent;
//! use welcome_screen::render::Canvas;
//! use welcome_screen::screens::Screen;
//!
//! let mut screen = Screen::new(ScreenConfig::default());
//! let mut canvas = Canvas::new(1200, 800);
//!
//! screen.handle_touch(TouchEvent::down(360.0, 290.0));
//! screen.tick(Duration::from_millis(16));
//! screen.draw(&mut canvas);
//! ```
//!
//! The library never blocks, sleeps or spawns threads. The platform shell
//! (see the `simulator` binary) owns the frame loop.

pub mod animations;
pub mod clock;
pub mod colors;
pub mod config;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod random;
pub mod render;
pub mod screens;
pub mod styles;
pub mod widgets;
