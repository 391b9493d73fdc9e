//! Screen configuration.
//!
//! # Compile-time Constants
//!
//! Window parameters, animation timing and widget dimensions are `const`.
//! Layout is expressed as anchors (fractions of the viewport) plus fixed
//! pixel sizes, so only the anchor-to-rect conversion runs on resize.
//!
//! # Runtime Overrides
//!
//! [`ScreenConfig`] carries the few values a run may change: particle count,
//! stagger interval, RNG seed and initial viewport. [`ScreenConfig::from_env`]
//! applies overrides from the environment:
//!
//! | Variable            | Effect                                  |
//! |---------------------|-----------------------------------------|
//! | `WELCOME_PARTICLES` | Particle count (clamped to `0..=500`)   |
//! | `WELCOME_SEED`      | Fixed RNG seed for reproducible layouts |
//!
//! Unparsable values are ignored with a warning.

use std::time::Duration;

use tracing::warn;

use crate::geometry::{Anchor, Viewport};

// =============================================================================
// Window Configuration
// =============================================================================

/// Window title shown by the platform shell.
pub const WINDOW_TITLE: &str = "Task Reminder - Welcome";

/// Default window width in pixels.
pub const WINDOW_WIDTH: u32 = 1200;

/// Default window height in pixels.
pub const WINDOW_HEIGHT: u32 = 800;

/// Minimum window width. Smaller resize requests are clamped.
pub const MIN_WIDTH: u32 = 900;

/// Minimum window height.
pub const MIN_HEIGHT: u32 = 600;

/// Default viewport matching the window size.
pub const DEFAULT_VIEWPORT: Viewport = Viewport::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);

/// Minimum viewport matching the window constraint.
pub const MIN_VIEWPORT: Viewport = Viewport::new(MIN_WIDTH as f32, MIN_HEIGHT as f32);

/// Viewport sizes the simulator cycles through with `R`.
pub const VIEWPORT_PRESETS: [(u32, u32); 3] = [(1200, 800), (900, 600), (1024, 768)];

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~60 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(16);

/// Upper bound on the `dt` fed to a tick.
pub const MAX_FRAME_DT: Duration = Duration::from_millis(100);

// =============================================================================
// Particle Configuration
// =============================================================================

/// Number of background particles.
pub const PARTICLE_COUNT: usize = 20;

/// Delay between consecutive particle creations.
pub const PARTICLE_STAGGER: Duration = Duration::from_millis(200);

/// Particle diameter range in whole pixels (inclusive).
pub const PARTICLE_SIZE_MIN: i32 = 12;
pub const PARTICLE_SIZE_MAX: i32 = 24;

/// Particle alpha range.
pub const PARTICLE_ALPHA_MIN: f32 = 0.2;
pub const PARTICLE_ALPHA_MAX: f32 = 0.5;

/// Random-walk leg duration range in seconds.
pub const PARTICLE_LEG_MIN_SECS: f32 = 8.0;
pub const PARTICLE_LEG_MAX_SECS: f32 = 15.0;

/// Hard limit for the particle count override.
pub const PARTICLE_COUNT_LIMIT: usize = 500;

// =============================================================================
// Background Configuration
// =============================================================================

/// Fraction of the viewport height covered by the lower background layer.
pub const BACKGROUND_SPLIT: f32 = 0.6;

// =============================================================================
// Option Tile Configuration
// =============================================================================

/// Tile footprint in pixels.
pub const TILE_WIDTH: f32 = 180.0;
pub const TILE_HEIGHT: f32 = 220.0;

/// Panel corner radius.
pub const TILE_RADIUS: f32 = 20.0;

/// Height of the accent strip across the top of the panel.
pub const TILE_STRIP_HEIGHT: f32 = 50.0;

/// Icon disc diameter.
pub const TILE_ICON_DIAMETER: f32 = 80.0;

/// Icon disc center as a fraction of the tile.
pub const TILE_ICON_CENTER: (f32, f32) = (0.5, 0.6);

/// Label center as a fraction of the tile.
pub const TILE_LABEL_CENTER: (f32, f32) = (0.5, 0.2);

/// Bounce shrink factor applied to the visual size on touch-down.
pub const BOUNCE_SCALE: f32 = 0.95;

/// Duration of each bounce leg (shrink, then restore) in seconds.
pub const BOUNCE_LEG_SECS: f32 = 0.1;

/// Horizontal gap between tiles in the row.
pub const TILE_SPACING: f32 = 60.0;

/// Fraction of the viewport height at which the tile row's top edge sits.
pub const TILE_ROW_TOP: f32 = 0.5;

// =============================================================================
// Label Layout
// =============================================================================

pub const TITLE_TEXT: &str = "TASK REMINDER";
pub const SUBTITLE_TEXT: &str = "choose one option to continue :";
pub const FOOTER_TEXT: &str = "(c) 2023 Task Reminder App | Manage your tasks efficiently";

pub const TITLE_ANCHOR: Anchor = Anchor::new(0.5, 0.75, 600.0, 100.0);
pub const SUBTITLE_ANCHOR: Anchor = Anchor::new(0.5, 0.63, 400.0, 50.0);
pub const FOOTER_ANCHOR: Anchor = Anchor::new(0.5, 0.05, 400.0, 30.0);

/// Title drop shadow offset `(dx, dy)` in layout pixels (y up).
pub const TITLE_SHADOW_OFFSET: (f32, f32) = (4.0, -4.0);

/// Duration of each title pulse leg in seconds.
pub const TITLE_PULSE_SECS: f32 = 2.0;

// =============================================================================
// Header Configuration
// =============================================================================

/// Header band height at the top of the screen.
pub const HEADER_HEIGHT: f32 = 80.0;

/// Header logo square size.
pub const LOGO_SIZE: f32 = 60.0;

/// Logo inset from the left edge.
pub const LOGO_PADDING_X: f32 = 30.0;

/// Logo inset from the top edge.
pub const LOGO_PADDING_Y: f32 = 10.0;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Environment variable overriding [`ScreenConfig::particle_count`].
pub const ENV_PARTICLES: &str = "WELCOME_PARTICLES";

/// Environment variable fixing the RNG seed.
pub const ENV_SEED: &str = "WELCOME_SEED";

/// Values a run may override.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenConfig {
    pub particle_count: usize,
    pub particle_stagger: Duration,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub viewport: Viewport,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            particle_stagger: PARTICLE_STAGGER,
            seed: None,
            viewport: DEFAULT_VIEWPORT,
        }
    }
}

impl ScreenConfig {
    /// Defaults with overrides from the process environment.
    pub fn from_env() -> Self { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Defaults with overrides from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PARTICLES) {
            match raw.trim().parse::<usize>() {
                Ok(count) => config.particle_count = count.min(PARTICLE_COUNT_LIMIT),
                Err(err) => warn!(var = ENV_PARTICLES, value = %raw, %err, "ignoring invalid override"),
            }
        }

        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(err) => warn!(var = ENV_SEED, value = %raw, %err, "ignoring invalid override"),
            }
        }

        config
    }
}
