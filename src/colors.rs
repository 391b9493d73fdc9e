//! Color type and palette for the welcome screen.
//!
//! # RGBA With `f32` Channels
//!
//! Every color in the scene is a straight (non-premultiplied) [`Rgba`] with
//! channels in `[0.0, 1.0]`. This is the representation the tween engine
//! interpolates (the pulsing title) and the one the renderer composites
//! onto the opaque `Rgb888` canvas with source-over blending.
//!
//! Conversion to `Rgb888` happens only at rasterization time, so alpha and
//! sub-byte precision survive any number of animation cycles.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Straight RGBA color, channels in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a color from channels already in `[0, 1]`.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self { Self { r, g, b, a } }

    /// Create a color from arbitrary channels, clamping each to `[0, 1]`.
    pub fn clamped(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0), a.clamp(0.0, 1.0))
    }

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self { Self::new(r, g, b, 1.0) }

    /// Same color with a different alpha (clamped).
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self { Self::new(self.r, self.g, self.b, a.clamp(0.0, 1.0)) }

    /// Channel-wise linear interpolation. `t` is clamped to `[0, 1]`.
    ///
    /// `lerp(a, b, 0.0) == a` and `lerp(a, b, 1.0) == b` exactly.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return to;
        }
        Self::clamped(
            (to.r - self.r).mul_add(t, self.r),
            (to.g - self.g).mul_add(t, self.g),
            (to.b - self.b).mul_add(t, self.b),
            (to.a - self.a).mul_add(t, self.a),
        )
    }

    /// Opaque 8-bit version, ignoring alpha.
    pub fn to_rgb888(self) -> Rgb888 { Rgb888::new(to_byte(self.r), to_byte(self.g), to_byte(self.b)) }

    /// Source-over composite of `self` onto an opaque destination pixel.
    pub fn blend_over(self, dst: Rgb888) -> Rgb888 {
        if self.a >= 1.0 {
            return self.to_rgb888();
        }
        if self.a <= 0.0 {
            return dst;
        }
        let mix = |src: f32, dst: u8| {
            let dst = f32::from(dst) / 255.0;
            to_byte((src - dst).mul_add(self.a, dst))
        };
        Rgb888::new(mix(self.r, dst.r()), mix(self.g, dst.g()), mix(self.b, dst.b()))
    }
}

/// Quantize a `[0, 1]` channel to a byte with rounding.
#[inline]
fn to_byte(channel: f32) -> u8 { (channel.clamp(0.0, 1.0) * 255.0).round() as u8 }

// =============================================================================
// Window / Background
// =============================================================================

/// Window clear color and lower background layer (dark blue base).
pub const CLEAR_COLOR: Rgba = Rgba::rgb(0.10, 0.18, 0.25);

/// Lower background layer (bottom 60% of the viewport).
pub const BACKGROUND_BASE: Rgba = Rgba::rgb(0.10, 0.18, 0.25);

/// Upper background layer (top 40%), medium blue at 80% opacity.
pub const BACKGROUND_UPPER: Rgba = Rgba::new(0.15, 0.27, 0.35, 0.8);

/// Particle glyph color (alpha is randomized per particle).
pub const PARTICLE: Rgba = Rgba::rgb(0.27, 0.55, 0.71);

// =============================================================================
// Brand / Accents
// =============================================================================

/// Teal brand color. Header logo, title, Login accent.
pub const TEAL: Rgba = Rgba::rgb(0.27, 0.78, 0.78);

/// Brighter teal used as the second leg of the title pulse.
pub const TEAL_BRIGHT: Rgba = Rgba::rgb(0.35, 0.85, 0.85);

/// Sign Up accent.
pub const SKY_BLUE: Rgba = Rgba::rgb(0.35, 0.65, 0.85);

/// Exit accent.
pub const SOFT_RED: Rgba = Rgba::rgb(0.85, 0.45, 0.45);

// =============================================================================
// Tile Panel
// =============================================================================

/// Tile base panel in the idle state.
pub const PANEL_IDLE: Rgba = Rgba::new(0.20, 0.29, 0.37, 0.9);

/// Tile base panel while highlighted by a held pointer.
pub const PANEL_HIGHLIGHT: Rgba = Rgba::new(0.25, 0.35, 0.45, 0.9);

/// Opacity of the accent strip across the top of a tile.
pub const STRIP_ALPHA: f32 = 0.3;

// =============================================================================
// Text
// =============================================================================

pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

/// Tile label text.
pub const LABEL_TEXT: Rgba = Rgba::rgb(0.9, 0.9, 0.9);

/// Subtitle text.
pub const SUBTITLE_TEXT: Rgba = Rgba::new(0.8, 0.8, 0.8, 0.9);

/// Footer text.
pub const FOOTER_TEXT: Rgba = Rgba::new(0.6, 0.6, 0.6, 0.7);

/// Title drop shadow.
pub const SHADOW: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.3);

// =============================================================================
// Unit Tests
// =============================================================================
