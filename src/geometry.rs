//! Layout geometry: viewport, rectangles and normalized anchors.
//!
//! # Coordinate System
//!
//! Layout happens in device-independent pixels with the origin at the
//! bottom-left corner and y growing upward. Only the renderer knows about
//! the top-left origin of the canvas; see [`Viewport::flip_y`].
//!
//! ```text
//!  y = height ┌──────────────────────┐
//!             │                      │
//!             │       (x, y)         │
//!             │         ●            │
//!             │                      │
//!  y = 0      └──────────────────────┘
//!          x = 0                 x = width
//! ```
//!
//! # Zero-Sized Viewport
//!
//! Before the platform reports its first size the viewport may be `0 × 0`.
//! Every formula here is a multiplication by a fraction or a clamp, so a
//! zero viewport yields zero-sized, well-defined geometry. Nothing divides
//! by the viewport size.

/// A 2-D point (or size) in layout pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    /// Component-wise scale.
    #[must_use]
    pub fn scale(self, factor: f32) -> Self { Self::new(self.x * factor, self.y * factor) }
}

/// The drawable area supplied by the platform shell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self { Self { width, height } }

    /// Viewport with negative or non-finite dimensions replaced by zero.
    pub fn sanitized(width: f32, height: f32) -> Self {
        let fix = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self::new(fix(width), fix(height))
    }

    /// Clamp to a minimum size (the window's minimum constraint).
    #[must_use]
    pub fn at_least(self, min: Self) -> Self { Self::new(self.width.max(min.width), self.height.max(min.height)) }

    /// Clamp a point into the viewport.
    pub fn clamp(&self, p: Vec2) -> Vec2 { Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height)) }

    /// Convert a layout y (bottom-left origin) of a span with height `h`
    /// to the canvas y of its top edge (top-left origin).
    #[inline]
    pub fn flip_y(&self, y: f32, h: f32) -> f32 { self.height - (y + h) }

    /// Convert a y-down canvas point (platform input) back to layout space.
    #[inline]
    pub fn canvas_to_layout(&self, x: f32, y: f32) -> Vec2 { Vec2::new(x, self.height - y) }
}

/// Axis-aligned rectangle, `origin` at its bottom-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self { Self { x, y, w, h } }

    /// Rectangle of `size` centered on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    pub const fn origin(&self) -> Vec2 { Vec2::new(self.x, self.y) }

    pub const fn size(&self) -> Vec2 { Vec2::new(self.w, self.h) }

    pub fn center(&self) -> Vec2 { Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0) }

    pub fn top(&self) -> f32 { self.y + self.h }

    pub fn right(&self) -> f32 { self.x + self.w }

    /// Point-in-rect test, edges inclusive.
    pub fn contains(&self, p: Vec2) -> bool { p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.top() }

    /// Point at a fraction of this rectangle (`(0.5, 0.5)` is the center).
    pub fn at_fraction(&self, fx: f32, fy: f32) -> Vec2 { Vec2::new(fx.mul_add(self.w, self.x), fy.mul_add(self.h, self.y)) }

    /// Same rectangle translated by `(dx, dy)`.
    #[must_use]
    pub fn offset(&self, dx: f32, dy: f32) -> Self { Self::new(self.x + dx, self.y + dy, self.w, self.h) }
}

/// A child placement: center expressed as a fraction of the viewport,
/// plus a fixed pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    /// Horizontal center as a fraction of viewport width.
    pub center_x: f32,
    /// Vertical center as a fraction of viewport height.
    pub center_y: f32,
    /// Fixed size in layout pixels.
    pub size: Vec2,
}

impl Anchor {
    pub const fn new(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Self {
            center_x,
            center_y,
            size: Vec2::new(width, height),
        }
    }

    /// Absolute rectangle for the given viewport.
    pub fn resolve(&self, viewport: Viewport) -> Rect {
        let center = Vec2::new(viewport.width * self.center_x, viewport.height * self.center_y);
        Rect::centered(center, self.size)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
