//! Widget components of the welcome screen.
//!
//! - [`background`]: Two-tone backdrop hosting the drifting particle field
//! - [`particles`]: Staggered particle spawning and perpetual random walks
//! - [`header`]: Teal check-mark logo in the top-left header band
//! - [`labels`]: Title (with drop shadow), subtitle and footer text
//! - [`option_tile`]: Touch-reactive Login / Sign Up / Exit tiles
//! - [`primitives`]: Shapes and immutable draw lists
//!
//! # Architecture
//!
//! Every widget implements [`Widget`]. The screen composer pushes the
//! current viewport down through [`LayoutContext`]; widgets turn it into
//! absolute bounds and rebuild their [`DrawList`]. Drawing only reads those
//! lists, so nothing is recomputed per frame unless an animation wrote a
//! new value.
//!
//! Touch events are offered to widgets in reverse draw order (topmost
//! first). A widget returning `true` consumes the event.

pub mod background;
pub mod header;
pub mod labels;
pub mod option_tile;
pub mod particles;
mod primitives;

pub use background::Background;
pub use header::HeaderLogo;
pub use labels::Label;
pub use option_tile::{OptionTile, TileKind, TouchState};
pub use particles::{Particle, ParticleField};
pub use primitives::{Corners, DrawList, Shape};

use crate::animations::TweenEngine;
use crate::geometry::Viewport;
use crate::input::TouchEvent;
use crate::render::Painter;

/// Layout inputs handed down by the screen composer.
#[derive(Clone, Copy, Debug)]
pub struct LayoutContext {
    pub viewport: Viewport,
}

/// Mutable services available to touch handlers.
pub struct TouchContext<'a> {
    pub tweens: &'a mut TweenEngine,
}

/// A node of the screen composition.
pub trait Widget {
    /// Recompute absolute bounds and rebuild draw primitives.
    fn layout(&mut self, ctx: &LayoutContext);

    /// Rasterize the current draw list.
    fn draw(&self, painter: &mut Painter<'_>);

    /// Offer a touch event; return `true` to consume it.
    fn on_touch(&mut self, _event: &TouchEvent, _ctx: &mut TouchContext<'_>) -> bool { false }
}
