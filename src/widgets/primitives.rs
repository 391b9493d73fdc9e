//! Draw primitives and immutable draw lists.
//!
//! Widgets describe what they look like as a list of [`Shape`]s in layout
//! coordinates. The renderer rasterizes them; widgets never touch pixels.
//!
//! # Snapshot Swapping
//!
//! A [`DrawList`] is an `Rc<[Shape]>`. A widget builds a fresh list whenever
//! its state or bounds change and replaces its old one in a single
//! assignment, so a draw always sees either the complete old list or the
//! complete new one. Cloning a list for inspection is a refcount bump.

use std::rc::Rc;

use crate::colors::Rgba;
use crate::geometry::{Rect, Vec2};
use crate::styles::FontRole;

/// Per-corner radii of a rounded rectangle, in layout pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Corners {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl Corners {
    /// Same radius on every corner.
    pub const fn all(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Rounded top corners, square bottom corners.
    pub const fn top(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: 0.0,
            bottom_left: 0.0,
        }
    }
}

/// One drawable element.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Filled axis-aligned rectangle.
    Rect { rect: Rect, color: Rgba },
    /// Filled rectangle with rounded corners.
    RoundedRect { rect: Rect, corners: Corners, color: Rgba },
    /// Filled disc.
    Disc { center: Vec2, diameter: f32, color: Rgba },
    /// Stroked open polyline.
    Polyline { points: Vec<Vec2>, width: f32, color: Rgba },
    /// Single line of text centered on `center`.
    Text {
        text: &'static str,
        center: Vec2,
        font: FontRole,
        color: Rgba,
    },
}

impl Shape {
    /// Fill or stroke color.
    pub const fn color(&self) -> Rgba {
        match self {
            Self::Rect { color, .. }
            | Self::RoundedRect { color, .. }
            | Self::Disc { color, .. }
            | Self::Polyline { color, .. }
            | Self::Text { color, .. } => *color,
        }
    }
}

/// Immutable, cheaply cloneable list of shapes in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawList(Rc<[Shape]>);

impl DrawList {
    pub fn new(shapes: Vec<Shape>) -> Self { Self(shapes.into()) }

    pub fn shapes(&self) -> &[Shape] { &self.0 }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Whether two handles point at the same snapshot.
    pub fn same_snapshot(&self, other: &Self) -> bool { Rc::ptr_eq(&self.0, &other.0) }
}

impl Default for DrawList {
    fn default() -> Self { Self::new(Vec::new()) }
}
