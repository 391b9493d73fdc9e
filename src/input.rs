//! Touch input delivered by the platform shell.
//!
//! Positions are in layout space (bottom-left origin). Shells that report
//! y-down coordinates convert with
//! [`Viewport::canvas_to_layout`](crate::geometry::Viewport::canvas_to_layout)
//! before building an event.

use crate::geometry::Vec2;

/// Phase of a touch gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
}

/// A single touch sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub pos: Vec2,
    /// Platform touch identifier; `None` for a mouse pointer.
    pub id: Option<u64>,
}

impl TouchEvent {
    pub const fn down(x: f32, y: f32) -> Self { Self::pointer(TouchPhase::Down, x, y) }

    pub const fn moved(x: f32, y: f32) -> Self { Self::pointer(TouchPhase::Move, x, y) }

    pub const fn up(x: f32, y: f32) -> Self { Self::pointer(TouchPhase::Up, x, y) }

    const fn pointer(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            pos: Vec2::new(x, y),
            id: None,
        }
    }

    /// Same event tagged with a touch identifier.
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}
