//! Touch-reactive option tiles (Login, Sign Up, Exit).
//!
//! # Visual Layout
//!
//! ```text
//! ╭──────────────────╮ ─┐
//! │▒▒▒▒ accent ▒▒▒▒▒▒│  │ 50px strip, accent @ 30%, top corners rounded
//! │                  │  │
//! │      ( > )       │  │ 80px icon disc at (50%, 60%)
//! │                  │  │
//! │      LOGIN       │  │ label at (50%, 20%)
//! ╰──────────────────╯ ─┘ 180 x 220, radius 20
//! ```
//!
//! # Touch State Machine
//!
//! | From          | Event                        | To            |
//! |---------------|------------------------------|---------------|
//! | any           | down inside                  | `Pressed`     |
//! | `Pressed`     | move inside while held       | `Highlighted` |
//! | `Highlighted` | move outside while held      | `Highlighted` |
//! | any           | up inside                    | `Idle`        |
//! | `Highlighted` | up outside while held        | `Idle`        |
//! | `Pressed`     | bounce finished              | `Idle`        |
//!
//! Every transition rebuilds the whole [`DrawList`] and swaps it in. The
//! panel color is the only state-dependent part: lighter while
//! `Highlighted`, idle color otherwise.
//!
//! # Bounce
//!
//! Touch-down schedules a two-leg track on the tile's visual size: shrink to
//! 95% over 0.1s, then back to the tile's footprint over 0.1s. The visual
//! rectangle stays centered in the tile's slot, and hit-testing uses the
//! visual rectangle. Re-pressing mid-bounce replaces the track; the restore
//! leg always targets the footprint, so the tile cannot drift smaller.

use tracing::debug;

use crate::animations::{Animatable, Leg, Property, Target, Value};
use crate::colors::{LABEL_TEXT, PANEL_HIGHLIGHT, PANEL_IDLE, Rgba, SKY_BLUE, SOFT_RED, STRIP_ALPHA, TEAL, WHITE};
use crate::config::{
    BOUNCE_LEG_SECS,
    BOUNCE_SCALE,
    TILE_HEIGHT,
    TILE_ICON_CENTER,
    TILE_ICON_DIAMETER,
    TILE_LABEL_CENTER,
    TILE_RADIUS,
    TILE_STRIP_HEIGHT,
    TILE_WIDTH,
};
use crate::geometry::{Rect, Vec2};
use crate::input::{TouchEvent, TouchPhase};
use crate::render::Painter;
use crate::styles::FontRole;
use crate::widgets::{Corners, DrawList, LayoutContext, Shape, TouchContext, Widget};

// =============================================================================
// Tile Kinds
// =============================================================================

/// Which option a tile represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    Login,
    SignUp,
    Exit,
}

impl TileKind {
    /// Row order, left to right.
    pub const ALL: [Self; 3] = [Self::Login, Self::SignUp, Self::Exit];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "LOGIN",
            Self::SignUp => "SIGN UP",
            Self::Exit => "EXIT",
        }
    }

    /// Glyph drawn inside the icon disc.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Login => ">",
            Self::SignUp => "+",
            Self::Exit => "x",
        }
    }

    pub const fn accent(self) -> Rgba {
        match self {
            Self::Login => TEAL,
            Self::SignUp => SKY_BLUE,
            Self::Exit => SOFT_RED,
        }
    }
}

/// Visual touch state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TouchState {
    #[default]
    Idle,
    Pressed,
    Highlighted,
}

// =============================================================================
// Option Tile
// =============================================================================

#[derive(Debug)]
pub struct OptionTile {
    index: usize,
    kind: TileKind,
    /// Footprint position assigned by the composer.
    slot: Rect,
    /// Current (animated) visual size, centered in `slot`.
    size: Vec2,
    state: TouchState,
    /// Touch holding this tile since touch-down: `Some(id)` while held.
    hold: Option<Option<u64>>,
    list: DrawList,
}

impl OptionTile {
    /// Footprint of every tile.
    pub const BASE_SIZE: Vec2 = Vec2::new(TILE_WIDTH, TILE_HEIGHT);

    /// Tile at position `index` of the row.
    pub fn new(index: usize, kind: TileKind) -> Self {
        let mut tile = Self {
            index,
            kind,
            slot: Rect::new(0.0, 0.0, TILE_WIDTH, TILE_HEIGHT),
            size: Self::BASE_SIZE,
            state: TouchState::Idle,
            hold: None,
            list: DrawList::default(),
        };
        tile.rebuild();
        tile
    }

    pub const fn kind(&self) -> TileKind { self.kind }

    pub const fn state(&self) -> TouchState { self.state }

    pub const fn is_held(&self) -> bool { self.hold.is_some() }

    pub const fn slot(&self) -> Rect { self.slot }

    /// Current visual size.
    pub const fn size(&self) -> Vec2 { self.size }

    /// Current visual rectangle; also the hit-test area.
    pub fn visual_rect(&self) -> Rect { Rect::centered(self.slot.center(), self.size) }

    pub const fn target(&self) -> Target { Target::Tile(self.index) }

    pub fn draw_list(&self) -> DrawList { self.list.clone() }

    /// Color of the base panel for the current state.
    pub const fn panel_color(&self) -> Rgba {
        match self.state {
            TouchState::Highlighted => PANEL_HIGHLIGHT,
            TouchState::Idle | TouchState::Pressed => PANEL_IDLE,
        }
    }

    /// Assign a new footprint position.
    pub fn set_slot(&mut self, slot: Rect) {
        self.slot = slot;
        self.rebuild();
    }

    /// Called by the composer when one of this tile's tracks retires.
    pub fn on_animation_finished(&mut self, property: Property) {
        if property == Property::Size && self.state == TouchState::Pressed {
            self.transition(TouchState::Idle);
        }
    }

    fn transition(&mut self, to: TouchState) {
        if self.state != to {
            debug!(tile = ?self.kind, from = ?self.state, ?to, "tile state");
        }
        self.state = to;
        self.rebuild();
    }

    fn holds(&self, event: &TouchEvent) -> bool { self.hold == Some(event.id) }

    fn bounce_legs(&self) -> Vec<Leg> {
        vec![
            Leg::to(Value::Pair(self.size.scale(BOUNCE_SCALE)), BOUNCE_LEG_SECS),
            Leg::to(Value::Pair(Self::BASE_SIZE), BOUNCE_LEG_SECS),
        ]
    }

    /// Build a fresh draw list from the visual rectangle and state.
    fn rebuild(&mut self) {
        let visual = self.visual_rect();
        let accent = self.kind.accent();
        let icon = visual.at_fraction(TILE_ICON_CENTER.0, TILE_ICON_CENTER.1);
        let strip_height = TILE_STRIP_HEIGHT.min(visual.h.max(0.0));

        self.list = DrawList::new(vec![
            Shape::RoundedRect {
                rect: visual,
                corners: Corners::all(TILE_RADIUS),
                color: self.panel_color(),
            },
            Shape::RoundedRect {
                rect: Rect::new(visual.x, visual.top() - strip_height, visual.w, strip_height),
                corners: Corners::top(TILE_RADIUS),
                color: accent.with_alpha(STRIP_ALPHA),
            },
            Shape::Disc {
                center: icon,
                diameter: TILE_ICON_DIAMETER,
                color: accent,
            },
            Shape::Text {
                text: self.kind.glyph(),
                center: icon,
                font: FontRole::Icon,
                color: WHITE,
            },
            Shape::Text {
                text: self.kind.label(),
                center: visual.at_fraction(TILE_LABEL_CENTER.0, TILE_LABEL_CENTER.1),
                font: FontRole::Label,
                color: LABEL_TEXT,
            },
        ]);
    }
}

impl Widget for OptionTile {
    /// Tiles are placed by the composer through [`OptionTile::set_slot`].
    fn layout(&mut self, _ctx: &LayoutContext) { self.rebuild(); }

    fn draw(&self, painter: &mut Painter<'_>) { painter.list(&self.list); }

    fn on_touch(&mut self, event: &TouchEvent, ctx: &mut TouchContext<'_>) -> bool {
        let inside = self.visual_rect().contains(event.pos);
        match event.phase {
            TouchPhase::Down => {
                if !inside {
                    return false;
                }
                self.hold = Some(event.id);
                self.transition(TouchState::Pressed);
                ctx.tweens.schedule(self.target(), Property::Size, self.bounce_legs(), false);
                true
            }
            TouchPhase::Move => {
                if !(inside && self.holds(event)) {
                    return false;
                }
                if self.state != TouchState::Highlighted {
                    self.transition(TouchState::Highlighted);
                }
                true
            }
            TouchPhase::Up => {
                if self.holds(event) {
                    self.hold = None;
                    if self.state == TouchState::Highlighted {
                        self.transition(TouchState::Idle);
                    }
                }
                if inside {
                    self.transition(TouchState::Idle);
                }
                inside
            }
        }
    }
}

impl Animatable for OptionTile {
    fn value(&self, property: Property) -> Option<Value> {
        match property {
            Property::Size => Some(Value::Pair(self.size)),
            _ => None,
        }
    }

    fn set_value(&mut self, property: Property, value: Value) {
        if let (Property::Size, Some(size)) = (property, value.as_pair()) {
            self.size = size;
            self.rebuild();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
