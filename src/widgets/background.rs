//! Two-tone background hosting the particle field.
//!
//! ```text
//!  h   ┌──────────────────────┐
//!      │  upper (translucent) │  40%
//! 0.6h ├──────────────────────┤
//!      │  lower (base color)  │  60%
//!  0   └──────────────────────┘
//! ```
//!
//! Both rectangles are recomputed from the viewport on every layout.
//! Particles are drawn on top of both layers.

use tracing::debug;

use crate::colors::{BACKGROUND_BASE, BACKGROUND_UPPER};
use crate::config::BACKGROUND_SPLIT;
use crate::geometry::Rect;
use crate::render::Painter;
use crate::widgets::{DrawList, LayoutContext, ParticleField, Shape, Widget};

#[derive(Debug, Default)]
pub struct Background {
    lower: Rect,
    upper: Rect,
    list: DrawList,
    particles: ParticleField,
}

impl Background {
    pub fn new() -> Self { Self::default() }

    /// Lower layer, bottom 60% of the viewport.
    pub const fn lower(&self) -> Rect { self.lower }

    /// Upper layer, top 40% of the viewport.
    pub const fn upper(&self) -> Rect { self.upper }

    pub fn draw_list(&self) -> DrawList { self.list.clone() }

    pub const fn particles(&self) -> &ParticleField { &self.particles }

    pub fn particles_mut(&mut self) -> &mut ParticleField { &mut self.particles }
}

impl Widget for Background {
    fn layout(&mut self, ctx: &LayoutContext) {
        let vp = ctx.viewport;
        let split = vp.height * BACKGROUND_SPLIT;
        self.lower = Rect::new(0.0, 0.0, vp.width, split);
        self.upper = Rect::new(0.0, split, vp.width, vp.height - split);
        self.list = DrawList::new(vec![
            Shape::Rect {
                rect: self.lower,
                color: BACKGROUND_BASE,
            },
            Shape::Rect {
                rect: self.upper,
                color: BACKGROUND_UPPER,
            },
        ]);
        debug!(split, "background relaid");
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        painter.list(&self.list);
        for particle in self.particles.particles() {
            painter.shape(&particle.shape());
        }
    }
}
