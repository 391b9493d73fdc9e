//! Header band with the app logo.
//!
//! The header is an 80px band along the top edge. The logo sits inside it
//! with 30px horizontal and 10px vertical padding: a 60x60 teal disc with a
//! white check mark.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │   ( ✓ )                              │  80px band
//! │                                      │
//! ```

use crate::colors::{TEAL, WHITE};
use crate::config::{LOGO_PADDING_X, LOGO_PADDING_Y, LOGO_SIZE};
use crate::geometry::{Rect, Vec2};
use crate::render::Painter;
use crate::widgets::{DrawList, LayoutContext, Shape, Widget};

/// Check mark vertices relative to the logo's bottom-left corner (y up).
const CHECK_POINTS: [(f32, f32); 3] = [(15.0, 30.0), (25.0, 40.0), (45.0, 20.0)];

/// Check mark stroke width.
const CHECK_WIDTH: f32 = 2.0;

#[derive(Debug, Default)]
pub struct HeaderLogo {
    rect: Rect,
    list: DrawList,
}

impl HeaderLogo {
    pub fn new() -> Self { Self::default() }

    pub const fn rect(&self) -> Rect { self.rect }

    pub fn draw_list(&self) -> DrawList { self.list.clone() }
}

impl Widget for HeaderLogo {
    fn layout(&mut self, ctx: &LayoutContext) {
        let top = ctx.viewport.height - LOGO_PADDING_Y;
        self.rect = Rect::new(LOGO_PADDING_X, top - LOGO_SIZE, LOGO_SIZE, LOGO_SIZE);

        let origin = self.rect.origin();
        let points = CHECK_POINTS.iter().map(|&(dx, dy)| Vec2::new(origin.x + dx, origin.y + dy)).collect();
        self.list = DrawList::new(vec![
            Shape::Disc {
                center: self.rect.center(),
                diameter: LOGO_SIZE,
                color: TEAL,
            },
            Shape::Polyline {
                points,
                width: CHECK_WIDTH,
                color: WHITE,
            },
        ]);
    }

    fn draw(&self, painter: &mut Painter<'_>) { painter.list(&self.list); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Viewport;

    #[test]
    fn test_logo_anchored_top_left() {
        let mut logo = HeaderLogo::new();
        logo.layout(&LayoutContext {
            viewport: Viewport::new(1200.0, 800.0),
        });
        assert_eq!(logo.rect(), Rect::new(30.0, 730.0, 60.0, 60.0));

        let list = logo.draw_list();
        assert_eq!(list.len(), 2);
        match &list.shapes()[1] {
            Shape::Polyline { points, width, .. } => {
                assert_eq!(
                    points,
                    &vec![Vec2::new(45.0, 760.0), Vec2::new(55.0, 770.0), Vec2::new(75.0, 750.0)]
                );
                assert_eq!(*width, 2.0);
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }
}
