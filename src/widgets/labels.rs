//! Anchored text labels.
//!
//! A [`Label`] is one line of text centered in a rectangle resolved from an
//! [`Anchor`] (plus an optional fixed pixel offset). The title, its drop
//! shadow, the subtitle and the footer are all labels; the title is the only
//! one with an animation, a color track written through [`Animatable`].

use crate::animations::{Animatable, Property, Value};
use crate::colors::Rgba;
use crate::geometry::{Anchor, Rect, Vec2};
use crate::render::Painter;
use crate::styles::FontRole;
use crate::widgets::{DrawList, LayoutContext, Shape, Widget};

#[derive(Debug)]
pub struct Label {
    text: &'static str,
    font: FontRole,
    color: Rgba,
    anchor: Anchor,
    offset: Vec2,
    rect: Rect,
    list: DrawList,
}

impl Label {
    pub fn new(text: &'static str, font: FontRole, color: Rgba, anchor: Anchor) -> Self {
        let mut label = Self {
            text,
            font,
            color,
            anchor,
            offset: Vec2::ZERO,
            rect: Rect::default(),
            list: DrawList::default(),
        };
        label.rebuild();
        label
    }

    /// Shift the resolved rectangle by a fixed pixel offset (builder).
    #[must_use]
    pub fn with_offset(mut self, dx: f32, dy: f32) -> Self {
        self.offset = Vec2::new(dx, dy);
        self
    }

    pub const fn text(&self) -> &'static str { self.text }

    pub const fn color(&self) -> Rgba { self.color }

    pub const fn rect(&self) -> Rect { self.rect }

    pub fn draw_list(&self) -> DrawList { self.list.clone() }

    fn rebuild(&mut self) {
        self.list = DrawList::new(vec![Shape::Text {
            text: self.text,
            center: self.rect.center(),
            font: self.font,
            color: self.color,
        }]);
    }
}

impl Widget for Label {
    fn layout(&mut self, ctx: &LayoutContext) {
        self.rect = self.anchor.resolve(ctx.viewport).offset(self.offset.x, self.offset.y);
        self.rebuild();
    }

    fn draw(&self, painter: &mut Painter<'_>) { painter.list(&self.list); }
}

impl Animatable for Label {
    fn value(&self, property: Property) -> Option<Value> {
        match property {
            Property::Color => Some(Value::Color(self.color)),
            _ => None,
        }
    }

    fn set_value(&mut self, property: Property, value: Value) {
        if let (Property::Color, Some(color)) = (property, value.as_color()) {
            self.color = color;
            self.rebuild();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{SHADOW, TEAL, TEAL_BRIGHT};
    use crate::config::{TITLE_ANCHOR, TITLE_TEXT};
    use crate::geometry::Viewport;

    fn laid_out(label: &mut Label, w: f32, h: f32) {
        label.layout(&LayoutContext {
            viewport: Viewport::new(w, h),
        });
    }

    #[test]
    fn test_label_centered_on_anchor() {
        let mut title = Label::new(TITLE_TEXT, FontRole::Title, TEAL, TITLE_ANCHOR);
        laid_out(&mut title, 1200.0, 800.0);
        assert_eq!(title.rect(), Rect::new(300.0, 550.0, 600.0, 100.0));
        match &title.draw_list().shapes()[0] {
            Shape::Text { center, .. } => assert_eq!(*center, Vec2::new(600.0, 600.0)),
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_shadow_offset() {
        let mut shadow = Label::new(TITLE_TEXT, FontRole::Title, SHADOW, TITLE_ANCHOR).with_offset(4.0, -4.0);
        laid_out(&mut shadow, 1200.0, 800.0);
        assert_eq!(shadow.rect().origin(), Vec2::new(304.0, 546.0));
    }

    #[test]
    fn test_color_write_rebuilds() {
        let mut title = Label::new(TITLE_TEXT, FontRole::Title, TEAL, TITLE_ANCHOR);
        let before = title.draw_list();
        title.set_value(Property::Color, Value::Color(TEAL_BRIGHT));
        assert_eq!(title.color(), TEAL_BRIGHT);
        assert!(!before.same_snapshot(&title.draw_list()));
        assert_eq!(title.draw_list().shapes()[0].color(), TEAL_BRIGHT);
    }

    #[test]
    fn test_label_relayout_on_resize() {
        let mut title = Label::new(TITLE_TEXT, FontRole::Title, TEAL, TITLE_ANCHOR);
        laid_out(&mut title, 1200.0, 800.0);
        laid_out(&mut title, 900.0, 600.0);
        assert_eq!(title.rect().center(), Vec2::new(450.0, 450.0));
    }
}
