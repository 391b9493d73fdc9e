//! Software rasterizer for draw lists.
//!
//! # Canvas
//!
//! [`Canvas`] is an owned `Rgb888` framebuffer implementing `DrawTarget`.
//! The platform shell blits it to the window once per frame; tests read
//! pixels back directly.
//!
//! # Alpha Compositing
//!
//! `embedded-graphics` primitives and mono fonts are stamped with
//! `BinaryColor::On` onto an [`AlphaLayer`], which blends the shape's
//! [`Rgba`] over each covered canvas pixel. One primitive touches each
//! pixel once, so translucent fills composite exactly once.
//!
//! # Coordinate Flip
//!
//! Shapes are in layout space (bottom-left origin, y up). [`Painter`] maps
//! them to canvas space using the viewport height: a rectangle at layout
//! `y` with height `h` has its canvas top edge at `height - (y + h)`. The
//! viewport may be smaller than the canvas; the scene then occupies the
//! top-left corner.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::{BinaryColor, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle,
    CornerRadii,
    PrimitiveStyle,
    Rectangle,
    RoundedRectangle,
    Polyline as EgPolyline,
};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{Rgba, WHITE};
use crate::geometry::{Rect, Vec2, Viewport};
use crate::styles::{CENTERED, FontRole, TOP_RIGHT};
use crate::widgets::{Corners, DrawList, Shape};

// =============================================================================
// Canvas
// =============================================================================

/// Owned opaque framebuffer, row-major, top-left origin.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb888::BLACK; width as usize * height as usize],
        }
    }

    pub const fn width(&self) -> u32 { self.width }

    pub const fn height(&self) -> u32 { self.height }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb888> { self.index(x, y).map(|idx| self.pixels[idx]) }

    pub fn pixels(&self) -> &[Rgb888] { &self.pixels }

    /// Copy the whole canvas to another draw target at its origin.
    pub fn blit<D>(&self, target: &mut D)
    where
        D: DrawTarget<Color = Rgb888>,
    {
        target.fill_contiguous(&self.bounding_box(), self.pixels.iter().copied()).ok();
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Source-over composite `color` onto one pixel.
    #[inline]
    fn blend(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color.blend_over(self.pixels[idx]);
        }
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(idx) = self.index(point.x, point.y) {
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size == Size::zero() {
            return Ok(());
        }
        let x0 = area.top_left.x as usize;
        let w = area.size.width as usize;
        for y in area.rows() {
            let row = y as usize * self.width as usize;
            self.pixels[row + x0..row + x0 + w].fill(color);
        }
        Ok(())
    }
}

// =============================================================================
// Alpha Layer
// =============================================================================

/// Binary draw target that composites one color onto a [`Canvas`].
pub struct AlphaLayer<'a> {
    canvas: &'a mut Canvas,
    color: Rgba,
}

impl<'a> AlphaLayer<'a> {
    pub fn new(canvas: &'a mut Canvas, color: Rgba) -> Self { Self { canvas, color } }
}

impl OriginDimensions for AlphaLayer<'_> {
    fn size(&self) -> Size { self.canvas.size() }
}

impl DrawTarget for AlphaLayer<'_> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, on) in pixels {
            if on.is_on() {
                self.canvas.blend(point.x, point.y, self.color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, on: Self::Color) -> Result<(), Self::Error> {
        if on.is_off() {
            return Ok(());
        }
        let area = area.intersection(&self.canvas.bounding_box());
        for y in area.rows() {
            for x in area.columns() {
                self.canvas.blend(x, y, self.color);
            }
        }
        Ok(())
    }
}

// =============================================================================
// Painter
// =============================================================================

/// Rasterizes layout-space shapes onto a canvas.
pub struct Painter<'a> {
    canvas: &'a mut Canvas,
    viewport: Viewport,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut Canvas, viewport: Viewport) -> Self { Self { canvas, viewport } }

    /// Fill the whole canvas with an opaque color.
    pub fn clear(&mut self, color: Rgba) { self.canvas.clear(color.to_rgb888()).ok(); }

    /// Draw every shape of a list in order.
    pub fn list(&mut self, list: &DrawList) {
        for shape in list.shapes() {
            self.shape(shape);
        }
    }

    pub fn shape(&mut self, shape: &Shape) {
        let viewport = self.viewport;
        let mut layer = AlphaLayer::new(&mut *self.canvas, shape.color());
        let fill = PrimitiveStyle::with_fill(BinaryColor::On);
        match shape {
            Shape::Rect { rect, .. } => {
                box_for(viewport, *rect).into_styled(fill).draw(&mut layer).ok();
            }
            Shape::RoundedRect { rect, corners, .. } => {
                let bounds = box_for(viewport, *rect);
                let radii = corner_radii(*corners, bounds.size);
                RoundedRectangle::new(bounds, radii).into_styled(fill).draw(&mut layer).ok();
            }
            Shape::Disc { center, diameter, .. } => {
                let center = point_for(viewport, *center);
                Circle::with_center(center, to_len(*diameter)).into_styled(fill).draw(&mut layer).ok();
            }
            Shape::Polyline { points, width, .. } => {
                let points: Vec<Point> = points.iter().map(|p| point_for(viewport, *p)).collect();
                EgPolyline::new(&points)
                    .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, to_len(*width).max(1)))
                    .draw(&mut layer)
                    .ok();
            }
            Shape::Text { text, center, font, .. } => {
                let style = MonoTextStyle::new(font.font(), BinaryColor::On);
                Text::with_text_style(text, point_for(viewport, *center), style, CENTERED).draw(&mut layer).ok();
            }
        }
    }
}

/// Canvas rectangle for a layout rectangle.
fn box_for(viewport: Viewport, rect: Rect) -> Rectangle {
    let top = viewport.flip_y(rect.y, rect.h);
    Rectangle::new(Point::new(rect.x.round() as i32, top.round() as i32), Size::new(to_len(rect.w), to_len(rect.h)))
}

/// Canvas point for a layout point.
fn point_for(viewport: Viewport, p: Vec2) -> Point { Point::new(p.x.round() as i32, (viewport.height - p.y).round() as i32) }

/// Non-negative pixel length.
#[inline]
fn to_len(v: f32) -> u32 { if v.is_finite() && v > 0.0 { v.round() as u32 } else { 0 } }

/// Corner radii limited to half the rectangle's shorter side.
fn corner_radii(corners: Corners, size: Size) -> CornerRadii {
    let limit = size.width.min(size.height) / 2;
    let radius = |r: f32| Size::new_equal(to_len(r).min(limit));
    CornerRadii {
        top_left: radius(corners.top_left),
        top_right: radius(corners.top_right),
        bottom_right: radius(corners.bottom_right),
        bottom_left: radius(corners.bottom_left),
    }
}

// =============================================================================
// Overlays
// =============================================================================

/// Position of the FPS counter: right-aligned, 5px from the top-right corner.
const FPS_MARGIN: i32 = 5;

/// Draw the FPS counter in the top-right corner of the canvas.
///
/// Formats into a `heapless::String` (no heap allocation per frame).
pub fn draw_fps(canvas: &mut Canvas, fps: f32) {
    let mut text: String<16> = String::new();
    let _ = write!(text, "{fps:.0} FPS");
    let pos = Point::new(canvas.width() as i32 - FPS_MARGIN, FPS_MARGIN);
    let style = MonoTextStyle::new(FontRole::Overlay.font(), WHITE.to_rgb888());
    Text::with_text_style(&text, pos, style, TOP_RIGHT).draw(canvas).ok();
}
