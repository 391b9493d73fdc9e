//! Welcome screen composer.
//!
//! # Visual Layout
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ (✓)                                        │  header logo
//! │                                            │
//! │               TASK REMINDER                │  title (75%), pulsing
//! │                                            │
//! │      choose one option to continue :       │  subtitle (63%)
//! │ ────────────────────────────────────────── │  row top edge (50%)
//! │     ╭──────╮     ╭──────╮     ╭──────╮     │
//! │     │LOGIN │     │SIGNUP│     │ EXIT │     │  180x220 tiles, 60px gaps
//! │     ╰──────╯     ╰──────╯     ╰──────╯     │
//! │                                            │
//! │      (c) 2023 Task Reminder App | ...      │  footer (5%)
//! └────────────────────────────────────────────┘
//! ```
//!
//! Z-order is draw order: background (with particles), header, title
//! shadow, title, subtitle, tiles, footer.
//!
//! # Frame Cycle
//!
//! 1. [`Screen::resize`] / [`Screen::handle_touch`] for pending platform events
//! 2. [`Screen::tick`]: fire due timers (particle creations), then advance
//!    every tween and notify tiles whose bounce finished
//! 3. [`Screen::draw`]: clear and rasterize every widget's draw list
//!
//! # Touch Routing
//!
//! Down and move events visit widgets topmost first and stop at the first
//! one that consumes them. Up events visit every widget, so a tile held
//! since touch-down always sees its release even when the pointer was
//! lifted elsewhere; the result reports whether any widget consumed it.

use std::time::Duration;

use tracing::{debug, trace};

use crate::animations::{Animatable, Leg, Property, Target, TargetResolver, TickContext, TweenEngine, Value};
use crate::clock::{FrameClock, SceneEvent};
use crate::colors::{CLEAR_COLOR, FOOTER_TEXT, SHADOW, SUBTITLE_TEXT, TEAL, TEAL_BRIGHT};
use crate::config::{
    self,
    FOOTER_ANCHOR,
    ScreenConfig,
    SUBTITLE_ANCHOR,
    TILE_HEIGHT,
    TILE_ROW_TOP,
    TILE_SPACING,
    TILE_WIDTH,
    TITLE_ANCHOR,
    TITLE_PULSE_SECS,
    TITLE_SHADOW_OFFSET,
};
use crate::geometry::{Rect, Viewport};
use crate::input::{TouchEvent, TouchPhase};
use crate::random::{RandomSource, RngSource};
use crate::render::{Canvas, Painter};
use crate::styles::FontRole;
use crate::widgets::{
    Background,
    HeaderLogo,
    Label,
    LayoutContext,
    OptionTile,
    ParticleField,
    TileKind,
    TouchContext,
    Widget,
};

/// Number of widgets in the composition.
const WIDGET_COUNT: usize = 9;

// =============================================================================
// Scene
// =============================================================================

/// Every widget on the screen, in draw order.
struct Scene {
    background: Background,
    header: HeaderLogo,
    shadow: Label,
    title: Label,
    subtitle: Label,
    tiles: [OptionTile; 3],
    footer: Label,
}

impl Scene {
    fn new() -> Self {
        let (dx, dy) = TITLE_SHADOW_OFFSET;
        Self {
            background: Background::new(),
            header: HeaderLogo::new(),
            shadow: Label::new(config::TITLE_TEXT, FontRole::Title, SHADOW, TITLE_ANCHOR).with_offset(dx, dy),
            title: Label::new(config::TITLE_TEXT, FontRole::Title, TEAL, TITLE_ANCHOR),
            subtitle: Label::new(config::SUBTITLE_TEXT, FontRole::Subtitle, SUBTITLE_TEXT, SUBTITLE_ANCHOR),
            tiles: [
                OptionTile::new(0, TileKind::ALL[0]),
                OptionTile::new(1, TileKind::ALL[1]),
                OptionTile::new(2, TileKind::ALL[2]),
            ],
            footer: Label::new(config::FOOTER_TEXT, FontRole::Footer, FOOTER_TEXT, FOOTER_ANCHOR),
        }
    }

    fn widgets(&self) -> [&dyn Widget; WIDGET_COUNT] {
        let [login, signup, exit] = &self.tiles;
        [
            &self.background,
            &self.header,
            &self.shadow,
            &self.title,
            &self.subtitle,
            login,
            signup,
            exit,
            &self.footer,
        ]
    }

    fn widgets_mut(&mut self) -> [&mut dyn Widget; WIDGET_COUNT] {
        let [login, signup, exit] = &mut self.tiles;
        [
            &mut self.background,
            &mut self.header,
            &mut self.shadow,
            &mut self.title,
            &mut self.subtitle,
            login,
            signup,
            exit,
            &mut self.footer,
        ]
    }

    /// Convert anchors for `viewport` and push bounds to every widget.
    fn layout(&mut self, viewport: Viewport) {
        let count = self.tiles.len() as f32;
        let row_width = count.mul_add(TILE_WIDTH, (count - 1.0) * TILE_SPACING);
        let left = (viewport.width - row_width) / 2.0;
        let bottom = viewport.height * TILE_ROW_TOP - TILE_HEIGHT;
        for (i, tile) in self.tiles.iter_mut().enumerate() {
            let x = (i as f32).mul_add(TILE_WIDTH + TILE_SPACING, left);
            tile.set_slot(Rect::new(x, bottom, TILE_WIDTH, TILE_HEIGHT));
        }

        let ctx = LayoutContext { viewport };
        for widget in self.widgets_mut() {
            widget.layout(&ctx);
        }
    }
}

impl TargetResolver for Scene {
    fn resolve(&mut self, target: Target) -> Option<&mut dyn Animatable> {
        match target {
            Target::Title => Some(&mut self.title),
            Target::Particle(i) => self.background.particles_mut().get_mut(i).map(|p| p as &mut dyn Animatable),
            Target::Tile(i) => self.tiles.get_mut(i).map(|t| t as &mut dyn Animatable),
        }
    }
}

// =============================================================================
// Screen
// =============================================================================

/// The welcome screen: widgets, animation state and the frame clock.
pub struct Screen {
    viewport: Viewport,
    scene: Scene,
    tweens: TweenEngine,
    clock: FrameClock<SceneEvent>,
    rng: Box<dyn RandomSource>,
}

impl Screen {
    /// Screen seeded from `config.seed`, or from OS entropy when unset.
    pub fn new(config: ScreenConfig) -> Self {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::from_entropy()),
        };
        Self::with_rng(config, rng)
    }

    /// Screen drawing randomness from `rng`.
    ///
    /// Lays out every widget, starts the title pulse and queues the
    /// staggered particle creations.
    pub fn with_rng(config: ScreenConfig, rng: Box<dyn RandomSource>) -> Self {
        let viewport = Viewport::sanitized(config.viewport.width, config.viewport.height);
        let mut screen = Self {
            viewport,
            scene: Scene::new(),
            tweens: TweenEngine::new(),
            clock: FrameClock::new(),
            rng,
        };
        screen.scene.layout(viewport);

        screen.tweens.schedule(
            Target::Title,
            Property::Color,
            vec![
                Leg::to(Value::Color(TEAL), TITLE_PULSE_SECS),
                Leg::to(Value::Color(TEAL_BRIGHT), TITLE_PULSE_SECS),
            ],
            true,
        );
        ParticleField::spawn(config.particle_count, config.particle_stagger, &mut screen.clock);

        debug!(width = viewport.width, height = viewport.height, "welcome screen ready");
        screen
    }

    /// Apply a new viewport size from the platform shell.
    pub fn resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::sanitized(width, height);
        if viewport == self.viewport {
            return;
        }
        debug!(
            from_w = self.viewport.width,
            from_h = self.viewport.height,
            to_w = viewport.width,
            to_h = viewport.height,
            "resize"
        );
        self.viewport = viewport;
        self.scene.layout(viewport);
        // Legs still heading for points of the old viewport end inside the new one
        let refitted = self.tweens.fit_to_viewport(viewport);
        trace!(refitted, "walk targets refitted");
    }

    /// Route a touch event. Returns whether a widget consumed it.
    pub fn handle_touch(&mut self, event: TouchEvent) -> bool {
        let mut ctx = TouchContext {
            tweens: &mut self.tweens,
        };
        let mut widgets = self.scene.widgets_mut();
        let handled = match event.phase {
            TouchPhase::Up => widgets
                .iter_mut()
                .rev()
                .fold(false, |handled, widget| widget.on_touch(&event, &mut ctx) || handled),
            TouchPhase::Down | TouchPhase::Move => widgets.iter_mut().rev().any(|widget| widget.on_touch(&event, &mut ctx)),
        };
        trace!(phase = ?event.phase, x = event.pos.x, y = event.pos.y, handled, "touch");
        handled
    }

    /// Advance scene time by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for event in self.clock.advance(dt) {
            match event {
                SceneEvent::CreateParticle => {
                    self.scene
                        .background
                        .particles_mut()
                        .create(self.viewport, self.rng.as_mut(), &mut self.tweens);
                }
            }
        }

        let mut ctx = TickContext {
            viewport: self.viewport,
            rng: self.rng.as_mut(),
        };
        for key in self.tweens.tick(dt, &mut ctx, &mut self.scene) {
            if let Target::Tile(i) = key.target
                && let Some(tile) = self.scene.tiles.get_mut(i)
            {
                tile.on_animation_finished(key.property);
            }
        }
    }

    /// Clear the canvas and rasterize every widget in draw order.
    pub fn draw(&self, canvas: &mut Canvas) {
        let mut painter = Painter::new(canvas, self.viewport);
        painter.clear(CLEAR_COLOR);
        for widget in self.scene.widgets() {
            widget.draw(&mut painter);
        }
    }

    pub const fn viewport(&self) -> Viewport { self.viewport }

    /// Scene time since construction.
    pub const fn elapsed(&self) -> Duration { self.clock.now() }

    pub const fn tweens(&self) -> &TweenEngine { &self.tweens }

    pub const fn clock(&self) -> &FrameClock<SceneEvent> { &self.clock }

    pub const fn background(&self) -> &Background { &self.scene.background }

    pub const fn header(&self) -> &HeaderLogo { &self.scene.header }

    pub const fn title(&self) -> &Label { &self.scene.title }

    pub const fn title_shadow(&self) -> &Label { &self.scene.shadow }

    pub const fn subtitle(&self) -> &Label { &self.scene.subtitle }

    pub const fn footer(&self) -> &Label { &self.scene.footer }

    pub const fn tiles(&self) -> &[OptionTile; 3] { &self.scene.tiles }

    pub fn tile(&self, kind: TileKind) -> Option<&OptionTile> { self.scene.tiles.iter().find(|tile| tile.kind() == kind) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::Rgb888;

    use super::*;
    use crate::random::SequenceSource;
    use crate::widgets::TouchState;

    fn screen(particles: usize) -> Screen {
        let config = ScreenConfig {
            particle_count: particles,
            ..ScreenConfig::default()
        };
        Screen::with_rng(config, Box::new(SequenceSource::new(vec![0.5, 0.25, 0.75])))
    }

    #[test]
    fn test_tile_row_centered() {
        let screen = screen(0);
        let slots: Vec<Rect> = screen.tiles().iter().map(OptionTile::slot).collect();
        assert_eq!(slots[0], Rect::new(270.0, 180.0, 180.0, 220.0));
        assert_eq!(slots[1].x, 510.0);
        assert_eq!(slots[2].x, 750.0);
        assert_eq!(slots[2].right(), 930.0);
    }

    #[test]
    fn test_title_pulse_scheduled() {
        let screen = screen(0);
        assert!(screen.tweens().is_animating(Target::Title, Property::Color));
        assert_eq!(screen.tweens().active_count(), 1);
    }

    #[test]
    fn test_touch_outside_tiles_unhandled() {
        let mut screen = screen(0);
        assert!(!screen.handle_touch(TouchEvent::down(20.0, 20.0)));
        assert_eq!(screen.tweens().active_count(), 1);
    }

    #[test]
    fn test_touch_routes_to_tile_under_point() {
        let mut screen = screen(0);
        let center = screen.tiles()[1].slot().center();
        assert!(screen.handle_touch(TouchEvent::down(center.x, center.y)));
        assert_eq!(screen.tiles()[1].state(), TouchState::Pressed);
        assert_eq!(screen.tiles()[0].state(), TouchState::Idle);
        assert!(screen.tweens().is_animating(Target::Tile(1), Property::Size));
    }

    #[test]
    fn test_release_elsewhere_reaches_held_tile() {
        let mut screen = screen(0);
        let login = screen.tiles()[0].slot().center();
        let exit = screen.tiles()[2].slot().center();
        screen.handle_touch(TouchEvent::down(login.x, login.y));
        screen.handle_touch(TouchEvent::moved(login.x + 5.0, login.y));
        assert_eq!(screen.tiles()[0].state(), TouchState::Highlighted);

        // Released over another tile: that tile consumes it, Login still releases
        assert!(screen.handle_touch(TouchEvent::up(exit.x, exit.y)));
        assert_eq!(screen.tiles()[0].state(), TouchState::Idle);
        assert!(!screen.tiles()[0].is_held());
    }

    #[test]
    fn test_resize_relays_out_immediately() {
        let mut screen = screen(0);
        screen.resize(900.0, 600.0);
        assert_eq!(screen.viewport(), Viewport::new(900.0, 600.0));
        assert_eq!(screen.tiles()[0].slot(), Rect::new(120.0, 80.0, 180.0, 220.0));
        assert_eq!(screen.header().rect().top(), 590.0);
    }

    #[test]
    fn test_particles_created_on_schedule() {
        let mut screen = screen(3);
        assert_eq!(screen.background().particles().len(), 0);
        screen.tick(Duration::ZERO);
        assert_eq!(screen.background().particles().len(), 1);
        screen.tick(Duration::from_millis(200));
        screen.tick(Duration::from_millis(200));
        assert_eq!(screen.background().particles().len(), 3);
        assert_eq!(screen.clock().pending(), 0);
    }

    #[test]
    fn test_bounce_return_idles_tile() {
        let mut screen = screen(0);
        let center = screen.tiles()[0].slot().center();
        screen.handle_touch(TouchEvent::down(center.x, center.y));
        screen.tick(Duration::from_millis(100));
        screen.tick(Duration::from_millis(100));
        assert_eq!(screen.tiles()[0].state(), TouchState::Idle);
        assert_eq!(screen.tiles()[0].size(), OptionTile::BASE_SIZE);
    }

    #[test]
    fn test_draw_fills_canvas() {
        let screen = screen(0);
        let mut canvas = Canvas::new(1200, 800);
        screen.draw(&mut canvas);
        // Bottom-left corner is the opaque lower background layer
        assert_eq!(canvas.pixel(0, 799), Some(CLEAR_COLOR.to_rgb888()));
        // Header logo disc center is teal
        let logo = screen.header().rect().center();
        let y = (800.0 - logo.y) as i32;
        assert_eq!(canvas.pixel(logo.x as i32 - 20, y), Some(TEAL.to_rgb888()));
        assert_ne!(canvas.pixel(600, 100), Some(Rgb888::new(0, 0, 0)));
    }
}
