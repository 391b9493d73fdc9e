//! Property-based invariant tests for the welcome screen.
//!
//! Verifies:
//! 1. Particles never leave the viewport they were created in, and every
//!    walk target follows a resize
//! 2. A tile bounce stays between 95% and 100% of the footprint and
//!    always ends exactly on the footprint, back in `Idle`
//! 3. Touch-down is handled exactly when it lands on a tile
//! 4. The title pulse never leaves the teal range

use std::time::Duration;

use proptest::prelude::*;
use welcome_screen::animations::{Property, Target, Value};
use welcome_screen::colors::{TEAL, TEAL_BRIGHT};
use welcome_screen::config::{BOUNCE_SCALE, ScreenConfig};
use welcome_screen::geometry::{Vec2, Viewport};
use welcome_screen::input::TouchEvent;
use welcome_screen::random::SequenceSource;
use welcome_screen::screens::Screen;
use welcome_screen::widgets::{OptionTile, TileKind, TouchState};

const EPS: f32 = 1e-3;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_frames(max_ms: u64) -> impl Strategy<Value = Vec<Duration>> {
    prop::collection::vec((1..=max_ms).prop_map(Duration::from_millis), 1..300)
}

fn arb_tile() -> impl Strategy<Value = TileKind> {
    prop_oneof![Just(TileKind::Login), Just(TileKind::SignUp), Just(TileKind::Exit)]
}

fn quiet_screen() -> Screen {
    let config = ScreenConfig {
        particle_count: 0,
        ..ScreenConfig::default()
    };
    Screen::with_rng(config, Box::new(SequenceSource::default()))
}

fn in_range(v: f32, lo: f32, hi: f32) -> bool { v >= lo.min(hi) - EPS && v <= lo.max(hi) + EPS }

// ═════════════════════════════════════════════════════════════════════════
// 1. Particle bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn particles_stay_inside_viewport(
        seed in any::<u64>(),
        width in 1.0f32..2000.0,
        height in 1.0f32..2000.0,
        count in 1usize..8,
        frames in arb_frames(100),
    ) {
        let config = ScreenConfig {
            particle_count: count,
            seed: Some(seed),
            viewport: Viewport::new(width, height),
            ..ScreenConfig::default()
        };
        let mut screen = Screen::new(config);

        for dt in frames {
            screen.tick(dt);
            for (i, p) in screen.background().particles().iter().enumerate() {
                prop_assert!(in_range(p.position.x, 0.0, width), "particle {} x {}", i, p.position.x);
                prop_assert!(in_range(p.position.y, 0.0, height), "particle {} y {}", i, p.position.y);

                let track = screen.tweens().track(Target::Particle(i), Property::Position);
                prop_assert!(track.is_some(), "particle {} lost its walk", i);
                if let Some(Value::Pair(end)) = track.and_then(|t| t.current_end()) {
                    prop_assert!(in_range(end.x, 0.0, width) && in_range(end.y, 0.0, height));
                }
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn walk_targets_follow_resize(
        seed in any::<u64>(),
        before in (1.0f32..2000.0, 1.0f32..2000.0),
        after in (1.0f32..2000.0, 1.0f32..2000.0),
        warmup in arb_frames(100),
        frames in arb_frames(100),
    ) {
        let config = ScreenConfig {
            particle_count: 6,
            particle_stagger: Duration::ZERO,
            seed: Some(seed),
            viewport: Viewport::new(before.0, before.1),
        };
        let mut screen = Screen::new(config);
        for dt in warmup {
            screen.tick(dt);
        }
        screen.resize(after.0, after.1);

        for dt in std::iter::once(Duration::ZERO).chain(frames) {
            for i in 0..screen.background().particles().len() {
                let track = screen.tweens().track(Target::Particle(i), Property::Position);
                if let Some(Value::Pair(end)) = track.and_then(|t| t.current_end()) {
                    prop_assert!(
                        in_range(end.x, 0.0, after.0) && in_range(end.y, 0.0, after.1),
                        "particle {} end {:?} outside {:?}", i, end, after
                    );
                }
            }
            screen.tick(dt);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Bounce restores the footprint
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bounce_restores_footprint(kind in arb_tile(), steps in prop::collection::vec(1u64..=50, 1..64)) {
        let mut screen = quiet_screen();
        let center = screen.tile(kind).expect("tile").visual_rect().center();
        prop_assert!(screen.handle_touch(TouchEvent::down(center.x, center.y)));

        let base = OptionTile::BASE_SIZE;
        let low = base.scale(BOUNCE_SCALE);

        // Cycle the sampled steps until 400ms have passed
        let mut total = Duration::ZERO;
        for ms in steps.iter().cycle() {
            if total >= Duration::from_millis(400) {
                break;
            }
            let dt = Duration::from_millis(*ms);
            screen.tick(dt);
            total += dt;

            let size = screen.tile(kind).expect("tile").size();
            prop_assert!(in_range(size.x, low.x, base.x), "width {} at {:?}", size.x, total);
            prop_assert!(in_range(size.y, low.y, base.y), "height {} at {:?}", size.y, total);
        }

        let tile = screen.tile(kind).expect("tile");
        prop_assert_eq!(tile.size(), base);
        prop_assert_eq!(tile.state(), TouchState::Idle);
        prop_assert!(!screen.tweens().is_animating(tile.target(), Property::Size));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Touch-down hit testing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn touch_down_handled_iff_on_tile(x in 0.0f32..1200.0, y in 0.0f32..800.0) {
        let mut screen = quiet_screen();
        let on_tile = screen
            .tiles()
            .iter()
            .any(|tile| tile.visual_rect().contains(Vec2::new(x, y)));

        prop_assert_eq!(screen.handle_touch(TouchEvent::down(x, y)), on_tile);
        let pressed = screen.tiles().iter().filter(|tile| tile.state() == TouchState::Pressed).count();
        prop_assert_eq!(pressed, usize::from(on_tile));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Title pulse range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn title_color_stays_between_pulse_ends(frames in arb_frames(2500)) {
        let mut screen = quiet_screen();
        for dt in frames {
            screen.tick(dt);
            let c = screen.title().color();
            prop_assert!(in_range(c.r, TEAL.r, TEAL_BRIGHT.r), "red {}", c.r);
            prop_assert!(in_range(c.g, TEAL.g, TEAL_BRIGHT.g), "green {}", c.g);
            prop_assert!(in_range(c.b, TEAL.b, TEAL_BRIGHT.b), "blue {}", c.b);
        }
    }
}
