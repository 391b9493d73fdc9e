//! End-to-end welcome screen scenarios.
//!
//! These drive [`Screen`] the way the simulator does: fixed frame steps,
//! touch events in layout space and viewport changes, then inspect
//! widget state through the public accessors.

use std::time::Duration;

use welcome_screen::animations::{Property, Target, Value};
use welcome_screen::colors::{TEAL, TEAL_BRIGHT};
use welcome_screen::config::ScreenConfig;
use welcome_screen::geometry::{Vec2, Viewport};
use welcome_screen::input::TouchEvent;
use welcome_screen::random::{RngSource, SequenceSource};
use welcome_screen::render::Canvas;
use welcome_screen::screens::Screen;
use welcome_screen::widgets::{OptionTile, TileKind, TouchState};

const FRAME: Duration = Duration::from_millis(16);

fn seeded_screen(seed: u64) -> Screen {
    let config = ScreenConfig {
        seed: Some(seed),
        ..ScreenConfig::default()
    };
    Screen::new(config)
}

fn run_for(screen: &mut Screen, total: Duration) {
    let frames = total.as_millis() / FRAME.as_millis();
    for _ in 0..frames {
        screen.tick(FRAME);
    }
}

fn approx(a: f32, b: f32) -> bool { (a - b).abs() < 1e-3 }

// =============================================================================
// Full scenario
// =============================================================================

#[test]
fn welcome_screen_scenario() {
    let mut screen = seeded_screen(2023);
    assert_eq!(screen.viewport(), Viewport::new(1200.0, 800.0));

    // 4s after spawn: all 20 staggered creations have fired
    run_for(&mut screen, Duration::from_secs(4));
    let particles = screen.background().particles();
    assert_eq!(particles.len(), 20);
    for i in 0..particles.len() {
        let track = screen.tweens().track(Target::Particle(i), Property::Position).expect("particle track");
        let Some(Value::Pair(end)) = track.current_end() else {
            panic!("particle {i} has no resolved destination");
        };
        assert!((0.0..=1200.0).contains(&end.x), "particle {i} end {end:?}");
        assert!((0.0..=800.0).contains(&end.y), "particle {i} end {end:?}");
    }

    // Touch-down at the Login tile's center
    let login = screen.tile(TileKind::Login).expect("login tile").visual_rect().center();
    assert!(screen.handle_touch(TouchEvent::down(login.x, login.y)));
    assert_eq!(screen.tile(TileKind::Login).map(OptionTile::state), Some(TouchState::Pressed));

    screen.tick(Duration::from_millis(100));
    screen.tick(Duration::from_millis(100));
    let tile = screen.tile(TileKind::Login).expect("login tile");
    assert_eq!(tile.size(), OptionTile::BASE_SIZE);
    assert_eq!(tile.state(), TouchState::Idle);

    // Resize: layers follow, particles keep their positions
    let before: Vec<Vec2> = screen.background().particles().iter().map(|p| p.position).collect();
    screen.resize(900.0, 600.0);
    let bg = screen.background();
    assert_eq!(bg.lower().y, 0.0);
    assert!(approx(bg.lower().top(), 360.0));
    assert!(approx(bg.upper().y, 360.0));
    assert!(approx(bg.upper().top(), 600.0));
    let after: Vec<Vec2> = bg.particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
}

// =============================================================================
// Individual properties
// =============================================================================

#[test]
fn spawn_creates_one_particle_per_stagger_step() {
    let mut screen = seeded_screen(1);
    let mut counts = Vec::new();
    screen.tick(Duration::ZERO);
    counts.push(screen.background().particles().len());
    for _ in 0..19 {
        screen.tick(Duration::from_millis(200));
        counts.push(screen.background().particles().len());
    }
    assert_eq!(counts, (1..=20).collect::<Vec<_>>());

    // Never more than the configured count
    run_for(&mut screen, Duration::from_secs(10));
    assert_eq!(screen.background().particles().len(), 20);
}

#[test]
fn zero_particles_is_noop() {
    let config = ScreenConfig {
        particle_count: 0,
        ..ScreenConfig::default()
    };
    let mut screen = Screen::with_rng(config, Box::new(SequenceSource::default()));
    run_for(&mut screen, Duration::from_secs(2));
    assert!(screen.background().particles().is_empty());
    assert_eq!(screen.clock().pending(), 0);
}

#[test]
fn touch_outside_every_tile_is_unhandled() {
    let mut screen = seeded_screen(3);
    assert!(!screen.handle_touch(TouchEvent::down(5.0, 5.0)));
    assert!(screen.tiles().iter().all(|tile| tile.state() == TouchState::Idle));
    assert!(!screen.tweens().is_animating(Target::Tile(0), Property::Size));
}

#[test]
fn touch_down_starts_exactly_one_bounce() {
    let mut screen = seeded_screen(4);
    let before = screen.tweens().active_count();
    let exit = screen.tile(TileKind::Exit).expect("exit tile").visual_rect().center();
    assert!(screen.handle_touch(TouchEvent::down(exit.x, exit.y)));
    assert_eq!(screen.tweens().active_count(), before + 1);
    assert_eq!(screen.tweens().count_where(|key| matches!(key.target, Target::Tile(_))), 1);
}

#[test]
fn bounce_at_frame_rate_restores_after_two_tenths() {
    let mut screen = seeded_screen(6);
    let login = screen.tile(TileKind::Login).expect("login tile").visual_rect().center();
    assert!(screen.handle_touch(TouchEvent::down(login.x, login.y)));

    let mut elapsed = Duration::ZERO;
    while elapsed < Duration::from_millis(200) {
        screen.tick(FRAME);
        elapsed += FRAME;
    }
    let tile = screen.tile(TileKind::Login).expect("login tile");
    assert_eq!(tile.size(), OptionTile::BASE_SIZE, "after {elapsed:?}");
    assert_eq!(tile.state(), TouchState::Idle);
}

#[test]
fn shrinking_viewport_refits_walk_targets() {
    let mut screen = seeded_screen(2023);
    for _ in 0..300 {
        screen.tick(FRAME);
    }
    let before: Vec<Vec2> = screen.background().particles().iter().map(|p| p.position).collect();

    screen.resize(900.0, 600.0);
    for i in 0..before.len() {
        let track = screen.tweens().track(Target::Particle(i), Property::Position).expect("particle track");
        let Some(Value::Pair(end)) = track.current_end() else {
            panic!("particle {i} has no resolved destination");
        };
        assert!((0.0..=900.0).contains(&end.x), "particle {i} end {end:?}");
        assert!((0.0..=600.0).contains(&end.y), "particle {i} end {end:?}");
    }
    let after: Vec<Vec2> = screen.background().particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
}

#[test]
fn title_pulse_alternates_without_drift() {
    let config = ScreenConfig {
        particle_count: 0,
        ..ScreenConfig::default()
    };
    let mut screen = Screen::with_rng(config, Box::new(SequenceSource::default()));

    // Each 2s tick completes exactly one leg
    for leg in 0..500 {
        screen.tick(Duration::from_secs(2));
        let expected = if leg % 2 == 0 { TEAL } else { TEAL_BRIGHT };
        assert_eq!(screen.title().color(), expected, "leg {leg}");
    }
    assert!(screen.tweens().is_animating(Target::Title, Property::Color));
}

#[test]
fn resize_relays_out_tiles_and_labels() {
    let mut screen = seeded_screen(5);
    screen.resize(1024.0, 768.0);
    let slots: Vec<_> = screen.tiles().iter().map(OptionTile::slot).collect();
    // Row is 660px wide, centered, top edge at half height
    assert_eq!(slots[0].x, 182.0);
    assert_eq!(slots[2].right(), 842.0);
    assert!(slots.iter().all(|slot| slot.top() == 384.0));
    assert_eq!(screen.title().rect().center(), Vec2::new(512.0, 576.0));
    assert_eq!(screen.title_shadow().rect(), screen.title().rect().offset(4.0, -4.0));
}

#[test]
fn particles_follow_resized_viewport_on_next_leg() {
    let config = ScreenConfig {
        particle_count: 5,
        ..ScreenConfig::default()
    };
    let mut screen = Screen::with_rng(config, Box::new(RngSource::seeded(11)));
    run_for(&mut screen, Duration::from_secs(1));
    screen.resize(900.0, 600.0);

    // Longest leg is 15s: after 16s every particle began a leg in the new viewport
    run_for(&mut screen, Duration::from_secs(16));
    for i in 0..5 {
        let track = screen.tweens().track(Target::Particle(i), Property::Position).expect("track");
        let Some(Value::Pair(end)) = track.current_end() else {
            panic!("no destination");
        };
        assert!(end.x <= 900.0 && end.y <= 600.0, "particle {i} end {end:?}");
    }
}

#[test]
fn zero_viewport_is_well_defined() {
    let config = ScreenConfig {
        viewport: Viewport::new(0.0, 0.0),
        ..ScreenConfig::default()
    };
    let mut screen = Screen::with_rng(config, Box::new(SequenceSource::new(vec![0.3, 0.6])));
    run_for(&mut screen, Duration::from_secs(1));
    for p in screen.background().particles() {
        assert_eq!(p.position, Vec2::ZERO);
    }
    // Drawing a degenerate viewport clips instead of panicking
    let mut canvas = Canvas::new(64, 64);
    screen.draw(&mut canvas);
    assert_eq!(canvas.pixels().len(), 64 * 64);
}
