//! Tween engine: time-based interpolation of widget properties.
//!
//! This module drives every moving part of the welcome screen:
//! - **Particle drift**: perpetual two-leg random walks across the viewport
//! - **Tile bounce**: shrink to 95% and restore on touch-down
//! - **Title pulse**: endless teal ↔ bright-teal color cycle
//!
//! # Tracks and Legs
//!
//! A [`Track`] animates one [`Property`] of one [`Target`] through an
//! ordered list of [`Leg`]s. Each leg interpolates from a start value
//! (read from the target when the leg begins) to an end value over a
//! duration, shaped by an [`EasingFn`].
//!
//! ```text
//!   leg 0                   leg 1                   leg 0 (repeat)
//! ├───────────────────────┼───────────────────────┼──────────── ...
//! start ──────────► end0  end0 ──────────► end1   end1 ───► (resampled)
//! ```
//!
//! When a leg's elapsed time reaches its duration the property snaps to the
//! exact end value and the next leg begins with that value as its start.
//! Time left over in the frame carries into the next leg, so a chain of
//! fixed legs takes exactly the sum of its durations at any frame rate. Legs with an [`EndValue::ViewportPoint`] end or a
//! [`LegDuration::Uniform`] duration resample on every begin, so a repeating
//! random walk keeps producing fresh legs instead of replaying one path.
//!
//! # Replacement, Not Blending
//!
//! At most one track exists per `(target, property)` pair. Scheduling onto a
//! busy pair drops the old track on the spot; the new one starts from
//! whatever value the property holds at that moment.
//!
//! # Degenerate Input
//!
//! - A leg with a non-positive duration is an immediate set to its end value.
//! - A repeating track made only of zero-duration legs completes at most one
//!   full cycle per tick.
//! - A track whose target no longer resolves is retired silently.

pub mod easing;

use std::time::Duration;

pub use easing::{EasingFn, ease_in, ease_in_cubic, ease_in_out, ease_out, ease_out_cubic, linear};
use tracing::trace;

use crate::colors::Rgba;
use crate::geometry::{Vec2, Viewport};
use crate::random::RandomSource;

// =============================================================================
// Addressing
// =============================================================================

/// An animatable object on the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// The pulsing title label.
    Title,
    /// Background particle by creation index.
    Particle(usize),
    /// Option tile by position in the row.
    Tile(usize),
}

/// An animatable property of a [`Target`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Position,
    Size,
    Color,
}

/// Identity of a track. At most one track per key is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrackKey {
    pub target: Target,
    pub property: Property,
}

impl TrackKey {
    pub const fn new(target: Target, property: Property) -> Self { Self { target, property } }
}

// =============================================================================
// Values
// =============================================================================

/// A property value the engine can interpolate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Scalar(f32),
    Pair(Vec2),
    Color(Rgba),
}

impl Value {
    /// Interpolate from `self` to `to` at eased progress `t`.
    ///
    /// Mismatched kinds cannot be blended and resolve to `to`.
    pub fn interpolate(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return to;
        }
        match (self, to) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar((b - a).mul_add(t, a)),
            (Self::Pair(a), Self::Pair(b)) => Self::Pair(Vec2::new((b.x - a.x).mul_add(t, a.x), (b.y - a.y).mul_add(t, a.y))),
            (Self::Color(a), Self::Color(b)) => Self::Color(a.lerp(b, t)),
            _ => to,
        }
    }

    pub const fn as_pair(self) -> Option<Vec2> {
        match self {
            Self::Pair(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_color(self) -> Option<Rgba> {
        match self {
            Self::Color(c) => Some(c),
            _ => None,
        }
    }
}

// =============================================================================
// Legs
// =============================================================================

/// Where a leg ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndValue {
    /// A fixed value.
    Fixed(Value),
    /// A uniform random point in the viewport, sampled when the leg begins.
    ViewportPoint,
}

/// How long a leg lasts, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LegDuration {
    Fixed(f32),
    /// Uniform random duration, sampled when the leg begins.
    Uniform { min: f32, max: f32 },
}

/// One segment of a chained animation.
#[derive(Clone, Copy, Debug)]
pub struct Leg {
    pub end: EndValue,
    pub duration: LegDuration,
    pub easing: EasingFn,
}

impl Leg {
    /// Linear leg to a fixed value.
    pub fn to(value: Value, seconds: f32) -> Self {
        Self {
            end: EndValue::Fixed(value),
            duration: LegDuration::Fixed(seconds),
            easing: linear,
        }
    }

    /// Linear leg to a random viewport point over a random duration.
    pub fn random_point(min_seconds: f32, max_seconds: f32) -> Self {
        Self {
            end: EndValue::ViewportPoint,
            duration: LegDuration::Uniform {
                min: min_seconds,
                max: max_seconds,
            },
            easing: linear,
        }
    }

    /// Set the easing function (builder).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }
}

// =============================================================================
// Target Access
// =============================================================================

/// An object whose properties a track can read and write.
pub trait Animatable {
    /// Current value of `property`, or `None` if the object lacks it.
    fn value(&self, property: Property) -> Option<Value>;

    /// Write an interpolated value.
    fn set_value(&mut self, property: Property, value: Value);
}

/// Maps [`Target`] handles to live objects for the duration of a tick.
pub trait TargetResolver {
    fn resolve(&mut self, target: Target) -> Option<&mut dyn Animatable>;
}

/// Per-tick inputs shared by all tracks.
pub struct TickContext<'a> {
    /// Current viewport; random endpoints are sampled from it.
    pub viewport: Viewport,
    pub rng: &'a mut dyn RandomSource,
}

// =============================================================================
// Tracks
// =============================================================================

/// The leg currently being played, with everything resolved.
#[derive(Clone, Copy, Debug)]
struct ActiveLeg {
    start: Value,
    end: Value,
    /// Seconds; `0.0` means immediate set.
    duration: f32,
    /// Seconds, always within `[0, duration]`.
    elapsed: f32,
    easing: EasingFn,
}

impl ActiveLeg {
    fn is_complete(&self) -> bool { self.elapsed >= self.duration }

    fn current(&self) -> Value {
        if self.is_complete() {
            return self.end;
        }
        let progress = self.elapsed / self.duration;
        self.start.interpolate(self.end, (self.easing)(progress))
    }
}

/// A scheduled animation of one property.
#[derive(Debug)]
pub struct Track {
    key: TrackKey,
    legs: Vec<Leg>,
    repeat: bool,
    index: usize,
    active: Option<ActiveLeg>,
}

impl Track {
    pub const fn key(&self) -> TrackKey { self.key }

    /// Index of the leg being played (or about to begin).
    pub const fn leg_index(&self) -> usize { self.index }

    /// Resolved end value of the active leg, if it has begun.
    pub fn current_end(&self) -> Option<Value> { self.active.map(|leg| leg.end) }

    /// Resolved duration of the active leg in seconds, if it has begun.
    pub fn current_duration(&self) -> Option<f32> { self.active.map(|leg| leg.duration) }

    /// Elapsed seconds in the active leg.
    pub fn elapsed(&self) -> f32 { self.active.map_or(0.0, |leg| leg.elapsed) }

    /// Start the leg at `self.index`, reading the start value from `object`.
    fn begin_leg(
        &mut self,
        object: &dyn Animatable,
        ctx: &mut TickContext<'_>,
    ) -> Option<ActiveLeg> {
        let leg = *self.legs.get(self.index)?;
        let start = object.value(self.key.property)?;
        let end = match leg.end {
            EndValue::Fixed(value) => value,
            EndValue::ViewportPoint => {
                let x = ctx.rng.uniform(0.0, ctx.viewport.width);
                let y = ctx.rng.uniform(0.0, ctx.viewport.height);
                Value::Pair(Vec2::new(x, y))
            }
        };
        let duration = match leg.duration {
            LegDuration::Fixed(secs) => secs,
            LegDuration::Uniform { min, max } => ctx.rng.uniform(min, max),
        };
        // NaN and negative durations both degrade to an immediate set
        let duration = if duration > 0.0 { duration } else { 0.0 };
        Some(ActiveLeg {
            start,
            end,
            duration,
            elapsed: 0.0,
            easing: leg.easing,
        })
    }

    /// Advance by `dt` seconds. Returns `false` once the track is retired.
    fn advance(
        &mut self,
        dt: f32,
        ctx: &mut TickContext<'_>,
        targets: &mut dyn TargetResolver,
    ) -> bool {
        let Some(object) = targets.resolve(self.key.target) else {
            return false;
        };

        let mut dt_left = dt;
        let mut completions = 0;
        loop {
            let mut leg = match self.active {
                Some(leg) => leg,
                None => match self.begin_leg(object, ctx) {
                    Some(leg) => leg,
                    None => return false,
                },
            };

            let remaining = leg.duration - leg.elapsed;
            if dt_left < remaining {
                leg.elapsed += dt_left;
                object.set_value(self.key.property, leg.current());
                self.active = Some(leg);
                return true;
            }

            // Leg complete: snap, carry the leftover time, move the cursor
            dt_left -= remaining;
            object.set_value(self.key.property, leg.end);
            self.active = None;
            completions += 1;
            self.index += 1;
            if self.index >= self.legs.len() {
                if !self.repeat {
                    return false;
                }
                self.index = 0;
            }
            if completions >= self.legs.len() {
                // Next leg begins on the following tick
                return true;
            }
        }
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Owns every active track and advances them once per frame.
#[derive(Debug, Default)]
pub struct TweenEngine {
    tracks: Vec<Track>,
}

impl TweenEngine {
    pub const fn new() -> Self { Self { tracks: Vec::new() } }

    /// Register a track, replacing any track on the same target/property.
    ///
    /// An empty `legs` list only cancels the existing track.
    pub fn schedule(
        &mut self,
        target: Target,
        property: Property,
        legs: Vec<Leg>,
        repeat: bool,
    ) {
        let key = TrackKey::new(target, property);
        let before = self.tracks.len();
        self.tracks.retain(|track| track.key != key);
        if self.tracks.len() != before {
            trace!(?key, "replacing active track");
        }
        if legs.is_empty() {
            return;
        }
        trace!(?key, legs = legs.len(), repeat, "track scheduled");
        self.tracks.push(Track {
            key,
            legs,
            repeat,
            index: 0,
            active: None,
        });
    }

    /// Advance every track by `dt`.
    ///
    /// Returns the keys of tracks that retired during this tick, in
    /// scheduling order.
    pub fn tick(
        &mut self,
        dt: Duration,
        ctx: &mut TickContext<'_>,
        targets: &mut dyn TargetResolver,
    ) -> Vec<TrackKey> {
        let dt = dt.as_secs_f32();
        let mut retired = Vec::new();
        self.tracks.retain_mut(|track| {
            let alive = track.advance(dt, ctx, targets);
            if !alive {
                retired.push(track.key);
            }
            alive
        });
        retired
    }

    /// Pull the resolved end of every in-flight viewport-point leg into
    /// `viewport`. Current values are left untouched.
    ///
    /// Returns the number of legs whose end moved.
    pub fn fit_to_viewport(&mut self, viewport: Viewport) -> usize {
        let mut moved = 0;
        for track in &mut self.tracks {
            let samples_viewport = track
                .legs
                .get(track.index)
                .is_some_and(|leg| leg.end == EndValue::ViewportPoint);
            if !samples_viewport {
                continue;
            }
            if let Some(leg) = track.active.as_mut()
                && let Value::Pair(end) = leg.end
            {
                let fitted = viewport.clamp(end);
                if fitted != end {
                    leg.end = Value::Pair(fitted);
                    moved += 1;
                }
            }
        }
        moved
    }

    /// Whether `target`/`property` currently has a track.
    pub fn is_animating(
        &self,
        target: Target,
        property: Property,
    ) -> bool {
        self.track(target, property).is_some()
    }

    /// Look up the track for `target`/`property`.
    pub fn track(
        &self,
        target: Target,
        property: Property,
    ) -> Option<&Track> {
        let key = TrackKey::new(target, property);
        self.tracks.iter().find(|track| track.key == key)
    }

    /// Number of active tracks.
    pub fn active_count(&self) -> usize { self.tracks.len() }

    /// Number of active tracks whose key matches `pred`.
    pub fn count_where(&self, mut pred: impl FnMut(&TrackKey) -> bool) -> usize {
        self.tracks.iter().filter(|track| pred(&track.key)).count()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
