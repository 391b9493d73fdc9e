//! Frame clock with one-shot timers.
//!
//! The platform shell calls [`FrameClock::advance`] once per frame with the
//! measured frame time. Timers are stored as absolute fire times in
//! `Duration`, so a schedule of `0, Δ, 2Δ, …` never accumulates float error
//! no matter how many frames pass before it fires.

use std::time::Duration;

/// Deferred work scheduled on the welcome screen's clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    /// Create the next background particle.
    CreateParticle,
}

/// Clamp a measured frame time to `max`.
///
/// A stalled window then resumes smoothly instead of jumping every
/// animation to its end.
#[inline]
pub fn clamp_frame_dt(measured: Duration, max: Duration) -> Duration { measured.min(max) }

/// A pending one-shot timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Timer<E> {
    fire_at: Duration,
    event: E,
}

/// Monotonic scene time plus a queue of one-shot timers.
#[derive(Debug)]
pub struct FrameClock<E> {
    now: Duration,
    timers: Vec<Timer<E>>,
}

impl<E> Default for FrameClock<E> {
    fn default() -> Self { Self::new() }
}

impl<E> FrameClock<E> {
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            timers: Vec::new(),
        }
    }

    /// Scene time since the clock was created.
    pub const fn now(&self) -> Duration { self.now }

    /// Fire `event` once, `delay` from now.
    ///
    /// A zero delay fires on the next [`advance`](Self::advance), even one
    /// with `dt == 0`.
    pub fn schedule_once(&mut self, delay: Duration, event: E) {
        let fire_at = self.now.saturating_add(delay);
        self.timers.push(Timer { fire_at, event });
    }

    /// Number of timers still waiting to fire.
    pub fn pending(&self) -> usize { self.timers.len() }

    /// Move time forward by `dt` and return every event now due,
    /// in fire-time order (ties in scheduling order).
    pub fn advance(&mut self, dt: Duration) -> Vec<E> {
        self.now = self.now.saturating_add(dt);
        let now = self.now;

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.timers.len() {
            if self.timers[i].fire_at <= now {
                due.push(self.timers.remove(i));
            } else {
                i += 1;
            }
        }
        // Stable: equal fire times keep insertion order
        due.sort_by_key(|timer| timer.fire_at);
        due.into_iter().map(|timer| timer.event).collect()
    }
}
