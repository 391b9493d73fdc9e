//! Drifting background particles.
//!
//! # Spawning
//!
//! [`ParticleField::spawn`] does not create anything itself. It queues
//! `count` one-shot [`SceneEvent::CreateParticle`] timers at
//! `0, Δ, 2Δ, …, (count - 1)Δ`, and each firing calls
//! [`ParticleField::create`]. The field fades in one particle at a time.
//!
//! # Random Walk
//!
//! Every particle owns one repeating two-leg position track. Both legs end at
//! [`EndValue::ViewportPoint`](crate::animations::EndValue::ViewportPoint)
//! with a uniform duration, so each leg samples a fresh destination inside
//! whatever the viewport is *when that leg begins*. Particles therefore
//! follow a resize on their next leg instead of being reset.
//!
//! Particles are never removed.

use std::time::Duration;

use tracing::{debug, trace};

use crate::animations::{Animatable, Leg, Property, Target, TweenEngine, Value};
use crate::clock::{FrameClock, SceneEvent};
use crate::colors::{PARTICLE, Rgba};
use crate::config::{
    PARTICLE_ALPHA_MAX,
    PARTICLE_ALPHA_MIN,
    PARTICLE_LEG_MAX_SECS,
    PARTICLE_LEG_MIN_SECS,
    PARTICLE_SIZE_MAX,
    PARTICLE_SIZE_MIN,
};
use crate::geometry::{Vec2, Viewport};
use crate::random::RandomSource;
use crate::widgets::Shape;

/// A translucent disc drifting across the background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Bottom-left corner of the disc's bounding box.
    pub position: Vec2,
    /// Diameter in whole pixels.
    pub size: f32,
    pub color: Rgba,
}

impl Particle {
    /// Disc primitive for the current position.
    pub fn shape(&self) -> Shape {
        let radius = self.size / 2.0;
        Shape::Disc {
            center: Vec2::new(self.position.x + radius, self.position.y + radius),
            diameter: self.size,
            color: self.color,
        }
    }
}

impl Animatable for Particle {
    fn value(&self, property: Property) -> Option<Value> {
        match property {
            Property::Position => Some(Value::Pair(self.position)),
            _ => None,
        }
    }

    fn set_value(&mut self, property: Property, value: Value) {
        if let (Property::Position, Some(position)) = (property, value.as_pair()) {
            self.position = position;
        }
    }
}

/// Owns every particle; motion is delegated to the tween engine.
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub const fn new() -> Self { Self { particles: Vec::new() } }

    /// Queue `count` staggered creations. `count == 0` is a no-op.
    pub fn spawn(
        count: usize,
        stagger: Duration,
        clock: &mut FrameClock<SceneEvent>,
    ) {
        if count == 0 {
            return;
        }
        for i in 0..count {
            let delay = stagger.saturating_mul(u32::try_from(i).unwrap_or(u32::MAX));
            clock.schedule_once(delay, SceneEvent::CreateParticle);
        }
        debug!(count, stagger_ms = stagger.as_millis() as u64, "particle spawn queued");
    }

    /// Create one particle at a random point of `viewport` and start its walk.
    ///
    /// Returns the new particle's index.
    pub fn create(
        &mut self,
        viewport: Viewport,
        rng: &mut dyn RandomSource,
        tweens: &mut TweenEngine,
    ) -> usize {
        let position = Vec2::new(rng.uniform(0.0, viewport.width), rng.uniform(0.0, viewport.height));
        let size = rng.uniform_int(PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX);
        let alpha = rng.uniform(PARTICLE_ALPHA_MIN, PARTICLE_ALPHA_MAX);

        let index = self.particles.len();
        self.particles.push(Particle {
            position,
            size,
            color: PARTICLE.with_alpha(alpha),
        });

        let walk = Leg::random_point(PARTICLE_LEG_MIN_SECS, PARTICLE_LEG_MAX_SECS);
        tweens.schedule(Target::Particle(index), Property::Position, vec![walk; 2], true);

        trace!(index, x = position.x, y = position.y, size, "particle created");
        index
    }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn iter(&self) -> core::slice::Iter<'_, Particle> { self.particles.iter() }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> { self.particles.get_mut(index) }

    pub fn len(&self) -> usize { self.particles.len() }

    pub fn is_empty(&self) -> bool { self.particles.is_empty() }
}

impl<'a> IntoIterator for &'a ParticleField {
    type IntoIter = core::slice::Iter<'a, Particle>;
    type Item = &'a Particle;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
