//! Particle simulation behind the decorative background.
//!
//! # Invariants
//! - At most one particle spawns per tick.
//! - A particle is retired once `age >= max_age` or it has drifted above
//!   the top edge; it is never revived.
//! - Opacity is `(1 - age / max_age) * FADE_SCALE`, so it only decreases.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::surface::DrawSurface;

/// Peak opacity of the linear fade-out.
pub const FADE_SCALE: f64 = 0.6;

/// Tunables of the spawn distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSettings {
    /// Chance of spawning one particle on a tick.
    pub spawn_chance: f64,
    /// Lifetime range in ticks, `[min, max)`.
    pub max_age: (u32, u32),
    /// Upward speed range in px/tick, `[min, max)`.
    pub rise_speed: (f64, f64),
    /// Half-width of the sideways drift range in px/tick.
    pub drift: f64,
    /// Radius range in px, `[min, max)`.
    pub size: (f64, f64),
    /// Opacity given at spawn, `[min, max)`.
    pub base_opacity: (f64, f64),
    /// Distance beyond the bottom/top edge where particles enter/leave.
    pub margin: f64,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            spawn_chance: 0.1,
            max_age: (200, 500),
            rise_speed: (1.0, 3.0),
            drift: 0.25,
            size: (1.0, 4.0),
            base_opacity: (0.3, 0.8),
            margin: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub age: u32,
    pub max_age: u32,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    /// One tick of motion and ageing.
    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.age += 1;
        let spent = f64::from(self.age) / f64::from(self.max_age);
        self.opacity = ((1.0 - spent) * FADE_SCALE).max(0.0);
    }

    pub fn is_retired(&self, margin: f64) -> bool {
        self.age >= self.max_age || self.y <= -margin
    }
}

/// The active particle set and the canvas area it lives in.
///
/// Owned by the animation tick; nothing else reads or writes it.
#[derive(Debug)]
pub struct ParticleField<R = SmallRng> {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    settings: FieldSettings,
    rng: R,
}

impl ParticleField<SmallRng> {
    pub fn seeded(width: f64, height: f64, seed: u64) -> Self {
        Self::new(width, height, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn new(width: f64, height: f64, rng: R) -> Self {
        Self::with_settings(width, height, FieldSettings::default(), rng)
    }

    pub fn with_settings(width: f64, height: f64, settings: FieldSettings, rng: R) -> Self {
        Self {
            particles: Vec::new(),
            width,
            height,
            settings,
            rng,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    /// Spawns (maybe), advances and retires, without drawing.
    pub fn tick(&mut self) {
        self.maybe_spawn();
        for particle in &mut self.particles {
            particle.advance();
        }
        self.retire();
    }

    /// One animation frame: clear, spawn, advance, draw, retire.
    ///
    /// A particle that expires this frame is still drawn once, at its final
    /// (near zero) opacity.
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);
        self.maybe_spawn();
        for particle in &mut self.particles {
            particle.advance();
            surface.draw_particle(particle);
        }
        self.retire();
    }

    fn maybe_spawn(&mut self) {
        let chance = self.settings.spawn_chance;
        let chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        if self.rng.gen_bool(chance) {
            let particle = self.spawn();
            self.particles.push(particle);
        }
    }

    fn spawn(&mut self) -> Particle {
        let s = &self.settings;
        let rng = &mut self.rng;
        let drift = s.drift.abs();
        let (min_age, max_age) = s.max_age;
        Particle {
            x: sample(rng, (0.0, self.width)),
            y: self.height + s.margin,
            vx: sample(rng, (-drift, drift)),
            vy: -sample(rng, s.rise_speed),
            age: 0,
            max_age: if min_age < max_age {
                rng.gen_range(min_age..max_age)
            } else {
                min_age
            }
            .max(1),
            size: sample(rng, s.size),
            opacity: sample(rng, s.base_opacity),
        }
    }

    fn retire(&mut self) {
        let margin = self.settings.margin;
        self.particles.retain(|particle| !particle.is_retired(margin));
    }
}

/// Uniform in `[min, max)`; a fixed, inverted or non-finite range yields `min`
/// (or 0 when `min` is not finite).
fn sample<R: Rng>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    if !min.is_finite() {
        return 0.0;
    }
    if max.is_finite() && min < max {
        rng.gen_range(min..max)
    } else {
        min
    }
}
