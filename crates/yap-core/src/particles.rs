//! Decorative particle field for the hero background.
//!
//! A fixed set of circles is drawn once from a random source, then each one
//! drifts away from its origin and back on its own period, forever. Layout is
//! pure data; seed the RNG to get a reproducible field.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default number of particles in the hero.
pub const DEFAULT_COUNT: usize = 15;

const MIN_SIZE: f32 = 30.0;
const SIZE_SPREAD: f32 = 80.0;
const MAX_DRIFT: f32 = 10.0;
const MIN_PERIOD_SECS: f32 = 10.0;
const PERIOD_SPREAD_SECS: f32 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// Horizontal origin, percent of the hero width.
    pub x: f32,
    /// Vertical origin, percent of the hero height.
    pub y: f32,
    /// Diameter in CSS pixels (30..110).
    pub size: f32,
    /// Initial scale factor (0.5..1.0).
    pub scale: f32,
    /// Furthest offset from the origin, in percent (each axis -10..10).
    pub drift: (f32, f32),
    /// Duration of one out-and-back loop.
    pub period: Duration,
}

impl Particle {
    fn random<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: MIN_SIZE + rng.gen_range(0.0..SIZE_SPREAD),
            scale: 0.5 + rng.gen_range(0.0..0.5),
            drift: (
                rng.gen_range(-MAX_DRIFT..MAX_DRIFT),
                rng.gen_range(-MAX_DRIFT..MAX_DRIFT),
            ),
            period: Duration::from_secs_f32(
                MIN_PERIOD_SECS + rng.gen_range(0.0..PERIOD_SPREAD_SECS),
            ),
        }
    }

    /// Position (percent) after `elapsed`.
    ///
    /// Linear keyframes origin → origin + drift → origin over one period.
    pub fn position_at(&self, elapsed: Duration) -> (f32, f32) {
        let period = self.period.as_secs_f32();
        if period <= 0.0 {
            return (self.x, self.y);
        }
        let phase = (elapsed.as_secs_f32() % period) / period;
        let t = if phase < 0.5 {
            phase * 2.0
        } else {
            (1.0 - phase) * 2.0
        };
        (self.x + self.drift.0 * t, self.y + self.drift.1 * t)
    }

    /// Rendered diameter after applying the scale factor.
    pub fn apparent_size(&self) -> f32 {
        self.size * self.scale
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count).map(|id| Particle::random(id, rng)).collect();
        Self { particles }
    }

    /// Reproducible field for a given seed.
    pub fn seeded(count: usize, seed: u64) -> Self {
        Self::generate(count, &mut StdRng::seed_from_u64(seed))
    }

    /// Field from OS entropy.
    pub fn random(count: usize) -> Self {
        Self::generate(count, &mut rand::thread_rng())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_layout() {
        assert_eq!(ParticleField::seeded(15, 7), ParticleField::seeded(15, 7));
    }

    #[test]
    fn test_different_seed_different_layout() {
        assert_ne!(ParticleField::seeded(15, 1), ParticleField::seeded(15, 2));
    }

    #[test]
    fn test_values_within_bounds() {
        let field = ParticleField::seeded(200, 42);
        assert_eq!(field.len(), 200);
        for (i, p) in field.particles().iter().enumerate() {
            assert_eq!(p.id, i);
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((30.0..110.0).contains(&p.size));
            assert!((0.5..1.0).contains(&p.scale));
            assert!(p.drift.0.abs() <= 10.0 && p.drift.1.abs() <= 10.0);
            let secs = p.period.as_secs_f32();
            assert!((10.0..=30.0).contains(&secs));
        }
    }

    #[test]
    fn test_drift_loops_back_to_origin() {
        let p = Particle {
            id: 0,
            x: 50.0,
            y: 20.0,
            size: 40.0,
            scale: 1.0,
            drift: (10.0, -4.0),
            period: Duration::from_secs(10),
        };
        assert_eq!(p.position_at(Duration::ZERO), (50.0, 20.0));
        assert_eq!(p.position_at(Duration::from_secs(5)), (60.0, 16.0));
        let (x, y) = p.position_at(Duration::from_millis(2500));
        assert!((x - 55.0).abs() < 1e-4 && (y - 18.0).abs() < 1e-4);
        assert_eq!(p.position_at(Duration::from_secs(10)), (50.0, 20.0));
        assert_eq!(p.position_at(Duration::from_secs(15)), (60.0, 16.0));
    }

    #[test]
    fn test_empty_field() {
        assert!(ParticleField::seeded(0, 1).is_empty());
    }
}
