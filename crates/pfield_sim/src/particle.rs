//! Particle record

use pfield_math::{Bounds2, Vec2};
use rand::Rng;

use crate::config::FieldConfig;

/// A single drifting particle
///
/// Position and velocity change every tick. Radius and opacity are fixed at
/// creation and only readable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Position in surface coordinates
    pub position: Vec2,
    /// Velocity in pixels per tick
    pub velocity: Vec2,
    radius: f32,
    opacity: f32,
}

impl Particle {
    /// Create a particle at rest
    pub fn new(position: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
            opacity,
        }
    }

    /// Set the velocity of this particle
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sample a particle uniformly over the surface and the configured ranges
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds2, config: &FieldConfig) -> Self {
        let position = Vec2::new(
            sample_range(rng, 0.0, bounds.width),
            sample_range(rng, 0.0, bounds.height),
        );
        let velocity = Vec2::new(
            sample_symmetric(rng, config.max_speed),
            sample_symmetric(rng, config.max_speed),
        );
        let radius = sample_range(rng, config.radius_min, config.radius_max);
        let opacity = sample_range(rng, config.opacity_min, config.opacity_max);

        Self::new(position, radius, opacity).with_velocity(velocity)
    }

    /// Disc radius in pixels
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Fill alpha
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// Uniform sample from `[lo, hi)`, or `lo` when the range is empty or its span overflows
fn sample_range<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo && (hi - lo).is_finite() {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

/// Uniform sample from `[-max, max]`, or zero when the span is empty or overflows
fn sample_symmetric<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 && (max * 2.0).is_finite() {
        rng.random_range(-max..=max)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_particle_at_rest() {
        let p = Particle::new(Vec2::new(3.0, 4.0), 2.0, 0.5);
        assert_eq!(p.position, Vec2::new(3.0, 4.0));
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.radius(), 2.0);
        assert_eq!(p.opacity(), 0.5);
    }

    #[test]
    fn test_with_velocity() {
        let p = Particle::new(Vec2::ZERO, 1.0, 0.2).with_velocity(Vec2::new(-0.5, 0.0));
        assert_eq!(p.velocity, Vec2::new(-0.5, 0.0));
    }

    #[test]
    fn test_random_particles_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds2::new(640.0, 480.0);
        let config = FieldConfig::default();

        for _ in 0..1000 {
            let p = Particle::random(&mut rng, bounds, &config);
            assert!(p.position.x >= 0.0 && p.position.x < 640.0);
            assert!(p.position.y >= 0.0 && p.position.y < 480.0);
            assert!(p.velocity.x.abs() <= 0.25);
            assert!(p.velocity.y.abs() <= 0.25);
            assert!(p.radius() >= 1.0 && p.radius() < 3.0);
            assert!(p.opacity() >= 0.2 && p.opacity() < 0.7);
        }
    }

    #[test]
    fn test_zero_surface_collapses_to_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Particle::random(&mut rng, Bounds2::new(0.0, 0.0), &FieldConfig::default());
        assert_eq!(p.position, Vec2::ZERO);
    }

    #[test]
    fn test_zero_speed_config() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = FieldConfig {
            max_speed: 0.0,
            ..FieldConfig::default()
        };
        let p = Particle::random(&mut rng, Bounds2::new(10.0, 10.0), &config);
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_same_seed_same_particle() {
        let bounds = Bounds2::new(100.0, 100.0);
        let config = FieldConfig::default();
        let a = Particle::random(&mut StdRng::seed_from_u64(42), bounds, &config);
        let b = Particle::random(&mut StdRng::seed_from_u64(42), bounds, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_overflowing_ranges_do_not_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = FieldConfig {
            max_speed: f32::INFINITY,
            radius_min: -3.0e38,
            radius_max: 3.0e38,
            opacity_min: f32::NAN,
            opacity_max: 1.0,
            ..FieldConfig::default()
        };

        let p = Particle::random(&mut rng, Bounds2::new(10.0, 10.0), &config);

        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.radius(), -3.0e38);
        assert!(p.opacity().is_nan());
    }

    #[test]
    fn test_huge_max_speed_still_samples() {
        let mut rng = StdRng::seed_from_u64(2);
        let config = FieldConfig {
            max_speed: 1.0e38,
            ..FieldConfig::default()
        };
        let p = Particle::random(&mut rng, Bounds2::new(10.0, 10.0), &config);
        assert!(p.velocity.x.abs() <= 1.0e38);
    }
}
