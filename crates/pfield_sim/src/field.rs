//! Particle field and per-frame simulation

use std::time::Duration;

use pfield_math::{Bounds2, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FieldConfig;
use crate::forces::{link_alpha, repulsion_displacement};
use crate::particle::Particle;
use crate::surface::DrawSurface;

/// Input delivered to the field between ticks
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldEvent {
    /// Pointer moved to a new surface position
    PointerMoved(Vec2),
    /// Drawing surface changed size
    Resized { width: f32, height: f32 },
}

/// Counters from a single tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Particles pushed by the pointer this tick
    pub repelled: usize,
    /// Links drawn this tick
    pub links: usize,
}

/// A fixed-size set of particles on a drawing surface
pub struct ParticleField {
    /// Particle index is identity; the vector is never resized
    particles: Vec<Particle>,
    /// Last known pointer position
    pointer: Vec2,
    /// Current surface extent
    bounds: Bounds2,
    /// Field configuration
    config: FieldConfig,
}

impl ParticleField {
    /// Create a field of `config.particle_count` random particles
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, bounds: Bounds2, rng: &mut R) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(&mut *rng, bounds, &config))
            .collect();

        log::info!(
            "Created particle field: {} particles on {}x{}",
            config.particle_count,
            bounds.width,
            bounds.height
        );

        Self {
            particles,
            pointer: Vec2::ZERO,
            bounds,
            config,
        }
    }

    /// Create a reproducible field from a seed
    pub fn with_seed(config: FieldConfig, bounds: Bounds2, seed: u64) -> Self {
        log::debug!("Seeding particle field with {}", seed);
        Self::new(config, bounds, &mut StdRng::seed_from_u64(seed))
    }

    /// Create a field from explicit particles
    ///
    /// `config.particle_count` is overwritten with the length of `particles`.
    pub fn from_particles(particles: Vec<Particle>, bounds: Bounds2, mut config: FieldConfig) -> Self {
        config.particle_count = particles.len();
        Self {
            particles,
            pointer: Vec2::ZERO,
            bounds,
            config,
        }
    }

    /// All particles, in identity order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Last known pointer position
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Overwrite the pointer position
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Current surface extent
    pub fn bounds(&self) -> Bounds2 {
        self.bounds
    }

    /// Change the surface extent
    ///
    /// Particles are left where they are; any now outside the walls turn
    /// around on their next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("Particle field resized to {}x{}", width, height);
        self.bounds = Bounds2::new(width, height);
    }

    /// Field configuration
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Apply an input event
    pub fn apply(&mut self, event: FieldEvent) {
        match event {
            FieldEvent::PointerMoved(pointer) => self.set_pointer(pointer),
            FieldEvent::Resized { width, height } => self.resize(width, height),
        }
    }

    /// Move every particle one step without drawing
    ///
    /// Each particle is integrated, reflected and pushed as in [`Self::tick`].
    /// Returns the number of particles the pointer pushed.
    pub fn advance(&mut self, step: f32) -> usize {
        let motion = self.motion_params();
        let mut repelled = 0;

        for particle in &mut self.particles {
            if motion.apply(particle, step) {
                repelled += 1;
            }
        }

        repelled
    }

    /// Draw the current state without moving anything
    ///
    /// Clears the surface, then for each particle draws its disc followed by
    /// links to every higher-indexed particle within the link distance.
    /// Returns the number of links drawn.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> usize {
        surface.clear();

        let mut links = 0;
        for i in 0..self.particles.len() {
            links += self.draw_particle(i, surface);
        }
        links
    }

    /// Run one frame at the fixed per-frame step
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> TickStats {
        self.tick_with_step(1.0, surface)
    }

    /// Run one frame that took `elapsed`, stepping per the configured motion model
    pub fn tick_frame<S: DrawSurface + ?Sized>(&mut self, elapsed: Duration, surface: &mut S) -> TickStats {
        let step = self.config.motion.step(elapsed);
        self.tick_with_step(step, surface)
    }

    /// Move and draw one particle at a time
    ///
    /// Particle i is moved, then drawn, then linked to every j > i at j's
    /// position from the previous frame, since j has not moved yet.
    fn tick_with_step<S: DrawSurface + ?Sized>(&mut self, step: f32, surface: &mut S) -> TickStats {
        let motion = self.motion_params();
        let mut stats = TickStats::default();

        surface.clear();

        for i in 0..self.particles.len() {
            if motion.apply(&mut self.particles[i], step) {
                stats.repelled += 1;
            }
            stats.links += self.draw_particle(i, surface);
        }

        stats
    }

    /// Draw disc `i` and its links to higher-indexed particles
    fn draw_particle<S: DrawSurface + ?Sized>(&self, i: usize, surface: &mut S) -> usize {
        let color = self.config.color;
        let link_distance = self.config.link_distance;
        let particle = &self.particles[i];
        let mut links = 0;

        surface.fill_circle(
            particle.position,
            particle.radius(),
            color.with_alpha(particle.opacity()),
        );

        for other in &self.particles[i + 1..] {
            let distance = particle.position.distance(other.position);
            if distance < link_distance {
                let alpha = link_alpha(distance, link_distance, self.config.link_max_alpha);
                surface.stroke_line(
                    particle.position,
                    other.position,
                    color.with_alpha(alpha),
                    self.config.link_width,
                );
                links += 1;
            }
        }

        links
    }

    fn motion_params(&self) -> MotionParams {
        MotionParams {
            bounds: self.bounds,
            pointer: self.pointer,
            radius: self.config.repulsion_radius,
            strength: self.config.repulsion_strength,
        }
    }
}

/// Inputs to a single particle's movement, copied out of the field
struct MotionParams {
    bounds: Bounds2,
    pointer: Vec2,
    radius: f32,
    strength: f32,
}

impl MotionParams {
    /// Integrate, reflect, then push away from the pointer
    ///
    /// Returns true if the pointer pushed the particle.
    fn apply(&self, particle: &mut Particle, step: f32) -> bool {
        particle.position += particle.velocity * step;

        if !self.bounds.contains_x(particle.position.x) {
            particle.velocity.x = -particle.velocity.x;
        }
        if !self.bounds.contains_y(particle.position.y) {
            particle.velocity.y = -particle.velocity.y;
        }

        match repulsion_displacement(particle.position, self.pointer, self.radius, self.strength) {
            Some(push) => {
                particle.position += push * step;
                true
            }
            None => false,
        }
    }
}
