//! Field simulation system
//!
//! Owns the particle field and the per-frame clock:
//! - Frame time measurement for the time-scaled motion model
//! - Pause / resume
//! - Reseeding with a fresh random layout
//! - Periodic stats logging

use std::time::{Duration, Instant};

use pfield_sim::{Bounds2, DrawSurface, FieldConfig, FieldEvent, ParticleField, TickStats};

/// Longest frame the clock reports; longer gaps (window drags, breakpoints) are cut
const MAX_FRAME_TIME: Duration = Duration::from_millis(250);

/// Drives a [`ParticleField`] once per displayed frame
pub struct SimulationSystem {
    field: ParticleField,
    seed: u64,
    paused: bool,
    last_frame: Instant,
    frames: u64,
    last_stats: TickStats,
    stats_interval: u64,
}

impl SimulationSystem {
    /// Create a field filling `bounds`; a missing seed is drawn at random
    pub fn new(config: FieldConfig, bounds: Bounds2, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            field: ParticleField::with_seed(config, bounds, seed),
            seed,
            paused: false,
            last_frame: Instant::now(),
            frames: 0,
            last_stats: TickStats::default(),
            stats_interval: 0,
        }
    }

    /// Log frame stats every `interval` frames (0 = never)
    pub fn with_stats_interval(mut self, interval: u64) -> Self {
        self.stats_interval = interval;
        self
    }

    /// Run one frame, drawing into `surface`
    ///
    /// While paused the field is redrawn as it stands without advancing.
    pub fn update<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> TickStats {
        let now = Instant::now();
        let elapsed = (now - self.last_frame).min(MAX_FRAME_TIME);
        self.last_frame = now;

        if self.paused {
            let links = self.field.render(surface);
            self.last_stats = TickStats { repelled: 0, links };
            return self.last_stats;
        }

        self.last_stats = self.field.tick_frame(elapsed, surface);
        self.frames += 1;

        if self.stats_interval > 0 && self.frames % self.stats_interval == 0 {
            log::debug!(
                "Frame {}: {} particles, {} links, {} repelled",
                self.frames,
                self.field.particle_count(),
                self.last_stats.links,
                self.last_stats.repelled
            );
        }

        self.last_stats
    }

    /// Forward an input event to the field
    pub fn apply(&mut self, event: FieldEvent) {
        self.field.apply(event);
    }

    /// Stop or restart the animation; returns true when now paused
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        if !self.paused {
            // Don't let the paused interval count as one long frame
            self.last_frame = Instant::now();
        }
        log::info!("Animation {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Replace the field with a fresh random layout of the same size and count
    ///
    /// The pointer position carries over.
    pub fn reseed(&mut self, seed: Option<u64>) {
        let seed = seed.unwrap_or_else(rand::random);
        let pointer = self.field.pointer();
        let mut field = ParticleField::with_seed(self.field.config().clone(), self.field.bounds(), seed);
        field.set_pointer(pointer);

        self.field = field;
        self.seed = seed;
        log::info!("Reseeded particle field (seed {})", seed);
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Seed of the current layout
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Frames advanced so far (paused frames excluded)
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Stats of the most recent frame
    pub fn last_stats(&self) -> TickStats {
        self.last_stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfield_sim::{RecordingSurface, Vec2};

    fn system() -> SimulationSystem {
        SimulationSystem::new(FieldConfig::with_count(20), Bounds2::new(400.0, 300.0), Some(5))
    }

    #[test]
    fn test_update_advances_field() {
        let mut sim = system();
        let before = sim.field().particles().to_vec();
        let mut surface = RecordingSurface::new();

        sim.update(&mut surface);

        assert_eq!(sim.frame_count(), 1);
        assert_eq!(surface.circles().count(), 20);
        assert_ne!(before, sim.field().particles());
    }

    #[test]
    fn test_paused_update_draws_without_moving() {
        let mut sim = system();
        assert!(sim.toggle_pause());
        let before = sim.field().particles().to_vec();
        let mut surface = RecordingSurface::new();

        let stats = sim.update(&mut surface);

        assert_eq!(sim.field().particles(), &before[..]);
        assert_eq!(sim.frame_count(), 0);
        assert_eq!(surface.circles().count(), 20);
        assert_eq!(stats.repelled, 0);
    }

    #[test]
    fn test_resume_after_pause() {
        let mut sim = system();
        sim.toggle_pause();
        assert!(!sim.toggle_pause());
        assert!(!sim.is_paused());
    }

    #[test]
    fn test_reseed_keeps_count_bounds_and_pointer() {
        let mut sim = system();
        sim.apply(FieldEvent::PointerMoved(Vec2::new(42.0, 24.0)));
        let before = sim.field().particles().to_vec();

        sim.reseed(Some(6));

        assert_eq!(sim.seed(), 6);
        assert_eq!(sim.field().particle_count(), 20);
        assert_eq!(sim.field().bounds(), Bounds2::new(400.0, 300.0));
        assert_eq!(sim.field().pointer(), Vec2::new(42.0, 24.0));
        assert_ne!(sim.field().particles(), &before[..]);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = system();
        let b = system();
        assert_eq!(a.field().particles(), b.field().particles());
    }
}
