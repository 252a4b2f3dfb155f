//! Windowless runs
//!
//! Drives a field for a fixed number of frames into a recording surface. Used
//! for smoke runs on machines without a display or GPU.

use pfield_sim::{Bounds2, FieldRunner, FixedFrames, ParticleField, RecordingSurface, RunSummary};

use crate::config::AppConfig;

/// Run `frames` frames on a field sized like the configured window
pub fn run(config: &AppConfig, frames: u64) -> RunSummary {
    let bounds = Bounds2::new(config.window.width as f32, config.window.height as f32);
    let field_config = config.field.to_field_config(config.rendering.particle_rgba());
    let seed = config.field.seed.unwrap_or_else(rand::random);

    log::info!(
        "Headless run: {} frames, {} particles on {}x{} (seed {})",
        frames,
        field_config.particle_count,
        bounds.width,
        bounds.height,
        seed
    );

    let mut runner = FieldRunner::new(ParticleField::with_seed(field_config, bounds, seed));
    let mut surface = RecordingSurface::new();
    let summary = runner.run(&mut FixedFrames::new(frames), &mut surface);

    log::info!(
        "Headless run finished: {} frames, {} links on last frame (max {}), {} pushes",
        summary.frames,
        summary.last_links,
        summary.max_links,
        summary.repelled
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_run_counts_frames() {
        let mut config = AppConfig::default();
        config.field.particle_count = 10;
        config.field.seed = Some(1);

        let summary = run(&config, 30);

        assert_eq!(summary.frames, 30);
        assert!(summary.max_links >= summary.last_links);
    }

    #[test]
    fn test_headless_run_is_reproducible_with_seed() {
        let mut config = AppConfig::default();
        config.field.seed = Some(99);

        assert_eq!(run(&config, 20), run(&config, 20));
    }
}
