//! Simulation parameters

use std::time::Duration;

use crate::surface::Rgba;

/// Number of particles on a default field
pub const DEFAULT_PARTICLE_COUNT: usize = 80;

/// Accent cyan, rgb(0, 245, 255)
pub const ACCENT_CYAN: Rgba = Rgba::new(0.0, 245.0 / 255.0, 1.0, 1.0);

/// Largest step a time-scaled frame may take (in reference frames)
const MAX_SCALED_STEP: f32 = 4.0;

/// How far a tick moves the particles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Motion {
    /// Fixed step of one velocity unit per tick; speed follows the display rate
    #[default]
    PerFrame,
    /// Step scaled by elapsed time relative to a reference refresh rate
    TimeScaled {
        /// Refresh rate at which one tick equals one velocity unit
        reference_hz: f32,
    },
}

impl Motion {
    /// Step multiplier for a frame that took `elapsed`
    pub fn step(&self, elapsed: Duration) -> f32 {
        match *self {
            Motion::PerFrame => 1.0,
            Motion::TimeScaled { reference_hz } => {
                (elapsed.as_secs_f32() * reference_hz).clamp(0.0, MAX_SCALED_STEP)
            }
        }
    }
}

/// Configuration for the particle field
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Number of particles, fixed for the field's lifetime
    pub particle_count: usize,
    /// Initial velocity components are drawn from `[-max_speed, max_speed]`
    pub max_speed: f32,
    /// Disc radius range `[min, max)`
    pub radius_min: f32,
    pub radius_max: f32,
    /// Disc opacity range `[min, max)`
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Pointer influence distance in pixels
    pub repulsion_radius: f32,
    /// Displacement at contact, in pixels per tick
    pub repulsion_strength: f32,
    /// Pairs closer than this are linked
    pub link_distance: f32,
    /// Link alpha at zero distance
    pub link_max_alpha: f32,
    /// Link stroke width in pixels
    pub link_width: f32,
    /// Particle and link colour (alpha is ignored)
    pub color: Rgba,
    /// Motion model
    pub motion: Motion,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            max_speed: 0.25,
            radius_min: 1.0,
            radius_max: 3.0,
            opacity_min: 0.2,
            opacity_max: 0.7,
            repulsion_radius: 150.0,
            repulsion_strength: 2.0,
            link_distance: 120.0,
            link_max_alpha: 0.15,
            link_width: 1.0,
            color: ACCENT_CYAN,
            motion: Motion::PerFrame,
        }
    }
}

impl FieldConfig {
    /// Default config with a different particle count
    pub fn with_count(particle_count: usize) -> Self {
        Self {
            particle_count,
            ..Self::default()
        }
    }

    /// Set the motion model
    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }
}
