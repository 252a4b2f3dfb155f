//! Particle field simulation
//!
//! This crate provides the animated particle background as a standalone module:
//! - Particles drifting at a fixed per-frame velocity
//! - Velocity reflection at the surface walls
//! - Repulsion away from the pointer
//! - Faint links between nearby particles
//!
//! Drawing goes through the [`DrawSurface`] trait so the simulation runs
//! without a display. Frames come from the host (a window's redraw loop) or
//! from a [`FrameSource`] driven by [`FieldRunner`].

pub mod config;
pub mod field;
pub mod forces;
pub mod particle;
pub mod runner;
pub mod surface;

// Re-export commonly used types
pub use config::{FieldConfig, Motion, ACCENT_CYAN, DEFAULT_PARTICLE_COUNT};
pub use field::{FieldEvent, ParticleField, TickStats};
pub use forces::{link_alpha, repulsion_displacement};
pub use particle::Particle;
pub use runner::{FieldRunner, FixedFrames, Frame, FrameSource, PacedFrames, RunSummary, StopHandle};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface, Rgba};
pub use pfield_math::{Bounds2, Vec2};
