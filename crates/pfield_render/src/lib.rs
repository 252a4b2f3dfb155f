//! Particle field rendering
//!
//! This crate provides the wgpu-based drawing surface for the particle field.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`batch::ShapeBatch`] - [`DrawSurface`] that tessellates discs and lines into triangles
//! - [`pipeline::ShapePipeline`] - Uploads a batch and draws it in one pass

pub mod batch;
pub mod context;
pub mod pipeline;

pub use batch::ShapeBatch;
pub use context::{ContextError, RenderContext};
pub use pipeline::{ShapePipeline, ShapeVertex, ViewportUniforms};

// Re-export the drawing trait for convenience
pub use pfield_sim::{DrawSurface, Rgba};
