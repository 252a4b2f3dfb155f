//! Rendering pipeline components

pub mod types;
pub mod shape_pipeline;

pub use types::{ShapeVertex, ViewportUniforms};
pub use shape_pipeline::ShapePipeline;
