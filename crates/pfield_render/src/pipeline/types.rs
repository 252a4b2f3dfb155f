//! GPU-compatible data types for the shape pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A corner of a tessellated disc or line quad
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    /// Position in surface pixels
    pub position: [f32; 2],
    /// Offset from the disc centre in pixels (unused for lines)
    pub offset: [f32; 2],
    /// Straight RGBA colour
    pub color: [f32; 4],
    /// Disc radius in pixels; zero for lines (no disc mask)
    pub radius: f32,
    /// Padding to keep the stride a multiple of 8 bytes
    pub _padding: f32,
}

impl ShapeVertex {
    /// Vertex of a disc quad
    pub fn disc(position: [f32; 2], offset: [f32; 2], color: [f32; 4], radius: f32) -> Self {
        Self {
            position,
            offset,
            color,
            radius,
            _padding: 0.0,
        }
    }

    /// Vertex of a line quad
    pub fn line(position: [f32; 2], color: [f32; 4]) -> Self {
        Self {
            position,
            offset: [0.0; 2],
            color,
            radius: 0.0,
            _padding: 0.0,
        }
    }
}

/// Viewport uniforms (must match shape.wgsl Viewport)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewportUniforms {
    /// Surface size in pixels
    pub size: [f32; 2],
    pub _padding: [f32; 2],
}

impl ViewportUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: [width.max(1.0), height.max(1.0)],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ViewportUniforms {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
