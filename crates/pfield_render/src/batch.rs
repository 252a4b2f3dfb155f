//! CPU-side tessellation of draw commands
//!
//! [`ShapeBatch`] implements the field's [`DrawSurface`] by turning each disc
//! and each line into a quad (two triangles). The resulting vertex list is
//! uploaded by [`crate::ShapePipeline`].

use pfield_math::Vec2;
use pfield_sim::{DrawSurface, Rgba};

use crate::pipeline::ShapeVertex;

/// Extra pixels around a disc quad for the anti-aliased edge
const DISC_FEATHER: f32 = 1.0;

/// Vertices per quad (two triangles)
const QUAD_VERTICES: usize = 6;

/// One frame's worth of tessellated shapes
#[derive(Debug, Default)]
pub struct ShapeBatch {
    vertices: Vec<ShapeVertex>,
    discs: usize,
    lines: usize,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tessellated vertices, ready for upload
    pub fn vertices(&self) -> &[ShapeVertex] {
        &self.vertices
    }

    /// Discs drawn since the last clear
    pub fn disc_count(&self) -> usize {
        self.discs
    }

    /// Lines drawn since the last clear
    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn push_quad(&mut self, corners: [ShapeVertex; 4]) {
        let [a, b, c, d] = corners;
        self.vertices.extend_from_slice(&[a, b, c, a, c, d]);
    }
}

impl DrawSurface for ShapeBatch {
    fn clear(&mut self) {
        self.vertices.clear();
        self.discs = 0;
        self.lines = 0;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }

        let half = radius + DISC_FEATHER;
        let color = color.to_array();
        let corner = |dx: f32, dy: f32| {
            ShapeVertex::disc(
                [center.x + dx, center.y + dy],
                [dx, dy],
                color,
                radius,
            )
        };

        self.push_quad([
            corner(-half, -half),
            corner(half, -half),
            corner(half, half),
            corner(-half, half),
        ]);
        self.discs += 1;
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        let direction = (to - from).normalized();
        if direction == Vec2::ZERO || width <= 0.0 {
            // Zero-length segments have no visible extent on a canvas either
            return;
        }

        let normal = direction.perp() * (width * 0.5);
        let color = color.to_array();
        let vertex = |p: Vec2| ShapeVertex::line(p.to_array(), color);

        self.push_quad([
            vertex(from + normal),
            vertex(to + normal),
            vertex(to - normal),
            vertex(from - normal),
        ]);
        self.lines += 1;
    }
}

impl ShapeBatch {
    /// Vertices needed for the given number of discs and lines
    pub fn vertices_for(discs: usize, lines: usize) -> usize {
        (discs + lines) * QUAD_VERTICES
    }
}
