//! Drawing surface extent

use serde::{Serialize, Deserialize};

/// Extent of a drawing surface, anchored at the origin
///
/// The reflecting walls are the closed intervals `[0, width]` and
/// `[0, height]`; a point exactly on a wall is still inside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub width: f32,
    pub height: f32,
}

impl Bounds2 {
    /// Create new bounds
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether `x` lies within `[0, width]`
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        !(x < 0.0 || x > self.width)
    }

    /// Whether `y` lies within `[0, height]`
    #[inline]
    pub fn contains_y(&self, y: f32) -> bool {
        !(y < 0.0 || y > self.height)
    }
}
