//! Drawing surface abstraction
//!
//! The field draws through [`DrawSurface`], which offers the three primitives
//! a 2D canvas context provides: clear, filled circle and stroked line.
//! [`RecordingSurface`] keeps the commands in memory for headless runs and tests.

use pfield_math::Vec2;

/// Straight (non-premultiplied) RGBA colour, components in `[0, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a colour from components
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque colour from an `[r, g, b]` triple
    #[inline]
    pub const fn from_rgb(rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], 1.0)
    }

    /// Same colour with a different alpha
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// As a plain array (for GPU vertex data)
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Target of the field's per-frame drawing
pub trait DrawSurface {
    /// Erase everything drawn so far this frame
    fn clear(&mut self);

    /// Draw a filled disc
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Draw a straight line segment
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
}

/// A single recorded drawing primitive
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
}

/// In-memory surface holding the commands drawn since the last clear
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    clears: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands drawn since the last clear, in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of times the surface has been cleared
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    /// Recorded circles as `(center, radius, color)`
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Circle { center, radius, color } => Some((center, radius, color)),
            DrawCommand::Line { .. } => None,
        })
    }

    /// Recorded lines as `(from, to, color, width)`
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba, f32)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Line { from, to, color, width } => Some((from, to, color, width)),
            DrawCommand::Circle { .. } => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }
}
