//! 2D Mathematics for the particle field
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector in surface space (origin top-left, y down)
//! - [`Bounds2`] - Axis-aligned extent of a drawing surface

mod vec2;
pub mod bounds;

pub use vec2::Vec2;
pub use bounds::Bounds2;
