//! Window input for the particle field
//!
//! Translates winit window events into [`pfield_sim::FieldEvent`]s. Positions
//! stay in physical pixels, the same space the surface is sized in.

mod pointer_tracker;

pub use pointer_tracker::PointerTracker;
