//! Particle field application
//!
//! Configuration, input mapping and the window/render/simulation systems that
//! host a [`pfield_sim::ParticleField`] in a native window.

pub mod config;
pub mod headless;
pub mod input;
pub mod systems;
