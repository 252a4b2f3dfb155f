//! Pointer repulsion and link fading
//!
//! Both effects fall off linearly with distance and vanish at a fixed cutoff.

use pfield_math::Vec2;

/// Displacement that pushes a particle away from the pointer
///
/// Returns `None` when the pointer is at or beyond `radius`, and also when the
/// particle sits exactly on the pointer: the direction is undefined there, so
/// no force is applied.
///
/// The magnitude is `strength * (radius - d) / radius`, i.e. `strength` at
/// contact decaying to zero at `radius`.
pub fn repulsion_displacement(
    particle: Vec2,
    pointer: Vec2,
    radius: f32,
    strength: f32,
) -> Option<Vec2> {
    let delta = pointer - particle;
    let distance = delta.length();

    if distance <= 0.0 || distance >= radius {
        return None;
    }

    let force = (radius - distance) / radius;
    Some(-(delta / distance * force * strength))
}

/// Stroke alpha for a link between two particles `distance` apart
///
/// `max_alpha` at zero distance, fading linearly to zero at `link_distance`.
/// Never negative.
pub fn link_alpha(distance: f32, link_distance: f32, max_alpha: f32) -> f32 {
    if distance >= link_distance {
        return 0.0;
    }
    max_alpha * (1.0 - distance / link_distance)
}
