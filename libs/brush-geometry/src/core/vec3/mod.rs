//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! The helpers keep tolerance-based comparisons in one place; positions are
//! never compared with exact floating-point equality.

pub use glam::DVec3 as Vec3;

/// Returns true when the two points are within `epsilon` of each other.
///
/// # Examples
/// ```
/// use brush_geometry::core::vec3::{approx_eq, Vec3};
/// assert!(approx_eq(Vec3::ONE, Vec3::splat(1.0 + 1e-9), 1e-6));
/// ```
pub fn approx_eq(a: Vec3, b: Vec3, epsilon: f64) -> bool {
    a.distance_squared(b) <= epsilon * epsilon
}

/// Returns the arithmetic mean of the points, or `None` for an empty slice.
pub fn average(points: &[Vec3]) -> Option<Vec3> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vec3::ZERO, |acc, p| acc + *p);
    Some(sum / points.len() as f64)
}

/// Newell normal of a closed polygon loop (not normalized).
///
/// The result points toward the viewer for a counter-clockwise loop and its
/// length is twice the polygon area.
pub fn newell_normal(points: &[Vec3]) -> Vec3 {
    let mut normal = Vec3::ZERO;
    for (i, current) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }
    normal
}
