//! # Plane
//!
//! Oriented plane `n · x = d` bounding a half-space. The solid always lies on
//! the negative side (`n · x ≤ d`), so the normal points out of the brush.

use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;
use crate::error::{BrushError, BrushResult};
use config::constants::{approx_equal, approx_zero, MIN_NORMAL_LENGTH};

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Position of a point relative to a plane, decided with a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointStatus {
    /// Strictly on the solid side (`distance < -ε`).
    Inside,
    /// Within tolerance of the plane.
    OnPlane,
    /// Strictly on the cut-away side (`distance > ε`).
    Outside,
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane with a unit normal and an offset from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    normal: Vec3,
    distance: f64,
}

impl Plane {
    /// Creates the half-space `normal · x ≤ distance`.
    ///
    /// The normal is normalized and the offset scaled with it, so
    /// `Plane::new(2 * n, 2 * d)` describes the same half-space as
    /// `Plane::new(n, d)`.
    ///
    /// # Errors
    ///
    /// [`BrushError::InvalidPlane`] for a zero-length or non-finite normal, or
    /// a non-finite offset.
    pub fn new(normal: Vec3, distance: f64) -> BrushResult<Self> {
        let length = normal.length();
        if !normal.is_finite() || !distance.is_finite() || length < MIN_NORMAL_LENGTH {
            return Err(BrushError::InvalidPlane { normal, distance });
        }
        Ok(Self {
            normal: normal / length,
            distance: distance / length,
        })
    }

    /// Creates a plane through three points.
    ///
    /// Points listed counter-clockwise when viewed from outside the solid
    /// produce the outward normal. Returns `None` for collinear points.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        let normal = (b - a).cross(c - a);
        let length = normal.length();
        if !length.is_finite() || length < MIN_NORMAL_LENGTH {
            return None;
        }
        let normal = normal / length;
        Some(Self {
            normal,
            distance: normal.dot(a),
        })
    }

    /// Unit normal pointing out of the solid.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Offset of the plane along its normal.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Signed distance from the plane; negative on the solid side.
    pub fn signed_distance(&self, point: Vec3) -> f64 {
        self.normal.dot(point) - self.distance
    }

    /// Classifies a point against the plane.
    pub fn classify(&self, point: Vec3, epsilon: f64) -> PointStatus {
        let distance = self.signed_distance(point);
        if distance > epsilon {
            PointStatus::Outside
        } else if distance < -epsilon {
            PointStatus::Inside
        } else {
            PointStatus::OnPlane
        }
    }

    /// Returns true when both planes bound the same half-space within
    /// tolerance.
    pub fn is_equivalent(&self, other: &Plane, epsilon: f64) -> bool {
        self.normal.distance_squared(other.normal) <= epsilon * epsilon
            && approx_equal(self.distance, other.distance, epsilon)
    }

    /// The complementary half-space.
    pub fn flipped(&self) -> Plane {
        Plane {
            normal: -self.normal,
            distance: -self.distance,
        }
    }

    /// The same plane moved by `delta`.
    pub fn translated(&self, delta: Vec3) -> Plane {
        Plane {
            normal: self.normal,
            distance: self.distance + self.normal.dot(delta),
        }
    }

    /// Orthogonal projection of a point onto the plane.
    pub fn project(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.signed_distance(point)
    }

    /// Ray parameter `t` where `origin + t * direction` meets the plane.
    ///
    /// Returns `None` when the ray runs parallel to the plane.
    pub fn intersect_ray(&self, origin: Vec3, direction: Vec3) -> Option<f64> {
        let denom = self.normal.dot(direction);
        if approx_zero(denom, MIN_NORMAL_LENGTH) {
            return None;
        }
        Some(-self.signed_distance(origin) / denom)
    }

    /// Right-handed orthonormal basis `(u, v)` spanning the plane.
    ///
    /// Angles measured from `u` toward `v` increase counter-clockwise when
    /// viewed from outside the solid.
    pub fn tangent_basis(&self) -> (Vec3, Vec3) {
        let u = self.normal.any_orthonormal_vector();
        let v = self.normal.cross(u);
        (u, v)
    }
}
