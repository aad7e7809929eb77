//! Core value types for the brush kernel.
//!
//! Includes the vector alias (`Vec3`), planes with point classification and
//! axis-aligned bounds.

pub mod bounds;
pub mod plane;
pub mod vec3;
