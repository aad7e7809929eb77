//! # Config Crate
//!
//! Centralized configuration constants for the brush geometry kernel.
//! All tolerances and world limits are defined here so that the clipping,
//! welding and validation code never carries its own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, POINT_STATUS_EPSILON};
//!
//! // Distances within POINT_STATUS_EPSILON count as "on the plane"
//! let distance: f64 = 1e-8;
//! assert!(distance.abs() <= POINT_STATUS_EPSILON);
//!
//! // Validated snapshot handed to the kernel
//! let cfg = GlobalConfig::default();
//! assert!(cfg.weld_epsilon >= cfg.point_epsilon);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit**: Tolerances travel as values, never as hidden globals
//! - **Validated**: `GlobalConfig::new` rejects inconsistent settings

pub mod constants;

#[cfg(test)]
mod tests;
