//! # Configuration Constants
//!
//! Centralized constants for the brush geometry kernel. Precision values,
//! world limits and the validated [`GlobalConfig`] snapshot live here.
//!
//! ## Categories
//!
//! - **Precision**: Point classification and vertex welding tolerances
//! - **Limits**: World bounds used to seed unbounded plane sets

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for classifying a point against a plane.
///
/// A point whose signed distance to a plane is within this value is treated
/// as lying on the plane.
///
/// # Example
///
/// ```rust
/// use config::constants::POINT_STATUS_EPSILON;
///
/// let distance = 5.0e-7;
/// assert!(distance <= POINT_STATUS_EPSILON);
/// ```
pub const POINT_STATUS_EPSILON: f64 = 1.0e-6;

/// Tolerance for welding near-coincident vertices.
///
/// Slightly larger than [`POINT_STATUS_EPSILON`] so that intersection points
/// created next to an existing vertex collapse into it instead of leaving a
/// near-zero-length edge behind.
///
/// # Example
///
/// ```rust
/// use config::constants::{POINT_STATUS_EPSILON, VERTEX_WELD_EPSILON};
///
/// assert!(VERTEX_WELD_EPSILON >= POINT_STATUS_EPSILON);
/// ```
pub const VERTEX_WELD_EPSILON: f64 = 1.0e-5;

/// Smallest accepted length of a plane normal before normalization.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_NORMAL_LENGTH;
///
/// assert!(MIN_NORMAL_LENGTH > 0.0);
/// ```
pub const MIN_NORMAL_LENGTH: f64 = 1.0e-12;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Half size of the cube that seeds a brush built from planes alone.
///
/// Every brush must lie strictly inside `[-WORLD_HALF_EXTENT,
/// WORLD_HALF_EXTENT]` on each axis; a plane set that does not close the
/// solid inside that cube is reported as unbounded.
///
/// # Example
///
/// ```rust
/// use config::constants::WORLD_HALF_EXTENT;
///
/// assert_eq!(WORLD_HALF_EXTENT * 2.0, 65536.0);
/// ```
pub const WORLD_HALF_EXTENT: f64 = 32768.0;

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of the kernel settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.point_epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Tolerance for on-plane classification.
    pub point_epsilon: f64,
    /// Tolerance for merging near-coincident vertices.
    pub weld_epsilon: f64,
    /// Half size of the world seed cube.
    pub world_half_extent: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerances and world extent.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-4, 1.0e-3, 4096.0).expect("valid config");
    /// assert_eq!(cfg.world_half_extent, 4096.0);
    /// ```
    pub fn new(
        point_epsilon: f64,
        weld_epsilon: f64,
        world_half_extent: f64,
    ) -> Result<Self, ConfigError> {
        if !(point_epsilon.is_finite() && point_epsilon > 0.0) {
            return Err(ConfigError::InvalidTolerance(point_epsilon));
        }
        if !(weld_epsilon.is_finite() && weld_epsilon >= point_epsilon) {
            return Err(ConfigError::InvalidWeldTolerance(weld_epsilon));
        }
        if !(world_half_extent.is_finite() && world_half_extent > weld_epsilon) {
            return Err(ConfigError::InvalidWorldExtent(world_half_extent));
        }
        Ok(Self {
            point_epsilon,
            weld_epsilon,
            world_half_extent,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            point_epsilon: POINT_STATUS_EPSILON,
            weld_epsilon: VERTEX_WELD_EPSILON,
            world_half_extent: WORLD_HALF_EXTENT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the classification tolerance is not a positive number.
    InvalidTolerance(f64),
    /// Raised when the weld tolerance is not finite or below the
    /// classification tolerance.
    InvalidWeldTolerance(f64),
    /// Raised when the world extent is not finite or too small.
    InvalidWorldExtent(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "point tolerance must be positive: {value}")
            }
            ConfigError::InvalidWeldTolerance(value) => {
                write!(f, "weld tolerance must be >= point tolerance: {value}")
            }
            ConfigError::InvalidWorldExtent(value) => {
                write!(f, "world half extent must exceed the weld tolerance: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// COMPARISON HELPERS
// =============================================================================

/// Checks if two f64 values are equal within the given tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-9, 1e-6));
/// assert!(!approx_equal(1.0, 1.1, 1e-6));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Checks if a f64 value is zero within the given tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-9, 1e-6));
/// assert!(!approx_zero(0.1, 1e-6));
/// ```
#[inline]
pub fn approx_zero(value: f64, epsilon: f64) -> bool {
    value.abs() <= epsilon
}
