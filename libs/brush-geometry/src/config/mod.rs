//! Kernel-level configuration building on the shared `config` crate.
//!
//! The kernel never reads tolerance literals; a [`KernelConfig`] is passed
//! into every classification, welding, validation and query call.

use config::constants::{ConfigError, GlobalConfig};

/// Geometry kernel configuration wrapper.
///
/// # Examples
/// ```
/// use brush_geometry::config::KernelConfig;
/// let cfg = KernelConfig::default();
/// assert!(cfg.point_epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Distances within this value classify a point as on a plane.
    pub point_epsilon: f64,
    /// Vertices closer than this value are welded into one.
    pub weld_epsilon: f64,
    /// Half size of the world seed cube.
    pub world_half_extent: f64,
}

impl KernelConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use brush_geometry::config::KernelConfig;
    /// let cfg = KernelConfig::new(1.0e-4, 1.0e-4, 1024.0).unwrap();
    /// assert_eq!(cfg.world_half_extent, 1024.0);
    /// ```
    pub fn new(
        point_epsilon: f64,
        weld_epsilon: f64,
        world_half_extent: f64,
    ) -> Result<Self, KernelConfigError> {
        GlobalConfig::new(point_epsilon, weld_epsilon, world_half_extent)
            .map(Self::from)
            .map_err(KernelConfigError)
    }

    /// Tolerance for "vertex lies on its face plane" checks.
    ///
    /// A welded vertex may sit up to the weld tolerance away from the clip
    /// plane that produced it, so validation accepts the larger of the two.
    pub fn plane_tolerance(&self) -> f64 {
        self.point_epsilon.max(self.weld_epsilon)
    }
}

impl From<GlobalConfig> for KernelConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            point_epsilon: cfg.point_epsilon,
            weld_epsilon: cfg.weld_epsilon,
            world_half_extent: cfg.world_half_extent,
        }
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::from(GlobalConfig::default())
    }
}

/// Error wrapper for invalid kernel configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfigError(pub ConfigError);

impl std::fmt::Display for KernelConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for KernelConfigError {}
