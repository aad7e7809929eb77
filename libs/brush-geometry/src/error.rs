//! # Error Types
//!
//! Error types for brush kernel operations.
//!
//! ## Error Policy
//!
//! - `Empty` and `Degenerate` results are ordinary outcome values, not errors
//! - Invalid input (planes, seeds, configuration) is rejected explicitly
//! - A broken adjacency invariant surfaces as [`BrushError::FatalInconsistency`]
//!   and is never repaired silently

use thiserror::Error;

use crate::config::KernelConfigError;
use crate::core::vec3::Vec3;
use crate::topology::TopologyError;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or editing a brush.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrushError {
    /// Internal invariant violated by the clipping or welding logic.
    ///
    /// The edit must be aborted and the defect reported; the geometry that
    /// triggered it is never handed to callers.
    #[error("Internal consistency violated: {0}")]
    FatalInconsistency(#[from] TopologyError),

    /// Plane with a zero-length or non-finite normal, or a non-finite offset.
    #[error("Invalid plane: normal {normal}, distance {distance}")]
    InvalidPlane {
        /// Normal as supplied by the caller
        normal: Vec3,
        /// Offset as supplied by the caller
        distance: f64,
    },

    /// Seed box that does not enclose a volume.
    #[error("Invalid seed box: min {min}, max {max}")]
    InvalidSeed {
        /// Minimum corner
        min: Vec3,
        /// Maximum corner
        max: Vec3,
    },

    /// Plane index outside the brush's plane list.
    #[error("Plane index {index} out of range (brush has {count} planes)")]
    PlaneIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of planes in the brush
        count: usize,
    },

    /// Invalid kernel configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] KernelConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for brush kernel operations.
pub type BrushResult<T> = Result<T, BrushError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::EdgeId;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let fatal = BrushError::from(TopologyError::OpenEdge(EdgeId(3)));
        assert!(fatal.to_string().contains("consistency"));
        assert!(fatal.to_string().contains("EdgeId(3)"));

        let range = BrushError::PlaneIndexOutOfRange { index: 7, count: 2 };
        assert!(range.to_string().contains('7'));
    }

    /// Test error types are Send + Sync for worker threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BrushError>();
    }
}
