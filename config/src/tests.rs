//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_point_epsilon_is_positive() {
    assert!(POINT_STATUS_EPSILON > 0.0, "POINT_STATUS_EPSILON must be positive");
}

#[test]
fn test_point_epsilon_is_small() {
    assert!(POINT_STATUS_EPSILON < 1e-3, "POINT_STATUS_EPSILON should be small for precision");
}

#[test]
fn test_weld_epsilon_larger_than_point_epsilon() {
    assert!(
        VERTEX_WELD_EPSILON >= POINT_STATUS_EPSILON,
        "VERTEX_WELD_EPSILON should be >= POINT_STATUS_EPSILON"
    );
}

#[test]
fn test_min_normal_length_below_tolerances() {
    assert!(MIN_NORMAL_LENGTH < POINT_STATUS_EPSILON);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_world_extent_is_large() {
    assert!(
        WORLD_HALF_EXTENT >= 1e4,
        "WORLD_HALF_EXTENT should leave room for real maps"
    );
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0, POINT_STATUS_EPSILON));
    assert!(approx_equal(1.0, 1.0 + 1e-7, POINT_STATUS_EPSILON));
    assert!(!approx_equal(1.0, 1.0 + 1e-3, POINT_STATUS_EPSILON));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0, POINT_STATUS_EPSILON));
    assert!(approx_zero(-1e-7, POINT_STATUS_EPSILON));
    assert!(!approx_zero(1e-3, POINT_STATUS_EPSILON));
}
