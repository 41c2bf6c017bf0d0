//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_zero_vector_epsilon_is_positive() {
    assert!(ZERO_VECTOR_EPSILON > 0.0, "ZERO_VECTOR_EPSILON must be positive");
}

#[test]
fn test_zero_vector_epsilon_is_small() {
    assert!(ZERO_VECTOR_EPSILON < 1e-6, "ZERO_VECTOR_EPSILON should be small for precision");
}

#[test]
fn test_parallel_tolerance_matches_cosine_bound() {
    assert_eq!(PARALLEL_TOLERANCE, 0.01);
}

#[test]
fn test_orthonormal_tolerance_tighter_than_parallel() {
    assert!(ORTHONORMAL_TOLERANCE < PARALLEL_TOLERANCE);
}

// =============================================================================
// WELDING TESTS
// =============================================================================

#[test]
fn test_default_weld_threshold() {
    assert_eq!(DEFAULT_WELD_THRESHOLD, 0.01);
}

#[test]
fn test_weld_threshold_larger_than_zero_epsilon() {
    assert!(
        DEFAULT_WELD_THRESHOLD > ZERO_VECTOR_EPSILON,
        "DEFAULT_WELD_THRESHOLD should exceed ZERO_VECTOR_EPSILON"
    );
}

#[test]
fn test_max_weld_passes_reasonable() {
    assert!(MAX_WELD_PASSES >= 2);
    assert!(MAX_WELD_PASSES <= 64);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_min_polygon_points_is_triangle() {
    // A polygon needs at least 3 points to enclose area
    assert_eq!(MIN_POLYGON_POINTS, 3);
}

#[test]
fn test_obj_decimals_matches_fixed_notation() {
    assert_eq!(format!("{:.*}", OBJ_DECIMALS, 1.0), "1.000000");
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero_exact_zero() {
    assert!(approx_zero(0.0));
}

#[test]
fn test_approx_zero_within_epsilon() {
    let small = ZERO_VECTOR_EPSILON / 2.0;
    assert!(approx_zero(small));
    assert!(approx_zero(-small));
}

#[test]
fn test_approx_zero_outside_epsilon() {
    let large = ZERO_VECTOR_EPSILON * 2.0;
    assert!(!approx_zero(large));
    assert!(!approx_zero(-large));
}
