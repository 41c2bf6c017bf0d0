//! Centralized configuration values shared across the earcut3d pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Per-component magnitude below which a vector is treated as the zero vector.
///
/// Gram-Schmidt skips candidates that fall under this bound on every axis.
///
/// # Examples
/// ```
/// use config::constants::ZERO_VECTOR_EPSILON;
/// assert!(ZERO_VECTOR_EPSILON < 1.0e-6);
/// ```
pub const ZERO_VECTOR_EPSILON: f64 = 1.0e-10;

/// Tolerance on the cosine between two normalized directions when deciding
/// whether they are nearly parallel (or anti-parallel).
///
/// Two directions are nearly parallel when `|cos - 1|` or `|cos + 1|` is
/// below this value.
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_TOLERANCE;
///
/// let cos_angle: f64 = 0.995;
/// assert!((cos_angle - 1.0).abs() < PARALLEL_TOLERANCE);
/// ```
pub const PARALLEL_TOLERANCE: f64 = 0.01;

/// Tolerance used by tests and callers when checking that a basis is
/// orthonormal.
///
/// # Examples
/// ```
/// use config::constants::ORTHONORMAL_TOLERANCE;
/// assert!(ORTHONORMAL_TOLERANCE <= 1.0e-9);
/// ```
pub const ORTHONORMAL_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// WELDING CONSTANTS
// =============================================================================

/// Default distance under which two triangle vertices are welded together.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_WELD_THRESHOLD;
///
/// let a = [0.0_f64, 0.0, 0.0];
/// let b = [0.005_f64, 0.0, 0.0];
/// let d = ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt();
/// assert!(d < DEFAULT_WELD_THRESHOLD);
/// ```
pub const DEFAULT_WELD_THRESHOLD: f64 = 0.01;

/// Upper bound on welding passes run while searching for a fixed point.
///
/// Well-separated meshes settle after the first pass; the bound only matters
/// for chains of points that keep drifting together.
///
/// # Examples
/// ```
/// use config::constants::MAX_WELD_PASSES;
/// assert!(MAX_WELD_PASSES >= 2);
/// ```
pub const MAX_WELD_PASSES: usize = 16;

// =============================================================================
// POLYGON LIMITS
// =============================================================================

/// Minimum number of points for a face or hole loop.
///
/// # Examples
/// ```
/// use config::constants::MIN_POLYGON_POINTS;
/// let face = [[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
/// assert!(face.len() >= MIN_POLYGON_POINTS);
/// ```
pub const MIN_POLYGON_POINTS: usize = 3;

/// Number of faces from which the pipeline fans work out to the rayon pool
/// when parallel triangulation is enabled.
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_FACE_THRESHOLD;
/// assert!(PARALLEL_FACE_THRESHOLD > 1);
/// ```
pub const PARALLEL_FACE_THRESHOLD: usize = 64;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Decimal places written for each coordinate of an OBJ `v` line.
///
/// # Examples
/// ```
/// use config::constants::OBJ_DECIMALS;
/// assert_eq!(format!("{:.*}", OBJ_DECIMALS, 0.5), "0.500000");
/// ```
pub const OBJ_DECIMALS: usize = 6;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the tunable pipeline tolerances.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.weld_threshold > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Distance under which vertices are welded together.
    pub weld_threshold: f64,
    /// Cosine tolerance for the near-parallel test of the basis finder.
    pub parallel_tolerance: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(0.001, 0.05).expect("valid config");
    /// assert_eq!(cfg.weld_threshold, 0.001);
    /// ```
    pub fn new(weld_threshold: f64, parallel_tolerance: f64) -> Result<Self, ConfigError> {
        if !weld_threshold.is_finite() || weld_threshold <= 0.0 {
            return Err(ConfigError::InvalidWeldThreshold(weld_threshold));
        }
        if !(parallel_tolerance > 0.0 && parallel_tolerance < 1.0) {
            return Err(ConfigError::InvalidParallelTolerance(parallel_tolerance));
        }
        Ok(Self {
            weld_threshold,
            parallel_tolerance,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            weld_threshold: DEFAULT_WELD_THRESHOLD,
            parallel_tolerance: PARALLEL_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the weld threshold is zero, negative or not finite.
    InvalidWeldThreshold(f64),
    /// Raised when the parallel tolerance lies outside `(0, 1)`.
    InvalidParallelTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeldThreshold(value) => {
                write!(f, "weld_threshold must be positive and finite: {value}")
            }
            ConfigError::InvalidParallelTolerance(value) => {
                write!(f, "parallel_tolerance must lie in (0, 1): {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is zero within [`ZERO_VECTOR_EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < ZERO_VECTOR_EPSILON
}
