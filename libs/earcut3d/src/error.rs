//! # Triangulation Errors
//!
//! Error types for face triangulation, the 2D triangulator seam and OBJ
//! export.
//!
//! ## Error Policy
//!
//! - Face-level errors are recovered by the pipeline: the face is skipped
//!   and the failure is recorded in the [`SolidReport`](crate::SolidReport)
//! - Export errors propagate to the caller

use thiserror::Error;

// =============================================================================
// FACE ERRORS
// =============================================================================

/// Errors that can occur while triangulating a single face.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// A face or hole loop has fewer than three vertices.
    #[error("Insufficient points: {points} (need at least 3)")]
    InsufficientPoints {
        /// Number of vertices supplied.
        points: usize,
    },

    /// The points do not span a plane (coincident or collinear).
    #[error("Degenerate plane: no orthonormal basis spans the face")]
    DegeneratePlane,

    /// The 2D triangulator produced no usable triangles.
    #[error("Triangulator failed: {reason}")]
    TriangulatorFailed {
        /// What went wrong.
        reason: String,
    },
}

impl TriangulationError {
    /// Creates an insufficient points error.
    pub fn insufficient(points: usize) -> Self {
        Self::InsufficientPoints { points }
    }

    /// Creates a triangulator failure error.
    pub fn triangulator_failed(reason: impl Into<String>) -> Self {
        Self::TriangulatorFailed {
            reason: reason.into(),
        }
    }
}

impl From<TriangulatorError> for TriangulationError {
    fn from(err: TriangulatorError) -> Self {
        Self::triangulator_failed(err.to_string())
    }
}

// =============================================================================
// TRIANGULATOR ERRORS
// =============================================================================

/// Errors reported by a [`Triangulator2D`](crate::Triangulator2D) backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulatorError {
    /// The flat coordinate buffer does not hold whole 2D points.
    #[error("Coordinate buffer length {0} is not a multiple of 2")]
    OddCoordinateCount(usize),

    /// The backend rejected the input.
    #[error("Backend error: {0}")]
    Backend(String),
}

// =============================================================================
// EXPORT ERRORS
// =============================================================================

/// Errors that can occur while writing a mesh file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// RESULT TYPE ALIASES
// =============================================================================

/// Result type alias for face triangulation.
pub type TriangulationResult<T> = Result<T, TriangulationError>;

/// Result type alias for mesh export.
pub type ExportResult<T> = Result<T, ExportError>;

// =============================================================================
// TESTS
// =============================================================================
