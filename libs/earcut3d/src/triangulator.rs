//! # 2D Triangulator
//!
//! The pipeline treats 2D triangulation as an injected capability:
//!
//! ```text
//! flat coords [x0, y0, x1, y1, ...] + hole start indices → triangle index list
//! ```
//!
//! Indices address the concatenated point set (outer loop first, then each
//! hole loop in order) and come grouped in triples.
//!
//! - [`EarcutTriangulator`] delegates to `earcutr` and supports holes
//! - [`FanTriangulator`] emits a canonical fan over the outer loop and is
//!   meant as a deterministic stand-in for tests

use crate::error::TriangulatorError;

/// A 2D polygon triangulator with optional hole loops.
pub trait Triangulator2D: Send + Sync {
    /// Triangulates the polygon stored in `coords`.
    ///
    /// `hole_starts` lists the vertex index at which each hole loop begins.
    fn triangulate(&self, coords: &[f64], hole_starts: &[usize]) -> Result<Vec<usize>, TriangulatorError>;
}

/// Ear-clipping triangulator backed by the `earcutr` crate.
///
/// # Examples
/// ```
/// use earcut3d::{EarcutTriangulator, Triangulator2D};
///
/// let square = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
/// let indices = EarcutTriangulator.triangulate(&square, &[]).unwrap();
/// assert_eq!(indices.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EarcutTriangulator;

impl Triangulator2D for EarcutTriangulator {
    fn triangulate(&self, coords: &[f64], hole_starts: &[usize]) -> Result<Vec<usize>, TriangulatorError> {
        check_coords(coords)?;
        earcutr::earcut(coords, hole_starts, 2).map_err(|e| TriangulatorError::Backend(format!("{e:?}")))
    }
}

/// Fan triangulator: `(0, i, i + 1)` over the outer loop, holes ignored.
///
/// Correct only for convex outer loops.
///
/// # Examples
/// ```
/// use earcut3d::{FanTriangulator, Triangulator2D};
///
/// let pentagon = [0.0, 0.0, 2.0, 0.0, 3.0, 1.0, 1.0, 2.0, -1.0, 1.0];
/// let indices = FanTriangulator.triangulate(&pentagon, &[]).unwrap();
/// assert_eq!(indices, vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FanTriangulator;

impl Triangulator2D for FanTriangulator {
    fn triangulate(&self, coords: &[f64], hole_starts: &[usize]) -> Result<Vec<usize>, TriangulatorError> {
        check_coords(coords)?;
        let outer = hole_starts.first().copied().unwrap_or(coords.len() / 2);

        let mut indices = Vec::with_capacity(outer.saturating_sub(2) * 3);
        for i in 1..outer.saturating_sub(1) {
            indices.extend_from_slice(&[0, i, i + 1]);
        }
        Ok(indices)
    }
}

fn check_coords(coords: &[f64]) -> Result<(), TriangulatorError> {
    if coords.len() % 2 != 0 {
        return Err(TriangulatorError::OddCoordinateCount(coords.len()));
    }
    Ok(())
}
