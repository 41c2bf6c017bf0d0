//! # Face Triangulation
//!
//! Per-face driver: fit a basis, project the face and its holes, run the 2D
//! triangulator and lift the triangles back into the face's plane.
//!
//! ```text
//! face + holes → Basis → 2D loops → Triangulator2D → index triples → 3D triangles
//! ```

use config::constants::MIN_POLYGON_POINTS;
use tracing::debug;

use crate::error::{TriangulationError, TriangulationResult};
use crate::options::Options;
use crate::projection::project_loop;
use crate::triangulator::Triangulator2D;
use crate::vector::{Point2, Point3};

/// A triangle in 3D, winding inherited from the 2D triangulation.
pub type Triangle3 = [Point3; 3];

/// Triangulates one planar face with optional hole loops.
///
/// The face's first vertex is the reference point of the 2D frame for both
/// the face and its holes. A triangle without holes is returned as-is (after
/// the projection round trip) without calling the triangulator. Hole loops
/// with fewer than three points are ignored.
///
/// # Errors
///
/// - [`TriangulationError::InsufficientPoints`] for faces under three points
/// - [`TriangulationError::DegeneratePlane`] when no basis spans the face
/// - [`TriangulationError::TriangulatorFailed`] when the triangulator errors or
///   returns no usable index triples
///
/// # Examples
/// ```
/// use earcut3d::{triangulate_face, EarcutTriangulator, Options, Point3};
///
/// let quad = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 1.0),
///     Point3::new(1.0, 1.0, 1.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let triangles = triangulate_face(&quad, &[], &EarcutTriangulator, &Options::default()).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn triangulate_face<T>(
    face: &[Point3],
    holes: &[Vec<Point3>],
    triangulator: &T,
    options: &Options,
) -> TriangulationResult<Vec<Triangle3>>
where
    T: Triangulator2D + ?Sized,
{
    if face.len() < MIN_POLYGON_POINTS {
        return Err(TriangulationError::insufficient(face.len()));
    }

    let basis = options.basis.try_find(face, options.parallel_tolerance())?;
    let reference = face[0];

    let outer = project_loop(face, reference, &basis);
    let holes: Vec<Vec<Point2>> = holes
        .iter()
        .filter(|hole| {
            let usable = hole.len() >= MIN_POLYGON_POINTS;
            if !usable {
                debug!(points = hole.len(), "ignoring hole loop with too few points");
            }
            usable
        })
        .map(|hole| project_loop(hole, reference, &basis))
        .collect();

    if outer.len() == MIN_POLYGON_POINTS && holes.is_empty() {
        return Ok(vec![[
            basis.to_3d(outer[0], reference),
            basis.to_3d(outer[1], reference),
            basis.to_3d(outer[2], reference),
        ]]);
    }

    let (coords, hole_starts) = flatten_loops(&outer, &holes);
    let indices = triangulator.triangulate(&coords, &hole_starts)?;
    let vertex_count = coords.len() / 2;
    check_indices(&indices, vertex_count)?;

    let point = |i: usize| Point2::new(coords[2 * i], coords[2 * i + 1]);
    let triangles = indices
        .chunks_exact(3)
        .map(|tri| {
            [
                basis.to_3d(point(tri[0]), reference),
                basis.to_3d(point(tri[1]), reference),
                basis.to_3d(point(tri[2]), reference),
            ]
        })
        .collect();

    Ok(triangles)
}

/// Concatenates the outer loop and hole loops into `[x0, y0, x1, y1, ...]`
/// and records the vertex index at which each hole begins.
fn flatten_loops(outer: &[Point2], holes: &[Vec<Point2>]) -> (Vec<f64>, Vec<usize>) {
    let total = outer.len() + holes.iter().map(Vec::len).sum::<usize>();
    let mut coords = Vec::with_capacity(total * 2);
    let mut hole_starts = Vec::with_capacity(holes.len());

    coords.extend(outer.iter().flat_map(|p| [p.x, p.y]));
    for hole in holes {
        hole_starts.push(coords.len() / 2);
        coords.extend(hole.iter().flat_map(|p| [p.x, p.y]));
    }

    (coords, hole_starts)
}

fn check_indices(indices: &[usize], vertex_count: usize) -> TriangulationResult<()> {
    if indices.is_empty() {
        return Err(TriangulationError::triangulator_failed("no triangles produced"));
    }
    if indices.len() % 3 != 0 {
        return Err(TriangulationError::triangulator_failed(format!(
            "index count {} is not a multiple of 3",
            indices.len()
        )));
    }
    if let Some(&bad) = indices.iter().find(|&&i| i >= vertex_count) {
        return Err(TriangulationError::triangulator_failed(format!(
            "index {bad} out of range for {vertex_count} vertices"
        )));
    }
    Ok(())
}
