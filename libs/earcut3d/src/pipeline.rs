//! # Pipeline
//!
//! Triangulates every face of a solid, concatenates the results in face
//! order and welds the whole mesh once.
//!
//! ```text
//! faces[i] + holes[i] → triangulate_face → concat → weld → mesh
//! ```
//!
//! A face that cannot be triangulated contributes nothing; the failure is
//! logged and recorded in the [`SolidReport`] but never aborts the run.

use config::constants::PARALLEL_FACE_THRESHOLD;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::TriangulationError;
use crate::face::{triangulate_face, Triangle3};
use crate::options::Options;
use crate::triangulator::{EarcutTriangulator, Triangulator2D};
use crate::vector::Point3;
use crate::weld::{weld_with_stats, WeldStats};

// =============================================================================
// REPORT
// =============================================================================

/// Outcome of one face.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceReport {
    /// Index of the face in the input.
    pub index: usize,
    /// Triangles produced, or why the face was skipped.
    pub outcome: Result<usize, TriangulationError>,
}

impl FaceReport {
    /// Returns true when the face was skipped.
    pub fn is_skipped(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Per-face outcomes plus welding statistics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolidReport {
    /// One entry per input face, in input order.
    pub faces: Vec<FaceReport>,
    /// What the welder did.
    pub weld: WeldStats,
}

impl SolidReport {
    /// Faces that contributed no triangles.
    pub fn skipped(&self) -> impl Iterator<Item = &FaceReport> {
        self.faces.iter().filter(|f| f.is_skipped())
    }

    /// Number of faces that contributed no triangles.
    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }
}

/// Welded mesh together with its report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolidTriangulation {
    /// Welded triangles in face order.
    pub mesh: Vec<Triangle3>,
    /// Per-face outcomes.
    pub report: SolidReport,
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Triangulates all `faces` with default options and the `earcutr` backend.
///
/// `holes[i]` holds the hole loops of `faces[i]`; faces past the end of
/// `holes` have none.
///
/// # Examples
/// ```
/// use earcut3d::{triangulate_solid, Point3};
///
/// let faces = vec![
///     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
///     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0), Point3::new(0.0, 1.0, 1.0)],
/// ];
/// let mesh = triangulate_solid(&faces, &[]);
/// assert_eq!(mesh.len(), 3);
/// ```
pub fn triangulate_solid(faces: &[Vec<Point3>], holes: &[Vec<Vec<Point3>>]) -> Vec<Triangle3> {
    triangulate_solid_with(faces, holes, &Options::default(), &EarcutTriangulator).mesh
}

/// Triangulates all `faces` with explicit options and triangulator, returning
/// the per-face report alongside the welded mesh.
pub fn triangulate_solid_with<T>(
    faces: &[Vec<Point3>],
    holes: &[Vec<Vec<Point3>>],
    options: &Options,
    triangulator: &T,
) -> SolidTriangulation
where
    T: Triangulator2D + ?Sized,
{
    let run = |index: usize| {
        let face_holes = holes.get(index).map(Vec::as_slice).unwrap_or(&[]);
        triangulate_face(&faces[index], face_holes, triangulator, options)
    };

    let results: Vec<Result<Vec<Triangle3>, TriangulationError>> =
        if options.parallel && faces.len() >= PARALLEL_FACE_THRESHOLD {
            (0..faces.len()).into_par_iter().map(run).collect()
        } else {
            (0..faces.len()).map(run).collect()
        };

    let mut triangles = Vec::new();
    let mut face_reports = Vec::with_capacity(results.len());

    for (index, result) in results.into_iter().enumerate() {
        let outcome = match result {
            Ok(face_triangles) => {
                debug!(face = index, triangles = face_triangles.len(), "triangulated face");
                let count = face_triangles.len();
                triangles.extend(face_triangles);
                Ok(count)
            }
            Err(err) => {
                warn!(face = index, error = %err, "skipping face");
                Err(err)
            }
        };
        face_reports.push(FaceReport { index, outcome });
    }

    let (mesh, weld_stats) = weld_with_stats(&triangles, options.weld_threshold());
    let report = SolidReport {
        faces: face_reports,
        weld: weld_stats,
    };

    info!(
        faces = faces.len(),
        skipped = report.skipped_count(),
        triangles = mesh.len(),
        vertices = weld_stats.distinct_after,
        "triangulated solid"
    );

    SolidTriangulation { mesh, report }
}
