//! # Plane Basis Finder
//!
//! Fits two orthonormal in-plane directions to a planar polygon without a
//! supplied normal.
//!
//! ## Algorithm
//!
//! ```text
//! points → translate by centroid → first non-parallel pair → Gram-Schmidt → (dir1, dir2)
//! ```
//!
//! The centroid scan tolerates adversarial vertex orderings (e.g. the first
//! three vertices collinear). [`BasisStrategy::LeadingEdges`] seeds
//! Gram-Schmidt from `p1 - p0` and `p2 - p0` instead, which is cheaper but
//! fails whenever the first three vertices are collinear.

use config::constants::PARALLEL_TOLERANCE;

use crate::error::{TriangulationError, TriangulationResult};
use crate::projection::{to_2d, to_3d};
use crate::vector::{centroid, is_nearly_parallel, is_zero_vector, Point2, Point3};

// =============================================================================
// BASIS
// =============================================================================

/// Two orthonormal unit vectors spanning a face's plane.
///
/// The reference point of the 2D frame is supplied separately (the driver
/// uses the face's first vertex).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// First in-plane axis (2D `x`).
    pub dir1: Point3,
    /// Second in-plane axis (2D `y`), orthogonal to `dir1`.
    pub dir2: Point3,
}

impl Basis {
    /// Projects a 3D point into this basis relative to `reference`.
    #[inline]
    pub fn to_2d(&self, point: Point3, reference: Point3) -> Point2 {
        to_2d(point, reference, self.dir1, self.dir2)
    }

    /// Lifts a 2D point in this basis back to 3D relative to `reference`.
    #[inline]
    pub fn to_3d(&self, point: Point2, reference: Point3) -> Point3 {
        to_3d(point, reference, self.dir1, self.dir2)
    }

    /// Unit normal of the plane (`dir1 × dir2`).
    pub fn normal(&self) -> Point3 {
        self.dir1.cross(self.dir2)
    }
}

/// How the seed vectors for Gram-Schmidt are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BasisStrategy {
    /// Scan centroid-relative point pairs for the first non-parallel pair.
    #[default]
    CentroidScan,
    /// Use the first two edge vectors `p1 - p0` and `p2 - p0`.
    LeadingEdges,
}

impl BasisStrategy {
    /// Fits a basis to `points` using this strategy.
    ///
    /// # Examples
    /// ```
    /// use earcut3d::basis::BasisStrategy;
    /// use earcut3d::Point3;
    ///
    /// let tri = [Point3::ZERO, Point3::X, Point3::Y];
    /// assert!(BasisStrategy::LeadingEdges.find(&tri, 0.01).is_some());
    /// ```
    pub fn find(self, points: &[Point3], parallel_tolerance: f64) -> Option<Basis> {
        match self {
            BasisStrategy::CentroidScan => find_basis_with_tolerance(points, parallel_tolerance),
            BasisStrategy::LeadingEdges => find_basis_from_edges(points),
        }
    }

    /// Like [`find`](Self::find) but reports why the fit failed.
    pub fn try_find(self, points: &[Point3], parallel_tolerance: f64) -> TriangulationResult<Basis> {
        self.find(points, parallel_tolerance)
            .ok_or(TriangulationError::DegeneratePlane)
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Finds an orthonormal basis spanning the plane of `points`.
///
/// Returns `None` when the points are coincident or collinear.
///
/// # Examples
/// ```
/// use earcut3d::{find_basis, Point3};
///
/// let face = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(0.0, 1.0, 1.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let basis = find_basis(&face).unwrap();
/// assert!(basis.dir1.dot(basis.dir2).abs() < 1e-9);
/// assert!(basis.dir1.x.abs() < 1e-12 && basis.dir2.x.abs() < 1e-12);
/// ```
pub fn find_basis(points: &[Point3]) -> Option<Basis> {
    find_basis_with_tolerance(points, PARALLEL_TOLERANCE)
}

/// [`find_basis`] with an explicit near-parallel cosine tolerance.
pub fn find_basis_with_tolerance(points: &[Point3], parallel_tolerance: f64) -> Option<Basis> {
    let [a, b] = find_initial_vectors(points, parallel_tolerance)?;
    basis_from_seeds(&[a, b])
}

/// Finds a basis from the polygon's first two edge vectors.
///
/// Valid only when the first three vertices are not collinear.
///
/// # Examples
/// ```
/// use earcut3d::basis::find_basis_from_edges;
/// use earcut3d::Point3;
///
/// let collinear_start = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
///     Point3::new(2.0, 1.0, 0.0),
/// ];
/// assert!(find_basis_from_edges(&collinear_start).is_none());
/// ```
pub fn find_basis_from_edges(points: &[Point3]) -> Option<Basis> {
    if points.len() < 3 {
        return None;
    }
    let origin = points[0];
    basis_from_seeds(&[points[1] - origin, points[2] - origin])
}

/// Orthonormalizes `vectors` in order.
///
/// Zero vectors are skipped, as are residuals that collapse to zero length
/// after the projections onto earlier vectors are removed.
///
/// # Examples
/// ```
/// use earcut3d::basis::gram_schmidt;
/// use earcut3d::Point3;
///
/// let basis = gram_schmidt(&[Point3::new(2.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)]);
/// assert_eq!(basis, vec![Point3::X, Point3::Y]);
/// ```
pub fn gram_schmidt(vectors: &[Point3]) -> Vec<Point3> {
    let mut orthonormal: Vec<Point3> = Vec::with_capacity(vectors.len());

    for &candidate in vectors {
        if is_zero_vector(candidate) {
            continue;
        }

        let mut residual = candidate;
        for &accepted in &orthonormal {
            residual -= accepted * residual.dot(accepted);
        }

        let length = residual.dot(residual).sqrt();
        if length <= 0.0 {
            continue;
        }
        orthonormal.push(residual * (1.0 / length));
    }

    orthonormal
}

// =============================================================================
// INTERNALS
// =============================================================================

/// Picks the first centroid-relative pair `(i, j)`, `i < j`, that is not
/// nearly parallel.
fn find_initial_vectors(points: &[Point3], parallel_tolerance: f64) -> Option<[Point3; 2]> {
    let center = centroid(points)?;
    let translated: Vec<Point3> = points.iter().map(|p| *p - center).collect();

    for (i, &a) in translated.iter().enumerate() {
        for &b in &translated[i + 1..] {
            if !is_nearly_parallel(a, b, parallel_tolerance) {
                return Some([a, b]);
            }
        }
    }

    None
}

fn basis_from_seeds(seeds: &[Point3]) -> Option<Basis> {
    match gram_schmidt(seeds).as_slice() {
        [dir1, dir2, ..] => Some(Basis {
            dir1: *dir1,
            dir2: *dir2,
        }),
        _ => None,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use config::constants::ORTHONORMAL_TOLERANCE;

    fn assert_orthonormal(basis: &Basis) {
        assert_abs_diff_eq!(basis.dir1.length(), 1.0, epsilon = ORTHONORMAL_TOLERANCE);
        assert_abs_diff_eq!(basis.dir2.length(), 1.0, epsilon = ORTHONORMAL_TOLERANCE);
        assert_abs_diff_eq!(basis.dir1.dot(basis.dir2), 0.0, epsilon = ORTHONORMAL_TOLERANCE);
    }

    fn tilted_hexagon() -> Vec<Point3> {
        let u = Point3::new(1.0, 2.0, -0.5).normalize();
        let v = u.any_orthonormal_vector();
        let origin = Point3::new(3.0, -7.0, 11.0);
        (0..6)
            .map(|k| {
                let angle = std::f64::consts::TAU * k as f64 / 6.0;
                origin + u * (2.0 * angle.cos()) + v * (2.0 * angle.sin())
            })
            .collect()
    }

    #[test]
    fn test_basis_is_orthonormal_for_tilted_polygon() {
        let face = tilted_hexagon();
        let basis = find_basis(&face).unwrap();
        assert_orthonormal(&basis);
    }

    #[test]
    fn test_basis_spans_face_plane() {
        let face = tilted_hexagon();
        let basis = find_basis(&face).unwrap();
        let normal = basis.normal();
        for p in &face {
            assert_abs_diff_eq!((*p - face[0]).dot(normal), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_collinear_points_have_no_basis() {
        let line = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        ];
        assert!(find_basis(&line).is_none());
    }

    #[test]
    fn test_coincident_points_have_no_basis() {
        let point = Point3::new(4.0, 5.0, 6.0);
        assert!(find_basis(&[point, point, point]).is_none());
    }

    #[test]
    fn test_empty_input_has_no_basis() {
        assert!(find_basis(&[]).is_none());
    }

    #[test]
    fn test_centroid_scan_survives_collinear_prefix() {
        let face = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
        ];
        assert!(find_basis_from_edges(&face).is_none());
        let basis = find_basis(&face).unwrap();
        assert_orthonormal(&basis);
        assert_abs_diff_eq!(basis.normal().z.abs(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_leading_edges_on_triangle() {
        let basis = find_basis_from_edges(&[Point3::ZERO, Point3::Z, Point3::Y]).unwrap();
        assert_eq!(basis.dir1, Point3::Z);
        assert_eq!(basis.dir2, Point3::Y);
    }

    #[test]
    fn test_gram_schmidt_skips_zero_and_dependent_vectors() {
        let basis = gram_schmidt(&[
            Point3::ZERO,
            Point3::new(0.0, 3.0, 0.0),
            Point3::new(0.0, -6.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ]);
        assert_eq!(basis.len(), 2);
        assert_eq!(basis[0], Point3::Y);
        assert_abs_diff_eq!(basis[1].x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_try_find_reports_degenerate_plane() {
        let line = [Point3::ZERO, Point3::X, Point3::X * 2.0];
        assert_eq!(
            BasisStrategy::CentroidScan.try_find(&line, PARALLEL_TOLERANCE),
            Err(TriangulationError::DegeneratePlane)
        );
    }

    #[test]
    fn test_default_strategy_is_centroid_scan() {
        assert_eq!(BasisStrategy::default(), BasisStrategy::CentroidScan);
    }
}
