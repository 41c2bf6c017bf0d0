//! # Projector
//!
//! Maps points between 3D space and the 2D frame of a [`Basis`].
//!
//! `to_2d` and `to_3d` are exact inverses for points lying in the affine plane
//! through the reference point spanned by the basis. Off-plane input is
//! projected orthogonally onto that plane; no correction is applied.

use crate::basis::Basis;
use crate::vector::{Point2, Point3};

/// Projects `point` into the frame `(reference, dir1, dir2)`.
///
/// # Examples
/// ```
/// use earcut3d::projection::to_2d;
/// use earcut3d::{Point2, Point3};
///
/// let p = to_2d(Point3::new(1.0, 2.0, 3.0), Point3::new(1.0, 0.0, 0.0), Point3::Y, Point3::Z);
/// assert_eq!(p, Point2::new(2.0, 3.0));
/// ```
#[inline]
pub fn to_2d(point: Point3, reference: Point3, dir1: Point3, dir2: Point3) -> Point2 {
    let offset = point - reference;
    Point2::new(offset.dot(dir1), offset.dot(dir2))
}

/// Lifts a 2D point of the frame `(reference, dir1, dir2)` back to 3D.
///
/// # Examples
/// ```
/// use earcut3d::projection::to_3d;
/// use earcut3d::{Point2, Point3};
///
/// let p = to_3d(Point2::new(2.0, 3.0), Point3::new(1.0, 0.0, 0.0), Point3::Y, Point3::Z);
/// assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
/// ```
#[inline]
pub fn to_3d(point: Point2, reference: Point3, dir1: Point3, dir2: Point3) -> Point3 {
    reference + (dir1 * point.x + dir2 * point.y)
}

/// Projects every vertex of `face` using `face[0]` as the reference point.
///
/// Returns an empty vector for an empty face.
///
/// # Examples
/// ```
/// use earcut3d::{find_basis, project_to_2d, project_to_3d, Point3};
///
/// let face = [Point3::ZERO, Point3::X, Point3::new(1.0, 1.0, 0.0), Point3::Y];
/// let basis = find_basis(&face).unwrap();
/// let flat = project_to_2d(&face, &basis);
/// let lifted = project_to_3d(&flat, &basis, face[0]);
/// for (a, b) in face.iter().zip(&lifted) {
///     assert!(a.distance(*b) < 1e-12);
/// }
/// ```
pub fn project_to_2d(face: &[Point3], basis: &Basis) -> Vec<Point2> {
    match face.first() {
        Some(&reference) => project_loop(face, reference, basis),
        None => Vec::new(),
    }
}

/// Lifts a loop of 2D points back to 3D around `reference`.
pub fn project_to_3d(points: &[Point2], basis: &Basis, reference: Point3) -> Vec<Point3> {
    points.iter().map(|p| basis.to_3d(*p, reference)).collect()
}

/// Projects a loop of 3D points around an explicit reference point.
///
/// Holes are projected with their face's reference, not their own first
/// vertex, so this is split out from [`project_to_2d`].
pub fn project_loop(points: &[Point3], reference: Point3, basis: &Basis) -> Vec<Point2> {
    points.iter().map(|p| basis.to_2d(*p, reference)).collect()
}
