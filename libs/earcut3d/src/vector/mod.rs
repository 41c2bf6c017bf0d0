//! Thin wrapper around `glam::DVec3` / `glam::DVec2` shared across the
//! pipeline.
//!
//! Addition, subtraction, scaling, dot products and distances come straight
//! from glam; this module adds the few predicates the basis finder and welder
//! need on top.

use config::constants::approx_zero;

pub use glam::DVec2 as Point2;
pub use glam::DVec3 as Point3;

/// Returns true when every component is below the zero-vector epsilon.
///
/// # Examples
/// ```
/// use earcut3d::vector::{is_zero_vector, Point3};
/// assert!(is_zero_vector(Point3::new(1e-12, 0.0, -1e-11)));
/// assert!(!is_zero_vector(Point3::new(0.0, 1e-3, 0.0)));
/// ```
#[inline]
pub fn is_zero_vector(v: Point3) -> bool {
    approx_zero(v.x) && approx_zero(v.y) && approx_zero(v.z)
}

/// Scales `v` to unit length. A zero-length vector is returned unchanged.
///
/// # Examples
/// ```
/// use earcut3d::vector::{normalize_or_self, Point3};
/// assert_eq!(normalize_or_self(Point3::new(0.0, 0.0, 2.0)), Point3::Z);
/// assert_eq!(normalize_or_self(Point3::ZERO), Point3::ZERO);
/// ```
#[inline]
pub fn normalize_or_self(v: Point3) -> Point3 {
    let length = v.dot(v).sqrt();
    if length == 0.0 {
        return v;
    }
    v * (1.0 / length)
}

/// Returns true when `a` and `b` point along nearly the same line.
///
/// The cosine of the angle between the normalized vectors is compared with
/// both `1` (parallel) and `-1` (anti-parallel).
///
/// # Examples
/// ```
/// use earcut3d::vector::{is_nearly_parallel, Point3};
/// let a = Point3::new(1.0, 0.0, 0.0);
/// assert!(is_nearly_parallel(a, Point3::new(-2.0, 0.01, 0.0), 0.01));
/// assert!(!is_nearly_parallel(a, Point3::new(1.0, 1.0, 0.0), 0.01));
/// ```
pub fn is_nearly_parallel(a: Point3, b: Point3, tolerance: f64) -> bool {
    let cos_angle = normalize_or_self(a).dot(normalize_or_self(b));
    (cos_angle - 1.0).abs() < tolerance || (cos_angle + 1.0).abs() < tolerance
}

/// Arithmetic mean of `points`, or `None` when the slice is empty.
///
/// # Examples
/// ```
/// use earcut3d::vector::{centroid, Point3};
/// let c = centroid(&[Point3::ZERO, Point3::new(2.0, 4.0, 6.0)]).unwrap();
/// assert_eq!(c, Point3::new(1.0, 2.0, 3.0));
/// assert!(centroid(&[]).is_none());
/// ```
pub fn centroid(points: &[Point3]) -> Option<Point3> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point3::ZERO, |acc, p| acc + *p);
    Some(sum / points.len() as f64)
}
