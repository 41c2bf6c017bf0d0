//! # Shapes
//!
//! Face lists for a few hand-authored solids: an axis-aligned cube, a
//! latitude/longitude sphere and a perforated panel. Each face is a planar
//! polygon ready for [`triangulate_solid`](crate::triangulate_solid).

use std::f64::consts::{PI, TAU};

use crate::face::Triangle3;
use crate::pipeline::triangulate_solid;
use crate::vector::Point3;

/// Faces of a solid plus the hole loops of each face, paired by position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    /// Outer boundaries.
    pub faces: Vec<Vec<Point3>>,
    /// `holes[i]` are the hole loops of `faces[i]`.
    pub holes: Vec<Vec<Vec<Point3>>>,
}

impl Shape {
    /// Triangulates and welds the shape with default options.
    pub fn triangulate(&self) -> Vec<Triangle3> {
        triangulate_solid(&self.faces, &self.holes)
    }
}

/// Six quads of an axis-aligned cube with one corner at the origin.
///
/// # Examples
/// ```
/// use earcut3d::shapes::cube;
///
/// let shape = cube(1.0);
/// assert_eq!(shape.faces.len(), 6);
/// assert_eq!(shape.triangulate().len(), 12);
/// ```
pub fn cube(size: f64) -> Shape {
    let p = |x: f64, y: f64, z: f64| Point3::new(x, y, z) * size;
    let faces = vec![
        vec![p(0.0, 0.0, 0.0), p(0.0, 0.0, 1.0), p(0.0, 1.0, 1.0), p(0.0, 1.0, 0.0)], // x = 0
        vec![p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 1.0, 1.0), p(1.0, 0.0, 1.0)], // x = 1
        vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 0.0, 1.0), p(0.0, 0.0, 1.0)], // y = 0
        vec![p(0.0, 1.0, 0.0), p(0.0, 1.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, 0.0)], // y = 1
        vec![p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 0.0, 0.0)], // z = 0
        vec![p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0), p(1.0, 1.0, 1.0), p(0.0, 1.0, 1.0)], // z = 1
    ];
    Shape {
        faces,
        holes: Vec::new(),
    }
}

/// Latitude/longitude sphere centred on the origin.
///
/// `divisions` rings by `divisions` sectors: quads between rings, triangles
/// at the two poles. Fewer than 2 divisions yields an empty shape.
///
/// # Examples
/// ```
/// use earcut3d::shapes::uv_sphere;
///
/// let shape = uv_sphere(1.0, 9);
/// assert_eq!(shape.faces.len(), 81);
/// ```
pub fn uv_sphere(radius: f64, divisions: usize) -> Shape {
    if divisions < 2 {
        return Shape::default();
    }

    let vertex = |ring: usize, sector: usize| {
        let phi = PI * ring as f64 / divisions as f64;
        let theta = TAU * sector as f64 / divisions as f64;
        if ring == 0 {
            return Point3::new(0.0, 0.0, radius);
        }
        if ring == divisions {
            return Point3::new(0.0, 0.0, -radius);
        }
        Point3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
        )
    };

    let mut faces = Vec::with_capacity(divisions * divisions);
    for ring in 0..divisions {
        for sector in 0..divisions {
            let next = sector + 1;
            let face = if ring == 0 {
                vec![vertex(0, sector), vertex(1, sector), vertex(1, next)]
            } else if ring == divisions - 1 {
                vec![vertex(ring, sector), vertex(ring + 1, sector), vertex(ring, next)]
            } else {
                vec![
                    vertex(ring, sector),
                    vertex(ring + 1, sector),
                    vertex(ring + 1, next),
                    vertex(ring, next),
                ]
            };
            faces.push(face);
        }
    }

    Shape {
        faces,
        holes: Vec::new(),
    }
}

/// Unit square on the `x = 0` plane with two rectangular slots.
///
/// # Examples
/// ```
/// use earcut3d::shapes::perforated_panel;
///
/// let panel = perforated_panel();
/// assert_eq!(panel.holes[0].len(), 2);
/// assert!(!panel.triangulate().is_empty());
/// ```
pub fn perforated_panel() -> Shape {
    let p = |y: f64, z: f64| Point3::new(0.0, y, z);
    let slot = |y0: f64, y1: f64| vec![p(y0, 0.25), p(y0, 0.75), p(y1, 0.75), p(y1, 0.25)];
    Shape {
        faces: vec![vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)]],
        holes: vec![vec![slot(0.25, 0.45), slot(0.55, 0.75)]],
    }
}
