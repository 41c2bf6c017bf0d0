use std::collections::HashMap;

use approx::assert_abs_diff_eq;
use earcut3d::export::IndexedMesh;
use earcut3d::{
    find_basis, project_to_2d, project_to_3d, shapes, triangulate_solid, triangulate_solid_with, weld,
    EarcutTriangulator, FanTriangulator, Options, Point3, Triangle3, TriangulationError,
};

fn area(tri: &Triangle3) -> f64 {
    0.5 * (tri[1] - tri[0]).cross(tri[2] - tri[0]).length()
}

/// Maps coordinates of an oblique plane `origin + u*a + v*b`.
struct Frame {
    origin: Point3,
    u: Point3,
    v: Point3,
}

impl Frame {
    fn oblique() -> Self {
        let u = Point3::new(2.0, -1.0, 0.5).normalize();
        let v = u.cross(Point3::new(0.3, 0.2, 1.0)).normalize();
        Self {
            origin: Point3::new(-3.0, 1.5, 7.0),
            u,
            v,
        }
    }

    fn at(&self, a: f64, b: f64) -> Point3 {
        self.origin + self.u * a + self.v * b
    }

    fn coords(&self, p: Point3) -> (f64, f64) {
        ((p - self.origin).dot(self.u), (p - self.origin).dot(self.v))
    }

    fn rect(&self, a0: f64, b0: f64, a1: f64, b1: f64) -> Vec<Point3> {
        vec![self.at(a0, b0), self.at(a1, b0), self.at(a1, b1), self.at(a0, b1)]
    }
}

#[test]
fn cube_end_to_end() {
    let cube = shapes::cube(1.0);
    let mesh = triangulate_solid(&cube.faces, &cube.holes);

    assert_eq!(mesh.len(), 12);
    for p in mesh.iter().flatten() {
        for c in p.to_array() {
            assert!(c.abs() < 1e-9 || (c - 1.0).abs() < 1e-9, "coordinate {c} off the unit cube");
        }
    }

    let indexed = IndexedMesh::from_triangles(&mesh);
    assert_eq!(indexed.vertex_count(), 8);

    let mut uses = vec![0usize; indexed.vertex_count()];
    for face in &indexed.faces {
        for &i in face {
            uses[i as usize] += 1;
        }
    }
    assert!(uses.iter().all(|&n| n >= 3), "corner usage {uses:?}");
}

#[test]
fn cube_rounds_to_integer_corners() {
    let cube = shapes::cube(1.0);
    let mesh = triangulate_solid(&cube.faces, &[]);
    let corners: Vec<Point3> = mesh.iter().flatten().map(|p| p.round()).collect();
    for (p, rounded) in mesh.iter().flatten().zip(&corners) {
        assert_abs_diff_eq!(p.distance(*rounded), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn projection_round_trip_on_cube_face() {
    let face = shapes::cube(1.0).faces[0].clone();
    let basis = find_basis(&face).unwrap();
    let lifted = project_to_3d(&project_to_2d(&face, &basis), &basis, face[0]);
    let rounded: Vec<Point3> = lifted.iter().map(|p| p.round()).collect();
    assert_eq!(rounded, face);
}

#[test]
fn basis_is_orthonormal_for_every_sphere_face() {
    let sphere = shapes::uv_sphere(2.0, 10);
    for face in &sphere.faces {
        let basis = find_basis(face).unwrap();
        assert_abs_diff_eq!(basis.dir1.length(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(basis.dir2.length(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(basis.dir1.dot(basis.dir2), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn convex_quad_gives_two_triangles() {
    let frame = Frame::oblique();
    let mesh = triangulate_solid(&[frame.rect(0.0, 0.0, 3.0, 2.0)], &[]);
    assert_eq!(mesh.len(), 2);
    assert_abs_diff_eq!(mesh.iter().map(area).sum::<f64>(), 6.0, epsilon = 1e-9);
}

#[test]
fn hole_is_subtracted() {
    let frame = Frame::oblique();
    let outer = frame.rect(0.0, 0.0, 4.0, 4.0);
    let hole = frame.rect(1.0, 1.5, 2.5, 3.0);
    let mesh = triangulate_solid(&[outer], &[vec![hole]]);

    assert!(!mesh.is_empty());
    assert_abs_diff_eq!(mesh.iter().map(area).sum::<f64>(), 16.0 - 2.25, epsilon = 1e-9);

    for tri in &mesh {
        let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
        let (a, b) = frame.coords(centroid);
        let inside = a > 1.0 && a < 2.5 && b > 1.5 && b < 3.0;
        assert!(!inside, "triangle centroid ({a}, {b}) inside the hole");
    }
}

#[test]
fn perforated_panel_area() {
    let panel = shapes::perforated_panel();
    let mesh = panel.triangulate();
    assert_abs_diff_eq!(mesh.iter().map(area).sum::<f64>(), 1.0 - 2.0 * 0.2 * 0.5, epsilon = 1e-9);
}

#[test]
fn degenerate_face_is_skipped_not_fatal() {
    let faces = vec![
        vec![Point3::ZERO, Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 2.0, 2.0)],
        shapes::cube(1.0).faces[4].clone(),
    ];
    let out = triangulate_solid_with(&faces, &[], &Options::default(), &EarcutTriangulator);

    assert_eq!(out.mesh.len(), 2);
    assert_eq!(out.report.faces[0].outcome, Err(TriangulationError::DegeneratePlane));
    assert_eq!(out.report.skipped_count(), 1);

    let only_degenerate = triangulate_solid(&faces[..1], &[]);
    assert!(only_degenerate.is_empty());
}

#[test]
fn weld_is_idempotent_on_pipeline_output() {
    let sphere = shapes::uv_sphere(1.0, 9);
    let out = triangulate_solid_with(&sphere.faces, &sphere.holes, &Options::default(), &EarcutTriangulator);
    assert!(out.report.weld.settled);
    assert_eq!(weld(&out.mesh, 0.01), out.mesh);
}

#[test]
fn sphere_is_closed_after_welding() {
    let sphere = shapes::uv_sphere(1.0, 9);
    let mesh = sphere.triangulate();
    // 18 pole triangles plus 63 quads split in two.
    assert_eq!(mesh.len(), 18 + 2 * 63);

    let indexed = IndexedMesh::from_triangles(&mesh);
    let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
    for [a, b, c] in &indexed.faces {
        for (x, y) in [(*a, *b), (*b, *c), (*c, *a)] {
            *edges.entry((x.min(y), x.max(y))).or_default() += 1;
        }
    }
    assert!(edges.values().all(|&n| n == 2), "open or non-manifold edge");

    // Euler characteristic of a sphere.
    let v = indexed.vertex_count() as i64;
    let e = edges.len() as i64;
    let f = indexed.triangle_count() as i64;
    assert_eq!(v - e + f, 2);
}

#[test]
fn fan_stub_matches_earcut_on_convex_faces() {
    let cube = shapes::cube(1.0);
    let opts = Options::default();
    let earcut = triangulate_solid_with(&cube.faces, &[], &opts, &EarcutTriangulator);
    let fan = triangulate_solid_with(&cube.faces, &[], &opts, &FanTriangulator);

    assert_eq!(earcut.mesh.len(), fan.mesh.len());
    let total = |m: &[Triangle3]| m.iter().map(area).sum::<f64>();
    assert_abs_diff_eq!(total(&earcut.mesh), total(&fan.mesh), epsilon = 1e-9);
}

#[test]
fn welding_joins_independently_projected_faces() {
    // Two faces of different planes share an edge; the projection round trip
    // perturbs the shared vertices differently for each face.
    let frame = Frame::oblique();
    let a = frame.rect(0.0, 0.0, 1.0, 1.0);
    let tilt = frame.u.cross(frame.v);
    let b = vec![a[1], a[1] + tilt, a[2] + tilt, a[2]];

    let mesh = triangulate_solid(&[a, b], &[]);
    let indexed = IndexedMesh::from_triangles(&mesh);
    assert_eq!(indexed.vertex_count(), 6);
}
