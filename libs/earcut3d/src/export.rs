//! # OBJ Export
//!
//! Writes a triangle mesh as Wavefront OBJ text:
//!
//! ```text
//! v x y z        one line per unique vertex, first-appearance order
//! f i1 i2 i3     one line per triangle, 1-based vertex indices
//! ```
//!
//! Vertices are de-duplicated by exact coordinate equality, so the mesh
//! should be welded first for faces to share vertices.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use config::constants::OBJ_DECIMALS;

use crate::error::ExportResult;
use crate::face::Triangle3;
use crate::vector::Point3;
use crate::weld::PointKey;

/// Indexed form of a triangle soup: unique vertices plus 0-based faces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndexedMesh {
    /// Unique vertices in first-appearance order.
    pub vertices: Vec<Point3>,
    /// Triangles as indices into `vertices`.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Builds the indexed form of `mesh`.
    ///
    /// # Examples
    /// ```
    /// use earcut3d::export::IndexedMesh;
    /// use earcut3d::Point3;
    ///
    /// let mesh = vec![
    ///     [Point3::ZERO, Point3::X, Point3::Y],
    ///     [Point3::X, Point3::new(1.0, 1.0, 0.0), Point3::Y],
    /// ];
    /// let indexed = IndexedMesh::from_triangles(&mesh);
    /// assert_eq!(indexed.vertices.len(), 4);
    /// assert_eq!(indexed.faces[1], [1, 3, 2]);
    /// ```
    pub fn from_triangles(mesh: &[Triangle3]) -> Self {
        let mut lookup: HashMap<PointKey, u32> = HashMap::new();
        let mut indexed = Self {
            vertices: Vec::new(),
            faces: Vec::with_capacity(mesh.len()),
        };

        for tri in mesh {
            let mut face = [0u32; 3];
            for (slot, point) in face.iter_mut().zip(tri) {
                *slot = *lookup.entry(PointKey::from(*point)).or_insert_with(|| {
                    indexed.vertices.push(*point);
                    (indexed.vertices.len() - 1) as u32
                });
            }
            indexed.faces.push(face);
        }

        indexed
    }

    /// Number of unique vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }
}

/// One OBJ line per unique vertex, then one per triangle, each without its
/// trailing newline.
fn obj_lines(mesh: &[Triangle3]) -> impl Iterator<Item = String> {
    let IndexedMesh { vertices, faces } = IndexedMesh::from_triangles(mesh);

    let vertex_lines = vertices.into_iter().map(|v| {
        format!(
            "v {:.prec$} {:.prec$} {:.prec$}",
            v.x,
            v.y,
            v.z,
            prec = OBJ_DECIMALS
        )
    });
    let face_lines = faces
        .into_iter()
        .map(|[a, b, c]| format!("f {} {} {}", a + 1, b + 1, c + 1));

    vertex_lines.chain(face_lines)
}

/// Writes `mesh` as OBJ text to `writer`.
pub fn write_obj<W: Write>(mut writer: W, mesh: &[Triangle3]) -> ExportResult<()> {
    for line in obj_lines(mesh) {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders `mesh` as an OBJ string.
///
/// # Examples
/// ```
/// use earcut3d::{to_obj_string, Point3};
///
/// let obj = to_obj_string(&[[Point3::ZERO, Point3::X, Point3::Y]]);
/// assert_eq!(
///     obj,
///     "v 0.000000 0.000000 0.000000\nv 1.000000 0.000000 0.000000\nv 0.000000 1.000000 0.000000\nf 1 2 3\n"
/// );
/// ```
pub fn to_obj_string(mesh: &[Triangle3]) -> String {
    obj_lines(mesh).fold(String::new(), |mut text, line| {
        text.push_str(&line);
        text.push('\n');
        text
    })
}

/// Writes `mesh` to an OBJ file at `path`, replacing any existing file.
pub fn save_obj(path: impl AsRef<Path>, mesh: &[Triangle3]) -> ExportResult<()> {
    let file = File::create(path)?;
    write_obj(BufWriter::new(file), mesh)
}
