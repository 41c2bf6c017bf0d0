//! # earcut3d
//!
//! Triangulation of planar polygons embedded in 3D space, with optional
//! holes. Faces need not be axis-aligned and no normal is required.
//!
//! ## Architecture
//!
//! ```text
//! faces + holes
//!       ↓
//! basis      (centroid scan + Gram-Schmidt → dir1, dir2)
//!       ↓
//! projection (3D → 2D around the face's first vertex)
//!       ↓
//! Triangulator2D (earcutr by default)
//!       ↓
//! projection (2D → 3D)
//!       ↓
//! weld       (greedy clustering of near-duplicate vertices)
//!       ↓
//! mesh → export (Wavefront OBJ)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use earcut3d::{shapes, to_obj_string, triangulate_solid};
//!
//! let cube = shapes::cube(1.0);
//! let mesh = triangulate_solid(&cube.faces, &cube.holes);
//! assert_eq!(mesh.len(), 12);
//!
//! let obj = to_obj_string(&mesh);
//! assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 8);
//! ```

pub mod basis;
pub mod error;
pub mod export;
pub mod face;
pub mod options;
pub mod pipeline;
pub mod projection;
pub mod shapes;
pub mod triangulator;
pub mod vector;
pub mod weld;

pub use basis::{find_basis, Basis, BasisStrategy};
pub use error::{ExportError, TriangulationError, TriangulatorError};
pub use export::{save_obj, to_obj_string, write_obj};
pub use face::{triangulate_face, Triangle3};
pub use options::Options;
pub use pipeline::{triangulate_solid, triangulate_solid_with, FaceReport, SolidReport, SolidTriangulation};
pub use projection::{project_to_2d, project_to_3d};
pub use triangulator::{EarcutTriangulator, FanTriangulator, Triangulator2D};
pub use vector::{Point2, Point3};
pub use weld::{weld, weld_with_stats, WeldStats};
