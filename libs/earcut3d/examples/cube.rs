//! Triangulates a unit cube and writes it to `cube.obj` (or the path given
//! as the first argument).

use earcut3d::export::IndexedMesh;
use earcut3d::{save_obj, shapes};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "cube.obj".to_string());

    let cube = shapes::cube(1.0);
    let mesh = cube.triangulate();
    let indexed = IndexedMesh::from_triangles(&mesh);

    println!("=== cube ===");
    println!("  Faces: {}", cube.faces.len());
    println!("  Triangles: {}, Vertices: {}", indexed.triangle_count(), indexed.vertex_count());

    save_obj(&path, &mesh)?;
    println!("  Wrote {}", path);
    Ok(())
}
