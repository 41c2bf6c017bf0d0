//! Triangulates a latitude/longitude sphere, reports the weld and checks
//! that the result is watertight.
//!
//! Usage: `sphere [divisions] [output.obj]`

use std::collections::HashMap;

use earcut3d::export::IndexedMesh;
use earcut3d::{save_obj, shapes, triangulate_solid_with, EarcutTriangulator, Options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let divisions: usize = match args.next() {
        Some(arg) => arg.parse()?,
        None => 16,
    };
    let path = args.next().unwrap_or_else(|| "sphere.obj".to_string());

    let sphere = shapes::uv_sphere(1.0, divisions);
    let options = Options::default().parallel(true);
    let out = triangulate_solid_with(&sphere.faces, &sphere.holes, &options, &EarcutTriangulator);
    let indexed = IndexedMesh::from_triangles(&out.mesh);

    let mut edge_counts: HashMap<(u32, u32), u32> = HashMap::new();
    for tri in &indexed.faces {
        for i in 0..3 {
            let (a, b) = (tri[i], tri[(i + 1) % 3]);
            let key = if a < b { (a, b) } else { (b, a) };
            *edge_counts.entry(key).or_insert(0) += 1;
        }
    }
    let boundary = edge_counts.values().filter(|&&c| c == 1).count();
    let nonmanifold = edge_counts.values().filter(|&&c| c > 2).count();

    let weld = out.report.weld;
    println!("=== sphere ({} divisions) ===", divisions);
    println!("  Faces: {}, skipped: {}", sphere.faces.len(), out.report.skipped_count());
    println!("  Triangles: {}, Vertices: {}", indexed.triangle_count(), indexed.vertex_count());
    println!(
        "  Weld: {} -> {} distinct positions in {} pass(es){}",
        weld.distinct_before,
        weld.distinct_after,
        weld.passes,
        if weld.settled { "" } else { " (pass limit hit)" }
    );
    println!(
        "  WATERTIGHT: {}",
        if boundary == 0 && nonmanifold == 0 { "YES" } else { "NO" }
    );

    save_obj(&path, &out.mesh)?;
    println!("  Wrote {}", path);
    Ok(())
}
