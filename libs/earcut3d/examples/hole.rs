//! Triangulates a panel with two slots cut through it and writes
//! `panel.obj` (or the path given as the first argument).

use earcut3d::{save_obj, shapes, Triangle3};

fn area(tri: &Triangle3) -> f64 {
    0.5 * (tri[1] - tri[0]).cross(tri[2] - tri[0]).length()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "panel.obj".to_string());

    let panel = shapes::perforated_panel();
    let mesh = panel.triangulate();
    let covered: f64 = mesh.iter().map(area).sum();

    println!("=== perforated panel ===");
    println!("  Holes: {}", panel.holes.iter().map(Vec::len).sum::<usize>());
    println!("  Triangles: {}", mesh.len());
    println!("  Covered area: {:.4} (expected 0.8000)", covered);

    save_obj(&path, &mesh)?;
    println!("  Wrote {}", path);
    Ok(())
}
