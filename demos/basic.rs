//! Load a PLY file from disk and print what came out of it.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: basic <file.ply>")?;

    let mesh = ply_mesh::from_path(&path)?;

    println!(
        "{path}: {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.triangles.len() / 3
    );
    for warning in &mesh.warnings {
        eprintln!("warning: {warning}");
    }
    if let Some(v) = mesh.vertices.first() {
        println!("first vertex: {v}");
    }

    Ok(())
}
