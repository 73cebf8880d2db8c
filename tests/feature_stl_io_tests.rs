#![cfg(feature = "stl-io")]

use trophyrs::float_types::PI;
use trophyrs::mesh::Mesh;
use trophyrs::triangulated::Triangulated3D;

#[test]
fn mesh_to_stl_ascii() {
    let stem = Mesh::frustum(0.3, 0.4, 1.5, 32);
    let stl_str = stem.to_stl_ascii("stem");
    // Basic checks
    assert!(stl_str.contains("solid stem"));
    assert!(stl_str.contains("endsolid stem"));

    // One facet per triangle
    assert_eq!(stl_str.matches("facet normal").count(), stem.triangle_count());
    assert!(stl_str.contains("vertex"));
}

#[test]
fn to_stl_binary_and_read_back() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_path = std::env::temp_dir().join(format!("trophyrs-handle-{}.stl", std::process::id()));

    let handle = Mesh::torus_arc(0.6, 0.1, 16, 32, PI);
    let bytes = handle.to_stl_binary()?;
    std::fs::write(&tmp_path, &bytes)?;

    let mut file = std::fs::File::open(&tmp_path)?;
    let indexed = stl_io::read_stl(&mut file)?;
    // 16 x 32 quads, two triangles each
    assert_eq!(indexed.faces.len(), 1024);

    let _ = std::fs::remove_file(&tmp_path);
    Ok(())
}
