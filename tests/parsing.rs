//! Consolidated parsing tests with real PLY data

use ply_mesh::{PlyError, PlyFormat, PlyHeader};
use std::io::{BufReader, Cursor};

#[test]
fn test_basic_ascii_parsing() {
    let ply_data = r#"ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
end_header
0.0 0.0 0.0
1.0 0.0 0.0
0.5 1.0 0.0
"#;

    let mesh = ply_mesh::from_str(ply_data).unwrap();
    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.vertices[2], glam::Vec3::new(0.5, 1.0, 0.0));
    assert!(mesh.triangles.is_empty());
}

#[test]
fn test_header_leaves_reader_at_body() {
    let ply_data = r#"ply
format ascii 1.0
comment made by hand
element vertex 1
property float x
property float y
property float z
end_header
7.0 8.0 9.0
"#;

    let mut reader = BufReader::new(Cursor::new(ply_data));
    let header = PlyHeader::parse(&mut reader).unwrap();
    assert_eq!(header.format, PlyFormat::Ascii);
    assert_eq!(header.vertex_count, 1);
    assert_eq!(header.comments, vec!["made by hand".to_string()]);

    let mesh = ply_mesh::decode(reader, &header).unwrap();
    assert_eq!(mesh.vertices[0], glam::Vec3::new(7.0, 8.0, 9.0));
}

#[test]
fn test_ascii_truncated_body() {
    let ply_data = r#"ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
end_header
0.0 0.0 0.0
1.0 0.0 0.0
"#;

    let res = ply_mesh::from_str(ply_data);
    assert!(matches!(
        res,
        Err(PlyError::TruncatedBody {
            element: "vertex",
            expected: 3,
            found: 2
        })
    ));
}

#[test]
fn test_greg_turk_cube() {
    let ply_data = r#"ply
format ascii 1.0
comment made by Greg Turk
comment this file is a cube
element vertex 8
property float x
property float y
property float z
element face 6
property list uchar int vertex_index
end_header
0 0 0
0 0 1
0 1 1
0 1 0
1 0 0
1 0 1
1 1 1
1 1 0
4 0 1 2 3
4 7 6 5 4
4 0 4 5 1
4 1 5 6 2
4 2 6 7 3
4 3 7 4 0
"#;

    let mesh = ply_mesh::from_str(ply_data).unwrap();

    assert_eq!(mesh.vertices.len(), 8);
    assert_eq!(mesh.colors.len(), 8);
    assert_eq!(mesh.uvs.len(), 8);
    // Six quads, two triangles each.
    assert_eq!(mesh.triangles.len(), 36);
    assert_eq!(&mesh.triangles[..6], &[0, 1, 2, 2, 3, 0]);
    assert!(mesh.warnings.is_empty());
}

#[test]
fn test_binary_little_endian_unsupported() {
    let ply_data = r#"ply
format binary_little_endian 1.0
element vertex 1
property float x
property float y
property float z
end_header
"#;

    let res = ply_mesh::from_str(ply_data);
    assert!(matches!(
        res,
        Err(PlyError::UnsupportedFormat(PlyFormat::BinaryLittleEndian))
    ));
}

#[test]
fn test_binary_big_endian_unsupported() {
    let ply_data = r#"ply
format binary_big_endian 1.0
element vertex 1
property float x
property float y
property float z
end_header
"#;

    let res = ply_mesh::from_str(ply_data);
    assert!(matches!(
        res,
        Err(PlyError::UnsupportedFormat(PlyFormat::BinaryBigEndian))
    ));
}

#[test]
fn test_missing_position_property_fails_before_body() {
    let ply_data = r#"ply
format ascii 1.0
element vertex 1
property float x
property float y
end_header
0.0 0.0
"#;

    let mut reader = BufReader::new(Cursor::new(ply_data));
    let res = PlyHeader::parse(&mut reader);
    assert!(matches!(res, Err(PlyError::InvalidHeader(_))));
}
