//! An ASCII PLY (Polygon File Format) mesh loader.
//!
//! PLY files have a variable header structure that defines which properties
//! each record carries, so the header is interpreted first: it resolves the
//! column every recognized vertex property occupies and the element counts.
//! Body decoding then turns vertex records into positions, RGBA colors and
//! texture coordinates, and triangulates face records (triangles pass
//! through, quads are split, anything else is skipped with a warning).
//!
//! Binary PLY bodies are recognized but reported as unsupported rather than
//! decoded.
//!
//! # Example
//!
//! ```rust
//! let ply_data = r#"ply
//! format ascii 1.0
//! element vertex 3
//! property float x
//! property float y
//! property float z
//! element face 1
//! property list uchar int vertex_indices
//! end_header
//! 0.0 0.0 0.0
//! 1.0 0.0 0.0
//! 0.5 1.0 0.0
//! 3 0 1 2
//! "#;
//!
//! let mesh = ply_mesh::from_str(ply_data).unwrap();
//! assert_eq!(mesh.vertices.len(), 3);
//! assert_eq!(mesh.triangles, vec![0, 1, 2]);
//! ```

pub mod error;
pub mod header;
pub mod mesh;

pub use error::PlyError;
pub use header::{FaceParseMode, PlyFormat, PlyHeader, ScalarType};
pub use mesh::{decode, FaceWarning, PlyMesh};

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Parse a complete PLY document: header first, then the body records.
pub fn from_reader<R: BufRead>(mut reader: R) -> Result<PlyMesh, PlyError> {
    let header = PlyHeader::parse(&mut reader)?;
    mesh::decode(reader, &header)
}

/// Convenience function for parsing from a string.
pub fn from_str(ply_str: &str) -> Result<PlyMesh, PlyError> {
    from_reader(Cursor::new(ply_str))
}

/// Open and parse a PLY file from disk.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PlyMesh, PlyError> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}
