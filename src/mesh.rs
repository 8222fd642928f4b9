//! Body decoding and face triangulation.
//!
//! The body is decoded strictly by position: the first `vertex_count` lines
//! are vertex records, the next `face_count` lines are face records. Vertex
//! extraction is plain integer-indexed column access driven by the
//! interpreted header.

use std::io::BufRead;

use glam::{Vec2, Vec3, Vec4};
use thiserror::Error;
use tracing::warn;

use crate::header::{FaceParseMode, PlyFormat, PlyHeader};
use crate::PlyError;

/// Non-fatal per-face diagnostics. The offending face contributes no
/// triangles; decoding continues with the next record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaceWarning {
    #[error("face {face}: {arity}-vertex faces are not supported, skipping")]
    UnsupportedArity { face: usize, arity: usize },

    #[error("face {face}: record lists {found} of {expected} indices, skipping")]
    ShortRecord {
        face: usize,
        expected: usize,
        found: usize,
    },
}

/// Decoded mesh data, ready for upload to whatever consumes it.
///
/// `vertices`, `colors` and `uvs` all have length equal to the header's
/// vertex count. Colors are RGBA normalized to `[0, 1]` and default to
/// opaque white; UVs default to `(0, 0)`. `triangles` holds vertex indices
/// grouped in triples.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlyMesh {
    pub vertices: Vec<Vec3>,
    pub colors: Vec<Vec4>,
    pub uvs: Vec<Vec2>,
    pub triangles: Vec<u32>,
    pub warnings: Vec<FaceWarning>,
}

/// Decode the body records following `header` into a [`PlyMesh`].
///
/// Only the ascii format is decoded; binary formats short-circuit to
/// [`PlyError::UnsupportedFormat`] without reading any body bytes.
pub fn decode<R: BufRead>(reader: R, header: &PlyHeader) -> Result<PlyMesh, PlyError> {
    if header.format != PlyFormat::Ascii {
        return Err(PlyError::UnsupportedFormat(header.format.clone()));
    }

    let mut lines = reader.lines();
    let mut mesh = PlyMesh {
        vertices: Vec::with_capacity(header.vertex_count),
        colors: Vec::with_capacity(header.vertex_count),
        uvs: Vec::with_capacity(header.vertex_count),
        ..PlyMesh::default()
    };

    for found in 0..header.vertex_count {
        let line = lines.next().transpose()?.ok_or(PlyError::TruncatedBody {
            element: "vertex",
            expected: header.vertex_count,
            found,
        })?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        mesh.vertices.push(parse_position(&tokens, header));
        mesh.colors.push(parse_color(&tokens, header));
        mesh.uvs.push(parse_uv(&tokens, header));
    }

    for found in 0..header.face_count {
        let line = lines.next().transpose()?.ok_or(PlyError::TruncatedBody {
            element: "face",
            expected: header.face_count,
            found,
        })?;
        match header.face_mode {
            FaceParseMode::VertexCountThenIndices => {
                triangulate(&line, found, &mut mesh.triangles, &mut mesh.warnings);
            }
        }
    }

    Ok(mesh)
}

/// Float token at `index`, reading as zero when the token is missing or does
/// not parse.
fn float_at(tokens: &[&str], index: usize) -> f32 {
    tokens.get(index).and_then(|t| t.parse().ok()).unwrap_or(0.0)
}

/// Color channel at an optional column. Undeclared columns and malformed
/// tokens both read as fully saturated.
fn channel_at(tokens: &[&str], index: Option<usize>) -> u8 {
    index
        .and_then(|i| tokens.get(i))
        .and_then(|t| t.parse().ok())
        .unwrap_or(255)
}

fn parse_position(tokens: &[&str], header: &PlyHeader) -> Vec3 {
    Vec3::new(
        float_at(tokens, header.x_index),
        float_at(tokens, header.y_index),
        float_at(tokens, header.z_index),
    )
}

fn parse_color(tokens: &[&str], header: &PlyHeader) -> Vec4 {
    let r = channel_at(tokens, header.red_index);
    let g = channel_at(tokens, header.green_index);
    let b = channel_at(tokens, header.blue_index);
    let a = channel_at(tokens, header.alpha_index);
    Vec4::new(r as f32, g as f32, b as f32, a as f32) / 255.0
}

fn parse_uv(tokens: &[&str], header: &PlyHeader) -> Vec2 {
    Vec2::new(
        header.s_index.map_or(0.0, |i| float_at(tokens, i)),
        header.t_index.map_or(0.0, |i| float_at(tokens, i)),
    )
}

/// Triangulate one face record, appending to `triangles` in place.
fn triangulate(
    line: &str,
    face: usize,
    triangles: &mut Vec<u32>,
    warnings: &mut Vec<FaceWarning>,
) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let arity: usize = tokens.first().and_then(|t| t.parse().ok()).unwrap_or(0);

    let indices: Vec<u32> = tokens
        .iter()
        .skip(1)
        .take(arity)
        .map(|t| t.parse().unwrap_or(0))
        .collect();
    if indices.len() < arity {
        let warning = FaceWarning::ShortRecord {
            face,
            expected: arity,
            found: indices.len(),
        };
        warn!("{warning}");
        warnings.push(warning);
        return;
    }

    match arity {
        3 => triangles.extend_from_slice(&indices),
        4 => triangles.extend(quad_to_triangles(&indices)),
        _ => {
            let warning = FaceWarning::UnsupportedArity { face, arity };
            warn!("{warning}");
            warnings.push(warning);
        }
    }
}

/// Split a quad `[a, b, c, d]` into the triangles `(a, b, c)` and
/// `(c, d, a)`, preserving the record's winding.
///
/// The split is fixed rather than derived from the geometry, so it is only
/// correct for convex planar quads.
fn quad_to_triangles(quad: &[u32]) -> [u32; 6] {
    [quad[0], quad[1], quad[2], quad[2], quad[3], quad[0]]
}
