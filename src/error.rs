use std::io;

use thiserror::Error;

use crate::header::PlyFormat;

/// Errors that can occur while interpreting a PLY header or decoding a body.
///
/// Malformed numeric tokens and odd face arities are not errors; they degrade
/// to defaults or skips and are reported through
/// [`FaceWarning`](crate::FaceWarning).
#[derive(Error, Debug)]
pub enum PlyError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid PLY header: {0}")]
    InvalidHeader(String),

    #[error("Unsupported PLY format: {0}")]
    UnsupportedFormat(PlyFormat),

    #[error("{element} element truncated: expected {expected} records, found {found}")]
    TruncatedBody {
        element: &'static str,
        expected: usize,
        found: usize,
    },
}
