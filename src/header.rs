//! Header interpretation.
//!
//! A PLY header declares, per element, an ordered list of properties. Body
//! records are plain whitespace-separated columns in that same order, so the
//! header pass resolves each recognized vertex property name to the column it
//! occupies. Decoding then runs on integer column indices alone, with no
//! name lookups per record.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::PlyError;

/// PLY file format (ascii or binary)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlyFormat {
    Ascii,
    BinaryLittleEndian,
    BinaryBigEndian,
}

impl fmt::Display for PlyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlyFormat::Ascii => write!(f, "ascii"),
            PlyFormat::BinaryLittleEndian => write!(f, "binary_little_endian"),
            PlyFormat::BinaryBigEndian => write!(f, "binary_big_endian"),
        }
    }
}

/// PLY scalar data types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Char,
    UChar,
    Short,
    UShort,
    Int,
    UInt,
    Float,
    Double,
}

impl ScalarType {
    pub fn parse(s: &str) -> Result<Self, PlyError> {
        match s {
            "char" | "int8" => Ok(ScalarType::Char),
            "uchar" | "uint8" => Ok(ScalarType::UChar),
            "short" | "int16" => Ok(ScalarType::Short),
            "ushort" | "uint16" => Ok(ScalarType::UShort),
            "int" | "int32" => Ok(ScalarType::Int),
            "uint" | "uint32" => Ok(ScalarType::UInt),
            "float" | "float32" => Ok(ScalarType::Float),
            "double" | "float64" => Ok(ScalarType::Double),
            _ => Err(PlyError::InvalidHeader(format!(
                "unknown scalar type: {s}"
            ))),
        }
    }
}

impl FromStr for ScalarType {
    type Err = PlyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Layout of a single face record in the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaceParseMode {
    /// First token is the vertex count `k`, followed by `k` vertex indices.
    #[default]
    VertexCountThenIndices,
}

/// Interpreted PLY header: declared format, element counts, and the column
/// each recognized vertex property occupies within its record.
///
/// `x`/`y`/`z` are mandatory; color and texture-coordinate columns are
/// `None` when the file does not declare them. Indices count every property
/// declared under the vertex element, recognized or not.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlyHeader {
    pub format: PlyFormat,
    pub version: String,
    pub vertex_count: usize,
    pub face_count: usize,
    pub x_index: usize,
    pub y_index: usize,
    pub z_index: usize,
    pub red_index: Option<usize>,
    pub green_index: Option<usize>,
    pub blue_index: Option<usize>,
    pub alpha_index: Option<usize>,
    pub s_index: Option<usize>,
    pub t_index: Option<usize>,
    pub face_mode: FaceParseMode,
    pub comments: Vec<String>,
    pub obj_info: Vec<String>,
}

impl PlyHeader {
    /// Parse a PLY header from a reader, consuming lines up to and including
    /// `end_header`. The reader is left positioned at the first body record.
    pub fn parse<R: BufRead>(reader: &mut R) -> Result<Self, PlyError> {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        if line.trim() != "ply" {
            return Err(PlyError::InvalidHeader(
                "file must start with 'ply'".to_string(),
            ));
        }

        let mut format = None;
        let mut version = String::new();
        let mut comments = Vec::new();
        let mut obj_info = Vec::new();

        // Properties belong to the most recently declared element; the
        // column counter restarts with each element.
        let mut current_element: Option<String> = None;
        let mut column = 0;
        let mut vertex_count = None;
        let mut face_count = None;

        let (mut x, mut y, mut z) = (None, None, None);
        let (mut red, mut green, mut blue, mut alpha) = (None, None, None, None);
        let (mut s, mut t) = (None, None);

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(PlyError::InvalidHeader(
                    "unexpected end of file before end_header".to_string(),
                ));
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "end_header" {
                break;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts[0] {
                "format" => {
                    if parts.len() < 3 {
                        return Err(PlyError::InvalidHeader("invalid format line".to_string()));
                    }
                    format = Some(match parts[1] {
                        "ascii" => PlyFormat::Ascii,
                        "binary_little_endian" => PlyFormat::BinaryLittleEndian,
                        "binary_big_endian" => PlyFormat::BinaryBigEndian,
                        other => {
                            return Err(PlyError::InvalidHeader(format!(
                                "unknown format keyword: {other}"
                            )))
                        }
                    });
                    version = parts[2].to_string();
                }
                "comment" => {
                    comments.push(parts[1..].join(" "));
                }
                "obj_info" => {
                    obj_info.push(parts[1..].join(" "));
                }
                "element" => {
                    if parts.len() < 3 {
                        return Err(PlyError::InvalidHeader("invalid element line".to_string()));
                    }
                    let count = parts[2].parse::<usize>().map_err(|_| {
                        PlyError::InvalidHeader(format!("invalid element count: {}", parts[2]))
                    })?;
                    match parts[1] {
                        "vertex" => vertex_count = Some(count),
                        "face" => face_count = Some(count),
                        _ => {}
                    }
                    current_element = Some(parts[1].to_string());
                    column = 0;
                }
                "property" => {
                    let element = current_element.as_deref().ok_or_else(|| {
                        PlyError::InvalidHeader("property before any element".to_string())
                    })?;

                    let name = if parts.get(1) == Some(&"list") {
                        // List property: property list <count_type> <data_type> <name>
                        if parts.len() < 5 {
                            return Err(PlyError::InvalidHeader(
                                "invalid list property line".to_string(),
                            ));
                        }
                        ScalarType::parse(parts[2])?;
                        ScalarType::parse(parts[3])?;
                        parts[4]
                    } else {
                        // Scalar property: property <type> <name>
                        if parts.len() < 3 {
                            return Err(PlyError::InvalidHeader(
                                "invalid property line".to_string(),
                            ));
                        }
                        ScalarType::parse(parts[1])?;
                        parts[2]
                    };

                    // Unrecognized names still occupy a column.
                    if element == "vertex" {
                        match name {
                            "x" => x = Some(column),
                            "y" => y = Some(column),
                            "z" => z = Some(column),
                            "red" => red = Some(column),
                            "green" => green = Some(column),
                            "blue" => blue = Some(column),
                            "alpha" => alpha = Some(column),
                            "s" => s = Some(column),
                            "t" => t = Some(column),
                            _ => {}
                        }
                    }
                    column += 1;
                }
                _ => {
                    // Unknown header line - could be a comment or extension
                    comments.push(line.to_string());
                }
            }
        }

        let format = format.ok_or_else(|| {
            PlyError::InvalidHeader("missing format specification".to_string())
        })?;
        let vertex_count = vertex_count
            .ok_or_else(|| PlyError::InvalidHeader("missing vertex element".to_string()))?;

        let require = |name: &str, index: Option<usize>| {
            index.ok_or_else(|| {
                PlyError::InvalidHeader(format!("vertex element missing required property '{name}'"))
            })
        };

        Ok(PlyHeader {
            format,
            version,
            vertex_count,
            face_count: face_count.unwrap_or(0),
            x_index: require("x", x)?,
            y_index: require("y", y)?,
            z_index: require("z", z)?,
            red_index: red,
            green_index: green,
            blue_index: blue,
            alpha_index: alpha,
            s_index: s,
            t_index: t,
            face_mode: FaceParseMode::VertexCountThenIndices,
            comments,
            obj_info,
        })
    }
}
