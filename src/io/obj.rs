// Copyright @yucwang 2023

use crate::math::constants::{ Float, Vector2f, Vector3f };

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ObjErrorKind {
    #[error("`{directive}` expects {expected} fields, found {found}")]
    MissingField { directive: &'static str, expected: usize, found: usize },
    #[error("invalid number `{0}`")]
    InvalidFloat(String),
    #[error("invalid index `{0}`")]
    InvalidIndex(String),
    #[error("face group `{0}` is not of the form pos/tex/norm")]
    MalformedFaceGroup(String),
    #[error("faces must have 3 vertex groups, found {groups}")]
    UnsupportedFace { groups: usize },
    #[error("{table} index {index} out of range ({len} declared so far)")]
    IndexOutOfRange { table: &'static str, index: usize, len: usize },
}

#[derive(Debug, Error, PartialEq)]
#[error("line {line}: {kind}")]
pub struct ObjParseError {
    pub line: usize,
    pub kind: ObjErrorKind,
}

/// Zero-based indices of one face corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FaceVertex {
    pub position: usize,
    pub tex_coord: usize,
    pub normal: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjDirective {
    Vertex(Vector3f),
    /// Texture coordinate with V already flipped to image convention.
    TexCoord(Vector2f),
    Normal(Vector3f),
    Face([FaceVertex; 3]),
    Comment,
    Empty,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Result<ObjDirective, ObjErrorKind> {
    let mut tokens = line.split_whitespace();
    let key = match tokens.next() {
        Some(key) => key,
        None => return Ok(ObjDirective::Empty),
    };
    // A `#` anywhere starts a comment running to the end of the line.
    let fields: Vec<&str> = tokens.take_while(|t| !t.starts_with('#')).collect();

    match key {
        "v" => {
            let [x, y, z] = parse_floats::<3>("v", &fields)?;
            Ok(ObjDirective::Vertex(Vector3f::new(x, y, z)))
        }
        "vt" => {
            let [u, v] = parse_floats::<2>("vt", &fields)?;
            Ok(ObjDirective::TexCoord(Vector2f::new(u, 1.0 - v)))
        }
        "vn" => {
            let [x, y, z] = parse_floats::<3>("vn", &fields)?;
            Ok(ObjDirective::Normal(Vector3f::new(x, y, z)))
        }
        "f" => {
            if fields.len() != 3 {
                return Err(ObjErrorKind::UnsupportedFace { groups: fields.len() });
            }
            Ok(ObjDirective::Face([parse_face_vertex(fields[0])?,
                                   parse_face_vertex(fields[1])?,
                                   parse_face_vertex(fields[2])?]))
        }
        _ if key.starts_with('#') => Ok(ObjDirective::Comment),
        _ => Ok(ObjDirective::Unknown(key.to_string())),
    }
}

// Trailing fields past N (e.g. a `w` component) are ignored.
fn parse_floats<const N: usize>(directive: &'static str, fields: &[&str]) -> Result<[Float; N], ObjErrorKind> {
    if fields.len() < N {
        return Err(ObjErrorKind::MissingField { directive, expected: N, found: fields.len() });
    }

    let mut values = [0.0; N];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = field.parse::<Float>()
            .map_err(|_| ObjErrorKind::InvalidFloat(field.to_string()))?;
    }
    Ok(values)
}

fn parse_face_vertex(group: &str) -> Result<FaceVertex, ObjErrorKind> {
    let parts: Vec<&str> = group.split('/').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(ObjErrorKind::MalformedFaceGroup(group.to_string()));
    }

    Ok(FaceVertex {
        position: parse_index(parts[0])?,
        tex_coord: parse_index(parts[1])?,
        normal: parse_index(parts[2])?,
    })
}

// 1-based in the file, 0-based in memory.
fn parse_index(field: &str) -> Result<usize, ObjErrorKind> {
    match field.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index - 1),
        _ => Err(ObjErrorKind::InvalidIndex(field.to_string())),
    }
}

/// Attribute tables filled while reading; they live only for one parse.
#[derive(Default)]
pub struct VertexTables {
    pub positions: Vec<Vector3f>,
    pub tex_coords: Vec<Vector2f>,
    pub normals: Vec<Vector3f>,
}

/// Attributes of one triangle, ordered by corner.
pub struct ResolvedFace {
    pub positions: [Vector3f; 3],
    pub tex_coords: [Vector2f; 3],
    pub normals: [Vector3f; 3],
}

impl VertexTables {
    pub fn resolve(&self, face: &[FaceVertex; 3]) -> Result<ResolvedFace, ObjErrorKind> {
        let mut resolved = ResolvedFace {
            positions: [Vector3f::zeros(); 3],
            tex_coords: [Vector2f::zeros(); 3],
            normals: [Vector3f::zeros(); 3],
        };
        for (i, corner) in face.iter().enumerate() {
            resolved.positions[i] = lookup(&self.positions, "position", corner.position)?;
            resolved.tex_coords[i] = lookup(&self.tex_coords, "texture", corner.tex_coord)?;
            resolved.normals[i] = lookup(&self.normals, "normal", corner.normal)?;
        }
        Ok(resolved)
    }
}

fn lookup<T: Copy>(table: &[T], name: &'static str, index: usize) -> Result<T, ObjErrorKind> {
    table.get(index).copied().ok_or_else(|| ObjErrorKind::IndexOutOfRange {
        table: name,
        index: index + 1,
        len: table.len(),
    })
}
