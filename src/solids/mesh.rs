// Copyright @yucwang 2023

use crate::core::shader::ShaderHandle;
use crate::core::solid::{ Solid, SolidBase };
use crate::io::obj::{ self, ObjDirective, ObjParseError, VertexTables };
use crate::shapes::triangle::PrimTriangle;

use std::fs::File;
use std::io::{ BufRead, BufReader };
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolidError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ObjParseError),
}

/// A solid read from a Wavefront-style text mesh.
///
/// Only triangular faces with full `pos/tex/norm` groups are accepted. Every
/// face becomes one `PrimTriangle` bound to the shader given at construction.
pub struct MeshSolid {
    base: SolidBase,
}

impl Solid for MeshSolid {
    fn base(&self) -> &SolidBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SolidBase {
        &mut self.base
    }
}

impl MeshSolid {
    /// Loads the mesh at `path`.
    ///
    /// A file that cannot be opened is logged and yields an empty solid.
    /// Malformed content is returned as `SolidError::Parse`.
    pub fn from_file<P: AsRef<Path>>(shader: ShaderHandle, path: P) -> Result<Self, SolidError> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                log::error!("Can't open OBJ file {}: {}.", path.display(), err);
                return Ok(Self { base: SolidBase::new() });
            }
        };

        Self::from_reader(shader, BufReader::new(file), &path.display().to_string())
    }

    pub fn from_str(shader: ShaderHandle, source: &str) -> Result<Self, SolidError> {
        Self::from_reader(shader, source.as_bytes(), "<memory>")
    }

    pub fn from_reader<R: BufRead>(shader: ShaderHandle, reader: R, source_name: &str) -> Result<Self, SolidError> {
        log::info!("Parsing OBJ file: {}.", source_name);

        let mut tables = VertexTables::default();
        let mut base = SolidBase::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let at_line = |kind| ObjParseError { line: line_no, kind };

            match obj::parse_line(&line).map_err(at_line)? {
                ObjDirective::Vertex(p) => tables.positions.push(p),
                ObjDirective::TexCoord(uv) => tables.tex_coords.push(uv),
                ObjDirective::Normal(n) => tables.normals.push(n),
                ObjDirective::Face(face) => {
                    let resolved = tables.resolve(&face).map_err(at_line)?;
                    base.add_prim(PrimTriangle::new(Arc::clone(&shader),
                                                    resolved.positions,
                                                    resolved.tex_coords,
                                                    resolved.normals));
                }
                ObjDirective::Comment | ObjDirective::Empty => {}
                ObjDirective::Unknown(key) => {
                    log::warn!("Unknown key [{}] met in {} at line {}.", key, source_name, line_no);
                }
            }
        }

        log::info!("Finished parsing {}: {} faces, {} vertices.",
                   source_name, base.len(), tables.positions.len());
        Ok(Self { base })
    }
}
