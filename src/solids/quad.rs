// Copyright @yucwang 2023

use crate::core::shader::ShaderHandle;
use crate::core::solid::{ Solid, SolidBase };
use crate::math::constants::{ Vector2f, Vector3f };
use crate::shapes::triangle::PrimTriangle;

use std::sync::Arc;

/// A planar quadrilateral `a b c d` (counter-clockwise) split into two triangles.
pub struct QuadSolid {
    base: SolidBase,
}

impl Solid for QuadSolid {
    fn base(&self) -> &SolidBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SolidBase {
        &mut self.base
    }
}

impl QuadSolid {
    pub fn new(shader: ShaderHandle, a: Vector3f, b: Vector3f, c: Vector3f, d: Vector3f) -> Self {
        let mut base = SolidBase::with_pivot((a + b + c + d) * 0.25);
        push_quad(&mut base, &shader, [a, b, c, d]);
        Self { base }
    }
}

// Texture origin sits at the top-left, so `a` maps to v = 1.
pub(crate) fn push_quad(base: &mut SolidBase, shader: &ShaderHandle, p: [Vector3f; 4]) {
    let uv = [Vector2f::new(0.0, 1.0), Vector2f::new(1.0, 1.0),
              Vector2f::new(1.0, 0.0), Vector2f::new(0.0, 0.0)];
    base.add_prim(PrimTriangle::flat(Arc::clone(shader), [p[0], p[1], p[2]], [uv[0], uv[1], uv[2]]));
    base.add_prim(PrimTriangle::flat(Arc::clone(shader), [p[0], p[2], p[3]], [uv[0], uv[2], uv[3]]));
}
