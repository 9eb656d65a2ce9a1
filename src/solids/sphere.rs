// Copyright @yucwang 2023

use crate::core::shader::ShaderHandle;
use crate::core::solid::{ Solid, SolidBase };
use crate::math::constants::{ Float, PI, Vector2f, Vector3f };
use crate::shapes::triangle::PrimTriangle;

use std::sync::Arc;

/// Tessellated sphere with smooth per-vertex normals.
///
/// `sides` is the number of segments around the equator; the number of
/// rings is half of it. The poles lie on the Y axis.
pub struct SphereSolid {
    base: SolidBase,
}

impl Solid for SphereSolid {
    fn base(&self) -> &SolidBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SolidBase {
        &mut self.base
    }
}

impl SphereSolid {
    pub fn new(shader: ShaderHandle, center: Vector3f, radius: Float, sides: usize) -> Self {
        let sides = if sides < 3 {
            log::warn!("Sphere needs at least 3 sides, got {}; using 3.", sides);
            3
        } else {
            sides
        };
        let rings = (sides / 2).max(2);
        let mut base = SolidBase::with_pivot(center);

        let normal = |ring: usize, side: usize| -> Vector3f {
            let theta = PI * ring as Float / rings as Float;
            let phi = 2.0 * PI * side as Float / sides as Float;
            Vector3f::new(theta.sin() * phi.cos(), theta.cos(), -theta.sin() * phi.sin())
        };
        let uv = |ring: usize, side: usize| {
            Vector2f::new(side as Float / sides as Float, ring as Float / rings as Float)
        };
        let mut push = |corners: [(usize, usize); 3]| {
            let n = [normal(corners[0].0, corners[0].1),
                     normal(corners[1].0, corners[1].1),
                     normal(corners[2].0, corners[2].1)];
            let p = [center + n[0] * radius, center + n[1] * radius, center + n[2] * radius];
            let t = [uv(corners[0].0, corners[0].1),
                     uv(corners[1].0, corners[1].1),
                     uv(corners[2].0, corners[2].1)];
            base.add_prim(PrimTriangle::new(Arc::clone(&shader), p, t, n));
        };

        for ring in 0..rings {
            for side in 0..sides {
                let a = (ring, side);
                let b = (ring + 1, side);
                let c = (ring + 1, side + 1);
                let d = (ring, side + 1);
                // The pole rows collapse to a single triangle per side.
                if ring != rings - 1 {
                    push([a, b, c]);
                }
                if ring != 0 {
                    push([a, c, d]);
                }
            }
        }

        Self { base }
    }
}
