// Copyright @yucwang 2023

use crate::core::shader::ShaderHandle;
use crate::core::solid::{ Solid, SolidBase };
use crate::math::constants::Vector3f;
use crate::solids::quad::push_quad;

/// Axis-aligned box of twelve triangles, pivot at its centre.
pub struct CuboidSolid {
    base: SolidBase,
}

impl Solid for CuboidSolid {
    fn base(&self) -> &SolidBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SolidBase {
        &mut self.base
    }
}

impl CuboidSolid {
    pub fn new(shader: ShaderHandle, center: Vector3f, size: Vector3f) -> Self {
        let half = size * 0.5;
        let mut base = SolidBase::with_pivot(center);

        for axis in 0..3 {
            for sign in [1.0f32, -1.0].iter() {
                let mut n = Vector3f::zeros();
                n[axis] = *sign;
                let mut u = Vector3f::zeros();
                u[(axis + 1) % 3] = 1.0;
                let mut v = Vector3f::zeros();
                v[(axis + 2) % 3] = 1.0;
                // u x v must point along n for outward winding.
                if *sign < 0.0 {
                    std::mem::swap(&mut u, &mut v);
                }

                let corner = |du: f32, dv: f32| center + (n + u * du + v * dv).component_mul(&half);
                push_quad(&mut base, &shader,
                          [corner(-1.0, -1.0), corner(1.0, -1.0), corner(1.0, 1.0), corner(-1.0, 1.0)]);
            }
        }

        Self { base }
    }
}
