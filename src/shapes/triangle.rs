// Copyright @yucwang 2023

use crate::core::primitive::{ Hit, Primitive };
use crate::core::shader::ShaderHandle;
use crate::math::aabb::AABB;
use crate::math::constants::{ EPSILON, Matrix4f, Vector2f, Vector3f };
use crate::math::ray::Ray3f;
use crate::math::transform::Transform;

use std::any::Any;

/// Triangle with per-vertex texture coordinates and shading normals.
pub struct PrimTriangle {
    shader: ShaderHandle,
    p: [Vector3f; 3],
    uv: [Vector2f; 3],
    n: [Vector3f; 3],
}

impl Primitive for PrimTriangle {
    fn transform(&mut self, t: &Matrix4f) {
        let transform = Transform::new(*t);
        for i in 0..3 {
            self.p[i] = transform.apply_point(self.p[i]);
            let n = transform.apply_normal(self.n[i]);
            self.n[i] = if n.norm() > 0.0 { n.normalize() } else { n };
        }
    }

    fn intersect(&self, ray: &Ray3f) -> Option<Hit> {
        let geo_normal = self.geometric_normal();

        let n_dot_dir = geo_normal.dot(&ray.dir());
        if n_dot_dir > -EPSILON && n_dot_dir < EPSILON {
            return None;
        }

        let plane_d = geo_normal.dot(&self.p[0]);
        let t = (plane_d - geo_normal.dot(&ray.origin())) / n_dot_dir;
        if !ray.test_segment(t) {
            return None;
        }

        let p = ray.at(t);
        if !self.is_in_triangle(&p) {
            return None;
        }

        let bary = self.barycentric(&p);
        let uv = self.uv[0] * bary.x + self.uv[1] * bary.y + self.uv[2] * bary.z;
        let mut sh_normal = self.n[0] * bary.x + self.n[1] * bary.y + self.n[2] * bary.z;
        sh_normal = if sh_normal.norm() > 0.0 { sh_normal.normalize() } else { geo_normal };

        Some(Hit { t, p, geo_normal, sh_normal, uv })
    }

    fn bounding_box(&self) -> AABB {
        let mut bound = AABB::new(self.p[0], self.p[1]);
        bound.expand_by_point(&self.p[2]);

        bound
    }

    fn shader(&self) -> &ShaderHandle {
        &self.shader
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PrimTriangle {
    pub fn new(shader: ShaderHandle, p: [Vector3f; 3], uv: [Vector2f; 3], n: [Vector3f; 3]) -> Self {
        Self { shader, p, uv, n }
    }

    /// Triangle with the face normal on every vertex.
    pub fn flat(shader: ShaderHandle, p: [Vector3f; 3], uv: [Vector2f; 3]) -> Self {
        let n = (p[1] - p[0]).cross(&(p[2] - p[0]));
        let n = if n.norm() > 0.0 { n.normalize() } else { n };
        Self { shader, p, uv, n: [n, n, n] }
    }

    pub fn vertices(&self) -> &[Vector3f; 3] {
        &self.p
    }

    pub fn tex_coords(&self) -> &[Vector2f; 3] {
        &self.uv
    }

    pub fn normals(&self) -> &[Vector3f; 3] {
        &self.n
    }

    pub fn geometric_normal(&self) -> Vector3f {
        let edge0 = self.p[1] - self.p[0];
        let edge1 = self.p[2] - self.p[0];
        edge0.cross(&edge1).normalize()
    }

    fn is_in_triangle(&self, p: &Vector3f) -> bool {
        let geo_normal = (self.p[1] - self.p[0]).cross(&(self.p[2] - self.p[0]));

        let n0 = (self.p[1] - self.p[0]).cross(&(p - self.p[0]));
        let n1 = (self.p[2] - self.p[1]).cross(&(p - self.p[1]));
        let n2 = (self.p[0] - self.p[2]).cross(&(p - self.p[2]));

        n0.dot(&geo_normal) >= 0.0 && n1.dot(&geo_normal) >= 0.0 && n2.dot(&geo_normal) >= 0.0
    }

    fn barycentric(&self, p: &Vector3f) -> Vector3f {
        let v0 = self.p[1] - self.p[0];
        let v1 = self.p[2] - self.p[0];
        let v2 = *p - self.p[0];

        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d11 = v1.dot(&v1);
        let d20 = v2.dot(&v0);
        let d21 = v2.dot(&v1);
        let denom = d00 * d11 - d01 * d01;
        if denom.abs() < EPSILON * EPSILON {
            return Vector3f::new(1.0, 0.0, 0.0);
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        let u = 1.0 - v - w;
        Vector3f::new(u, v, w)
    }
}
