// Copyright @yucwang 2023

use crate::core::primitive::{ Hit, PrimHandle, Primitive };
use crate::math::aabb::AABB;
use crate::math::constants::{ Matrix4f, Vector3f };
use crate::math::ray::Ray3f;

use std::cell::RefCell;
use std::rc::Rc;

/// Primitive storage shared by every kind of solid: a pivot point and an
/// ordered list of primitive handles.
#[derive(Clone, Default)]
pub struct SolidBase {
    pivot: Vector3f,
    prims: Vec<PrimHandle>,
}

impl SolidBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pivot(pivot: Vector3f) -> Self {
        Self { pivot, prims: Vec::new() }
    }

    pub fn add_prim<P: Primitive + 'static>(&mut self, prim: P) {
        self.prims.push(Rc::new(RefCell::new(prim)));
    }

    pub fn add_handle(&mut self, prim: PrimHandle) {
        self.prims.push(prim);
    }

    /// Appends the primitives of `solid` without copying their geometry.
    pub fn add_solid(&mut self, solid: &dyn Solid) {
        self.prims.extend(solid.prims().iter().cloned());
    }
}

/// Something built from triangle primitives that can be moved about a pivot.
///
/// Implementors only expose their `SolidBase`; the transform algorithm and the
/// queries are shared.
pub trait Solid {
    fn base(&self) -> &SolidBase;
    fn base_mut(&mut self) -> &mut SolidBase;

    fn prims(&self) -> &[PrimHandle] {
        &self.base().prims
    }

    fn pivot(&self) -> Vector3f {
        self.base().pivot
    }

    fn set_pivot(&mut self, pivot: Vector3f) {
        self.base_mut().pivot = pivot;
    }

    fn len(&self) -> usize {
        self.prims().len()
    }

    fn is_empty(&self) -> bool {
        self.prims().is_empty()
    }

    /// Applies the affine matrix `t` about the pivot.
    ///
    /// Every primitive first receives `t * translate(-pivot)`, then a second
    /// pass applies `translate(pivot)`. The pivot then moves by the translation
    /// column of `t`. A primitive listed twice in the solid is transformed twice.
    fn transform(&mut self, t: &Matrix4f) {
        let pivot = self.pivot();
        let t1 = Matrix4f::new_translation(&(-pivot));
        let t2 = Matrix4f::new_translation(&pivot);

        let centred = t * t1;
        for prim in self.prims() {
            prim.borrow_mut().transform(&centred);
        }
        for prim in self.prims() {
            prim.borrow_mut().transform(&t2);
        }

        let shift = Vector3f::new(t[(0, 3)], t[(1, 3)], t[(2, 3)]);
        log::debug!("Transformed {} primitives, pivot moved by {:?}.", self.len(), shift);
        self.set_pivot(pivot + shift);
    }

    fn bounding_box(&self) -> AABB {
        let mut bound = AABB::default();
        for prim in self.prims() {
            bound.expand_by_aabb(&prim.borrow().bounding_box());
        }
        bound
    }

    /// Nearest hit over all primitives.
    fn intersect(&self, ray: &Ray3f) -> Option<Hit> {
        if !self.bounding_box().ray_intersect(ray) {
            return None;
        }

        let mut probe = *ray;
        let mut closest: Option<Hit> = None;
        for prim in self.prims() {
            if let Some(hit) = prim.borrow().intersect(&probe) {
                probe.max_t = hit.t;
                closest = Some(hit);
            }
        }
        closest
    }
}

impl Solid for SolidBase {
    fn base(&self) -> &SolidBase {
        self
    }

    fn base_mut(&mut self) -> &mut SolidBase {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shader::ShaderHandle;
    use crate::shaders::flat::FlatShader;
    use crate::shapes::triangle::PrimTriangle;
    use crate::math::constants::Vector2f;
    use crate::math::transform::Transform;
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn unit_triangle(shader: &ShaderHandle, offset: Vector3f) -> PrimTriangle {
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let uv = Vector2f::new(0.0, 0.0);
        PrimTriangle::new(Arc::clone(shader),
                          [offset, offset + Vector3f::new(1.0, 0.0, 0.0), offset + Vector3f::new(0.0, 1.0, 0.0)],
                          [uv, uv, uv],
                          [n, n, n])
    }

    fn positions(solid: &dyn Solid) -> Vec<Vector3f> {
        let mut out = Vec::new();
        for prim in solid.prims() {
            let bbox = prim.borrow().bounding_box();
            out.push(bbox.p_min);
            out.push(bbox.p_max);
        }
        out
    }

    fn sample_solid() -> SolidBase {
        let shader: ShaderHandle = Arc::new(FlatShader::default());
        let mut solid = SolidBase::with_pivot(Vector3f::new(0.5, 0.5, 0.0));
        solid.add_prim(unit_triangle(&shader, Vector3f::zeros()));
        solid.add_prim(unit_triangle(&shader, Vector3f::new(2.0, 0.0, 1.0)));
        solid
    }

    #[test]
    fn test_identity_keeps_everything() {
        let mut solid = sample_solid();
        let before = positions(&solid);
        solid.transform(&Matrix4f::identity());
        assert_eq!(solid.pivot(), Vector3f::new(0.5, 0.5, 0.0));
        for (a, b) in before.iter().zip(positions(&solid).iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_rotation_about_pivot() {
        let shader: ShaderHandle = Arc::new(FlatShader::default());
        let mut solid = SolidBase::with_pivot(Vector3f::new(1.0, 0.0, 0.0));
        solid.add_prim(unit_triangle(&shader, Vector3f::zeros()));

        let rot = Transform::rotate(&Vector3f::new(0.0, 0.0, 1.0), 180.0);
        solid.transform(rot.matrix());

        // (0,0,0) rotated half a turn about (1,0,0) lands on (2,0,0).
        let bbox = solid.bounding_box();
        assert_relative_eq!(bbox.p_max.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(bbox.p_min.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(bbox.p_min.y, -1.0, epsilon = 1e-5);
        assert_eq!(solid.pivot(), Vector3f::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_set_pivot_changes_rotation_centre() {
        let mut solid = sample_solid();
        solid.set_pivot(Vector3f::zeros());
        assert_eq!(solid.pivot(), Vector3f::zeros());

        let rot = Transform::rotate(&Vector3f::new(0.0, 0.0, 1.0), 180.0);
        solid.transform(rot.matrix());
        let bbox = solid.bounding_box();
        assert_relative_eq!(bbox.p_min, Vector3f::new(-3.0, -1.0, 0.0), epsilon = 1e-5);
        assert_relative_eq!(bbox.p_max, Vector3f::new(0.0, 0.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_translation_moves_pivot() {
        let mut solid = sample_solid();
        let t = Transform::translate(&Vector3f::new(1.0, -2.0, 3.0));
        solid.transform(t.matrix());
        assert_relative_eq!(solid.pivot(), Vector3f::new(1.5, -1.5, 3.0), epsilon = 1e-6);
        let bbox = solid.bounding_box();
        assert_relative_eq!(bbox.p_min, Vector3f::new(1.0, -2.0, 3.0), epsilon = 1e-6);
    }

    #[test]
    fn test_sequential_transforms_are_each_pivot_relative() {
        let mut solid = sample_solid();
        let a = Transform::translate(&Vector3f::new(3.0, 0.0, 0.0));
        let b = Transform::rotate(&Vector3f::new(0.0, 0.0, 1.0), 90.0);
        solid.transform(a.matrix());
        solid.transform(b.matrix());

        // Expected: each step is applied about the pivot current at that time.
        let p0 = Vector3f::new(0.5, 0.5, 0.0);
        let step_a = Transform::translate(&p0) * a * Transform::translate(&-p0);
        let p1 = p0 + a.translation();
        let step_b = Transform::translate(&p1) * b * Transform::translate(&-p1);
        let expected = step_b * step_a;

        let reference = sample_solid();
        let mut want = Vec::new();
        for prim in reference.prims() {
            let bbox = prim.borrow().bounding_box();
            let mut moved = AABB::default();
            for corner in [bbox.p_min, Vector3f::new(bbox.p_max.x, bbox.p_min.y, bbox.p_min.z),
                           Vector3f::new(bbox.p_min.x, bbox.p_max.y, bbox.p_min.z)].iter() {
                moved.expand_by_point(&expected.apply_point(*corner));
            }
            want.push(moved.p_min);
            want.push(moved.p_max);
        }

        for (got, exp) in positions(&solid).iter().zip(want.iter()) {
            assert_relative_eq!(got, exp, epsilon = 1e-5);
        }
        assert_relative_eq!(solid.pivot(), p1, epsilon = 1e-6);
    }

    #[test]
    fn test_add_solid_shares_primitives() {
        let a = sample_solid();
        let b = sample_solid();
        let mut both = SolidBase::new();
        both.add_solid(&a);
        both.add_solid(&b);

        assert_eq!(both.len(), 4);
        assert!(Rc::ptr_eq(&both.prims()[0], &a.prims()[0]));
        assert!(Rc::ptr_eq(&both.prims()[3], &b.prims()[1]));
        assert_eq!(both.pivot(), Vector3f::zeros());
    }

    #[test]
    fn test_intersect_picks_nearest() {
        let shader: ShaderHandle = Arc::new(FlatShader::default());
        let mut solid = SolidBase::new();
        solid.add_prim(unit_triangle(&shader, Vector3f::new(0.0, 0.0, -2.0)));
        solid.add_prim(unit_triangle(&shader, Vector3f::new(0.0, 0.0, -1.0)));

        let ray = Ray3f::new(Vector3f::new(0.2, 0.2, 1.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let hit = solid.intersect(&ray);
        assert!(hit.is_some());
        assert_relative_eq!(hit.map(|h| h.t).unwrap_or(0.0), 2.0, epsilon = 1e-5);

        let miss = Ray3f::new(Vector3f::new(5.0, 5.0, 1.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        assert!(solid.intersect(&miss).is_none());
        assert!(SolidBase::new().intersect(&ray).is_none());
    }
}
