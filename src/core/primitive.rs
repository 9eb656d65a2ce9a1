// Copyright @yucwang 2023

use crate::core::shader::ShaderHandle;
use crate::math::aabb::AABB;
use crate::math::constants::{ Float, Matrix4f, Vector2f, Vector3f };
use crate::math::ray::Ray3f;

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// Result of a ray hitting a primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hit {
    pub t: Float,
    pub p: Vector3f,
    pub geo_normal: Vector3f,
    pub sh_normal: Vector3f,
    pub uv: Vector2f,
}

pub trait Primitive {
    /// Applies the affine matrix to the primitive's geometry in place.
    fn transform(&mut self, t: &Matrix4f);
    fn intersect(&self, ray: &Ray3f) -> Option<Hit>;
    fn bounding_box(&self) -> AABB;
    fn shader(&self) -> &ShaderHandle;
    fn as_any(&self) -> &dyn Any;
}

/// Shared handle: one primitive may be listed by several solids.
pub type PrimHandle = Rc<RefCell<dyn Primitive>>;
