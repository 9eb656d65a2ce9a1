// Copyright @yucwang 2023

use crate::core::primitive::Hit;
use crate::math::spectrum::RGBSpectrum;

use std::sync::Arc;

/// Surface response bound to a primitive. Solids pass it through untouched.
pub trait Shader: Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
    fn shade(&self, hit: &Hit) -> RGBSpectrum;
}

pub type ShaderHandle = Arc<dyn Shader>;
