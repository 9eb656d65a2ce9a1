// Copyright @yucwang 2023

use crate::core::primitive::Hit;
use crate::core::shader::Shader;
use crate::math::spectrum::RGBSpectrum;

/// Returns the same colour for every hit.
pub struct FlatShader {
    color: RGBSpectrum
}

impl Default for FlatShader {
    fn default() -> Self {
        Self { color: RGBSpectrum::new(0.5, 0.5, 0.5) }
    }
}

impl Shader for FlatShader {
    fn shade(&self, _hit: &Hit) -> RGBSpectrum {
        self.color
    }
}

impl FlatShader {
    pub fn new(rgb: RGBSpectrum) -> Self {
        Self {
            color: rgb,
        }
    }
}
