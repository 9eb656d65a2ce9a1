// Copyright @yucwang 2023

use crate::core::primitive::Hit;
use crate::core::shader::Shader;
use crate::math::spectrum::RGBSpectrum;

/// Maps the shading normal from [-1, 1] to an RGB colour in [0, 1].
#[derive(Default)]
pub struct NormalShader;

impl Shader for NormalShader {
    fn shade(&self, hit: &Hit) -> RGBSpectrum {
        let n = hit.sh_normal * 0.5;
        RGBSpectrum::new(n.x + 0.5, n.y + 0.5, n.z + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::{ Vector2f, Vector3f };

    #[test]
    fn test_normal_colour() {
        let hit = Hit {
            t: 1.0,
            p: Vector3f::zeros(),
            geo_normal: Vector3f::new(0.0, 0.0, 1.0),
            sh_normal: Vector3f::new(0.0, 0.0, 1.0),
            uv: Vector2f::zeros(),
        };
        assert_eq!(NormalShader.shade(&hit), RGBSpectrum::new(0.5, 0.5, 1.0));
        assert!(NormalShader.name().ends_with("NormalShader"));
    }
}
