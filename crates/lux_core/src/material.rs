//! Surface response attributes shared by every primitive.

use serde::{Deserialize, Serialize};

/// How a surface responds to light, apart from its base color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Phong exponent; `None` disables the specular highlight
    pub specular: Option<f32>,

    /// Fraction of outgoing light that is mirror-reflected, in `[0, 1]`
    pub reflective: f32,

    /// Whether light is transmitted through the surface
    pub transparent: bool,

    /// Index of refraction, only used when `transparent` is set
    pub refractive_index: Option<f32>,
}

impl Material {
    /// A matte, opaque, non-reflective material.
    pub fn matte() -> Self {
        Self::default()
    }

    /// Set the specular exponent. Negative values disable the highlight.
    pub fn with_specular(mut self, exponent: f32) -> Self {
        self.specular = (exponent >= 0.0).then_some(exponent);
        self
    }

    /// Set the reflective coefficient, clamped to `[0, 1]`.
    pub fn with_reflective(mut self, reflective: f32) -> Self {
        self.reflective = reflective.clamp(0.0, 1.0);
        self
    }

    /// Make the material transparent with the given index of refraction.
    pub fn with_refraction(mut self, refractive_index: f32) -> Self {
        self.transparent = true;
        self.refractive_index = Some(refractive_index);
        self
    }

    /// The index of refraction if this material transmits light.
    pub fn refractive_index_if_transparent(&self) -> Option<f32> {
        if self.transparent {
            self.refractive_index
        } else {
            None
        }
    }

    /// Map a negative specular exponent (the "off" sentinel used by scene
    /// files) to `None`.
    pub(crate) fn normalized(mut self) -> Self {
        if matches!(self.specular, Some(s) if s < 0.0) {
            self.specular = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matte_defaults() {
        let material = Material::matte();
        assert_eq!(material.specular, None);
        assert_eq!(material.reflective, 0.0);
        assert_eq!(material.refractive_index_if_transparent(), None);
    }

    #[test]
    fn test_negative_specular_disables_highlight() {
        assert_eq!(Material::matte().with_specular(-1.0).specular, None);
        assert_eq!(Material::matte().with_specular(0.0).specular, Some(0.0));
        assert_eq!(Material::matte().with_specular(500.0).specular, Some(500.0));
    }

    #[test]
    fn test_reflective_is_clamped() {
        assert_eq!(Material::matte().with_reflective(1.5).reflective, 1.0);
        assert_eq!(Material::matte().with_reflective(-0.5).reflective, 0.0);
    }

    #[test]
    fn test_refraction_requires_transparency() {
        let opaque = Material {
            refractive_index: Some(1.5),
            ..Material::matte()
        };
        assert_eq!(opaque.refractive_index_if_transparent(), None);

        let glass = Material::matte().with_refraction(1.5);
        assert_eq!(glass.refractive_index_if_transparent(), Some(1.5));
    }

    #[test]
    fn test_normalized_specular_sentinel() {
        let material: Material = serde_json::from_str(r#"{ "specular": -1 }"#).unwrap();
        assert_eq!(material.specular, Some(-1.0));
        assert_eq!(material.normalized().specular, None);
    }
}
