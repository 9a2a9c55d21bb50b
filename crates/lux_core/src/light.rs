//! Scene lights.

use lux_math::Vec3;
use serde::{Deserialize, Serialize};

/// A light source. Intensities are unitless scalars summed per sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Light {
    /// Uniform light reaching every surface regardless of occlusion
    Ambient { intensity: f32 },

    /// Light emitted from a single position
    Point { intensity: f32, position: Vec3 },

    /// Light arriving from a fixed direction, infinitely far away
    Directional { intensity: f32, direction: Vec3 },
}

impl Light {
    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }

    /// The (unnormalized) vector from `point` toward the light, together
    /// with the largest ray parameter at which an occluder can cast a
    /// shadow along it.
    ///
    /// A point light sits exactly at `t = 1` along its vector. Ambient
    /// light has no direction and returns `None`.
    pub fn vector_from(&self, point: Vec3) -> Option<(Vec3, f32)> {
        match *self {
            Light::Ambient { .. } => None,
            Light::Point { position, .. } => Some((position - point, 1.0)),
            Light::Directional { direction, .. } => Some((direction, f32::INFINITY)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity() {
        assert_eq!(Light::Ambient { intensity: 0.2 }.intensity(), 0.2);
        let point = Light::Point {
            intensity: 0.6,
            position: Vec3::ZERO,
        };
        assert_eq!(point.intensity(), 0.6);
    }

    #[test]
    fn test_vector_from() {
        let p = Vec3::new(1.0, 0.0, 0.0);

        assert_eq!(Light::Ambient { intensity: 1.0 }.vector_from(p), None);

        let point = Light::Point {
            intensity: 1.0,
            position: Vec3::new(2.0, 1.0, 0.0),
        };
        assert_eq!(point.vector_from(p), Some((Vec3::new(1.0, 1.0, 0.0), 1.0)));

        let directional = Light::Directional {
            intensity: 1.0,
            direction: Vec3::new(1.0, 4.0, 4.0),
        };
        assert_eq!(
            directional.vector_from(p),
            Some((Vec3::new(1.0, 4.0, 4.0), f32::INFINITY))
        );
    }

    #[test]
    fn test_serde_tagged() {
        let light: Light =
            serde_json::from_str(r#"{ "type": "point", "intensity": 0.6, "position": [2, 1, 0] }"#)
                .unwrap();
        assert_eq!(
            light,
            Light::Point {
                intensity: 0.6,
                position: Vec3::new(2.0, 1.0, 0.0)
            }
        );

        let light: Light =
            serde_json::from_str(r#"{ "type": "ambient", "intensity": 0.2 }"#).unwrap();
        assert_eq!(light, Light::Ambient { intensity: 0.2 });
    }
}
