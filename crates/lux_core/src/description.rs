//! JSON scene description files.
//!
//! A description mirrors [`Scene`] field for field. Loading validates the
//! geometry and material ranges the tracer relies on, so every scene that
//! comes out of [`load_scene`] is safe to render.
//!
//! ```json
//! {
//!   "camera_origin": [0, 0, 0],
//!   "background": [255, 255, 255],
//!   "spheres": [
//!     { "center": [0, -1, 3], "radius": 1, "color": [255, 0, 0],
//!       "specular": 500, "reflective": 0.2 }
//!   ],
//!   "planes": [
//!     { "point": [0, -1, 0], "normal": [0, 1, 0],
//!       "color1": [255, 255, 255], "color2": [0, 0, 0] }
//!   ],
//!   "lights": [
//!     { "type": "ambient", "intensity": 0.2 },
//!     { "type": "point", "intensity": 0.6, "position": [2, 1, 0] }
//!   ]
//! }
//! ```

use std::path::Path;

use lux_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, Light, Material, Plane, Scene, Sphere};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {kind} #{index}: {message}")]
    Invalid {
        kind: &'static str,
        index: usize,
        message: String,
    },
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

fn default_background() -> Color {
    Color::WHITE
}

/// Serialized form of a [`Scene`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera_origin: Vec3,

    #[serde(default = "default_background")]
    pub background: Color,

    #[serde(default)]
    pub spheres: Vec<SphereDescription>,

    #[serde(default)]
    pub planes: Vec<PlaneDescription>,

    #[serde(default)]
    pub lights: Vec<Light>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: Vec3,
    pub radius: f32,
    pub color: Color,
    #[serde(flatten)]
    pub material: Material,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneDescription {
    pub point: Vec3,
    pub normal: Vec3,
    pub color1: Color,
    pub color2: Color,
    #[serde(flatten)]
    pub material: Material,
}

impl SceneDescription {
    /// Parse a description from a JSON string.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check value ranges the tracer assumes.
    pub fn validate(&self) -> SceneResult<()> {
        for (index, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
                return Err(invalid(
                    "sphere",
                    index,
                    format!("radius {} must be positive", sphere.radius),
                ));
            }
            validate_material("sphere", index, &sphere.material)?;
        }

        for (index, plane) in self.planes.iter().enumerate() {
            if plane.normal.length_squared() <= f32::EPSILON {
                return Err(invalid("plane", index, "normal must be non-zero".to_string()));
            }
            validate_material("plane", index, &plane.material)?;
        }

        for (index, light) in self.lights.iter().enumerate() {
            let intensity = light.intensity();
            if !(intensity.is_finite() && intensity >= 0.0) {
                return Err(invalid(
                    "light",
                    index,
                    format!("intensity {} must be non-negative", intensity),
                ));
            }
        }

        Ok(())
    }

    /// Validate and build the runtime scene.
    pub fn into_scene(self) -> SceneResult<Scene> {
        self.validate()?;

        if self.lights.is_empty() {
            log::warn!("Scene has no lights; every surface will render black");
        }

        let mut scene = Scene::new(self.camera_origin, self.background);
        for sphere in self.spheres {
            scene = scene.with_sphere(
                Sphere::new(sphere.center, sphere.radius, sphere.color)
                    .with_material(sphere.material.normalized()),
            );
        }
        for plane in self.planes {
            scene = scene.with_plane(
                Plane::new(plane.point, plane.normal, plane.color1, plane.color2)
                    .with_material(plane.material.normalized()),
            );
        }
        for light in self.lights {
            scene = scene.with_light(light);
        }

        log::debug!(
            "Built scene with {} primitives and {} lights",
            scene.primitive_count(),
            scene.lights().len()
        );
        Ok(scene)
    }
}

impl From<&Scene> for SceneDescription {
    fn from(scene: &Scene) -> Self {
        Self {
            camera_origin: scene.camera_origin(),
            background: scene.background(),
            spheres: scene
                .spheres()
                .iter()
                .map(|s| SphereDescription {
                    center: s.center,
                    radius: s.radius,
                    color: s.color,
                    material: s.material,
                })
                .collect(),
            planes: scene
                .planes()
                .iter()
                .map(|p| PlaneDescription {
                    point: p.point,
                    normal: p.normal(),
                    color1: p.color1,
                    color2: p.color2,
                    material: p.material,
                })
                .collect(),
            lights: scene.lights().to_vec(),
        }
    }
}

fn invalid(kind: &'static str, index: usize, message: String) -> SceneError {
    SceneError::Invalid { kind, index, message }
}

fn validate_material(kind: &'static str, index: usize, material: &Material) -> SceneResult<()> {
    if !(0.0..=1.0).contains(&material.reflective) {
        return Err(invalid(
            kind,
            index,
            format!("reflective {} must lie in [0, 1]", material.reflective),
        ));
    }
    if let Some(ior) = material.refractive_index {
        if !(ior.is_finite() && ior > 0.0) {
            return Err(invalid(kind, index, format!("refractive index {} must be positive", ior)));
        }
    }
    if material.transparent && material.refractive_index.is_none() {
        log::warn!("Transparent {} #{} has no refractive index; treating as opaque", kind, index);
    }
    Ok(())
}

/// Load a scene description file and build the scene.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let scene = SceneDescription::from_json_str(&json)?.into_scene()?;

    log::info!(
        "Loaded {} spheres, {} planes and {} lights from {}",
        scene.spheres().len(),
        scene.planes().len(),
        scene.lights().len(),
        path.display()
    );
    Ok(scene)
}
