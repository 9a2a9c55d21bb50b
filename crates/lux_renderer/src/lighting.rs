//! Local illumination: ambient, diffuse and specular terms with hard
//! shadows.

use lux_core::{Light, Scene};
use lux_math::{Interval, Ray, Vec3, VectorExt};

use crate::intersection::closest_intersection;
use crate::tracer::SURFACE_EPSILON;

/// Total light intensity arriving at `point`.
///
/// - `normal`: surface normal at the point
/// - `view`: vector from the point back toward the viewer
/// - `specular`: Phong exponent, or `None` for no highlight
///
/// Every non-ambient light is shadow-tested first; any occluder between
/// the point and the light removes that light's diffuse and specular terms
/// entirely. The result is not capped; colors clamp when scaled.
pub fn compute_lighting(
    scene: &Scene,
    point: Vec3,
    normal: Vec3,
    view: Vec3,
    specular: Option<f32>,
) -> f32 {
    let mut intensity = 0.0;

    for light in scene.lights() {
        let Some((light_dir, t_max)) = light.vector_from(point) else {
            // Ambient
            intensity += light.intensity();
            continue;
        };

        if light_dir.length_squared() <= f32::EPSILON {
            continue;
        }

        let shadow_ray = Ray::new(point, light_dir);
        let shadow_t = Interval::new(SURFACE_EPSILON, t_max);
        if closest_intersection(scene, &shadow_ray, shadow_t).is_some() {
            continue;
        }

        intensity += direct_contribution(light, normal, light_dir, view, specular);
    }

    intensity
}

/// Diffuse plus specular contribution of one unoccluded light.
fn direct_contribution(
    light: &Light,
    normal: Vec3,
    light_dir: Vec3,
    view: Vec3,
    specular: Option<f32>,
) -> f32 {
    let n_dot_l = normal.dot(light_dir);
    if n_dot_l <= 0.0 {
        // Light is behind the surface
        return 0.0;
    }

    let mut intensity = light.intensity() * normal.cos_angle(light_dir);

    if let Some(exponent) = specular {
        let reflected = light_dir.reflect_about(normal);
        let r_dot_v = reflected.dot(view);
        if r_dot_v > 0.0 {
            intensity += light.intensity() * reflected.cos_angle(view).powf(exponent);
        }
    }

    intensity
}
