//! Recursive Whitted-style tracer.
//!
//! Each call shades the nearest hit locally, then spends one level of the
//! depth budget on a mirror ray and, for transparent surfaces, on a
//! refracted ray. Contributions are blended in the order local, reflected,
//! refracted.

use lux_core::{Color, Scene};
use lux_math::{Interval, Ray, Vec3, VectorExt};

use crate::intersection::closest_intersection;
use crate::lighting::compute_lighting;

/// Lower ray bound for secondary rays, keeps them off their own surface.
pub const SURFACE_EPSILON: f32 = 0.001;

/// Refractive index of the medium surrounding every object.
pub const VACUUM_IOR: f32 = 1.0;

/// Color seen along `ray`.
///
/// - `ray_t`: valid parameter range for the primary hit; secondary rays
///   keep its upper bound and start at [`SURFACE_EPSILON`]
/// - `depth`: remaining reflection/refraction bounces
/// - `current_ior`: refractive index of the medium the ray travels in
///
/// Reflected and refracted light are both weighted by the surface's
/// reflective coefficient, so a reflective glass surface can return more
/// light than it receives.
pub fn trace_ray(scene: &Scene, ray: &Ray, ray_t: Interval, depth: u32, current_ior: f32) -> Color {
    let Some(hit) = closest_intersection(scene, ray, ray_t) else {
        return scene.background();
    };

    let object = hit.object;
    let material = object.material();
    let point = ray.at(hit.t);
    let normal = object.normal_at(point);
    let view = -ray.direction;

    let lighting = compute_lighting(scene, point, normal, view, material.specular);
    let local_color = object.color_at(point).scale_intensity(lighting);

    let r = material.reflective;
    if r <= 0.0 || depth == 0 {
        return local_color;
    }

    let secondary_t = Interval::new(SURFACE_EPSILON, ray_t.max);

    let reflected_ray = Ray::new(point, view.reflect_about(normal));
    let reflected_color = trace_ray(scene, &reflected_ray, secondary_t, depth - 1, current_ior);

    let mut color = local_color.scale_intensity(1.0 - r) + reflected_color.scale_intensity(r);

    if let Some(material_ior) = material.refractive_index_if_transparent() {
        let refracted_color = match refract(ray.direction, normal, current_ior, material_ior) {
            Some(refraction) => {
                let refracted_ray = Ray::new(point, refraction.direction);
                trace_ray(scene, &refracted_ray, secondary_t, depth - 1, refraction.ior)
            }
            // Total internal reflection
            None => Color::BLACK,
        };
        color += refracted_color.scale_intensity(r);
    }

    color
}

/// Color for one camera ray. The ray starts in vacuum.
pub fn render_pixel(
    scene: &Scene,
    origin: Vec3,
    direction: Vec3,
    t_min: f32,
    t_max: f32,
    max_depth: u32,
) -> Color {
    let ray = Ray::new(origin, direction);
    trace_ray(scene, &ray, Interval::new(t_min, t_max), max_depth, VACUUM_IOR)
}

/// A transmitted ray leaving a refractive boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Refraction {
    /// Unit direction of the transmitted ray
    pub direction: Vec3,
    /// Refractive index of the medium it enters
    pub ior: f32,
}

/// Bend `direction` across a boundary with outward `normal` using Snell's
/// law.
///
/// A ray travelling along the normal is leaving the object and passes into
/// vacuum; otherwise it passes from `current_ior` into `material_ior`.
/// Returns `None` under total internal reflection.
pub(crate) fn refract(
    direction: Vec3,
    normal: Vec3,
    current_ior: f32,
    material_ior: f32,
) -> Option<Refraction> {
    let d = direction.normalize_or_zero();

    let (n, n1, n2) = if normal.dot(d) > 0.0 {
        (-normal, material_ior, VACUUM_IOR)
    } else {
        (normal, current_ior, material_ior)
    };
    if n2 <= 0.0 {
        return None;
    }

    let eta = n1 / n2;
    let cos_i = -n.dot(d);
    let sin2_t = eta * eta * (1.0 - cos_i * cos_i);
    if sin2_t > 1.0 {
        return None;
    }

    let cos_t = (1.0 - sin2_t).sqrt();
    let transmitted = d * eta + n * (eta * cos_i - cos_t);

    Some(Refraction {
        direction: transmitted.normalize_or_zero(),
        ior: n2,
    })
}
