//! Nearest-hit search across every primitive in a scene.

use lux_core::{Primitive, PrimitiveKind, Scene};
use lux_math::{Interval, Ray};

/// The nearest primitive crossed by a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// The primitive that was hit
    pub object: &'a dyn Primitive,
    /// Ray parameter of the hit
    pub t: f32,
    /// Kind of the primitive, for callers that branch on it
    pub kind: PrimitiveKind,
}

/// Find the primitive with the smallest root in `ray_t`.
///
/// Spheres are scanned before planes, each in declaration order, and a
/// later root must be strictly smaller to win, so the first primitive
/// scanned wins ties. Returns `None` when nothing is hit.
pub fn closest_intersection<'a>(scene: &'a Scene, ray: &Ray, ray_t: Interval) -> Option<Hit<'a>> {
    if ray_t.is_empty() {
        return None;
    }

    let mut closest: Option<Hit<'a>> = None;
    let mut closest_so_far = ray_t.max;

    for object in scene.primitives() {
        for t in object.intersect(ray) {
            if ray_t.with_max(closest_so_far).admits(t) {
                closest_so_far = t;
                closest = Some(Hit {
                    object,
                    t,
                    kind: object.kind(),
                });
            }
        }
    }

    closest
}
