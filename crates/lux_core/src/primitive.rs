//! Primitive trait for ray-object intersection and surface queries.

use std::fmt::Debug;

use lux_math::{Ray, Vec3};

use crate::{Color, Material};

/// Ray parameters at which a primitive is crossed.
///
/// Missing roots are `f32::INFINITY`, so a nearest-hit search can compare
/// every slot without special-casing misses.
pub type Roots = [f32; 2];

/// Roots reported by a ray that misses.
pub const NO_ROOTS: Roots = [f32::INFINITY, f32::INFINITY];

/// Which kind of primitive a hit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Sphere,
    Plane,
}

/// Trait for objects that can be placed in a scene.
pub trait Primitive: Debug + Send + Sync {
    fn kind(&self) -> PrimitiveKind;

    /// Intersect an infinite line `origin + t * direction` with the surface.
    ///
    /// Returns every candidate root; callers filter by their valid range.
    fn intersect(&self, ray: &Ray) -> Roots;

    /// Unit surface normal at a point on the surface.
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Base surface color at a point on the surface.
    fn color_at(&self, point: Vec3) -> Color;

    fn material(&self) -> &Material;
}
