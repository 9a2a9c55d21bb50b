//! Sphere primitive.

use lux_math::{Ray, Vec3};

use crate::{
    primitive::{Primitive, PrimitiveKind, Roots, NO_ROOTS},
    Color, Material,
};

/// A solid-colored sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub color: Color,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere with a matte material.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
            material: Material::matte(),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }
}

impl Primitive for Sphere {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Sphere
    }

    /// Solve `a t^2 + b t + c = 0` for the ray.
    ///
    /// The `+sqrt(disc)` root comes first, the `-sqrt(disc)` root second.
    fn intersect(&self, ray: &Ray) -> Roots {
        let co = ray.origin - self.center;

        let a = ray.direction.dot(ray.direction);
        if a <= f32::EPSILON {
            return NO_ROOTS;
        }
        let b = 2.0 * co.dot(ray.direction);
        let c = co.dot(co) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return NO_ROOTS;
        }

        let sqrtd = discriminant.sqrt();
        [(-b + sqrtd) / (2.0 * a), (-b - sqrtd) / (2.0 * a)]
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }

    fn color_at(&self, _point: Vec3) -> Color {
        self.color
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
