//! Infinite plane with a procedural checker pattern.

use lux_math::{Ray, Vec3};

use crate::{
    primitive::{Primitive, PrimitiveKind, Roots, NO_ROOTS},
    Color, Material,
};

/// Rays with `|normal . direction|` below this are treated as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane checkered in unit squares on the x/z axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    normal: Vec3,
    pub color1: Color,
    pub color2: Color,
    pub material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized; a zero normal stays zero
    /// and the plane is then never hit.
    pub fn new(point: Vec3, normal: Vec3, color1: Color, color2: Color) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            color1,
            color2,
            material: Material::matte(),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Primitive for Plane {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Plane
    }

    fn intersect(&self, ray: &Ray) -> Roots {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return NO_ROOTS;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if t < 0.0 {
            return NO_ROOTS;
        }
        [t, f32::INFINITY]
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    /// `color1` where `floor(x) + floor(z)` is even, `color2` where odd.
    ///
    /// Parity is taken in floating point so far-away hits cannot overflow.
    /// Non-finite coordinates fall on `color2`.
    fn color_at(&self, point: Vec3) -> Color {
        let cell = point.x.floor() + point.z.floor();
        if cell.rem_euclid(2.0) < 1.0 {
            self.color1
        } else {
            self.color2
        }
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
