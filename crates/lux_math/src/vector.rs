//! Shading helpers on top of `glam::Vec3`.

use crate::Vec3;

pub trait VectorExt {
    /// Mirror `self` about the normal `n`: `n * 2 (n . v) - v`.
    ///
    /// Both vectors point away from the surface; `n` is expected to be
    /// unit length.
    fn reflect_about(&self, n: Vec3) -> Vec3;

    /// Cosine of the angle between two vectors, or 0.0 if either has zero
    /// length.
    fn cos_angle(&self, other: Vec3) -> f32;
}

impl VectorExt for Vec3 {
    #[inline]
    fn reflect_about(&self, n: Vec3) -> Vec3 {
        n * (2.0 * n.dot(*self)) - *self
    }

    #[inline]
    fn cos_angle(&self, other: Vec3) -> f32 {
        let lengths = self.length() * other.length();
        if lengths <= f32::EPSILON {
            return 0.0;
        }
        self.dot(other) / lengths
    }
}
