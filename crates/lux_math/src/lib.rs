// Re-export glam for convenience
pub use glam::*;

// Lux math types
mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::VectorExt;

/// Positions, directions and normals all share one vector type.
pub type Vector3 = Vec3;
