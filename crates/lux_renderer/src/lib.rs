//! Lux Renderer - recursive ray tracing on the CPU.
//!
//! Shades spheres and checkered planes with ambient, point and directional
//! lights, hard shadows, mirror reflection and Snell's-law refraction.
//!
//! The per-pixel entry point is [`render_pixel`]; [`render`] drives it over
//! a whole frame in parallel.

mod intersection;
mod lighting;
mod renderer;
mod tracer;
mod viewport;

pub use intersection::{closest_intersection, Hit};
pub use lighting::compute_lighting;
pub use renderer::{render, ImageBuffer, RenderConfig};
pub use tracer::{render_pixel, trace_ray, SURFACE_EPSILON, VACUUM_IOR};
pub use viewport::Viewport;

/// Re-export the scene and math types the renderer works with
pub use lux_core::{Color, Light, Material, Plane, Primitive, PrimitiveKind, Scene, Sphere};
pub use lux_math::{Interval, Ray, Vec3};
