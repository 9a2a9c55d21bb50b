//! Lux Core - Scene model for the lux ray tracer.
//!
//! This crate provides:
//!
//! - **Surface types**: `Color`, `Material`, and the `Primitive` trait with
//!   its `Sphere` and `Plane` implementations
//! - **Lights**: ambient, point and directional `Light`s
//! - **Scenes**: the read-only `Scene` container and JSON scene files
//!
//! # Example
//!
//! ```ignore
//! use lux_core::load_scene;
//!
//! let scene = load_scene("scenes/demo.json")?;
//! println!("Loaded {} primitives", scene.primitive_count());
//! ```

pub mod color;
pub mod description;
pub mod light;
pub mod material;
pub mod plane;
pub mod primitive;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use color::Color;
pub use description::{load_scene, SceneDescription, SceneError, SceneResult};
pub use light::Light;
pub use material::Material;
pub use plane::Plane;
pub use primitive::{Primitive, PrimitiveKind, Roots, NO_ROOTS};
pub use scene::Scene;
pub use sphere::Sphere;
