//! Scene container.
//!
//! A scene is assembled once, then shared read-only by every traced ray.
//! Nothing in the renderer takes `&mut Scene`, so a built scene can be
//! rendered from many threads at once.

use lux_math::Vec3;

use crate::{Color, Light, Material, Plane, Primitive, Sphere};

/// Spheres, planes and lights plus the background and camera origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    camera_origin: Vec3,
    background: Color,
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    lights: Vec<Light>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Color::WHITE)
    }
}

impl Scene {
    /// Create an empty scene.
    pub fn new(camera_origin: Vec3, background: Color) -> Self {
        Self {
            camera_origin,
            background,
            spheres: Vec::new(),
            planes: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn with_camera_origin(mut self, origin: Vec3) -> Self {
        self.camera_origin = origin;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    pub fn with_plane(mut self, plane: Plane) -> Self {
        self.planes.push(plane);
        self
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    pub fn camera_origin(&self) -> Vec3 {
        self.camera_origin
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Every primitive in search order: spheres first, then planes, each in
    /// the order they were added.
    pub fn primitives(&self) -> impl Iterator<Item = &dyn Primitive> + '_ {
        let spheres = self.spheres.iter().map(|s| s as &dyn Primitive);
        let planes = self.planes.iter().map(|p| p as &dyn Primitive);
        spheres.chain(planes)
    }

    /// Get the number of primitives.
    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.planes.len()
    }

    /// The reference scene: three shiny spheres, a small glass sphere and a
    /// checkered floor under ambient, point and directional light.
    pub fn demo() -> Self {
        Scene::new(Vec3::ZERO, Color::WHITE)
            .with_sphere(
                Sphere::new(Vec3::new(0.0, -1.0, 3.0), 1.0, Color::new(255, 0, 0))
                    .with_material(Material::matte().with_specular(500.0).with_reflective(0.2)),
            )
            .with_sphere(
                Sphere::new(Vec3::new(2.0, 0.0, 4.0), 1.0, Color::new(0, 0, 255))
                    .with_material(Material::matte().with_specular(500.0).with_reflective(0.3)),
            )
            .with_sphere(
                Sphere::new(Vec3::new(-2.0, 0.0, 4.0), 1.0, Color::new(0, 255, 0))
                    .with_material(Material::matte().with_specular(10.0).with_reflective(0.4)),
            )
            .with_sphere(
                Sphere::new(Vec3::new(0.0, 0.3, 1.8), 0.3, Color::new(230, 230, 255))
                    .with_material(
                        Material::matte()
                            .with_specular(800.0)
                            .with_reflective(0.1)
                            .with_refraction(1.5),
                    ),
            )
            .with_plane(
                Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, Color::WHITE, Color::BLACK)
                    .with_material(Material::matte().with_specular(1000.0).with_reflective(0.5)),
            )
            .with_light(Light::Ambient { intensity: 0.2 })
            .with_light(Light::Point {
                intensity: 0.6,
                position: Vec3::new(2.0, 1.0, 0.0),
            })
            .with_light(Light::Directional {
                intensity: 0.2,
                direction: Vec3::new(1.0, 4.0, 4.0),
            })
    }
}
