//! Whole-frame rendering.
//!
//! Maps every pixel to a camera ray, traces it with [`render_pixel`] and
//! collects the results into an [`ImageBuffer`]. Rows are rendered in
//! parallel with rayon; the scene is only ever borrowed immutably.

use std::time::Instant;

use lux_core::{Color, Scene};
use rayon::prelude::*;
use serde::Deserialize;

use crate::{render_pixel, Viewport};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Maximum reflection/refraction depth
    pub max_depth: u32,
    /// Nearest ray parameter accepted for camera rays
    pub t_min: f32,
    /// Farthest ray parameter accepted for camera rays
    pub t_max: f32,
    /// View plane the pixels are mapped onto
    pub viewport: Viewport,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            max_depth: 3,
            // Camera rays start at the view plane
            t_min: 1.0,
            t_max: f32::INFINITY,
            viewport: Viewport::default(),
        }
    }
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color.to_rgba());
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
pub fn render(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    let (width, height) = (config.width, config.height);
    let origin = scene.camera_origin();

    let mut image = ImageBuffer::new(width, height);
    if width == 0 {
        return image;
    }

    image
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let direction = config.viewport.pixel_direction(x as u32, y as u32, width, height);
                *pixel = render_pixel(
                    scene,
                    origin,
                    direction,
                    config.t_min,
                    config.t_max,
                    config.max_depth,
                );
            }
        });

    log::debug!(
        "Rendered {}x{} ({} primitives, {} lights, depth {}) in {:?}",
        width,
        height,
        scene.primitive_count(),
        scene.lights().len(),
        config.max_depth,
        start.elapsed()
    );

    image
}
