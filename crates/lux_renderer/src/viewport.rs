//! Mapping from canvas pixels to camera-space ray directions.

use lux_math::Vec3;
use serde::Deserialize;

/// A rectangle of the view plane, `distance` in front of the camera.
///
/// Canvas pixels map linearly onto it: the canvas center lands on the
/// camera's forward axis, +x is right and +y is up.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub distance: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            distance: 1.0,
        }
    }
}

impl Viewport {
    /// Ray direction through canvas coordinates `(x, y)`, where the canvas
    /// origin is its center and y grows upward.
    pub fn canvas_to_viewport(
        &self,
        x: f32,
        y: f32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Vec3 {
        Vec3::new(
            x * self.width / canvas_width as f32,
            y * self.height / canvas_height as f32,
            self.distance,
        )
    }

    /// Ray direction through the center of image pixel `(px, py)`, where
    /// `(0, 0)` is the top-left pixel.
    pub fn pixel_direction(&self, px: u32, py: u32, canvas_width: u32, canvas_height: u32) -> Vec3 {
        let x = px as f32 + 0.5 - canvas_width as f32 / 2.0;
        let y = canvas_height as f32 / 2.0 - (py as f32 + 0.5);
        self.canvas_to_viewport(x, y, canvas_width, canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_center_looks_forward() {
        let viewport = Viewport::default();
        assert_eq!(viewport.canvas_to_viewport(0.0, 0.0, 600, 600), Vec3::Z);
    }

    #[test]
    fn test_canvas_corners() {
        let viewport = Viewport::default();

        let top_right = viewport.canvas_to_viewport(300.0, 300.0, 600, 600);
        assert_eq!(top_right, Vec3::new(0.5, 0.5, 1.0));

        let bottom_left = viewport.canvas_to_viewport(-300.0, -300.0, 600, 600);
        assert_eq!(bottom_left, Vec3::new(-0.5, -0.5, 1.0));
    }

    #[test]
    fn test_pixel_direction_flips_y() {
        let viewport = Viewport::default();

        let top_left = viewport.pixel_direction(0, 0, 4, 4);
        assert!(top_left.x < 0.0 && top_left.y > 0.0);

        let bottom_right = viewport.pixel_direction(3, 3, 4, 4);
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);

        // Symmetric about the center
        assert_eq!(top_left.x, -bottom_right.x);
        assert_eq!(top_left.y, -bottom_right.y);
    }
}
