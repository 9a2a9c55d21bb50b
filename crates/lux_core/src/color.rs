//! 8-bit RGB color with saturating arithmetic.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// An RGB color with channels in `[0, 255]`.
///
/// Serialized as an `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `k`, rounding to the nearest channel value
    /// and clamping to `[0, 255]`.
    ///
    /// Callers pass non-negative factors; a negative or NaN `k` yields black.
    pub fn scale_intensity(self, k: f32) -> Color {
        Color::new(
            scale_channel(self.r, k),
            scale_channel(self.g, k),
            scale_channel(self.b, k),
        )
    }

    /// Convert to the 4-bytes-per-pixel layout used by framebuffers.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

#[inline]
fn scale_channel(channel: u8, k: f32) -> u8 {
    // `as` saturates and maps NaN to 0
    (channel as f32 * k).round().clamp(0.0, 255.0) as u8
}

impl Add for Color {
    type Output = Color;

    /// Channel-wise sum clamped to 255.
    fn add(self, rhs: Color) -> Color {
        Color::new(
            self.r.saturating_add(rhs.r),
            self.g.saturating_add(rhs.g),
            self.b.saturating_add(rhs.b),
        )
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_saturates() {
        let sum = Color::WHITE + Color::new(10, 10, 10);
        assert_eq!(sum, Color::WHITE);

        let sum = Color::new(200, 100, 0) + Color::new(100, 100, 7);
        assert_eq!(sum, Color::new(255, 200, 7));
    }

    #[test]
    fn test_add_assign() {
        let mut color = Color::new(1, 2, 3);
        color += Color::new(1, 1, 1);
        assert_eq!(color, Color::new(2, 3, 4));
    }

    #[test]
    fn test_scale_by_zero_is_black() {
        assert_eq!(Color::new(10, 0, 0).scale_intensity(0.0), Color::BLACK);
    }

    #[test]
    fn test_scale_rounds_to_nearest() {
        // 255 * 0.2 = 51.0, 10 * 0.25 = 2.5 -> 3, 3 * 0.5 = 1.5 -> 2
        assert_eq!(Color::new(255, 10, 3).scale_intensity(0.2).r, 51);
        assert_eq!(Color::new(255, 10, 3).scale_intensity(0.25).g, 3);
        assert_eq!(Color::new(255, 10, 3).scale_intensity(0.5).b, 2);
    }

    #[test]
    fn test_scale_clamps_high() {
        assert_eq!(
            Color::new(200, 100, 1).scale_intensity(3.0),
            Color::new(255, 255, 3)
        );
        assert_eq!(
            Color::new(1, 1, 1).scale_intensity(f32::INFINITY),
            Color::WHITE
        );
    }

    #[test]
    fn test_scale_degenerate_factors() {
        assert_eq!(Color::WHITE.scale_intensity(-1.0), Color::BLACK);
        assert_eq!(Color::WHITE.scale_intensity(f32::NAN), Color::BLACK);
    }

    #[test]
    fn test_rgba() {
        assert_eq!(Color::new(1, 2, 3).to_rgba(), [1, 2, 3, 255]);
    }

    #[test]
    fn test_serde_as_array() {
        let color: Color = serde_json::from_str("[12, 34, 56]").unwrap();
        assert_eq!(color, Color::new(12, 34, 56));
        assert_eq!(serde_json::to_string(&color).unwrap(), "[12,34,56]");
    }
}
