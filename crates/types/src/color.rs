//! HSLA colors for locked cells and pieces.

use serde::{Deserialize, Serialize};

/// Hue in degrees, saturation/lightness/alpha in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
    pub alpha: u8,
}

/// Fill of the sentinel floor row.
pub const BLACK: Color = Color::hsla(0, 0, 0, 100);

pub const WHITE: Color = Color::hsla(0, 0, 100, 100);

impl Color {
    pub const fn hsla(hue: u16, saturation: u8, lightness: u8, alpha: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Convert to 8-bit RGB, ignoring alpha.
    ///
    /// ```
    /// use tui_arcade_types::{Color, BLACK, WHITE};
    ///
    /// assert_eq!(BLACK.to_rgb(), (0, 0, 0));
    /// assert_eq!(WHITE.to_rgb(), (255, 255, 255));
    /// assert_eq!(Color::hsla(0, 100, 50, 100).to_rgb(), (255, 0, 0));
    /// ```
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let h = f32::from(self.hue % 360) / 60.0;
        let s = f32::from(self.saturation.min(100)) / 100.0;
        let l = f32::from(self.lightness.min(100)) / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(r), channel(g), channel(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(Color::hsla(120, 100, 50, 100).to_rgb(), (0, 255, 0));
        assert_eq!(Color::hsla(240, 100, 50, 100).to_rgb(), (0, 0, 255));
        assert_eq!(Color::hsla(180, 100, 50, 100).to_rgb(), (0, 255, 255));
    }
}
