//! Viewport geometry and the palette shared by the game views.

use crate::fb::{CellStyle, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorY {
    #[default]
    Center,
    Top,
}

/// Top-left corner of a `w x h` frame placed in the viewport
pub fn place(viewport: Viewport, anchor_y: AnchorY, w: u16, h: u16) -> (u16, u16) {
    let x = viewport.width.saturating_sub(w) / 2;
    let y = match anchor_y {
        AnchorY::Center => viewport.height.saturating_sub(h) / 2,
        AnchorY::Top => 0,
    };
    (x, y)
}

pub(crate) const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
pub(crate) const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

pub(crate) fn border_style() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG)
}

pub(crate) fn grid_dot_style() -> CellStyle {
    CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim()
}

pub(crate) fn label_style() -> CellStyle {
    CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold()
}

pub(crate) fn value_style() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG)
}

pub(crate) fn overlay_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold()
}
