//! SnakeView: maps a [`SnakeSnapshot`] into a terminal framebuffer.

use crate::core::SnakeSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{
    border_style, grid_dot_style, label_style, overlay_style, place, value_style, AnchorY,
    Viewport, PLAYFIELD_BG,
};
use crate::types::Point;

const BODY: Rgb = Rgb::new(100, 220, 120);
const APPLE: Rgb = Rgb::new(220, 60, 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeView {
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for SnakeView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl SnakeView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn render_into(&self, snap: &SnakeSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let arena = Arena::new(snap, self.cell_w);
        let inner_w = arena.columns().saturating_mul(arena.cell_w);
        let inner_h = arena.rows();
        let frame_w = inner_w.saturating_add(2);
        let frame_h = inner_h.saturating_add(2);
        let (start_x, start_y) = place(viewport, self.anchor_y, frame_w, frame_h);
        let origin = (start_x + 1, start_y + 1);

        fb.fill_rect(origin.0, origin.1, inner_w, inner_h, '·', grid_dot_style());
        fb.draw_border(start_x, start_y, frame_w, frame_h, border_style());

        let apple = CellStyle::new(APPLE, PLAYFIELD_BG).bold();
        self.fill_cell(fb, origin, &arena, snap.apple, '●', apple);

        let body = CellStyle::new(BODY.shade(70), PLAYFIELD_BG);
        for &segment in snap.snake.iter().skip(1) {
            self.fill_cell(fb, origin, &arena, segment, '█', body);
        }

        if let Some(&head) = snap.snake.first() {
            // Hint at the next cell once the head is halfway there.
            let (dx, dy) = snap.head_offset;
            if dx.abs() >= 0.5 || dy.abs() >= 0.5 {
                let ahead = head + Point::new(unit(dx), unit(dy));
                let hint = CellStyle::new(BODY.shade(40), PLAYFIELD_BG).dim();
                self.fill_cell(fb, origin, &arena, ahead, '░', hint);
            }
            let style = CellStyle::new(BODY, PLAYFIELD_BG).bold();
            self.fill_cell(fb, origin, &arena, head, '█', style);
        }

        let score_y = start_y.saturating_add(frame_h);
        fb.put_str(start_x, score_y, "LENGTH ", label_style());
        fb.put_number(start_x + 7, score_y, snap.score as u64, value_style());

        if snap.crashed {
            let mid_y = start_y.saturating_add(frame_h / 2);
            fb.put_centered(start_x, frame_w, mid_y, "CRASHED", overlay_style());
        }
    }

    pub fn render(&self, snap: &SnakeSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        arena: &Arena,
        p: Point,
        ch: char,
        style: CellStyle,
    ) {
        if let Some((col, row)) = arena.cell(p) {
            let px = origin.0.saturating_add(col.saturating_mul(arena.cell_w));
            let py = origin.1.saturating_add(row);
            fb.fill_rect(px, py, arena.cell_w, 1, ch, style);
        }
    }
}

fn unit(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Playable cells: `|x| < width` and `|y| < height`
struct Arena {
    half_w: i32,
    half_h: i32,
    /// Terminal columns per cell, after applying the model's scale
    cell_w: u16,
}

impl Arena {
    fn new(snap: &SnakeSnapshot, cell_w: u16) -> Self {
        let scaled = (f32::from(cell_w) * snap.scale).round();
        Self {
            half_w: snap.bounds.width.max(1),
            half_h: snap.bounds.height.max(1),
            cell_w: if scaled >= 1.0 { scaled as u16 } else { 1 },
        }
    }

    fn columns(&self) -> u16 {
        clamp_u16(2 * i64::from(self.half_w) - 1)
    }

    fn rows(&self) -> u16 {
        clamp_u16(2 * i64::from(self.half_h) - 1)
    }

    fn cell(&self, p: Point) -> Option<(u16, u16)> {
        if p.x.unsigned_abs() >= self.half_w.unsigned_abs()
            || p.y.unsigned_abs() >= self.half_h.unsigned_abs()
        {
            return None;
        }
        Some((
            clamp_u16(i64::from(p.x) + i64::from(self.half_w) - 1),
            clamp_u16(i64::from(p.y) + i64::from(self.half_h) - 1),
        ))
    }
}

fn clamp_u16(n: i64) -> u16 {
    u16::try_from(n.max(0)).unwrap_or(u16::MAX)
}
