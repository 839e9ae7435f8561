//! TetrisView: maps a [`TetrisSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{piece_color, TetrisSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{
    border_style, grid_dot_style, label_style, overlay_style, place, value_style, AnchorY,
    Viewport, PLAYFIELD_BG,
};
use crate::types::{Point, SCORE_MULTIPLIER};

/// How many upcoming pieces the side panel lists
const PREVIEW_LEN: usize = 5;

/// A lightweight terminal renderer for the Tetris game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetrisView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for TetrisView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl TetrisView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &TetrisSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_px_w = clamp_u16(snap.width).saturating_mul(self.cell_w);
        let board_px_h = clamp_u16(snap.height).saturating_mul(self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);
        let (start_x, start_y) = place(viewport, self.anchor_y, frame_w, frame_h);
        let origin = (start_x + 1, start_y + 1);

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG);
        fb.fill_rect(origin.0, origin.1, board_px_w, board_px_h, ' ', bg);
        fb.draw_border(start_x, start_y, frame_w, frame_h, border_style());

        // Locked cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let at = Point::new(x as i32, y as i32);
                match cell {
                    Some(color) => {
                        let style = CellStyle::new(Rgb::from(*color), PLAYFIELD_BG);
                        self.fill_cell(fb, origin, snap, at, '█', style);
                    }
                    None => self.fill_cell(fb, origin, snap, at, '·', grid_dot_style()),
                }
            }
        }

        if !snap.is_over() {
            let active = Rgb::from(piece_color(snap.active.kind));

            let ghost = CellStyle::new(active.shade(55), PLAYFIELD_BG).dim();
            for &p in &snap.ghost {
                self.fill_cell(fb, origin, snap, p, '░', ghost);
            }

            let style = CellStyle::new(active, PLAYFIELD_BG).bold();
            for &p in &snap.active.cells {
                self.fill_cell(fb, origin, snap, p, '█', style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x.saturating_add(frame_w), start_y);

        let mid_y = start_y.saturating_add(frame_h / 2);
        if snap.is_paused() {
            fb.put_centered(start_x, frame_w, mid_y, "PAUSED", overlay_style());
        } else if snap.is_over() {
            fb.put_centered(start_x, frame_w, mid_y, "GAME OVER", overlay_style());
            fb.put_centered(start_x, frame_w, mid_y + 1, "SPACE: again", value_style());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &TetrisSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Paint one board cell; cells above or beside the board are skipped
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        snap: &TetrisSnapshot,
        p: Point,
        ch: char,
        style: CellStyle,
    ) {
        if p.x < 0 || p.y < 0 || p.x as usize >= snap.width || p.y as usize >= snap.height {
            return;
        }
        let col = u16::try_from(p.x).unwrap_or(u16::MAX);
        let row = u16::try_from(p.y).unwrap_or(u16::MAX);
        let px = origin.0.saturating_add(col.saturating_mul(self.cell_w));
        let py = origin.1.saturating_add(row.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &TetrisSnapshot,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = label_style();
        let value = value_style();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_number(panel_x, y + 1, snap.score.saturating_mul(SCORE_MULTIPLIER), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_number(panel_x, y + 1, snap.lines, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        for kind in snap.preview.iter().take(PREVIEW_LEN) {
            let style = CellStyle::new(Rgb::from(piece_color(*kind)), Rgb::new(0, 0, 0));
            fb.put_str(panel_x, y, kind.as_str(), style.bold());
            y = y.saturating_add(1);
        }
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, TetrisGame};
    use crate::types::Direction;

    fn snapshot() -> TetrisSnapshot {
        TetrisGame::new(10, 20, Deck::seeded(12345)).snapshot()
    }

    fn text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn frame_fits_board() {
        let fb = TetrisView::default()
            .with_anchor_y(AnchorY::Top)
            .render(&snapshot(), Viewport::new(22, 22));
        assert_eq!(fb.row_text(0), format!("┌{}┐", "─".repeat(20)));
        assert_eq!(fb.row_text(21), format!("└{}┘", "─".repeat(20)));
    }

    #[test]
    fn active_piece_and_ghost_are_drawn() {
        let fb = TetrisView::default().render(&snapshot(), Viewport::new(40, 24));
        let text = text(&fb);
        assert!(text.contains('█'));
        assert!(text.contains('░'));
    }

    #[test]
    fn side_panel_shows_score_and_preview() {
        let fb = TetrisView::default().render(&snapshot(), Viewport::new(60, 24));
        let text = text(&fb);
        assert!(text.contains("SCORE"));
        assert!(text.contains("LINES"));
        assert!(text.contains("NEXT"));
    }

    #[test]
    fn paused_overlay() {
        let snap = TetrisGame::new(10, 20, Deck::seeded(1)).toggle().snapshot();
        let fb = TetrisView::default().render(&snap, Viewport::new(40, 24));
        assert!(text(&fb).contains("PAUSED"));
    }

    #[test]
    fn game_over_overlay() {
        let mut game = TetrisGame::new(5, 4, Deck::seeded(3));
        for _ in 0..20 {
            game = game.hard_drop();
        }
        assert!(game.is_over());
        let fb = TetrisView::default().render(&game.snapshot(), Viewport::new(40, 12));
        assert!(text(&fb).contains("GAME OVER"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = TetrisGame::new(10, 20, Deck::seeded(1))
            .move_piece(Direction::Left)
            .snapshot();
        let fb = TetrisView::default().render(&snap, Viewport::new(3, 2));
        assert_eq!(fb.cells().len(), 6);
    }

    #[test]
    fn board_wider_than_the_screen_does_not_panic() {
        let snap = TetrisGame::new(40_000, 4, Deck::seeded(1)).snapshot();
        let fb = TetrisView::default().render(&snap, Viewport::new(80, 24));
        assert_eq!(fb.cells().len(), 80 * 24);

        let tall = TetrisView::new(3, 2).render(
            &TetrisGame::new(5, 70_000, Deck::seeded(2)).snapshot(),
            Viewport::new(40, 20),
        );
        assert_eq!(tall.cells().len(), 40 * 20);
    }
}
