//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or filled with a
//! color. Below the last row sits one extra sentinel row (y = height) that is
//! permanently filled, so "touching the floor" is the same test as "touching a
//! locked cell".
//!
//! Uses a flat array for better cache locality.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height
//! (top to bottom). Rows above the board (y < 0) are open air: never filled, never
//! illegal.
//!
//! Boards are values. `lock` and `clear` return new boards and leave the
//! receiver untouched.

use crate::types::{Cell, Color, Path, Point, BLACK, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board - flat row-major storage of `height + 1` rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x), sentinel row last
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given size
    pub fn empty(width: usize, height: usize) -> Self {
        let mut cells = vec![None; width * (height + 1)];
        for cell in &mut cells[width * height..] {
            *cell = Some(BLACK);
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Calculate flat index from a point, including the sentinel row
    #[inline(always)]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y > self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get height of the board (sentinel row excluded)
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Color of the cell at `p`, or `None` if empty or off the board
    ///
    /// Points on the sentinel row report the floor color.
    pub fn filled(&self, p: Point) -> Option<Color> {
        self.index(p).and_then(|idx| self.cells[idx])
    }

    pub fn is_filled(&self, p: Point) -> bool {
        self.filled(p).is_some()
    }

    /// Every point is inside the board columns and unfilled
    ///
    /// Rows are not bounds-checked here: vertical limits are the floor's job.
    pub fn is_legal(&self, path: &Path) -> bool {
        path.iter()
            .all(|&p| p.x >= 0 && (p.x as usize) < self.width && !self.is_filled(p))
    }

    /// Any point overlaps a filled cell, the floor included
    pub fn touches(&self, path: &Path) -> bool {
        path.iter().any(|&p| self.is_filled(p))
    }

    /// Return a copy with every cell of `path` filled with `color`
    ///
    /// Cells off the board are ignored, and so is the sentinel row.
    pub fn lock(&self, path: &Path, color: Color) -> Board {
        let mut next = self.clone();
        for &p in path {
            if p.y >= self.height as i32 {
                continue;
            }
            if let Some(idx) = self.index(p) {
                next.cells[idx] = Some(color);
            }
        }
        next
    }

    /// Check if a visible row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove all full rows and return how many went, plus the new board
    ///
    /// Rows above a removed row shift down; fresh empty rows enter at the top.
    /// Uses a two-pointer pass over the flat array.
    pub fn clear(&self) -> (usize, Board) {
        let mut next = self.clone();
        let width = self.width;
        let mut write_y = self.height;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                // This row survives, move it down to the write position
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    next.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        for cell in &mut next.cells[..write_y * width] {
            *cell = None;
        }

        (cleared, next)
    }

    /// Offset `(0, dy)` that drops `path` straight down to where it would rest
    ///
    /// `dy` is one less than the first downward step that touches something.
    /// A path with no cell in a board column cannot land and projects to zero.
    pub fn project(&self, path: &Path) -> Point {
        let in_columns = path
            .iter()
            .filter(|p| p.x >= 0 && (p.x as usize) < self.width);
        let Some(min_y) = in_columns.map(|p| p.y).min() else {
            return Point::ZERO;
        };

        // The sentinel row stops any in-column cell within this many steps.
        let limit = (self.height as i32 + 1 - min_y).max(1);
        for step in 1..=limit {
            if self.touches(&path.translate(Point::new(0, step))) {
                return Point::new(0, step - 1);
            }
        }
        Point::ZERO
    }

    /// Lowest filled row index per column (`height` for an empty column)
    pub fn floor(&self) -> Vec<usize> {
        (0..self.width)
            .map(|x| {
                (0..=self.height)
                    .find(|&y| self.cells[y * self.width + x].is_some())
                    .unwrap_or(self.height)
            })
            .collect()
    }

    /// A visible row, `None` past the last one
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Visible rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    /// Get a reference to the internal cells array, sentinel row included
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
