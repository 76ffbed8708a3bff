//! Cell grid drawing surface.
//!
//! [`CellGrid`] is a `width × height` row-major grid of [`Cell`]s. The
//! renderer keeps two of them (current frame and previous frame); painters
//! draw into the current one through the helpers in this module.
//!
//! # Examples
//!
//! ```
//! use shellcfg_tui::buffer::CellGrid;
//! use shellcfg_tui::{Cell, Color, Style};
//!
//! let mut grid = CellGrid::new(80, 24);
//! grid.draw_text(2, 1, "PATH entries", Style::fg(Color::Cyan).with_bold());
//! grid.set(0, 0, Cell::new('>', Style::NONE));
//! assert_eq!(grid.get(0, 0).map(|c| c.ch), Some('>'));
//!
//! // Out-of-bounds writes are ignored.
//! grid.set(500, 500, Cell::blank());
//! ```

mod drawing;

pub use drawing::{BoxStyle, Rect};

use crate::cell::Cell;

/// Row-major grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Create a grid filled with blank cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Cell::blank(); size],
        }
    }

    /// Get grid dimensions.
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn cell_index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Get cell at position.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.cell_index(x, y).map(|idx| &self.cells[idx])
    }

    /// Set cell at position. Out-of-bounds positions are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(idx) = self.cell_index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::blank());
    }

    /// Resize, keeping the top-left overlap and blanking new cells.
    ///
    /// Content outside the new bounds is discarded.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) {
            return;
        }

        let mut cells = vec![Cell::blank(); usize::from(width) * usize::from(height)];
        let keep_w = usize::from(width.min(self.width));
        let keep_h = usize::from(height.min(self.height));
        for y in 0..keep_h {
            let src = y * usize::from(self.width);
            let dst = y * usize::from(width);
            cells[dst..dst + keep_w].copy_from_slice(&self.cells[src..src + keep_w]);
        }

        self.width = width;
        self.height = height;
        self.cells = cells;
    }

    /// One row of cells, or an empty slice past the bottom edge.
    #[must_use]
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = usize::from(y) * usize::from(self.width);
        &self.cells[start..start + usize::from(self.width)]
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Overwrite this grid's cells with `other`'s, row by row.
    ///
    /// Both grids must share dimensions; a mismatched source is ignored.
    pub fn copy_from(&mut self, other: &Self) {
        if self.size() != other.size() {
            return;
        }
        for y in 0..self.height {
            let start = usize::from(y) * usize::from(self.width);
            let end = start + usize::from(self.width);
            self.cells[start..end].copy_from_slice(&other.cells[start..end]);
        }
    }

    /// Characters of one row as a string (debugging and tests).
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}
