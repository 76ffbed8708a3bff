//! Text and box drawing operations.
//!
//! Every cell is one column wide. Characters whose display width is not 1
//! (CJK, emoji, combining marks, control characters) are drawn as `?` so a
//! string never shifts the columns that follow it.

use crate::buffer::CellGrid;
use crate::cell::Cell;
use crate::style::Style;
use unicode_width::UnicodeWidthChar;

/// Substitute for characters that do not occupy exactly one column.
const REPLACEMENT: char = '?';
/// Marker drawn in the last column of truncated text.
const ELLIPSIS: char = '…';

/// Axis-aligned rectangle in cell coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A `width × height` rectangle centered in an `outer_w × outer_h` area,
    /// shrunk to fit when the area is smaller.
    #[must_use]
    pub fn centered(outer_w: u16, outer_h: u16, width: u16, height: u16) -> Self {
        let width = width.min(outer_w);
        let height = height.min(outer_h);
        Self::new(
            (outer_w - width) / 2,
            (outer_h - height) / 2,
            width,
            height,
        )
    }

    /// Area inside a one-cell border plus horizontal padding.
    #[must_use]
    pub fn inner(&self, padding: u16) -> Self {
        let inset_x = 1 + padding;
        Self::new(
            self.x.saturating_add(inset_x),
            self.y.saturating_add(1),
            self.width.saturating_sub(inset_x * 2),
            self.height.saturating_sub(2),
        )
    }

    /// Outer width of a bordered box whose content is `content_width`
    /// columns with `padding` columns on each side.
    #[must_use]
    pub const fn boxed_width(content_width: u16, padding: u16) -> u16 {
        content_width
            .saturating_add(padding.saturating_mul(2))
            .saturating_add(2)
    }

    #[must_use]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    #[must_use]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

/// Box drawing characters plus the style applied to the border.
#[derive(Clone, Copy, Debug)]
pub struct BoxStyle {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub style: Style,
}

impl BoxStyle {
    /// Single-line box drawing characters.
    #[must_use]
    pub const fn single(style: Style) -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
            style,
        }
    }

    /// Plain ASCII, for terminals without box glyphs.
    #[must_use]
    pub const fn ascii(style: Style) -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            style,
        }
    }
}

fn single_width(c: char) -> char {
    if c.width() == Some(1) { c } else { REPLACEMENT }
}

impl CellGrid {
    /// Draw text starting at `(x, y)`, clipped at the right edge.
    ///
    /// Returns the number of columns written.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let max = self.width().saturating_sub(x);
        self.draw_text_clipped(x, y, text, style, max)
    }

    /// Draw at most `max_width` columns of text. Text that does not fit is
    /// cut and its last visible column replaced with an ellipsis.
    pub fn draw_text_clipped(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        style: Style,
        max_width: u16,
    ) -> u16 {
        let max_width = max_width.min(self.width().saturating_sub(x));
        if max_width == 0 || y >= self.height() {
            return 0;
        }

        let total = text.chars().count();
        let truncated = total > usize::from(max_width);
        let mut col = 0u16;
        for c in text.chars() {
            if col == max_width {
                break;
            }
            let ch = if truncated && col + 1 == max_width {
                ELLIPSIS
            } else {
                single_width(c)
            };
            self.set(x + col, y, Cell::new(ch, style));
            col += 1;
        }
        col
    }

    /// Draw text horizontally centered within `[x, x + width)`.
    pub fn draw_text_centered(&mut self, x: u16, y: u16, width: u16, text: &str, style: Style) {
        let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let offset = width.saturating_sub(len) / 2;
        self.draw_text_clipped(x.saturating_add(offset), y, text, style, width - offset.min(width));
    }

    /// Fill a rectangle with spaces in the given style.
    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        let cell = Cell::new(' ', style);
        for y in rect.y..rect.bottom().min(self.height()) {
            for x in rect.x..rect.right().min(self.width()) {
                self.set(x, y, cell);
            }
        }
    }

    /// Draw a horizontal run of `ch`.
    pub fn draw_hline(&mut self, x: u16, y: u16, width: u16, ch: char, style: Style) {
        let cell = Cell::new(single_width(ch), style);
        for col in x..x.saturating_add(width).min(self.width()) {
            self.set(col, y, cell);
        }
    }

    /// Draw a bordered box, filling its interior with `fill` and placing an
    /// optional title in the top border.
    pub fn draw_box(&mut self, rect: Rect, border: BoxStyle, fill: Style, title: Option<&str>) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }

        self.fill_rect(rect, fill);

        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;
        let inner_w = rect.width - 2;

        self.set(rect.x, rect.y, Cell::new(border.top_left, border.style));
        self.set(right, rect.y, Cell::new(border.top_right, border.style));
        self.set(rect.x, bottom, Cell::new(border.bottom_left, border.style));
        self.set(right, bottom, Cell::new(border.bottom_right, border.style));
        self.draw_hline(rect.x + 1, rect.y, inner_w, border.horizontal, border.style);
        self.draw_hline(rect.x + 1, bottom, inner_w, border.horizontal, border.style);
        for y in rect.y + 1..bottom {
            self.set(rect.x, y, Cell::new(border.vertical, border.style));
            self.set(right, y, Cell::new(border.vertical, border.style));
        }

        if let Some(title) = title {
            if inner_w > 2 {
                let label = format!(" {title} ");
                self.draw_text_clipped(rect.x + 2, rect.y, &label, border.style.with_bold(), inner_w - 2);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_draw_text_basic() {
        let mut grid = CellGrid::new(10, 1);
        let written = grid.draw_text(1, 0, "hey", Style::fg(Color::Red));
        assert_eq!(written, 3);
        assert_eq!(grid.row_text(0), " hey      ");
        assert_eq!(grid.get(1, 0).map(|c| c.fg), Some(Color::Red));
    }

    #[test]
    fn test_draw_text_clips_at_edge() {
        let mut grid = CellGrid::new(5, 1);
        let written = grid.draw_text(2, 0, "abcdef", Style::NONE);
        assert_eq!(written, 3);
        assert_eq!(grid.row_text(0), "  ab…");
    }

    #[test]
    fn test_draw_text_exact_fit_no_ellipsis() {
        let mut grid = CellGrid::new(4, 1);
        grid.draw_text(0, 0, "abcd", Style::NONE);
        assert_eq!(grid.row_text(0), "abcd");
    }

    #[test]
    fn test_wide_chars_replaced() {
        let mut grid = CellGrid::new(6, 1);
        grid.draw_text(0, 0, "a日b", Style::NONE);
        assert_eq!(grid.row_text(0), "a?b   ");
    }

    #[test]
    fn test_draw_text_outside_rows() {
        let mut grid = CellGrid::new(4, 1);
        assert_eq!(grid.draw_text(0, 3, "abc", Style::NONE), 0);
        assert_eq!(grid.draw_text(9, 0, "abc", Style::NONE), 0);
    }

    #[test]
    fn test_centered_text() {
        let mut grid = CellGrid::new(9, 1);
        grid.draw_text_centered(0, 0, 9, "abc", Style::NONE);
        assert_eq!(grid.row_text(0), "   abc   ");
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut grid = CellGrid::new(4, 4);
        grid.fill_rect(Rect::new(2, 2, 10, 10), Style::bg(Color::Blue));
        assert_eq!(grid.get(3, 3).map(|c| c.bg), Some(Color::Blue));
        assert_eq!(grid.get(1, 1).map(|c| c.bg), Some(Color::Default));
    }

    #[test]
    fn test_draw_box_with_title() {
        let mut grid = CellGrid::new(12, 4);
        grid.draw_box(
            Rect::new(0, 0, 12, 4),
            BoxStyle::ascii(Style::NONE),
            Style::NONE,
            Some("Hi"),
        );
        assert_eq!(grid.row_text(0), "+- Hi -----+");
        assert_eq!(grid.row_text(1), "|          |");
        assert_eq!(grid.row_text(3), "+----------+");
    }

    #[test]
    fn test_draw_box_too_small() {
        let mut grid = CellGrid::new(4, 4);
        grid.draw_box(Rect::new(0, 0, 1, 4), BoxStyle::ascii(Style::NONE), Style::NONE, None);
        assert_eq!(grid, CellGrid::new(4, 4));
    }

    #[test]
    fn test_rect_geometry() {
        let rect = Rect::centered(80, 24, 40, 10);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
        assert_eq!(Rect::centered(10, 5, 40, 10), Rect::new(0, 0, 10, 5));
        assert_eq!(rect.inner(1), Rect::new(22, 8, 36, 8));
        assert_eq!(Rect::boxed_width(70, 2), 76);
    }
}
