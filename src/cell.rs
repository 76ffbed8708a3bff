//! Terminal cell type representing a single character position.
//!
//! A terminal display is a grid of cells. Each cell holds one character and
//! its display attributes. Cells are assumed to be exactly one column wide;
//! the drawing helpers in [`crate::buffer`] substitute anything wider or
//! narrower before it reaches a cell.
//!
//! # Examples
//!
//! ```
//! use shellcfg_tui::{Cell, Color, Style};
//!
//! let cell = Cell::new('A', Style::fg(Color::Green));
//! assert_eq!(cell.ch, 'A');
//! assert_eq!(Cell::default(), Cell::blank());
//! ```

use crate::color::Color;
use crate::style::{Style, TextAttributes};

/// A single terminal cell.
///
/// Equality is structural: two cells compare equal exactly when the
/// renderer would emit identical output for them, which is what lets the
/// differential renderer skip unchanged positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub attributes: TextAttributes,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

impl Cell {
    /// A space with no colors and no attributes.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            ch: ' ',
            fg: Color::Default,
            bg: Color::Default,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a cell with a character and style.
    #[must_use]
    pub const fn new(ch: char, style: Style) -> Self {
        Self {
            ch,
            fg: style.fg,
            bg: style.bg,
            attributes: style.attributes,
        }
    }

    /// A space carrying only a background color.
    #[must_use]
    pub const fn filled(bg: Color) -> Self {
        Self {
            bg,
            ..Self::blank()
        }
    }

    #[must_use]
    pub const fn bold(&self) -> bool {
        self.attributes.is_bold()
    }

    #[must_use]
    pub const fn dim(&self) -> bool {
        self.attributes.is_dim()
    }

    /// The style this cell was drawn with.
    #[must_use]
    pub const fn style(&self) -> Style {
        Style {
            fg: self.fg,
            bg: self.bg,
            attributes: self.attributes,
        }
    }
}
