//! Text styling with attributes and colors.
//!
//! - [`TextAttributes`]: bitflags for the intensity attributes the renderer
//!   tracks (bold and dim)
//! - [`Style`]: colors plus attributes, applied when drawing text
//!
//! # Examples
//!
//! ```
//! use shellcfg_tui::{Color, Style};
//!
//! let title = Style::fg(Color::BrightWhite).with_bold();
//! let hint = Style::dim().with_bg(Color::Blue);
//! assert!(title.attributes.is_bold());
//! assert!(hint.attributes.is_dim());
//! ```

use crate::color::Color;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD = 0x01;
        /// Dim/decreased intensity.
        const DIM  = 0x02;
    }
}

impl TextAttributes {
    #[must_use]
    pub const fn is_bold(self) -> bool {
        self.contains(Self::BOLD)
    }

    #[must_use]
    pub const fn is_dim(self) -> bool {
        self.contains(Self::DIM)
    }
}

/// Complete text style: both color channels and attributes.
///
/// Styles are cheap to copy. The `with_*` methods return modified copies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attributes: TextAttributes,
}

impl Style {
    /// No colors, no attributes.
    pub const NONE: Self = Self {
        fg: Color::Default,
        bg: Color::Default,
        attributes: TextAttributes::empty(),
    };

    /// Style with only a foreground color.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Self::NONE
        }
    }

    /// Style with only a background color.
    #[must_use]
    pub const fn bg(color: Color) -> Self {
        Self {
            bg: color,
            ..Self::NONE
        }
    }

    /// Bold style.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            attributes: TextAttributes::BOLD,
            ..Self::NONE
        }
    }

    /// Dim style.
    #[must_use]
    pub const fn dim() -> Self {
        Self {
            attributes: TextAttributes::DIM,
            ..Self::NONE
        }
    }

    #[must_use]
    pub const fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    #[must_use]
    pub const fn with_bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    #[must_use]
    pub fn with_bold(mut self) -> Self {
        self.attributes |= TextAttributes::BOLD;
        self
    }

    #[must_use]
    pub fn with_dim(mut self) -> Self {
        self.attributes |= TextAttributes::DIM;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::Red).with_bg(Color::Black).with_bold();
        assert_eq!(style.fg, Color::Red);
        assert_eq!(style.bg, Color::Black);
        assert!(style.attributes.is_bold());
        assert!(!style.attributes.is_dim());
    }

    #[test]
    fn test_style_none_is_default() {
        assert_eq!(Style::NONE, Style::default());
    }

    #[test]
    fn test_attribute_combination() {
        let attrs = TextAttributes::BOLD | TextAttributes::DIM;
        assert!(attrs.is_bold());
        assert!(attrs.is_dim());
        assert_eq!(attrs - TextAttributes::BOLD, TextAttributes::DIM);
    }
}
