//! Opaque color tokens.
//!
//! The engine does not interpret palettes. A [`Color`] is a token the
//! renderer knows how to turn into an SGR parameter list and nothing more;
//! themes are built by the host out of these tokens.

use std::io::{self, Write};

/// A foreground or background color token.
///
/// [`Color::Default`] means "uncolored": the terminal's own default for the
/// channel. Moving a channel back to `Default` requires an attribute reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Terminal default (no color requested).
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Whether this token requests a color at all.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }

    /// Offset of a named color within its 8-color bank, and whether it is
    /// in the bright bank.
    const fn named_offset(self) -> Option<(u8, bool)> {
        let pair = match self {
            Self::Black => (0, false),
            Self::Red => (1, false),
            Self::Green => (2, false),
            Self::Yellow => (3, false),
            Self::Blue => (4, false),
            Self::Magenta => (5, false),
            Self::Cyan => (6, false),
            Self::White => (7, false),
            Self::BrightBlack => (0, true),
            Self::BrightRed => (1, true),
            Self::BrightGreen => (2, true),
            Self::BrightYellow => (3, true),
            Self::BrightBlue => (4, true),
            Self::BrightMagenta => (5, true),
            Self::BrightCyan => (6, true),
            Self::BrightWhite => (7, true),
            _ => return None,
        };
        Some(pair)
    }

    /// Write the SGR sequence selecting this color on the foreground channel.
    ///
    /// Writes nothing for [`Color::Default`]; callers reset instead.
    pub fn write_fg(self, w: &mut impl Write) -> io::Result<()> {
        self.write_sgr(w, 30, 90, 38)
    }

    /// Write the SGR sequence selecting this color on the background channel.
    pub fn write_bg(self, w: &mut impl Write) -> io::Result<()> {
        self.write_sgr(w, 40, 100, 48)
    }

    fn write_sgr(self, w: &mut impl Write, base: u8, bright: u8, extended: u8) -> io::Result<()> {
        if let Some((offset, is_bright)) = self.named_offset() {
            let code = if is_bright { bright } else { base } + offset;
            return write!(w, "\x1b[{code}m");
        }
        match self {
            Self::Indexed(n) => write!(w, "\x1b[{extended};5;{n}m"),
            Self::Rgb(r, g, b) => write!(w, "\x1b[{extended};2;{r};{g};{b}m"),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fg(color: Color) -> String {
        let mut out = Vec::new();
        color.write_fg(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn bg(color: Color) -> String {
        let mut out = Vec::new();
        color.write_bg(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(fg(Color::Red), "\x1b[31m");
        assert_eq!(bg(Color::Blue), "\x1b[44m");
        assert_eq!(fg(Color::BrightCyan), "\x1b[96m");
        assert_eq!(bg(Color::BrightBlack), "\x1b[100m");
    }

    #[test]
    fn test_extended_colors() {
        assert_eq!(fg(Color::Indexed(208)), "\x1b[38;5;208m");
        assert_eq!(bg(Color::Rgb(1, 2, 3)), "\x1b[48;2;1;2;3m");
    }

    #[test]
    fn test_default_writes_nothing() {
        assert!(fg(Color::Default).is_empty());
        assert!(Color::Default.is_default());
        assert!(!Color::Black.is_default());
    }
}
