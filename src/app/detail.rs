//! Read-only detail overlay and the delete confirmation dialog.

/// Which confirmation button has focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmFocus {
    #[default]
    Cancel,
    Delete,
}

impl ConfirmFocus {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Cancel => Self::Delete,
            Self::Delete => Self::Cancel,
        }
    }
}

/// "Delete this item?" prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub key: String,
    pub focus: ConfirmFocus,
}

impl ConfirmDialog {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            focus: ConfirmFocus::Cancel,
        }
    }

    pub fn toggle(&mut self) {
        self.focus = self.focus.toggled();
    }
}

/// Scrollable modal text box.
///
/// When opened directly with `d` from a list there is no text and closing
/// the confirmation closes the overlay; when the confirmation was opened
/// from inside the detail, cancelling returns to the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailOverlay {
    title: String,
    lines: Vec<String>,
    scroll: usize,
    item: Option<String>,
    confirm: Option<ConfirmDialog>,
    confirm_only: bool,
}

impl DetailOverlay {
    /// Detail text for the list item `item`.
    #[must_use]
    pub fn for_item(item: impl Into<String>, lines: Vec<String>) -> Self {
        let item = item.into();
        Self {
            title: item.clone(),
            lines,
            scroll: 0,
            item: Some(item),
            confirm: None,
            confirm_only: false,
        }
    }

    /// Text not tied to any item, such as key-binding help.
    #[must_use]
    pub fn text(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
            scroll: 0,
            item: None,
            confirm: None,
            confirm_only: false,
        }
    }

    /// Bare delete confirmation for `item`.
    #[must_use]
    pub fn confirm_delete(item: impl Into<String>) -> Self {
        let item = item.into();
        Self {
            title: item.clone(),
            lines: Vec::new(),
            scroll: 0,
            confirm: Some(ConfirmDialog::new(item.clone())),
            item: Some(item),
            confirm_only: true,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// The list item this overlay describes.
    #[must_use]
    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    #[must_use]
    pub fn confirm(&self) -> Option<&ConfirmDialog> {
        self.confirm.as_ref()
    }

    pub fn confirm_mut(&mut self) -> Option<&mut ConfirmDialog> {
        self.confirm.as_mut()
    }

    /// Whether only the confirmation is shown, with no text behind it.
    #[must_use]
    pub fn is_confirm_only(&self) -> bool {
        self.confirm_only
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll one line, stopping with the last line at the top.
    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.lines.len() {
            self.scroll += 1;
        }
    }

    /// Open the nested confirmation. Returns false without an item.
    pub fn open_confirm(&mut self) -> bool {
        match &self.item {
            Some(item) => {
                self.confirm = Some(ConfirmDialog::new(item.clone()));
                true
            }
            None => false,
        }
    }

    /// Dismiss the confirmation. Returns true if the whole overlay
    /// should close as a result.
    pub fn cancel_confirm(&mut self) -> bool {
        self.confirm = None;
        self.confirm_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn test_scroll_bounds() {
        let mut overlay = DetailOverlay::for_item("x", lines(3));
        overlay.scroll_up();
        assert_eq!(overlay.scroll(), 0);
        overlay.scroll_down();
        overlay.scroll_down();
        overlay.scroll_down();
        assert_eq!(overlay.scroll(), 2);
    }

    #[test]
    fn test_nested_confirm_returns_to_detail() {
        let mut overlay = DetailOverlay::for_item("ll=ls -la", lines(2));
        assert!(overlay.open_confirm());
        assert_eq!(overlay.confirm().map(|c| c.key.as_str()), Some("ll=ls -la"));
        assert!(!overlay.cancel_confirm());
        assert!(overlay.confirm().is_none());
    }

    #[test]
    fn test_confirm_only_closes_everything() {
        let mut overlay = DetailOverlay::confirm_delete("/bin");
        assert!(overlay.is_confirm_only());
        assert_eq!(overlay.confirm().map(|c| c.focus), Some(ConfirmFocus::Cancel));
        assert!(overlay.cancel_confirm());
    }

    #[test]
    fn test_text_overlay_cannot_confirm() {
        let mut overlay = DetailOverlay::text("Help", lines(1));
        assert!(!overlay.open_confirm());
        assert_eq!(overlay.item(), None);
    }

    #[test]
    fn test_focus_toggle() {
        let mut dialog = ConfirmDialog::new("k");
        dialog.toggle();
        assert_eq!(dialog.focus, ConfirmFocus::Delete);
        dialog.toggle();
        assert_eq!(dialog.focus, ConfirmFocus::Cancel);
    }
}
