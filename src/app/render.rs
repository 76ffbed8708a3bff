//! Painting the state into a cell grid.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//! row 0        title bar
//! row 1        notification toast (right-aligned)
//! rows 2..h-2  main menu or list
//! row h-2      filter bar
//! row h-1      status bar with key hints
//! ```
//!
//! Modal overlays (detail, confirmation, add form) are drawn last, centered.

use crate::app::detail::{ConfirmDialog, ConfirmFocus, DetailOverlay};
use crate::app::form::AddForm;
use crate::app::notification::NotificationKind;
use crate::app::state::TuiState;
use crate::app::view::{MENU, View};
use crate::buffer::{BoxStyle, CellGrid, Rect};
use crate::color::Color;
use crate::style::Style;

/// Rows the layout reserves around the list.
pub const CHROME_ROWS: u16 = 4;
/// First row of the list area.
const LIST_TOP: u16 = 2;
/// Label column width in the main menu.
const MENU_LABEL_WIDTH: usize = 12;

/// Draws a frame from the state.
pub trait Painter {
    /// Paint the whole frame. The grid arrives blank.
    fn paint(&mut self, state: &TuiState, grid: &mut CellGrid);

    /// List rows available on a screen `screen_height` rows tall.
    fn list_height(&self, screen_height: u16) -> usize {
        usize::from(screen_height.saturating_sub(CHROME_ROWS))
    }
}

/// Named styles used by [`DefaultPainter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub text: Style,
    pub muted: Style,
    pub selected: Style,
    pub border: Style,
    pub panel: Style,
    pub status: Style,
    pub filter: Style,
    pub success: Style,
    pub error: Style,
    pub button: Style,
    pub button_focused: Style,
    pub input: Style,
    pub input_focused: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::fg(Color::BrightWhite).with_bg(Color::Blue).with_bold(),
            text: Style::NONE,
            muted: Style::dim(),
            selected: Style::fg(Color::Black).with_bg(Color::Cyan),
            border: Style::fg(Color::Cyan),
            panel: Style::NONE,
            status: Style::fg(Color::White).with_bg(Color::BrightBlack),
            filter: Style::fg(Color::Yellow),
            success: Style::fg(Color::Black).with_bg(Color::Green),
            error: Style::fg(Color::BrightWhite).with_bg(Color::Red).with_bold(),
            button: Style::NONE,
            button_focused: Style::fg(Color::Black).with_bg(Color::Cyan).with_bold(),
            input: Style::bg(Color::BrightBlack),
            input_focused: Style::fg(Color::BrightWhite).with_bg(Color::Blue),
        }
    }
}

impl Theme {
    /// Every token set to the terminal default, for tests and dumb terminals.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            title: Style::NONE,
            text: Style::NONE,
            muted: Style::NONE,
            selected: Style::NONE,
            border: Style::NONE,
            panel: Style::NONE,
            status: Style::NONE,
            filter: Style::NONE,
            success: Style::NONE,
            error: Style::NONE,
            button: Style::NONE,
            button_focused: Style::NONE,
            input: Style::NONE,
            input_focused: Style::NONE,
        }
    }
}

/// The stock painter.
#[derive(Clone, Debug, Default)]
pub struct DefaultPainter {
    theme: Theme,
}

impl DefaultPainter {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn border(&self) -> BoxStyle {
        BoxStyle::single(self.theme.border)
    }

    fn paint_title(&self, state: &TuiState, grid: &mut CellGrid) {
        let width = grid.width();
        grid.fill_rect(Rect::new(0, 0, width, 1), self.theme.title);
        let title = format!(" shellcfg - {}", state.current_view().title());
        grid.draw_text(0, 0, &title, self.theme.title);

        if state.current_view().is_list() {
            let count = match state.current_items() {
                Some(items) if state.filter().is_active() => {
                    format!("{}/{} ", state.item_count(), items.len())
                }
                Some(items) => format!("{} items ", items.len()),
                None => String::new(),
            };
            let len = u16::try_from(count.chars().count()).unwrap_or(width);
            if len < width {
                grid.draw_text(width - len, 0, &count, self.theme.title);
            }
        }
    }

    fn paint_row(&self, grid: &mut CellGrid, y: u16, text: &str, selected: bool) {
        let style = if selected {
            grid.fill_rect(Rect::new(0, y, grid.width(), 1), self.theme.selected);
            self.theme.selected
        } else {
            self.theme.text
        };
        let marker = if selected { '>' } else { ' ' };
        grid.draw_text(1, y, &format!("{marker} {text}"), style);
    }

    fn paint_menu(&self, state: &TuiState, grid: &mut CellGrid) {
        let rows = state.visible_height();
        for (idx, entry) in MENU
            .iter()
            .enumerate()
            .skip(state.scroll_offset())
            .take(rows)
        {
            let y = LIST_TOP + u16::try_from(idx - state.scroll_offset()).unwrap_or(0);
            let text = format!(
                "{:<width$} {}",
                entry.label,
                entry.description,
                width = MENU_LABEL_WIDTH
            );
            self.paint_row(grid, y, &text, idx == state.selected_index());
        }
    }

    fn paint_list(&self, state: &TuiState, grid: &mut CellGrid) {
        let Some(items) = state.current_items() else {
            grid.draw_text(3, LIST_TOP, "Loading...", self.theme.muted);
            return;
        };
        if items.is_empty() {
            grid.draw_text(3, LIST_TOP, "(no entries)", self.theme.muted);
            return;
        }

        let rows = state.visible_rows();
        if rows.is_empty() {
            grid.draw_text(3, LIST_TOP, "No matches", self.theme.muted);
            return;
        }

        let scroll = state.scroll_offset();
        for (pos, (_, text)) in rows
            .iter()
            .enumerate()
            .skip(scroll)
            .take(state.visible_height())
        {
            let y = LIST_TOP + u16::try_from(pos - scroll).unwrap_or(0);
            self.paint_row(grid, y, text, pos == state.selected_index());
        }
    }

    fn paint_filter_bar(&self, state: &TuiState, grid: &mut CellGrid) {
        if !state.filter().is_active() {
            return;
        }
        let y = grid.height().saturating_sub(2);
        grid.draw_text(1, y, &format!("/{}_", state.filter().text()), self.theme.filter);
    }

    fn paint_status_bar(&self, state: &TuiState, grid: &mut CellGrid) {
        let y = grid.height().saturating_sub(1);
        let width = grid.width();
        grid.fill_rect(Rect::new(0, y, width, 1), self.theme.status);
        let hints = status_hints(state).join("  ");
        grid.draw_text(0, y, &format!(" {hints}"), self.theme.status);
    }

    fn paint_notification(&self, state: &TuiState, grid: &mut CellGrid) {
        let notification = state.notification();
        let style = match notification.kind() {
            NotificationKind::None => return,
            NotificationKind::Success => self.theme.success,
            NotificationKind::Error => self.theme.error,
        };
        let text = format!(" {} ", notification.message());
        let width = grid.width();
        let len = u16::try_from(text.chars().count()).unwrap_or(width).min(width);
        grid.draw_text(width - len, 1, &text, style);
    }

    fn paint_detail(&self, detail: &DetailOverlay, grid: &mut CellGrid) {
        let (width, height) = grid.size();
        let longest = detail
            .lines()
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(detail.title().chars().count() + 4))
            .max()
            .unwrap_or(0);
        let content_w = u16::try_from(longest).unwrap_or(u16::MAX).max(30);
        let lines_h = u16::try_from(detail.lines().len()).unwrap_or(u16::MAX);
        let rect = Rect::centered(
            width.saturating_sub(4),
            height.saturating_sub(2),
            Rect::boxed_width(content_w, 1),
            lines_h.saturating_add(2),
        );
        let rect = Rect::new(rect.x + 2, rect.y + 1, rect.width, rect.height);

        grid.draw_box(rect, self.border(), self.theme.panel, Some(detail.title()));
        let inner = rect.inner(1);
        for (row, line) in detail
            .lines()
            .iter()
            .skip(detail.scroll())
            .take(usize::from(inner.height))
            .enumerate()
        {
            let y = inner.y + u16::try_from(row).unwrap_or(0);
            grid.draw_text_clipped(inner.x, y, line, self.theme.text, inner.width);
        }
    }

    fn paint_confirm(&self, dialog: &ConfirmDialog, grid: &mut CellGrid) {
        let (width, height) = grid.size();
        let rect = Rect::centered(width, height, 44, 7);
        grid.draw_box(rect, self.border(), self.theme.panel, Some("Confirm"));
        let inner = rect.inner(1);
        grid.draw_text_clipped(inner.x, inner.y, "Delete this entry?", self.theme.text, inner.width);
        grid.draw_text_clipped(inner.x, inner.y + 1, &dialog.key, self.theme.muted, inner.width);

        let y = inner.y + 3;
        let x = inner.x + inner.width.saturating_sub(22) / 2;
        let cancel = self.paint_button(grid, x, y, "Cancel", dialog.focus == ConfirmFocus::Cancel);
        self.paint_button(grid, x + cancel + 2, y, "Delete", dialog.focus == ConfirmFocus::Delete);
    }

    fn paint_button(&self, grid: &mut CellGrid, x: u16, y: u16, label: &str, focused: bool) -> u16 {
        let style = if focused {
            self.theme.button_focused
        } else {
            self.theme.button
        };
        grid.draw_text(x, y, &format!("[ {label} ]"), style)
    }

    fn paint_form(&self, form: &AddForm, grid: &mut CellGrid) {
        let (width, height) = grid.size();
        let fields = u16::try_from(form.field_count()).unwrap_or(1);
        let rect = Rect::centered(width, height, 56, 6 + fields * 2);
        grid.draw_box(rect, self.border(), self.theme.panel, Some(form.title()));
        let inner = rect.inner(1);

        let label_w = 10;
        let input_x = inner.x + label_w;
        let input_w = inner.width.saturating_sub(label_w);
        for (idx, field) in form.fields().iter().enumerate() {
            let y = inner.y + 1 + u16::try_from(idx).unwrap_or(0) * 2;
            let focused = form.focus() == idx;
            grid.draw_text_clipped(inner.x, y, &format!("{}:", field.label), self.theme.text, label_w);
            let style = if focused {
                self.theme.input_focused
            } else {
                self.theme.input
            };
            grid.fill_rect(Rect::new(input_x, y, input_w, 1), style);
            let value = if focused {
                format!("{}_", field.value)
            } else {
                field.value.clone()
            };
            grid.draw_text_clipped(input_x, y, &value, style, input_w);
        }

        let error_y = inner.y + 1 + fields * 2;
        if let Some(error) = form.error() {
            grid.draw_text_clipped(inner.x, error_y, error, self.theme.error, inner.width);
        }

        let buttons_y = error_y + 1;
        let x = inner.x + inner.width.saturating_sub(22) / 2;
        let cancel = self.paint_button(grid, x, buttons_y, "Cancel", form.focus() == form.cancel_index());
        self.paint_button(
            grid,
            x + cancel + 2,
            buttons_y,
            "Submit",
            form.focus() == form.submit_index(),
        );
    }
}

/// Key hints for the current mode.
fn status_hints(state: &TuiState) -> Vec<&'static str> {
    if state.add_form().is_some() {
        return vec!["Tab next field", "Up/Down focus", "Enter confirm", "Esc cancel"];
    }
    if let Some(detail) = state.detail() {
        if detail.confirm().is_some() {
            return vec!["Left/Right choose", "Enter confirm", "Esc cancel"];
        }
        let mut hints = vec!["Up/Down scroll", "Esc close"];
        if detail.item().is_some() && state.current_view().can_delete() {
            hints.push("d delete");
        }
        return hints;
    }
    if state.filter().is_active() {
        return vec!["Type to filter", "Enter open", "Esc clear"];
    }

    let view = state.current_view();
    if view == View::MainMenu {
        return vec!["Up/Down move", "Enter open", "? help", "q quit"];
    }
    let mut hints = vec!["Up/Down move", "Enter details", "/ filter"];
    if view.can_add() {
        hints.push("a add");
    }
    if view.can_delete() {
        hints.push("d delete");
    }
    if view == View::BackupsView {
        hints.push("c clean up");
    }
    hints.push("Esc back");
    hints
}

impl Painter for DefaultPainter {
    fn paint(&mut self, state: &TuiState, grid: &mut CellGrid) {
        if grid.width() == 0 || grid.height() == 0 {
            return;
        }

        self.paint_title(state, grid);
        if state.current_view() == View::MainMenu {
            self.paint_menu(state, grid);
        } else {
            self.paint_list(state, grid);
        }
        self.paint_filter_bar(state, grid);
        self.paint_status_bar(state, grid);
        self.paint_notification(state, grid);

        if let Some(detail) = state.detail() {
            if !detail.is_confirm_only() {
                self.paint_detail(detail, grid);
            }
            if let Some(dialog) = detail.confirm() {
                self.paint_confirm(dialog, grid);
            }
        }
        if let Some(form) = state.add_form() {
            self.paint_form(form, grid);
        }
    }
}
