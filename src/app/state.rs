//! Central application state and its navigation primitives.
//!
//! Every transition is synchronous and runs inside an event handler or the
//! per-iteration notification tick. Anything that changes what is on
//! screen sets the dirty flag.

use crate::app::detail::DetailOverlay;
use crate::app::filter::Filter;
use crate::app::form::AddForm;
use crate::app::notification::{Notification, NotificationKind};
use crate::app::view::{MENU, View, ViewCache};
use std::collections::HashMap;

/// Selection and scroll position within one view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub selected: usize,
    pub scroll: usize,
}

/// Central mutable state.
///
/// The back-stack has exactly two slots: going back swaps the current and
/// previous view, so pressing back twice returns to where you were.
#[derive(Clone, Debug)]
pub struct TuiState {
    current_view: View,
    previous_view: View,
    selected_index: usize,
    scroll_offset: usize,
    visible_height: usize,
    saved_cursors: HashMap<View, Cursor>,
    cache: ViewCache,
    detail: Option<DetailOverlay>,
    add_form: Option<AddForm>,
    filter: Filter,
    notification: Notification,
    needs_refresh: bool,
    running: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    /// Start at the main menu with a pending repaint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_view: View::MainMenu,
            previous_view: View::MainMenu,
            selected_index: 0,
            scroll_offset: 0,
            visible_height: 1,
            saved_cursors: HashMap::new(),
            cache: ViewCache::default(),
            detail: None,
            add_form: None,
            filter: Filter::default(),
            notification: Notification::default(),
            needs_refresh: true,
            running: true,
        }
    }

    // ---- accessors -------------------------------------------------------

    #[must_use]
    pub fn current_view(&self) -> View {
        self.current_view
    }

    #[must_use]
    pub fn previous_view(&self) -> View {
        self.previous_view
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    #[must_use]
    pub fn visible_height(&self) -> usize {
        self.visible_height
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        Cursor {
            selected: self.selected_index,
            scroll: self.scroll_offset,
        }
    }

    /// Cursor remembered for a view not currently shown.
    #[must_use]
    pub fn saved_cursor(&self, view: View) -> Option<Cursor> {
        self.saved_cursors.get(&view).copied()
    }

    #[must_use]
    pub fn cache(&self) -> &ViewCache {
        &self.cache
    }

    #[must_use]
    pub fn detail(&self) -> Option<&DetailOverlay> {
        self.detail.as_ref()
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailOverlay> {
        self.detail.as_mut()
    }

    #[must_use]
    pub fn add_form(&self) -> Option<&AddForm> {
        self.add_form.as_ref()
    }

    pub fn add_form_mut(&mut self) -> Option<&mut AddForm> {
        self.add_form.as_mut()
    }

    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn mark_dirty(&mut self) {
        self.needs_refresh = true;
    }

    /// Called after a frame has been painted.
    pub fn mark_clean(&mut self) {
        self.needs_refresh = false;
    }

    pub fn quit(&mut self) {
        tracing::debug!("quit requested");
        self.running = false;
    }

    // ---- navigation ------------------------------------------------------

    fn restore_cursor(&mut self, view: View) {
        let cursor = self.saved_cursors.get(&view).copied().unwrap_or_default();
        self.selected_index = cursor.selected;
        self.scroll_offset = cursor.scroll;
    }

    /// Switch to `view`, remembering where we were.
    pub fn goto_view(&mut self, view: View) {
        tracing::debug!(from = ?self.current_view, to = ?view, "goto view");
        self.saved_cursors.insert(self.current_view, self.cursor());
        self.filter.deactivate();
        self.previous_view = self.current_view;
        self.current_view = view;
        self.restore_cursor(view);
        self.needs_refresh = true;
    }

    /// Swap the current and previous view.
    pub fn go_back(&mut self) {
        tracing::debug!(from = ?self.current_view, to = ?self.previous_view, "go back");
        self.saved_cursors.insert(self.current_view, self.cursor());
        self.filter.deactivate();
        std::mem::swap(&mut self.current_view, &mut self.previous_view);
        self.restore_cursor(self.current_view);
        self.needs_refresh = true;
    }

    /// Move the selection by `delta`, wrapping at both ends.
    pub fn move_selection(&mut self, delta: isize, item_count: usize) {
        if item_count == 0 {
            return;
        }
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        let next = (self.selected_index as isize + delta).rem_euclid(item_count as isize) as usize;
        self.selected_index = next;
        self.ensure_visible();
        self.needs_refresh = true;
    }

    /// Jump to `index`, clamped to the list. No wrapping.
    pub fn select(&mut self, index: usize, item_count: usize) {
        if item_count == 0 {
            return;
        }
        self.selected_index = index.min(item_count - 1);
        self.ensure_visible();
        self.needs_refresh = true;
    }

    /// Pull the selection back inside a list that may have shrunk.
    pub fn clamp_selection(&mut self, item_count: usize) {
        if item_count == 0 {
            self.selected_index = 0;
            self.scroll_offset = 0;
        } else if self.selected_index >= item_count {
            self.selected_index = item_count - 1;
        }
        self.ensure_visible();
    }

    /// Rows available for list items; keeps the selection on screen.
    pub fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height.max(1);
        self.ensure_visible();
        self.needs_refresh = true;
    }

    fn ensure_visible(&mut self) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.selected_index + 1 - self.visible_height;
        }
    }

    // ---- list data -------------------------------------------------------

    /// The current view's full list, if loaded. The main menu has none.
    #[must_use]
    pub fn current_items(&self) -> Option<&[String]> {
        self.cache.get(self.current_view)
    }

    fn items_or_empty(&self) -> &[String] {
        self.current_items().unwrap_or(&[])
    }

    /// Number of selectable rows, honoring the filter.
    #[must_use]
    pub fn item_count(&self) -> usize {
        if self.current_view == View::MainMenu {
            MENU.len()
        } else if self.filter.is_active() {
            self.filter.indices().len()
        } else {
            self.items_or_empty().len()
        }
    }

    /// Rows currently listed, as `(index into full list, text)`.
    pub fn visible_rows(&self) -> Vec<(usize, &str)> {
        let items = self.items_or_empty();
        if self.filter.is_active() {
            self.filter
                .indices()
                .iter()
                .filter_map(|&idx| items.get(idx).map(|s| (idx, s.as_str())))
                .collect()
        } else {
            items.iter().map(String::as_str).enumerate().collect()
        }
    }

    /// The item under the selection, resolved through the filter.
    #[must_use]
    pub fn selected_item(&self) -> Option<&str> {
        let items = self.current_items()?;
        let idx = if self.filter.is_active() {
            *self.filter.indices().get(self.selected_index)?
        } else {
            self.selected_index
        };
        items.get(idx).map(String::as_str)
    }

    /// Store a freshly loaded list and re-fit the selection to it.
    pub fn store_items(&mut self, view: View, items: Vec<String>) {
        tracing::debug!(?view, count = items.len(), "list loaded");
        self.cache.set(view, items);
        if view == self.current_view {
            if self.filter.is_active() {
                let items = self.cache.get(view).unwrap_or(&[]);
                self.filter.refresh(items);
            }
            self.clamp_selection(self.item_count());
        }
        self.needs_refresh = true;
    }

    /// Force the current view's list to reload.
    pub fn invalidate_current(&mut self) {
        self.cache.invalidate(self.current_view);
        self.needs_refresh = true;
    }

    // ---- filter ----------------------------------------------------------

    pub fn activate_filter(&mut self) {
        let items = self.cache.get(self.current_view).unwrap_or(&[]);
        self.filter.activate(items);
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.needs_refresh = true;
    }

    pub fn deactivate_filter(&mut self) {
        self.filter.deactivate();
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.needs_refresh = true;
    }

    pub fn filter_push(&mut self, c: char) {
        let items = self.cache.get(self.current_view).unwrap_or(&[]);
        self.filter.push(c, items);
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.needs_refresh = true;
    }

    pub fn filter_pop(&mut self) {
        let items = self.cache.get(self.current_view).unwrap_or(&[]);
        if self.filter.pop(items) {
            self.selected_index = 0;
            self.scroll_offset = 0;
            self.needs_refresh = true;
        }
    }

    // ---- modals ----------------------------------------------------------

    pub fn open_detail(&mut self, overlay: DetailOverlay) {
        tracing::debug!(title = overlay.title(), "detail opened");
        self.detail = Some(overlay);
        self.needs_refresh = true;
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.needs_refresh = true;
    }

    pub fn open_add_form(&mut self, form: AddForm) {
        tracing::debug!(target_view = ?form.target(), "add form opened");
        self.add_form = Some(form);
        self.needs_refresh = true;
    }

    pub fn close_add_form(&mut self) {
        self.add_form = None;
        self.needs_refresh = true;
    }

    // ---- notifications ---------------------------------------------------

    pub fn set_notification(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notification.set(kind, message);
        self.needs_refresh = true;
    }

    /// One loop iteration of countdown.
    pub fn tick_notification(&mut self) {
        if self.notification.tick() {
            self.needs_refresh = true;
        }
    }
}
