//! Event dispatch: one event in, one state transition out.
//!
//! Precedence for keys: Ctrl+C, then the add form, then the detail or
//! confirmation overlay, then the filter, then the view's own bindings.

use crate::app::detail::{ConfirmFocus, DetailOverlay};
use crate::app::form::{AddForm, FormAction};
use crate::app::notification::NotificationKind;
use crate::app::state::TuiState;
use crate::app::view::{MENU, View};
use crate::bridge::Bridge;
use crate::input::{Event, KeyCode, KeyEvent};

/// Key-binding reference shown by `?` and F1.
pub const HELP_LINES: &[&str] = &[
    "Navigation",
    "  Up/Down, j/k      move selection",
    "  Home/End          first / last item",
    "  Enter, l          open",
    "  Esc, h            back",
    "",
    "Lists",
    "  /                 filter",
    "  a                 add (PATH, Aliases, Constants)",
    "  d                 delete",
    "  r                 reload",
    "  c                 clean up old backups (Backups)",
    "",
    "  q                 quit (main menu)",
    "  Ctrl+C            quit",
];

/// Apply one event to the state.
///
/// Resize events only mark the state dirty; resizing the screen is the
/// caller's job. Mouse events are ignored.
pub fn handle_event<B: Bridge + ?Sized>(state: &mut TuiState, bridge: &mut B, event: Event) {
    match event {
        Event::Key(key) => handle_key(state, bridge, key),
        Event::Resize(resize) => {
            tracing::debug!(width = resize.width, height = resize.height, "resize");
            state.mark_dirty();
        }
        Event::Mouse(_) => {}
    }
}

fn handle_key<B: Bridge + ?Sized>(state: &mut TuiState, bridge: &mut B, key: KeyEvent) {
    if key.is_ctrl_c() {
        state.quit();
        return;
    }

    if state.add_form().is_some() {
        handle_form_key(state, bridge, key);
    } else if state.detail().is_some() {
        handle_detail_key(state, bridge, key);
    } else if state.filter().is_active() {
        handle_filter_key(state, bridge, key);
    } else {
        handle_view_key(state, bridge, key);
    }
    state.mark_dirty();
}

// ---- view -----------------------------------------------------------------

fn handle_view_key<B: Bridge + ?Sized>(state: &mut TuiState, bridge: &mut B, key: KeyEvent) {
    let count = state.item_count();
    let page = state.visible_height();
    let view = state.current_view();

    match key.code {
        KeyCode::Up => state.move_selection(-1, count),
        KeyCode::Down => state.move_selection(1, count),
        KeyCode::PageUp => state.select(state.selected_index().saturating_sub(page), count),
        KeyCode::PageDown => state.select(state.selected_index().saturating_add(page), count),
        KeyCode::Home => state.select(0, count),
        KeyCode::End => state.select(usize::MAX, count),
        KeyCode::Enter => activate_selection(state, bridge),
        KeyCode::Esc => back_or_quit(state),
        KeyCode::F(1) => open_help(state),
        KeyCode::Char(_) if key.ctrl() => {}
        KeyCode::Char(c) => match c {
            'k' => state.move_selection(-1, count),
            'j' => state.move_selection(1, count),
            'l' => activate_selection(state, bridge),
            'h' => back_or_quit_h(state),
            'q' => back_or_quit(state),
            '?' => open_help(state),
            '/' if view.is_list() => state.activate_filter(),
            'a' if view.can_add() => {
                if let Some(form) = AddForm::for_view(view) {
                    state.open_add_form(form);
                }
            }
            'd' if view.can_delete() => {
                if let Some(item) = state.selected_item() {
                    let overlay = DetailOverlay::confirm_delete(item);
                    state.open_detail(overlay);
                }
            }
            'r' if view.is_list() => state.invalidate_current(),
            'c' if view == View::BackupsView => cleanup_backups(state, bridge),
            _ => {}
        },
        _ => {}
    }
}

/// Esc and `q`: quit at the main menu, otherwise back.
fn back_or_quit(state: &mut TuiState) {
    if state.current_view() == View::MainMenu {
        state.quit();
    } else {
        state.go_back();
    }
}

/// `h`: back from a list; nothing to go back to at the main menu.
fn back_or_quit_h(state: &mut TuiState) {
    if state.current_view() != View::MainMenu {
        state.go_back();
    }
}

fn activate_selection<B: Bridge + ?Sized>(state: &mut TuiState, bridge: &mut B) {
    if state.current_view() == View::MainMenu {
        if let Some(entry) = MENU.get(state.selected_index()) {
            state.goto_view(entry.view);
        }
        return;
    }
    open_selected_detail(state, bridge);
}

fn open_selected_detail<B: Bridge + ?Sized>(state: &mut TuiState, bridge: &mut B) {
    let Some(item) = state.selected_item().map(str::to_owned) else {
        return;
    };
    let lines = state.current_view().detail(bridge, &item);
    state.open_detail(DetailOverlay::for_item(item, lines));
}

fn open_help(state: &mut TuiState) {
    let lines = HELP_LINES.iter().map(|s| (*s).to_string()).collect();
    state.open_detail(DetailOverlay::text("Keys", lines));
}

fn cleanup_backups<B: Bridge + ?Sized>(state: &mut TuiState, bridge: &mut B) {
    if bridge.cleanup_backups() {
        tracing::info!("old backups removed");
        state.invalidate_current();
        state.set_notification(NotificationKind::Success, "Old backups removed");
    } else {
        let message = bridge
            .last_error()
            .unwrap_or_else(|| "Backup cleanup failed".to_string());
        state.set_notification(NotificationKind::Error, message);
    }
}

// ---- filter ---------------------------------------------------------------

fn handle_filter_key<B: Bridge + ?Sized>(state: &mut TuiState, bridge: &mut B, key: KeyEvent) {
    let count = state.item_count();
    match key.code {
        KeyCode::Esc => state.deactivate_filter(),
        KeyCode::Backspace => state.filter_pop(),
        KeyCode::Enter => open_selected_detail(state, bridge),
        KeyCode::Up => state.move_selection(-1, count),
        KeyCode::Down => state.move_selection(1, count),
        _ => {
            if let Some(c) = key.text_char() {
                state.filter_push(c);
            }
        }
    }
}

// ---- detail / confirm -----------------------------------------------------

fn handle_detail_key<B: Bridge + ?Sized>(state: &mut TuiState, bridge: &mut B, key: KeyEvent) {
    let view = state.current_view();
    let Some(detail) = state.detail_mut() else {
        return;
    };

    if let Some(confirm) = detail.confirm_mut() {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => confirm.toggle(),
            KeyCode::Char('h' | 'l') if !key.ctrl() => confirm.toggle(),
            KeyCode::Enter => match confirm.focus {
                ConfirmFocus::Delete => {
                    let item = confirm.key.clone();
                    delete_item(state, bridge, &item);
                }
                ConfirmFocus::Cancel => cancel_confirm(state),
            },
            KeyCode::Esc => cancel_confirm(state),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Up => detail.scroll_up(),
        KeyCode::Down => detail.scroll_down(),
        KeyCode::Esc | KeyCode::Enter => state.close_detail(),
        KeyCode::Char(_) if key.ctrl() => {}
        KeyCode::Char('k') => detail.scroll_up(),
        KeyCode::Char('j') => detail.scroll_down(),
        KeyCode::Char('q' | 'h') => state.close_detail(),
        KeyCode::Char('d') if view.can_delete() => {
            detail.open_confirm();
        }
        _ => {}
    }
}

fn cancel_confirm(state: &mut TuiState) {
    let close = state.detail_mut().is_some_and(DetailOverlay::cancel_confirm);
    if close {
        state.close_detail();
    }
}

fn delete_item<B: Bridge + ?Sized>(state: &mut TuiState, bridge: &mut B, item: &str) {
    let view = state.current_view();
    state.close_detail();

    if view.delete(bridge, item) {
        tracing::info!(?view, item, "item deleted");
        let remaining = state.item_count().saturating_sub(1);
        state.invalidate_current();
        state.clamp_selection(remaining);
        state.set_notification(NotificationKind::Success, format!("Deleted {item}"));
    } else {
        let message = bridge
            .last_error()
            .unwrap_or_else(|| format!("Failed to delete {item}"));
        tracing::warn!(?view, item, error = %message, "delete failed");
        state.set_notification(NotificationKind::Error, message);
    }
}

// ---- add form -------------------------------------------------------------

fn handle_form_key<B: Bridge + ?Sized>(state: &mut TuiState, bridge: &mut B, key: KeyEvent) {
    let Some(form) = state.add_form_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => state.close_add_form(),
        KeyCode::Tab => form.tab(),
        KeyCode::Up => form.cycle_focus(false),
        KeyCode::Down => form.cycle_focus(true),
        KeyCode::Left => form.move_between_buttons(false),
        KeyCode::Right => form.move_between_buttons(true),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Enter => match form.enter_action() {
            FormAction::Cancel => state.close_add_form(),
            FormAction::Submit => submit_form(state, bridge),
        },
        _ => {
            if let Some(c) = key.text_char() {
                form.insert_char(c);
            }
        }
    }
}

fn submit_form<B: Bridge + ?Sized>(state: &mut TuiState, bridge: &mut B) {
    let Some(form) = state.add_form_mut() else {
        return;
    };
    if let Err(message) = form.validate() {
        form.set_error(message);
        return;
    }

    let target = form.target();
    let first = form.value(0).to_string();
    let second = form.value(1).to_string();
    let added = match target {
        View::PathView => bridge.add_path(&first),
        View::AliasView => bridge.add_alias(&first, &second),
        View::ConstantsView => bridge.add_constant(&first, &second),
        _ => false,
    };

    if added {
        tracing::info!(view = ?target, name = %first, "item added");
        state.close_add_form();
        state.invalidate_current();
        state.set_notification(NotificationKind::Success, format!("Added {first}"));
    } else {
        let message = bridge
            .last_error()
            .unwrap_or_else(|| format!("Failed to add {first}"));
        tracing::warn!(view = ?target, error = %message, "add failed");
        if let Some(form) = state.add_form_mut() {
            form.set_error(message);
        }
    }
}
