//! Add-item form.
//!
//! Focus positions `0..field_count` are text fields, `field_count` is the
//! Cancel button and `field_count + 1` is Submit.

use crate::app::view::View;

/// One labeled text input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

impl FormField {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
        }
    }
}

/// What Enter does at the current focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    Cancel,
    Submit,
}

/// Modal form for adding a PATH entry, alias or constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddForm {
    target: View,
    fields: Vec<FormField>,
    focus: usize,
    error: Option<String>,
}

impl AddForm {
    /// Form for `view`, or `None` if the view does not support adding.
    #[must_use]
    pub fn for_view(view: View) -> Option<Self> {
        let fields = match view {
            View::PathView => vec![FormField::new("Directory")],
            View::AliasView => vec![FormField::new("Name"), FormField::new("Command")],
            View::ConstantsView => vec![FormField::new("Name"), FormField::new("Value")],
            _ => return None,
        };
        Some(Self {
            target: view,
            fields,
            focus: 0,
            error: None,
        })
    }

    #[must_use]
    pub fn target(&self) -> View {
        self.target
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.target {
            View::PathView => "Add PATH entry",
            View::AliasView => "Add alias",
            _ => "Add constant",
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    #[must_use]
    pub fn cancel_index(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn submit_index(&self) -> usize {
        self.fields.len() + 1
    }

    /// Focused text field, if focus is not on a button.
    #[must_use]
    pub fn focused_field(&self) -> Option<usize> {
        (self.focus < self.fields.len()).then_some(self.focus)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Tab: alternate between the two text fields of a two-field form.
    pub fn tab(&mut self) {
        if self.fields.len() == 2 {
            self.focus = if self.focus == 0 { 1 } else { 0 };
        }
    }

    /// Up/Down: cycle through fields and both buttons.
    pub fn cycle_focus(&mut self, forward: bool) {
        let positions = self.fields.len() + 2;
        self.focus = if forward {
            (self.focus + 1) % positions
        } else {
            (self.focus + positions - 1) % positions
        };
    }

    /// Left/Right: move between Cancel and Submit. No effect on a field.
    pub fn move_between_buttons(&mut self, right: bool) {
        if self.focus == self.cancel_index() && right {
            self.focus = self.submit_index();
        } else if self.focus == self.submit_index() && !right {
            self.focus = self.cancel_index();
        }
    }

    /// Enter on Cancel cancels; anywhere else submits.
    #[must_use]
    pub fn enter_action(&self) -> FormAction {
        if self.focus == self.cancel_index() {
            FormAction::Cancel
        } else {
            FormAction::Submit
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(idx) = self.focused_field() {
            self.fields[idx].value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(idx) = self.focused_field() {
            self.fields[idx].value.pop();
        }
    }

    /// Every field is required. Returns the message for the first empty one.
    pub fn validate(&self) -> Result<(), String> {
        match self.fields.iter().find(|f| f.value.trim().is_empty()) {
            Some(field) => Err(format!("{} is required", field.label)),
            None => Ok(()),
        }
    }

    /// Text of field `idx` exactly as typed, empty when absent.
    ///
    /// Whitespace only matters to [`validate`](Self::validate); the host
    /// receives the raw text.
    #[must_use]
    pub fn value(&self, idx: usize) -> &str {
        self.fields.get(idx).map_or("", |f| f.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_counts() {
        assert_eq!(AddForm::for_view(View::PathView).map(|f| f.field_count()), Some(1));
        assert_eq!(AddForm::for_view(View::AliasView).map(|f| f.field_count()), Some(2));
        assert!(AddForm::for_view(View::BackupsView).is_none());
    }

    #[test]
    fn test_tab_only_cycles_two_fields() {
        let mut form = AddForm::for_view(View::AliasView).unwrap();
        form.tab();
        assert_eq!(form.focus(), 1);
        form.tab();
        assert_eq!(form.focus(), 0);

        let mut single = AddForm::for_view(View::PathView).unwrap();
        single.tab();
        assert_eq!(single.focus(), 0);
    }

    #[test]
    fn test_focus_cycle_covers_buttons() {
        let mut form = AddForm::for_view(View::AliasView).unwrap();
        form.cycle_focus(true);
        form.cycle_focus(true);
        assert_eq!(form.focus(), form.cancel_index());
        assert_eq!(form.enter_action(), FormAction::Cancel);
        form.cycle_focus(true);
        assert_eq!(form.focus(), form.submit_index());
        form.cycle_focus(true);
        assert_eq!(form.focus(), 0);
        form.cycle_focus(false);
        assert_eq!(form.focus(), form.submit_index());
    }

    #[test]
    fn test_buttons_left_right() {
        let mut form = AddForm::for_view(View::PathView).unwrap();
        form.move_between_buttons(true);
        assert_eq!(form.focus(), 0);
        form.cycle_focus(true);
        form.move_between_buttons(true);
        assert_eq!(form.focus(), form.submit_index());
        form.move_between_buttons(true);
        assert_eq!(form.focus(), form.submit_index());
        form.move_between_buttons(false);
        assert_eq!(form.focus(), form.cancel_index());
    }

    #[test]
    fn test_typing_only_into_fields() {
        let mut form = AddForm::for_view(View::PathView).unwrap();
        form.insert_char('/');
        form.insert_char('x');
        form.backspace();
        assert_eq!(form.value(0), "/");
        form.cycle_focus(true);
        form.insert_char('y');
        assert_eq!(form.value(0), "/");
    }

    #[test]
    fn test_validation() {
        let mut form = AddForm::for_view(View::AliasView).unwrap();
        assert_eq!(form.validate(), Err("Name is required".to_string()));
        form.insert_char('g');
        assert_eq!(form.validate(), Err("Command is required".to_string()));
        form.tab();
        form.insert_char(' ');
        assert_eq!(form.validate(), Err("Command is required".to_string()));
        form.insert_char('x');
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(form.value(1), " x");
    }
}
