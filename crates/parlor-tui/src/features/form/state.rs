//! Form feature state.

use parlor_core::auth::{Credentials, Field, ValidationErrors};

/// A single-line text input with a character-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct FieldInput {
    value: String,
    /// Cursor position in characters (0..=char count).
    cursor: usize,
}

impl FieldInput {
    /// Returns the current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte offset corresponding to the cursor.
    fn byte_cursor(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Inserts a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_cursor();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_cursor();
        self.value.remove(at);
    }

    /// Deletes the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let at = self.byte_cursor();
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Kills from the start of the line to the cursor (readline Ctrl+U).
    pub fn kill_to_start(&mut self) {
        let at = self.byte_cursor();
        self.value.replace_range(..at, "");
        self.cursor = 0;
    }

    /// Kills from the cursor to the end of the line (readline Ctrl+K).
    pub fn kill_to_end(&mut self) {
        let at = self.byte_cursor();
        self.value.truncate(at);
    }
}

/// Sign-in form state: two fields, focus, per-field errors, submit gate.
#[derive(Debug, Clone)]
pub struct FormState {
    pub email: FieldInput,
    pub password: FieldInput,
    /// Which field has keyboard focus.
    pub focus: Field,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    /// True while a sign-in task is pending; further submits are ignored.
    pub submitting: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            email: FieldInput::default(),
            password: FieldInput::default(),
            focus: Field::Email,
            email_error: None,
            password_error: None,
            submitting: false,
        }
    }
}

impl FormState {
    /// Returns the focused field's input.
    pub fn focused_mut(&mut self) -> &mut FieldInput {
        match self.focus {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    /// Moves focus to the other field.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Email => Field::Password,
            Field::Password => Field::Email,
        };
    }

    /// Snapshot of the entered credentials.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        }
    }

    /// Clears all displayed field errors.
    ///
    /// Called at the start of every submission so stale errors from a
    /// prior attempt never survive into a new one.
    pub fn clear_errors(&mut self) {
        self.email_error = None;
        self.password_error = None;
    }

    /// Maps validation violations onto their fields for inline display.
    pub fn set_errors(&mut self, errors: &ValidationErrors) {
        self.email_error = errors.for_field(Field::Email).map(str::to_string);
        self.password_error = errors.for_field(Field::Password).map(str::to_string);
    }

    /// Returns the displayed error for a field, if any.
    pub fn error_for(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => self.email_error.as_deref(),
            Field::Password => self.password_error.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cursor editing stays on character boundaries for multibyte input.
    #[test]
    fn test_field_input_multibyte_editing() {
        let mut input = FieldInput::default();
        for c in "joão".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "joão");

        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "joo");

        input.move_home();
        input.delete();
        assert_eq!(input.value(), "oo");
    }

    /// Line kills behave like readline.
    #[test]
    fn test_field_input_kills() {
        let mut input = FieldInput::default();
        for c in "ana@example.com".chars() {
            input.insert(c);
        }

        input.move_home();
        for _ in 0..3 {
            input.move_right();
        }
        input.kill_to_end();
        assert_eq!(input.value(), "ana");

        input.kill_to_start();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    /// Focus cycles between the two fields.
    #[test]
    fn test_focus_cycle() {
        let mut form = FormState::default();
        assert_eq!(form.focus, Field::Email);
        form.cycle_focus();
        assert_eq!(form.focus, Field::Password);
        form.cycle_focus();
        assert_eq!(form.focus, Field::Email);
    }
}
