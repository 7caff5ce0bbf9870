//! The add-task form: name, urgency and description fields plus a submit
//! button. Holds raw text only; nothing here is validated.

use crate::task::Urgency;

/// A small text editor with a cursor. Kept as `Vec<char>` so cursor moves
/// stay on character boundaries.
#[derive(Debug, Clone, Default)]
pub struct InputLine {
    buffer: Vec<char>,
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.chars().collect();
        self.cursor = self.buffer.len();
    }

    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Urgency,
    Description,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Name,
        FormField::Urgency,
        FormField::Description,
        FormField::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field, or `None` when focus should leave the form.
    pub fn next(self) -> Option<FormField> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<FormField> {
        self.index().checked_sub(1).map(|i| Self::ORDER[i])
    }

    pub fn first() -> FormField {
        Self::ORDER[0]
    }

    pub fn last() -> FormField {
        Self::ORDER[Self::ORDER.len() - 1]
    }
}

/// Snapshot of what the form holds at the moment it is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub urgency: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct AddForm {
    pub name: InputLine,
    pub urgency: Urgency,
    pub description: InputLine,
    pub focus: FormField,
}

impl AddForm {
    pub fn new(default_urgency: Urgency) -> Self {
        Self {
            name: InputLine::new(),
            urgency: default_urgency,
            description: InputLine::new(),
            focus: FormField::first(),
        }
    }

    pub fn values(&self) -> FormValues {
        FormValues {
            name: self.name.text(),
            urgency: self.urgency.as_str().to_string(),
            description: self.description.text(),
        }
    }

    /// Editor behind the focused field, if it is a text field.
    pub fn focused_input(&mut self) -> Option<&mut InputLine> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Urgency | FormField::Submit => None,
        }
    }
}

impl Default for AddForm {
    fn default() -> Self {
        Self::new(Urgency::Normal)
    }
}
