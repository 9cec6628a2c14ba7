use ratatui::crossterm::event::KeyEvent;
use ratatui::style::{Color, Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

const PLACEHOLDER: &str = "type and press Enter";

/// Whether the field currently holds text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    Idle,
    Composing,
}

/// Event passed to the host filter callback after the field text changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputChanged {
    pub value: String,
    pub key: KeyEvent,
}

/// Input field state
pub struct InputState {
    pub textarea: TextArea<'static>,
    focused: bool,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        let mut state = Self {
            textarea,
            focused: true,
        };
        state.sync_cursor_style();
        state
    }

    /// Current field text
    pub fn value(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn phase(&self) -> InputPhase {
        if self.value().is_empty() {
            InputPhase::Idle
        } else {
            InputPhase::Composing
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.sync_cursor_style();
    }

    /// Reset the field to idle
    pub fn clear(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
    }

    /// Clear the field and return what it held
    pub fn take(&mut self) -> String {
        let value = self.value().to_string();
        self.clear();
        value
    }

    /// Feed a keystroke to the text area, returning whether the text changed
    pub fn apply_key(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    fn sync_cursor_style(&mut self) {
        let cursor = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
