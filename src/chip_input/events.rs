use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::component::ChipInput;
use super::component_state::StatePatch;
use crate::dropdown::{next_highlight, prev_highlight, visible_count};
use crate::input::{InputChanged, InputPhase};
use crate::layout::{Region, region_at};

impl ChipInput {
    /// Handle a key press while the input is focused
    ///
    /// Returns true if the component consumed the key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Only process key press events (avoid duplicates)
        if key.kind != KeyEventKind::Press || !self.input.is_focused() {
            return false;
        }

        let open = self.dropdown_visibility().is_open();
        match key.code {
            KeyCode::Enter if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.commit_input();
                true
            }
            KeyCode::Esc if open => {
                self.close_dropdown();
                true
            }
            KeyCode::Down if open => {
                let count = visible_count(self.state.suggestions.len());
                let next = next_highlight(self.state.highlighted, count);
                self.transition(StatePatch::new().highlight(next));
                true
            }
            KeyCode::Up if open => {
                let count = visible_count(self.state.suggestions.len());
                let prev = prev_highlight(self.state.highlighted, count);
                self.transition(StatePatch::new().highlight(prev));
                true
            }
            KeyCode::Tab if open => {
                let index = self.state.highlighted.unwrap_or(0);
                self.select_suggestion(index);
                true
            }
            // Tab never reaches the single-line field
            KeyCode::Tab | KeyCode::BackTab => false,
            _ => {
                let changed = self.input.apply_key(key);
                if changed {
                    self.input_key_up(key);
                }
                changed
            }
        }
    }

    /// Handle a mouse event against the regions of the last render
    ///
    /// Returns true if the click landed on the component.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }

        let region = region_at(&self.regions, mouse.column, mouse.row);
        match region {
            Some(Region::Chip(id)) => {
                self.remove_selection(id);
                true
            }
            Some(Region::DropdownItem(index)) => {
                self.select_suggestion(index);
                true
            }
            Some(Region::Dropdown) => true,
            Some(Region::Input) | Some(Region::Container) => {
                self.close_dropdown();
                self.input.set_focused(true);
                true
            }
            None => {
                self.close_dropdown();
                self.input.set_focused(false);
                false
            }
        }
    }

    fn commit_input(&mut self) {
        if self.input.phase() == InputPhase::Idle {
            log::debug!("Enter on empty input ignored");
            return;
        }
        let label = self.input.take();
        self.add_selection(label);
    }

    /// Forward a text change to the host filter
    fn input_key_up(&mut self, key: KeyEvent) {
        if !self.state.autocomplete_enabled || !self.state.listener_attached {
            return;
        }
        if self.input.phase() == InputPhase::Idle {
            return;
        }

        self.reposition();
        let event = InputChanged {
            value: self.input.value().to_string(),
            key,
        };
        if let Some(observer) = self.observer.as_mut() {
            observer.on_suggestions_requested(&event);
        }
        match self.on_input_changed.as_mut() {
            Some(callback) => callback(&event),
            None => log::debug!("No filter callback registered, ignoring input change"),
        }
    }
}
