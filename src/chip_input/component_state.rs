use crate::dropdown::{DropdownVisibility, SuggestionItem, visible_count};

/// Mutable state of one component instance
///
/// Only ever replaced through [`ComponentState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentState {
    pub suggestions: Vec<SuggestionItem>,
    pub autocomplete_enabled: bool,
    /// Whether text changes are forwarded to the host filter
    pub listener_attached: bool,
    /// Screen row the dropdown starts at
    pub dropdown_top: u16,
    pub highlighted: Option<usize>,
}

/// Partial update; `None` fields are left as they are
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub suggestions: Option<Vec<SuggestionItem>>,
    pub autocomplete_enabled: Option<bool>,
    pub listener_attached: Option<bool>,
    pub dropdown_top: Option<u16>,
    pub highlighted: Option<Option<usize>>,
}

impl StatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suggestions(mut self, suggestions: Vec<SuggestionItem>) -> Self {
        self.suggestions = Some(suggestions);
        self
    }

    pub fn clear_suggestions(self) -> Self {
        self.suggestions(Vec::new())
    }

    pub fn autocomplete(mut self, enabled: bool) -> Self {
        self.autocomplete_enabled = Some(enabled);
        self
    }

    pub fn listener(mut self, attached: bool) -> Self {
        self.listener_attached = Some(attached);
        self
    }

    pub fn dropdown_top(mut self, top: u16) -> Self {
        self.dropdown_top = Some(top);
        self
    }

    pub fn highlight(mut self, highlighted: Option<usize>) -> Self {
        self.highlighted = Some(highlighted);
        self
    }
}

impl ComponentState {
    /// Apply `patch` and normalize the result
    ///
    /// With autocomplete off there is no data, no listener and no highlight.
    /// New suggestion data drops the highlight unless the same patch sets one,
    /// and a highlight past the visible entries is cleared.
    pub fn apply(mut self, patch: StatePatch) -> ComponentState {
        if let Some(enabled) = patch.autocomplete_enabled {
            self.autocomplete_enabled = enabled;
        }
        if let Some(suggestions) = patch.suggestions {
            self.suggestions = suggestions;
            self.highlighted = None;
        }
        if let Some(attached) = patch.listener_attached {
            self.listener_attached = attached;
        }
        if let Some(top) = patch.dropdown_top {
            self.dropdown_top = top;
        }
        if let Some(highlighted) = patch.highlighted {
            self.highlighted = highlighted;
        }

        if !self.autocomplete_enabled {
            self.suggestions.clear();
            self.listener_attached = false;
        }
        if self
            .highlighted
            .is_some_and(|i| i >= visible_count(self.suggestions.len()))
        {
            self.highlighted = None;
        }
        self
    }

    pub fn dropdown_visibility(&self) -> DropdownVisibility {
        DropdownVisibility::from_state(self.autocomplete_enabled, self.suggestions.len())
    }
}

#[cfg(test)]
#[path = "component_state_tests.rs"]
mod component_state_tests;
