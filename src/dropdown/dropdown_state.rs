use serde::{Deserialize, Serialize};

/// Entries beyond this are not rendered
pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;

/// One candidate supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub label: String,
}

impl SuggestionItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl From<&str> for SuggestionItem {
    fn from(label: &str) -> Self {
        SuggestionItem::new(label)
    }
}

impl From<String> for SuggestionItem {
    fn from(label: String) -> Self {
        SuggestionItem::new(label)
    }
}

/// Whether the dropdown is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownVisibility {
    #[default]
    Closed,
    Open,
}

impl DropdownVisibility {
    pub fn from_state(autocomplete_enabled: bool, suggestion_count: usize) -> Self {
        if autocomplete_enabled && suggestion_count > 0 {
            DropdownVisibility::Open
        } else {
            DropdownVisibility::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == DropdownVisibility::Open
    }
}

/// Number of entries rendered for `len` suggestions
pub fn visible_count(len: usize) -> usize {
    len.min(MAX_VISIBLE_SUGGESTIONS)
}

/// Move the highlight down, wrapping to the first entry
pub fn next_highlight(current: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match current {
        None => Some(0),
        Some(i) => Some((i + 1) % count),
    }
}

/// Move the highlight up, wrapping to the last entry
pub fn prev_highlight(current: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match current {
        None | Some(0) => Some(count - 1),
        Some(i) => Some((i - 1).min(count - 1)),
    }
}
