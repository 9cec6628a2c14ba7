//! Dropdown view
//!
//! Suggestion data is supplied wholesale by the host. The dropdown is open
//! only while autocomplete is enabled and that data is non-empty.

mod dropdown_render;
mod dropdown_state;

pub use dropdown_render::render_dropdown;
pub use dropdown_state::{
    DropdownVisibility, MAX_VISIBLE_SUGGESTIONS, SuggestionItem, next_highlight, prev_highlight,
    visible_count,
};
