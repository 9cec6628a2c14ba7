//! Chip/tag input widget with an optional autocomplete dropdown for ratatui
//! applications.
//!
//! ```no_run
//! use chipin::{ChipInput, Mounts, SuggestionItem};
//! use ratatui::layout::Rect;
//!
//! let mut tags = ChipInput::create(Rect::new(0, 0, 60, 5), &Mounts::new())?;
//! tags.enable_autocomplete(true);
//! tags.on_input_changed(|event| eprintln!("filter for {}", event.value));
//! tags.set_suggestions(vec![SuggestionItem::new("rust")]);
//! tags.add_selection("ratatui");
//! assert_eq!(tags.selections_as_delimited_string(), "ratatui");
//! # Ok::<(), chipin::ChipInputError>(())
//! ```

pub mod chip_input;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod input;
pub mod layout;
pub mod observer;
pub mod selection;
pub mod theme;
pub mod widgets;
pub mod word_list;

#[cfg(test)]
mod test_utils;

pub use chip_input::{ChipInput, ContainerRef, Mounts};
pub use dropdown::{DropdownVisibility, SuggestionItem};
pub use error::ChipInputError;
pub use input::InputChanged;
pub use observer::ChipInputObserver;
pub use selection::{ChipId, SelectionItem};
pub use theme::{ChipTheme, StyleOptions};
