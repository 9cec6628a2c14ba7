//! Selection store
//!
//! Ordered list of the items the user has picked. Each chip gets a stable
//! [`ChipId`] when it is added, and removal is keyed by that id so a stale
//! chip reference can never remove the wrong entry.

mod selection_state;

pub use selection_state::{ChipId, SELECTION_DELIMITER, SelectionItem, SelectionList};
