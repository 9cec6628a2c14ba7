//! Typed hooks for hosts
//!
//! Hosts either register a plain filter callback with
//! `ChipInput::on_input_changed` or implement [`ChipInputObserver`] to follow
//! selection changes as well.

use crate::input::InputChanged;
use crate::selection::{ChipId, SelectionItem};

/// Callback invoked with every text change while autocomplete is listening
pub type InputChangedCallback = Box<dyn FnMut(&InputChanged)>;

/// Receives component notifications; every method defaults to a no-op
pub trait ChipInputObserver {
    fn on_selection_added(&mut self, _id: ChipId, _item: &SelectionItem) {}

    fn on_selection_removed(&mut self, _id: ChipId, _item: &SelectionItem) {}

    /// The host should compute suggestions for `event.value` and push them
    /// back with `ChipInput::set_suggestions`.
    fn on_suggestions_requested(&mut self, _event: &InputChanged) {}
}
