use serde::{Deserialize, Serialize};

/// Separator used by [`SelectionList::to_delimited_string`]
pub const SELECTION_DELIMITER: &str = ",";

/// Stable identifier of a rendered chip
///
/// Ids are allocated monotonically per list and never reused, so two chips
/// with the same label are still distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChipId(u64);

impl ChipId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// One selected item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionItem {
    pub label: String,
}

impl SelectionItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Insertion-ordered list of selected items
#[derive(Debug, Default)]
pub struct SelectionList {
    entries: Vec<(ChipId, SelectionItem)>,
    next_id: u64,
}

impl SelectionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item and return the id of its chip
    pub fn add(&mut self, label: impl Into<String>) -> ChipId {
        let id = ChipId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, SelectionItem::new(label)));
        id
    }

    /// Remove the item behind `id`
    ///
    /// Returns `None` and leaves the list untouched when the chip is unknown
    /// or was already removed.
    pub fn remove(&mut self, id: ChipId) -> Option<SelectionItem> {
        let position = self.position_of(id)?;
        let (_, item) = self.entries.remove(position);
        Some(item)
    }

    pub fn position_of(&self, id: ChipId) -> Option<usize> {
        self.entries.iter().position(|(chip, _)| *chip == id)
    }

    pub fn get(&self, id: ChipId) -> Option<&SelectionItem> {
        self.entries
            .iter()
            .find(|(chip, _)| *chip == id)
            .map(|(_, item)| item)
    }

    /// Read-only snapshot of the current selection
    pub fn items(&self) -> Vec<SelectionItem> {
        self.entries.iter().map(|(_, item)| item.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChipId, &SelectionItem)> {
        self.entries.iter().map(|(id, item)| (*id, item))
    }

    pub fn chip_ids(&self) -> Vec<ChipId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    /// Id of the most recently added chip that is still present
    pub fn last_id(&self) -> Option<ChipId> {
        self.entries.last().map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels joined with [`SELECTION_DELIMITER`], no trailing separator
    pub fn to_delimited_string(&self) -> String {
        self.entries
            .iter()
            .map(|(_, item)| item.label.as_str())
            .collect::<Vec<_>>()
            .join(SELECTION_DELIMITER)
    }
}
