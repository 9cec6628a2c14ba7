use ratatui::layout::Rect;

use crate::selection::ChipId;

/// A clickable element of the rendered component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Container background (border and gaps between chips)
    Container,
    Chip(ChipId),
    Input,
    /// Dropdown frame, not an entry
    Dropdown,
    /// Dropdown entry by row index
    DropdownItem(usize),
}

/// Regions recorded during the last render, in draw order
#[derive(Debug, Default, Clone)]
pub struct LayoutRegions {
    regions: Vec<(Region, Rect)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, region: Region, area: Rect) {
        self.regions.push((region, area));
    }

    pub fn get(&self, region: Region) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, area)| *area)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &(Region, Rect)> {
        self.regions.iter()
    }

    pub fn chip_count(&self) -> usize {
        self.regions
            .iter()
            .filter(|(r, _)| matches!(r, Region::Chip(_)))
            .count()
    }

    pub fn dropdown_item_count(&self) -> usize {
        self.regions
            .iter()
            .filter(|(r, _)| matches!(r, Region::DropdownItem(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
