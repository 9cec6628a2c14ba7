//! Pure placement of chips and the input field
//!
//! Chips flow left to right and wrap at the container's inner width. The
//! input field takes the rest of the last row when at least
//! [`MIN_INPUT_WIDTH`] cells are left, otherwise it starts a new row.

use ratatui::layout::Rect;

use crate::selection::ChipId;

pub const MIN_INPUT_WIDTH: u16 = 12;
const CHIP_GAP: u16 = 1;
// top and bottom border of the container block
const BORDER_ROWS: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipLayout {
    pub chips: Vec<(ChipId, Rect)>,
    pub input: Rect,
    /// Content rows including the input row
    pub rows: u16,
}

impl ChipLayout {
    /// Height of the bordered container holding this layout
    pub fn rendered_height(&self) -> u16 {
        self.rows.saturating_add(BORDER_ROWS)
    }
}

/// Lay out chips of the given widths inside `inner`
///
/// Only `inner.x`, `inner.y` and `inner.width` are used; the layout grows
/// downwards as far as it needs to.
pub fn layout_chips(inner: Rect, chips: impl IntoIterator<Item = (ChipId, u16)>) -> ChipLayout {
    let right = inner.x.saturating_add(inner.width);
    let mut placed = Vec::new();
    let mut x = inner.x;
    let mut row: u16 = 0;

    for (id, width) in chips {
        let width = width.min(inner.width);
        if x > inner.x && x.saturating_add(width) > right {
            row += 1;
            x = inner.x;
        }
        placed.push((id, Rect::new(x, inner.y + row, width, 1)));
        x = x.saturating_add(width).saturating_add(CHIP_GAP);
    }

    let remaining = right.saturating_sub(x);
    if x > inner.x && remaining < MIN_INPUT_WIDTH.min(inner.width) {
        row += 1;
        x = inner.x;
    }
    let input = Rect::new(x, inner.y + row, right.saturating_sub(x), 1);

    ChipLayout {
        chips: placed,
        input,
        rows: row + 1,
    }
}

#[cfg(test)]
#[path = "chip_layout_tests.rs"]
mod chip_layout_tests;
