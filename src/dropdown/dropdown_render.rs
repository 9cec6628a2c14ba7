//! Dropdown popup rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::dropdown_state::{SuggestionItem, visible_count};
use crate::layout::{LayoutRegions, Region};
use crate::widgets::popup;

const MIN_POPUP_WIDTH: u16 = 16;
const POPUP_BORDER: u16 = 2;
// marker column ("► ") plus one trailing space
const ENTRY_PADDING: u16 = 3;
const POPUP_OFFSET_X: u16 = 1;

/// Render the dropdown below `anchor` and record its entry regions
///
/// `anchor` is the container as tall as it is currently rendered. When there
/// is not enough room below it the popup flips above.
pub fn render_dropdown(
    frame: &mut Frame,
    anchor: Rect,
    suggestions: &[SuggestionItem],
    highlighted: Option<usize>,
    regions: &mut LayoutRegions,
) {
    let count = visible_count(suggestions.len());
    if count == 0 {
        return;
    }

    let widest = suggestions
        .iter()
        .take(count)
        .map(|s| s.label.width())
        .max()
        .unwrap_or(0);
    let widest = u16::try_from(widest).unwrap_or(u16::MAX);
    let popup_width = widest
        .saturating_add(ENTRY_PADDING + POPUP_BORDER)
        .max(MIN_POPUP_WIDTH);
    let popup_height = count as u16 + POPUP_BORDER;

    let bounds = frame.area();
    let mut popup_area = popup::popup_below_anchor(anchor, popup_width, popup_height, POPUP_OFFSET_X, bounds);
    if popup_area.height < popup_height && anchor.y > popup_area.height {
        popup_area = popup::popup_above_anchor(anchor, popup_width, popup_height, POPUP_OFFSET_X);
    }
    let popup_area = popup_area.intersection(bounds);
    if popup_area.height <= POPUP_BORDER || popup_area.width <= POPUP_BORDER {
        return;
    }

    let items: Vec<ListItem> = suggestions
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, suggestion)| {
            let line = if Some(i) == highlighted {
                Line::from(Span::styled(
                    format!("► {} ", suggestion.label),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {} ", suggestion.label),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, popup_area);

    regions.push(Region::Dropdown, popup_area);
    let rows = (popup_area.height - POPUP_BORDER) as usize;
    for i in 0..count.min(rows) {
        regions.push(
            Region::DropdownItem(i),
            Rect {
                x: popup_area.x + 1,
                y: popup_area.y + 1 + i as u16,
                width: popup_area.width - POPUP_BORDER,
                height: 1,
            },
        );
    }
}
