//! Component rendering
//!
//! Draws the container block, one chip per selection, the input field and,
//! when open, the dropdown. Hit regions are rebuilt on every call.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::component::ChipInput;
use crate::dropdown::render_dropdown;
use crate::layout::Region;

const DEFAULT_TITLE: &str = " Tags ";

impl ChipInput {
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.clear();
        if self.bounds != Some(frame.area()) {
            self.bounds = Some(frame.area());
            self.reposition();
        }

        let layout = self.current_layout();
        let scrolled = self.scrolled_rows(&layout);
        let area = Rect {
            height: self.rendered_height(),
            ..self.container
        }
        .intersection(frame.area());
        if area.is_empty() {
            return;
        }

        let border_color = if self.input.is_focused() {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.as_deref().unwrap_or(DEFAULT_TITLE))
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.regions.push(Region::Container, area);

        // Oldest rows scroll out of view when the frame is too short
        let content_top = self.container.y.saturating_add(1).saturating_add(scrolled);
        let clip = |rect: Rect| {
            if rect.y < content_top {
                return None;
            }
            let rect = Rect {
                y: rect.y - scrolled,
                ..rect
            };
            Some(rect.intersection(inner)).filter(|r| !r.is_empty())
        };

        for ((id, rect), (_, item)) in layout.chips.iter().zip(self.selections.iter()) {
            let Some(rect) = clip(*rect) else {
                continue;
            };
            let chip = Paragraph::new(Line::from(self.theme.chip_spans(&item.label)));
            frame.render_widget(chip, rect);
            self.regions.push(Region::Chip(*id), rect);
        }

        if let Some(rect) = clip(layout.input) {
            frame.render_widget(&self.input.textarea, rect);
            self.regions.push(Region::Input, rect);
        }

        if self.state.dropdown_visibility().is_open() {
            let anchor = Rect {
                height: self.state.dropdown_top.saturating_sub(self.container.y),
                ..self.container
            };
            render_dropdown(
                frame,
                anchor,
                &self.state.suggestions,
                self.state.highlighted,
                &mut self.regions,
            );
        }
    }
}
