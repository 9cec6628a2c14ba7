//! Chip styling
//!
//! [`StyleOptions`] mirrors the options a host passes to `apply_style`;
//! [`ChipTheme`] is the resolved, per-instance presentation that the renderer
//! reads. Options are applied in a fixed order (color, outlined, rounded,
//! filled), so `filled` wins when both visual modes are requested.

use std::str::FromStr;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};
use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

use crate::error::ChipInputError;

const DEFAULT_CHIP_FG: Color = Color::White;
const DEFAULT_CHIP_BG: Color = Color::Blue;

/// Cells taken by the two chip edges
pub const CHIP_EDGE_WIDTH: u16 = 2;

/// Styling options accepted by `ChipInput::apply_style`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub outlined: bool,
    pub filled: bool,
    pub background: Option<String>,
    pub color: Option<String>,
    pub rounded: bool,
    pub radius: Option<u16>,
    pub outline_width: Option<u16>,
    pub outline_style: Option<String>,
}

/// Glyph family used for outlined chip edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlineStyle {
    #[default]
    Solid,
    Dashed,
    Double,
    Thick,
}

impl FromStr for OutlineStyle {
    type Err = ChipInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(OutlineStyle::Solid),
            "dashed" | "dotted" => Ok(OutlineStyle::Dashed),
            "double" => Ok(OutlineStyle::Double),
            "thick" => Ok(OutlineStyle::Thick),
            _ => Err(ChipInputError::InvalidOutlineStyle(s.to_string())),
        }
    }
}

impl OutlineStyle {
    fn edges(self, rounded: bool) -> (&'static str, &'static str) {
        match self {
            OutlineStyle::Solid if rounded => ("(", ")"),
            OutlineStyle::Solid => ("[", "]"),
            OutlineStyle::Dashed => ("¦", "¦"),
            OutlineStyle::Double => ("«", "»"),
            OutlineStyle::Thick => ("▐", "▌"),
        }
    }
}

/// How a chip body is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipFill {
    Filled {
        background: Color,
    },
    Outlined {
        outline: Color,
        style: OutlineStyle,
        width: u16,
    },
}

/// Resolved chip presentation owned by one component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipTheme {
    pub color: Color,
    pub fill: ChipFill,
    pub radius: u16,
}

impl Default for ChipTheme {
    fn default() -> Self {
        ChipTheme {
            color: DEFAULT_CHIP_FG,
            fill: ChipFill::Filled {
                background: DEFAULT_CHIP_BG,
            },
            radius: 0,
        }
    }
}

fn parse_color(option: &'static str, value: &str) -> Result<Color, ChipInputError> {
    Color::from_str(value.trim()).map_err(|_| ChipInputError::InvalidColor {
        option,
        value: value.to_string(),
    })
}

impl ChipTheme {
    /// Build a theme from `options` on top of the defaults
    pub fn from_options(options: &StyleOptions) -> Result<Self, ChipInputError> {
        let mut theme = ChipTheme::default();
        theme.apply(options)?;
        Ok(theme)
    }

    /// Apply `options` in place
    ///
    /// Every option is validated before anything is written, so a bad value
    /// leaves the theme unchanged.
    pub fn apply(&mut self, options: &StyleOptions) -> Result<(), ChipInputError> {
        let color = options
            .color
            .as_deref()
            .map(|value| parse_color("color", value))
            .transpose()?;
        let background = options
            .background
            .as_deref()
            .map(|value| parse_color("background", value))
            .transpose()?;
        let outline_style = options
            .outline_style
            .as_deref()
            .map(OutlineStyle::from_str)
            .transpose()?;

        let mut next = *self;

        if let Some(color) = color {
            next.color = color;
        }

        if options.outlined {
            next.fill = ChipFill::Outlined {
                outline: background.unwrap_or(next.color),
                style: outline_style.unwrap_or_default(),
                width: options.outline_width.unwrap_or(1),
            };
        }

        if options.rounded {
            if let Some(radius) = options.radius {
                next.radius = radius;
            }
        }

        if options.filled {
            let background = match (background, next.fill) {
                (Some(bg), _) => bg,
                (None, ChipFill::Filled { background }) => background,
                (None, ChipFill::Outlined { .. }) => DEFAULT_CHIP_BG,
            };
            next.fill = ChipFill::Filled { background };
        }

        *self = next;
        Ok(())
    }

    pub fn is_filled(&self) -> bool {
        matches!(self.fill, ChipFill::Filled { .. })
    }

    pub fn is_rounded(&self) -> bool {
        self.radius > 0
    }

    /// Rendered width of a chip holding `label`
    pub fn chip_width(&self, label: &str) -> u16 {
        u16::try_from(label.width())
            .unwrap_or(u16::MAX)
            .saturating_add(CHIP_EDGE_WIDTH)
    }

    /// Spans for one chip: left edge, label, right edge
    pub fn chip_spans(&self, label: &str) -> Vec<Span<'static>> {
        match self.fill {
            ChipFill::Filled { background } => {
                let body = Style::default().fg(self.color).bg(background);
                let (left, right) = if self.is_rounded() { ("(", ")") } else { (" ", " ") };
                vec![
                    Span::styled(left, body),
                    Span::styled(label.to_string(), body),
                    Span::styled(right, body),
                ]
            }
            ChipFill::Outlined {
                outline,
                style,
                width,
            } => {
                let (left, right) = if width == 0 {
                    (" ", " ")
                } else {
                    style.edges(self.is_rounded())
                };
                let mut edge = Style::default().fg(outline);
                if width > 1 {
                    edge = edge.add_modifier(Modifier::BOLD);
                }
                vec![
                    Span::styled(left, edge),
                    Span::styled(label.to_string(), Style::default().fg(self.color)),
                    Span::styled(right, edge),
                ]
            }
        }
    }
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod theme_tests;
