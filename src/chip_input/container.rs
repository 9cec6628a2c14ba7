use std::collections::HashMap;

use ratatui::layout::Rect;

use crate::error::ChipInputError;

/// Smallest container that still fits a border and one row of content
pub const MIN_CONTAINER_WIDTH: u16 = 8;
pub const MIN_CONTAINER_HEIGHT: u16 = 3;

/// Where to mount a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerRef {
    Area(Rect),
    /// Name of a mount point registered in [`Mounts`]
    Selector(String),
}

impl From<Rect> for ContainerRef {
    fn from(area: Rect) -> Self {
        ContainerRef::Area(area)
    }
}

impl From<&str> for ContainerRef {
    fn from(selector: &str) -> Self {
        ContainerRef::Selector(selector.to_string())
    }
}

impl From<String> for ContainerRef {
    fn from(selector: String) -> Self {
        ContainerRef::Selector(selector)
    }
}

/// Named screen regions a host makes available for mounting
#[derive(Debug, Clone, Default)]
pub struct Mounts {
    points: HashMap<String, Rect>,
}

impl Mounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or move a mount point, returning the previous area
    pub fn insert(&mut self, name: impl Into<String>, area: Rect) -> Option<Rect> {
        self.points.insert(name.into(), area)
    }

    pub fn get(&self, name: &str) -> Option<Rect> {
        self.points.get(name).copied()
    }

    pub fn remove(&mut self, name: &str) -> Option<Rect> {
        self.points.remove(name)
    }
}

impl ContainerRef {
    /// Resolve to a concrete area, failing when it is unknown or too small
    pub fn resolve(&self, mounts: &Mounts) -> Result<Rect, ChipInputError> {
        let area = match self {
            ContainerRef::Area(area) => *area,
            ContainerRef::Selector(name) => mounts.get(name).ok_or_else(|| {
                ChipInputError::InvalidContainer(format!("no mount point named `{}`", name))
            })?,
        };
        validate_area(area)?;
        Ok(area)
    }
}

pub fn validate_area(area: Rect) -> Result<(), ChipInputError> {
    if area.width < MIN_CONTAINER_WIDTH || area.height < MIN_CONTAINER_HEIGHT {
        return Err(ChipInputError::InvalidContainer(format!(
            "area {}x{} is smaller than {}x{}",
            area.width, area.height, MIN_CONTAINER_WIDTH, MIN_CONTAINER_HEIGHT
        )));
    }
    Ok(())
}
