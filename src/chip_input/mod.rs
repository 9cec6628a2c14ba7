//! The chip input component
//!
//! Ties the selection store, the input field and the dropdown together.
//! State changes go through [`ComponentState::apply`]; rendering lays the
//! chips out from scratch every frame and records hit regions for the next
//! mouse event.

mod chip_layout;
mod component;
mod component_state;
mod container;
mod events;
mod render;

pub use chip_layout::{ChipLayout, MIN_INPUT_WIDTH, layout_chips};
pub use component::ChipInput;
pub use component_state::{ComponentState, StatePatch};
pub use container::{ContainerRef, MIN_CONTAINER_HEIGHT, MIN_CONTAINER_WIDTH, Mounts};


#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
