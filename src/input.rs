//! Input surface
//!
//! Single-line text field in front of which chips are laid out. Enter turns
//! the text into a chip; edit keystrokes are reported to the component so it
//! can forward them to the host filter callback.

mod input_state;

pub use input_state::{InputChanged, InputPhase, InputState};
