//! Layout module for tracking rendered component regions
//!
//! Every render records where chips, the input and dropdown entries were
//! drawn. `region_at()` maps a mouse position back to the element under it,
//! which is how click handlers find the chip or entry that was hit.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
