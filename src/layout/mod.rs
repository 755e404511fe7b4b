//! Layout engine for computing tile positions and viewport management.
//!
//! This module handles:
//! - Mapping between cell coordinates and world pixel coordinates
//! - Managing viewport state (pan offset, zoom scale, visible range)
//! - Hit testing screen positions against the grid

mod grid_layout;
mod viewport;

pub use grid_layout::{GridLayout, TileRect};
pub use viewport::{Viewport, VisibleRange};
