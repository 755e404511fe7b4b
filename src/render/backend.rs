//! Render backend trait for pluggable rendering implementations.
//!
//! This module defines the `RenderBackend` trait that abstracts drawing
//! operations, allowing the immediate-mode Canvas 2D painter and the
//! virtualized DOM painter to be used interchangeably.

use crate::error::Result;
use crate::layout::{GridLayout, Viewport};
use crate::tile_state::TileState;
use crate::types::Cell;

/// Fill of a tile, derived from selection and stored tile state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillState {
    /// Transparent/neutral fill.
    Default,
    /// Highlight fill.
    Selected,
}

impl From<TileState> for FillState {
    fn from(state: TileState) -> Self {
        match state {
            TileState::Default => Self::Default,
            TileState::Selected => Self::Selected,
        }
    }
}

/// An image to draw with a tile, resolved from the placement list.
///
/// World-space extent; backends apply the viewport transform.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    /// Opaque source handle, used as the resolved-image cache key.
    pub source_ref: String,
    /// Width in world pixels (span × tile width).
    pub width: f32,
    /// Height in world pixels (span × tile height).
    pub height: f32,
}

/// Everything a backend needs to draw one visible tile.
///
/// Positions and sizes are world-space (scale 1.0 pixels); backends map
/// them to the screen through the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct TileDescriptor {
    /// Cell this tile renders.
    pub cell: Cell,
    /// X position (left edge) in world pixels.
    pub x: f32,
    /// Y position (top edge) in world pixels.
    pub y: f32,
    /// Tile width in world pixels.
    pub width: f32,
    /// Tile height in world pixels.
    pub height: f32,
    /// Fill derived from selection + tile state.
    pub fill: FillState,
    /// Images anchored at this cell, in placement-list order.
    pub images: Vec<ImageRef>,
}

/// Render parameters passed to the backend.
pub struct RenderParams<'a> {
    /// Visible tiles, ordered row-major over the visible range.
    pub tiles: &'a [TileDescriptor],
    /// Layout the descriptors were generated from.
    pub layout: &'a GridLayout,
    /// Current pan/zoom transform.
    pub viewport: &'a Viewport,
    /// Device pixel ratio.
    pub dpr: f32,
}

/// Trait for render backends.
///
/// Implementations handle the actual drawing for different rendering
/// technologies. Both must realize the identical visible set for
/// identical parameters; the shared descriptor list is what guarantees
/// that.
pub trait RenderBackend {
    /// Initialize the backend.
    fn init(&mut self) -> Result<()>;

    /// Resize the render surface.
    fn resize(&mut self, width: u32, height: u32, dpr: f32);

    /// Paint the visible tile set.
    fn render_visible(&mut self, params: &RenderParams) -> Result<()>;

    /// Drop cached resolved images; called when the placement list changes.
    fn invalidate_images(&mut self) {}

    /// Get the current width.
    fn width(&self) -> u32;

    /// Get the current height.
    fn height(&self) -> u32;
}
