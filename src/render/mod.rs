//! Rendering engine with pluggable backends.
//!
//! This module provides:
//! - Backend-agnostic tile descriptors and the `RenderBackend` trait
//! - Pure visible-set generation shared by every backend
//! - Canvas 2D backend (immediate mode)
//! - Virtualized DOM backend (windowed list of positioned divs)

pub mod backend;
pub mod canvas;
pub mod colors;
pub mod descriptors;
pub mod dom_list;

// Re-export commonly used types
pub use backend::{FillState, ImageRef, RenderBackend, RenderParams, TileDescriptor};
pub use canvas::CanvasRenderer;
pub use colors::{palette, CssColor};
pub use descriptors::visible_tiles;
pub use dom_list::DomListRenderer;

use crate::error::Result;

/// Renderer enum wrapping the available backends, selected at session
/// configuration time.
pub enum Renderer {
    /// Immediate-mode Canvas 2D backend.
    Canvas(CanvasRenderer),
    /// Virtualized DOM-list backend.
    DomList(DomListRenderer),
}

impl Renderer {
    /// Delegate `init()` to the active backend.
    pub fn init(&mut self) -> Result<()> {
        match self {
            Self::Canvas(r) => r.init(),
            Self::DomList(r) => r.init(),
        }
    }

    /// Delegate `resize()` to the active backend.
    pub fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        match self {
            Self::Canvas(r) => r.resize(width, height, dpr),
            Self::DomList(r) => r.resize(width, height, dpr),
        }
    }

    /// Paint the visible tile set with the active backend.
    pub fn render_visible(&mut self, params: &RenderParams) -> Result<()> {
        match self {
            Self::Canvas(r) => r.render_visible(params),
            Self::DomList(r) => r.render_visible(params),
        }
    }

    /// Drop cached resolved images on the active backend.
    pub fn invalidate_images(&mut self) {
        match self {
            Self::Canvas(r) => r.invalidate_images(),
            Self::DomList(r) => r.invalidate_images(),
        }
    }

    /// Get current width.
    pub fn width(&self) -> u32 {
        match self {
            Self::Canvas(r) => r.width(),
            Self::DomList(r) => r.width(),
        }
    }

    /// Get current height.
    pub fn height(&self) -> u32 {
        match self {
            Self::Canvas(r) => r.height(),
            Self::DomList(r) => r.height(),
        }
    }
}
