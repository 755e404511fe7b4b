//! Session configuration for the tile grid viewer.
//!
//! All knobs are static startup parameters: tile pixel size, grid extent,
//! and zoom bounds. A config is validated once when a grid session starts;
//! everything downstream may assume it is well-formed.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TileviewError};
use crate::types::GridDimensions;

/// Default tile width in pixels.
pub const DEFAULT_TILE_WIDTH: f32 = 20.0;

/// Default tile height in pixels.
pub const DEFAULT_TILE_HEIGHT: f32 = 20.0;

/// Default minimum zoom scale (content far enough out to see the whole grid).
pub const DEFAULT_MIN_ZOOM: f32 = 0.1;

/// Default maximum zoom scale.
pub const DEFAULT_MAX_ZOOM: f32 = 10.0;

/// Default zoom increment applied per wheel tick.
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;

/// Default grid extent (columns and rows).
pub const DEFAULT_GRID_EXTENT: u32 = 100;

/// Startup parameters for a grid session.
///
/// Zoom bounds are absolute scale factors: `scale == 1.0` renders one
/// tile at its configured pixel size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Number of columns in the grid.
    pub column_count: u32,
    /// Number of rows in the grid.
    pub row_count: u32,
    /// Width of a tile in pixels at scale 1.0.
    pub tile_width: f32,
    /// Height of a tile in pixels at scale 1.0.
    pub tile_height: f32,
    /// Minimum zoom scale.
    pub min_zoom: f32,
    /// Maximum zoom scale.
    pub max_zoom: f32,
    /// Zoom increment per wheel tick.
    pub zoom_step: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_count: DEFAULT_GRID_EXTENT,
            row_count: DEFAULT_GRID_EXTENT,
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl GridConfig {
    /// Validate the configuration, returning it unchanged on success.
    ///
    /// # Errors
    /// `InvalidDimensions` for non-positive or non-finite tile sizes,
    /// `Config` for inconsistent zoom bounds or a non-positive zoom step.
    pub fn validate(self) -> Result<Self> {
        if !self.tile_width.is_finite() || self.tile_width <= 0.0 {
            return Err(TileviewError::InvalidDimensions(format!(
                "tile width must be positive, got {}",
                self.tile_width
            )));
        }
        if !self.tile_height.is_finite() || self.tile_height <= 0.0 {
            return Err(TileviewError::InvalidDimensions(format!(
                "tile height must be positive, got {}",
                self.tile_height
            )));
        }
        if !self.min_zoom.is_finite() || self.min_zoom <= 0.0 {
            return Err(TileviewError::Config(format!(
                "minimum zoom must be positive, got {}",
                self.min_zoom
            )));
        }
        if !self.max_zoom.is_finite() || self.max_zoom < self.min_zoom {
            return Err(TileviewError::Config(format!(
                "maximum zoom must be >= minimum zoom, got {} < {}",
                self.max_zoom, self.min_zoom
            )));
        }
        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 {
            return Err(TileviewError::Config(format!(
                "zoom step must be positive, got {}",
                self.zoom_step
            )));
        }
        Ok(self)
    }

    /// The grid dimensions described by this configuration.
    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions {
            column_count: self.column_count,
            row_count: self.row_count,
            tile_width: self.tile_width,
            tile_height: self.tile_height,
        }
    }
}
