//! tileview - tile grid viewer for the web
//!
//! Renders a pannable, zoomable image-placement grid in the browser via
//! WebAssembly:
//! - Virtualized rendering: only tiles intersecting the viewport are drawn
//! - Two interchangeable backends (Canvas 2D, windowed DOM list)
//! - Images anchored to grid cells with tile-unit spans
//! - Single-cell selection with synchronous host notification
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { TileView } from 'tileview';
//! await init();
//! const viewer = new TileView(canvas, { columnCount: 100, rowCount: 100 }, dpr);
//! viewer.onTileSelected((row, column) => console.log(row, column));
//! viewer.loadPlacements(images);
//! viewer.render();
//! ```

// Core modules
pub mod admin;
pub mod config;
pub mod error;
pub mod layout;
pub mod placement_index;
pub mod tile_state;
pub mod types;

// Rendering modules
pub mod render;
pub mod viewer;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use admin::TileAdmin;
// Re-export the main viewer struct
#[cfg(target_arch = "wasm32")]
pub use viewer::TileView;

pub use types::*;

/// A grid session manifest: startup configuration plus the placed-image
/// list, as exchanged with the host over JSON.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionManifest {
    /// Startup parameters.
    pub config: config::GridConfig,
    /// Placed images, in placement order.
    pub placements: Vec<PlacedImage>,
}

impl SessionManifest {
    /// Validate the manifest: config invariants plus every anchor inside
    /// the grid.
    ///
    /// # Errors
    /// The first violation found, as a [`error::TileviewError`].
    pub fn validate(self) -> error::Result<Self> {
        let config = self.config.validate()?;
        let dims = config.dimensions();
        for image in &self.placements {
            if !dims.contains(image.anchor) {
                return Err(error::TileviewError::out_of_bounds(
                    image.anchor.row,
                    image.anchor.column,
                ));
            }
        }
        Ok(Self {
            config,
            placements: self.placements,
        })
    }
}

/// Parse and validate a session manifest from JSON.
///
/// # Errors
/// Returns an error if the JSON is malformed or the manifest is invalid.
pub fn parse_manifest(json: &str) -> error::Result<SessionManifest> {
    let manifest: SessionManifest = serde_json::from_str(json)?;
    manifest.validate()
}

/// Parse and validate a session manifest, returning it as a `JsValue`.
///
/// # Errors
/// Returns an error if the JSON is malformed or the manifest is invalid.
#[wasm_bindgen]
pub fn parse_manifest_to_js(json: &str) -> Result<JsValue, JsValue> {
    let manifest = parse_manifest(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&manifest)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
