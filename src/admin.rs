//! Admin image-placement flow.
//!
//! The admin screen stages uploaded images, anchors them to grid cells,
//! and hands the final list to the host on save. File selection and the
//! object-URL lifecycle belong to the host's file collaborator; by the
//! time a source ref reaches the board it is already resolvable.

use crate::error::{Result, TileviewError};
use crate::types::{Cell, GridDimensions, PlacedImage};

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Working list of image placements being edited.
#[derive(Debug, Clone, Default)]
pub struct PlacementBoard {
    placements: Vec<PlacedImage>,
}

impl PlacementBoard {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a newly resolved image at the origin cell with unit span.
    /// Returns its position in the working list.
    pub fn stage(&mut self, source_ref: impl Into<String>) -> usize {
        self.placements
            .push(PlacedImage::new(source_ref, Cell::new(0, 0)));
        self.placements.len() - 1
    }

    /// Re-anchor a staged image.
    ///
    /// # Errors
    /// `OutOfBounds` if `anchor` lies outside `dims`, or `Other` if the
    /// position does not name a staged image.
    pub fn place(&mut self, position: usize, anchor: Cell, dims: &GridDimensions) -> Result<()> {
        if !dims.contains(anchor) {
            return Err(TileviewError::out_of_bounds(anchor.row, anchor.column));
        }
        let image = self
            .placements
            .get_mut(position)
            .ok_or_else(|| TileviewError::Other(format!("no staged image at {position}")))?;
        image.anchor = anchor;
        Ok(())
    }

    /// Set the tile-unit span of a staged image.
    ///
    /// # Errors
    /// `InvalidDimensions` for non-positive spans, `Other` for a bad
    /// position.
    pub fn set_span(&mut self, position: usize, span_width: f32, span_height: f32) -> Result<()> {
        if span_width <= 0.0 || span_height <= 0.0 {
            return Err(TileviewError::InvalidDimensions(format!(
                "span must be positive, got {span_width}x{span_height}"
            )));
        }
        let image = self
            .placements
            .get_mut(position)
            .ok_or_else(|| TileviewError::Other(format!("no staged image at {position}")))?;
        image.span_width = span_width;
        image.span_height = span_height;
        Ok(())
    }

    /// Remove a staged image.
    ///
    /// # Errors
    /// `Other` if the position does not name a staged image.
    pub fn remove(&mut self, position: usize) -> Result<PlacedImage> {
        if position >= self.placements.len() {
            return Err(TileviewError::Other(format!(
                "no staged image at {position}"
            )));
        }
        Ok(self.placements.remove(position))
    }

    /// The working list, in staging order.
    pub fn placements(&self) -> &[PlacedImage] {
        &self.placements
    }

    /// Snapshot the working list for the host's save callback.
    pub fn save(&self) -> Vec<PlacedImage> {
        self.placements.clone()
    }
}

/// WASM-exported admin screen wrapper: a [`PlacementBoard`] plus the
/// host's `onSave` callback.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct TileAdmin {
    board: PlacementBoard,
    dims: GridDimensions,
    on_save: Option<Function>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl TileAdmin {
    /// Admin session over the grid described by `config` (a JS object
    /// matching `GridConfig`; missing fields take defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TileAdmin, JsValue> {
        console_error_panic_hook::set_once();

        let config: crate::config::GridConfig = if config.is_undefined() || config.is_null() {
            crate::config::GridConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("config error: {e}")))?
        };
        let config = config.validate().map_err(JsValue::from)?;

        Ok(TileAdmin {
            board: PlacementBoard::new(),
            dims: config.dimensions(),
            on_save: None,
        })
    }

    /// Register the host's save callback.
    #[wasm_bindgen(js_name = "onSave")]
    pub fn set_on_save(&mut self, callback: Function) {
        self.on_save = Some(callback);
    }

    /// Stage a resolved image; returns its list position.
    pub fn stage(&mut self, source_ref: String) -> usize {
        self.board.stage(source_ref)
    }

    /// Anchor a staged image to a cell.
    pub fn place(&mut self, position: usize, row: u32, column: u32) -> Result<(), JsValue> {
        self.board
            .place(position, Cell::new(row, column), &self.dims)
            .map_err(JsValue::from)
    }

    /// Set a staged image's span in tile units.
    #[wasm_bindgen(js_name = "setSpan")]
    pub fn set_span(
        &mut self,
        position: usize,
        span_width: f32,
        span_height: f32,
    ) -> Result<(), JsValue> {
        self.board
            .set_span(position, span_width, span_height)
            .map_err(JsValue::from)
    }

    /// Remove a staged image.
    pub fn remove(&mut self, position: usize) -> Result<(), JsValue> {
        self.board.remove(position).map(|_| ()).map_err(JsValue::from)
    }

    /// Number of staged images.
    pub fn count(&self) -> usize {
        self.board.placements().len()
    }

    /// Invoke the host's `onSave` callback with the current list.
    pub fn save(&self) -> Result<(), JsValue> {
        let placements = self.board.save();
        if let Some(callback) = self.on_save.as_ref() {
            let value = serde_wasm_bindgen::to_value(&placements)
                .map_err(|e| JsValue::from_str(&format!("save error: {e}")))?;
            callback.call1(&JsValue::NULL, &value)?;
        }
        Ok(())
    }
}
