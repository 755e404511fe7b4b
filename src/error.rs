//! Structured error types for tileview.
//!
//! Every fallible operation in the crate returns these instead of
//! `Result<T, String>`.

/// All errors that can occur in tileview configuration and rendering.
#[derive(Debug, thiserror::Error)]
pub enum TileviewError {
    /// Cell coordinates outside the current grid dimensions.
    #[error("cell out of bounds: row {row}, column {column}")]
    OutOfBounds {
        /// Requested row.
        row: u32,
        /// Requested column.
        column: u32,
    },

    /// Rejected grid-session parameters (non-positive tile size, bad zoom bounds).
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Malformed session configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Rendering error.
    #[error("render error: {0}")]
    Render(String),

    /// Manifest (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TileviewError>;

impl TileviewError {
    /// Out-of-bounds error for the given coordinates.
    pub fn out_of_bounds(row: u32, column: u32) -> Self {
        Self::OutOfBounds { row, column }
    }
}

impl From<String> for TileviewError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for TileviewError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<TileviewError> for wasm_bindgen::JsValue {
    fn from(e: TileviewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
