use serde::{Deserialize, Serialize};

use super::Cell;

/// An image anchored to a grid cell.
///
/// `source_ref` is an opaque handle (URI, object URL, data URL) resolved
/// by the host's file/image collaborator; the viewer never inspects it.
/// Spans are in tile units: a 10×15 span covers 10 columns and 15 rows
/// starting at the anchor's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedImage {
    /// Opaque image reference, owned by the caller-supplied list.
    pub source_ref: String,
    /// Cell at which the image's top-left corner sits.
    pub anchor: Cell,
    /// Horizontal extent in tile units.
    #[serde(default = "default_span")]
    pub span_width: f32,
    /// Vertical extent in tile units.
    #[serde(default = "default_span")]
    pub span_height: f32,
}

fn default_span() -> f32 {
    1.0
}

impl PlacedImage {
    /// A single-tile placement at the given anchor.
    pub fn new(source_ref: impl Into<String>, anchor: Cell) -> Self {
        Self {
            source_ref: source_ref.into(),
            anchor,
            span_width: 1.0,
            span_height: 1.0,
        }
    }

    /// A placement covering `span_width × span_height` tiles.
    pub fn with_span(
        source_ref: impl Into<String>,
        anchor: Cell,
        span_width: f32,
        span_height: f32,
    ) -> Self {
        Self {
            source_ref: source_ref.into(),
            anchor,
            span_width,
            span_height,
        }
    }
}
