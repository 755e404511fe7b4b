//! Visible-set generation shared by both render backends.
//!
//! Pure derivation: visible range → ordered tile descriptors. Keeping
//! this out of the backends is what makes the two painters provably
//! paint the same set — each consumes the output of this module verbatim.

use crate::layout::{GridLayout, Viewport};
use crate::placement_index::PlacementIndex;
use crate::tile_state::TileStateStore;
use crate::types::{Cell, PlacedImage, SelectionState};

use super::backend::{FillState, ImageRef, TileDescriptor};

/// Derive drawable descriptors for every cell intersecting the viewport,
/// in row-major order.
///
/// Off-screen tiles are excluded entirely — on a 100×100 or larger grid
/// only the visible window is iterated. Selection overlays the stored
/// tile state: the selected cell is highlighted regardless of what the
/// store says.
pub fn visible_tiles(
    layout: &GridLayout,
    viewport: &Viewport,
    store: &TileStateStore,
    index: &PlacementIndex,
    placements: &[PlacedImage],
    selection: SelectionState,
) -> Vec<TileDescriptor> {
    let range = viewport.visible_range(layout);
    if range.is_empty() {
        return Vec::new();
    }

    let dims = *layout.dims();
    let mut tiles = Vec::with_capacity(range.cell_count());
    for row in range.rows() {
        for column in range.cols() {
            let cell = Cell::new(row, column);
            let rect = layout.cell_rect(cell);

            let fill = if selection.is_selected(cell) {
                FillState::Selected
            } else {
                store.get(cell).map(FillState::from).unwrap_or(FillState::Default)
            };

            let images = index
                .images_at(placements, cell)
                .into_iter()
                .map(|image| ImageRef {
                    source_ref: image.source_ref.clone(),
                    width: image.span_width * dims.tile_width,
                    height: image.span_height * dims.tile_height,
                })
                .collect();

            tiles.push(TileDescriptor {
                cell,
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                fill,
                images,
            });
        }
    }
    tiles
}
