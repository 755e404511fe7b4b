//! Anchor-cell index over a placed-image list.
//!
//! Built once from the caller-supplied list and queried per visible tile.
//! The index stores list positions, not owned copies — the caller's list
//! stays the single owner of the images. It is never mutated in place:
//! when the list changes, the session builds a fresh index.

use std::collections::HashMap;

use crate::types::{Cell, PlacedImage};

/// Mapping from anchor cell to the positions of all images anchored there.
#[derive(Debug, Clone, Default)]
pub struct PlacementIndex {
    by_anchor: HashMap<Cell, Vec<usize>>,
}

impl PlacementIndex {
    /// Group a placement list by anchor cell.
    ///
    /// Multiple images may share a cell; their positions append in input
    /// order, so lookups preserve the original sequence.
    pub fn build(images: &[PlacedImage]) -> Self {
        let mut by_anchor: HashMap<Cell, Vec<usize>> = HashMap::new();
        for (idx, image) in images.iter().enumerate() {
            by_anchor.entry(image.anchor).or_default().push(idx);
        }
        Self { by_anchor }
    }

    /// Positions of the images anchored at `cell`, in input order.
    /// Empty for unoccupied cells.
    pub fn anchored_at(&self, cell: Cell) -> &[usize] {
        self.by_anchor.get(&cell).map_or(&[], Vec::as_slice)
    }

    /// Resolve the images anchored at `cell` against the list the index
    /// was built from, in input order.
    pub fn images_at<'a>(&self, images: &'a [PlacedImage], cell: Cell) -> Vec<&'a PlacedImage> {
        self.anchored_at(cell)
            .iter()
            .filter_map(|&idx| images.get(idx))
            .collect()
    }

    /// Number of occupied anchor cells.
    pub fn occupied_cells(&self) -> usize {
        self.by_anchor.len()
    }

    /// Whether no image is anchored anywhere.
    pub fn is_empty(&self) -> bool {
        self.by_anchor.is_empty()
    }
}
