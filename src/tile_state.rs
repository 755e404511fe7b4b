//! Per-cell display state for the grid.
//!
//! The store is generated once per grid session and discarded wholesale
//! whenever the dimensions change — a store built for one set of
//! dimensions is never patched to fit another.

use crate::error::{Result, TileviewError};
use crate::types::{Cell, GridDimensions};

/// Display state of a single tile.
///
/// Only two states exist today; the enum is the extension point for
/// future per-tile states (ownership, pending purchase, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    /// Unselected: renders with a transparent/neutral fill.
    #[default]
    Default,
    /// Selected: renders with the highlight fill.
    Selected,
}

/// A `row_count × column_count` mapping from cell to [`TileState`].
#[derive(Debug, Clone)]
pub struct TileStateStore {
    states: Vec<TileState>,
    dims: GridDimensions,
}

impl TileStateStore {
    /// Build a store for the given dimensions with every cell defaulted.
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            states: vec![TileState::Default; dims.cell_count()],
            dims,
        }
    }

    /// The dimensions this store was generated for.
    #[inline]
    pub fn dims(&self) -> &GridDimensions {
        &self.dims
    }

    /// O(1) state lookup.
    ///
    /// # Errors
    /// `OutOfBounds` if the cell is outside the store's dimensions.
    pub fn get(&self, cell: Cell) -> Result<TileState> {
        self.states
            .get(self.index_of(cell)?)
            .copied()
            .ok_or_else(|| TileviewError::out_of_bounds(cell.row, cell.column))
    }

    /// Overwrite the state of one cell.
    ///
    /// # Errors
    /// `OutOfBounds` if the cell is outside the store's dimensions.
    pub fn set(&mut self, cell: Cell, state: TileState) -> Result<()> {
        let idx = self.index_of(cell)?;
        if let Some(slot) = self.states.get_mut(idx) {
            *slot = state;
        }
        Ok(())
    }

    fn index_of(&self, cell: Cell) -> Result<usize> {
        if !self.dims.contains(cell) {
            return Err(TileviewError::out_of_bounds(cell.row, cell.column));
        }
        Ok(cell.row as usize * self.dims.column_count as usize + cell.column as usize)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dims() -> GridDimensions {
        GridDimensions {
            column_count: 20,
            row_count: 50,
            tile_width: 20.0,
            tile_height: 30.0,
        }
    }

    #[test]
    fn fresh_store_is_all_default() {
        let store = TileStateStore::new(dims());
        for row in 0..50 {
            for column in 0..20 {
                assert_eq!(
                    store.get(Cell::new(row, column)).unwrap(),
                    TileState::Default
                );
            }
        }
    }

    #[test]
    fn get_outside_dims_fails() {
        let store = TileStateStore::new(dims());
        assert!(store.get(Cell::new(50, 0)).is_err());
        assert!(store.get(Cell::new(0, 20)).is_err());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut store = TileStateStore::new(dims());
        store.set(Cell::new(3, 5), TileState::Selected).unwrap();
        assert_eq!(store.get(Cell::new(3, 5)).unwrap(), TileState::Selected);
        assert_eq!(store.get(Cell::new(3, 6)).unwrap(), TileState::Default);
    }
}
