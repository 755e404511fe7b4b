//! Single-cell selection state and its controller.

use crate::error::{Result, TileviewError};

use super::{Cell, GridDimensions};

/// The globally selected cell, if any. Exactly zero or one cell is
/// selected at a time; selecting a new cell replaces the old one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Currently selected cell.
    pub selected: Option<Cell>,
}

impl SelectionState {
    /// Whether the given cell is the selected one.
    #[inline]
    pub fn is_selected(&self, cell: Cell) -> bool {
        self.selected == Some(cell)
    }
}

/// Observer invoked synchronously with (row, column) on every successful
/// select, including reselecting the already-selected cell.
pub type SelectionObserver = Box<dyn FnMut(u32, u32)>;

/// Owns the session's [`SelectionState`] and notifies the host on change.
///
/// All mutation of the selection goes through this controller; renderers
/// only read the state it exposes.
#[derive(Default)]
pub struct SelectionController {
    state: SelectionState,
    observer: Option<SelectionObserver>,
}

impl SelectionController {
    /// Controller with an empty selection and no observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the host notification callback, replacing any prior one.
    pub fn set_observer(&mut self, observer: impl FnMut(u32, u32) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Select `cell`, replacing any prior selection unconditionally.
    ///
    /// Notifies the observer on every successful call — there is no
    /// dedup short-circuit for reselecting the same cell.
    ///
    /// # Errors
    /// `OutOfBounds` if the cell lies outside `dims`; the selection is
    /// left unchanged and the observer is not invoked.
    pub fn select(&mut self, cell: Cell, dims: &GridDimensions) -> Result<()> {
        if !dims.contains(cell) {
            return Err(TileviewError::out_of_bounds(cell.row, cell.column));
        }
        self.state.selected = Some(cell);
        if let Some(observer) = self.observer.as_mut() {
            observer(cell.row, cell.column);
        }
        Ok(())
    }

    /// Explicit deselect. Does not notify the observer.
    pub fn clear(&mut self) {
        self.state.selected = None;
    }

    /// Current selection state.
    #[inline]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Currently selected cell, if any.
    #[inline]
    pub fn selected(&self) -> Option<Cell> {
        self.state.selected
    }
}
