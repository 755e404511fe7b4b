//! Tile descriptor generation tests
//!
//! The descriptor list is the single source both render backends consume,
//! so these tests are what pins "both backends paint the same visible
//! set" — any two backends given the same list realize the same frame.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use tileview::layout::{GridLayout, Viewport};
use tileview::placement_index::PlacementIndex;
use tileview::render::{visible_tiles, FillState, TileDescriptor};
use tileview::tile_state::TileStateStore;
use tileview::types::{Cell, GridDimensions, PlacedImage, SelectionState};

struct Session {
    layout: GridLayout,
    store: TileStateStore,
    viewport: Viewport,
    placements: Vec<PlacedImage>,
    index: PlacementIndex,
    selection: SelectionState,
}

impl Session {
    fn new(columns: u32, rows: u32, viewport_w: f32, viewport_h: f32) -> Self {
        let dims = GridDimensions {
            column_count: columns,
            row_count: rows,
            tile_width: 20.0,
            tile_height: 20.0,
        };
        Self {
            layout: GridLayout::new(dims).expect("valid test dimensions"),
            store: TileStateStore::new(dims),
            viewport: Viewport::new(viewport_w, viewport_h, 0.1, 10.0),
            placements: Vec::new(),
            index: PlacementIndex::default(),
            selection: SelectionState::default(),
        }
    }

    fn with_placements(mut self, placements: Vec<PlacedImage>) -> Self {
        self.index = PlacementIndex::build(&placements);
        self.placements = placements;
        self
    }

    fn tiles(&self) -> Vec<TileDescriptor> {
        visible_tiles(
            &self.layout,
            &self.viewport,
            &self.store,
            &self.index,
            &self.placements,
            self.selection,
        )
    }
}

// =============================================================================
// ORDERING AND COVERAGE
// =============================================================================

#[test]
fn test_descriptors_are_row_major_over_the_window() {
    let session = Session::new(100, 100, 100.0, 60.0);
    let tiles = session.tiles();

    // 100x60 window over 20px tiles: 3 rows x 5 columns
    assert_eq!(tiles.len(), 15);
    let cells: Vec<Cell> = tiles.iter().map(|t| t.cell).collect();
    assert_eq!(cells[0], Cell::new(0, 0));
    assert_eq!(cells[4], Cell::new(0, 4));
    assert_eq!(cells[5], Cell::new(1, 0));
    assert_eq!(cells[14], Cell::new(2, 4));
}

#[test]
fn test_off_screen_tiles_produce_no_descriptors() {
    let mut session = Session::new(200, 200, 400.0, 400.0);
    session.viewport.pan_by(1000.0, 1000.0);
    let tiles = session.tiles();

    assert_eq!(tiles.len(), 400, "a 20x20 window of a 200x200 grid");
    assert!(
        tiles.iter().all(|t| t.cell.row >= 50 && t.cell.column >= 50),
        "everything above/left of the offset is culled"
    );
}

#[test]
fn test_empty_viewport_produces_nothing() {
    let mut session = Session::new(10, 10, 400.0, 400.0);
    session.viewport.pan_by(-100_000.0, 0.0);
    assert!(session.tiles().is_empty());
}

// =============================================================================
// FILL DERIVATION
// =============================================================================

#[test]
fn test_selected_cell_is_highlighted_others_default() {
    let mut session = Session::new(10, 10, 400.0, 400.0);
    session.selection = SelectionState {
        selected: Some(Cell::new(2, 3)),
    };
    let tiles = session.tiles();

    let selected: Vec<&TileDescriptor> = tiles
        .iter()
        .filter(|t| t.fill == FillState::Selected)
        .collect();
    assert_eq!(selected.len(), 1, "exactly one highlighted tile");
    assert_eq!(selected[0].cell, Cell::new(2, 3));
}

#[test]
fn test_reselecting_moves_the_single_highlight() {
    let mut session = Session::new(10, 10, 400.0, 400.0);
    session.selection = SelectionState {
        selected: Some(Cell::new(3, 5)),
    };
    let before = session.tiles();
    assert!(before
        .iter()
        .any(|t| t.cell == Cell::new(3, 5) && t.fill == FillState::Selected));

    session.selection = SelectionState {
        selected: Some(Cell::new(7, 2)),
    };
    let after = session.tiles();
    let highlighted: Vec<Cell> = after
        .iter()
        .filter(|t| t.fill == FillState::Selected)
        .map(|t| t.cell)
        .collect();
    assert_eq!(highlighted, vec![Cell::new(7, 2)], "no residual highlight");
}

// =============================================================================
// IMAGE ATTACHMENT
// =============================================================================

#[test]
fn test_images_ride_on_their_anchor_descriptor() {
    let session = Session::new(100, 100, 2000.0, 2000.0).with_placements(vec![
        PlacedImage::with_span("123.jpeg", Cell::new(2, 3), 10.0, 15.0),
        PlacedImage::new("456.jpeg", Cell::new(20, 25)),
    ]);
    let tiles = session.tiles();

    let anchor = tiles.iter().find(|t| t.cell == Cell::new(2, 3)).unwrap();
    assert_eq!(anchor.images.len(), 1);
    assert_eq!(anchor.images[0].source_ref, "123.jpeg");
    assert_eq!(anchor.images[0].width, 200.0, "10 tiles * 20px");
    assert_eq!(anchor.images[0].height, 300.0, "15 tiles * 20px");

    let plain = tiles.iter().find(|t| t.cell == Cell::new(2, 4)).unwrap();
    assert!(plain.images.is_empty(), "span tiles carry no image ref");
}

#[test]
fn test_culled_anchor_keeps_its_images_out_of_the_frame() {
    let mut session = Session::new(100, 100, 400.0, 400.0).with_placements(vec![
        PlacedImage::new("far.jpeg", Cell::new(90, 90)),
    ]);
    session.viewport.pan_by(0.0, 0.0);
    let tiles = session.tiles();
    assert!(
        tiles.iter().all(|t| t.images.is_empty()),
        "an off-screen anchor contributes nothing"
    );
}

// =============================================================================
// BACKEND PARITY
// =============================================================================

#[test]
fn test_identical_viewport_state_yields_identical_descriptors() {
    let build = || {
        let mut session = Session::new(50, 50, 640.0, 480.0).with_placements(vec![
            PlacedImage::new("a.jpeg", Cell::new(5, 10)),
            PlacedImage::new("b.jpeg", Cell::new(15, 30)),
        ]);
        session.viewport.pan_by(123.0, 45.0);
        session.viewport.zoom_to(1.5);
        session.selection = SelectionState {
            selected: Some(Cell::new(8, 8)),
        };
        session.tiles()
    };

    // Two sessions with the same inputs: the canvas painter and the DOM
    // painter each consume one of these lists verbatim
    assert_eq!(build(), build());
}
