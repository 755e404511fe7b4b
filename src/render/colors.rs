//! Color constants for grid rendering.
//!
//! Backend-agnostic CSS color strings, directly usable by Canvas 2D and
//! by DOM inline styles.

/// A CSS color string (e.g., "#FF0000", "rgba(0, 0, 0, 0)")
pub type CssColor = String;

/// Fill and stroke palette for the tile grid.
pub mod palette {
    /// Unselected tile fill — fully transparent so placed images show
    /// through the grid.
    pub const TILE_FILL: &str = "rgba(0,0,0,0)";

    /// Selected tile highlight fill.
    pub const SELECTED_FILL: &str = "pink";

    /// Tile border stroke.
    pub const TILE_STROKE: &str = "black";

    /// Board background behind the grid.
    pub const BOARD_BG: &str = "#FFFFFF";
}
