//! Viewport state management for panning and zoom.

use super::GridLayout;

/// Half-open cell index ranges intersecting the viewport.
///
/// `row_start..row_end` and `col_start..col_end`; both empty ranges when
/// the viewport and the grid are disjoint. This is the virtualization
/// mechanism: renderers iterate only these indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    /// First visible row.
    pub row_start: u32,
    /// One past the last visible row.
    pub row_end: u32,
    /// First visible column.
    pub col_start: u32,
    /// One past the last visible column.
    pub col_end: u32,
}

impl VisibleRange {
    /// A range containing no cells.
    pub const EMPTY: Self = Self {
        row_start: 0,
        row_end: 0,
        col_start: 0,
        col_end: 0,
    };

    /// Whether no cells are visible.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.row_start >= self.row_end || self.col_start >= self.col_end
    }

    /// Visible rows as an iterator-friendly range.
    #[inline]
    pub fn rows(&self) -> std::ops::Range<u32> {
        self.row_start..self.row_end
    }

    /// Visible columns as an iterator-friendly range.
    #[inline]
    pub fn cols(&self) -> std::ops::Range<u32> {
        self.col_start..self.col_end
    }

    /// Number of visible cells.
    pub fn cell_count(&self) -> usize {
        (self.row_end - self.row_start) as usize * (self.col_end - self.col_start) as usize
    }
}

/// Viewport state — the pan/zoom transform applied to the virtual canvas.
///
/// `offset_x`/`offset_y` are the world coordinates of the viewport's
/// top-left corner. They are deliberately unconstrained: panning past the
/// content edges is allowed, and only the scale is clamped.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Horizontal world offset of the viewport origin.
    pub offset_x: f32,
    /// Vertical world offset of the viewport origin.
    pub offset_y: f32,
    /// Viewport width in logical pixels.
    pub width: f32,
    /// Viewport height in logical pixels.
    pub height: f32,
    /// Zoom scale factor (1.0 = one tile at its configured pixel size).
    pub scale: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl Viewport {
    /// Viewport at the origin with the given size and zoom bounds.
    pub fn new(width: f32, height: f32, min_zoom: f32, max_zoom: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            width,
            height,
            scale: 1.0f32.max(min_zoom).min(max_zoom),
            min_zoom,
            max_zoom,
        }
    }

    /// Lower zoom bound.
    #[inline]
    pub fn min_zoom(&self) -> f32 {
        self.min_zoom
    }

    /// Upper zoom bound.
    #[inline]
    pub fn max_zoom(&self) -> f32 {
        self.max_zoom
    }

    /// Set the scale, clamped into `[min_zoom, max_zoom]`. Returns the
    /// scale actually applied.
    ///
    /// Zoom stepping is the caller's concern — the controller only
    /// enforces the bound, so requests far outside the range land exactly
    /// on it (e.g. `zoom_to(999.0)` with a max of 10 yields 10).
    pub fn zoom_to(&mut self, requested_scale: f32) -> f32 {
        let requested = if requested_scale.is_finite() {
            requested_scale
        } else {
            self.scale
        };
        self.scale = requested.max(self.min_zoom).min(self.max_zoom);
        self.scale
    }

    /// Pan by world-space deltas. No bounds clamping: dragging past the
    /// content edges is allowed.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Resize the viewport (logical pixels).
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Scale that fits the whole grid into a canvas. Callers clamp the
    /// result into their zoom bounds; applied once at session start.
    pub fn fit_scale(canvas_width: f32, canvas_height: f32, layout: &GridLayout) -> f32 {
        let content_w = layout.content_width();
        let content_h = layout.content_height();
        if content_w <= 0.0 || content_h <= 0.0 {
            return 1.0;
        }
        (canvas_width / content_w).min(canvas_height / content_h)
    }

    /// Reset the scale to fit the whole grid, clamped, and return it.
    pub fn fit_to_content(&mut self, layout: &GridLayout) -> f32 {
        let fit = Self::fit_scale(self.width, self.height, layout);
        self.zoom_to(fit)
    }

    /// Convert world coordinates to screen coordinates.
    #[inline]
    pub fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (
            (x - self.offset_x) * self.scale,
            (y - self.offset_y) * self.scale,
        )
    }

    /// Convert screen coordinates to world coordinates.
    #[inline]
    pub fn to_world(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (
            screen_x / self.scale + self.offset_x,
            screen_y / self.scale + self.offset_y,
        )
    }

    /// Cell indices intersecting the current viewport rectangle.
    ///
    /// The world-space window is `[offset, offset + size / scale)`; cells
    /// are included when any part of them falls inside it. A viewport
    /// fully containing the grid yields the full extent; a disjoint one
    /// yields an empty range.
    ///
    /// The casts are safe: every operand is floored/ceiled non-negative
    /// and bounded by the grid extent before conversion.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn visible_range(&self, layout: &GridLayout) -> VisibleRange {
        let dims = layout.dims();
        if dims.row_count == 0 || dims.column_count == 0 || self.scale <= 0.0 {
            return VisibleRange::EMPTY;
        }

        let world_w = self.width / self.scale;
        let world_h = self.height / self.scale;
        let right = self.offset_x + world_w;
        let bottom = self.offset_y + world_h;

        // Disjoint on either axis means nothing to draw.
        if right <= 0.0
            || bottom <= 0.0
            || self.offset_x >= layout.content_width()
            || self.offset_y >= layout.content_height()
        {
            return VisibleRange::EMPTY;
        }

        let col_start = (self.offset_x / dims.tile_width).floor().max(0.0) as u32;
        let row_start = (self.offset_y / dims.tile_height).floor().max(0.0) as u32;
        let col_end = ((right / dims.tile_width).ceil().max(0.0) as u32).min(dims.column_count);
        let row_end = ((bottom / dims.tile_height).ceil().max(0.0) as u32).min(dims.row_count);

        VisibleRange {
            row_start: row_start.min(row_end),
            row_end,
            col_start: col_start.min(col_end),
            col_end,
        }
    }
}
