//! Mouse and wheel event handlers for `TileView`.
//!
//! All methods here are `pub(crate)` helpers called from the closures
//! registered in `mod.rs`. Pointer events outside the grid are silently
//! ignored: a click past the last row suppresses the selection rather
//! than surfacing an error.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use super::{DragState, SharedState, TileView, CLICK_DRAG_THRESHOLD};
#[cfg(target_arch = "wasm32")]
use crate::types::Cell;

#[cfg(target_arch = "wasm32")]
impl TileView {
    pub(crate) fn invoke_render_callback(callback: Option<Function>) {
        if let Some(callback) = callback {
            let _ = callback.call0(&JsValue::NULL);
        }
    }

    /// Map a screen position to the cell under it, if any.
    pub(crate) fn hit_test(s: &SharedState, x: f32, y: f32) -> Option<Cell> {
        let (world_x, world_y) = s.viewport.to_world(x, y);
        s.layout.pixel_to_cell(world_x, world_y).ok()
    }

    pub(crate) fn internal_mouse_down(state: &Rc<RefCell<SharedState>>, x: f32, y: f32) {
        let mut s = state.borrow_mut();
        s.drag = Some(DragState {
            last_x: x,
            last_y: y,
            moved: false,
        });
    }

    pub(crate) fn internal_mouse_move(state: &Rc<RefCell<SharedState>>, x: f32, y: f32) {
        let callback = {
            let mut s = state.borrow_mut();
            let Some(drag) = s.drag else {
                return;
            };

            let dx = x - drag.last_x;
            let dy = y - drag.last_y;
            let moved =
                drag.moved || dx.abs() > CLICK_DRAG_THRESHOLD || dy.abs() > CLICK_DRAG_THRESHOLD;
            s.drag = Some(DragState {
                last_x: x,
                last_y: y,
                moved,
            });
            if !moved {
                return;
            }

            // Screen deltas to world deltas; dragging right moves the
            // content right, so the offset decreases.
            let scale = s.viewport.scale;
            s.viewport.pan_by(-dx / scale, -dy / scale);
            s.needs_render = true;
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);
    }

    pub(crate) fn internal_mouse_up(state: &Rc<RefCell<SharedState>>, x: f32, y: f32) {
        let callback = {
            let mut s = state.borrow_mut();
            let Some(drag) = s.drag.take() else {
                return;
            };
            if drag.moved {
                // Drag settled; the last move already requested a repaint.
                return;
            }

            // A click: select the cell under the pointer. Misses outside
            // the grid are ignored.
            let Some(cell) = Self::hit_test(&s, x, y) else {
                return;
            };
            let dims = *s.layout.dims();
            if s.selection.select(cell, &dims).is_err() {
                return;
            }
            s.needs_render = true;
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);
    }

    pub(crate) fn internal_wheel(
        state: &Rc<RefCell<SharedState>>,
        delta_y: f64,
        x: f32,
        y: f32,
    ) {
        let callback = {
            let mut s = state.borrow_mut();
            if delta_y.abs() < f64::EPSILON {
                return;
            }
            // One zoom step per wheel tick; scrolling up zooms in.
            let direction: f32 = if delta_y < 0.0 { 1.0 } else { -1.0 };
            let requested = s.viewport.scale + direction * s.config.zoom_step;

            // Anchor the zoom at the cursor: the world point under the
            // pointer stays put across the scale change.
            let (anchor_x, anchor_y) = s.viewport.to_world(x, y);
            let applied = s.viewport.zoom_to(requested);
            s.viewport.offset_x = anchor_x - x / applied;
            s.viewport.offset_y = anchor_y - y / applied;

            s.needs_render = true;
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);
    }
}
