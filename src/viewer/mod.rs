//! Main `TileView` struct - the primary entry point for the grid viewer.
//!
//! This module provides the WASM-exported `TileView` struct that handles:
//! - Configuring a grid session (dimensions, zoom bounds, tile size)
//! - Managing viewport state (pan offset, zoom scale)
//! - Coordinating descriptor generation and the active render backend
//! - Handling user interactions (click-select, drag-pan, wheel-zoom)
//!
//! Event handlers are registered when the viewer is created - no manual
//! JavaScript wiring required.

mod events;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use serde::Serialize;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlCanvasElement, HtmlDivElement, HtmlElement, MouseEvent, WheelEvent};

#[cfg(target_arch = "wasm32")]
use crate::config::GridConfig;
#[cfg(target_arch = "wasm32")]
use crate::layout::{GridLayout, Viewport};
#[cfg(target_arch = "wasm32")]
use crate::placement_index::PlacementIndex;
#[cfg(target_arch = "wasm32")]
use crate::render::{
    visible_tiles, CanvasRenderer, DomListRenderer, RenderBackend, RenderParams, Renderer,
};
#[cfg(target_arch = "wasm32")]
use crate::tile_state::TileStateStore;
#[cfg(target_arch = "wasm32")]
use crate::types::{PlacedImage, SelectionController};

/// Pointer movement (logical pixels) below which a mouse gesture counts
/// as a click rather than a drag.
#[cfg(target_arch = "wasm32")]
pub(crate) const CLICK_DRAG_THRESHOLD: f32 = 3.0;

/// An in-progress drag gesture.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragState {
    /// Pointer position at the last processed move event.
    pub(crate) last_x: f32,
    pub(crate) last_y: f32,
    /// True once movement exceeded [`CLICK_DRAG_THRESHOLD`].
    pub(crate) moved: bool,
}

/// Shared state accessed by both the exported struct and event handlers.
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) config: GridConfig,
    pub(crate) layout: GridLayout,
    pub(crate) store: TileStateStore,
    pub(crate) placements: Vec<PlacedImage>,
    pub(crate) index: PlacementIndex,
    pub(crate) viewport: Viewport,
    pub(crate) selection: SelectionController,
    pub(crate) dpr: f32,
    pub(crate) needs_render: bool,
    pub(crate) drag: Option<DragState>,
    pub(crate) render_callback: Option<Function>,
}

// Timing helper for WASM metrics.
#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> f64 {
    if let Some(window) = web_sys::window() {
        if let Some(perf) = window.performance() {
            return perf.now();
        }
    }
    js_sys::Date::now()
}

#[cfg(target_arch = "wasm32")]
#[derive(Serialize)]
struct RenderMetrics {
    prep_ms: f64,
    draw_ms: f64,
    total_ms: f64,
    visible_tiles: u32,
}

/// The main viewer struct exported to JavaScript.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct TileView {
    state: Rc<RefCell<SharedState>>,
    renderer: Renderer,
    #[allow(dead_code)]
    closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[allow(dead_code)]
    wheel_closure: Option<Closure<dyn FnMut(WheelEvent)>>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl TileView {
    /// Create a viewer painting onto a canvas (immediate-mode backend).
    ///
    /// `config` is a plain JS object matching `GridConfig`; missing
    /// fields take their defaults. The initial zoom fits the whole grid
    /// into the canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        config: JsValue,
        dpr: f32,
    ) -> Result<TileView, JsValue> {
        console_error_panic_hook::set_once();

        let physical_width = canvas.width().max(1);
        let physical_height = canvas.height().max(1);

        let mut canvas_renderer =
            CanvasRenderer::new(canvas.clone()).map_err(|e| JsValue::from_str(&e.to_string()))?;
        canvas_renderer
            .init()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        canvas_renderer.resize(physical_width, physical_height, dpr);
        let renderer = Renderer::Canvas(canvas_renderer);

        let event_target: HtmlElement = canvas.into();
        Self::build(
            renderer,
            event_target,
            config,
            physical_width,
            physical_height,
            dpr,
        )
    }

    /// Create a viewer painting into a container div (virtualized DOM
    /// backend). Identical viewport state yields the identical visible
    /// set as the canvas backend.
    #[wasm_bindgen(js_name = "newVirtualized")]
    pub fn new_virtualized(
        container: HtmlDivElement,
        config: JsValue,
        dpr: f32,
    ) -> Result<TileView, JsValue> {
        console_error_panic_hook::set_once();

        let physical_width = (container.client_width().max(1) as f32 * dpr) as u32;
        let physical_height = (container.client_height().max(1) as f32 * dpr) as u32;

        let mut dom_renderer = DomListRenderer::new(container.clone())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        dom_renderer
            .init()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        dom_renderer.resize(physical_width, physical_height, dpr);
        let renderer = Renderer::DomList(dom_renderer);

        let event_target: HtmlElement = container.into();
        Self::build(
            renderer,
            event_target,
            config,
            physical_width,
            physical_height,
            dpr,
        )
    }

    fn build(
        renderer: Renderer,
        event_target: HtmlElement,
        config: JsValue,
        physical_width: u32,
        physical_height: u32,
        dpr: f32,
    ) -> Result<TileView, JsValue> {
        let config: GridConfig = if config.is_undefined() || config.is_null() {
            GridConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("config error: {e}")))?
        };
        let config = config.validate().map_err(JsValue::from)?;

        let dims = config.dimensions();
        let layout = GridLayout::new(dims).map_err(JsValue::from)?;
        let store = TileStateStore::new(dims);

        let logical_width = physical_width as f32 / dpr;
        let logical_height = physical_height as f32 / dpr;
        let mut viewport = Viewport::new(
            logical_width,
            logical_height,
            config.min_zoom,
            config.max_zoom,
        );
        viewport.fit_to_content(&layout);

        let state = Rc::new(RefCell::new(SharedState {
            config,
            layout,
            store,
            placements: Vec::new(),
            index: PlacementIndex::default(),
            viewport,
            selection: SelectionController::new(),
            dpr,
            needs_render: true,
            drag: None,
            render_callback: None,
        }));

        let mut closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();

        // Mouse down (start of a click-or-drag gesture)
        {
            let state = Rc::clone(&state);
            let target_ref = event_target.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = target_ref.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                Self::internal_mouse_down(&state, x, y);
            }) as Box<dyn FnMut(MouseEvent)>);
            event_target
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Mouse move (pan while dragging)
        {
            let state = Rc::clone(&state);
            let target_ref = event_target.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = target_ref.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                Self::internal_mouse_move(&state, x, y);
            }) as Box<dyn FnMut(MouseEvent)>);
            event_target
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Mouse up (end of gesture: select on click, settle on drag)
        {
            let state = Rc::clone(&state);
            let target_ref = event_target.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = target_ref.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                Self::internal_mouse_up(&state, x, y);
            }) as Box<dyn FnMut(MouseEvent)>);
            event_target
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Mouse leave (abandon any drag in progress)
        {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
                state.borrow_mut().drag = None;
            }) as Box<dyn FnMut(MouseEvent)>);
            event_target
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Wheel (one zoom step per tick, anchored at the cursor)
        let wheel_closure = {
            let state = Rc::clone(&state);
            let target_ref = event_target.clone();
            let closure = Closure::wrap(Box::new(move |event: WheelEvent| {
                event.prevent_default();
                let rect = target_ref.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                Self::internal_wheel(&state, event.delta_y(), x, y);
            }) as Box<dyn FnMut(WheelEvent)>);
            event_target
                .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())
                .ok();
            Some(closure)
        };

        Ok(TileView {
            state,
            renderer,
            closures,
            wheel_closure,
        })
    }

    /// Start a fresh grid session with new dimensions.
    ///
    /// The tile state store and selection are session-scoped: both are
    /// discarded wholesale and regenerated for the new dimensions, never
    /// patched. The placement list carries over (anchors now outside the
    /// grid simply stop rendering) and the zoom refits to the new content.
    pub fn reconfigure(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: GridConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("config error: {e}")))?;
        let config = config.validate().map_err(JsValue::from)?;

        let dims = config.dimensions();
        let layout = GridLayout::new(dims).map_err(JsValue::from)?;

        let mut s = self.state.borrow_mut();
        s.layout = layout;
        s.store = TileStateStore::new(dims);
        s.selection.clear();
        s.viewport = Viewport::new(
            s.viewport.width,
            s.viewport.height,
            config.min_zoom,
            config.max_zoom,
        );
        s.viewport.fit_to_content(&layout);
        s.config = config;
        s.needs_render = true;
        Ok(())
    }

    /// Replace the placed-image list.
    ///
    /// Rebuilds the anchor index and drops the backend's resolved-image
    /// cache; nothing from the previous list survives.
    #[wasm_bindgen(js_name = "loadPlacements")]
    pub fn load_placements(&mut self, placements: JsValue) -> Result<(), JsValue> {
        let placements: Vec<PlacedImage> = serde_wasm_bindgen::from_value(placements)
            .map_err(|e| JsValue::from_str(&format!("placement error: {e}")))?;

        let mut s = self.state.borrow_mut();
        s.index = PlacementIndex::build(&placements);
        s.placements = placements;
        s.needs_render = true;
        drop(s);

        self.renderer.invalidate_images();
        Ok(())
    }

    /// Paint the current visible set. Returns render metrics.
    pub fn render(&mut self) -> Result<JsValue, JsValue> {
        let start = now_ms();

        let s = self.state.borrow();
        let tiles = visible_tiles(
            &s.layout,
            &s.viewport,
            &s.store,
            &s.index,
            &s.placements,
            s.selection.state(),
        );
        let prep_ms = now_ms() - start;

        let params = RenderParams {
            tiles: &tiles,
            layout: &s.layout,
            viewport: &s.viewport,
            dpr: s.dpr,
        };
        let draw_start = now_ms();
        self.renderer
            .render_visible(&params)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let draw_ms = now_ms() - draw_start;
        drop(s);

        self.state.borrow_mut().needs_render = false;

        let metrics = RenderMetrics {
            prep_ms,
            draw_ms,
            total_ms: now_ms() - start,
            visible_tiles: tiles.len() as u32,
        };
        serde_wasm_bindgen::to_value(&metrics)
            .map_err(|e| JsValue::from_str(&format!("metrics error: {e}")))
    }

    /// Register the host's tile-selection callback, invoked synchronously
    /// with `(row, column)` on every successful select.
    #[wasm_bindgen(js_name = "onTileSelected")]
    pub fn set_on_tile_selected(&mut self, callback: Function) {
        let mut s = self.state.borrow_mut();
        s.selection.set_observer(move |row, column| {
            let _ = callback.call2(
                &JsValue::NULL,
                &JsValue::from_f64(f64::from(row)),
                &JsValue::from_f64(f64::from(column)),
            );
        });
    }

    /// Register a callback invoked whenever the view needs repainting.
    #[wasm_bindgen(js_name = "onNeedsRender")]
    pub fn set_render_callback(&mut self, callback: Function) {
        self.state.borrow_mut().render_callback = Some(callback);
    }

    /// Programmatic selection. Out-of-bounds coordinates are rejected.
    #[wasm_bindgen(js_name = "selectCell")]
    pub fn select_cell(&mut self, row: u32, column: u32) -> Result<(), JsValue> {
        let mut s = self.state.borrow_mut();
        let dims = *s.layout.dims();
        s.selection
            .select(crate::types::Cell::new(row, column), &dims)
            .map_err(JsValue::from)?;
        s.needs_render = true;
        Ok(())
    }

    /// Currently selected cell as `{row, column}`, or `undefined`.
    #[wasm_bindgen(js_name = "selectedCell")]
    pub fn selected_cell(&self) -> JsValue {
        let s = self.state.borrow();
        match s.selection.selected() {
            Some(cell) => serde_wasm_bindgen::to_value(&cell).unwrap_or(JsValue::UNDEFINED),
            None => JsValue::UNDEFINED,
        }
    }

    /// Set the zoom scale directly; returns the clamped scale applied.
    #[wasm_bindgen(js_name = "setZoom")]
    pub fn set_zoom(&mut self, scale: f32) -> f32 {
        let mut s = self.state.borrow_mut();
        let applied = s.viewport.zoom_to(scale);
        s.needs_render = true;
        applied
    }

    /// Apply whole zoom steps (positive zooms in); returns the scale applied.
    #[wasm_bindgen(js_name = "zoomBySteps")]
    pub fn zoom_by_steps(&mut self, steps: i32) -> f32 {
        let mut s = self.state.borrow_mut();
        let requested = s.viewport.scale + steps as f32 * s.config.zoom_step;
        let applied = s.viewport.zoom_to(requested);
        s.needs_render = true;
        applied
    }

    /// Pan by world-space deltas. Unbounded: the grid may leave the view.
    #[wasm_bindgen(js_name = "panBy")]
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        let mut s = self.state.borrow_mut();
        s.viewport.pan_by(dx, dy);
        s.needs_render = true;
    }

    /// Current zoom scale.
    pub fn scale(&self) -> f32 {
        self.state.borrow().viewport.scale
    }

    /// Resize the render surface (physical pixels + device pixel ratio).
    pub fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        {
            let mut s = self.state.borrow_mut();
            s.dpr = dpr;
            s.viewport
                .resize(width as f32 / dpr, height as f32 / dpr);
            s.needs_render = true;
        }
        self.renderer.resize(width, height, dpr);
    }

    /// Whether a repaint is pending.
    #[wasm_bindgen(js_name = "needsRender")]
    pub fn needs_render(&self) -> bool {
        self.state.borrow().needs_render
    }
}
