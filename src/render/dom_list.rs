//! Virtualized DOM rendering backend.
//!
//! Paints the visible tile set as absolutely positioned `<div>` elements
//! inside a host container, the way a windowed list keeps only on-screen
//! rows mounted. Off-screen tiles have no DOM presence at all.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDivElement, HtmlElement, HtmlImageElement};

use crate::error::{Result, TileviewError};
use crate::render::backend::{FillState, RenderBackend, RenderParams};
use crate::render::colors::palette;

/// Virtualized DOM implementation of [`RenderBackend`].
pub struct DomListRenderer {
    container: HtmlDivElement,
    width: u32,
    height: u32,
    dpr: f32,
    /// Resolved image elements keyed by source ref; detached on every
    /// repaint but kept alive here so the browser never re-decodes.
    image_cache: HashMap<String, HtmlImageElement>,
}

impl DomListRenderer {
    /// Create a renderer painting into the given container element.
    pub fn new(container: HtmlDivElement) -> Result<Self> {
        let style = container.style();
        let _ = style.set_property("position", "relative");
        let _ = style.set_property("overflow", "hidden");
        let _ = style.set_property("background-color", palette::BOARD_BG);

        let width = container.client_width().max(0) as u32;
        let height = container.client_height().max(0) as u32;

        Ok(Self {
            container,
            width,
            height,
            dpr: 1.0,
            image_cache: HashMap::new(),
        })
    }

    fn document(&self) -> Result<Document> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| TileviewError::Render("no document".into()))
    }

    fn get_or_create_image(&mut self, document: &Document, source_ref: &str) -> Option<HtmlImageElement> {
        if let Some(img) = self.image_cache.get(source_ref) {
            return Some(img.clone());
        }
        let img = document
            .create_element("img")
            .ok()?
            .dyn_into::<HtmlImageElement>()
            .ok()?;
        img.set_src(source_ref);
        let _ = img.style().set_property("pointer-events", "none");
        self.image_cache
            .insert(source_ref.to_string(), img.clone());
        Some(img)
    }
}

impl RenderBackend for DomListRenderer {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        self.width = width;
        self.height = height;
        self.dpr = dpr;
        let style = self.container.style();
        let _ = style.set_property("width", &format!("{}px", width as f32 / dpr));
        let _ = style.set_property("height", &format!("{}px", height as f32 / dpr));
    }

    fn render_visible(&mut self, params: &RenderParams) -> Result<()> {
        let document = self.document()?;
        let viewport = params.viewport;

        // Unmount the previous window wholesale; cached image elements
        // survive detachment and remount without reloading.
        self.container.set_inner_html("");

        for tile in params.tiles {
            let (screen_x, screen_y) = viewport.to_screen(tile.x, tile.y);
            let screen_w = tile.width * viewport.scale;
            let screen_h = tile.height * viewport.scale;

            let div = document
                .create_element("div")
                .map_err(|_| TileviewError::Render("create tile div".into()))?
                .dyn_into::<HtmlElement>()
                .map_err(|_| TileviewError::Render("cast tile div".into()))?;
            let style = div.style();
            let _ = style.set_property("position", "absolute");
            let _ = style.set_property("left", &format!("{screen_x}px"));
            let _ = style.set_property("top", &format!("{screen_y}px"));
            let _ = style.set_property("width", &format!("{screen_w}px"));
            let _ = style.set_property("height", &format!("{screen_h}px"));
            let _ = style.set_property("box-sizing", "border-box");
            let _ = style.set_property("border", &format!("1px solid {}", palette::TILE_STROKE));
            let fill = match tile.fill {
                FillState::Selected => palette::SELECTED_FILL,
                FillState::Default => palette::TILE_FILL,
            };
            let _ = style.set_property("background-color", fill);
            div.set_attribute("data-row", &tile.cell.row.to_string())
                .map_err(|_| TileviewError::Render("tile attribute".into()))?;
            div.set_attribute("data-column", &tile.cell.column.to_string())
                .map_err(|_| TileviewError::Render("tile attribute".into()))?;

            for image in &tile.images {
                let Some(img) = self.get_or_create_image(&document, &image.source_ref) else {
                    continue;
                };
                let img_style = img.style();
                let _ = img_style.set_property("position", "absolute");
                let _ = img_style.set_property("left", "0");
                let _ = img_style.set_property("top", "0");
                let _ = img_style
                    .set_property("width", &format!("{}px", image.width * viewport.scale));
                let _ = img_style
                    .set_property("height", &format!("{}px", image.height * viewport.scale));
                let _ = div.append_child(&img);
            }

            self.container
                .append_child(&div)
                .map_err(|_| TileviewError::Render("append tile".into()))?;
        }

        Ok(())
    }

    fn invalidate_images(&mut self) {
        self.image_cache.clear();
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
