//! Canvas 2D rendering backend.
//!
//! Immediate-mode painter over the HTML Canvas 2D API via web-sys.
//! Mirrors the original stacking order: placed images first, then the
//! tile rectangles (transparent fills let the images show through).

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use crate::error::Result;
use crate::render::backend::{FillState, RenderBackend, RenderParams};
use crate::render::colors::palette;

/// Canvas 2D implementation of [`RenderBackend`].
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
    dpr: f32,
    /// Resolved image elements keyed by source ref. Filled lazily on
    /// first draw and invalidated only when the placement list changes,
    /// so an image handle is never recreated per frame.
    image_cache: HashMap<String, HtmlImageElement>,
}

impl CanvasRenderer {
    /// Create a new Canvas renderer from an `HtmlCanvasElement`.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "Failed to get 2d context")?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        let width = canvas.width();
        let height = canvas.height();

        Ok(Self {
            canvas,
            ctx,
            width,
            height,
            dpr: 1.0,
            image_cache: HashMap::new(),
        })
    }

    /// Set the CSS dimensions of the canvas element (logical pixels).
    pub fn set_canvas_css_size(&self, css_w: f32, css_h: f32) {
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{css_w}px"));
        let _ = style.set_property("height", &format!("{css_h}px"));
    }

    fn get_document(&self) -> Option<Document> {
        web_sys::window()?.document()
    }

    /// Get or create the image element for a source ref.
    ///
    /// The element is created once and left to decode in the background;
    /// draws simply skip it until `natural_width` reports non-zero.
    fn get_or_create_image(&mut self, source_ref: &str) -> Option<HtmlImageElement> {
        if let Some(img) = self.image_cache.get(source_ref) {
            return Some(img.clone());
        }

        let document = self.get_document()?;
        let img = document
            .create_element("img")
            .ok()?
            .dyn_into::<HtmlImageElement>()
            .ok()?;
        img.set_src(source_ref);

        self.image_cache
            .insert(source_ref.to_string(), img.clone());
        Some(img)
    }
}

impl RenderBackend for CanvasRenderer {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        self.width = width;
        self.height = height;
        self.dpr = dpr;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn render_visible(&mut self, params: &RenderParams) -> Result<()> {
        let viewport = params.viewport;
        let dpr = f64::from(params.dpr);

        self.ctx
            .reset_transform()
            .map_err(|_| crate::error::TileviewError::Render("reset transform".into()))?;
        self.ctx.set_fill_style_str(palette::BOARD_BG);
        self.ctx
            .fill_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        // Physical pixels below this point; all coordinates are logical.
        let _ = self.ctx.scale(dpr, dpr);

        // Image layer first, tiles on top (transparent tile fills keep
        // the images visible while the selected tile covers its share).
        for tile in params.tiles {
            if tile.images.is_empty() {
                continue;
            }
            let (screen_x, screen_y) = viewport.to_screen(tile.x, tile.y);
            for image in &tile.images {
                let Some(img) = self.get_or_create_image(&image.source_ref) else {
                    continue;
                };
                // Not decoded yet: skip this frame, a later render picks it up.
                if img.natural_width() == 0 {
                    continue;
                }
                let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    &img,
                    f64::from(screen_x),
                    f64::from(screen_y),
                    f64::from(image.width * viewport.scale),
                    f64::from(image.height * viewport.scale),
                );
            }
        }

        self.ctx.set_line_width(1.0);
        self.ctx.set_stroke_style_str(palette::TILE_STROKE);
        for tile in params.tiles {
            let (screen_x, screen_y) = viewport.to_screen(tile.x, tile.y);
            let screen_w = tile.width * viewport.scale;
            let screen_h = tile.height * viewport.scale;

            let fill = match tile.fill {
                FillState::Selected => palette::SELECTED_FILL,
                FillState::Default => palette::TILE_FILL,
            };
            self.ctx.set_fill_style_str(fill);
            self.ctx.fill_rect(
                f64::from(screen_x),
                f64::from(screen_y),
                f64::from(screen_w),
                f64::from(screen_h),
            );
            self.ctx.stroke_rect(
                f64::from(screen_x),
                f64::from(screen_y),
                f64::from(screen_w),
                f64::from(screen_h),
            );
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
