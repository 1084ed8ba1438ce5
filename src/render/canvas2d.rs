use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{LineCanvas, LineSegment};
use crate::error::{Result, TreeError};
use crate::math::{packed_to_css, Color};

/// Line backend drawing into an HTML canvas through its 2D context
pub struct Canvas2dBackend {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    background: String,
}

impl Canvas2dBackend {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| TreeError::Render(format!("get_context failed: {:?}", e)))?
            .ok_or_else(|| TreeError::Render("Failed to get 2D context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| TreeError::Render("Context is not a CanvasRenderingContext2d".to_string()))?;

        ctx.set_line_cap("butt");
        ctx.set_line_join("bevel");

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            background: Color::BLACK.to_css(),
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Track a resize done by the page
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl LineCanvas for Canvas2dBackend {
    fn clear(&mut self) -> Result<()> {
        self.ctx.set_fill_style_str(&self.background);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        Ok(())
    }

    fn draw_line(&mut self, segment: &LineSegment) -> Result<()> {
        let ctx = &self.ctx;
        ctx.set_line_width(segment.thickness as f64);
        ctx.set_stroke_style_str(&packed_to_css(segment.color));
        ctx.begin_path();
        ctx.move_to(segment.start.x, segment.start.y);
        ctx.line_to(segment.end.x, segment.end.y);
        ctx.stroke();
        Ok(())
    }
}
