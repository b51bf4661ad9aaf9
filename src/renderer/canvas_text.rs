//! Text overlay on a 2D canvas stacked over the GPU canvas

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Rgba, TextRenderer};

/// CSS color string for an RGBA color
pub fn css_color(c: Rgba) -> String {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgba({}, {}, {}, {})", byte(c[0]), byte(c[1]), byte(c[2]), c[3].clamp(0.0, 1.0))
}

pub struct CanvasText {
    ctx: CanvasRenderingContext2d,
    size: (f64, f64),
}

impl CanvasText {
    /// Wrap the overlay canvas. `None` when the page has no 2D context to
    /// offer, in which case the game runs without text.
    pub fn from_canvas(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Option<Self> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        ctx.set_font("16px monospace");
        Some(Self {
            ctx,
            size: (width as f64, height as f64),
        })
    }

    /// Erase last frame's text
    pub fn begin_frame(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.size.0, self.size.1);
    }
}

impl TextRenderer for CanvasText {
    fn set_fill_color(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&css_color(color));
    }

    fn measure_text(&mut self, text: &str) -> f32 {
        self.ctx
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0)
    }

    fn fill_text(&mut self, text: &str, pos: Vec2) {
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
