//! `Canvas` backed by the browser's 2D context

use game_core::Canvas;
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::js_error;

pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn from_element(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| js_error("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| js_error("2d context is not a CanvasRenderingContext2D"))?;
        Ok(Self { ctx })
    }
}

impl Canvas for WebCanvas {
    type Error = JsValue;

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), JsValue> {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &str,
        color: &str,
    ) -> Result<(), JsValue> {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_text(text, x as f64, y as f64)
    }

    fn stroke_dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        dash: &[f32],
        color: &str,
    ) -> Result<(), JsValue> {
        let pattern: js_sys::Array = dash.iter().map(|d| JsValue::from_f64(*d as f64)).collect();

        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_line_dash(&pattern)?;
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        // Later strokes are solid
        self.ctx.set_line_dash(&js_sys::Array::new())
    }
}
