// Renderer that owns the background canvas and its 2D context. Drawing goes
// through the `Surface` trait so the particle field can be rendered into a
// recording surface in tests.

use crate::viewport::Bounds;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

pub trait Surface {
    fn clear(&mut self, bounds: Bounds);
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, fill: &str) -> Result<(), JsValue>;
}

pub struct CanvasRenderer {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // Grabs the 2D context from the canvas on the DOM
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasRenderer { canvas, context })
    }

    // Matches the canvas pixel size to the window's inner size
    pub fn resize_to_window(&self, window: &Window) -> Result<Bounds, JsValue> {
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        Ok(self.bounds())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }
}

impl Surface for CanvasRenderer {
    fn clear(&mut self, bounds: Bounds) {
        self.context.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, fill: &str) -> Result<(), JsValue> {
        self.context.set_fill_style_str(fill);
        self.context.begin_path();
        self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }
}
