// Drawing seam for the particle field, plus the canvas 2d implementation.
// CanvasRenderer grabs the 2d context from the canvas on the DOM and keeps
// the backing buffer sized to the layout box times the device pixel ratio.

use crate::color::Color;
use crate::error::HeroError;
use crate::surface::Surface;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Renderer {
    type Error;

    fn clear(&mut self, surface: Surface) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
    ) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
    ) -> Result<(), Self::Error>;
}

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    device_pixel_ratio: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, HeroError> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| HeroError::SurfaceUnavailable)?
            .ok_or(HeroError::SurfaceUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| HeroError::SurfaceUnavailable)?;

        Ok(CanvasRenderer {
            canvas,
            context,
            device_pixel_ratio: 1.0,
        })
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    // Resizes the backing buffer and rescales the context so drawing
    // happens in CSS pixels. Setting the canvas size wipes the transform,
    // so the scale is reapplied every time.
    pub fn fit(&mut self, surface: Surface, device_pixel_ratio: f64) -> Result<(), HeroError> {
        let (backing_width, backing_height) = surface.backing_size(device_pixel_ratio);
        self.canvas.set_width(backing_width);
        self.canvas.set_height(backing_height);

        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", surface.width))?;
        style.set_property("height", &format!("{}px", surface.height))?;

        let scale = if !surface.is_empty() {
            backing_width as f64 / surface.width as f64
        } else {
            1.0
        };
        self.context.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)?;
        self.device_pixel_ratio = scale;
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    type Error = JsValue;

    fn clear(&mut self, surface: Surface) -> Result<(), JsValue> {
        self.context
            .clear_rect(0.0, 0.0, surface.width as f64, surface.height as f64);
        Ok(())
    }

    #[allow(deprecated)]
    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(center[0], center[1], radius, 0.0, 2.0 * PI)?;
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.fill();
        Ok(())
    }

    #[allow(deprecated)]
    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.context.set_line_width(width);
        self.context.stroke();
        Ok(())
    }
}
