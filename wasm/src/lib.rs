use std::f64::consts::TAU;

use js_sys::Array;
use nalgebra::Vector2;
use sparkline::draw::{Cap, DrawingSurface, Paint, PaintStyle, Shader};
use sparkline::path::{Path, PathCommand};
use sparkline::StyleConfig;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// Canvas adapter for the renderer
struct Canvas<'c>(&'c CanvasRenderingContext2d);

impl<'c> Canvas<'c> {
    fn shader(&self, shader: &Shader) -> JsValue {
        match *shader {
            Shader::Solid(color) => JsValue::from_str(&color.css()),
            Shader::LinearGradient { from, to, start, end } => {
                let gradient = self.0.create_linear_gradient(from.x, from.y, to.x, to.y);
                gradient.add_color_stop(0.0, &start.css()).unwrap_throw();
                gradient.add_color_stop(1.0, &end.css()).unwrap_throw();
                gradient.into()
            }
        }
    }

    fn paint(&self, paint: &Paint) {
        let shader = self.shader(&paint.shader);
        match paint.style {
            PaintStyle::Fill => {
                self.0.set_fill_style(&shader);
                self.0.fill();
            }
            PaintStyle::Stroke { width, cap } => {
                self.0.set_line_width(width);
                self.0.set_line_cap(match cap {
                    Cap::Butt => "butt",
                    Cap::Round => "round",
                });
                self.0.set_stroke_style(&shader);
                self.0.stroke();
            }
        }
    }
}

impl<'c> DrawingSurface for Canvas<'c> {
    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.0.begin_path();
        for command in path.commands() {
            match command {
                PathCommand::MoveTo(p) => self.0.move_to(p.x, p.y),
                PathCommand::CubicTo(a, b, c) => {
                    self.0.bezier_curve_to(a.x, a.y, b.x, b.y, c.x, c.y)
                }
            }
        }
        self.paint(paint);
    }

    fn draw_circle(&mut self, center: Vector2<f64>, radius: f64, paint: &Paint) {
        self.0.begin_path();
        self.0.arc(center.x, center.y, radius, 0.0, TAU).unwrap_throw();
        self.paint(paint);
    }

    fn draw_rect(
        &mut self,
        min: Vector2<f64>,
        max: Vector2<f64>,
        corner_radius: f64,
        paint: &Paint,
    ) {
        self.0.begin_path();
        if corner_radius > 0.0 {
            let r = corner_radius;
            self.0.move_to(min.x + r, min.y);
            self.0.arc_to(max.x, min.y, max.x, max.y, r).unwrap_throw();
            self.0.arc_to(max.x, max.y, min.x, max.y, r).unwrap_throw();
            self.0.arc_to(min.x, max.y, min.x, min.y, r).unwrap_throw();
            self.0.arc_to(min.x, min.y, max.x, min.y, r).unwrap_throw();
            self.0.close_path();
        } else {
            self.0.rect(min.x, min.y, max.x - min.x, max.y - min.y);
        }
        self.paint(paint);
    }
}

#[wasm_bindgen]
pub struct Sparkline(sparkline::Sparkline);

#[wasm_bindgen]
impl Sparkline {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Sparkline {
        Sparkline(sparkline::Sparkline::new(width, height))
    }

    #[wasm_bindgen(js_name = setSamples)]
    pub fn set_samples(&mut self, samples: Array) {
        self.0.set_samples(
            (0..samples.length())
                .map(|i| samples.get(i).as_f64().unwrap_throw())
                .collect::<Vec<_>>()
        );
    }

    /// Takes a style object shaped like the `[style]` table of a toml request
    #[wasm_bindgen(js_name = setStyle)]
    pub fn set_style(&mut self, style: &JsValue) {
        self.0.set_style(style.into_serde::<StyleConfig>().unwrap_throw());
    }

    #[wasm_bindgen(js_name = setPadding)]
    pub fn set_padding(&mut self, padding: Option<f64>) {
        self.0.set_padding(padding);
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: f64, height: f64) {
        self.0.resize(width, height);
    }

    #[wasm_bindgen(js_name = needsRedraw)]
    pub fn needs_redraw(&self) -> bool {
        self.0.needs_redraw()
    }

    #[wasm_bindgen]
    pub fn draw(&mut self, ctx: CanvasRenderingContext2d) {
        self.0.draw(&mut Canvas(&ctx));
    }
}
