//! HTML canvas 2D backend (wasm32 only)

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Renderer;
use super::scene::{Align, DrawCmd, FontStyle, build_scene, css_color};
use crate::sim::GameState;

const BACKGROUND: &str = "#000000";
const FONT_FAMILY: &str = "Verdana";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Attach to the canvas with the given element id and size it to the field
    pub fn new(canvas_id: &str, width: f32, height: f32) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { canvas, context })
    }

    fn draw(&self, cmd: &DrawCmd) {
        let ctx = &self.context;
        match cmd {
            DrawCmd::FillRect { rect, color, .. } => {
                ctx.set_fill_style_str(&css_color(*color));
                ctx.fill_rect(
                    rect.left() as f64,
                    rect.top() as f64,
                    rect.size.x as f64,
                    rect.size.y as f64,
                );
            }
            DrawCmd::Text {
                text,
                pos,
                size,
                align,
                style,
                color,
            } => {
                let weight = match style {
                    FontStyle::Regular => "",
                    FontStyle::Bold => "bold ",
                    FontStyle::BoldItalic => "italic bold ",
                };
                ctx.set_font(&format!("{weight}{size}px {FONT_FAMILY}"));
                ctx.set_text_align(match align {
                    Align::Left => "left",
                    Align::Center => "center",
                    Align::Right => "right",
                });
                ctx.set_text_baseline("middle");
                ctx.set_fill_style_str(&css_color(*color));
                if let Err(e) = ctx.fill_text(text, pos.x as f64, pos.y as f64) {
                    log::warn!("fill_text failed: {:?}", e);
                }
            }
        }
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, state: &GameState) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.context.set_fill_style_str(BACKGROUND);
        self.context.fill_rect(0.0, 0.0, w, h);

        for cmd in build_scene(state) {
            self.draw(&cmd);
        }
    }
}
