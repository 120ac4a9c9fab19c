//! Canvas-bound engine: owns the element, context, and simulation state.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render;
use crate::sim::Graph;

/// Engine bound to a mounted `<canvas>` element.
///
/// The simulation core lives in [`Graph`], which has no browser dependencies;
/// this wrapper adds the context handle and frame driving.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    graph: Graph,
}

impl Engine {
    /// Bind to a canvas element and generate the initial graph.
    ///
    /// The canvas backing store is sized to the element's current layout
    /// size. `rng` supplies randomness for node placement — the browser
    /// passes `js_sys::Math::random`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context cannot be acquired.
    pub fn new(canvas: HtmlCanvasElement, rng: &mut dyn FnMut() -> f64) -> Result<Self, JsValue> {
        let width = f64::from(canvas.offset_width().max(0));
        let height = f64::from(canvas.offset_height().max(0));
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let graph = Graph::generate(width, height, rng);
        Ok(Self { canvas, ctx, graph })
    }

    /// Advance the simulation one frame and draw it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    pub fn tick(&mut self) -> Result<(), JsValue> {
        self.graph.step();
        render::draw(&self.ctx, &self.graph)
    }

    /// Resize the backing store to the element's current layout size and
    /// clamp nodes into the new bounds.
    pub fn resize_to_element(&mut self) {
        let width = f64::from(self.canvas.offset_width().max(0));
        let height = f64::from(self.canvas.offset_height().max(0));
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.graph.resize(width, height);
    }
}
