//! Rendering: draws the particle graph to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view of the
//! simulation state and produces pixels — it does not mutate the graph.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! the caller ([`crate::engine::Engine::tick`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{NODE_COLOR, NODE_RADIUS, TRAIL_FADE_ALPHA};
use crate::sim::{Graph, link_alpha};

/// Draw one frame: fade the previous frame, then nodes, then links.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, graph: &Graph) -> Result<(), JsValue> {
    // Translucent fade instead of a clear leaves short motion trails.
    ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {TRAIL_FADE_ALPHA})"));
    ctx.fill_rect(0.0, 0.0, graph.width, graph.height);

    for node in &graph.nodes {
        ctx.begin_path();
        ctx.arc(node.x, node.y, NODE_RADIUS, 0.0, PI * 2.0)?;
        ctx.set_fill_style_str(NODE_COLOR);
        ctx.fill();
    }

    for link in &graph.links {
        let alpha = link_alpha(graph.link_length(link), link.strength);
        if alpha <= 0.0 {
            continue;
        }
        let from = graph.nodes[link.from];
        let to = graph.nodes[link.to];
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.set_stroke_style_str(&format!("rgba(59, 130, 246, {alpha})"));
        ctx.set_line_width(1.0);
        ctx.stroke();
    }

    Ok(())
}
