//! Rendering: paints a composed [`Frame`] to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It replays draw ops in order and does not mutate any simulation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::frame`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::Color;
use crate::consts::TRAIL_FILL;
use crate::frame::{DrawOp, Frame};
use crate::geom::Point;

/// Paint every op of `frame` in order.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn paint(ctx: &CanvasRenderingContext2d, frame: &Frame) -> Result<(), JsValue> {
    for op in &frame.ops {
        match op {
            DrawOp::Fade => {
                ctx.set_fill_style_str(TRAIL_FILL);
                ctx.fill_rect(0.0, 0.0, frame.size.width, frame.size.height);
            }
            DrawOp::Clear => ctx.clear_rect(0.0, 0.0, frame.size.width, frame.size.height),
            DrawOp::Disc { center, radius, color, opacity } => draw_disc(ctx, *center, *radius, *color, *opacity)?,
            DrawOp::Glow { center, radius, color, alpha } => draw_glow(ctx, *center, *radius, *color, *alpha)?,
            DrawOp::Link { from, to, color, opacity, width } => draw_link(ctx, *from, *to, *color, *opacity, *width),
        }
    }
    Ok(())
}

fn draw_disc(
    ctx: &CanvasRenderingContext2d,
    center: Point,
    radius: f64,
    color: Color,
    opacity: f64,
) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
    ctx.set_fill_style_str(&color.css_rgba(opacity));
    ctx.fill();
    Ok(())
}

fn draw_glow(
    ctx: &CanvasRenderingContext2d,
    center: Point,
    radius: f64,
    color: Color,
    alpha: f64,
) -> Result<(), JsValue> {
    if radius <= 0.0 {
        return Ok(());
    }
    let gradient = ctx.create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)?;
    gradient.add_color_stop(0.0, &color.css_rgba(alpha))?;
    gradient.add_color_stop(1.0, "transparent")?;

    ctx.begin_path();
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

fn draw_link(ctx: &CanvasRenderingContext2d, from: Point, to: Point, color: Color, opacity: f64, width: f64) {
    ctx.begin_path();
    ctx.set_stroke_style_str(&color.css_rgba(opacity));
    ctx.set_line_width(width);
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
}
