//! Browser-facing engine: binds a [`ParticleField`] to a canvas element.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::geom::{Point, Size};
use crate::render;

/// The full particle engine. Wraps [`ParticleField`] and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
    field: ParticleField,
}

impl Engine {
    /// Create an engine bound to `canvas`. Nothing is generated until [`Self::set_viewport`].
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: FieldConfig, seed: u64) -> Self {
        Self { canvas, ctx: None, field: ParticleField::new(config, seed) }
    }

    // --- Viewport ---

    /// Size the canvas backing store to `width` x `height` CSS pixels and regenerate the field.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        let width = to_px(width);
        let height = to_px(height);
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field.resize(Size::new(f64::from(width), f64::from(height)));
    }

    // --- Input events ---

    /// Record a pointer position in canvas space.
    pub fn on_pointer_move(&mut self, pt: Point) {
        self.field.set_pointer(pt);
    }

    // --- Render ---

    /// Draw the current state, then advance the simulation one frame.
    ///
    /// A collapsed surface or a canvas without a 2D context is a no-op frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the context lookup or any `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        if self.field.size().is_empty() {
            return Ok(());
        }
        let Some(ctx) = self.context()? else {
            return Ok(());
        };
        let frame = self.field.tick();
        render::paint(&ctx, &frame)
    }

    fn context(&mut self) -> Result<Option<CanvasRenderingContext2d>, JsValue> {
        if let Some(ctx) = &self.ctx {
            return Ok(Some(ctx.clone()));
        }
        let Some(raw) = self.canvas.get_context("2d")? else {
            return Ok(None);
        };
        let ctx = raw.dyn_into::<CanvasRenderingContext2d>()?;
        self.ctx = Some(ctx.clone());
        Ok(Some(ctx))
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.field.particles().len()
    }

    /// Frames drawn since construction.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.field.frame_count()
    }
}

/// Whole pixels for the canvas backing store. NaN and negatives become 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_px(css: f64) -> u32 {
    css.floor().clamp(0.0, f64::from(u32::MAX)) as u32
}
