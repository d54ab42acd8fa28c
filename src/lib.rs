//! Browser host for the landing-page particle backdrop.
//!
//! ARCHITECTURE
//! ============
//! The `particles` crate owns the simulation and painting. This crate is the
//! thin JS-facing shell: it exports [`ParticlesBackground`], wires window
//! `resize` / `mousemove` listeners to the engine, and drives it from
//! `requestAnimationFrame` until stopped.

mod background;
pub mod listeners;
pub mod viewport;

use wasm_bindgen::prelude::*;

pub use background::ParticlesBackground;

/// Module entry point: panic hook and console logging.
#[wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}
