//! Particle field engine for the animated hero backdrop.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! particle ensemble behind the landing page: generating a population sized to
//! the drawing surface, advancing it once per animation frame, reacting to the
//! pointer, and painting discs, glows and proximity links. The host layer is
//! responsible only for wiring DOM events and the animation-frame loop to the
//! engine.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine bound to a canvas element |
//! | [`field`] | Testable simulation core, [`field::ParticleField`] |
//! | [`particle`] | A single particle: spawn, step, bounds and re-entry |
//! | [`config`] | Tunables, presets and validation |
//! | [`color`] | Palette colors and CSS formatting |
//! | [`frame`] | Surface-independent frame composition into draw ops |
//! | [`render`] | Paints composed frames to a 2D context |
//! | [`scheduler`] | Animation-frame loop bookkeeping and cancellation |
//! | [`geom`] | Points and surface dimensions |
//! | [`error`] | Error type for configuration failures |
//! | [`consts`] | Shared numeric constants (ranges, radii, alphas) |

pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod field;
pub mod frame;
pub mod geom;
pub mod particle;
pub mod render;
pub mod scheduler;
