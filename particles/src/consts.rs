//! Shared numeric constants for the particles crate.

use crate::color::Color;

// ── Population ──────────────────────────────────────────────────

/// Surface pixels per particle along the longer axis (constellation preset).
pub const CONSTELLATION_DENSITY_DIVISOR: f64 = 10.0;

/// Population cap for the constellation preset.
pub const CONSTELLATION_MAX_PARTICLES: usize = 120;

/// Surface pixels per particle along the longer axis (rising preset).
pub const RISING_DENSITY_DIVISOR: f64 = 8.0;

/// Population cap for the rising preset.
pub const RISING_MAX_PARTICLES: usize = 100;

/// Hard ceiling on any configured cap; keeps the O(n²) link pass cheap.
pub const MAX_PARTICLES_LIMIT: usize = 240;

// ── Construction ranges ─────────────────────────────────────────

/// Disc radius range in pixels, half-open.
pub const SIZE_MIN: f64 = 1.0;
pub const SIZE_MAX: f64 = 4.0;

/// Fill opacity range, half-open.
pub const OPACITY_MIN: f64 = 0.1;
pub const OPACITY_MAX: f64 = 0.6;

/// Per-frame displacement range in pixels, half-open.
pub const SPEED_MIN: f64 = 0.2;
pub const SPEED_MAX: f64 = 0.7;

/// Absolute bound on per-frame heading drift in radians.
pub const ANGLE_DRIFT_MAX: f64 = 0.005;

/// Default palette: `#4fc3f7`, `#8a7fff`, `#a855f7`.
pub const DEFAULT_PALETTE: [Color; 3] = [
    Color::rgb(0x4f, 0xc3, 0xf7),
    Color::rgb(0x8a, 0x7f, 0xff),
    Color::rgb(0xa8, 0x55, 0xf7),
];

// ── Motion ──────────────────────────────────────────────────────

/// Fraction of `speed` subtracted from y each frame, giving an upward bias.
pub const UPWARD_BIAS: f64 = 0.5;

/// Out-of-bounds margin as a multiple of particle size. Rising motion uses it
/// for every edge except the top.
pub const EXIT_MARGIN: f64 = 5.0;

// ── Pointer ─────────────────────────────────────────────────────

/// Capture radius around the pointer in pixels.
pub const POINTER_RADIUS_PX: f64 = 200.0;

/// Peak per-frame pull toward the pointer in pixels.
pub const POINTER_STRENGTH_PX: f64 = 0.2;

// ── Drawing ─────────────────────────────────────────────────────

/// Maximum distance in pixels at which two particles are linked.
pub const LINK_DISTANCE_PX: f64 = 100.0;

/// Link alpha at zero distance (`0x1e` of 255).
pub const LINK_MAX_ALPHA: f64 = 30.0 / 255.0;

/// Link stroke width in pixels.
pub const LINK_WIDTH_PX: f64 = 0.5;

/// Glow radius as a multiple of particle size.
pub const GLOW_RADIUS_FACTOR: f64 = 3.0;

/// Glow alpha at the center of the radial gradient (`0x30` of 255).
pub const GLOW_ALPHA: f64 = 48.0 / 255.0;

/// Translucent fill painted each frame to leave short motion trails.
pub const TRAIL_FILL: &str = "rgba(15, 17, 26, 0.2)";

/// Share of the window height covered by the backdrop.
pub const DEFAULT_HEIGHT_FRACTION: f64 = 0.9;
