//! Surface sizing and pointer conversion between window and canvas space.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use particles::geom::{Point, Size};

/// Surface size for a window: full width, `height_fraction` of the height.
///
/// Non-finite or negative window dimensions collapse to zero.
#[must_use]
pub fn surface_size(inner_width: f64, inner_height: f64, height_fraction: f64) -> Size {
    let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    Size::new(sanitize(inner_width), sanitize(inner_height * height_fraction))
}

/// Convert a pointer's client coordinates into canvas space.
///
/// `origin_left` / `origin_top` are the canvas bounding rect's top-left corner.
#[must_use]
pub fn pointer_in_surface(client_x: f64, client_y: f64, origin_left: f64, origin_top: f64) -> Point {
    Point::new(client_x - origin_left, client_y - origin_top)
}
