#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in surface space (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the surface covers no pixels (collapsed, negative, or NaN).
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite())
    }

    /// The longer of the two sides.
    #[must_use]
    pub fn longer_side(self) -> f64 {
        self.width.max(self.height)
    }

    /// Whether `pt` lies in `[0, width) × [0, height)`.
    #[must_use]
    pub fn contains(self, pt: Point) -> bool {
        pt.x >= 0.0 && pt.x < self.width && pt.y >= 0.0 && pt.y < self.height
    }
}
