//! A single particle: construction, per-frame motion, bounds, and re-entry.
//!
//! Particles are never destroyed individually. When one leaves the surface it
//! is teleported back to an edge with a fresh heading, so the population only
//! changes when the whole field is regenerated.

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::color::Color;
use crate::config::{Motion, PointerPull};
use crate::consts::{
    ANGLE_DRIFT_MAX, EXIT_MARGIN, OPACITY_MAX, OPACITY_MIN, SIZE_MAX, SIZE_MIN, SPEED_MAX, SPEED_MIN,
    UPWARD_BIAS,
};
use crate::geom::{Point, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Point,
    /// Disc radius in pixels.
    pub size: f64,
    pub color: Color,
    /// Fill opacity in `[0.1, 0.6)`.
    pub opacity: f64,
    /// Displacement per frame in pixels.
    pub speed: f64,
    /// Heading in radians.
    pub angle: f64,
    /// Heading change per frame in radians.
    pub angle_drift: f64,
}

impl Particle {
    /// Create a particle uniformly placed over `bounds` with randomized attributes.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Size, color: Color) -> Self {
        Self {
            pos: Point::new(uniform(rng, bounds.width), uniform(rng, bounds.height)),
            size: rng.random_range(SIZE_MIN..SIZE_MAX),
            color,
            opacity: rng.random_range(OPACITY_MIN..OPACITY_MAX),
            speed: rng.random_range(SPEED_MIN..SPEED_MAX),
            angle: uniform(rng, TAU),
            angle_drift: rng.random_range(-ANGLE_DRIFT_MAX..ANGLE_DRIFT_MAX),
        }
    }

    /// Displace toward `target` when within the capture radius.
    ///
    /// The pull falls linearly from `strength` at the target to zero at `radius`.
    pub fn pull_toward(&mut self, target: Point, pull: PointerPull) {
        let dx = target.x - self.pos.x;
        let dy = target.y - self.pos.y;
        let distance = dx.hypot(dy);
        if distance >= pull.radius || distance == 0.0 {
            return;
        }
        let force = (1.0 - distance / pull.radius) * pull.strength;
        self.pos.x += dx / distance * force;
        self.pos.y += dy / distance * force;
    }

    /// Advance one frame.
    pub fn advance(&mut self, motion: Motion) {
        match motion {
            Motion::Drift => {
                self.angle += self.angle_drift;
                self.pos.x += self.angle.cos() * self.speed;
                self.pos.y += self.angle.sin() * self.speed - self.speed * UPWARD_BIAS;
            }
            Motion::Rise => {
                self.pos.y -= self.speed;
            }
        }
    }

    /// Whether the particle has left the surface far enough to re-enter.
    ///
    /// Rising particles exit through the top as soon as they clear it; the
    /// other edges only matter when the pointer drags them off the surface.
    #[must_use]
    pub fn is_out_of_bounds(&self, bounds: Size, motion: Motion) -> bool {
        let margin = self.size * EXIT_MARGIN;
        let top = match motion {
            Motion::Drift => -margin,
            Motion::Rise => -self.size,
        };
        self.pos.x < -margin
            || self.pos.x > bounds.width + margin
            || self.pos.y < top
            || self.pos.y > bounds.height + margin
    }

    /// Teleport back onto an edge of `bounds` with a fresh heading.
    pub fn reenter<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Size, motion: Motion) {
        match motion {
            Motion::Drift => {
                if rng.random_bool(0.5) {
                    self.pos.x = if rng.random_bool(0.5) { -self.size } else { bounds.width + self.size };
                    self.pos.y = uniform(rng, bounds.height);
                } else {
                    self.pos.x = uniform(rng, bounds.width);
                    self.pos.y = if rng.random_bool(0.5) { -self.size } else { bounds.height + self.size };
                }
            }
            Motion::Rise => {
                self.pos.x = uniform(rng, bounds.width);
                self.pos.y = bounds.height + self.size;
            }
        }
        self.angle = uniform(rng, TAU);
    }
}

/// Uniform sample in `[0, upper)`, or `0` for an empty range.
fn uniform<R: Rng + ?Sized>(rng: &mut R, upper: f64) -> f64 {
    if upper > 0.0 && upper.is_finite() { rng.random_range(0.0..upper) } else { 0.0 }
}
