//! Frame composition: turns the particle ensemble into an ordered list of draw
//! operations without touching any drawing surface.
//!
//! Keeping composition separate from painting lets the O(n²) link pass and
//! every opacity rule be tested natively; [`crate::render`] replays the ops
//! against a `CanvasRenderingContext2d`.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use crate::color::Color;
use crate::config::{Background, FieldConfig};
use crate::consts::{GLOW_ALPHA, GLOW_RADIUS_FACTOR, LINK_MAX_ALPHA, LINK_WIDTH_PX};
use crate::geom::{Point, Size};
use crate::particle::Particle;

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Paint the translucent trail fill over the whole surface.
    Fade,
    /// Clear the whole surface.
    Clear,
    /// Filled disc.
    Disc { center: Point, radius: f64, color: Color, opacity: f64 },
    /// Radial gradient from `alpha` at the center to transparent at `radius`.
    Glow { center: Point, radius: f64, color: Color, alpha: f64 },
    /// Straight connecting line between two particles.
    Link { from: Point, to: Point, color: Color, opacity: f64, width: f64 },
}

/// A composed frame for a surface of `size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub size: Size,
    pub ops: Vec<DrawOp>,
}

impl Frame {
    /// Number of link ops in the frame.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Link { .. })).count()
    }
}

/// Compose a frame from the current particle positions.
#[must_use]
pub fn compose(particles: &[Particle], size: Size, config: &FieldConfig) -> Frame {
    let per_particle = if config.glow { 2 } else { 1 };
    let mut ops = Vec::with_capacity(1 + particles.len() * per_particle);

    ops.push(match config.background {
        Background::Fade => DrawOp::Fade,
        Background::Clear => DrawOp::Clear,
    });

    for (i, p) in particles.iter().enumerate() {
        ops.push(DrawOp::Disc { center: p.pos, radius: p.size, color: p.color, opacity: p.opacity });
        if config.glow {
            ops.push(DrawOp::Glow {
                center: p.pos,
                radius: p.size * GLOW_RADIUS_FACTOR,
                color: p.color,
                alpha: GLOW_ALPHA,
            });
        }
        let Some(threshold) = config.link_distance else {
            continue;
        };
        for other in &particles[i + 1..] {
            if let Some(opacity) = link_opacity(p.pos.distance_to(other.pos), threshold) {
                ops.push(DrawOp::Link { from: p.pos, to: other.pos, color: p.color, opacity, width: LINK_WIDTH_PX });
            }
        }
    }

    Frame { size, ops }
}

/// Opacity of a link between two particles `distance` apart, or `None` when
/// they are too far apart to be linked.
///
/// Falls linearly from [`LINK_MAX_ALPHA`] at zero distance to zero at `threshold`.
#[must_use]
pub fn link_opacity(distance: f64, threshold: f64) -> Option<f64> {
    (distance < threshold).then(|| (1.0 - distance / threshold) * LINK_MAX_ALPHA)
}
