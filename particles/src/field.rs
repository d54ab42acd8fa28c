//! The particle field: population sizing, regeneration, and per-frame stepping.
//!
//! [`ParticleField`] holds everything about the simulation that does not
//! depend on a canvas element, so it can be driven and inspected natively.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::color::Color;
use crate::config::FieldConfig;
use crate::consts::DEFAULT_PALETTE;
use crate::frame::{self, Frame};
use crate::geom::{Point, Size};
use crate::particle::Particle;

/// Population for a surface: `clamp(round(max(w, h) / divisor), 0, cap)`.
///
/// An empty surface has no particles.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn population(config: &FieldConfig, size: Size) -> usize {
    if size.is_empty() {
        return 0;
    }
    let raw = (size.longer_side() / config.density_divisor).round();
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    let cap = config.max_particles;
    if raw >= cap as f64 { cap } else { raw as usize }
}

/// Simulation state for one backdrop instance.
pub struct ParticleField {
    config: FieldConfig,
    size: Size,
    particles: Vec<Particle>,
    pointer: Option<Point>,
    rng: SmallRng,
    frames: u64,
}

impl ParticleField {
    /// Create an empty field. No particles exist until the first [`Self::resize`].
    #[must_use]
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            config,
            size: Size::default(),
            particles: Vec::new(),
            pointer: None,
            rng: SmallRng::seed_from_u64(seed),
            frames: 0,
        }
    }

    // --- Inputs ---

    /// Adopt a new surface size and regenerate the whole ensemble.
    ///
    /// No particle survives a resize, even when the size is unchanged.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        let count = population(&self.config, size);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let color = self.pick_color();
            particles.push(Particle::spawn(&mut self.rng, size, color));
        }
        self.particles = particles;
        log::debug!("particle field regenerated: {count} particles for {}x{}", size.width, size.height);
    }

    fn pick_color(&mut self) -> Color {
        let palette = &self.config.palette;
        if palette.is_empty() {
            return DEFAULT_PALETTE[0];
        }
        palette[self.rng.random_range(0..palette.len())]
    }

    /// Record the last known pointer position in surface space.
    pub fn set_pointer(&mut self, pt: Point) {
        self.pointer = Some(pt);
    }

    // --- Frame ---

    /// Compose the draw ops for the current positions.
    #[must_use]
    pub fn compose(&self) -> Frame {
        frame::compose(&self.particles, self.size, &self.config)
    }

    /// Advance every particle one frame: pointer pull, motion, then re-entry.
    pub fn step(&mut self) {
        let motion = self.config.motion;
        let pull = self.config.pointer.zip(self.pointer);
        for p in &mut self.particles {
            if let Some((pull, target)) = pull {
                p.pull_toward(target, pull);
            }
            p.advance(motion);
            if p.is_out_of_bounds(self.size, motion) {
                p.reenter(&mut self.rng, self.size, motion);
            }
        }
        self.frames += 1;
    }

    /// Compose the current frame, then advance.
    pub fn tick(&mut self) -> Frame {
        let frame = self.compose();
        self.step();
        frame
    }

    // --- Queries ---

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Frames stepped since construction.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
