//! Particle field tunables, named presets, and validation.
//!
//! A [`FieldConfig`] always starts from a [`Preset`]. Hosts may pass a JSON
//! document naming a preset and overriding individual fields; the result is
//! validated before an engine is built from it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::{
    CONSTELLATION_DENSITY_DIVISOR, CONSTELLATION_MAX_PARTICLES, DEFAULT_HEIGHT_FRACTION, DEFAULT_PALETTE,
    LINK_DISTANCE_PX, MAX_PARTICLES_LIMIT, POINTER_RADIUS_PX, POINTER_STRENGTH_PX, RISING_DENSITY_DIVISOR, RISING_MAX_PARTICLES,
};
use crate::error::FieldError;

/// Named starting points for a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Drifting particles joined by proximity links and pulled by the pointer.
    #[default]
    Constellation,
    /// Particles rising at constant speed and re-entering from the bottom.
    Rising,
}

/// How particles move each frame and where they re-enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motion {
    /// Heading drifts by a per-particle increment; upward bias; random-edge re-entry.
    Drift,
    /// Straight up at constant speed; re-entry at the bottom edge.
    Rise,
}

/// How the surface is prepared before particles are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// Translucent fill that leaves short motion trails.
    Fade,
    /// Hard clear to transparent.
    Clear,
}

/// Pointer attraction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPull {
    /// Capture radius in pixels.
    pub radius: f64,
    /// Pull in pixels per frame at zero distance, falling linearly to zero at `radius`.
    pub strength: f64,
}

/// Validated configuration for a particle field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Surface pixels per particle along the longer axis.
    pub density_divisor: f64,
    /// Upper bound on the population, at most [`MAX_PARTICLES_LIMIT`].
    pub max_particles: usize,
    pub motion: Motion,
    /// Link threshold in pixels; `None` disables links.
    pub link_distance: Option<f64>,
    /// `None` disables pointer interaction.
    pub pointer: Option<PointerPull>,
    /// Draw a radial glow around each disc.
    pub glow: bool,
    pub background: Background,
    /// Share of the window height the surface covers, in `(0, 1]`.
    pub height_fraction: f64,
    pub palette: Vec<Color>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl FieldConfig {
    /// Build the configuration for a named preset.
    #[must_use]
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Constellation => Self {
                density_divisor: CONSTELLATION_DENSITY_DIVISOR,
                max_particles: CONSTELLATION_MAX_PARTICLES,
                motion: Motion::Drift,
                link_distance: Some(LINK_DISTANCE_PX),
                pointer: Some(PointerPull { radius: POINTER_RADIUS_PX, strength: POINTER_STRENGTH_PX }),
                glow: true,
                background: Background::Fade,
                height_fraction: DEFAULT_HEIGHT_FRACTION,
                palette: default_palette(),
            },
            Preset::Rising => Self {
                density_divisor: RISING_DENSITY_DIVISOR,
                max_particles: RISING_MAX_PARTICLES,
                motion: Motion::Rise,
                link_distance: None,
                pointer: None,
                glow: false,
                background: Background::Clear,
                height_fraction: DEFAULT_HEIGHT_FRACTION,
                palette: default_palette(),
            },
        }
    }

    /// Parse a JSON override document and validate the result.
    ///
    /// The document may name a `preset` and override any field of it, e.g.
    /// `{"preset": "rising", "max_particles": 60}`. An empty object yields
    /// the default preset.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ConfigParse`] for malformed JSON or unknown
    /// fields, and the [`FieldConfig::validate`] errors otherwise.
    pub fn from_json(raw: &str) -> Result<Self, FieldError> {
        let overrides: ConfigOverrides = serde_json::from_str(raw)?;
        let config = overrides.apply();
        config.validate()?;
        Ok(config)
    }

    /// Check every tunable against its valid range.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), FieldError> {
        positive("density_divisor", self.density_divisor)?;
        if self.max_particles > MAX_PARTICLES_LIMIT {
            return Err(FieldError::TooManyParticles { value: self.max_particles, limit: MAX_PARTICLES_LIMIT });
        }
        if let Some(distance) = self.link_distance {
            positive("link_distance", distance)?;
        }
        if let Some(pull) = self.pointer {
            positive("pointer.radius", pull.radius)?;
            if !(pull.strength.is_finite() && pull.strength >= 0.0) {
                return Err(FieldError::OutOfRange {
                    field: "pointer.strength",
                    value: pull.strength,
                    expected: "finite and >= 0",
                });
            }
        }
        if !(self.height_fraction > 0.0 && self.height_fraction <= 1.0) {
            return Err(FieldError::OutOfRange {
                field: "height_fraction",
                value: self.height_fraction,
                expected: "in (0, 1]",
            });
        }
        if self.palette.is_empty() {
            return Err(FieldError::EmptyPalette);
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), FieldError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FieldError::OutOfRange { field, value, expected: "finite and > 0" })
    }
}

fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE.to_vec()
}

/// Sparse overrides layered on top of a preset.
///
/// `link_distance` and `pointer` accept `null` to disable the feature, so they
/// are double-wrapped: absent keeps the preset value, `null` clears it.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigOverrides {
    preset: Preset,
    density_divisor: Option<f64>,
    max_particles: Option<usize>,
    motion: Option<Motion>,
    #[serde(deserialize_with = "explicit_null")]
    link_distance: Option<Option<f64>>,
    #[serde(deserialize_with = "explicit_null")]
    pointer: Option<Option<PointerPull>>,
    glow: Option<bool>,
    background: Option<Background>,
    height_fraction: Option<f64>,
    palette: Option<Vec<Color>>,
}

impl ConfigOverrides {
    fn apply(self) -> FieldConfig {
        let base = FieldConfig::preset(self.preset);
        FieldConfig {
            density_divisor: self.density_divisor.unwrap_or(base.density_divisor),
            max_particles: self.max_particles.unwrap_or(base.max_particles),
            motion: self.motion.unwrap_or(base.motion),
            link_distance: self.link_distance.unwrap_or(base.link_distance),
            pointer: self.pointer.unwrap_or(base.pointer),
            glow: self.glow.unwrap_or(base.glow),
            background: self.background.unwrap_or(base.background),
            height_fraction: self.height_fraction.unwrap_or(base.height_fraction),
            palette: self.palette.unwrap_or(base.palette),
        }
    }
}

fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
