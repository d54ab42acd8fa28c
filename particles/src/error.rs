//! Error type for particle field configuration.

/// Why a [`crate::config::FieldConfig`] was rejected.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// The JSON override document could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A numeric tunable is outside its valid range.
    #[error("invalid {field}: {value} ({expected})")]
    OutOfRange { field: &'static str, value: f64, expected: &'static str },

    /// The population cap exceeds the hard ceiling.
    #[error("invalid max_particles: {value} (at most {limit})")]
    TooManyParticles { value: usize, limit: usize },

    /// The palette has no colors to pick from.
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// A palette entry is not a `#rrggbb` hex color.
    #[error("invalid color '{0}' (expected #rrggbb)")]
    InvalidColor(String),
}
