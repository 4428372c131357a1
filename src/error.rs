//! Error types for the recoloring core.

use thiserror::Error;

/// Precondition failures raised by the color-mapping engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecolorError {
    /// A scheme identifier was not one of the recognized schemes.
    #[error("unknown color scheme: '{0}' (expected complementary, analogous, triadic or monochrome)")]
    InvalidScheme(String),

    /// The explicit palette cannot cover every unique color.
    #[error("palette does not have enough colors: {needed} needed, {available} available")]
    InsufficientPalette { needed: usize, available: usize },

    /// A persisted color map contained an unparsable key or value.
    #[error("malformed color map: {0}")]
    MalformedMap(String),

    /// A palette file line was not three comma-separated integers.
    #[error("malformed palette on line {line}: {reason}")]
    MalformedPalette { line: usize, reason: String },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, RecolorError>;
