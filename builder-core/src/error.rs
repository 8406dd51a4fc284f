//! Error types for builder operations.
//!
//! Canvas mutations never fail: they are applied or ignored. These errors
//! cover the edges of the engine where text from a host is interpreted.

use thiserror::Error;

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Errors that can occur when interpreting host input.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Element kind name not in the palette.
    #[error("Unknown element kind: {0}")]
    UnknownElementKind(String),

    /// Preset name not in the preset library.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Viewport name not recognized.
    #[error("Unknown viewport: {0}")]
    UnknownViewport(String),

    /// Element reference could not be parsed.
    #[error("Invalid element reference: {0}")]
    InvalidElementRef(String),

    /// Configuration value out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
