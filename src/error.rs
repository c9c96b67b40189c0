//! Error types for the face overlay alignment library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input parameters provided (malformed matrix, bad dimensions)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Degenerate landmark bounding box (empty set, or no spread on an axis)
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    /// Overlay image has no opaque pixels or zero dimensions
    #[error("No effective center: overlay image is fully transparent or empty")]
    NoEffectiveCenter,

    /// Overlay image or pose data absent, or computed placement is degenerate
    #[error("No overlay data: {0}")]
    NoOverlayData(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding or encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Detection result fixture could not be parsed
    #[error("Fixture error: {0}")]
    Fixture(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
