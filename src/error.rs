//! Error types for trueno-raster operations.
//!
//! Only construction and loading can fail. Drawing and geometry queries never
//! return errors: out-of-buffer coordinates are clipped and degenerate geometry
//! resolves to a sentinel result.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG decoding error.
    #[error("PNG decoding error: {0}")]
    PngDecoding(#[from] png::DecodingError),

    /// PNG layout that cannot be converted to BGRA.
    #[error("Unsupported PNG format: {0}")]
    UnsupportedPngFormat(String),

    /// Invalid dimensions for a framebuffer or texture.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Raw texture data does not match its declared dimensions.
    #[error("Texture data length mismatch: expected {expected} bytes, got {actual}")]
    TextureDataLength {
        /// Expected byte count (`width * height * 4`).
        expected: usize,
        /// Actual byte count.
        actual: usize,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}
