//! Error types for the stackshot averaging pipeline.
//!
//! Errors are organized by stage and carry the file path or condition
//! that caused them, so a failed run always names its culprit.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for stackshot operations.
#[derive(Error, Debug)]
pub enum StackshotError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline processing errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Input directory does not exist or is not a directory
    #[error("Input directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// Directory could not be read during discovery
    #[error("Failed to read directory {path}: {message}")]
    ReadDir { path: PathBuf, message: String },

    /// No qualifying image files were found. Averaging zero images
    /// is a division by zero, so it is rejected up front.
    #[error("No images found in {dir} (marker: {marker:?})")]
    NoImages { dir: PathBuf, marker: String },

    /// Mean requested from an accumulator with no images added
    #[error("Cannot average an empty accumulator")]
    EmptyAccumulator,

    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Image dimensions exceed the configured limit
    #[error("Image too large: {path} ({width}x{height} > {max_dim})")]
    ImageTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max_dim: u32,
    },

    /// A later image does not match the accumulator shape set by the
    /// first image
    #[error(
        "Dimension mismatch for {path}: expected {expected_width}x{expected_height}, \
         found {found_width}x{found_height}"
    )]
    DimensionMismatch {
        path: PathBuf,
        expected_width: u32,
        expected_height: u32,
        found_width: u32,
        found_height: u32,
    },

    /// Encoding or writing the result image failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },
}

/// Convenience type alias for stackshot results.
pub type Result<T> = std::result::Result<T, StackshotError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
