//! Error types for the overlay pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort an overlay run.
///
/// Every failure is terminal: there are no retries and no partial outputs.
#[derive(Error, Debug)]
pub enum OverlayError {
    /// The annotation file is unreadable, not valid JSON, or missing a
    /// required field.
    #[error("Failed to load annotation {}: {reason}", .path.display())]
    MalformedRecord { path: PathBuf, reason: String },

    /// The tool config is unreadable, not valid JSON, or inconsistent.
    #[error("Failed to load config {}: {reason}", .path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    /// The source image could not be opened.
    #[error("Failed to open image {}: {source}", .path.display())]
    ImageOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The source image is not a decodable raster format.
    #[error("Failed to decode image {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The destination directory could not be created, or the encode/write
    /// step failed.
    #[error("Failed to write {}: {reason}", .path.display())]
    WriteFailed { path: PathBuf, reason: String },
}

/// Result type for overlay operations.
pub type Result<T> = std::result::Result<T, OverlayError>;
