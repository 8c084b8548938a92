//! Error types for toolchain detection.

use std::path::PathBuf;

/// Errors that can occur during toolchain detection.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The project path could not be resolved.
    #[error("invalid project path {path}: {source}")]
    InvalidPath {
        /// The path as given.
        path: PathBuf,
        /// Why it could not be resolved.
        source: std::io::Error,
    },

    /// Binary detection failed due to system error.
    #[error("binary detection error: {0}")]
    BinaryDetection(String),
}

/// A specialized Result type for toolchain detection.
pub type Result<T> = std::result::Result<T, Error>;
