//! Error types for configuration and icon handling.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Failure turning an image file into a tray icon.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("unsupported icon format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The platform refused to build an icon from prepared data.
    #[error("failed to create tray icon from {path}: {message}")]
    Platform { path: PathBuf, message: String },
}
