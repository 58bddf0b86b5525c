//! Error types for the image resizer.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.
//! Every job-level failure ends up as a [`ResizeError`]; none of them are retried
//! and none of them are forwarded to the frontend.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Dimension parsing failures for loosely-typed frontend input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field was present but blank
    #[error("{field} is empty")]
    EmptyDimension { field: &'static str },
    /// Field could not be read as a number at all
    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },
    /// Field parsed but was zero or negative
    #[error("{field} must be greater than 0, got {value}")]
    NotPositive { field: &'static str, value: String },
    /// Field parsed but carried a fractional part
    #[error("{field} must be a whole number of pixels, got {value}")]
    NotAnInteger { field: &'static str, value: String },
    /// Field is larger than any image the codec can produce
    #[error("{field} is too large: {value}")]
    OutOfRange { field: &'static str, value: String },
}

/// Failures raised by the image codec.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Neither the content nor the extension identifies a supported format
    #[error("Unsupported image format")]
    UnknownFormat,
    /// The bytes could not be decoded
    #[error("Decode failed: {0}")]
    Decode(String),
    /// The resized pixels could not be encoded
    #[error("Encode failed: {0}")]
    Encode(String),
    /// Target dimensions rejected by the codec
    #[error("Invalid target dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Main error type for a single resize job.
#[derive(Error, Debug)]
pub enum ResizeError {
    /// Width or height did not survive parsing
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Source file missing or unreadable
    #[error("Cannot read source image {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Decode, resize or encode failed
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Output directory could not be created or accessed
    #[error("Cannot prepare output directory {}: {source}", .path.display())]
    Destination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output file could not be written
    #[error("Cannot write output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience result type for resize operations.
pub type ResizeResult<T> = Result<T, ResizeError>;

impl ResizeError {
    pub fn source_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceRead { path: path.into(), source }
    }

    pub fn destination(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Destination { path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }

    /// Taxonomy name, logged as the `kind` field of job failures.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::SourceRead { .. } => "SourceReadError",
            Self::Codec(_) => "CodecError",
            Self::Destination { .. } => "DestinationError",
            Self::Write { .. } => "WriteError",
        }
    }
}

impl From<image::ImageError> for CodecError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Unsupported(_) => Self::UnknownFormat,
            image::ImageError::Encoding(e) => Self::Encode(e.to_string()),
            other => Self::Decode(other.to_string()),
        }
    }
}

/// Startup configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot determine the current user's home directory")]
    HomeDirUnavailable,
}
