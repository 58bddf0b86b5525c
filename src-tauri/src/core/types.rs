//! Request and result types for the resize pipeline.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::utils::{ValidationError, parse_dimension};

/// A width or height exactly as the frontend sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimensionInput {
    Number(f64),
    Text(String),
}

impl From<u32> for DimensionInput {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for DimensionInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Payload of the `image:resize` message.
///
/// There is deliberately no destination field: the output folder is always
/// computed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResizeInput {
    /// Path to the source image
    pub img_path: String,
    /// Target width, number or numeric string
    pub width: DimensionInput,
    /// Target height, number or numeric string
    pub height: DimensionInput,
}

/// Validated target size in pixels. Both sides are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn parse(width: &DimensionInput, height: &DimensionInput) -> Result<Self, ValidationError> {
        Ok(Self {
            width: parse_dimension("width", width)?,
            height: parse_dimension("height", height)?,
        })
    }
}

/// A fully-formed job, built from exactly one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeRequest {
    /// Image to read
    pub source_path: PathBuf,
    /// Output size
    pub dimensions: Dimensions,
    /// Folder the result is written into
    pub destination_dir: PathBuf,
}

/// What a successful job produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeOutcome {
    /// Path of the written file
    pub output_path: PathBuf,
    /// Dimensions of the written image
    pub dimensions: Dimensions,
    /// Size of the written file in bytes
    pub bytes_written: u64,
    /// Whether this job had to create the destination folder
    pub created_destination: bool,
}
