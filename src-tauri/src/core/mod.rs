//! Core application types and state management.
//!
//! This module contains the fundamental types used throughout the application:
//! - [`AppState`]: Application state managed by Tauri
//! - [`RawResizeInput`]: The untrusted `image:resize` payload
//! - [`ResizeRequest`]: A validated job
//! - [`PipelineConfig`]: Where results are written

mod config;
mod state;
mod types;

pub use config::{DESTINATION_FOLDER, PipelineConfig};
pub use state::{AppState, MAIN_WINDOW};
pub use types::{DimensionInput, Dimensions, RawResizeInput, ResizeOutcome, ResizeRequest};
