//! Tauri command handlers for image resizing.

use tauri::State;
use tracing::debug;
use crate::core::{AppState, DimensionInput, RawResizeInput};

/// Submits one resize job and returns immediately.
///
/// The frontend calls this as `invoke('resize_image', { imgPath, width, height })`.
/// `width` and `height` may be numbers or numeric strings. The outcome is
/// reported only through the `image:done` event on success.
///
/// # Arguments
/// * `state` - Application state containing the job intake
/// * `img_path` - Path to the source image
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
#[tauri::command]
pub fn resize_image(
    state: State<'_, AppState>,
    img_path: String,
    width: DimensionInput,
    height: DimensionInput,
) {
    debug!("Received resize_image command for {}", img_path);
    // Detached; the outcome surfaces as `image:done` or a logged error.
    let _job = state.intake().submit(RawResizeInput {
        img_path,
        width,
        height,
    });
}
