//! Frontend entry points.
//!
//! Jobs arrive either through the [`resize_image`] command or as an
//! `image:resize` event; both end up in [`JobIntake::submit`](crate::processing::JobIntake::submit).

mod resize;

pub use resize::*;

use tauri::{App, Listener, Manager};
use tracing::{debug, warn};
use crate::core::{AppState, RawResizeInput};

/// Event name the frontend may emit instead of invoking the command.
pub const RESIZE_EVENT: &str = "image:resize";

/// Routes `image:resize` events to the job intake.
pub fn listen_for_resize_events(app: &App) {
    let handle = app.handle().clone();
    app.listen_any(RESIZE_EVENT, move |event| {
        match serde_json::from_str::<RawResizeInput>(event.payload()) {
            Ok(input) => {
                debug!("Received {} event for {}", RESIZE_EVENT, input.img_path);
                // Detached; the outcome surfaces as `image:done` or a logged error.
                let _job = handle.state::<AppState>().intake().submit(input);
            }
            Err(e) => warn!("Ignoring malformed {} payload: {}", RESIZE_EVENT, e),
        }
    });
}
