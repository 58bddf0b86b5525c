//! Presence status relay.
//!
//! Independent of the resize pipeline. Tab-change events for [`PRESENCE_ROOM`]
//! are turned into a short status (visited domain plus icon) and pushed to a
//! rich-presence client created once at startup.

mod activity;
mod relay;

pub use activity::{Activity, FALLBACK_ICON, TabChange, derive_activity};
pub use relay::{
    LoggingPresenceClient, PRESENCE_ROOM, PresenceClient, PresenceRelay, RoomEvent, TAB_CHANGED_EVENT,
};

use std::sync::Arc;
use tauri::{App, Listener};
use tokio::sync::mpsc;
use tracing::warn;

/// Global Tauri event carrying a serialized [`RoomEvent`].
pub const ROOM_EVENT: &str = "presence:room-event";

/// Client identifier handed to the presence client at startup.
pub const PRESENCE_CLIENT_ID: &str = "image-resizer-desktop";

const CHANNEL_CAPACITY: usize = 32;

/// Subscribes to [`ROOM_EVENT`] and runs the relay on the async runtime.
pub fn start(app: &App) {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

    app.listen_any(ROOM_EVENT, move |event| {
        match serde_json::from_str::<RoomEvent>(event.payload()) {
            Ok(room_event) => {
                if let Err(e) = tx.try_send(room_event) {
                    warn!("Presence event dropped: {}", e);
                }
            }
            Err(e) => warn!("Ignoring malformed {} payload: {}", ROOM_EVENT, e),
        }
    });

    let client = Arc::new(LoggingPresenceClient::connect(PRESENCE_CLIENT_ID));
    let relay = PresenceRelay::new(PRESENCE_ROOM, client);
    tauri::async_runtime::spawn(relay.run(rx));
}
