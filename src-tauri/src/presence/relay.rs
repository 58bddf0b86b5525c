//! Room subscription → presence client relay.

use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::activity::{Activity, TabChange, derive_activity};

/// Room whose events drive the presence status.
pub const PRESENCE_ROOM: &str = "image-resizer";

/// Event name for "active browser tab changed".
pub const TAB_CHANGED_EVENT: &str = "tab-changed";

/// One message from the subscribed event stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomEvent {
    pub room: String,
    pub name: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Remote rich-presence client.
#[async_trait]
pub trait PresenceClient: Send + Sync {
    async fn set_activity(&self, activity: &Activity) -> anyhow::Result<()>;
}

/// Client that records presence updates in the application log.
///
/// Stands in for a remote rich-presence SDK; one instance is created at
/// startup and reused for every update.
pub struct LoggingPresenceClient {
    client_id: String,
}

impl LoggingPresenceClient {
    pub fn connect(client_id: impl Into<String>) -> Self {
        let client_id = client_id.into();
        info!("Presence client ready ({client_id})");
        Self { client_id }
    }
}

#[async_trait]
impl PresenceClient for LoggingPresenceClient {
    async fn set_activity(&self, activity: &Activity) -> anyhow::Result<()> {
        info!(
            client = %self.client_id,
            state = %activity.state,
            image = %activity.large_image,
            "Presence updated"
        );
        Ok(())
    }
}

/// Turns tab-change events for one room into presence updates.
pub struct PresenceRelay {
    room: String,
    client: Arc<dyn PresenceClient>,
}

impl PresenceRelay {
    pub fn new(room: impl Into<String>, client: Arc<dyn PresenceClient>) -> Self {
        Self {
            room: room.into(),
            client,
        }
    }

    /// Extracts the tab change if `event` belongs to this relay.
    fn tab_change(&self, event: &RoomEvent) -> Option<TabChange> {
        if event.room != self.room || event.name != TAB_CHANGED_EVENT {
            return None;
        }
        match serde_json::from_value(event.payload.clone()) {
            Ok(tab) => Some(tab),
            Err(e) => {
                warn!("Dropping malformed {} payload: {}", TAB_CHANGED_EVENT, e);
                None
            }
        }
    }

    /// Handles one event. Returns the activity if it was pushed successfully.
    pub async fn handle(&self, event: &RoomEvent) -> Option<Activity> {
        let tab = self.tab_change(event)?;
        let activity = derive_activity(&tab);

        match self.client.set_activity(&activity).await {
            Ok(()) => Some(activity),
            Err(e) => {
                warn!("Presence update for {} dropped: {e:#}", activity.state);
                None
            }
        }
    }

    /// Consumes events until the sender side closes. Returns how many updates were pushed.
    pub async fn run(self, mut events: mpsc::Receiver<RoomEvent>) -> usize {
        let mut pushed = 0;
        while let Some(event) = events.recv().await {
            if self.handle(&event).await.is_some() {
                pushed += 1;
            }
        }
        debug!("Presence relay for room '{}' stopped after {} updates", self.room, pushed);
        pushed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use serde_json::json;
    use crate::presence::FALLBACK_ICON;

    #[derive(Default)]
    struct RecordingClient {
        pushed: Mutex<Vec<Activity>>,
        fail_for: Option<&'static str>,
    }

    #[async_trait]
    impl PresenceClient for RecordingClient {
        async fn set_activity(&self, activity: &Activity) -> anyhow::Result<()> {
            if self.fail_for == Some(activity.state.as_str()) {
                anyhow::bail!("rpc socket closed");
            }
            self.pushed.lock().unwrap().push(activity.clone());
            Ok(())
        }
    }

    fn event(room: &str, name: &str, url: &str) -> RoomEvent {
        RoomEvent {
            room: room.to_string(),
            name: name.to_string(),
            payload: json!({ "url": url }),
        }
    }

    #[tokio::test]
    async fn tab_changes_become_activities() {
        let client = Arc::new(RecordingClient::default());
        let relay = PresenceRelay::new(PRESENCE_ROOM, client.clone());

        let activity = relay
            .handle(&event(PRESENCE_ROOM, TAB_CHANGED_EVENT, "https://www.rust-lang.org/learn"))
            .await
            .unwrap();

        assert_eq!(activity.state, "rust-lang.org");
        assert_eq!(activity.large_image, FALLBACK_ICON);
        assert_eq!(client.pushed.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn other_rooms_and_events_are_ignored() {
        let client = Arc::new(RecordingClient::default());
        let relay = PresenceRelay::new(PRESENCE_ROOM, client.clone());

        assert!(relay.handle(&event("elsewhere", TAB_CHANGED_EVENT, "https://a.dev")).await.is_none());
        assert!(relay.handle(&event(PRESENCE_ROOM, "tab-closed", "https://a.dev")).await.is_none());

        let malformed = RoomEvent {
            room: PRESENCE_ROOM.to_string(),
            name: TAB_CHANGED_EVENT.to_string(),
            payload: json!({ "href": 3 }),
        };
        assert!(relay.handle(&malformed).await.is_none());
        assert!(client.pushed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn push_failures_are_dropped_and_the_relay_continues() {
        let client = Arc::new(RecordingClient {
            fail_for: Some("broken.dev"),
            ..RecordingClient::default()
        });
        let relay = PresenceRelay::new(PRESENCE_ROOM, client.clone());
        let (tx, rx) = mpsc::channel(8);

        for url in ["https://a.dev", "https://broken.dev", "https://b.dev"] {
            tx.send(event(PRESENCE_ROOM, TAB_CHANGED_EVENT, url)).await.unwrap();
        }
        drop(tx);

        let pushed = relay.run(rx).await;

        assert_eq!(pushed, 2);
        let states: Vec<_> = client
            .pushed
            .lock()
            .unwrap()
            .iter()
            .map(|a| a.state.clone())
            .collect();
        assert_eq!(states, ["a.dev", "b.dev"]);
    }

    #[tokio::test]
    async fn room_event_json_from_the_frontend_is_relayed() {
        let client = Arc::new(RecordingClient::default());
        let relay = PresenceRelay::new(PRESENCE_ROOM, client.clone());

        let wire = r#"{
            "room": "image-resizer",
            "name": "tab-changed",
            "payload": { "url": "https://www.github.com/rust-lang", "favIconUrl": "https://github.com/favicon.ico" }
        }"#;
        let room_event: RoomEvent = serde_json::from_str(wire).expect("room event parses");

        let activity = relay.handle(&room_event).await.expect("activity pushed");
        assert_eq!(activity.state, "github.com");
        assert_eq!(activity.large_image, "https://github.com/favicon.ico");
        assert_eq!(client.pushed.lock().unwrap().len(), 1);
    }
}
