//! Tauri-backed implementations of the executor's reporting capabilities.

use std::path::Path;
use anyhow::Context;
use tauri::{AppHandle, Emitter};
use tauri_plugin_opener::OpenerExt;

use crate::processing::{FolderOpener, NotificationSink};

/// Event sent to the frontend after every successful job. Carries no payload.
pub const DONE_EVENT: &str = "image:done";

/// Emits [`DONE_EVENT`] to one webview window.
pub struct WindowNotifier {
    app: AppHandle,
    window_label: String,
}

impl WindowNotifier {
    pub fn new(app: AppHandle, window_label: impl Into<String>) -> Self {
        Self {
            app,
            window_label: window_label.into(),
        }
    }
}

impl NotificationSink for WindowNotifier {
    fn notify_done(&self) -> anyhow::Result<()> {
        self.app
            .emit_to(self.window_label.as_str(), DONE_EVENT, ())
            .with_context(|| format!("emit {DONE_EVENT} to '{}'", self.window_label))
    }
}

/// Opens folders through `tauri-plugin-opener`.
pub struct ShellOpener {
    app: AppHandle,
}

impl ShellOpener {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl FolderOpener for ShellOpener {
    fn reveal(&self, dir: &Path) -> anyhow::Result<()> {
        self.app
            .opener()
            .open_path(dir.to_string_lossy(), None::<&str>)
            .with_context(|| format!("open '{}'", dir.display()))
    }
}
