//! Capabilities the executor reports through once a job has succeeded.
//!
//! Both are handed to [`ResizeExecutor`](super::ResizeExecutor) at construction
//! instead of being looked up from a global window handle.

use std::path::Path;

/// Receives the payload-less completion signal for the frontend.
pub trait NotificationSink: Send + Sync {
    fn notify_done(&self) -> anyhow::Result<()>;
}

/// Shows a folder in the platform file browser.
pub trait FolderOpener: Send + Sync {
    fn reveal(&self, dir: &Path) -> anyhow::Result<()>;
}
