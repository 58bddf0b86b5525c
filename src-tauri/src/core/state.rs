//! Application state management for Tauri.

use std::sync::Arc;
use tauri::AppHandle;
use tracing::debug;

use crate::core::PipelineConfig;
use crate::host::{ShellOpener, WindowNotifier};
use crate::processing::{ImageRsCodec, JobIntake, ResizeExecutor};

/// Label of the window that submits jobs and receives `image:done`.
pub const MAIN_WINDOW: &str = "main";

/// Application state managed by Tauri.
///
/// Holds the job intake wired to the Tauri notifier and folder opener.
#[derive(Clone)]
pub struct AppState {
    intake: JobIntake,
}

impl AppState {
    /// Wires the pipeline for the running app.
    pub fn new(app: AppHandle, config: PipelineConfig) -> Self {
        debug!("Output directory: {}", config.destination_dir().display());

        let executor = ResizeExecutor::new(
            Arc::new(ImageRsCodec::default()),
            Arc::new(WindowNotifier::new(app.clone(), MAIN_WINDOW)),
            Arc::new(ShellOpener::new(app)),
        );

        Self {
            intake: JobIntake::new(Arc::new(executor), config),
        }
    }

    pub fn intake(&self) -> &JobIntake {
        &self.intake
    }
}
