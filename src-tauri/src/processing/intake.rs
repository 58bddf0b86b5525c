//! Job intake: turns a raw frontend message into a [`ResizeRequest`] and hands
//! it to the executor.

use std::path::PathBuf;
use std::sync::Arc;
use tauri::async_runtime::{self, JoinHandle};
use tracing::{debug, error};

use crate::core::{Dimensions, PipelineConfig, RawResizeInput, ResizeOutcome, ResizeRequest};
use crate::utils::{ResizeResult, ValidationError};

use super::executor::ResizeExecutor;

/// Entry point for `image:resize` messages.
///
/// Cheap to clone; every clone shares the same executor.
#[derive(Clone)]
pub struct JobIntake {
    executor: Arc<ResizeExecutor>,
    config: PipelineConfig,
}

impl JobIntake {
    pub fn new(executor: Arc<ResizeExecutor>, config: PipelineConfig) -> Self {
        Self { executor, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Parses dimensions and attaches the fixed destination folder.
    ///
    /// The path is taken as-is; a bad path surfaces later as a read failure.
    pub fn prepare(&self, input: &RawResizeInput) -> Result<ResizeRequest, ValidationError> {
        Ok(ResizeRequest {
            source_path: PathBuf::from(&input.img_path),
            dimensions: Dimensions::parse(&input.width, &input.height)?,
            destination_dir: self.config.destination_dir().to_path_buf(),
        })
    }

    /// Prepares and executes one job, returning the typed outcome.
    pub async fn process(&self, input: RawResizeInput) -> ResizeResult<ResizeOutcome> {
        let request = self.prepare(&input)?;
        self.executor.execute(request).await
    }

    /// Fire-and-forget submission used by the frontend bridge.
    ///
    /// The job runs on the async runtime. Failures are logged and swallowed, so
    /// the frontend sees either `image:done` or nothing at all.
    pub fn submit(&self, input: RawResizeInput) -> JoinHandle<Option<ResizeOutcome>> {
        let intake = self.clone();
        async_runtime::spawn(async move { intake.run(input).await })
    }

    async fn run(&self, input: RawResizeInput) -> Option<ResizeOutcome> {
        let img_path = input.img_path.clone();
        debug!("Received resize request for '{}'", img_path);

        match self.process(input).await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!(kind = e.kind(), path = %img_path, "Resize job failed: {e}");
                None
            }
        }
    }
}
