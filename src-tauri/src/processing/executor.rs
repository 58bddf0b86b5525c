// src-tauri/src/processing/executor.rs

//! Resize executor: read → resize → ensure folder → write → notify → reveal.
//!
//! Every stage before the write shares one failure scope. The first error stops
//! the job, nothing is retried, and the frontend only ever hears about
//! successes. Codec work runs inside `tokio::task::spawn_blocking` so the async
//! runtime keeps accepting new submissions while a large image is resampled.
//!
//! Concurrent jobs are not serialized. Two jobs writing the same file name race
//! and the last write wins; the folder check-then-create tolerates losing the
//! race to another job.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::core::{Dimensions, ResizeOutcome, ResizeRequest};
use crate::utils::{CodecError, DirStatus, ResizeError, ResizeResult, ensure_dir, file_name};

use super::codec::ImageCodec;
use super::sink::{FolderOpener, NotificationSink};

/// Runs resize jobs and reports successes to the injected sinks.
pub struct ResizeExecutor {
    codec: Arc<dyn ImageCodec>,
    notifier: Arc<dyn NotificationSink>,
    opener: Arc<dyn FolderOpener>,
}

impl ResizeExecutor {
    pub fn new(
        codec: Arc<dyn ImageCodec>,
        notifier: Arc<dyn NotificationSink>,
        opener: Arc<dyn FolderOpener>,
    ) -> Self {
        Self { codec, notifier, opener }
    }

    /// Executes one job.
    ///
    /// On success the completion notification is sent and the destination
    /// folder revealed, in that order. Both are best effort: their failures are
    /// logged and do not turn the job into an error.
    pub async fn execute(&self, request: ResizeRequest) -> ResizeResult<ResizeOutcome> {
        let outcome = self.produce(&request).await?;

        info!(
            "Resized '{}' → '{}' ({}×{}, {} bytes)",
            request.source_path.display(),
            outcome.output_path.display(),
            outcome.dimensions.width,
            outcome.dimensions.height,
            outcome.bytes_written
        );

        self.announce(&request.destination_dir);
        Ok(outcome)
    }

    async fn produce(&self, request: &ResizeRequest) -> ResizeResult<ResizeOutcome> {
        let source = &request.source_path;

        let bytes = fs::read(source)
            .await
            .map_err(|e| ResizeError::source_read(source, e))?;
        debug!("Read {} bytes from '{}'", bytes.len(), source.display());

        let resized = self.resize_blocking(bytes, source.clone(), request.dimensions).await?;

        let filename = file_name(source).ok_or_else(|| {
            ResizeError::source_read(
                source,
                io::Error::new(io::ErrorKind::InvalidInput, "source path has no file name"),
            )
        })?;

        let dir = &request.destination_dir;
        let status = ensure_dir(dir)
            .await
            .map_err(|e| ResizeError::destination(dir, e))?;
        if status == DirStatus::Created {
            debug!("Created output directory '{}'", dir.display());
        }

        // Plain overwrite: a same-named file from an earlier job is replaced.
        let output_path = dir.join(filename);
        fs::write(&output_path, &resized)
            .await
            .map_err(|e| ResizeError::write(&output_path, e))?;

        Ok(ResizeOutcome {
            output_path,
            dimensions: request.dimensions,
            bytes_written: resized.len() as u64,
            created_destination: status == DirStatus::Created,
        })
    }

    async fn resize_blocking(
        &self,
        bytes: Vec<u8>,
        source: PathBuf,
        target: Dimensions,
    ) -> ResizeResult<Vec<u8>> {
        let codec = Arc::clone(&self.codec);
        let resized = tokio::task::spawn_blocking(move || codec.resize(&bytes, &source, target))
            .await
            // Only reachable when panics unwind; release builds abort.
            .map_err(|e| CodecError::Decode(format!("Codec task panicked: {e}")))??;
        Ok(resized)
    }

    fn announce(&self, dir: &Path) {
        if let Err(e) = self.notifier.notify_done() {
            warn!("Completion notification failed: {e:#}");
        }
        if let Err(e) = self.opener.reveal(dir) {
            warn!("Could not open '{}' in the file browser: {e:#}", dir.display());
        }
    }
}
