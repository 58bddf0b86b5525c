//! The resize pipeline.
//!
//! - [`JobIntake`]: accepts raw frontend input and spawns jobs.
//! - [`ResizeExecutor`]: performs one job and reports success.
//! - [`ImageCodec`]: the decode/resize/encode seam, implemented by [`ImageRsCodec`].

mod codec;
mod executor;
mod intake;
mod sink;

pub use codec::{ImageCodec, ImageRsCodec, MAX_OUTPUT_BYTES};
pub use executor::ResizeExecutor;
pub use intake::JobIntake;
pub use sink::{FolderOpener, NotificationSink};
